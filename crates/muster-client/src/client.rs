// ABOUTME: FleetClient facade over the FleetService gRPC stub
// ABOUTME: One remote call per method; responses projected to what callers need

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::{Stream, StreamExt};
use tonic::transport::Channel;

use muster_grpc::{create_channel, fanout, ChannelConfig, FanoutSubscription, DEFAULT_FANOUT_BUFFER};
use muster_proto::client::FleetServiceClient;
use muster_proto::{
    Authorization, CheckPermissionsRequest, CreateOrganizationInviteRequest,
    DeleteOrganizationInviteRequest, DeleteOrganizationMemberRequest, Fragment,
    GetFragmentRequest, GetLocationRequest, GetOrganizationRequest, GetRobotPartLogsRequest,
    GetRobotPartRequest, GetRobotPartsRequest, GetRobotRequest, ListAuthorizationsRequest,
    ListLocationsRequest, ListOrganizationMembersRequest, ListOrganizationMembersResponse,
    ListOrganizationsRequest, ListRobotsRequest, Location, LogEntry, NewRobotRequest,
    Organization, OrganizationInvite, ResendOrganizationInviteRequest, Robot, RobotPart,
    TailRobotPartLogsRequest, UpdateRobotPartRequest,
};

use crate::error::FleetError;
use crate::models::{LogPage, Permission};

/// Client facade for the fleet-management API.
///
/// Each method maps to exactly one remote call: build the request from its
/// arguments, invoke the RPC, project the response. No retries, no caching,
/// no pagination auto-walk; remote failures pass through unchanged.
#[derive(Debug, Clone)]
pub struct FleetClient {
    stub: FleetServiceClient<Channel>,
}

impl FleetClient {
    /// Connect to the fleet API with the given channel configuration.
    pub async fn connect(config: &ChannelConfig) -> Result<Self, FleetError> {
        let channel = create_channel(config).await?;
        tracing::debug!(address = %config.address, "fleet client connected");
        Ok(Self::new(channel))
    }

    /// Wrap an already-established channel.
    ///
    /// Authentication, if any, is the channel's concern; attach a tonic
    /// interceptor before handing the channel over.
    pub fn new(channel: Channel) -> Self {
        Self {
            stub: FleetServiceClient::new(channel),
        }
    }

    /// List all organizations visible to the caller, in server order.
    pub async fn list_organizations(&self) -> Result<Vec<Organization>, FleetError> {
        let response = self
            .stub
            .clone()
            .list_organizations(ListOrganizationsRequest {})
            .await?;
        Ok(response.into_inner().organizations)
    }

    /// Fetch a single organization by id.
    pub async fn get_organization(&self, organization_id: &str) -> Result<Organization, FleetError> {
        let response = self
            .stub
            .clone()
            .get_organization(GetOrganizationRequest {
                organization_id: organization_id.to_string(),
            })
            .await?;
        response
            .into_inner()
            .organization
            .ok_or_else(|| missing("GetOrganization", "organization"))
    }

    /// List the locations belonging to an organization.
    pub async fn list_locations(&self, organization_id: &str) -> Result<Vec<Location>, FleetError> {
        let response = self
            .stub
            .clone()
            .list_locations(ListLocationsRequest {
                organization_id: organization_id.to_string(),
            })
            .await?;
        Ok(response.into_inner().locations)
    }

    /// Fetch a single location by id.
    pub async fn get_location(&self, location_id: &str) -> Result<Location, FleetError> {
        let response = self
            .stub
            .clone()
            .get_location(GetLocationRequest {
                location_id: location_id.to_string(),
            })
            .await?;
        response
            .into_inner()
            .location
            .ok_or_else(|| missing("GetLocation", "location"))
    }

    /// List the robots at a location.
    pub async fn list_robots(&self, location_id: &str) -> Result<Vec<Robot>, FleetError> {
        let response = self
            .stub
            .clone()
            .list_robots(ListRobotsRequest {
                location_id: location_id.to_string(),
            })
            .await?;
        Ok(response.into_inner().robots)
    }

    /// Fetch a single robot by id.
    pub async fn get_robot(&self, robot_id: &str) -> Result<Robot, FleetError> {
        let response = self
            .stub
            .clone()
            .get_robot(GetRobotRequest {
                id: robot_id.to_string(),
            })
            .await?;
        response
            .into_inner()
            .robot
            .ok_or_else(|| missing("GetRobot", "robot"))
    }

    /// List the parts of a robot.
    pub async fn list_robot_parts(&self, robot_id: &str) -> Result<Vec<RobotPart>, FleetError> {
        let response = self
            .stub
            .clone()
            .get_robot_parts(GetRobotPartsRequest {
                robot_id: robot_id.to_string(),
            })
            .await?;
        Ok(response.into_inner().parts)
    }

    /// Fetch a single robot part by id.
    pub async fn get_robot_part(&self, part_id: &str) -> Result<RobotPart, FleetError> {
        let response = self
            .stub
            .clone()
            .get_robot_part(GetRobotPartRequest {
                id: part_id.to_string(),
            })
            .await?;
        response
            .into_inner()
            .part
            .ok_or_else(|| missing("GetRobotPart", "part"))
    }

    /// Rename a robot part and replace its configuration document.
    ///
    /// The config is an open document; see
    /// [`config_from_json`](crate::config_from_json) for building one from
    /// JSON. Returns the updated part as the server stored it.
    pub async fn update_robot_part(
        &self,
        part_id: &str,
        name: &str,
        robot_config: prost_types::Struct,
    ) -> Result<RobotPart, FleetError> {
        let response = self
            .stub
            .clone()
            .update_robot_part(UpdateRobotPartRequest {
                id: part_id.to_string(),
                name: name.to_string(),
                robot_config: Some(robot_config),
            })
            .await?;
        response
            .into_inner()
            .part
            .ok_or_else(|| missing("UpdateRobotPart", "part"))
    }

    /// Fetch one page of logs for a robot part, newest first.
    ///
    /// Pass an empty `page_token` for the first page and the returned
    /// `next_page_token` for the following ones.
    pub async fn get_robot_part_logs(
        &self,
        part_id: &str,
        errors_only: bool,
        page_token: &str,
    ) -> Result<LogPage, FleetError> {
        let response = self
            .stub
            .clone()
            .get_robot_part_logs(GetRobotPartLogsRequest {
                id: part_id.to_string(),
                errors_only,
                page_token: page_token.to_string(),
            })
            .await?;
        let response = response.into_inner();
        Ok(LogPage {
            logs: response.logs,
            next_page_token: response.next_page_token,
        })
    }

    /// Tail the logs of a robot part as a live, multi-subscriber stream.
    ///
    /// Opens the server stream once; additional subscribers attach through
    /// [`LogTail::subscribe`] without a new remote call. The underlying RPC
    /// is cancelled when the last subscriber is dropped.
    pub async fn tail_robot_part_logs(
        &self,
        part_id: &str,
        errors_only: bool,
    ) -> Result<LogTail, FleetError> {
        let response = self
            .stub
            .clone()
            .tail_robot_part_logs(TailRobotPartLogsRequest {
                id: part_id.to_string(),
                errors_only,
            })
            .await?;
        tracing::debug!(part_id, errors_only, "log tail stream opened");

        let batches = response.into_inner().map(|push| push.map(|p| p.logs));
        Ok(LogTail {
            inner: fanout(batches, DEFAULT_FANOUT_BUFFER),
        })
    }

    /// List authorization grants in an organization, optionally filtered to
    /// specific resources.
    pub async fn list_authorizations(
        &self,
        organization_id: &str,
        resource_ids: &[&str],
    ) -> Result<Vec<Authorization>, FleetError> {
        let response = self
            .stub
            .clone()
            .list_authorizations(ListAuthorizationsRequest {
                organization_id: organization_id.to_string(),
                resource_ids: resource_ids.iter().map(|id| id.to_string()).collect(),
            })
            .await?;
        Ok(response.into_inner().authorizations)
    }

    /// Ask which of the candidate permissions the caller holds on a resource.
    ///
    /// Returns the granted subset. A resource with no authorization record
    /// at all yields the empty vector, not an error. A permission code in
    /// the response that this client does not recognize is
    /// [`FleetError::UnknownPermission`].
    pub async fn check_permissions(
        &self,
        resource_type: &str,
        resource_id: &str,
        permissions: &[Permission],
    ) -> Result<Vec<Permission>, FleetError> {
        let response = self
            .stub
            .clone()
            .check_permissions(CheckPermissionsRequest {
                permissions: vec![muster_proto::AuthorizedPermissions {
                    resource_type: resource_type.to_string(),
                    resource_id: resource_id.to_string(),
                    permissions: permissions.iter().map(|p| p.as_code().to_string()).collect(),
                }],
            })
            .await?;

        // The server keys granted permissions by resource; we asked about
        // one, so only the first entry matters. No entry means none granted.
        match response.into_inner().authorized_permissions.into_iter().next() {
            Some(entry) => entry
                .permissions
                .iter()
                .map(|code| {
                    Permission::from_code(code)
                        .ok_or_else(|| FleetError::UnknownPermission(code.clone()))
                })
                .collect(),
            None => Ok(Vec::new()),
        }
    }

    /// List an organization's members along with its pending invites.
    pub async fn list_organization_members(
        &self,
        organization_id: &str,
    ) -> Result<ListOrganizationMembersResponse, FleetError> {
        let response = self
            .stub
            .clone()
            .list_organization_members(ListOrganizationMembersRequest {
                organization_id: organization_id.to_string(),
            })
            .await?;
        Ok(response.into_inner())
    }

    /// Invite an email address to an organization with the given grants.
    ///
    /// The email is not validated locally; the server rejects addresses that
    /// are malformed or already invited/members.
    pub async fn create_organization_invite(
        &self,
        organization_id: &str,
        email: &str,
        authorizations: Vec<Authorization>,
    ) -> Result<OrganizationInvite, FleetError> {
        let response = self
            .stub
            .clone()
            .create_organization_invite(CreateOrganizationInviteRequest {
                organization_id: organization_id.to_string(),
                email: email.to_string(),
                authorizations,
            })
            .await?;
        response
            .into_inner()
            .invite
            .ok_or_else(|| missing("CreateOrganizationInvite", "invite"))
    }

    /// Re-send a pending organization invite.
    pub async fn resend_organization_invite(
        &self,
        organization_id: &str,
        email: &str,
    ) -> Result<OrganizationInvite, FleetError> {
        let response = self
            .stub
            .clone()
            .resend_organization_invite(ResendOrganizationInviteRequest {
                organization_id: organization_id.to_string(),
                email: email.to_string(),
            })
            .await?;
        response
            .into_inner()
            .invite
            .ok_or_else(|| missing("ResendOrganizationInvite", "invite"))
    }

    /// Withdraw a pending organization invite.
    pub async fn delete_organization_invite(
        &self,
        organization_id: &str,
        email: &str,
    ) -> Result<(), FleetError> {
        self.stub
            .clone()
            .delete_organization_invite(DeleteOrganizationInviteRequest {
                organization_id: organization_id.to_string(),
                email: email.to_string(),
            })
            .await?;
        Ok(())
    }

    /// Remove a member from an organization.
    pub async fn delete_organization_member(
        &self,
        organization_id: &str,
        user_id: &str,
    ) -> Result<(), FleetError> {
        self.stub
            .clone()
            .delete_organization_member(DeleteOrganizationMemberRequest {
                organization_id: organization_id.to_string(),
                user_id: user_id.to_string(),
            })
            .await?;
        Ok(())
    }

    /// Create a robot at a location; returns the new robot's id.
    pub async fn new_robot(&self, name: &str, location_id: &str) -> Result<String, FleetError> {
        let response = self
            .stub
            .clone()
            .new_robot(NewRobotRequest {
                name: name.to_string(),
                location: location_id.to_string(),
            })
            .await?;
        Ok(response.into_inner().id)
    }

    /// Fetch a reusable configuration fragment by id.
    pub async fn get_fragment(&self, fragment_id: &str) -> Result<Fragment, FleetError> {
        let response = self
            .stub
            .clone()
            .get_fragment(GetFragmentRequest {
                id: fragment_id.to_string(),
            })
            .await?;
        response
            .into_inner()
            .fragment
            .ok_or_else(|| missing("GetFragment", "fragment"))
    }
}

fn missing(rpc: &str, field: &str) -> FleetError {
    FleetError::InvalidResponse(format!("{} response missing {}", rpc, field))
}

/// A live subscription to one robot part's log stream.
///
/// Yields batches of entries, newest first within each batch. All
/// subscriptions created from the same [`FleetClient::tail_robot_part_logs`]
/// call share a single upstream RPC; dropping the last one cancels it.
pub struct LogTail {
    inner: FanoutSubscription<Vec<LogEntry>>,
}

impl LogTail {
    /// Attach another subscriber to the same upstream stream.
    pub fn subscribe(&self) -> Self {
        Self {
            inner: self.inner.subscribe(),
        }
    }

    /// Number of live subscribers sharing the upstream stream.
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscriber_count()
    }

    /// Receive the next batch, or None once the stream has ended.
    pub async fn recv(&mut self) -> Option<Result<Vec<LogEntry>, FleetError>> {
        self.inner
            .recv()
            .await
            .map(|result| result.map_err(FleetError::from))
    }
}

impl Stream for LogTail {
    type Item = Result<Vec<LogEntry>, FleetError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.get_mut().inner)
            .poll_next(cx)
            .map(|opt| opt.map(|result| result.map_err(FleetError::from)))
    }
}
