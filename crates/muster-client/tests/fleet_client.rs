// ABOUTME: Integration tests for FleetClient against an in-process FleetService
// ABOUTME: Covers request/response projection, error pass-through, and log tailing

use std::collections::HashMap;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use std::time::Duration;

use futures::Stream;
use tokio::sync::mpsc;
use tokio_stream::wrappers::{TcpListenerStream, UnboundedReceiverStream};
use tonic::{Request, Response, Status};

use muster_client::{config_from_json, config_to_json, FleetClient, FleetError, Permission};
use muster_grpc::ChannelConfig;
use muster_proto::server::{FleetService, FleetServiceServer};
use muster_proto::*;

type TailItem = Result<TailRobotPartLogsResponse, Status>;

/// Counts drops of the server-side tail stream, so tests can observe the
/// upstream RPC being cancelled.
struct DropProbe<S> {
    inner: S,
    drops: Arc<AtomicUsize>,
}

impl<S: Stream + Unpin> Stream for DropProbe<S> {
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.get_mut().inner).poll_next(cx)
    }
}

impl<S> Drop for DropProbe<S> {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}

fn ts(seconds: i64) -> prost_types::Timestamp {
    prost_types::Timestamp { seconds, nanos: 0 }
}

fn seeded_parts() -> HashMap<String, RobotPart> {
    let mut parts = HashMap::new();
    parts.insert(
        "part-1".to_string(),
        RobotPart {
            id: "part-1".to_string(),
            name: "arm".to_string(),
            robot_id: "robot-1".to_string(),
            main_part: true,
            robot_config: None,
            created_on: Some(ts(100)),
            last_updated: Some(ts(100)),
        },
    );
    parts.insert(
        "part-2".to_string(),
        RobotPart {
            id: "part-2".to_string(),
            name: "gripper".to_string(),
            robot_id: "robot-1".to_string(),
            main_part: false,
            robot_config: None,
            created_on: Some(ts(110)),
            last_updated: Some(ts(110)),
        },
    );
    parts
}

fn seeded_logs() -> Vec<LogEntry> {
    // Newest first, the order the server hands pages back in.
    vec![
        LogEntry {
            host: "part-1".to_string(),
            level: "error".to_string(),
            time: Some(ts(300)),
            logger_name: "motor".to_string(),
            message: "stall detected".to_string(),
            stack: String::new(),
        },
        LogEntry {
            host: "part-1".to_string(),
            level: "info".to_string(),
            time: Some(ts(200)),
            logger_name: "motor".to_string(),
            message: "spinning up".to_string(),
            stack: String::new(),
        },
        LogEntry {
            host: "part-1".to_string(),
            level: "info".to_string(),
            time: Some(ts(100)),
            logger_name: "boot".to_string(),
            message: "part online".to_string(),
            stack: String::new(),
        },
    ]
}

/// In-process FleetService with a small fixed fleet.
///
/// `parts` is mutable so update-then-get round-trips work; the tail stream is
/// fed by the test through `tail_feed` for deterministic delivery.
struct MockFleet {
    parts: Mutex<HashMap<String, RobotPart>>,
    granted: Option<Vec<String>>,
    tail_opens: Arc<AtomicUsize>,
    tail_feed: Mutex<Option<mpsc::UnboundedReceiver<TailItem>>>,
    tail_drops: Arc<AtomicUsize>,
}

impl MockFleet {
    fn new() -> Self {
        Self {
            parts: Mutex::new(seeded_parts()),
            granted: None,
            tail_opens: Arc::new(AtomicUsize::new(0)),
            tail_feed: Mutex::new(None),
            tail_drops: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn with_granted(codes: &[&str]) -> Self {
        Self {
            granted: Some(codes.iter().map(|c| c.to_string()).collect()),
            ..Self::new()
        }
    }

    fn with_tail_feed(rx: mpsc::UnboundedReceiver<TailItem>) -> Self {
        Self {
            tail_feed: Mutex::new(Some(rx)),
            ..Self::new()
        }
    }
}

#[tonic::async_trait]
impl FleetService for MockFleet {
    async fn list_organizations(
        &self,
        _request: Request<ListOrganizationsRequest>,
    ) -> Result<Response<ListOrganizationsResponse>, Status> {
        Ok(Response::new(ListOrganizationsResponse {
            organizations: vec![Organization {
                id: "org-1".to_string(),
                name: "Acme Robotics".to_string(),
                created_on: Some(ts(1)),
                public_namespace: "acme".to_string(),
            }],
        }))
    }

    async fn get_organization(
        &self,
        request: Request<GetOrganizationRequest>,
    ) -> Result<Response<GetOrganizationResponse>, Status> {
        if request.into_inner().organization_id != "org-1" {
            return Err(Status::not_found("no such organization"));
        }
        Ok(Response::new(GetOrganizationResponse {
            organization: Some(Organization {
                id: "org-1".to_string(),
                name: "Acme Robotics".to_string(),
                created_on: Some(ts(1)),
                public_namespace: "acme".to_string(),
            }),
        }))
    }

    async fn list_locations(
        &self,
        request: Request<ListLocationsRequest>,
    ) -> Result<Response<ListLocationsResponse>, Status> {
        let organization_id = request.into_inner().organization_id;
        Ok(Response::new(ListLocationsResponse {
            locations: vec![Location {
                id: "loc-1".to_string(),
                name: "Warehouse".to_string(),
                organization_id,
                created_on: Some(ts(2)),
            }],
        }))
    }

    async fn get_location(
        &self,
        request: Request<GetLocationRequest>,
    ) -> Result<Response<GetLocationResponse>, Status> {
        let location_id = request.into_inner().location_id;
        Ok(Response::new(GetLocationResponse {
            location: Some(Location {
                id: location_id,
                name: "Warehouse".to_string(),
                organization_id: "org-1".to_string(),
                created_on: Some(ts(2)),
            }),
        }))
    }

    async fn list_robots(
        &self,
        request: Request<ListRobotsRequest>,
    ) -> Result<Response<ListRobotsResponse>, Status> {
        let location_id = request.into_inner().location_id;
        Ok(Response::new(ListRobotsResponse {
            robots: vec![Robot {
                id: "robot-1".to_string(),
                name: "forklift".to_string(),
                location_id,
                created_on: Some(ts(3)),
                last_access: Some(ts(400)),
            }],
        }))
    }

    async fn get_robot(
        &self,
        request: Request<GetRobotRequest>,
    ) -> Result<Response<GetRobotResponse>, Status> {
        let id = request.into_inner().id;
        Ok(Response::new(GetRobotResponse {
            robot: Some(Robot {
                id,
                name: "forklift".to_string(),
                location_id: "loc-1".to_string(),
                created_on: Some(ts(3)),
                last_access: Some(ts(400)),
            }),
        }))
    }

    async fn get_robot_parts(
        &self,
        request: Request<GetRobotPartsRequest>,
    ) -> Result<Response<GetRobotPartsResponse>, Status> {
        let robot_id = request.into_inner().robot_id;
        let mut parts: Vec<RobotPart> = self
            .parts
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.robot_id == robot_id)
            .cloned()
            .collect();
        parts.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(Response::new(GetRobotPartsResponse { parts }))
    }

    async fn get_robot_part(
        &self,
        request: Request<GetRobotPartRequest>,
    ) -> Result<Response<GetRobotPartResponse>, Status> {
        let id = request.into_inner().id;
        let part = self.parts.lock().unwrap().get(&id).cloned();
        match part {
            Some(part) => Ok(Response::new(GetRobotPartResponse { part: Some(part) })),
            None => Err(Status::not_found("no such part")),
        }
    }

    async fn update_robot_part(
        &self,
        request: Request<UpdateRobotPartRequest>,
    ) -> Result<Response<UpdateRobotPartResponse>, Status> {
        let req = request.into_inner();
        let mut parts = self.parts.lock().unwrap();
        let part = parts
            .get_mut(&req.id)
            .ok_or_else(|| Status::not_found("no such part"))?;
        part.name = req.name;
        part.robot_config = req.robot_config;
        part.last_updated = Some(ts(500));
        Ok(Response::new(UpdateRobotPartResponse {
            part: Some(part.clone()),
        }))
    }

    async fn get_robot_part_logs(
        &self,
        request: Request<GetRobotPartLogsRequest>,
    ) -> Result<Response<GetRobotPartLogsResponse>, Status> {
        let req = request.into_inner();
        let mut logs = seeded_logs();
        if req.errors_only {
            logs.retain(|l| l.level == "error");
        }
        // Two-page fixture: the first page hands out a token, the second
        // is empty and final.
        let (logs, next_page_token) = match req.page_token.as_str() {
            "" => (logs, "page-2".to_string()),
            "page-2" => (Vec::new(), String::new()),
            other => return Err(Status::invalid_argument(format!("bad token {other}"))),
        };
        Ok(Response::new(GetRobotPartLogsResponse {
            logs,
            next_page_token,
        }))
    }

    type TailRobotPartLogsStream = Pin<Box<dyn Stream<Item = TailItem> + Send>>;

    async fn tail_robot_part_logs(
        &self,
        _request: Request<TailRobotPartLogsRequest>,
    ) -> Result<Response<Self::TailRobotPartLogsStream>, Status> {
        self.tail_opens.fetch_add(1, Ordering::SeqCst);
        let rx = self
            .tail_feed
            .lock()
            .unwrap()
            .take()
            .ok_or_else(|| Status::failed_precondition("tail feed already taken"))?;
        let stream = DropProbe {
            inner: UnboundedReceiverStream::new(rx),
            drops: self.tail_drops.clone(),
        };
        Ok(Response::new(Box::pin(stream)))
    }

    async fn list_authorizations(
        &self,
        request: Request<ListAuthorizationsRequest>,
    ) -> Result<Response<ListAuthorizationsResponse>, Status> {
        let req = request.into_inner();
        let all = vec![Authorization {
            authorization_type: "role".to_string(),
            authorization_id: "auth-1".to_string(),
            resource_type: "robot".to_string(),
            resource_id: "robot-1".to_string(),
            identity_id: "user-1".to_string(),
            organization_id: req.organization_id,
            identity_type: "user".to_string(),
        }];
        let authorizations = if req.resource_ids.is_empty() {
            all
        } else {
            all.into_iter()
                .filter(|a| req.resource_ids.contains(&a.resource_id))
                .collect()
        };
        Ok(Response::new(ListAuthorizationsResponse { authorizations }))
    }

    async fn check_permissions(
        &self,
        request: Request<CheckPermissionsRequest>,
    ) -> Result<Response<CheckPermissionsResponse>, Status> {
        let asked = request
            .into_inner()
            .permissions
            .into_iter()
            .next()
            .ok_or_else(|| Status::invalid_argument("no permissions asked"))?;
        let authorized_permissions = match &self.granted {
            Some(codes) => vec![AuthorizedPermissions {
                resource_type: asked.resource_type,
                resource_id: asked.resource_id,
                permissions: codes.clone(),
            }],
            None => Vec::new(),
        };
        Ok(Response::new(CheckPermissionsResponse {
            authorized_permissions,
        }))
    }

    async fn list_organization_members(
        &self,
        request: Request<ListOrganizationMembersRequest>,
    ) -> Result<Response<ListOrganizationMembersResponse>, Status> {
        let organization_id = request.into_inner().organization_id;
        Ok(Response::new(ListOrganizationMembersResponse {
            organization_id,
            members: vec![OrganizationMember {
                user_id: "user-1".to_string(),
                emails: vec!["owner@acme.test".to_string()],
                date_added: Some(ts(5)),
                last_login: Some(ts(600)),
            }],
            invites: vec![OrganizationInvite {
                organization_id: "org-1".to_string(),
                email: "pending@acme.test".to_string(),
                created_on: Some(ts(6)),
                authorizations: vec![],
            }],
        }))
    }

    async fn create_organization_invite(
        &self,
        request: Request<CreateOrganizationInviteRequest>,
    ) -> Result<Response<CreateOrganizationInviteResponse>, Status> {
        let req = request.into_inner();
        if req.email == "pending@acme.test" {
            return Err(Status::already_exists("invite already sent"));
        }
        Ok(Response::new(CreateOrganizationInviteResponse {
            invite: Some(OrganizationInvite {
                organization_id: req.organization_id,
                email: req.email,
                created_on: Some(ts(7)),
                authorizations: req.authorizations,
            }),
        }))
    }

    async fn resend_organization_invite(
        &self,
        request: Request<ResendOrganizationInviteRequest>,
    ) -> Result<Response<ResendOrganizationInviteResponse>, Status> {
        let req = request.into_inner();
        Ok(Response::new(ResendOrganizationInviteResponse {
            invite: Some(OrganizationInvite {
                organization_id: req.organization_id,
                email: req.email,
                created_on: Some(ts(6)),
                authorizations: vec![],
            }),
        }))
    }

    async fn delete_organization_invite(
        &self,
        _request: Request<DeleteOrganizationInviteRequest>,
    ) -> Result<Response<DeleteOrganizationInviteResponse>, Status> {
        Ok(Response::new(DeleteOrganizationInviteResponse {}))
    }

    async fn delete_organization_member(
        &self,
        _request: Request<DeleteOrganizationMemberRequest>,
    ) -> Result<Response<DeleteOrganizationMemberResponse>, Status> {
        Ok(Response::new(DeleteOrganizationMemberResponse {}))
    }

    async fn new_robot(
        &self,
        request: Request<NewRobotRequest>,
    ) -> Result<Response<NewRobotResponse>, Status> {
        let req = request.into_inner();
        Ok(Response::new(NewRobotResponse {
            id: format!("robot-{}-{}", req.location, req.name),
        }))
    }

    async fn get_fragment(
        &self,
        request: Request<GetFragmentRequest>,
    ) -> Result<Response<GetFragmentResponse>, Status> {
        let id = request.into_inner().id;
        Ok(Response::new(GetFragmentResponse {
            fragment: Some(Fragment {
                id,
                name: "base-config".to_string(),
                fragment: config_from_json(serde_json::json!({"shared": true})),
                organization_owner: "org-1".to_string(),
                public: true,
                created_on: Some(ts(8)),
            }),
        }))
    }
}

/// Serve the mock on an ephemeral port and return a connected client.
async fn start(mock: MockFleet) -> FleetClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        tonic::transport::Server::builder()
            .add_service(FleetServiceServer::new(mock))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    FleetClient::connect(&ChannelConfig::new(format!("http://{addr}")).without_keep_alive())
        .await
        .unwrap()
}

/// Wait until `counter` reaches `expected`, or panic after a few seconds.
async fn wait_for(counter: &AtomicUsize, expected: usize) {
    for _ in 0..200 {
        if counter.load(Ordering::SeqCst) == expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
    panic!(
        "counter stuck at {} (wanted {expected})",
        counter.load(Ordering::SeqCst)
    );
}

#[tokio::test]
async fn walks_the_fleet_hierarchy() {
    let client = start(MockFleet::new()).await;

    let orgs = client.list_organizations().await.unwrap();
    assert_eq!(orgs.len(), 1);
    assert_eq!(orgs[0].name, "Acme Robotics");

    let org = client.get_organization(&orgs[0].id).await.unwrap();
    assert_eq!(org.id, "org-1");

    let locations = client.list_locations(&org.id).await.unwrap();
    assert_eq!(locations[0].organization_id, "org-1");

    let robots = client.list_robots(&locations[0].id).await.unwrap();
    assert_eq!(robots[0].name, "forklift");

    let parts = client.list_robot_parts(&robots[0].id).await.unwrap();
    assert_eq!(parts.len(), 2);
    assert!(parts[0].main_part);
    assert_eq!(parts[1].name, "gripper");
}

#[tokio::test]
async fn remote_errors_pass_through_verbatim() {
    let client = start(MockFleet::new()).await;

    let err = client.get_organization("org-unknown").await.unwrap_err();
    match err {
        FleetError::Rpc(status) => {
            assert_eq!(status.code(), tonic::Code::NotFound);
            assert_eq!(status.message(), "no such organization");
        }
        other => panic!("expected Rpc pass-through, got {other:?}"),
    }
}

#[tokio::test]
async fn update_robot_part_round_trips() {
    let client = start(MockFleet::new()).await;

    let config = config_from_json(serde_json::json!({"max_rpm": 90.0})).unwrap();
    let updated = client
        .update_robot_part("part-2", "gripper-v2", config.clone())
        .await
        .unwrap();
    assert_eq!(updated.name, "gripper-v2");

    let fetched = client.get_robot_part("part-2").await.unwrap();
    assert_eq!(fetched.name, "gripper-v2");
    assert_eq!(
        config_to_json(fetched.robot_config.as_ref().unwrap()),
        serde_json::json!({"max_rpm": 90.0}),
    );
}

#[tokio::test]
async fn log_pages_preserve_order_and_token() {
    let client = start(MockFleet::new()).await;

    let page = client.get_robot_part_logs("part-1", false, "").await.unwrap();
    assert_eq!(page.logs.len(), 3);
    // Newest first, as the server sent them.
    assert_eq!(page.logs[0].message, "stall detected");
    assert_eq!(page.logs[2].message, "part online");
    assert_eq!(page.next_page_token, "page-2");

    let last = client
        .get_robot_part_logs("part-1", false, &page.next_page_token)
        .await
        .unwrap();
    assert!(last.logs.is_empty());
    assert!(last.next_page_token.is_empty());
}

#[tokio::test]
async fn errors_only_filters_the_page() {
    let client = start(MockFleet::new()).await;

    let page = client.get_robot_part_logs("part-1", true, "").await.unwrap();
    assert_eq!(page.logs.len(), 1);
    assert_eq!(page.logs[0].level, "error");
}

#[tokio::test]
async fn check_permissions_returns_granted_subset() {
    let client = start(MockFleet::with_granted(&["read_robot"])).await;

    let granted = client
        .check_permissions(
            "robot",
            "robot-1",
            &[Permission::ReadRobot, Permission::ControlRobot],
        )
        .await
        .unwrap();
    assert_eq!(granted, vec![Permission::ReadRobot]);
}

#[tokio::test]
async fn check_permissions_without_record_is_empty() {
    let client = start(MockFleet::new()).await;

    let granted = client
        .check_permissions("robot", "robot-unknown", &[Permission::ReadRobot])
        .await
        .unwrap();
    assert!(granted.is_empty());
}

#[tokio::test]
async fn check_permissions_rejects_unknown_code() {
    let client = start(MockFleet::with_granted(&["read_robot", "do_everything"])).await;

    let err = client
        .check_permissions("robot", "robot-1", &[Permission::ReadRobot])
        .await
        .unwrap_err();
    assert!(matches!(err, FleetError::UnknownPermission(code) if code == "do_everything"));
}

#[tokio::test]
async fn invite_conflict_surfaces_already_exists() {
    let client = start(MockFleet::new()).await;

    let err = client
        .create_organization_invite("org-1", "pending@acme.test", vec![])
        .await
        .unwrap_err();
    assert!(
        matches!(&err, FleetError::Rpc(status) if status.code() == tonic::Code::AlreadyExists)
    );

    let invite = client
        .create_organization_invite("org-1", "new@acme.test", vec![])
        .await
        .unwrap();
    assert_eq!(invite.email, "new@acme.test");
}

#[tokio::test]
async fn membership_and_invite_lifecycle() {
    let client = start(MockFleet::new()).await;

    let members = client.list_organization_members("org-1").await.unwrap();
    assert_eq!(members.members.len(), 1);
    assert_eq!(members.invites[0].email, "pending@acme.test");

    let resent = client
        .resend_organization_invite("org-1", "pending@acme.test")
        .await
        .unwrap();
    assert_eq!(resent.email, "pending@acme.test");

    client
        .delete_organization_invite("org-1", "pending@acme.test")
        .await
        .unwrap();
    client
        .delete_organization_member("org-1", "user-1")
        .await
        .unwrap();
}

#[tokio::test]
async fn new_robot_and_fragments() {
    let client = start(MockFleet::new()).await;

    let id = client.new_robot("palletizer", "loc-1").await.unwrap();
    assert_eq!(id, "robot-loc-1-palletizer");

    let fragment = client.get_fragment("frag-1").await.unwrap();
    assert_eq!(fragment.name, "base-config");
    assert!(fragment.public);

    let auths = client
        .list_authorizations("org-1", &["robot-1"])
        .await
        .unwrap();
    assert_eq!(auths.len(), 1);
    let none = client
        .list_authorizations("org-1", &["robot-9"])
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn tail_fans_out_one_rpc_to_many_subscribers() {
    let (tx, rx) = mpsc::unbounded_channel();
    let mock = MockFleet::with_tail_feed(rx);
    let opens = mock.tail_opens.clone();
    let client = start(mock).await;

    let mut first = client.tail_robot_part_logs("part-1", false).await.unwrap();
    let mut second = first.subscribe();
    assert_eq!(first.subscriber_count(), 2);

    tx.send(Ok(TailRobotPartLogsResponse {
        logs: vec![LogEntry {
            message: "live entry".to_string(),
            ..Default::default()
        }],
    }))
    .unwrap();

    let batch = first.recv().await.unwrap().unwrap();
    assert_eq!(batch[0].message, "live entry");
    let batch = second.recv().await.unwrap().unwrap();
    assert_eq!(batch[0].message, "live entry");

    // Both subscribers rode the same RPC.
    assert_eq!(opens.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn dropping_last_tail_subscriber_cancels_the_rpc() {
    let (tx, rx) = mpsc::unbounded_channel();
    let mock = MockFleet::with_tail_feed(rx);
    let drops = mock.tail_drops.clone();
    let client = start(mock).await;

    let mut first = client.tail_robot_part_logs("part-1", false).await.unwrap();
    let second = first.subscribe();

    // One subscriber leaving does not disturb the stream.
    drop(second);
    assert_eq!(first.subscriber_count(), 1);
    tx.send(Ok(TailRobotPartLogsResponse {
        logs: vec![LogEntry {
            message: "still here".to_string(),
            ..Default::default()
        }],
    }))
    .unwrap();
    let batch = first.recv().await.unwrap().unwrap();
    assert_eq!(batch[0].message, "still here");
    assert_eq!(drops.load(Ordering::SeqCst), 0);

    // The last one leaving tears the upstream stream down, exactly once.
    drop(first);
    wait_for(&drops, 1).await;
}

#[tokio::test]
async fn tail_ends_when_the_server_closes_the_stream() {
    let (tx, rx) = mpsc::unbounded_channel();
    let client = start(MockFleet::with_tail_feed(rx)).await;

    let mut tail = client.tail_robot_part_logs("part-1", false).await.unwrap();
    tx.send(Ok(TailRobotPartLogsResponse {
        logs: vec![LogEntry {
            message: "last words".to_string(),
            ..Default::default()
        }],
    }))
    .unwrap();
    drop(tx);

    let batch = tail.recv().await.unwrap().unwrap();
    assert_eq!(batch[0].message, "last words");
    assert!(tail.recv().await.is_none());
}
