// ABOUTME: Error types for muster-client
// ABOUTME: Remote failures pass through verbatim; local failures get their own variants

use thiserror::Error;

/// Errors that can occur in fleet client operations.
///
/// Remote-call failures are surfaced as the original [`tonic::Status`] with
/// no reinterpretation; callers inspect the status code directly. The
/// remaining variants are local-only conditions.
#[derive(Debug, Error)]
pub enum FleetError {
    /// Failed to establish the channel to the fleet API.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The remote call failed; the server's status is passed through
    /// unchanged.
    #[error(transparent)]
    Rpc(#[from] tonic::Status),

    /// The response was missing a field the operation requires.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The server returned a permission code this client does not know.
    /// Indicates client/server enumeration drift, not an expected runtime
    /// case.
    #[error("unknown permission code from server: {0}")]
    UnknownPermission(String),
}

impl From<muster_grpc::GrpcClientError> for FleetError {
    fn from(err: muster_grpc::GrpcClientError) -> Self {
        FleetError::Connection(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rpc_errors_pass_through_with_code_and_message() {
        let status = tonic::Status::not_found("no such organization");
        let err: FleetError = status.into();
        match err {
            FleetError::Rpc(status) => {
                assert_eq!(status.code(), tonic::Code::NotFound);
                assert_eq!(status.message(), "no such organization");
            }
            other => panic!("expected Rpc, got {:?}", other),
        }
    }

    #[test]
    fn rpc_display_is_the_status_display() {
        let err = FleetError::from(tonic::Status::permission_denied("nope"));
        let status_display = tonic::Status::permission_denied("nope").to_string();
        assert_eq!(err.to_string(), status_display);
    }

    #[test]
    fn channel_errors_become_connection() {
        let grpc_err = muster_grpc::GrpcClientError::ConnectionFailed("refused".to_string());
        let err: FleetError = grpc_err.into();
        assert!(matches!(err, FleetError::Connection(msg) if msg.contains("refused")));
    }

    #[test]
    fn local_variants_display() {
        let err = FleetError::InvalidResponse("missing organization".to_string());
        assert!(err.to_string().contains("invalid response"));

        let err = FleetError::UnknownPermission("do_everything".to_string());
        assert!(err.to_string().contains("do_everything"));
    }
}
