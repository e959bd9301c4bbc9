// ABOUTME: Error types for the muster-grpc crate.
// ABOUTME: Structured errors for channel setup and stream plumbing.

use thiserror::Error;

/// Errors raised by the gRPC plumbing itself, before an RPC is in flight.
#[derive(Error, Debug)]
pub enum GrpcClientError {
    /// Invalid server address format.
    #[error("invalid server address: {0}")]
    InvalidAddress(String),

    /// Failed to establish a connection to the server.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Stream was closed unexpectedly.
    #[error("stream closed unexpectedly")]
    StreamClosed,

    /// Error on an open gRPC stream.
    #[error("stream error: {0}")]
    StreamError(String),
}

impl From<tonic::Status> for GrpcClientError {
    fn from(status: tonic::Status) -> Self {
        GrpcClientError::StreamError(status.to_string())
    }
}

impl From<tonic::transport::Error> for GrpcClientError {
    fn from(err: tonic::transport::Error) -> Self {
        GrpcClientError::ConnectionFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GrpcClientError::InvalidAddress("not a url".to_string());
        assert_eq!(err.to_string(), "invalid server address: not a url");

        let err = GrpcClientError::ConnectionFailed("refused".to_string());
        assert_eq!(err.to_string(), "connection failed: refused");

        let err = GrpcClientError::StreamClosed;
        assert!(err.to_string().contains("stream closed"));
    }

    #[test]
    fn test_from_tonic_status() {
        let status = tonic::Status::unavailable("server down");
        let err: GrpcClientError = status.into();
        assert!(matches!(err, GrpcClientError::StreamError(msg) if msg.contains("server down")));
    }

    #[tokio::test]
    async fn test_from_tonic_transport_error() {
        use tonic::transport::Endpoint;

        let endpoint = Endpoint::from_static("http://[::1]:1");
        if let Err(transport_err) = endpoint.connect().await {
            let grpc_err: GrpcClientError = transport_err.into();
            assert!(matches!(grpc_err, GrpcClientError::ConnectionFailed(_)));
        }
    }
}
