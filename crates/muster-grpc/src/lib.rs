// ABOUTME: Shared gRPC plumbing for the muster fleet client.
// ABOUTME: Provides channel creation, structured errors, and stream fan-out.

pub mod channel;
pub mod error;
pub mod fanout;

// Channel creation
pub use channel::{create_channel, ChannelConfig, KeepAliveConfig};

// Error types
pub use error::GrpcClientError;

// Stream fan-out
pub use fanout::{fanout, FanoutSubscription, DEFAULT_FANOUT_BUFFER};
