// ABOUTME: gRPC channel creation with keep-alive and TLS configuration.
// ABOUTME: Configurable channel builder for connections to the fleet API.

use std::time::Duration;
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};

use crate::error::GrpcClientError;

/// Configuration for gRPC channel keep-alive behavior.
#[derive(Debug, Clone)]
pub struct KeepAliveConfig {
    /// Interval between keep-alive pings when the connection is idle.
    pub interval: Duration,
    /// Timeout waiting for a keep-alive response before the connection is
    /// considered dead.
    pub timeout: Duration,
    /// Whether to send keep-alive pings even when no streams are active.
    pub while_idle: bool,
}

impl Default for KeepAliveConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(10),
            timeout: Duration::from_secs(20),
            while_idle: true,
        }
    }
}

/// Configuration for creating a gRPC channel to the fleet API.
#[derive(Debug, Clone)]
pub struct ChannelConfig {
    /// Server address (e.g. "https://app.example.com:443").
    pub address: String,
    /// Keep-alive configuration. If None, keep-alive is disabled.
    pub keep_alive: Option<KeepAliveConfig>,
    /// Connection timeout.
    pub connect_timeout: Option<Duration>,
    /// Enable TLS for the connection.
    pub use_tls: bool,
}

impl ChannelConfig {
    /// Create a channel config with default settings.
    /// Auto-detects TLS from the URL scheme (https:// enables TLS).
    pub fn new(address: impl Into<String>) -> Self {
        let addr = address.into().trim().to_string();
        let use_tls = addr.to_lowercase().starts_with("https://");
        Self {
            address: addr,
            keep_alive: Some(KeepAliveConfig::default()),
            connect_timeout: Some(Duration::from_secs(10)),
            use_tls,
        }
    }

    /// Normalize the scheme to match the TLS setting.
    fn normalize_scheme(addr: &str, use_tls: bool) -> String {
        let lower = addr.to_lowercase();
        if use_tls && lower.starts_with("http://") {
            format!("https://{}", &addr[7..])
        } else if !use_tls && lower.starts_with("https://") {
            format!("http://{}", &addr[8..])
        } else {
            addr.to_string()
        }
    }

    /// Disable keep-alive.
    pub fn without_keep_alive(mut self) -> Self {
        self.keep_alive = None;
        self
    }

    /// Set a custom keep-alive configuration.
    pub fn with_keep_alive(mut self, config: KeepAliveConfig) -> Self {
        self.keep_alive = Some(config);
        self
    }

    /// Set the connection timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Enable TLS, normalizing an http:// address to https://.
    pub fn with_tls(mut self) -> Self {
        self.use_tls = true;
        self.address = Self::normalize_scheme(&self.address, true);
        self
    }

    /// Disable TLS, normalizing an https:// address to http://.
    pub fn without_tls(mut self) -> Self {
        self.use_tls = false;
        self.address = Self::normalize_scheme(&self.address, false);
        self
    }
}

/// Create a gRPC channel with the specified configuration.
///
/// Keep-alive matters for the long-lived log-tailing stream: it detects dead
/// peers and prevents connection resets from load balancers.
pub async fn create_channel(config: &ChannelConfig) -> Result<Channel, GrpcClientError> {
    let mut endpoint = Endpoint::from_shared(config.address.clone())
        .map_err(|e| GrpcClientError::InvalidAddress(e.to_string()))?;

    if config.use_tls {
        endpoint = endpoint
            .tls_config(ClientTlsConfig::new())
            .map_err(|e| GrpcClientError::ConnectionFailed(format!("TLS config error: {}", e)))?;
    }

    if let Some(ka) = &config.keep_alive {
        endpoint = endpoint
            .http2_keep_alive_interval(ka.interval)
            .keep_alive_timeout(ka.timeout)
            .keep_alive_while_idle(ka.while_idle);
    }

    if let Some(timeout) = config.connect_timeout {
        endpoint = endpoint.connect_timeout(timeout);
    }

    let channel = endpoint
        .connect()
        .await
        .map_err(|e| GrpcClientError::ConnectionFailed(e.to_string()))?;

    tracing::debug!(
        address = %config.address,
        keep_alive = config.keep_alive.is_some(),
        use_tls = config.use_tls,
        "gRPC channel connected"
    );

    Ok(channel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = ChannelConfig::new("http://localhost:50051");
        assert_eq!(config.address, "http://localhost:50051");
        assert!(!config.use_tls);
        assert_eq!(config.connect_timeout, Some(Duration::from_secs(10)));

        let ka = config.keep_alive.unwrap();
        assert_eq!(ka.interval, Duration::from_secs(10));
        assert_eq!(ka.timeout, Duration::from_secs(20));
        assert!(ka.while_idle);
    }

    #[test]
    fn test_config_builders() {
        let config = ChannelConfig::new("http://localhost:50051")
            .with_connect_timeout(Duration::from_secs(3))
            .with_keep_alive(KeepAliveConfig {
                interval: Duration::from_secs(5),
                timeout: Duration::from_secs(10),
                while_idle: false,
            });

        assert_eq!(config.connect_timeout, Some(Duration::from_secs(3)));
        let ka = config.keep_alive.unwrap();
        assert_eq!(ka.interval, Duration::from_secs(5));
        assert!(!ka.while_idle);

        let config = ChannelConfig::new("http://localhost:50051").without_keep_alive();
        assert!(config.keep_alive.is_none());
    }

    #[test]
    fn test_tls_auto_detection() {
        assert!(!ChannelConfig::new("http://app.example.com").use_tls);
        assert!(ChannelConfig::new("https://app.example.com").use_tls);
        // Scheme matching is case-insensitive and tolerant of whitespace.
        assert!(ChannelConfig::new("HTTPS://app.example.com").use_tls);
        let config = ChannelConfig::new("  https://app.example.com  ");
        assert!(config.use_tls);
        assert_eq!(config.address, "https://app.example.com");
    }

    #[test]
    fn test_tls_builders_normalize_scheme() {
        let config = ChannelConfig::new("http://app.example.com:443/api").with_tls();
        assert!(config.use_tls);
        assert_eq!(config.address, "https://app.example.com:443/api");

        let config = ChannelConfig::new("https://localhost:50051").without_tls();
        assert!(!config.use_tls);
        assert_eq!(config.address, "http://localhost:50051");
    }

    #[tokio::test]
    async fn test_create_channel_invalid_address() {
        let config = ChannelConfig::new("");
        let result = create_channel(&config).await;
        let err = result.unwrap_err();
        assert!(
            matches!(
                err,
                GrpcClientError::InvalidAddress(_) | GrpcClientError::ConnectionFailed(_)
            ),
            "expected InvalidAddress or ConnectionFailed, got {:?}",
            err
        );
    }

    #[tokio::test]
    async fn test_create_channel_connection_refused() {
        let config = ChannelConfig::new("http://127.0.0.1:1")
            .with_connect_timeout(Duration::from_millis(100));
        let result = create_channel(&config).await;
        assert!(matches!(
            result.unwrap_err(),
            GrpcClientError::ConnectionFailed(_)
        ));
    }
}
