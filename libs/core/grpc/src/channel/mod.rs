pub mod config;

pub use config::{ChannelConfig, KeepAlive};

use crate::error::{GrpcError, GrpcResult};
use tonic::transport::{Channel, Endpoint};

/// Turn a user-supplied address into a URI tonic can dial
///
/// Bare `host:port` addresses get an `http://` scheme (plaintext HTTP/2).
/// Addresses that already carry a scheme are left untouched.
///
/// ## Example
/// ```ignore
/// assert_eq!(normalize_address("localhost:50051"), "http://localhost:50051");
/// assert_eq!(normalize_address("https://vectors.internal"), "https://vectors.internal");
/// ```
pub fn normalize_address(addr: &str) -> String {
  let addr = addr.trim();
  if addr.is_empty() || addr.contains("://") {
    addr.to_string()
  } else {
    format!("http://{addr}")
  }
}

fn build_endpoint(addr: &str, config: ChannelConfig) -> GrpcResult<Endpoint> {
  config.validate()?;

  let uri = normalize_address(addr);
  let endpoint = Endpoint::from_shared(uri.clone()).map_err(|e| {
    tracing::error!(target: "grpc_client", addr = %uri, error = ?e, "Invalid URI");
    GrpcError::InvalidUri(e)
  })?;

  Ok(config.apply_to_endpoint(endpoint))
}

/// Creates a gRPC channel and waits for the connection to be established
///
/// ## Example
/// ```ignore
/// use grpc_client::create_channel;
/// use rpc::vector_service::vector_service_client::VectorServiceClient;
///
/// let channel = create_channel("http://[::1]:50051").await?;
/// let client = VectorServiceClient::new(channel);
/// ```
pub async fn create_channel(addr: impl Into<String>) -> GrpcResult<Channel> {
  create_channel_with_config(addr, ChannelConfig::default()).await
}

/// Creates a gRPC channel with custom configuration
pub async fn create_channel_with_config(
  addr: impl Into<String>,
  config: ChannelConfig,
) -> GrpcResult<Channel> {
  let addr_string = addr.into();
  let endpoint = build_endpoint(&addr_string, config)?;

  tracing::debug!(
        target: "grpc_client",
        addr = %addr_string,
        "Creating gRPC channel"
    );

  endpoint.connect().await.map_err(|e| {
    tracing::error!(
            target: "grpc_client",
            addr = %addr_string,
            error = ?e,
            "Failed to connect to gRPC service"
        );
    GrpcError::ConnectionFailed(e)
  })
}

/// Creates a lazy gRPC channel that connects on first request
///
/// Unlike `create_channel`, this function returns immediately without
/// establishing a connection. Connectivity problems surface as an
/// `Unavailable` status on the first RPC, and the transport reconnects
/// on its own after that.
///
/// Must be called from within a Tokio runtime.
///
/// ## Example
/// ```ignore
/// use grpc_client::create_channel_lazy;
/// use rpc::vector_service::vector_service_client::VectorServiceClient;
///
/// // Returns immediately, no connection attempt yet
/// let channel = create_channel_lazy("127.0.0.1:50051")?;
/// let mut client = VectorServiceClient::new(channel);
///
/// // Connection is established here on first RPC call
/// let response = client.search(request).await?;
/// ```
pub fn create_channel_lazy(addr: impl Into<String>) -> GrpcResult<Channel> {
  create_channel_lazy_with_config(addr, ChannelConfig::default())
}

/// Creates a lazy gRPC channel with custom configuration
pub fn create_channel_lazy_with_config(
  addr: impl Into<String>,
  config: ChannelConfig,
) -> GrpcResult<Channel> {
  let addr_string = addr.into();
  let endpoint = build_endpoint(&addr_string, config)?;

  tracing::debug!(
        target: "grpc_client",
        addr = %addr_string,
        "Creating lazy gRPC channel (connects on first request)"
    );

  Ok(endpoint.connect_lazy())
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::time::Duration;

  #[test]
  fn test_normalize_bare_address() {
    assert_eq!(normalize_address("localhost:50051"), "http://localhost:50051");
    assert_eq!(normalize_address("  127.0.0.1:50051 "), "http://127.0.0.1:50051");
  }

  #[test]
  fn test_normalize_keeps_scheme() {
    assert_eq!(normalize_address("http://[::1]:50051"), "http://[::1]:50051");
    assert_eq!(normalize_address("https://vectors.internal"), "https://vectors.internal");
  }

  #[test]
  fn test_invalid_uri() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let result = runtime.block_on(create_channel("not a valid uri"));
    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), GrpcError::InvalidUri(_)));
  }

  #[tokio::test]
  async fn test_lazy_invalid_uri() {
    let result = create_channel_lazy("not a valid uri");
    assert!(matches!(result, Err(GrpcError::InvalidUri(_))));
  }

  #[tokio::test]
  async fn test_lazy_channel_does_not_connect() {
    // Nothing listens on port 1, but a lazy channel must still be created
    let result = create_channel_lazy("127.0.0.1:1");
    assert!(result.is_ok());
  }

  #[tokio::test]
  async fn test_invalid_config_rejected_before_dialing() {
    let config = ChannelConfig::new().with_connect_timeout(Duration::ZERO);
    let result = create_channel_lazy_with_config("127.0.0.1:50051", config);
    assert!(matches!(result, Err(GrpcError::InvalidConfig(_))));
  }

  #[test]
  fn test_connection_failed() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let config = ChannelConfig::new().with_connect_timeout(Duration::from_millis(500));
    // Try to connect to a port that's definitely not listening
    let result = runtime.block_on(create_channel_with_config("127.0.0.1:1", config));
    assert!(matches!(result, Err(GrpcError::ConnectionFailed(_))));
  }
}
