//! # gRPC Client Library
//!
//! Channel creation and request interceptors shared by the Celestica clients.
//!
//! ## Features
//!
//! - **Channel Creation**: HTTP/2 and TCP tuning through [`ChannelConfig`]
//! - **Lazy Channels**: connect on the first RPC instead of at construction
//! - **Address Normalisation**: bare `host:port` addresses are dialled over plaintext HTTP/2
//! - **Interceptors**: request ids and W3C trace context for every outgoing call
//!
//! ## Quick Start
//!
//! ### Lazy Channel
//! ```ignore
//! use grpc_client::create_channel_lazy;
//! use rpc::vector_service::vector_service_client::VectorServiceClient;
//!
//! // Returns immediately, the connection is made on the first call
//! let channel = create_channel_lazy("127.0.0.1:50051")?;
//! let client = VectorServiceClient::new(channel);
//! ```
//!
//! ### With Interceptor and Custom Configuration
//! ```ignore
//! use grpc_client::{create_channel_with_config, ChannelConfig, TracingInterceptor};
//! use std::time::Duration;
//!
//! let config = ChannelConfig::default()
//!     .with_connect_timeout(Duration::from_secs(10))
//!     .with_request_timeout(Duration::from_secs(120));
//!
//! let channel = create_channel_with_config("http://[::1]:50051", config).await?;
//! let client = VectorServiceClient::with_interceptor(channel, TracingInterceptor::new());
//! ```

pub mod channel;
pub mod error;
pub mod interceptors;

// Re-export main types and functions for convenience
pub use channel::{
    ChannelConfig, KeepAlive, create_channel, create_channel_lazy,
    create_channel_lazy_with_config, create_channel_with_config, normalize_address,
};
pub use error::{GrpcError, GrpcResult};
pub use interceptors::TracingInterceptor;
