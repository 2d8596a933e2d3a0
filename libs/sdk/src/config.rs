use std::time::Duration;

use grpc_client::ChannelConfig;
use tonic::codec::CompressionEncoding;

/// Client configuration
///
/// The default applies the transport's own behaviour: no request deadline,
/// no compression and tonic's message size limits.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// HTTP/2 and TCP settings for the underlying channel
    pub channel: ChannelConfig,
    /// Compress requests and accept compressed responses (server must support it)
    pub compression: Option<CompressionEncoding>,
    /// Maximum size of a decoded response (tonic default: 4MB)
    pub max_decoding_message_size: Option<usize>,
    /// Maximum size of an encoded request (tonic default: unlimited)
    pub max_encoding_message_size: Option<usize>,
    /// Sent to the server as `x-source-service`
    pub service_name: Option<String>,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_channel(mut self, channel: ChannelConfig) -> Self {
        self.channel = channel;
        self
    }

    /// Apply a deadline to every call made by the client
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.channel = self.channel.with_request_timeout(timeout);
        self
    }

    pub fn with_compression(mut self, encoding: CompressionEncoding) -> Self {
        self.compression = Some(encoding);
        self
    }

    /// Compress with zstd (the server must accept it)
    pub fn with_zstd_compression(self) -> Self {
        self.with_compression(CompressionEncoding::Zstd)
    }

    /// Set the same limit for requests and responses
    ///
    /// Large search batches can exceed tonic's 4MB decoding default.
    pub fn with_max_message_size(mut self, size: usize) -> Self {
        self.max_decoding_message_size = Some(size);
        self.max_encoding_message_size = Some(size);
        self
    }

    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = Some(name.into());
        self
    }
}
