use std::time::Duration;
use tonic::transport::Endpoint;

use crate::error::{GrpcError, GrpcResult};

/// HTTP/2 PING settings that keep an idle connection open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeepAlive {
  pub interval: Duration,
  pub timeout: Duration,
  /// Also ping while no call is in flight
  pub while_idle: bool,
}

impl Default for KeepAlive {
  fn default() -> Self {
    Self {
      interval: Duration::from_secs(30),
      timeout: Duration::from_secs(10),
      while_idle: true,
    }
  }
}

/// Transport settings for a vector service channel
///
/// The defaults keep tonic's behaviour for everything a caller would notice:
/// there is no per-request deadline, so a call runs until the server answers
/// or the connection drops. Only connection upkeep (keep-alive, nodelay,
/// flow-control windows) is tuned.
#[derive(Debug, Clone)]
pub struct ChannelConfig {
  pub connect_timeout: Duration,
  /// Deadline applied to every RPC on the channel, `None` for no deadline
  pub request_timeout: Option<Duration>,
  /// `None` disables HTTP/2 keep-alive
  pub keep_alive: Option<KeepAlive>,
  /// Initial connection and stream window, `None` leaves hyper's default
  pub window_size: Option<u32>,
  pub adaptive_window: bool,
  pub tcp_nodelay: bool,
  pub tcp_keepalive: Option<Duration>,
}

impl Default for ChannelConfig {
  fn default() -> Self {
    Self {
      connect_timeout: Duration::from_secs(5),
      request_timeout: None,
      keep_alive: Some(KeepAlive::default()),
      window_size: Some(1024 * 1024), // 1MB, room for a batch of large vectors
      adaptive_window: true,
      tcp_nodelay: true,
      tcp_keepalive: Some(Duration::from_secs(30)),
    }
  }
}

impl ChannelConfig {
  pub fn new() -> Self {
    Self::default()
  }

  /// How long to wait for the TCP + HTTP/2 handshake
  pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
    self.connect_timeout = timeout;
    self
  }

  /// Apply a deadline to every RPC made over the channel
  ///
  /// # Example
  /// ```ignore
  /// // Large inserts can take a while on a busy index
  /// let config = ChannelConfig::new().with_request_timeout(Duration::from_secs(120));
  /// ```
  pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
    self.request_timeout = Some(timeout);
    self
  }

  pub fn with_keep_alive(mut self, keep_alive: KeepAlive) -> Self {
    self.keep_alive = Some(keep_alive);
    self
  }

  pub fn without_keep_alive(mut self) -> Self {
    self.keep_alive = None;
    self
  }

  /// Set both the connection and the stream flow-control window
  pub fn with_window_size(mut self, size: u32) -> Self {
    self.window_size = Some(size);
    self
  }

  /// Reject settings tonic accepts but that can never produce a working channel
  pub fn validate(&self) -> GrpcResult<()> {
    let invalid = |msg: &str| Err(GrpcError::InvalidConfig(msg.to_string()));

    if self.connect_timeout.is_zero() {
      return invalid("connect timeout must be greater than zero");
    }
    if self.request_timeout.is_some_and(|t| t.is_zero()) {
      return invalid("request timeout must be greater than zero");
    }
    if self.window_size == Some(0) {
      return invalid("HTTP/2 window size must be greater than zero");
    }
    if self.keep_alive.is_some_and(|k| k.interval.is_zero()) {
      return invalid("keep-alive interval must be greater than zero");
    }
    Ok(())
  }

  pub(crate) fn apply_to_endpoint(self, endpoint: Endpoint) -> Endpoint {
    let mut endpoint = endpoint
      .connect_timeout(self.connect_timeout)
      .initial_connection_window_size(self.window_size)
      .initial_stream_window_size(self.window_size)
      .http2_adaptive_window(self.adaptive_window)
      .tcp_nodelay(self.tcp_nodelay)
      .tcp_keepalive(self.tcp_keepalive);

    if let Some(timeout) = self.request_timeout {
      endpoint = endpoint.timeout(timeout);
    }

    match self.keep_alive {
      Some(keep_alive) => endpoint
        .http2_keep_alive_interval(keep_alive.interval)
        .keep_alive_timeout(keep_alive.timeout)
        .keep_alive_while_idle(keep_alive.while_idle),
      None => endpoint,
    }
  }
}
