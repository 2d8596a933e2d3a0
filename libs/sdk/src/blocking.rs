//! Blocking facade over [`crate::CelesticaClient`]
//!
//! For callers without an async runtime. Each call blocks the current thread
//! for exactly one round trip. Do not use these types from inside an async
//! context: dropping the owned runtime there panics.

use rpc::vector_service::{InsertResponse, Neighbours};
use tokio::runtime::{Builder, Runtime};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Synchronous client for the Celestica vector service
#[derive(Debug)]
pub struct CelesticaClient {
    inner: crate::CelesticaClient,
    runtime: Runtime,
}

impl CelesticaClient {
    /// Create a client for `url` (`host:port` or `http://host:port`)
    pub fn new(url: impl Into<String>) -> ClientResult<Self> {
        Self::with_config(url, ClientConfig::default())
    }

    pub fn with_config(url: impl Into<String>, config: ClientConfig) -> ClientResult<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .map_err(ClientError::Runtime)?;

        // The lazy channel spawns its worker onto the current runtime
        let inner = {
            let _guard = runtime.enter();
            crate::CelesticaClient::with_config(url, config)?
        };

        Ok(Self { inner, runtime })
    }

    pub fn endpoint(&self) -> &str {
        self.inner.endpoint()
    }

    /// See [`crate::CelesticaClient::insert`]
    pub fn insert<V, I>(&self, vectors: V, ids: I) -> ClientResult<InsertResponse>
    where
        V: IntoIterator,
        V::Item: IntoIterator<Item = f32>,
        I: IntoIterator<Item = u32>,
    {
        self.runtime.block_on(self.inner.insert(vectors, ids))
    }

    /// See [`crate::CelesticaClient::search`]
    pub fn search<V>(&self, vectors: V, knbn: u32, ef: u32) -> ClientResult<Vec<Neighbours>>
    where
        V: IntoIterator,
        V::Item: IntoIterator<Item = f32>,
    {
        self.runtime.block_on(self.inner.search(vectors, knbn, ef))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_outside_runtime() {
        let client = CelesticaClient::new("127.0.0.1:50051").unwrap();
        assert_eq!(client.endpoint(), "127.0.0.1:50051");
    }

    #[test]
    fn test_malformed_address() {
        let err = CelesticaClient::new("not a valid uri").unwrap_err();
        assert!(matches!(err, ClientError::Connection(_)));
    }
}
