use std::fmt;

use grpc_client::{TracingInterceptor, create_channel_lazy_with_config};
use rpc::vector_service::vector_service_client::VectorServiceClient;
use rpc::vector_service::{InsertResponse, Neighbours};
use tonic::service::interceptor::InterceptedService;
use tonic::transport::Channel;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::conversions::{insert_request, search_request};
use crate::error::{ClientError, ClientResult};

type Stub = VectorServiceClient<InterceptedService<Channel, TracingInterceptor>>;

/// Async client for the Celestica vector service
///
/// Holds nothing but the generated stub. Construction never touches the
/// network; the channel connects on the first call and the transport
/// reconnects on its own afterwards. Clones share the same channel, and
/// every method takes `&self`, so one instance can serve many tasks.
#[derive(Clone)]
pub struct CelesticaClient {
    stub: Stub,
    endpoint: String,
}

impl CelesticaClient {
    /// Create a client for `url` (`host:port` or `http://host:port`)
    ///
    /// Fails only when the address cannot be parsed. Must be called from
    /// within a Tokio runtime.
    pub fn new(url: impl Into<String>) -> ClientResult<Self> {
        Self::with_config(url, ClientConfig::default())
    }

    /// Create a client with custom channel, compression or size settings
    pub fn with_config(url: impl Into<String>, config: ClientConfig) -> ClientResult<Self> {
        let endpoint = url.into();
        let channel = create_channel_lazy_with_config(endpoint.clone(), config.channel)?;

        let interceptor = match config.service_name {
            Some(name) => TracingInterceptor::with_service_name(name),
            None => TracingInterceptor::new(),
        };
        let mut stub = VectorServiceClient::with_interceptor(channel, interceptor);

        if let Some(encoding) = config.compression {
            stub = stub.send_compressed(encoding).accept_compressed(encoding);
        }
        if let Some(limit) = config.max_decoding_message_size {
            stub = stub.max_decoding_message_size(limit);
        }
        if let Some(limit) = config.max_encoding_message_size {
            stub = stub.max_encoding_message_size(limit);
        }

        debug!(target: "celestica", endpoint = %endpoint, "Vector service client created");

        Ok(Self { stub, endpoint })
    }

    /// The address this client was created with
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Index `vectors[i]` under `ids[i]` in one round trip
    ///
    /// The two sequences are sent as given. A length mismatch is not
    /// checked here; how it is handled is up to the server.
    pub async fn insert<V, I>(&self, vectors: V, ids: I) -> ClientResult<InsertResponse>
    where
        V: IntoIterator,
        V::Item: IntoIterator<Item = f32>,
        I: IntoIterator<Item = u32>,
    {
        let request = insert_request(vectors, ids);
        debug!(
            target: "celestica",
            endpoint = %self.endpoint,
            vectors = request.data.len(),
            ids = request.ids.len(),
            "Insert"
        );

        let mut stub = self.stub.clone();
        let response = stub.insert(request).await.map_err(|status| {
            warn!(target: "celestica", code = ?status.code(), "Insert failed");
            ClientError::Rpc(status)
        })?;

        Ok(response.into_inner())
    }

    /// Find up to `knbn` neighbours for each query vector
    ///
    /// `ef` is the candidate list size the server explores per query.
    /// Returns the `neighbours` of the server's response as-is: one
    /// `Neighbours` entry per query, in request order.
    pub async fn search<V>(&self, vectors: V, knbn: u32, ef: u32) -> ClientResult<Vec<Neighbours>>
    where
        V: IntoIterator,
        V::Item: IntoIterator<Item = f32>,
    {
        let request = search_request(vectors, knbn, ef);
        debug!(
            target: "celestica",
            endpoint = %self.endpoint,
            queries = request.data.len(),
            knbn,
            ef,
            "Search"
        );

        let mut stub = self.stub.clone();
        let response = stub.search(request).await.map_err(|status| {
            warn!(target: "celestica", code = ?status.code(), "Search failed");
            ClientError::Rpc(status)
        })?;

        Ok(response.into_inner().neighbours)
    }
}

impl fmt::Debug for CelesticaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CelesticaClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
