//! In-process vector service used by the client tests
//!
//! Records every request it receives and answers with scripted responses,
//! so tests can check exactly what went over the wire.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use grpc_client::interceptors::MetadataExtractor;
use rpc::vector_service::vector_service_server::{VectorService, VectorServiceServer};
use rpc::vector_service::{
    InsertRequest, InsertResponse, Neighbour, Neighbours, PointId, SearchRequest, SearchResult,
};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::codec::CompressionEncoding;
use tonic::transport::Server;
use tonic::{Code, Request, Response, Status};

/// Correlation headers seen on one call
#[derive(Debug, Clone)]
pub struct SeenMetadata {
    pub request_id: Option<String>,
    pub trace_id: Option<String>,
    pub source_service: Option<String>,
}

#[derive(Clone, Default)]
pub struct RecordingService {
    inserts: Arc<Mutex<Vec<InsertRequest>>>,
    searches: Arc<Mutex<Vec<SearchRequest>>>,
    metadata: Arc<Mutex<Vec<SeenMetadata>>>,
    search_result: SearchResult,
    failure: Option<(Code, String)>,
}

impl RecordingService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every search with `result`
    pub fn with_search_result(mut self, result: SearchResult) -> Self {
        self.search_result = result;
        self
    }

    /// Fail every call with the given status
    pub fn failing(mut self, code: Code, message: impl Into<String>) -> Self {
        self.failure = Some((code, message.into()));
        self
    }

    pub fn inserts(&self) -> Vec<InsertRequest> {
        self.inserts.lock().unwrap().clone()
    }

    pub fn searches(&self) -> Vec<SearchRequest> {
        self.searches.lock().unwrap().clone()
    }

    pub fn metadata(&self) -> Vec<SeenMetadata> {
        self.metadata.lock().unwrap().clone()
    }

    fn record_metadata<T>(&self, request: &Request<T>) {
        let extractor = MetadataExtractor(request.metadata());
        self.metadata.lock().unwrap().push(SeenMetadata {
            request_id: extractor.request_id(),
            trace_id: extractor.trace_id(),
            source_service: extractor.source_service(),
        });
    }

    fn check_failure(&self) -> Result<(), Status> {
        match &self.failure {
            Some((code, message)) => Err(Status::new(*code, message.clone())),
            None => Ok(()),
        }
    }
}

#[tonic::async_trait]
impl VectorService for RecordingService {
    async fn insert(
        &self,
        request: Request<InsertRequest>,
    ) -> Result<Response<InsertResponse>, Status> {
        self.record_metadata(&request);
        self.inserts.lock().unwrap().push(request.into_inner());
        self.check_failure()?;
        Ok(Response::new(InsertResponse {}))
    }

    async fn search(
        &self,
        request: Request<SearchRequest>,
    ) -> Result<Response<SearchResult>, Status> {
        self.record_metadata(&request);
        self.searches.lock().unwrap().push(request.into_inner());
        self.check_failure()?;
        Ok(Response::new(self.search_result.clone()))
    }
}

/// Serve `service` on an ephemeral localhost port
pub async fn spawn_server(service: RecordingService) -> SocketAddr {
    spawn_server_with(VectorServiceServer::new(service)).await
}

/// Serve `service` with zstd enabled in both directions
pub async fn spawn_zstd_server(service: RecordingService) -> SocketAddr {
    spawn_server_with(
        VectorServiceServer::new(service)
            .accept_compressed(CompressionEncoding::Zstd)
            .send_compressed(CompressionEncoding::Zstd),
    )
    .await
}

async fn spawn_server_with(server: VectorServiceServer<RecordingService>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        Server::builder()
            .add_service(server)
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    addr
}

pub fn neighbour(d_id: u32, distance: f32, layer: u32, index: i32) -> Neighbour {
    Neighbour {
        d_id,
        distance,
        point_id: Some(PointId { layer, index }),
    }
}

/// Two queries worth of neighbours
pub fn sample_result() -> SearchResult {
    SearchResult {
        neighbours: vec![
            Neighbours {
                neighbour: vec![neighbour(10, 0.0, 0, 0), neighbour(11, 0.25, 0, 1)],
            },
            Neighbours {
                neighbour: vec![neighbour(11, 0.5, 1, 3)],
            },
        ],
    }
}
