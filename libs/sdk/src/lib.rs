//! Celestica Client SDK
//!
//! A thin, typed client for the Celestica vector service. It turns batches of
//! float vectors into `vector_service` protobuf messages and forwards them over
//! a gRPC channel; indexing and nearest-neighbour search happen on the server.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────┐
//! │ CelesticaClient          │  ← insert / search, async
//! │ blocking::CelesticaClient│  ← same calls on an owned runtime
//! └────────────┬─────────────┘
//!              │ conversions (Vec<f32> → FloatArray)
//! ┌────────────▼─────────────┐
//! │ VectorServiceClient      │  ← generated stub (rpc crate)
//! │  + TracingInterceptor    │
//! └────────────┬─────────────┘
//!              │ lazy Channel (grpc_client)
//!              ▼
//!        Celestica server
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use celestica::CelesticaClient;
//!
//! # async fn example() -> Result<(), celestica::ClientError> {
//! // No connection is made until the first call
//! let client = CelesticaClient::new("127.0.0.1:50051")?;
//!
//! client
//!     .insert(vec![vec![1.0, 2.0], vec![3.0, 4.0]], vec![10, 11])
//!     .await?;
//!
//! let neighbours = client.search(vec![vec![1.0, 2.0]], 5, 50).await?;
//! for hit in neighbours.iter().flat_map(|n| &n.neighbour) {
//!     println!("{} at {:.2}", hit.d_id, hit.distance);
//! }
//! # Ok(())
//! # }
//! ```

pub mod blocking;
pub mod client;
pub mod config;
pub mod conversions;
pub mod error;

// Re-export commonly used types
pub use client::CelesticaClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use rpc::vector_service::{
    FloatArray, InsertRequest, InsertResponse, Neighbour, Neighbours, PointId, SearchRequest,
    SearchResult,
};
