use grpc_client::GrpcError;
use thiserror::Error;

/// Errors returned by the Celestica clients.
///
/// RPC failures carry the transport's `tonic::Status` untouched, so the code,
/// message and metadata the server sent are all still available.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Connection error: {0}")]
    Connection(#[from] GrpcError),

    #[error(transparent)]
    Rpc(#[from] tonic::Status),

    #[error("Failed to start client runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// The transport status, for RPC failures
    pub fn status(&self) -> Option<&tonic::Status> {
        match self {
            ClientError::Rpc(status) => Some(status),
            _ => None,
        }
    }

    /// The gRPC code, for RPC failures
    pub fn code(&self) -> Option<tonic::Code> {
        self.status().map(tonic::Status::code)
    }
}

impl From<ClientError> for tonic::Status {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Connection(err) => err.into(),
            ClientError::Rpc(status) => status,
            ClientError::Runtime(err) => tonic::Status::internal(err.to_string()),
        }
    }
}
