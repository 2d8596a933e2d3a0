use tonic::{Request, Status};

/// Interceptor for request correlation
///
/// Tags every outgoing call so it can be matched against server-side logs.
///
/// Headers injected:
/// - `x-request-id`: UUID v4 unique to the call
/// - `traceparent`: W3C Trace Context (version-trace_id-span_id-flags)
/// - `x-source-service`: caller name, when configured
///
/// # Example
/// ```ignore
/// use grpc_client::interceptors::TracingInterceptor;
/// use rpc::vector_service::vector_service_client::VectorServiceClient;
///
/// let channel = create_channel_lazy("127.0.0.1:50051")?;
/// let client = VectorServiceClient::with_interceptor(channel, TracingInterceptor::new());
/// ```
#[derive(Clone, Debug, Default)]
pub struct TracingInterceptor {
    service_name: Option<String>,
}

impl TracingInterceptor {
    /// Create a new tracing interceptor
    pub fn new() -> Self {
        Self { service_name: None }
    }

    /// Create a tracing interceptor that also announces the calling service
    pub fn with_service_name(service_name: impl Into<String>) -> Self {
        Self {
            service_name: Some(service_name.into()),
        }
    }

    /// Generate a W3C traceparent header value
    ///
    /// Format: {version}-{trace_id}-{parent_id}-{trace_flags}
    /// Example: 00-0af7651916cd43dd8448eb211c80319c-b7ad6b7169203331-01
    fn generate_traceparent() -> String {
        let trace_id = uuid::Uuid::new_v4().as_simple().to_string();
        let span_id = &uuid::Uuid::new_v4().as_simple().to_string()[..16];
        format!("00-{trace_id}-{span_id}-01")
    }
}

impl tonic::service::Interceptor for TracingInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        if let Some(ref name) = self.service_name {
            if let Ok(value) = name.parse() {
                request.metadata_mut().insert("x-source-service", value);
            }
        }

        let request_id = uuid::Uuid::new_v4().to_string();
        let traceparent = Self::generate_traceparent();

        request.metadata_mut().insert(
            "x-request-id",
            request_id
                .parse()
                .map_err(|_| Status::internal("Failed to create request ID"))?,
        );
        request.metadata_mut().insert(
            "traceparent",
            traceparent
                .parse()
                .map_err(|_| Status::internal("Failed to create traceparent header"))?,
        );

        // request.uri() is not available for tonic::Request in interceptors
        tracing::debug!(
            target: "grpc_client",
            request_id = %request_id,
            traceparent = %traceparent,
            "Outgoing gRPC request"
        );

        Ok(request)
    }
}

/// Reads the correlation headers back out of gRPC metadata
pub struct MetadataExtractor<'a>(pub &'a tonic::metadata::MetadataMap);

impl MetadataExtractor<'_> {
    fn traceparent_part(&self, index: usize) -> Option<String> {
        self.0
            .get("traceparent")
            .and_then(|v| v.to_str().ok())
            .and_then(|tp| tp.split('-').nth(index))
            .map(String::from)
    }

    /// Extract trace ID from traceparent header
    pub fn trace_id(&self) -> Option<String> {
        self.traceparent_part(1)
    }

    /// Extract span ID from traceparent header
    pub fn span_id(&self) -> Option<String> {
        self.traceparent_part(2)
    }

    /// Extract request ID
    pub fn request_id(&self) -> Option<String> {
        self.0
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    }

    /// Extract the calling service name
    pub fn source_service(&self) -> Option<String> {
        self.0
            .get("x-source-service")
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    }
}
