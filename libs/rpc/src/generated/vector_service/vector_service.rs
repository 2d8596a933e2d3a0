// @generated
// This file is @generated by prost-build.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FloatArray {
    #[prost(float, repeated, tag = "1")]
    pub values: ::prost::alloc::vec::Vec<f32>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InsertRequest {
    #[prost(message, repeated, tag = "1")]
    pub data: ::prost::alloc::vec::Vec<FloatArray>,
    /// Paired with `data` by position.
    #[prost(uint32, repeated, tag = "2")]
    pub ids: ::prost::alloc::vec::Vec<u32>,
}
/// Wire-compatible with google.protobuf.Empty.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct InsertResponse {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchRequest {
    #[prost(message, repeated, tag = "1")]
    pub data: ::prost::alloc::vec::Vec<FloatArray>,
    /// Neighbours requested per query.
    #[prost(uint32, tag = "2")]
    pub knbn: u32,
    /// Candidate list size explored during search.
    #[prost(uint32, tag = "3")]
    pub ef: u32,
}
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct PointId {
    #[prost(uint32, tag = "1")]
    pub layer: u32,
    #[prost(int32, tag = "2")]
    pub index: i32,
}
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Neighbour {
    #[prost(uint32, tag = "1")]
    pub d_id: u32,
    #[prost(float, tag = "2")]
    pub distance: f32,
    #[prost(message, optional, tag = "3")]
    pub point_id: ::core::option::Option<PointId>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Neighbours {
    #[prost(message, repeated, tag = "1")]
    pub neighbour: ::prost::alloc::vec::Vec<Neighbour>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchResult {
    /// One entry per query, in request order.
    #[prost(message, repeated, tag = "1")]
    pub neighbours: ::prost::alloc::vec::Vec<Neighbours>,
}
include!("vector_service.tonic.rs");
// @@protoc_insertion_point(module)
