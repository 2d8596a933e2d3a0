// @generated
// This file wires up buf-generated protobuf code
// Note: The prost files already include!() the tonic files automatically

pub mod vector_service {
    include!("generated/vector_service/vector_service.rs");
    // vector_service.tonic.rs is auto-included by vector_service.rs
}
