//! Generated protobuf message and gRPC service bindings
//!
//! The `.proto` files under `proto/` are the external contract; everything
//! here is produced by tonic-build at compile time.

pub mod greeter {
    tonic::include_proto!("greeter");
}

pub mod calculator {
    tonic::include_proto!("calculator");
}

/// Descriptor set covering both packages, registered with the reflection
/// service at startup.
pub const FILE_DESCRIPTOR_SET: &[u8] =
    tonic::include_file_descriptor_set!("grpc_demo_descriptor");
