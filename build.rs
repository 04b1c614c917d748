//! Compiles the protobuf service definitions into Rust code using tonic-build.
//!
//! Also emits a file descriptor set so the server can register gRPC
//! reflection for both services.

use std::{env, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);

    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .file_descriptor_set_path(out_dir.join("grpc_demo_descriptor.bin"))
        .compile_protos(
            &["proto/greeter.proto", "proto/calculator.proto"],
            &["proto"],
        )?;

    Ok(())
}
