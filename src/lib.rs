use tonic::transport::server::Router;
use tonic::transport::Server;

pub mod calculator;
pub mod config;
pub mod greeter;
pub mod logging;
pub mod proto;

use calculator::CalculatorService;
use greeter::GreeterService;
use proto::calculator::calculator_server::CalculatorServer;
use proto::greeter::greeter_server::GreeterServer;

/// Assemble the gRPC router: both service handlers plus server reflection.
pub fn build_server() -> Result<Router, tonic_reflection::server::Error> {
    let reflection = tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(proto::FILE_DESCRIPTOR_SET)
        .build_v1()?;

    Ok(Server::builder()
        .add_service(reflection)
        .add_service(GreeterServer::new(GreeterService))
        .add_service(CalculatorServer::new(CalculatorService)))
}
