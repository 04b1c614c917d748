//! Greeter service handler
//!
//! Implements the `SayHello` operation: the greeting is the fixed prefix
//! `"Hello "` concatenated with the request name, verbatim. No trimming,
//! no escaping, no locale handling.

use tonic::{Request, Response, Status};
use tracing::info;

use crate::proto::greeter::greeter_server::Greeter;
use crate::proto::greeter::{HelloRequest, HelloResponse};

/// Stateless `Greeter` implementation. Reentrant, no cross-call memory.
#[derive(Debug, Default)]
pub struct GreeterService;

#[tonic::async_trait]
impl Greeter for GreeterService {
    async fn say_hello(
        &self,
        request: Request<HelloRequest>,
    ) -> Result<Response<HelloResponse>, Status> {
        let HelloRequest { name } = request.into_inner();

        info!(name = %name, "say_hello");

        Ok(Response::new(HelloResponse {
            greeting: format!("Hello {name}"),
        }))
    }
}
