//! Calculator service handler
//!
//! Only `Add` has defined semantics: the IEEE-754 single-precision sum of
//! the two operands, NaN and infinity propagating per the usual rules. The
//! remaining arithmetic operations exist in the service contract but fail
//! explicitly with `UNIMPLEMENTED` instead of guessing semantics such as a
//! divide-by-zero policy.

use tonic::{Request, Response, Status};
use tracing::info;

use crate::proto::calculator::calculator_server::Calculator;
use crate::proto::calculator::{CalcRequest, CalcResponse};

/// Stateless `Calculator` implementation. Reentrant, no cross-call memory.
#[derive(Debug, Default)]
pub struct CalculatorService;

#[tonic::async_trait]
impl Calculator for CalculatorService {
    async fn add(
        &self,
        request: Request<CalcRequest>,
    ) -> Result<Response<CalcResponse>, Status> {
        let CalcRequest { num1, num2 } = request.into_inner();

        info!(num1, num2, "add");

        Ok(Response::new(CalcResponse {
            result: num1 + num2,
        }))
    }

    async fn subtract(
        &self,
        _request: Request<CalcRequest>,
    ) -> Result<Response<CalcResponse>, Status> {
        Err(Status::unimplemented("Subtract is not implemented"))
    }

    async fn multiply(
        &self,
        _request: Request<CalcRequest>,
    ) -> Result<Response<CalcResponse>, Status> {
        Err(Status::unimplemented("Multiply is not implemented"))
    }

    async fn divide(
        &self,
        _request: Request<CalcRequest>,
    ) -> Result<Response<CalcResponse>, Status> {
        Err(Status::unimplemented("Divide is not implemented"))
    }
}
