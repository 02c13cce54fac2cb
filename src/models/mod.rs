mod calculation;
mod operations;
mod welcome;

pub use calculation::{CalculationResult, EvaluateRequest};
pub use operations::{OperationInfo, OperationsResponse};
pub use welcome::WelcomeResponse;
