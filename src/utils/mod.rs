mod error;
mod params;
mod response;
mod response_fallback;

pub use error::{ErrorCode, ErrorInfo, ErrorResponse};
pub use params::{ParamError, get_finite_f64_param, get_log_base_param, parse_query_params};
pub use response::{add_cors_headers, create_cors_headers, json_response};
pub use response_fallback::safe_error_response;
