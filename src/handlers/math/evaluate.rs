use worker::{Request, Response, Result};

use super::render;
use crate::models::EvaluateRequest;
use crate::utils::{ErrorCode, ErrorResponse, safe_error_response};

/// JSONボディで計算するエンドポイント
/// POST /math/evaluate
pub async fn handle(mut req: Request) -> Result<Response> {
    let body = match req.json::<EvaluateRequest>().await {
        Ok(body) => body,
        Err(e) => {
            worker::console_log!("[Math] Failed to parse request body: {:?}", e);
            let error = ErrorResponse::new(
                ErrorCode::InvalidRequestBody,
                format!("Invalid JSON body: {e}"),
                false,
            );
            return safe_error_response(&error, ErrorCode::InvalidRequestBody.status());
        }
    };

    let (b, outcome) = body.evaluate();
    render(body.operation, body.a, b, outcome)
}
