use worker::{Response, Result};

use crate::utils::ErrorResponse;

/// `ErrorResponse`の`to_response`が失敗した場合のフォールバック
///
/// JSONの組み立てに失敗しても、メッセージだけのエラーレスポンスを返します。
pub fn safe_error_response(error: &ErrorResponse, status: u16) -> Result<Response> {
    error.to_response(status).or_else(|e| {
        worker::console_log!("Failed to create error response: {:?}", e);
        Response::error(error.error.message.clone(), status)
    })
}
