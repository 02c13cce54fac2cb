use worker::{Response, Result};

use crate::models::WelcomeResponse;
use crate::utils::json_response;

/// ルートエンドポイントのハンドラー
/// GET /
pub fn welcome() -> Result<Response> {
    json_response(&WelcomeResponse::new())
}

/// ヘルスチェックエンドポイント
/// GET /health
pub fn health() -> Result<Response> {
    Response::ok("OK")
}

/// 該当するルートがない場合
pub fn not_found(path: &str) -> Result<Response> {
    worker::console_log!("[Router] No route for {}", path);
    Ok(Response::ok("Not Found")?.with_status(404))
}
