use worker::{Response, Result};

use crate::models::OperationsResponse;
use crate::utils::json_response;

/// 演算一覧（演算セレクタの選択肢）
/// GET /math
pub fn handle() -> Result<Response> {
    json_response(&OperationsResponse::new())
}
