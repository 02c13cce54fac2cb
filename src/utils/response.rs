use serde::Serialize;
use worker::{Headers, Response, Result};

use crate::config::CorsPolicy;

/// JSON 形式のレスポンスを作成
pub fn json_response<T: Serialize>(data: &T) -> Result<Response> {
    let json = serde_json::to_string(data).map_err(|e| worker::Error::RustError(e.to_string()))?;

    let headers = Headers::new();
    headers.set("Content-Type", "application/json")?;

    Ok(Response::ok(json)?.with_headers(headers))
}

/// CORSヘッダーを作成
pub fn create_cors_headers(policy: &CorsPolicy) -> Result<Headers> {
    let headers = Headers::new();
    for (name, value) in policy.header_pairs() {
        headers.set(name, value)?;
    }
    Ok(headers)
}

/// 既存のレスポンスにCORSヘッダーを追加
pub fn add_cors_headers(mut response: Response, policy: &CorsPolicy) -> Result<Response> {
    let headers = response.headers_mut();
    for (name, value) in policy.header_pairs() {
        headers.set(name, value)?;
    }
    Ok(response)
}
