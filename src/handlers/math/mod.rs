//! 計算エンドポイント
//!
//! どのハンドラーも最終的に成功レスポンスかエラーレスポンスのどちらか1つを返します。

pub mod calculate;
pub mod evaluate;
pub mod log;
pub mod operations;

use std::collections::HashMap;

use worker::{Response, Result};

use crate::calculator::{Operation, Outcome};
use crate::constants::DEFAULT_PARAM_VALUE;
use crate::models::CalculationResult;
use crate::utils::{
    ErrorCode, ErrorResponse, ParamError, get_finite_f64_param, json_response,
    safe_error_response,
};

/// クエリパラメータ `a` と `b` を読み取る
fn read_operands(params: &HashMap<String, String>) -> std::result::Result<(f64, f64), ParamError> {
    let a = get_finite_f64_param(params, "a", DEFAULT_PARAM_VALUE)?;
    let b = get_finite_f64_param(params, "b", DEFAULT_PARAM_VALUE)?;
    Ok((a, b))
}

fn invalid_parameter(err: &ParamError) -> Result<Response> {
    worker::console_log!("[Math] Invalid parameter: {}", err);
    safe_error_response(&ErrorResponse::from(err), ErrorCode::InvalidParameter.status())
}

/// 計算結果をJSONレスポンスに変換
fn render(operation: Operation, a: f64, b: f64, outcome: Outcome) -> Result<Response> {
    match outcome {
        Ok(result) => json_response(&CalculationResult::new(a, b, operation.symbol(), result)),
        Err(err) => {
            worker::console_log!(
                "[Math] {} failed for a={}, b={}: {:?}",
                operation,
                a,
                b,
                err.kind()
            );
            let code = ErrorCode::from(err.kind());
            safe_error_response(&ErrorResponse::from(&err), code.status())
        }
    }
}
