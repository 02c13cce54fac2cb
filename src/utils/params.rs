use std::collections::HashMap;

use thiserror::Error;
use worker::Url;

use crate::calculator::LogBase;

/// クエリパラメータのエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("parameter `{key}` is not a number: {value}")]
    NotANumber { key: String, value: String },
    #[error("parameter `{key}` must be a finite number")]
    NotFinite { key: String },
    #[error("parameter `{key}` must be one of manual, e, 10: {value}")]
    UnknownLogBase { key: String, value: String },
}

/// URLからクエリパラメータを取得する
pub fn parse_query_params(url: &Url) -> HashMap<String, String> {
    url.query_pairs()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// パラメータから有限のf64を取得する
///
/// 未指定の場合はデフォルト値、数値として解釈できない値や
/// `NaN` / `inf` はエラーになります。
pub fn get_finite_f64_param(
    params: &HashMap<String, String>,
    key: &str,
    default: f64,
) -> Result<f64, ParamError> {
    let Some(raw) = params.get(key) else {
        return Ok(default);
    };
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ParamError::NotANumber {
            key: key.to_string(),
            value: raw.clone(),
        })?;
    if !value.is_finite() {
        return Err(ParamError::NotFinite {
            key: key.to_string(),
        });
    }
    Ok(value)
}

/// パラメータから対数の底の指定を取得する（未指定は `manual`）
pub fn get_log_base_param(
    params: &HashMap<String, String>,
    key: &str,
) -> Result<LogBase, ParamError> {
    params.get(key).map_or(Ok(LogBase::Manual), |raw| {
        raw.trim()
            .parse()
            .map_err(|_| ParamError::UnknownLogBase {
                key: key.to_string(),
                value: raw.clone(),
            })
    })
}
