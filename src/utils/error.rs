use serde::Serialize;
use utoipa::ToSchema;
use worker::{Response, Result};

use crate::calculator::{ErrorKind, EvalError};
use crate::utils::ParamError;

/// エラーコード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidParameter,
    InvalidRequestBody,
    DivisionByZero,
    InvalidDomain,
    Overflow,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidParameter => "INVALID_PARAMETER",
            ErrorCode::InvalidRequestBody => "INVALID_REQUEST_BODY",
            ErrorCode::DivisionByZero => "DIVISION_BY_ZERO",
            ErrorCode::InvalidDomain => "INVALID_DOMAIN",
            ErrorCode::Overflow => "OVERFLOW",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }

    /// HTTPステータスコード
    pub fn status(self) -> u16 {
        match self {
            ErrorCode::InternalError => 500,
            _ => 400,
        }
    }
}

impl From<ErrorKind> for ErrorCode {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::DivisionByZero => ErrorCode::DivisionByZero,
            ErrorKind::InvalidDomain => ErrorCode::InvalidDomain,
            ErrorKind::Overflow => ErrorCode::Overflow,
            ErrorKind::Unknown => ErrorCode::InternalError,
        }
    }
}

/// エラーレスポンス
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorInfo,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorInfo {
    /// エラーコード
    #[schema(example = "DIVISION_BY_ZERO")]
    pub code: String,
    /// ユーザー向けメッセージ
    #[schema(example = "Cannot divide by zero.")]
    pub message: String,
    /// 同じリクエストを再試行して成功する可能性があるか
    pub retryable: bool,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: String, retryable: bool) -> Self {
        Self {
            error: ErrorInfo {
                code: code.as_str().to_string(),
                message,
                retryable,
            },
        }
    }

    pub fn to_response(&self, status: u16) -> Result<Response> {
        let json = serde_json::to_string(self)
            .map_err(|e| worker::Error::RustError(e.to_string()))?;

        let headers = worker::Headers::new();
        headers.set("Content-Type", "application/json")?;

        Ok(Response::error(json, status)?.with_headers(headers))
    }
}

/// 計算エラーは同じ入力で再試行しても結果が変わらない
impl From<&EvalError> for ErrorResponse {
    fn from(err: &EvalError) -> Self {
        Self::new(
            ErrorCode::from(err.kind()),
            err.message().to_string(),
            false,
        )
    }
}

impl From<&ParamError> for ErrorResponse {
    fn from(err: &ParamError) -> Self {
        Self::new(ErrorCode::InvalidParameter, err.to_string(), false)
    }
}
