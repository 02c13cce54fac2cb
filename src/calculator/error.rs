use thiserror::Error;

/// 計算エラーの分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 除数が0（割り算・剰余）、または0の負の累乗
    DivisionByZero,
    /// 対数の定義域外（真数 <= 0、底 <= 0、底 == 1）
    InvalidDomain,
    /// 累乗の結果が表現可能な範囲を超えた
    Overflow,
    /// 想定外のエラー
    Unknown,
}

/// 計算エラー
///
/// `message` はそのままユーザーに表示できる文言です。
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct EvalError {
    kind: ErrorKind,
    message: String,
}

impl EvalError {
    pub(crate) fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// 原因の説明を含む `Unknown` エラーを作成
    pub(crate) fn unknown(cause: impl std::fmt::Display) -> Self {
        Self::new(
            ErrorKind::Unknown,
            format!("An unknown error occurred: {cause}"),
        )
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// 1回の計算結果。成功値かエラーのどちらか一方のみ
pub type Outcome = Result<f64, EvalError>;
