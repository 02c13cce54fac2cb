use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// 演算の種類
///
/// ワイヤ上の名前（`add` など）はURLパスとJSONボディの両方で使用します。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Operation {
    #[serde(rename = "add")]
    Add,
    #[serde(rename = "sub")]
    Subtract,
    #[serde(rename = "mul")]
    Multiply,
    #[serde(rename = "div")]
    Divide,
    #[serde(rename = "mod")]
    Modulo,
    #[serde(rename = "pow")]
    Power,
    #[serde(rename = "log")]
    Logarithm,
}

impl Operation {
    /// 選択肢として表示する順序
    pub const ALL: [Operation; 7] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Modulo,
        Operation::Power,
        Operation::Logarithm,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "sub",
            Operation::Multiply => "mul",
            Operation::Divide => "div",
            Operation::Modulo => "mod",
            Operation::Power => "pow",
            Operation::Logarithm => "log",
        }
    }

    /// レスポンスの `operation` フィールドに入る演算子
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Modulo => "%",
            Operation::Power => "^",
            Operation::Logarithm => "log",
        }
    }

    /// 演算セレクタに表示するラベル
    pub fn label(self) -> &'static str {
        match self {
            Operation::Add => "Addition (+)",
            Operation::Subtract => "Subtraction (-)",
            Operation::Multiply => "Multiplication (×)",
            Operation::Divide => "Division (÷)",
            Operation::Modulo => "Modulo (a mod b)",
            Operation::Power => "Exponentiation (a^b)",
            Operation::Logarithm => "Logarithm (log_b(a))",
        }
    }

    /// GET エンドポイントのパス
    pub fn path(self) -> &'static str {
        match self {
            Operation::Add => "/math/add",
            Operation::Subtract => "/math/sub",
            Operation::Multiply => "/math/mul",
            Operation::Divide => "/math/div",
            Operation::Modulo => "/math/mod",
            Operation::Power => "/math/pow",
            Operation::Logarithm => "/math/log",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operation: {0}")]
pub struct ParseOperationError(String);

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| ParseOperationError(s.to_string()))
    }
}

/// 対数の底の指定方法
///
/// `Natural` / `Common` を選ぶと、入力された底は無視されます。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum LogBase {
    /// 入力された底 `b` をそのまま使用
    #[default]
    #[serde(rename = "manual")]
    Manual,
    /// 自然対数（底 e）
    #[serde(rename = "e")]
    Natural,
    /// 常用対数（底 10）
    #[serde(rename = "10")]
    Common,
}

impl LogBase {
    pub fn name(self) -> &'static str {
        match self {
            LogBase::Manual => "manual",
            LogBase::Natural => "e",
            LogBase::Common => "10",
        }
    }

    /// 実際に計算に使う底を返す
    pub fn resolve(self, manual: f64) -> f64 {
        match self {
            LogBase::Manual => manual,
            LogBase::Natural => std::f64::consts::E,
            LogBase::Common => 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown logarithm base: {0} (expected manual, e or 10)")]
pub struct ParseLogBaseError(String);

impl FromStr for LogBase {
    type Err = ParseLogBaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [LogBase::Manual, LogBase::Natural, LogBase::Common]
            .into_iter()
            .find(|base| base.name() == s)
            .ok_or_else(|| ParseLogBaseError(s.to_string()))
    }
}
