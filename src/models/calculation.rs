use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::calculator::{LogBase, Operation, Outcome, evaluate, evaluate_log};

/// 計算結果のレスポンス
///
/// 結果が有限でない場合（`NaN` など）、`result` は `null` になります。
#[derive(Debug, Serialize, ToSchema)]
pub struct CalculationResult {
    /// 1つ目の数値（対数の場合は真数）
    pub a: f64,
    /// 2つ目の数値（対数の場合は実際に使用した底）
    pub b: f64,
    /// 演算子
    #[schema(example = "+")]
    pub operation: String,
    /// 計算結果
    pub result: f64,
}

impl CalculationResult {
    pub fn new(a: f64, b: f64, operation: &str, result: f64) -> Self {
        Self {
            a,
            b,
            operation: operation.to_string(),
            result,
        }
    }
}

/// 計算リクエスト（POST /math/evaluate）
#[derive(Debug, Deserialize, ToSchema)]
pub struct EvaluateRequest {
    /// 演算の種類
    pub operation: Operation,
    /// 1つ目の数値（省略時は0）
    #[serde(default)]
    #[schema(example = 8.0)]
    pub a: f64,
    /// 2つ目の数値（省略時は0）
    #[serde(default)]
    #[schema(example = 2.0)]
    pub b: f64,
    /// 対数の底のショートカット（`log` 以外では無視）
    #[serde(default)]
    pub base: Option<LogBase>,
}

impl EvaluateRequest {
    /// 計算を実行し、実際に使用した `b` と結果を返す
    pub fn evaluate(&self) -> (f64, Outcome) {
        match self.operation {
            Operation::Logarithm => {
                let base = self.base.unwrap_or_default();
                (base.resolve(self.b), evaluate_log(self.a, base, self.b))
            }
            operation => (self.b, evaluate(operation, self.a, self.b)),
        }
    }
}
