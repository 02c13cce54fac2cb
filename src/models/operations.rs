use serde::Serialize;
use utoipa::ToSchema;

use crate::calculator::Operation;

/// 演算の一覧に含まれる1件
#[derive(Serialize, ToSchema)]
pub struct OperationInfo {
    /// ワイヤ上の名前
    #[schema(example = "add")]
    pub name: String,
    /// 演算子
    #[schema(example = "+")]
    pub symbol: String,
    /// 表示用ラベル
    #[schema(example = "Addition (+)")]
    pub label: String,
    /// GET エンドポイント
    #[schema(example = "/math/add")]
    pub path: String,
}

impl From<Operation> for OperationInfo {
    fn from(operation: Operation) -> Self {
        Self {
            name: operation.name().to_string(),
            symbol: operation.symbol().to_string(),
            label: operation.label().to_string(),
            path: operation.path().to_string(),
        }
    }
}

/// 演算一覧のレスポンス
#[derive(Serialize, ToSchema)]
pub struct OperationsResponse {
    pub operations: Vec<OperationInfo>,
}

impl OperationsResponse {
    pub fn new() -> Self {
        Self {
            operations: Operation::ALL.into_iter().map(OperationInfo::from).collect(),
        }
    }
}

impl Default for OperationsResponse {
    fn default() -> Self {
        Self::new()
    }
}
