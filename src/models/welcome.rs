use serde::Serialize;
use utoipa::ToSchema;

/// ウェルカムレスポンスのエンドポイント情報
#[derive(Serialize, ToSchema)]
pub struct Endpoints {
    /// Swagger UI
    pub swagger: String,
    /// `OpenAPI` 仕様
    pub openapi: String,
    /// ヘルスチェック
    pub health: String,
    /// 演算一覧
    pub operations: String,
    /// JSONボディで計算するエンドポイント
    pub evaluate: String,
}

/// ルートエンドポイントのレスポンス
#[derive(Serialize, ToSchema)]
pub struct WelcomeResponse {
    /// ウェルカムメッセージ
    pub message: String,
    /// 利用可能なエンドポイント
    pub endpoints: Endpoints,
}

impl WelcomeResponse {
    pub fn new() -> Self {
        Self {
            message: "Welcome to Calc API: arithmetic, modulo, power and logarithm".to_string(),
            endpoints: Endpoints {
                swagger: "/docs".to_string(),
                openapi: "/openapi.json".to_string(),
                health: "/health".to_string(),
                operations: "/math".to_string(),
                evaluate: "/math/evaluate".to_string(),
            },
        }
    }
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self::new()
    }
}
