//! アプリケーション全体で使用する定数

/// APIタイトル
pub const API_TITLE: &str = "Calc API";

/// Swagger UI バージョン
pub const SWAGGER_UI_VERSION: &str = "5";

/// パラメータのデフォルト値（未入力の数値欄は0として扱う）
pub const DEFAULT_PARAM_VALUE: f64 = 0.0;

/// 環境変数キー: CORSで許可するOriginリスト（カンマ区切り）
pub const ALLOWED_ORIGINS_ENV: &str = "ALLOWED_ORIGINS";

/// `ALLOWED_ORIGINS` 未設定時の `Access-Control-Allow-Origin`
pub const WILDCARD_ORIGIN: &str = "*";
