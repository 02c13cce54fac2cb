//! `OpenAPI` ドキュメント定義モジュール

#![allow(clippy::needless_for_each)]

use utoipa::OpenApi;

use crate::calculator::{LogBase, Operation};
use crate::models::{
    CalculationResult, EvaluateRequest, OperationInfo, OperationsResponse, WelcomeResponse,
};
use crate::utils::{ErrorInfo, ErrorResponse};

/// `OpenAPI` ドキュメント定義
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Calc API",
        description = "Cloudflare Workersで動作するRustベースの計算API。四則演算、剰余、累乗、対数をサポートしています。",
        version = "1.0.0"
    ),
    paths(
        crate::openapi::root,
        crate::openapi::health,
        crate::openapi::operations,
        crate::openapi::add,
        crate::openapi::sub,
        crate::openapi::mul,
        crate::openapi::div,
        crate::openapi::modulo,
        crate::openapi::pow,
        crate::openapi::log,
        crate::openapi::evaluate
    ),
    components(schemas(
        WelcomeResponse,
        CalculationResult,
        EvaluateRequest,
        OperationInfo,
        OperationsResponse,
        Operation,
        LogBase,
        ErrorInfo,
        ErrorResponse
    )),
    tags(
        (name = "General", description = "一般エンドポイント"),
        (name = "Math", description = "計算エンドポイント")
    )
)]
pub struct ApiDoc;

/// API 情報
///
/// API のウェルカムメッセージと利用可能なエンドポイント一覧を返します
#[allow(dead_code)]
#[utoipa::path(
    get,
    path = "/",
    tag = "General",
    responses(
        (status = 200, description = "API 情報", body = WelcomeResponse)
    )
)]
fn root() {}

/// ヘルスチェック
#[allow(dead_code)]
#[utoipa::path(
    get,
    path = "/health",
    tag = "General",
    responses(
        (status = 200, description = "OK", body = String)
    )
)]
fn health() {}

/// 演算一覧
///
/// 利用可能な7種類の演算と表示用ラベルを返します
#[allow(dead_code)]
#[utoipa::path(
    get,
    path = "/math",
    tag = "Math",
    responses(
        (status = 200, description = "演算一覧", body = OperationsResponse)
    )
)]
fn operations() {}

/// 足し算
#[allow(dead_code)]
#[utoipa::path(
    get,
    path = "/math/add",
    tag = "Math",
    params(
        ("a" = Option<f64>, Query, description = "1つ目の数値（デフォルト: 0）"),
        ("b" = Option<f64>, Query, description = "2つ目の数値（デフォルト: 0）")
    ),
    responses(
        (status = 200, description = "計算結果", body = CalculationResult),
        (status = 400, description = "パラメータが不正", body = ErrorResponse)
    )
)]
fn add() {}

/// 引き算
#[allow(dead_code)]
#[utoipa::path(
    get,
    path = "/math/sub",
    tag = "Math",
    params(
        ("a" = Option<f64>, Query, description = "1つ目の数値（デフォルト: 0）"),
        ("b" = Option<f64>, Query, description = "2つ目の数値（デフォルト: 0）")
    ),
    responses(
        (status = 200, description = "計算結果", body = CalculationResult),
        (status = 400, description = "パラメータが不正", body = ErrorResponse)
    )
)]
fn sub() {}

/// 掛け算
#[allow(dead_code)]
#[utoipa::path(
    get,
    path = "/math/mul",
    tag = "Math",
    params(
        ("a" = Option<f64>, Query, description = "1つ目の数値（デフォルト: 0）"),
        ("b" = Option<f64>, Query, description = "2つ目の数値（デフォルト: 0）")
    ),
    responses(
        (status = 200, description = "計算結果", body = CalculationResult),
        (status = 400, description = "パラメータが不正", body = ErrorResponse)
    )
)]
fn mul() {}

/// 割り算
///
/// `b` が0の場合は `DIVISION_BY_ZERO` を返します
#[allow(dead_code)]
#[utoipa::path(
    get,
    path = "/math/div",
    tag = "Math",
    params(
        ("a" = Option<f64>, Query, description = "被除数（デフォルト: 0）"),
        ("b" = Option<f64>, Query, description = "除数（デフォルト: 0）")
    ),
    responses(
        (status = 200, description = "計算結果", body = CalculationResult),
        (status = 400, description = "0除算、またはパラメータが不正", body = ErrorResponse)
    )
)]
fn div() {}

/// 剰余
///
/// 結果の符号は除数 `b` に合わせます（例: -7 mod 3 = 2）。
/// `b` が0の場合は `DIVISION_BY_ZERO` を返します
#[allow(dead_code)]
#[utoipa::path(
    get,
    path = "/math/mod",
    tag = "Math",
    params(
        ("a" = Option<f64>, Query, description = "被除数（デフォルト: 0）"),
        ("b" = Option<f64>, Query, description = "除数（デフォルト: 0）")
    ),
    responses(
        (status = 200, description = "計算結果", body = CalculationResult),
        (status = 400, description = "0除算、またはパラメータが不正", body = ErrorResponse)
    )
)]
fn modulo() {}

/// 累乗
///
/// 結果が表現可能な範囲を超えた場合は `OVERFLOW` を返します
#[allow(dead_code)]
#[utoipa::path(
    get,
    path = "/math/pow",
    tag = "Math",
    params(
        ("a" = Option<f64>, Query, description = "底（デフォルト: 0）"),
        ("b" = Option<f64>, Query, description = "指数（デフォルト: 0）")
    ),
    responses(
        (status = 200, description = "計算結果", body = CalculationResult),
        (status = 400, description = "オーバーフロー、0の負の累乗、またはパラメータが不正", body = ErrorResponse)
    )
)]
fn pow() {}

/// 対数 `log_b(a)`
///
/// `a` が0以下、または底が0以下か1の場合は `INVALID_DOMAIN` を返します
#[allow(dead_code)]
#[utoipa::path(
    get,
    path = "/math/log",
    tag = "Math",
    params(
        ("a" = Option<f64>, Query, description = "真数（デフォルト: 0）"),
        ("b" = Option<f64>, Query, description = "底（デフォルト: 0）"),
        ("base" = Option<LogBase>, Query, description = "底のショートカット。`e` または `10` を指定すると `b` は無視されます（デフォルト: manual）")
    ),
    responses(
        (status = 200, description = "計算結果（`b` は実際に使用した底）", body = CalculationResult),
        (status = 400, description = "定義域外、またはパラメータが不正", body = ErrorResponse)
    )
)]
fn log() {}

/// 計算（JSONボディ）
///
/// 演算の種類とオペランドをJSONで受け取って計算します
#[allow(dead_code)]
#[utoipa::path(
    post,
    path = "/math/evaluate",
    tag = "Math",
    request_body = EvaluateRequest,
    responses(
        (status = 200, description = "計算結果", body = CalculationResult),
        (status = 400, description = "計算エラー、またはJSONが不正", body = ErrorResponse)
    )
)]
fn evaluate() {}

/// `OpenAPI` スキーマを JSON 文字列として取得
pub fn get_openapi_json() -> String {
    ApiDoc::openapi().to_pretty_json().unwrap_or_else(|e| {
        worker::console_log!("Failed to generate OpenAPI JSON: {:?}", e);
        r#"{"openapi":"3.1.0","info":{"title":"Calc API","version":"1.0.0"},"paths":{},"components":{},"tags":[]}"#.to_string()
    })
}
