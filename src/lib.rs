use worker::{Context, Env, Method, Request, Response, Result, event};

pub mod calculator;
mod config;
mod constants;
mod handlers;
mod models;
mod openapi;
mod utils;

use config::AppConfig;

/// メインルーター
/// パスとメソッドに応じて各ハンドラに振り分けます
async fn main_router(req: Request, env: Env, _ctx: Context) -> Result<Response> {
    let url = req.url()?;
    let path = url.path();
    let method = req.method();

    let config = AppConfig::from_env(&env);
    let request_origin = req.headers().get("Origin").ok().flatten();
    let cors = config.cors_policy(request_origin.as_deref());

    // OPTIONSリクエスト（プリフライトリクエスト）を処理
    if method == Method::Options {
        let headers = utils::create_cors_headers(&cors)?;
        return Ok(Response::ok("")?.with_headers(headers));
    }

    let response = match (method, path) {
        (Method::Get, "/") => handlers::general::welcome()?,
        (Method::Get, "/health") => handlers::general::health()?,
        (Method::Get, "/math") => handlers::math::operations::handle()?,
        (Method::Get, "/math/log") => handlers::math::log::handle(&url)?,
        (Method::Get, path) if path.starts_with("/math/") => {
            handlers::math::calculate::handle(&url)?
        }
        (Method::Post, "/math/evaluate") => handlers::math::evaluate::handle(req).await?,
        (Method::Get, "/openapi.json") => handlers::docs::openapi_json()?,
        (Method::Get, "/docs") => handlers::docs::swagger_ui()?,
        (_, path) => handlers::general::not_found(path)?,
    };

    // すべてのレスポンスにCORSヘッダーを追加
    utils::add_cors_headers(response, &cors)
}

#[event(fetch)]
async fn fetch(req: Request, env: Env, ctx: Context) -> Result<Response> {
    main_router(req, env, ctx).await
}
