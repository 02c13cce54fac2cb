//! 実行時設定
//!
//! Workersの環境変数（`wrangler.toml` の `[vars]`）から読み込みます。

use worker::Env;

use crate::constants::{ALLOWED_ORIGINS_ENV, WILDCARD_ORIGIN};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// 空の場合は全てのOriginを許可
    allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env(env: &Env) -> Self {
        let Ok(var) = env.var(ALLOWED_ORIGINS_ENV) else {
            return Self::default();
        };
        Self::from_allowed_origins(&var.to_string())
    }

    /// カンマ区切りでパースし、トリムして空エントリを無視
    pub fn from_allowed_origins(raw: &str) -> Self {
        let allowed_origins = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect();
        Self { allowed_origins }
    }

    /// リクエストのOriginに対するCORSの扱いを決める
    ///
    /// 許可リストが設定されている場合は完全一致したOriginのみ返し、
    /// 拒否した場合も含めて `Vary: Origin` を付与します。
    pub fn cors_policy<'a>(&'a self, request_origin: Option<&'a str>) -> CorsPolicy<'a> {
        if self.allowed_origins.is_empty() {
            return CorsPolicy {
                allow_origin: Some(WILDCARD_ORIGIN),
                vary_origin: false,
            };
        }
        CorsPolicy {
            allow_origin: request_origin
                .filter(|origin| self.allowed_origins.iter().any(|o| o == origin)),
            vary_origin: true,
        }
    }
}

/// 1リクエスト分のCORSヘッダー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorsPolicy<'a> {
    /// `None` の場合は `Access-Control-Allow-Origin` を付与しない
    allow_origin: Option<&'a str>,
    vary_origin: bool,
}

impl<'a> CorsPolicy<'a> {
    pub fn header_pairs(&self) -> Vec<(&'static str, &'a str)> {
        let mut pairs = Vec::with_capacity(5);
        if let Some(origin) = self.allow_origin {
            pairs.push(("Access-Control-Allow-Origin", origin));
        }
        if self.vary_origin {
            pairs.push(("Vary", "Origin"));
        }
        pairs.extend([
            ("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
            ("Access-Control-Allow-Headers", "Content-Type"),
            ("Access-Control-Max-Age", "86400"),
        ]);
        pairs
    }
}
