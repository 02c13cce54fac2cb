use worker::{Headers, Response, Result};

use crate::constants::{API_TITLE, SWAGGER_UI_VERSION};
use crate::openapi::get_openapi_json;

/// `OpenAPI` JSON エンドポイント（utoipa で自動生成）
pub fn openapi_json() -> Result<Response> {
    let headers = Headers::new();
    headers.set("Content-Type", "application/json")?;

    Ok(Response::ok(get_openapi_json())?.with_headers(headers))
}

/// Swagger UI を提供
pub fn swagger_ui() -> Result<Response> {
    let headers = Headers::new();
    headers.set("Content-Type", "text/html; charset=utf-8")?;

    Ok(Response::ok(swagger_html())?.with_headers(headers))
}

fn swagger_html() -> String {
    let cdn = format!("https://unpkg.com/swagger-ui-dist@{SWAGGER_UI_VERSION}");
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{API_TITLE} - Swagger UI</title>
    <link rel="stylesheet" href="{cdn}/swagger-ui.css">
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="{cdn}/swagger-ui-bundle.js"></script>
    <script>
        window.onload = () => {{
            SwaggerUIBundle({{ url: '/openapi.json', dom_id: '#swagger-ui', tryItOutEnabled: true }});
        }};
    </script>
</body>
</html>"#
    )
}
