// API documentation handlers

use axum::{
    http::header,
    response::{Html, IntoResponse},
};
use utoipa::OpenApi;

use crate::handlers::scan::ScanRequest;
use crate::services::ScanReport;
use crate::utils::risk_scorer::Classification;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Urlscope Backend API",
        description = "URL investigation backend: risk scoring with hosting/geo enrichment",
        version = "0.1.0"
    ),
    paths(crate::handlers::scan::scan_url),
    components(schemas(ScanRequest, ScanReport, Classification)),
    tags(
        (name = "Scan", description = "URL scanning and risk scoring")
    )
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification at /api/v1/docs/openapi.json
pub async fn serve_openapi_spec() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        ApiDoc::openapi().to_pretty_json().unwrap_or_default(),
    )
}

/// Serve Swagger UI HTML at /api/v1/docs
pub async fn serve_swagger_ui() -> impl IntoResponse {
    Html(SWAGGER_UI_HTML)
}

// Embedded Swagger UI HTML
const SWAGGER_UI_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Urlscope API Documentation</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui.css" />
    <style>
        body {
            margin: 0;
            padding: 0;
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
        }
        #swagger-ui {
            max-width: 1460px;
            margin: 0 auto;
            padding: 20px;
        }
        .topbar {
            display: none;
        }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui-bundle.js"></script>
    <script>
        window.onload = function() {
            SwaggerUIBundle({
                url: "/api/v1/docs/openapi.json",
                dom_id: "#swagger-ui",
                presets: [SwaggerUIBundle.presets.apis],
                layout: "BaseLayout"
            });
        };
    </script>
</body>
</html>"##;
