use anyhow::Context;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use crate::config::Config;
use crate::helpers::handler_404::page_not_found_handler;

pub mod health_check;
pub mod schedule_controller;

pub async fn serve(config: &Config) -> anyhow::Result<()> {
    let application = router_endpoints()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors_layer(config)?)
        );

    let address = config.socket_addr();
    info!("API server listening on: {}", address);
    axum::Server::try_bind(&address)
        .with_context(|| format!("Failed to bind API server to {}", address))?
        .serve(application.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Error spinning up the API server")
}

pub fn router_endpoints() -> Router {
    health_check::router()
        .merge(schedule_controller::router())
        .fallback(page_not_found_handler)
}

fn cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let allow_origin = if config.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let origins = config
            .origins()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("Invalid origin url: {}", origin))
            })
            .collect::<anyhow::Result<Vec<HeaderValue>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allow_origin)
        .allow_headers([CONTENT_TYPE]))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal due to: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use clap::Parser;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    #[tokio::test]
    async fn unknown_paths_get_a_json_404() {
        let response = router_endpoints()
            .oneshot(Request::builder().uri("/reservations/1").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({"message": "No route found for /reservations/1"}));
    }

    #[test]
    fn cors_rejects_malformed_origins() {
        let config = Config::try_parse_from([
            "schedule-service",
            "--origin-urls", "http://ok.example.com,bad\norigin",
        ]).unwrap();
        assert!(cors_layer(&config).is_err());

        let config = Config::try_parse_from(["schedule-service", "--origin-urls", "*"]).unwrap();
        assert!(cors_layer(&config).is_ok());
    }
}
