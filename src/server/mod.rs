//! Dashboard Host
//!
//! Serves the compiled dashboard bundle with Axum. Unknown paths fall back
//! to `index.html` so the single-page app can handle them.
//!
//! # Endpoints
//!
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Status including whether the bundle is present
//! - `GET /*` - Static files from the configured bundle directory

pub mod error;
pub mod health;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::AppState;

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Build the router: health probes plus the static bundle
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let index = static_dir.join("index.html");
    let assets = ServeDir::new(&static_dir).fallback(ServeFile::new(index));

    let health_routes = Router::new()
        .route("/live", get(health::liveness))
        .route("/", get(health::full_health));

    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .nest("/health", health_routes)
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::HEAD])
}

/// Start the dashboard host
pub async fn serve(config: ServerConfig) -> ServerResult<()> {
    if !config.static_dir.is_dir() {
        return Err(ServerError::MissingStaticDir(
            config.static_dir.display().to_string(),
        ));
    }

    let addr = config.addr();
    let router = build_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Crime Foresight dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Dashboard host shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    const INDEX: &str = "<!DOCTYPE html><title>Crime Foresight</title>";

    fn create_test_app() -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log('ok');").unwrap();

        let config = ServerConfig {
            static_dir: dir.path().to_path_buf(),
            ..Default::default()
        };

        (build_router(AppState::new(config)), dir)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app();
        let (status, _) = get(app, "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _dir) = create_test_app();
        let (status, body) = get(app, "/health").await;
        assert_eq!(status, StatusCode::OK);

        let health: health::HealthResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.bundle, "ok");
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_health_degraded_without_bundle() {
        let dir = tempdir().unwrap();
        let config = ServerConfig {
            static_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let app = build_router(AppState::new(config));

        let (_, body) = get(app, "/health").await;
        let health: health::HealthResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(health.status, "degraded");
    }

    #[tokio::test]
    async fn test_serves_static_asset() {
        let (app, _dir) = create_test_app();
        let (status, body) = get(app, "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log('ok');");
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let (app, _dir) = create_test_app();
        let (status, body) = get(app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let (app, _dir) = create_test_app();
        let (status, body) = get(app, "/incidents/42").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);
    }

    #[tokio::test]
    async fn test_serve_rejects_missing_dir() {
        let config = ServerConfig {
            static_dir: "/nonexistent/dist".into(),
            ..Default::default()
        };
        let result = serve(config).await;
        assert!(matches!(result, Err(ServerError::MissingStaticDir(_))));
    }

    #[test]
    fn test_cors_layer_skips_invalid_origins() {
        // Building must not panic on a bad header value
        let _ = cors_layer(&["http://localhost:8084".to_string(), "bad\norigin".to_string()]);
        let _ = cors_layer(&[]);
    }
}
