//! Application startup and lifecycle management.

use crate::config::DocumentConfig;
use crate::handlers::{
    health_check, metrics_endpoint, readiness_check, GetDocumentWebAdapter, HealthState,
};
use crate::ports::GetDocumentUseCase;
use crate::services::GetDocumentService;
use axum::{body::Body, http::Request, middleware::from_fn, routing::get, Router};
use service_core::error::{not_found, AppError};
use service_core::middleware::{make_request_span, metrics_middleware, request_id_middleware};
use service_core::observability::init_metrics;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Builds the full HTTP router with the given use case behind the document route.
pub fn build_router(config: &DocumentConfig, use_case: Arc<dyn GetDocumentUseCase>) -> Router {
    let router = Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(metrics_endpoint))
        .with_state(HealthState {
            service_name: config.service_name.clone(),
        });

    GetDocumentWebAdapter::new(use_case)
        .register(router)
        .fallback(not_found)
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            make_request_span(request)
        }))
        .layer(from_fn(request_id_middleware))
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the placeholder document service.
    pub async fn build(config: DocumentConfig) -> Result<Self, AppError> {
        Self::build_with_use_case(config, Arc::new(GetDocumentService::new())).await
    }

    pub async fn build_with_use_case(
        config: DocumentConfig,
        use_case: Arc<dyn GetDocumentUseCase>,
    ) -> Result<Self, AppError> {
        init_metrics();

        let router = build_router(&config, use_case);

        // Port 0 picks a random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(service = %config.service_name, "Listening on {}", port);

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until Ctrl+C or SIGTERM.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
