use crate::config::{ContactConfig, DatabaseConfig};
use crate::handlers;
use crate::services::{DocumentStore, MongoStore};
use axum::{
    http::Request,
    middleware::from_fn,
    routing::get,
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics_middleware, permissive_cors, request_id_middleware, REQUEST_ID_HEADER,
};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: ContactConfig,
    /// `None` when `DATABASE_URL` or `DATABASE_NAME` is missing.
    pub store: Option<Arc<dyn DocumentStore>>,
}

impl AppState {
    pub fn new(config: ContactConfig, store: Option<Arc<dyn DocumentStore>>) -> Self {
        Self { config, store }
    }

    pub fn store(&self) -> Result<&Arc<dyn DocumentStore>, AppError> {
        self.store.as_ref().ok_or_else(|| {
            AppError::DatabaseError(anyhow::anyhow!(
                "Database not available. Check DATABASE_URL and DATABASE_NAME environment variables"
            ))
        })
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::read_root))
        .route(
            "/api/contact",
            get(handlers::list_contacts).post(handlers::submit_contact),
        )
        .route("/test", get(handlers::test_database))
        .route("/metrics", get(handlers::metrics_endpoint))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(permissive_cors())
}

/// Opens the process-wide store, or returns `None` when the database is not configured.
pub async fn connect_store(
    config: &DatabaseConfig,
) -> Result<Option<Arc<dyn DocumentStore>>, AppError> {
    match (&config.url, &config.name) {
        (Some(url), Some(name)) => {
            let store = MongoStore::connect(url, name).await?;
            Ok(Some(Arc::new(store)))
        }
        _ => {
            tracing::warn!(
                "DATABASE_URL or DATABASE_NAME not set; contact endpoints will report the database as unavailable"
            );
            Ok(None)
        }
    }
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    pub async fn build(config: ContactConfig) -> Result<Self, AppError> {
        let store = connect_store(&config.database).await?;
        Self::build_with_store(config, store).await
    }

    pub async fn build_with_store(
        config: ContactConfig,
        store: Option<Arc<dyn DocumentStore>>,
    ) -> Result<Self, AppError> {
        let app = build_router(AppState::new(config.clone(), store));

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
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

    tracing::info!("Shutdown signal received");
}
