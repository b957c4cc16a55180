use std::net::SocketAddr;

use axum::{routing::get, Router};

use crate::{catalog::Catalog, query::QueryLimits, storage::Storage};

mod handlers;
pub mod models;

use handlers::{get_title, health, list_titles, not_found};

#[derive(Clone)]
pub struct AppState<S: Storage> {
    pub catalog: Catalog<S>,
    pub started_at: std::time::SystemTime,
}

pub fn router<S: Storage + Clone + Send + Sync + 'static>(
    storage: S,
    limits: QueryLimits,
) -> Router {
    let state = AppState {
        catalog: Catalog::new(storage, limits),
        started_at: std::time::SystemTime::now(),
    };

    Router::new()
        .route("/health", get(health::<S>))
        .route("/api/titles", get(list_titles::<S>))
        .route("/api/titles/", get(list_titles::<S>))
        .route("/api/titles/:title_id", get(get_title::<S>))
        .fallback(not_found)
        .with_state(state)
}

pub async fn serve<S: Storage + Clone + Send + Sync + 'static>(
    addr: SocketAddr,
    storage: S,
    limits: QueryLimits,
    shutdown: tokio_util::sync::CancellationToken,
) -> anyhow::Result<()> {
    let app = router(storage, limits);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("🌐 REST listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.cancelled().await;
            log::info!("🛑 REST shutdown requested");
        })
        .await?;
    log::info!("👋 REST server exited");
    Ok(())
}
