//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use homeswitch_app::ports::{CommandPublisher, DeviceDirectory};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the device API at the root and, when `assets_dir` is given, serves
/// the built dashboard from it for every other path.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<D, P>(state: AppState<D, P>, assets_dir: Option<&Path>) -> Router
where
    D: DeviceDirectory + Send + Sync + 'static,
    P: CommandPublisher + Send + Sync + 'static,
{
    let router = Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes());

    let router = match assets_dir {
        Some(dir) => {
            tracing::debug!(path = %dir.display(), "serving dashboard assets");
            router.fallback_service(ServeDir::new(dir))
        }
        None => router,
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
