use axum::Router;
use axum::middleware;
use async_trait::async_trait;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::plugins::metrics::{track_request, MetricsPlugin};

#[async_trait]
pub trait Plugin: Send + Sync {
    /// Routes served by the plugin, relative to its mount point.
    async fn router(&self) -> Router;
    /// Mount point without the leading slash, e.g. `api/items`.
    fn name(&self) -> &'static str;
    /// Optional lifecycle hook called when the kernel starts.
    async fn on_start(&self) {}
    /// Optional lifecycle hook called on shutdown.
    async fn on_shutdown(&self) {}
}

/// Builds the application router by mounting each plugin under `/{plugin.name()}`.
///
/// When a [`MetricsPlugin`] is supplied every plugin router is instrumented with
/// the plugin name as its `path` label.
pub async fn build_app(plugins: &[Box<dyn Plugin>], metrics: Option<MetricsPlugin>) -> Router {
    let mut app = Router::new();

    for plugin in plugins.iter() {
        info!("starting plugin {}", plugin.name());
        plugin.on_start().await;
        let mut router = plugin.router().await;
        if let Some(m) = metrics.as_ref() {
            router = router.layer(middleware::from_fn_with_state(
                (m.clone(), plugin.name()),
                track_request,
            ));
        }
        app = app.nest(&format!("/{}", plugin.name()), router);
    }

    app.layer(TraceLayer::new_for_http())
}
