use std::sync::Arc;
use tokio::net::TcpListener;
use scroll_lab_api::config::Config;
use scroll_lab_api::kernel::build_app;
use scroll_lab_api::plugins::default_plugins;
use scroll_lab_api::plugins::metrics::MetricsPlugin;
use scroll_lab_api::store::MemStorage;

pub struct TestServer {
    pub base: String,
    pub storage: Arc<MemStorage>,
    pub handle: tokio::task::JoinHandle<()>,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Serves the full plugin set plus `/metrics` on an ephemeral local port.
pub async fn spawn_app() -> anyhow::Result<TestServer> {
    spawn_app_with_config(Config::default()).await
}

pub async fn spawn_app_with_config(config: Config) -> anyhow::Result<TestServer> {
    let storage = Arc::new(MemStorage::new());
    let metrics = MetricsPlugin::new()?;
    let plugins = default_plugins(storage.clone(), &config);
    let app = build_app(&plugins, Some(metrics.clone()))
        .await
        .nest("/metrics", metrics.router());

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server error");
    });

    Ok(TestServer { base: format!("http://{}", addr), storage, handle })
}
