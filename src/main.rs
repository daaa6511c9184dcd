use axum::Router;
use dotenvy::dotenv;
use scroll_lab_api::config::Config;
use scroll_lab_api::kernel::{build_app, Plugin};
use scroll_lab_api::plugins::default_plugins;
use scroll_lab_api::plugins::metrics::MetricsPlugin;
use scroll_lab_api::store::MemStorage;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // one storage object for the whole process, handed to every plugin
    let storage = MemStorage::new().into_arc();
    let metrics_plugin = MetricsPlugin::new()?;
    let plugins_vec: Vec<Box<dyn Plugin>> = default_plugins(storage, &config);

    let plugin_names: Vec<&'static str> = plugins_vec.iter().map(|p| p.name()).collect();
    tracing::info!("mounting plugins: {:?}", plugin_names);

    let mut app: Router = build_app(&plugins_vec, Some(metrics_plugin.clone())).await;

    // not instrumented to avoid counting scrapes
    app = app.nest("/metrics", metrics_plugin.router());

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            for p in plugins_vec.iter() {
                p.on_shutdown().await;
            }
        })
        .await?;

    Ok(())
}
