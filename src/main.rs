mod config;
mod routes;

use leptos::prelude::get_configuration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(config::log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let config = config::ServerConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;

    let app = routes::app(conf.leptos_options);
    let listener = tokio::net::TcpListener::bind(config.addr()).await?;

    tracing::info!(addr = %config.addr(), "simplebank-web listening");
    axum::serve(listener, app).await?;
    Ok(())
}
