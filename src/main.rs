mod config;
mod routes;
mod services;
mod state;
mod views;

#[tokio::main]
async fn main() {
    // A missing .env is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::WebConfig::from_env().expect("invalid configuration");
    let port = config.port;
    tracing::info!(
        api = %config.api_base_url,
        auth_api = %config.auth_api_base_url,
        assets = %config.assets_dir.display(),
        "backend configured"
    );

    let app = routes::app(state::AppState::new(config));
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "smartspend-web listening");
    axum::serve(listener, app).await.expect("server failed");
}
