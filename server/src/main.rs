mod config;
mod routes;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    let app = routes::app().expect("router assembly failed");
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .expect("failed to bind");

    let port = config.port;
    tracing::info!(%port, "ipl-auction listening");
    axum::serve(listener, app).await.expect("server failed");
}
