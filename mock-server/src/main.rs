use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "8088".to_string());
    let addr = format!("127.0.0.1:{port}");
    let app = match (std::env::var("ARI_USERNAME"), std::env::var("ARI_PASSWORD")) {
        (Ok(user), Ok(pass)) => {
            tracing::info!(%user, "basic auth enabled");
            mock_ari::app_with_credentials(&user, &pass)
        }
        _ => mock_ari::app(),
    };
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "mock ARI server listening");
    mock_ari::run(listener, app).await
}
