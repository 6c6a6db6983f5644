mod application;
mod domain;
mod infrastructure;
mod presentation;

use infrastructure::{AppConfig, container::AppContainer};
use presentation::http::server::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()?;
    let container = AppContainer::new(&config).await?;

    let server = HttpServer::new(
        container.gallery_handler.clone(),
        container.image_handler.clone(),
        &config,
    );

    server.run().await
}
