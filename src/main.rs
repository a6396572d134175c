use std::sync::Arc;

use mock_vllm::app::create_app;
use mock_vllm::config;
use mock_vllm::shutdown::{ProcessGroupShutdown, Shutdown};
use mock_vllm::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = config::load_config().expect("Failed to load config");
    log::info!(
        "Starting mock inference service on {}:{}...",
        config.host,
        config.port
    );

    let state = Arc::new(AppState::new());
    let shutdown: Arc<dyn Shutdown> = Arc::new(ProcessGroupShutdown::new());

    let app_factory = move || create_app(state.clone(), shutdown.clone());

    let server = actix_web::HttpServer::new(app_factory);

    server.bind((config.host.as_str(), config.port))?.run().await
}
