//! FieldScore AI - Gateway Server
//!
//! Serves farm risk assessments and assistant answers, degrading to local
//! scoring and canned answers when the model service is down.

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fieldscore_backend::{
    create_app,
    external::{build_http_client, ChatClient, PredictionClient},
    AppState, Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    // Initialize tracing
    let json_logs = config.logging.json;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "fieldscore_server=debug,fieldscore_backend=debug,tower_http=debug".into()
            }),
        )
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json_logs).then(tracing_subscriber::fmt::layer))
        .init();

    tracing::info!("Starting FieldScore gateway");
    tracing::info!("Environment: {}", config.environment);

    let http_client = build_http_client(config.upstream.timeout())?;
    let predictor = PredictionClient::new(http_client.clone(), &config.upstream.base_url);
    let assistant = ChatClient::new(http_client, &config.upstream.base_url);

    tracing::info!("Prediction endpoint: {}", predictor.endpoint());
    tracing::info!("Chat endpoint: {}", assistant.endpoint());
    tracing::info!("Chat failure policy: {:?}", config.chat.failure_policy);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    // Create application state
    let state = AppState::new(config, Arc::new(predictor), Arc::new(assistant));

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
