use tracing_subscriber::EnvFilter;

use train_roulette::config::AppConfig;
use train_roulette::journey::JourneyFinder;
use train_roulette::transport::{
    MockTransportClient, TransportBackend, TransportClient, TransportConfig,
};
use train_roulette::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("train_roulette=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    // Fixtures replace the live API when a mock directory is configured
    let transport = match &config.mock_data_dir {
        Some(dir) => TransportBackend::Mock(
            MockTransportClient::new(dir).expect("Failed to load mock transport data"),
        ),
        None => TransportBackend::Live(
            TransportClient::new(TransportConfig::from_app(&config))
                .expect("Failed to create transport client"),
        ),
    };
    tracing::info!(
        backend = transport.kind(),
        base_url = %config.transport_base_url,
        board_limit = config.board_limit,
        "transport ready"
    );
    if let Some(position) = config.default_position {
        tracing::info!(%position, "using fallback position when the browser sends none");
    }

    let finder = JourneyFinder::new(transport, config.board_limit);
    let state = AppState::new(finder, &config);
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("Failed to bind listener");
    tracing::info!("Train Roulette listening on http://{}", config.addr);
    tracing::info!("API Endpoints:");
    tracing::info!("  GET  /health           - Health check");
    tracing::info!("  GET  /journey/random   - Pick a random journey (?lat=&lon=)");
    tracing::info!("  POST /journey/validate - Add the shown journey to the history");
    tracing::info!("  POST /journey/clear    - Clear the history");
    tracing::info!("  GET  /journey/history  - List the history");

    axum::serve(listener, app).await.expect("Server error");
}
