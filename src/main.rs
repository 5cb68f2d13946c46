use axum::{
    routing::{get, post},
    Router,
};
use paygate_backend::api::{self, GatewayState};
use paygate_backend::config::AppConfig;
use paygate_backend::gateway::service::PaystackGateway;
use paygate_backend::logging::init_tracing;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use uuid::Uuid;

/// Request ID generator for request correlation across logs.
#[derive(Clone, Copy)]
struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        http::HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        anyhow::anyhow!(e)
    })?;
    init_tracing(&config.logging);

    config.validate().map_err(|e| {
        error!("Configuration validation failed: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.paystack.active_env,
        live = config.paystack.is_live(),
        "🚀 Starting Paygate backend service"
    );

    let gateway = PaystackGateway::new(&config.paystack).map_err(|e| {
        error!("Failed to initialize payment gateway: {}", e);
        anyhow::anyhow!(e.to_string())
    })?;

    let state = GatewayState {
        gateway: Arc::new(gateway),
    };

    let app = Router::new()
        .route("/", get(api::status::root))
        .route("/health", get(api::status::health))
        .route("/health/live", get(api::status::health))
        .route(
            "/api/paystack/initialize",
            post(api::payments::initialize_payment),
        )
        .route(
            "/api/paystack/verify/{reference}",
            get(api::payments::verify_payment),
        )
        .route(
            "/api/paystack/callback",
            get(api::payments::payment_callback),
        )
        .route(
            "/api/paystack/recipient",
            post(api::transfers::create_recipient),
        )
        .route(
            "/api/paystack/transfer",
            post(api::transfers::initiate_transfer),
        )
        .route("/api/paystack/environment", get(api::status::environment))
        .route("/webhooks/paystack", post(api::webhooks::handle_webhook))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        );

    info!("✅ Routes configured");

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        error!("Failed to bind to address {}: {}", addr, e);
        e
    })?;

    info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down cleanly");
    Ok(())
}
