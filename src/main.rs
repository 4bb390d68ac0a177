use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flatconnectio_server::routes::{
    approve_property, benefits, brokerage_info, client_config, faq, featured_listings,
    get_listing, health_check, how_it_works, list_buyers, list_listings, login, logout,
    pending_properties, reject_property, request_callback, request_otp, seo_metadata,
    submit_property, verify_otp,
};
use flatconnectio_server::{AppState, Config, HostedTableClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flatconnectio_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting FlatConnectio server...");

    // Load configuration; the hosted credentials are hard requirements
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "Environment: {}, Server: {}",
        config.environment,
        config.server_address()
    );
    if config.admin_key.is_none() {
        tracing::warn!("ADMIN_KEY not set - moderation endpoints are disabled");
    }

    // Client for the hosted lead tables
    let hosted = HostedTableClient::new(&config.supabase_url, &config.supabase_publishable_key)?;

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(
            config
                .allowed_origins
                .iter()
                .map(|s| s.parse::<axum::http::HeaderValue>().unwrap())
                .collect::<Vec<_>>(),
        )
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers(Any);

    // Create app state
    let state = AppState::new(config.clone(), hosted);

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/config", get(client_config))
        .route("/api/auth/signup", post(request_otp))
        .route("/api/auth/verify", post(verify_otp))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/listings", get(list_listings))
        .route("/api/listings/featured", get(featured_listings))
        .route("/api/listings/:id", get(get_listing))
        .route("/api/listings/:id/inquiry", post(request_callback))
        .route("/api/properties", post(submit_property))
        .route("/api/admin/pending", get(pending_properties))
        .route("/api/admin/approve", post(approve_property))
        .route("/api/admin/reject", post(reject_property))
        .route("/api/content/brokerage", get(brokerage_info))
        .route("/api/content/how-it-works", get(how_it_works))
        .route("/api/content/benefits", get(benefits))
        .route("/api/content/faq", get(faq))
        .route("/api/content/seo", get(seo_metadata))
        .route("/debug/buyers", get(list_buyers))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server_address().parse()?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
