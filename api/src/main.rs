//! ProofDrop API Server
//!
//! REST API endpoints for the reputation score front-end.

use std::{env, net::SocketAddr, sync::Arc};

use axum::{routing::get, Router};
use chain_data::{TransactionSource, TransferSource};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod error;
mod routes;

use error::ApiError;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub transactions: Arc<dyn TransactionSource>,
    pub transfers: Arc<dyn TransferSource>,
}

mod defaults {
    pub const API_PORT: &str = "8080";
    pub const API_HOST: &str = "0.0.0.0";
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=debug,scorer=info,chain_data=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ProofDrop API Server...");

    // Fail fast when indexing credentials are missing
    let sources = chain_data::initialize_sources()?;
    tracing::info!("Indexing sources configured");

    // Create app state
    let state = Arc::new(AppState {
        transactions: Arc::new(sources.transactions),
        transfers: Arc::new(sources.transfers),
    });

    let app = build_router(state);

    // Get port from environment
    let port = parse_port(env::var("API_PORT").ok().as_deref())?;

    let host = env::var("API_HOST").unwrap_or_else(|_| defaults::API_HOST.to_string());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Parse `API_PORT`, using the default when unset or blank
fn parse_port(raw: Option<&str>) -> Result<u16, ApiError> {
    let value = raw
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(defaults::API_PORT);

    value
        .parse::<u16>()
        .map_err(|_| ApiError::InvalidPort(value.to_string()))
}

/// Build the full router with middleware
fn build_router(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root endpoint with API info
        .route("/", get(root))
        // Health check
        .route("/health", get(health_check))
        // API routes
        .nest("/api", routes::api_routes())
        // State and middleware
        .with_state(state)
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

/// Root endpoint - API information
async fn root() -> axum::response::Html<&'static str> {
    axum::response::Html(r#"
<!DOCTYPE html>
<html>
<head>
    <title>ProofDrop API</title>
    <style>
        body { font-family: system-ui, sans-serif; max-width: 800px; margin: 50px auto; padding: 20px; background: #1a1a2e; color: #eee; }
        h1 { color: #a855f7; }
        a { color: #4fc3f7; }
        code { background: #333; padding: 2px 6px; border-radius: 4px; }
        .endpoint { margin: 10px 0; padding: 10px; background: #252540; border-radius: 8px; }
        .method { color: #4caf50; font-weight: bold; }
    </style>
</head>
<body>
    <h1>ProofDrop API</h1>
    <p>Airdrop reputation scores for EVM wallets</p>

    <h2>Endpoints</h2>

    <div class="endpoint">
        <span class="method">GET</span> <a href="/health">/health</a> - Health check
    </div>

    <h3>Networks</h3>
    <div class="endpoint">
        <span class="method">GET</span> <a href="/api/networks">/api/networks</a> - Supported networks
    </div>

    <h3>Wallets</h3>
    <div class="endpoint">
        <span class="method">GET</span> <code>/api/wallets/:address/score?chain_id=1</code> - Reputation score and badge
    </div>
</body>
</html>
    "#)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port(None).unwrap(), 8080);
        assert_eq!(parse_port(Some(" ")).unwrap(), 8080);
        assert_eq!(parse_port(Some("3000")).unwrap(), 3000);
        assert!(matches!(
            parse_port(Some("http")),
            Err(ApiError::InvalidPort(ref v)) if v == "http"
        ));
        assert!(parse_port(Some("70000")).is_err());
    }
}
