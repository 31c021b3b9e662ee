//! API route definitions

pub mod networks;
pub mod wallets;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::AppState;

/// Create all API routes
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Network routes
        .route("/networks", get(networks::get_networks))
        // Wallet routes
        .route("/wallets/:address/score", get(wallets::get_wallet_score))
}
