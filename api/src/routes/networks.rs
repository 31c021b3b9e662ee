//! Network API routes

use axum::{response::IntoResponse, Json};
use chain_data::Network;
use serde::Serialize;

/// Network list response item
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkItem {
    pub chain_id: u64,
    pub name: &'static str,
}

impl From<&Network> for NetworkItem {
    fn from(n: &Network) -> Self {
        Self {
            chain_id: n.chain_id,
            name: n.name,
        }
    }
}

/// GET /api/networks
/// Returns the networks a score can be calculated on
pub async fn get_networks() -> impl IntoResponse {
    let items: Vec<NetworkItem> = Network::all().iter().map(Into::into).collect();
    Json(items)
}
