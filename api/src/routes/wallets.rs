//! Wallet API routes

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chain_data::Network;
use chrono::Utc;
use serde::Deserialize;

use scorer::{score_wallet, AppError, ScoreReport};

use crate::AppState;

/// Query params for score endpoint
#[derive(Debug, Deserialize)]
pub struct ScoreParams {
    pub chain_id: Option<u64>,
}

/// GET /api/wallets/:address/score
/// Fetches the wallet's history and returns its reputation score
pub async fn get_wallet_score(
    State(state): State<Arc<AppState>>,
    Path(address): Path<String>,
    Query(params): Query<ScoreParams>,
) -> impl IntoResponse {
    let network = Network::resolve(params.chain_id);

    let result = score_wallet(
        state.transactions.as_ref(),
        state.transfers.as_ref(),
        network,
        &address,
        Utc::now(),
    )
    .await;

    match result {
        Ok(score) => Json(ScoreReport::new(&address, network, &score)).into_response(),
        Err(AppError::InvalidAddress(_)) => {
            (StatusCode::BAD_REQUEST, "Invalid wallet address").into_response()
        }
        Err(e @ AppError::InputUnavailable(_)) => {
            tracing::error!("Failed to fetch wallet data: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                "Error fetching data. Check API keys or try another network/wallet.",
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to calculate score: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::Request,
    };
    use chain_data::{
        SourceError, TokenTransfer, Transaction, TransactionSource, TransferSource,
    };
    use tower::ServiceExt;

    use super::*;

    const WALLET: &str = "0xd8da6bf26964af9d7eed9e03e53415d37aa96045";

    struct StubSource {
        transfers: usize,
        fail: bool,
    }

    #[async_trait]
    impl TransactionSource for StubSource {
        async fn fetch_transactions(
            &self,
            _network: &Network,
            _address: &str,
        ) -> Result<Vec<Transaction>, SourceError> {
            if self.fail {
                return Err(SourceError::Request {
                    service: "Covalent",
                    message: "connection refused".into(),
                });
            }
            Ok(vec![Transaction {
                to_address: Some("0x323a76393544d5ecca80cd6ef2a560c6a395b7e3".into()),
                ..Default::default()
            }])
        }
    }

    #[async_trait]
    impl TransferSource for StubSource {
        async fn fetch_transfers(
            &self,
            _network: &Network,
            _address: &str,
        ) -> Result<Vec<TokenTransfer>, SourceError> {
            Ok(vec![TokenTransfer::default(); self.transfers])
        }
    }

    fn app(fail: bool) -> axum::Router {
        let source = Arc::new(StubSource {
            transfers: 40,
            fail,
        });
        let state = Arc::new(AppState {
            transactions: source.clone(),
            transfers: source,
        });

        crate::routes::api_routes().with_state(state)
    }

    async fn get(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_score_ok() {
        let (status, body) = get(app(false), &format!("/wallets/{}/score?chain_id=137", WALLET)).await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["address"], WALLET);
        assert_eq!(json["chainId"], 137);
        assert_eq!(json["scores"]["governance"], 2);
        assert_eq!(json["scores"]["uniqueContracts"], 1);
        assert_eq!(json["scores"]["airdrops"], 20);
        assert_eq!(json["totalScore"], 23);
        assert_eq!(json["badge"], "Bronze");
    }

    #[tokio::test]
    async fn test_unknown_chain_falls_back_to_mainnet() {
        let (status, body) = get(app(false), &format!("/wallets/{}/score?chain_id=56", WALLET)).await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["chainId"], 1);
        assert_eq!(json["network"], "Ethereum Mainnet");
    }

    #[tokio::test]
    async fn test_invalid_address() {
        let (status, _) = get(app(false), "/wallets/not-a-wallet/score").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_source_failure() {
        let (status, _) = get(app(true), &format!("/wallets/{}/score", WALLET)).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_networks() {
        let (status, body) = get(app(false), "/networks").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 4);
        assert_eq!(json[2]["chainId"], 137);
        assert_eq!(json[2]["name"], "Polygon Mainnet");
    }
}
