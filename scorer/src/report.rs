//! Presentation of a calculated score

use chain_data::{short_address, Network};
use serde::Serialize;

use crate::scoring::{ComponentScore, ReputationScore, ScoreBreakdown};

/// Highest possible total score
pub const MAX_SCORE: u8 = 100;

/// Score of one wallet, shaped for JSON consumers
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub address: String,
    pub chain_id: u64,
    pub network: String,
    pub scores: ScoreBreakdown,
    pub components: Vec<ComponentScore>,
    pub total_score: u8,
    pub max_score: u8,
    pub badge: String,
    pub badge_class: String,
}

impl ScoreReport {
    pub fn new(address: &str, network: &Network, score: &ReputationScore) -> Self {
        Self {
            address: address.to_string(),
            chain_id: network.chain_id,
            network: network.name.to_string(),
            scores: score.breakdown,
            components: score.components.clone(),
            total_score: score.total,
            max_score: MAX_SCORE,
            badge: score.badge.label().to_string(),
            badge_class: score.badge.css_class(),
        }
    }

    /// Plain-text report for terminals
    pub fn render_text(&self) -> String {
        let components: String = self
            .components
            .iter()
            .map(|component| {
                format!(
                    "  {:<18}{:>3} / {:<3} {}\n",
                    format!("{}:", component.name),
                    component.score,
                    component.max_score,
                    component.reason
                )
            })
            .collect();

        format!(
            "Connected Wallet: {} ({})\n\nYour Reputation Score\n{}\nTotal Score: {} / {}\nYour Badge: {}\n",
            short_address(&self.address),
            self.network,
            components,
            self.total_score,
            self.max_score,
            self.badge
        )
    }
}
