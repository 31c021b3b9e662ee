//! Reputation scoring module
//!
//! Calculates the reputation score (0-100) for a wallet based on:
//! - Wallet age and gas spent (0-10 each)
//! - Unique contracts, governance, DeFi and airdrop activity (0-20 each)

pub mod badge;
pub mod contracts;
pub mod reputation;

pub use badge::Badge;
pub use reputation::{Component, ComponentScore, ReputationScore, ReputationScorer, ScoreBreakdown};
