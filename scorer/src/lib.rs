//! Wallet reputation scoring
//!
//! Turns a wallet's transaction history and token transfers into a
//! 0-100 reputation score and a badge.

pub mod error;
pub mod report;
pub mod scoring;
pub mod service;

pub use error::AppError;
pub use report::ScoreReport;
pub use scoring::{Badge, ReputationScore, ReputationScorer, ScoreBreakdown};
pub use service::{parse_chain_id, score_wallet};
