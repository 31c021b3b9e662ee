//! Reputation Calculator
//!
//! Calculates a score from 0-100 for each wallet to help separate
//! established users from fresh or sybil wallets.
//!
//! Score Components:
//! - Wallet Age (0-10): Months since the first transaction
//! - Gas Spent (0-10): Tenths of the native coin paid for gas
//! - Unique Contracts (0-20): Distinct addresses interacted with
//! - Governance (0-20): Calls to known governance contracts
//! - DeFi (0-20): Calls to known DeFi contracts
//! - Airdrops (0-20): Token transfers received

use std::collections::HashSet;

use alloy::primitives::{utils::format_ether, U256};
use chain_data::{is_hex_address, TokenTransfer, Transaction};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{badge::Badge, contracts};

/// Length of a scoring month
const SECONDS_PER_MONTH: i64 = 30 * 24 * 60 * 60;

/// 0.1 native coin in wei; one gas point per tenth spent
const WEI_PER_GAS_POINT: u64 = 100_000_000_000_000_000;

/// Points per governance or DeFi interaction
const POINTS_PER_INTERACTION: usize = 2;

/// One of the six reputation sub-scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    WalletAge,
    GasSpent,
    UniqueContracts,
    Governance,
    Defi,
    Airdrops,
}

impl Component {
    pub const ALL: [Component; 6] = [
        Component::WalletAge,
        Component::GasSpent,
        Component::UniqueContracts,
        Component::Governance,
        Component::Defi,
        Component::Airdrops,
    ];

    /// Maximum points; the caps add up to 100
    pub fn max_score(&self) -> u8 {
        match self {
            Component::WalletAge | Component::GasSpent => 10,
            Component::UniqueContracts
            | Component::Governance
            | Component::Defi
            | Component::Airdrops => 20,
        }
    }

    /// Serialized key, as used in the breakdown JSON
    pub fn key(&self) -> &'static str {
        match self {
            Component::WalletAge => "walletAge",
            Component::GasSpent => "gasSpent",
            Component::UniqueContracts => "uniqueContracts",
            Component::Governance => "governance",
            Component::Defi => "defi",
            Component::Airdrops => "airdrops",
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Component::WalletAge => "Wallet Age",
            Component::GasSpent => "Gas Spent",
            Component::UniqueContracts => "Unique Contracts",
            Component::Governance => "Governance",
            Component::Defi => "Defi",
            Component::Airdrops => "Airdrops",
        }
    }
}

/// The six sub-scores of a wallet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub wallet_age: u8,
    pub gas_spent: u8,
    pub unique_contracts: u8,
    pub governance: u8,
    pub defi: u8,
    pub airdrops: u8,
}

impl ScoreBreakdown {
    pub fn get(&self, component: Component) -> u8 {
        match component {
            Component::WalletAge => self.wallet_age,
            Component::GasSpent => self.gas_spent,
            Component::UniqueContracts => self.unique_contracts,
            Component::Governance => self.governance,
            Component::Defi => self.defi,
            Component::Airdrops => self.airdrops,
        }
    }

    /// Sum of all sub-scores (0-100)
    pub fn total(&self) -> u8 {
        Component::ALL.iter().map(|c| self.get(*c)).sum()
    }
}

/// Individual score component breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentScore {
    pub key: &'static str,
    pub name: &'static str,
    pub score: u8,
    pub max_score: u8,
    pub reason: String,
}

/// Result of a reputation calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReputationScore {
    pub breakdown: ScoreBreakdown,
    /// Total score (0-100)
    pub total: u8,
    pub badge: Badge,
    /// Per-component detail, in display order
    pub components: Vec<ComponentScore>,
}

/// Reputation calculator
pub struct ReputationScorer;

impl ReputationScorer {
    /// Calculate the reputation score (0-100) for a wallet as of `now`
    ///
    /// Inputs may be empty and need not be sorted. Records with missing or
    /// malformed fields contribute nothing to the affected sub-score.
    pub fn calculate(
        transactions: &[Transaction],
        transfers: &[TokenTransfer],
        now: DateTime<Utc>,
    ) -> ReputationScore {
        let (wallet_age, age_reason) = Self::wallet_age(transactions, now);
        let (gas_spent, gas_reason) = Self::gas_spent(transactions);
        let (unique_contracts, contracts_reason) = Self::unique_contracts(transactions);
        let (governance, governance_reason) = Self::governance(transactions);
        let (defi, defi_reason) = Self::defi(transactions);
        let (airdrops, airdrops_reason) = Self::airdrops(transfers);

        let breakdown = ScoreBreakdown {
            wallet_age,
            gas_spent,
            unique_contracts,
            governance,
            defi,
            airdrops,
        };

        let reasons = [
            age_reason,
            gas_reason,
            contracts_reason,
            governance_reason,
            defi_reason,
            airdrops_reason,
        ];
        let components = Component::ALL
            .iter()
            .zip(reasons)
            .map(|(component, reason)| ComponentScore {
                key: component.key(),
                name: component.name(),
                score: breakdown.get(*component),
                max_score: component.max_score(),
                reason,
            })
            .collect();

        let total = breakdown.total();

        ReputationScore {
            breakdown,
            total,
            badge: Badge::from_total(total),
            components,
        }
    }

    /// Wallet Age (0-10): whole 30-day months since the earliest transaction
    fn wallet_age(transactions: &[Transaction], now: DateTime<Utc>) -> (u8, String) {
        let max = Component::WalletAge.max_score();

        // Sources do not guarantee ascending order
        let first_tx = match transactions.iter().filter_map(|tx| tx.block_signed_at).min() {
            Some(first) => first,
            None => return (0, "No dated transactions".to_string()),
        };

        let elapsed = (now - first_tx).num_seconds();
        let months = if elapsed > 0 {
            elapsed / SECONDS_PER_MONTH
        } else {
            0
        };
        let score = months.min(i64::from(max)) as u8;

        (
            score,
            format!(
                "{} month(s) since first transaction on {}",
                months,
                first_tx.format("%Y-%m-%d")
            ),
        )
    }

    /// Gas Spent (0-10): one point per 0.1 native coin paid for gas
    fn gas_spent(transactions: &[Transaction]) -> (u8, String) {
        let max = Component::GasSpent.max_score();

        let total_wei = transactions
            .iter()
            .filter_map(Transaction::gas_cost_wei)
            .fold(U256::ZERO, |acc, cost| acc.saturating_add(cost));

        let points = total_wei / U256::from(WEI_PER_GAS_POINT);
        let score = u64::try_from(points)
            .unwrap_or(u64::MAX)
            .min(u64::from(max)) as u8;

        let spent = format_ether(total_wei);
        let spent = spent.trim_end_matches('0').trim_end_matches('.');

        (score, format!("{} native coin spent on gas", spent))
    }

    /// Unique Contracts (0-20): distinct well-formed recipient addresses
    fn unique_contracts(transactions: &[Transaction]) -> (u8, String) {
        let max = Component::UniqueContracts.max_score();

        let contracts: HashSet<&str> = transactions
            .iter()
            .filter_map(|tx| tx.to_address.as_deref())
            .filter(|to| is_hex_address(to))
            .collect();

        let score = contracts.len().min(usize::from(max)) as u8;

        (
            score,
            format!("Interacted with {} unique address(es)", contracts.len()),
        )
    }

    /// Governance (0-20): two points per call to a known governance contract
    fn governance(transactions: &[Transaction]) -> (u8, String) {
        let count = count_matching(transactions, contracts::is_governance);
        let score = interaction_points(count, Component::Governance.max_score());

        (score, format!("{} governance interaction(s)", count))
    }

    /// DeFi (0-20): two points per call to a known DeFi contract
    fn defi(transactions: &[Transaction]) -> (u8, String) {
        let count = count_matching(transactions, contracts::is_defi);
        let score = interaction_points(count, Component::Defi.max_score());

        (score, format!("{} DeFi interaction(s)", count))
    }

    /// Airdrops (0-20): every token transfer counts as a claimed airdrop
    fn airdrops(transfers: &[TokenTransfer]) -> (u8, String) {
        let max = Component::Airdrops.max_score();
        let score = transfers.len().min(usize::from(max)) as u8;

        (score, format!("{} token transfer(s) received", transfers.len()))
    }
}

fn count_matching(transactions: &[Transaction], is_match: fn(&str) -> bool) -> usize {
    transactions
        .iter()
        .filter_map(|tx| tx.to_address.as_deref())
        .filter(|to| is_match(to))
        .count()
}

fn interaction_points(count: usize, max: u8) -> u8 {
    count
        .saturating_mul(POINTS_PER_INTERACTION)
        .min(usize::from(max)) as u8
}
