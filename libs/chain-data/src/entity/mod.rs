pub mod address;
pub mod lenient;
pub mod network;
pub mod token_transfer;
pub mod transaction;

// Re-exports for convenience
pub use network::Network;
pub use token_transfer::TokenTransfer;
pub use transaction::Transaction;
