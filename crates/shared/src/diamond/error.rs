use alloy::primitives::TxHash;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemovalError {
    #[error("Failed to resolve selectors for facet {facet}: {reason}")]
    Resolution { facet: String, reason: String },

    #[error("Failed to submit diamond cut: {0}")]
    Submission(String),

    #[error("Failed to confirm diamond cut {tx_hash}: {reason}")]
    Confirmation { tx_hash: TxHash, reason: String },

    /// The cut was mined but the receipt status is failure.
    #[error("Diamond remove failed: {tx_hash}")]
    OnChainRevert { tx_hash: TxHash },
}
