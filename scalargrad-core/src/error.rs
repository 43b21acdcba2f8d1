use thiserror::Error;

/// Custom error type for the scalargrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    /// `pow` was called with another node as the exponent. Only constant
    /// exponents have a backward rule.
    #[error("Exponent must be a constant int/float, got a graph node")]
    NonConstantExponent,

    #[error("Operands of '{operation}' belong to different graphs")]
    GraphMismatch { operation: String },

    /// The handle points at a node that was discarded by `Graph::rewind`.
    #[error("Value {id} was discarded from its graph")]
    StaleValue { id: usize },

    #[error("Cannot rewind to checkpoint {checkpoint}: graph only holds {len} nodes")]
    InvalidCheckpoint { checkpoint: usize, len: usize },
}
