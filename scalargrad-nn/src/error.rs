use scalargrad_core::ScalarGradError;
use thiserror::Error;

/// Error type for network construction, forward passes and optimization.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum NnError {
    #[error("Input size mismatch in {module}: expected {expected}, got {actual}")]
    InputSizeMismatch {
        module: String,
        expected: usize,
        actual: usize,
    },

    #[error("{0} received no inputs")]
    EmptyInput(String),

    #[error("Invalid initialization: {0}")]
    InvalidInit(String),

    #[error("Network must have at least one layer and non-zero sizes, got sizes {sizes:?}")]
    EmptyNetwork { sizes: Vec<usize> },

    #[error("Unsupported reduction type: {0}")]
    UnsupportedReduction(String),

    #[error(transparent)]
    Graph(#[from] ScalarGradError),
}
