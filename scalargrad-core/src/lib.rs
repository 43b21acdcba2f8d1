// Declare the main modules of the crate
pub mod arena;
pub mod autograd;
pub mod error;
pub mod ops;
pub mod utils;
pub mod value;

// Re-export the handle types so they are reachable as `scalargrad_core::Value`
pub use arena::{Checkpoint, Graph, NodeId};
pub use autograd::grad_check::{check_grad, GradCheckConfig, GradCheckError};
pub use autograd::Op;
pub use error::ScalarGradError;
pub use ops::Operand;
pub use value::Value;
