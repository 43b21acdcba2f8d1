//! Reverse-mode machinery: the per-node backward rule tags, the
//! topological ordering and backward driver, and a numerical gradient
//! checker.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::Op;
pub(crate) use graph::run_backward;
