// Nonlinear single-operand operations.
pub mod exp;
pub mod relu;
pub mod tanh;

pub use exp::exp_op;
pub use relu::relu_op;
pub use tanh::tanh_op;
