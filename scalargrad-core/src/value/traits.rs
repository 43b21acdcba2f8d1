// src/value/traits.rs

use crate::ops::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::value::accessors::live_or_panic;
use crate::value::Value;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

// --- Identity ---

/// Two handles are equal when they refer to the same live node of the same
/// graph. Numeric equality of forward values is `a.value() == b.value()`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.graph.ptr_eq(&other.graph)
            && self.id == other.id
            && self.generation == other.generation
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::rc::Rc::as_ptr(&self.graph.inner).hash(state);
        self.id.hash(state);
        self.generation.hash(state);
    }
}

// --- Arithmetic operators ---
//
// Every combination of `Value`, `&Value` and `f64` operands is supported.
// A raw `f64` is promoted to a leaf on the other operand's graph.
//
// # Panics
// The operators panic if the operands belong to different graphs or if a
// node was discarded by `Graph::rewind`. Use `try_add`, `try_mul`, ... to get
// a `Result` instead.

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl<'a, 'b> $trait<&'b Value> for &'a Value {
            type Output = Value;

            fn $method(self, rhs: &'b Value) -> Value {
                live_or_panic($op_fn(self, rhs))
            }
        }

        impl $trait<Value> for Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                live_or_panic($op_fn(&self, &rhs))
            }
        }

        impl<'b> $trait<&'b Value> for Value {
            type Output = Value;

            fn $method(self, rhs: &'b Value) -> Value {
                live_or_panic($op_fn(&self, rhs))
            }
        }

        impl<'a> $trait<Value> for &'a Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                live_or_panic($op_fn(self, &rhs))
            }
        }

        impl<'a> $trait<f64> for &'a Value {
            type Output = Value;

            fn $method(self, rhs: f64) -> Value {
                live_or_panic($op_fn(self, &self.constant_like(rhs)))
            }
        }

        impl $trait<f64> for Value {
            type Output = Value;

            fn $method(self, rhs: f64) -> Value {
                live_or_panic($op_fn(&self, &self.constant_like(rhs)))
            }
        }

        impl<'b> $trait<&'b Value> for f64 {
            type Output = Value;

            fn $method(self, rhs: &'b Value) -> Value {
                live_or_panic($op_fn(&rhs.constant_like(self), rhs))
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                live_or_panic($op_fn(&rhs.constant_like(self), &rhs))
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl<'a> Neg for &'a Value {
    type Output = Value;

    fn neg(self) -> Value {
        live_or_panic(neg_op(self))
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        live_or_panic(neg_op(&self))
    }
}
