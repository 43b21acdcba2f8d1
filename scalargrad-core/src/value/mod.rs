// src/value/mod.rs

use crate::arena::{Graph, NodeId};

mod accessors;
mod autograd_methods;
mod debug;
mod math_methods;
mod traits;

/// Handle to one scalar node of a computation graph.
///
/// A `Value` carries the forward result, an accumulating gradient and the
/// operation (with its operands) that produced it. The node itself lives in
/// its [`Graph`]; the handle only holds the graph and the node's id, so
/// cloning a `Value` is cheap and every clone refers to the same node.
///
/// Every operation returns a **new** `Value` and never mutates its inputs.
/// Raw `f64` operands are promoted to leaves on the same graph.
///
/// ```
/// use scalargrad_core::Graph;
///
/// let graph = Graph::new();
/// let x = graph.value(2.0);
/// let y = graph.value(3.0);
/// let s = &x + &y;
/// let o = &s * &x;
/// o.backward().unwrap();
/// assert_eq!(x.grad(), 7.0);
/// assert_eq!(y.grad(), 2.0);
/// ```
#[derive(Clone)]
pub struct Value {
    graph: Graph,
    id: NodeId,
    generation: u32,
}

impl Value {
    pub(crate) fn from_parts(graph: Graph, id: NodeId, generation: u32) -> Self {
        Value {
            graph,
            id,
            generation,
        }
    }

    /// Creates a leaf holding `value` on the same graph as `self`.
    ///
    /// This is the promotion used when a raw number meets a `Value`.
    pub fn constant_like(&self, value: f64) -> Value {
        self.graph.value(value)
    }

    /// Sums `values` as a left fold of additions, starting from the first
    /// element. Returns `None` for an empty iterator, since there is no graph
    /// to put a zero leaf on.
    ///
    /// # Panics
    /// Same conditions as the `+` operator.
    pub fn sum<I>(values: I) -> Option<Value>
    where
        I: IntoIterator<Item = Value>,
    {
        values.into_iter().reduce(|acc, v| acc + v)
    }
}
