// src/arena.rs

use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::value::Value;
use log::debug;
use std::cell::{Ref, RefCell, RefMut};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Stable identity of a node inside its [`Graph`].
///
/// Ids are assigned in construction order, so every operand of a node has a
/// strictly smaller id than the node itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Position of the node in the graph's storage.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Node storage: one entry per node in each parallel vector.
#[derive(Debug, Default)]
pub(crate) struct Arena {
    pub(crate) values: Vec<f64>,
    pub(crate) grads: Vec<f64>,
    pub(crate) ops: Vec<Op>,
    /// Generation each slot was written in. Used to detect handles that
    /// outlived a `rewind`.
    pub(crate) generations: Vec<u32>,
    pub(crate) labels: HashMap<NodeId, String>,
    generation: u32,
}

impl Arena {
    pub(crate) fn push(&mut self, value: f64, op: Op) -> (NodeId, u32) {
        let id = NodeId(self.values.len());
        debug_assert!(
            op.operands().all(|operand| operand < id),
            "operands must exist before the node that uses them"
        );
        self.values.push(value);
        self.grads.push(0.0);
        self.ops.push(op);
        self.generations.push(self.generation);
        (id, self.generation)
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    pub(crate) fn is_live(&self, id: NodeId, generation: u32) -> bool {
        self.generations.get(id.0) == Some(&generation)
    }
}

/// A position in a graph's history, taken with [`Graph::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    len: usize,
}

impl Checkpoint {
    /// Number of nodes the graph held when the checkpoint was taken.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Owner of every node of one computation.
///
/// `Graph` is a cheap, reference-counted handle: cloning it yields another
/// handle to the same storage, and every [`Value`] keeps its graph alive. The
/// storage is released when the last graph handle or value is dropped.
///
/// Nodes are never removed individually. A training loop that reuses one
/// graph (e.g. for long-lived parameters) bounds memory with
/// [`checkpoint`](Graph::checkpoint) and [`rewind`](Graph::rewind).
#[derive(Clone, Default)]
pub struct Graph {
    pub(crate) inner: Rc<RefCell<Arena>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Graph::default()
    }

    /// Creates a leaf node holding `value`.
    pub fn value(&self, value: f64) -> Value {
        self.push(value, Op::Leaf)
    }

    /// Creates one leaf per element of `values`, in order.
    pub fn values(&self, values: &[f64]) -> Vec<Value> {
        values.iter().map(|&v| self.value(v)).collect()
    }

    /// Number of nodes currently stored.
    pub fn len(&self) -> usize {
        self.arena().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if both handles refer to the same storage.
    pub fn ptr_eq(&self, other: &Graph) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Resets the gradient of every node in the graph to 0.
    pub fn zero_grad(&self) {
        self.arena_mut().grads.fill(0.0);
    }

    /// Marks the current end of the graph.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint { len: self.len() }
    }

    /// Discards every node created after `checkpoint`.
    ///
    /// Values created before the checkpoint stay valid. Handles to discarded
    /// nodes become stale: [`Value::is_live`] returns false for them, reading
    /// them panics, and calling `backward` on them returns
    /// [`ScalarGradError::StaleValue`], even after new nodes reuse their slots.
    pub fn rewind(&self, checkpoint: Checkpoint) -> Result<(), ScalarGradError> {
        let mut arena = self.arena_mut();
        let len = arena.len();
        if checkpoint.len > len {
            return Err(ScalarGradError::InvalidCheckpoint {
                checkpoint: checkpoint.len,
                len,
            });
        }
        arena.values.truncate(checkpoint.len);
        arena.grads.truncate(checkpoint.len);
        arena.ops.truncate(checkpoint.len);
        arena.generations.truncate(checkpoint.len);
        arena.labels.retain(|id, _| id.0 < checkpoint.len);
        arena.generation += 1;
        debug!(
            "Graph rewound from {} to {} nodes (generation {})",
            len, checkpoint.len, arena.generation
        );
        Ok(())
    }

    pub(crate) fn push(&self, value: f64, op: Op) -> Value {
        let (id, generation) = self.arena_mut().push(value, op);
        Value::from_parts(self.clone(), id, generation)
    }

    pub(crate) fn arena(&self) -> Ref<'_, Arena> {
        self.inner.borrow()
    }

    pub(crate) fn arena_mut(&self) -> RefMut<'_, Arena> {
        self.inner.borrow_mut()
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arena = self.arena();
        write!(f, "Graph(nodes={}, generation={})", arena.len(), arena.generation)
    }
}

#[cfg(test)]
#[path = "arena_test.rs"]
mod tests;
