use crate::arena::{Graph, NodeId};
use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::value::Value;

impl Value {
    /// The graph that owns this node.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns false once the node has been discarded by `Graph::rewind`.
    pub fn is_live(&self) -> bool {
        self.graph.arena().is_live(self.id, self.generation)
    }

    pub(crate) fn ensure_live(&self) -> Result<(), ScalarGradError> {
        if self.is_live() {
            Ok(())
        } else {
            Err(ScalarGradError::StaleValue {
                id: self.id.index(),
            })
        }
    }

    /// Forward value of the node, or `StaleValue` if it was discarded.
    pub fn try_value(&self) -> Result<f64, ScalarGradError> {
        self.ensure_live()?;
        Ok(self.graph.arena().values[self.id.index()])
    }

    /// Accumulated gradient of the node, or `StaleValue` if it was discarded.
    pub fn try_grad(&self) -> Result<f64, ScalarGradError> {
        self.ensure_live()?;
        Ok(self.graph.arena().grads[self.id.index()])
    }

    /// Forward value of the node.
    ///
    /// # Panics
    /// Panics if the node was discarded by `Graph::rewind`.
    pub fn value(&self) -> f64 {
        live_or_panic(self.try_value())
    }

    /// Gradient accumulated by backward passes since the last reset.
    ///
    /// # Panics
    /// Panics if the node was discarded by `Graph::rewind`.
    pub fn grad(&self) -> f64 {
        live_or_panic(self.try_grad())
    }

    /// Overwrites the forward value. Meant for optimizers updating leaf
    /// parameters between passes; nodes already built from this one keep the
    /// values captured when they were created.
    ///
    /// # Panics
    /// Panics if the node was discarded by `Graph::rewind`.
    pub fn set_value(&self, value: f64) {
        live_or_panic(self.ensure_live());
        self.graph.arena_mut().values[self.id.index()] = value;
    }

    /// Resets the gradient of this node to 0.
    ///
    /// # Panics
    /// Panics if the node was discarded by `Graph::rewind`.
    pub fn zero_grad(&self) {
        live_or_panic(self.ensure_live());
        self.graph.arena_mut().grads[self.id.index()] = 0.0;
    }

    /// The operation that produced this node.
    pub fn op(&self) -> Op {
        live_or_panic(self.ensure_live());
        self.graph.arena().ops[self.id.index()]
    }

    pub fn is_leaf(&self) -> bool {
        self.op() == Op::Leaf
    }

    /// Handles to the operands of this node, in construction order.
    pub fn operands(&self) -> Vec<Value> {
        let op = self.op();
        let arena = self.graph.arena();
        op.operands()
            .map(|id| Value::from_parts(self.graph.clone(), id, arena.generations[id.index()]))
            .collect()
    }

    /// Attaches a human-readable label, shown by `Debug`.
    pub fn set_label(&self, label: impl Into<String>) {
        live_or_panic(self.ensure_live());
        self.graph.arena_mut().labels.insert(self.id, label.into());
    }

    pub fn label(&self) -> Option<String> {
        self.graph.arena().labels.get(&self.id).cloned()
    }
}

/// Unwraps the result of a node access, panicking with the error message.
/// Infallible accessors and operators go through here.
pub(crate) fn live_or_panic<T>(result: Result<T, ScalarGradError>) -> T {
    match result {
        Ok(v) => v,
        Err(err) => panic!("{}", err),
    }
}
