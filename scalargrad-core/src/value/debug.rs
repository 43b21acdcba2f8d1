// src/value/debug.rs
use crate::value::Value;
use std::fmt;

/// `Value(data=…, grad=…)`, or `Value(<discarded>)` for a stale handle.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.try_value(), self.try_grad()) {
            (Ok(data), Ok(grad)) => write!(f, "Value(data={}, grad={})", data, grad),
            _ => write!(f, "Value(<discarded>)"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_live() {
            return write!(f, "Value(id={}, <discarded>)", self.id);
        }
        let op = self.op();
        let arena = self.graph.arena();
        let index = self.id.index();
        write!(
            f,
            "Value(id={}, data={}, grad={}, op={:?}",
            self.id, arena.values[index], arena.grads[index], op.symbol()
        )?;
        if let Some(label) = arena.labels.get(&self.id) {
            write!(f, ", label={:?}", label)?;
        }
        write!(f, ")")
    }
}
