use scalargrad_core::{Graph, Value};

// Shared helpers for the integration tests.
// Added allow(dead_code) because usage across different test crates isn't detected easily.

/// Creates one leaf per input on a fresh graph.
#[allow(dead_code)]
pub fn leaves(values: &[f64]) -> (Graph, Vec<Value>) {
    let graph = Graph::new();
    let leaves = graph.values(values);
    (graph, leaves)
}

/// Centered finite-difference derivative of `f` with respect to input `i`.
#[allow(dead_code)]
pub fn numerical_partial<F>(f: F, inputs: &[f64], i: usize, eps: f64) -> f64
where
    F: Fn(&[Value]) -> Value,
{
    let eval = |delta: f64| {
        let mut shifted = inputs.to_vec();
        shifted[i] += delta;
        let (_graph, vs) = leaves(&shifted);
        f(&vs).value()
    };
    (eval(eps) - eval(-eps)) / (2.0 * eps)
}
