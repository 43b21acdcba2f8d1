use scalargrad_core::Graph;
use scalargrad_nn::{mse_loss, Mlp, NnError, Optimizer, Reduction};
use std::sync::Once;

static INIT: Once = Once::new();

// Shared helpers for the integration tests.
// Added allow(dead_code) because usage across different test crates isn't detected easily.

/// Installs `env_logger` once per test binary so `RUST_LOG=debug` shows the
/// library's logs.
#[allow(dead_code)]
pub fn setup() {
    INIT.call_once(|| {
        // Attempt to initialize env_logger. If it fails (e.g., already initialized), that's okay.
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// The four-sample binary regression set of the classic micrograd demo.
#[allow(dead_code)]
pub fn demo_dataset() -> (Vec<[f64; 3]>, Vec<f64>) {
    let xs = vec![
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = vec![1.0, -1.0, -1.0, 1.0];
    (xs, ys)
}

/// Runs one full-batch training step and returns the loss before the update.
/// Every node created by the step is discarded again before returning.
#[allow(dead_code)]
pub fn train_step(
    graph: &Graph,
    mlp: &Mlp,
    optimizer: &mut dyn Optimizer,
    xs: &[[f64; 3]],
    ys: &[f64],
) -> Result<f64, NnError> {
    let checkpoint = graph.checkpoint();
    let mut preds = Vec::with_capacity(xs.len());
    for x in xs {
        preds.extend(mlp.forward_f64(x)?);
    }
    let loss = mse_loss(&preds, ys, Reduction::Sum)?;
    let loss_value = loss.try_value()?;

    optimizer.zero_grad();
    loss.backward()?;
    optimizer.step()?;
    graph.rewind(checkpoint)?;
    Ok(loss_value)
}
