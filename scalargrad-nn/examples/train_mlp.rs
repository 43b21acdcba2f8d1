//! Trains a small MLP on the four-sample binary regression problem.
//!
//! Run with `cargo run -p scalargrad-nn --example train_mlp`, optionally with
//! `RUST_LOG=debug` to see the engine's logs.

use scalargrad_core::Graph;
use scalargrad_nn::{mse_loss, Mlp, MlpConfig, Module, NnError, Optimizer, Reduction, SgdOptimizer};

fn main() -> Result<(), NnError> {
    env_logger::init();

    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let graph = Graph::new();
    let mlp = Mlp::new(&graph, &MlpConfig::new(3, vec![4, 4], 1).with_seed(42))?;
    let mut optimizer = SgdOptimizer::simple(mlp.parameters(), 0.05);
    println!(
        "Model: Mlp(3, [4, 4], 1) with {} parameters",
        mlp.num_parameters()
    );

    // Parameters live below this mark; everything a step builds is dropped.
    let checkpoint = graph.checkpoint();
    let num_epochs = 100;

    for epoch in 0..num_epochs {
        let mut preds = Vec::with_capacity(xs.len());
        for x in &xs {
            preds.extend(mlp.forward_f64(x)?);
        }
        let loss = mse_loss(&preds, &ys, Reduction::Sum)?;

        optimizer.zero_grad();
        loss.backward()?;
        optimizer.step()?;

        if epoch % 10 == 0 || epoch == num_epochs - 1 {
            println!(
                "Epoch {:>3}/{}, Loss: {:.6}, graph nodes: {}",
                epoch + 1,
                num_epochs,
                loss.value(),
                graph.len()
            );
        }
        graph.rewind(checkpoint)?;
    }

    for (x, y) in xs.iter().zip(&ys) {
        let pred = mlp.forward_f64(x)?;
        println!("input {:?} -> {:+.4} (target {:+.1})", x, pred[0].value(), y);
    }
    Ok(())
}
