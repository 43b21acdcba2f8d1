use scalargrad_core::{check_grad, GradCheckConfig, Graph, ScalarGradError, Value};
use scalargrad_nn::{
    mse_loss, Activation, Init, Mlp, MlpConfig, Module, NnError, Reduction, SgdOptimizer,
};

mod common;
use common::{demo_dataset, setup, train_step};

#[test]
fn test_demo_mlp_loss_decreases() -> Result<(), NnError> {
    setup();
    let (xs, ys) = demo_dataset();
    let graph = Graph::new();
    let mlp = Mlp::new(&graph, &MlpConfig::new(3, vec![4, 4], 1).with_seed(1337))?;
    let mut optimizer = SgdOptimizer::simple(mlp.parameters(), 0.05);

    let n_params = graph.len();
    let first = train_step(&graph, &mlp, &mut optimizer, &xs, &ys)?;
    let mut last = first;
    for _ in 0..200 {
        last = train_step(&graph, &mlp, &mut optimizer, &xs, &ys)?;
    }

    assert!(last < first, "loss did not decrease: {} -> {}", first, last);
    // each step's nodes were discarded, only parameters remain
    assert_eq!(graph.len(), n_params);
    assert!(mlp.parameters().iter().all(Value::is_live));
    Ok(())
}

#[test]
fn test_momentum_training_on_relu_network() -> Result<(), NnError> {
    setup();
    let (xs, ys) = demo_dataset();
    let graph = Graph::new();
    let config = MlpConfig::new(3, vec![8], 1)
        .with_activation(Activation::Relu)
        .with_output_activation(Activation::Linear)
        .with_init(Init::Normal {
            mean: 0.0,
            std: 0.5,
        })
        .with_seed(3);
    let mlp = Mlp::new(&graph, &config)?;
    let mut optimizer = SgdOptimizer::new(mlp.parameters(), 0.005, 0.9, 0.0, false);

    let first = train_step(&graph, &mlp, &mut optimizer, &xs, &ys)?;
    let mut last = first;
    for _ in 0..150 {
        last = train_step(&graph, &mlp, &mut optimizer, &xs, &ys)?;
    }
    assert!(last < first, "loss did not decrease: {} -> {}", first, last);
    Ok(())
}

#[test]
fn test_mlp_gradients_match_finite_differences() {
    // Gradients of the loss with respect to the network inputs.
    let func = |inputs: &[Value]| -> Result<Value, ScalarGradError> {
        let graph = inputs[0].graph().clone();
        let mlp = Mlp::new(&graph, &MlpConfig::new(3, vec![4], 1).with_seed(11))
            .expect("valid config");
        let to_graph_error = |e: NnError| match e {
            NnError::Graph(inner) => inner,
            other => panic!("unexpected error: {}", other),
        };
        let out = mlp.forward(inputs).map_err(to_graph_error)?;
        mse_loss(&out, &[0.5], Reduction::Sum).map_err(to_graph_error)
    };
    let result = check_grad(func, &[0.3, -0.2, 0.8], &GradCheckConfig::default());
    assert!(result.is_ok(), "{:?}", result.err());
}

#[test]
fn test_forward_does_not_touch_parameters() -> Result<(), NnError> {
    let graph = Graph::new();
    let mlp = Mlp::new(&graph, &MlpConfig::new(2, vec![3], 1))?;
    let before: Vec<f64> = mlp.parameters().iter().map(Value::value).collect();
    let out = mlp.forward_f64(&[1.0, -1.0])?;
    out[0].backward()?;
    let after: Vec<f64> = mlp.parameters().iter().map(Value::value).collect();
    assert_eq!(before, after);
    Ok(())
}
