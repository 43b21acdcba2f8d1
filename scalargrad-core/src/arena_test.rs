use super::*;
use crate::error::ScalarGradError;

#[test]
fn test_graph_value_creates_leaves() {
    let graph = Graph::new();
    assert!(graph.is_empty());
    let leaves = graph.values(&[1.0, 2.0, 3.0]);
    assert_eq!(graph.len(), 3);
    assert_eq!(leaves[1].value(), 2.0);
    assert_eq!(leaves[1].grad(), 0.0);
    assert!(leaves.iter().all(|v| v.is_leaf()));
}

#[test]
fn test_node_ids_increase() {
    let graph = Graph::new();
    let a = graph.value(1.0);
    let b = graph.value(2.0);
    let c = &a + &b;
    assert!(a.id() < b.id());
    assert!(b.id() < c.id());
    assert_eq!(c.id().index(), 2);
}

#[test]
fn test_graph_clone_shares_storage() {
    let graph = Graph::new();
    let alias = graph.clone();
    alias.value(1.0);
    assert_eq!(graph.len(), 1);
    assert!(graph.ptr_eq(&alias));
    assert!(!graph.ptr_eq(&Graph::new()));
}

#[test]
fn test_graph_zero_grad() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let a = graph.value(2.0);
    let out = &a * &a;
    out.backward()?;
    assert_eq!(a.grad(), 4.0);
    graph.zero_grad();
    assert_eq!(a.grad(), 0.0);
    assert_eq!(out.grad(), 0.0);
    Ok(())
}

#[test]
fn test_rewind_discards_later_nodes() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let param = graph.value(0.5);
    let mark = graph.checkpoint();
    assert_eq!(mark.len(), 1);

    let out = &param * 4.0;
    out.set_label("out");
    assert_eq!(graph.len(), 3);

    graph.rewind(mark)?;
    assert_eq!(graph.len(), 1);
    assert!(param.is_live());
    assert!(!out.is_live());
    assert_eq!(
        out.backward(),
        Err(ScalarGradError::StaleValue { id: 2 })
    );
    Ok(())
}

#[test]
fn test_rewind_detects_reused_slots() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let mark = graph.checkpoint();
    let old = graph.value(1.0);
    graph.rewind(mark)?;
    let new = graph.value(2.0);
    assert_eq!(old.id(), new.id());
    assert!(!old.is_live());
    assert!(new.is_live());
    assert_eq!(old.try_value(), Err(ScalarGradError::StaleValue { id: 0 }));
    assert_eq!(new.label(), None);
    Ok(())
}

#[test]
fn test_rewind_beyond_end_fails() {
    let graph = Graph::new();
    graph.value(1.0);
    graph.value(2.0);
    let mark = graph.checkpoint();
    let other = Graph::new();
    assert_eq!(
        other.rewind(mark),
        Err(ScalarGradError::InvalidCheckpoint {
            checkpoint: 2,
            len: 0
        })
    );
}

#[test]
#[should_panic(expected = "discarded")]
fn test_reading_stale_value_panics() {
    let graph = Graph::new();
    let mark = graph.checkpoint();
    let v = graph.value(1.0);
    graph.rewind(mark).unwrap();
    let _ = v.value();
}
