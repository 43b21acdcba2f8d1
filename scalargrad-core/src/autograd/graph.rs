// src/autograd/graph.rs

use crate::arena::{Arena, NodeId};
use log::{debug, trace, warn};
use std::collections::HashSet;

/// Orders every node reachable from `root` so that each node comes before
/// all of its operands (and after all of its consumers within the traversal).
///
/// This is a depth-first post-order traversal, reversed. Each node is visited
/// at most once, tracked by id, even when it is reachable along several
/// paths. The traversal uses an explicit stack, so long chains (e.g. a sum
/// over thousands of terms) do not grow the call stack.
///
/// The returned order starts with `root`.
pub(crate) fn topological_sort(arena: &Arena, root: NodeId) -> Vec<NodeId> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<NodeId> = Vec::new();
    // (node, operands_done): a node is emitted only on its second pop,
    // once everything pushed above it (its operands) has been emitted.
    let mut stack: Vec<(NodeId, bool)> = vec![(root, false)];

    while let Some((node, operands_done)) = stack.pop() {
        if operands_done {
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node) {
            continue;
        }
        trace!("[topological_sort] Visiting node {}", node);
        stack.push((node, true));
        for operand in arena.ops[node.index()].operands() {
            if !visited.contains(&operand) {
                stack.push((operand, false));
            }
        }
    }

    sorted_list.reverse();
    sorted_list
}

/// Runs the backward pass from `root`: seeds `root.grad = 1.0`, then invokes
/// each reachable node's backward rule exactly once, consumers first.
///
/// Because every consumer of a node runs before the node itself, the node's
/// gradient is complete by the time its own rule reads it.
pub(crate) fn run_backward(arena: &mut Arena, root: NodeId) {
    let order = topological_sort(arena, root);
    debug!(
        "backward(): {} reachable nodes from {} (graph holds {})",
        order.len(),
        root,
        arena.len()
    );

    let seed = &mut arena.grads[root.index()];
    if *seed != 0.0 {
        warn!(
            "backward(): output {} already holds gradient {}; it is reset to 1.0 but \
             upstream gradients from earlier passes are still accumulated. \
             Did you forget zero_grad()?",
            root, seed
        );
    }
    *seed = 1.0;

    let Arena { ops, grads, .. } = arena;
    for node in order {
        ops[node.index()].propagate(node, &mut grads[..]);
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
