use super::node::{Node, SearchTree};

/// Trace the parent chain from `goal_index` back to the root
/// Returns the ordered path from start to goal, with each node's `parent`
/// renumbered to the index of its predecessor in the returned vector
pub(crate) fn trace_path<C: Copy>(tree: &SearchTree<C>, goal_index: usize) -> Vec<Node<C>> {

    let mut path = Vec::new();
    let mut current = Some(goal_index);

    // Trace back from goal to start
    while let Some(index) = current {
        let node = tree.get(index);
        path.push(node.clone());
        current = node.parent;
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    for (i, node) in path.iter_mut().enumerate() {
        node.parent = i.checked_sub(1);
    }

    path
}
