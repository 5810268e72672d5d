use crate::grid::{Action, Coord};


/// Search-tree record, never mutated once created
/// `parent` is an index into the owning tree (or path), `None` for the root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<C> {
    pub label: String, // unused, always empty
    pub state: Coord,
    pub cost: C, // accumulated cost from the start
    pub parent: Option<usize>,
    pub action: Option<Action>, // move taken from the parent
}

impl<C> Node<C> {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}


/// Arena holding every node created during one search
/// Frontiers store indices into it, so stale frontier entries keep a valid parent chain
pub(crate) struct SearchTree<C> {
    nodes: Vec<Node<C>>,
}

impl<C: Copy> SearchTree<C> {

    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub(crate) fn root(&mut self, state: Coord, cost: C) -> usize {
        self.push(Node { label: String::new(), state, cost, parent: None, action: None })
    }

    pub(crate) fn child(&mut self, parent: usize, state: Coord, cost: C, action: Action) -> usize {
        self.push(Node { label: String::new(), state, cost, parent: Some(parent), action: Some(action) })
    }

    pub(crate) fn get(&self, index: usize) -> &Node<C> {
        &self.nodes[index]
    }

    fn push(&mut self, node: Node<C>) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_links_children_to_parents() {
        let mut tree = SearchTree::new();
        let root = tree.root(Coord::new(0, 0), 0u32);
        let child = tree.child(root, Coord::new(1, 0), 3, Action::Right);

        assert!(tree.get(root).is_root());
        assert_eq!(tree.get(root).action, None);
        assert_eq!(tree.get(child).parent, Some(root));
        assert_eq!(tree.get(child).action, Some(Action::Right));
        assert_eq!(tree.get(child).cost, 3);
        assert!(tree.get(child).label.is_empty());
    }
}
