use std::collections::HashSet;

use tracing::debug;

use crate::graph::GraphStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Expanding,
    Collapsing,
}

/// Expanded state per node. Tapping an unrelated node never clears another
/// node's flag, so several nodes can be expanded at once.
#[derive(Clone, Debug, Default)]
pub struct SelectionTracker {
    expanded: HashSet<String>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the expanded state of `node_id`. Ids that do not name a node in
    /// `store` are left untracked and always report expansion.
    pub fn toggle(&mut self, node_id: &str, store: &GraphStore) -> Toggle {
        if !store.contains_node(node_id) {
            debug!(node = node_id, "tapped node is not in the graph store");
            return Toggle::Expanding;
        }

        let toggle = if self.expanded.remove(node_id) {
            Toggle::Collapsing
        } else {
            self.expanded.insert(node_id.to_owned());
            Toggle::Expanding
        };
        debug!(node = node_id, ?toggle, "toggled selection");
        toggle
    }

    pub fn is_expanded(&self, node_id: &str) -> bool {
        self.expanded.contains(node_id)
    }

    pub fn expanded(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Element, Node};

    fn store() -> GraphStore {
        GraphStore::from_elements([
            Element::Node(Node::new("a", "A")),
            Element::Node(Node::new("b", "B")),
        ])
    }

    #[test]
    fn double_toggle_restores_state() {
        let store = store();
        let mut tracker = SelectionTracker::new();

        assert_eq!(tracker.toggle("a", &store), Toggle::Expanding);
        assert!(tracker.is_expanded("a"));
        assert_eq!(tracker.toggle("a", &store), Toggle::Collapsing);
        assert!(!tracker.is_expanded("a"));
    }

    #[test]
    fn unknown_node_reports_expansion_without_tracking() {
        let store = store();
        let mut tracker = SelectionTracker::new();

        assert_eq!(tracker.toggle("ghost", &store), Toggle::Expanding);
        assert_eq!(tracker.toggle("ghost", &store), Toggle::Expanding);
        assert_eq!(tracker.expanded().count(), 0);
    }

    #[test]
    fn flags_of_other_nodes_survive() {
        let store = store();
        let mut tracker = SelectionTracker::new();

        tracker.toggle("a", &store);
        tracker.toggle("b", &store);
        assert!(tracker.is_expanded("a"));
        assert!(tracker.is_expanded("b"));
        assert_eq!(tracker.expanded().count(), 2);
    }
}
