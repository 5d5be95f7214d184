use indexmap::IndexMap;

use crate::graph::{EdgeData, GraphStore};

/// A node the selection follows, with the accounts that node follows in turn.
#[derive(Clone, Debug, PartialEq)]
pub struct Child {
    pub id: String,
    pub edge_id: String,
    pub grandchildren: Vec<String>,
}

/// A node that follows the selection. Followers are not expanded further.
#[derive(Clone, Debug, PartialEq)]
pub struct Follower {
    pub id: String,
    pub edge_id: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Neighborhood {
    pub selected: String,
    pub children: Vec<Child>,
    pub followers: Vec<Follower>,
}

impl Neighborhood {
    pub fn child_ids(&self) -> Vec<&str> {
        self.children.iter().map(|child| child.id.as_str()).collect()
    }

    /// Parent to revealed descendants, the selected node first.
    pub fn families(&self) -> IndexMap<String, Vec<String>> {
        let mut families = IndexMap::with_capacity(self.children.len() + 1);
        families.insert(
            self.selected.clone(),
            self.children.iter().map(|child| child.id.clone()).collect(),
        );
        for child in &self.children {
            if child.id != self.selected {
                families.insert(child.id.clone(), child.grandchildren.clone());
            }
        }
        families
    }
}

/// Splits `incident_edges` into outgoing (children) and incoming (followers)
/// relative to `node_id`, and looks one more hop out along each child's edges.
/// Children keep the order of `incident_edges`.
pub fn classify(node_id: &str, incident_edges: &[EdgeData], store: &GraphStore) -> Neighborhood {
    let mut children = Vec::new();
    let mut followers = Vec::new();

    for edge in incident_edges {
        if edge.source == node_id {
            let grandchildren = store
                .outgoing_edges(&edge.target)
                .map(|next| next.target.clone())
                .collect();
            children.push(Child {
                id: edge.target.clone(),
                edge_id: edge.id.clone(),
                grandchildren,
            });
        }

        if edge.target == node_id {
            followers.push(Follower {
                id: edge.source.clone(),
                edge_id: edge.id.clone(),
            });
        }
    }

    Neighborhood {
        selected: node_id.to_owned(),
        children,
        followers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, Element, Node};

    fn store(edges: &[(&str, &str)]) -> GraphStore {
        let mut store = GraphStore::new();
        let mut ids = Vec::new();
        for &(source, target) in edges {
            store.add_edge(Edge::new(source, target));
            for id in [source, target] {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }
        for id in ids {
            store.push(Element::Node(Node::new(id, id)));
        }
        store
    }

    #[test]
    fn splits_children_and_followers() {
        let store = store(&[("a", "b"), ("a", "c"), ("b", "d"), ("e", "a")]);
        let event = store.selection_event("a").unwrap();
        let neighborhood = classify("a", &event.incident_edges, &store);

        assert_eq!(neighborhood.child_ids(), ["b", "c"]);
        assert_eq!(neighborhood.children[0].grandchildren, ["d"]);
        assert!(neighborhood.children[1].grandchildren.is_empty());
        assert_eq!(neighborhood.followers.len(), 1);
        assert_eq!(neighborhood.followers[0].id, "e");
        assert_eq!(neighborhood.followers[0].edge_id, "e->a");
    }

    #[test]
    fn followers_are_not_expanded() {
        let store = store(&[("e", "a"), ("e", "f")]);
        let event = store.selection_event("a").unwrap();
        let neighborhood = classify("a", &event.incident_edges, &store);

        assert!(neighborhood.children.is_empty());
        assert_eq!(neighborhood.families().len(), 1);
        assert!(neighborhood.families()["a"].is_empty());
    }

    #[test]
    fn children_follow_incident_edge_order() {
        let store = store(&[("a", "z"), ("a", "m"), ("a", "b")]);
        let mut incident = store.selection_event("a").unwrap().incident_edges;
        incident.reverse();
        let neighborhood = classify("a", &incident, &store);

        assert_eq!(neighborhood.child_ids(), ["b", "m", "z"]);
    }

    #[test]
    fn families_start_with_the_selection() {
        let store = store(&[("a", "b"), ("b", "c"), ("b", "d")]);
        let event = store.selection_event("a").unwrap();
        let families = classify("a", &event.incident_edges, &store).families();

        let parents = families.keys().map(String::as_str).collect::<Vec<_>>();
        assert_eq!(parents, ["a", "b"]);
        assert_eq!(families["b"], ["c", "d"]);
    }

    #[test]
    fn mutual_follow_is_both_child_and_follower() {
        let store = store(&[("a", "b"), ("b", "a")]);
        let event = store.selection_event("a").unwrap();
        let neighborhood = classify("a", &event.incident_edges, &store);

        assert_eq!(neighborhood.child_ids(), ["b"]);
        assert_eq!(neighborhood.children[0].grandchildren, ["a"]);
        assert_eq!(neighborhood.followers[0].id, "b");
    }
}
