use std::collections::HashMap;

use fuzzy_matcher::skim::SkimMatcherV2;

use crate::error::GraphError;
use crate::util::fuzzy_match_score;

use super::{Edge, EdgeData, Element, Node, Position, SelectionEvent};

/// The element list shared with the renderer, plus lookup indexes.
///
/// Elements keep their insertion order. Nodes and edges are never removed, so
/// indexes built on insertion stay valid for the lifetime of the store.
#[derive(Clone, Debug, Default)]
pub struct GraphStore {
    elements: Vec<Element>,
    index_by_id: HashMap<String, usize>,
    outgoing: HashMap<String, Vec<usize>>,
    incoming: HashMap<String, Vec<usize>>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_elements(elements: impl IntoIterator<Item = Element>) -> Self {
        let mut store = Self::new();
        for element in elements {
            store.push(element);
        }
        store
    }

    pub fn push(&mut self, element: Element) {
        let index = self.elements.len();
        if let Element::Edge(edge) = &element {
            self.outgoing
                .entry(edge.data.source.clone())
                .or_default()
                .push(index);
            self.incoming
                .entry(edge.data.target.clone())
                .or_default()
                .push(index);
        }
        self.index_by_id
            .entry(element.id().to_owned())
            .or_insert(index);
        self.elements.push(element);
    }

    pub fn add_node(&mut self, node: Node) {
        self.push(Element::Node(node));
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.push(Element::Edge(edge));
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.elements.iter().filter_map(Element::as_node)
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.elements.iter().filter_map(Element::as_edge)
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.index_by_id
            .get(id)
            .and_then(|&index| self.elements.get(index))
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.get(id).and_then(Element::as_node)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.get(id).and_then(Element::as_edge)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    pub fn position_of(&self, id: &str) -> Option<Position> {
        self.node(id).map(|node| node.position)
    }

    /// Moves a node. Returns false when `id` does not name a node.
    pub fn set_position(&mut self, id: &str, position: Position) -> bool {
        let Some(&index) = self.index_by_id.get(id) else {
            return false;
        };

        match self.elements.get_mut(index) {
            Some(Element::Node(node)) => {
                node.position = position;
                true
            }
            _ => false,
        }
    }

    /// Edges leaving `source`, in element order.
    pub fn outgoing_edges<'a>(
        &'a self,
        source: &str,
    ) -> impl Iterator<Item = &'a EdgeData> + use<'a> {
        self.edge_list(self.outgoing.get(source))
    }

    /// Edges entering `target`, in element order.
    pub fn incoming_edges<'a>(
        &'a self,
        target: &str,
    ) -> impl Iterator<Item = &'a EdgeData> + use<'a> {
        self.edge_list(self.incoming.get(target))
    }

    fn edge_list<'a>(
        &'a self,
        indices: Option<&'a Vec<usize>>,
    ) -> impl Iterator<Item = &'a EdgeData> + 'a {
        indices
            .into_iter()
            .flatten()
            .filter_map(move |&index| self.elements.get(index))
            .filter_map(|element| element.as_edge().map(|edge| &edge.data))
    }

    /// Builds the event a renderer reports for a tap on `id`: the node's
    /// current position and every edge touching it, in element order.
    pub fn selection_event(&self, id: &str) -> Option<SelectionEvent> {
        let node = self.node(id)?;

        let mut incident = self
            .outgoing
            .get(id)
            .into_iter()
            .chain(self.incoming.get(id))
            .flatten()
            .copied()
            .collect::<Vec<_>>();
        incident.sort_unstable();
        incident.dedup();

        let incident_edges = incident
            .into_iter()
            .filter_map(|index| self.elements.get(index))
            .filter_map(|element| element.as_edge().map(|edge| edge.data.clone()))
            .collect();

        Some(SelectionEvent {
            id: node.data.id.clone(),
            position: node.position,
            expanded: None,
            incident_edges,
        })
    }

    /// Resolves a user query to a node id: exact id first, then the best
    /// fuzzy match over labels and ids.
    pub fn find_node(&self, query: &str) -> Result<&str, GraphError> {
        if let Some(node) = self.node(query) {
            return Ok(node.id());
        }

        let matcher = SkimMatcherV2::default();
        self.nodes()
            .filter_map(|node| {
                let label_score = fuzzy_match_score(&matcher, &node.data.label, query);
                let id_score = fuzzy_match_score(&matcher, node.id(), query);
                label_score.max(id_score).map(|score| (score, node.id()))
            })
            .max_by_key(|(score, _)| *score)
            .map(|(_, id)| id)
            .ok_or_else(|| GraphError::UnknownNode(query.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GraphStore {
        GraphStore::from_elements([
            Element::Edge(Edge::new("a", "b")),
            Element::Edge(Edge::new("c", "a")),
            Element::Edge(Edge::new("a", "c")),
            Element::Node(Node::new("a", "User #a")),
            Element::Node(Node::new("b", "User #b")),
            Element::Node(Node::new("c", "User #carol")),
        ])
    }

    #[test]
    fn counts_nodes_and_edges() {
        let store = sample();
        assert_eq!(store.node_count(), 3);
        assert_eq!(store.edge_count(), 3);
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn set_position_only_moves_nodes() {
        let mut store = sample();
        assert!(store.set_position("b", Position::new(3.0, 4.0)));
        assert_eq!(store.position_of("b"), Some(Position::new(3.0, 4.0)));
        assert!(!store.set_position("a->b", Position::new(1.0, 1.0)));
        assert!(!store.set_position("missing", Position::new(1.0, 1.0)));
    }

    #[test]
    fn selection_event_lists_incident_edges_in_element_order() {
        let store = sample();
        let event = store.selection_event("a").unwrap();
        let ids = event
            .incident_edges
            .iter()
            .map(|edge| edge.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, ["a->b", "c->a", "a->c"]);
        assert!(store.selection_event("a->b").is_none());
    }

    #[test]
    fn outgoing_index_follows_source() {
        let store = sample();
        let targets = store
            .outgoing_edges("a")
            .map(|edge| edge.target.as_str())
            .collect::<Vec<_>>();
        assert_eq!(targets, ["b", "c"]);
        assert_eq!(store.incoming_edges("a").count(), 1);
        assert_eq!(store.outgoing_edges("b").count(), 0);
    }

    #[test]
    fn find_node_prefers_exact_then_fuzzy() {
        let store = sample();
        assert_eq!(store.find_node("b").unwrap(), "b");
        assert_eq!(store.find_node("carol").unwrap(), "c");
        assert!(matches!(
            store.find_node("zzzz"),
            Err(GraphError::UnknownNode(_))
        ));
    }
}
