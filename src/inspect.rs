//! Human-readable dumps of tapped elements for the inspection panel.

use serde::Serialize;

use crate::explain::selection::SelectionTracker;
use crate::graph::{Edge, EdgeData, GraphStore, Node, NodeData, Position};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NodeSnapshot<'a> {
    data: &'a NodeData,
    position: Position,
    expanded: bool,
    edges_data: Vec<&'a EdgeData>,
}

pub fn describe_node(
    store: &GraphStore,
    tracker: &SelectionTracker,
    node: &Node,
) -> serde_json::Result<String> {
    let id = node.id();
    let edges_data = store
        .outgoing_edges(id)
        .chain(store.incoming_edges(id))
        .collect();

    serde_json::to_string_pretty(&NodeSnapshot {
        data: &node.data,
        position: node.position,
        expanded: tracker.is_expanded(id),
        edges_data,
    })
}

pub fn describe_edge(edge: &Edge) -> serde_json::Result<String> {
    serde_json::to_string_pretty(edge)
}
