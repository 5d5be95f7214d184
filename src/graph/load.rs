use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::error::GraphError;
use crate::util::user_label;

use super::{Edge, GraphStore, Node};

/// Only the head of the network is loaded so the explored neighborhood stays small.
pub const DEFAULT_EDGE_LIMIT: usize = 750;

pub fn load_edge_list(path: &Path, limit: usize) -> Result<GraphStore> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read edge list {}", path.display()))?;

    let store = parse_edge_list(&raw, limit)
        .with_context(|| format!("failed to parse edge list {}", path.display()))?;

    info!(
        path = %path.display(),
        nodes = store.node_count(),
        edges = store.edge_count(),
        "loaded follower graph"
    );
    Ok(store)
}

/// Parses `source target` lines. The first `limit` lines are read; blank
/// lines inside that window are skipped. Edges come first in the element list,
/// then one node per distinct endpoint in order of first appearance.
pub fn parse_edge_list(raw: &str, limit: usize) -> Result<GraphStore, GraphError> {
    let mut seen = HashSet::new();
    let mut nodes = Vec::new();
    let mut edges = Vec::new();

    for (index, line) in raw.lines().take(limit).enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let (Some(source), Some(target), None) = (tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(GraphError::MalformedEdgeLine {
                line: index + 1,
                content: line.to_owned(),
            });
        };

        for id in [source, target] {
            if seen.insert(id.to_owned()) {
                nodes.push(Node::new(id, user_label(id)));
            }
        }
        edges.push(Edge::new(source, target));
    }

    let mut store = GraphStore::new();
    for edge in edges {
        store.add_edge(edge);
    }
    for node in nodes {
        store.add_node(node);
    }
    Ok(store)
}
