mod load;
mod store;

use serde::{Deserialize, Serialize};

pub use load::{DEFAULT_EDGE_LIMIT, load_edge_list, parse_edge_list};
pub use store::GraphStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub id: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub data: NodeData,
    #[serde(default)]
    pub position: Position,
}

impl Node {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            data: NodeData {
                id: id.into(),
                label: label.into(),
            },
            position: Position::ORIGIN,
        }
    }

    pub fn id(&self) -> &str {
        &self.data.id
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeData {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl EdgeData {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: edge_id(&source, &target),
            source,
            target,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub data: EdgeData,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            data: EdgeData::new(source, target),
        }
    }

    pub fn id(&self) -> &str {
        &self.data.id
    }
}

/// A renderer element. Edges are tried first when decoding so that any
/// record carrying `source` and `target` is read as an edge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Element {
    Edge(Edge),
    Node(Node),
}

impl Element {
    pub fn id(&self) -> &str {
        match self {
            Self::Edge(edge) => edge.id(),
            Self::Node(node) => node.id(),
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(node) => Some(node),
            Self::Edge(_) => None,
        }
    }

    pub fn as_edge(&self) -> Option<&Edge> {
        match self {
            Self::Edge(edge) => Some(edge),
            Self::Node(_) => None,
        }
    }
}

pub fn edge_id(source: &str, target: &str) -> String {
    format!("{source}->{target}")
}

/// What the renderer reports when a node is tapped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionEvent {
    pub id: String,
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expanded: Option<bool>,
    #[serde(default)]
    pub incident_edges: Vec<EdgeData>,
}
