use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::NodeShape;

use super::classify::Neighborhood;
use super::palette::Palette;

pub const SELECTED_COLOR: &str = "#B10DC9";

/// Stacking levels. The selection is always drawn on top.
pub mod z_order {
    pub const SELECTED: i64 = 1_000_000;
    pub const CHILD_EDGE: i64 = 500_000;
    pub const FOLLOWER_EDGE: i64 = 100_000;
    pub const GRANDCHILD_EDGE: i64 = 50_000;
    pub const FOLLOWER_NODE: i64 = 9_999;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    Nodes,
    Edges,
    NodeId(String),
    EdgeId(String),
    EdgeSource(String),
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nodes => f.write_str("node"),
            Self::Edges => f.write_str("edge"),
            Self::NodeId(id) => write!(f, "node[id = \"{id}\"]"),
            Self::EdgeId(id) => write!(f, "edge[id = \"{id}\"]"),
            Self::EdgeSource(id) => write!(f, "edge[source = \"{id}\"]"),
        }
    }
}

/// One selector with its declarations. Later rules in a stylesheet win over
/// earlier ones for the same property.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyleRule {
    pub selector: String,
    pub style: IndexMap<String, Value>,
}

impl StyleRule {
    pub fn new(selector: Selector) -> Self {
        Self {
            selector: selector.to_string(),
            style: IndexMap::new(),
        }
    }

    pub fn with(mut self, property: &str, value: impl Into<Value>) -> Self {
        self.style.insert(property.to_owned(), value.into());
        self
    }

    pub fn get(&self, property: &str) -> Option<&Value> {
        self.style.get(property)
    }

    pub fn z_index(&self) -> Option<i64> {
        self.get("z-index").and_then(Value::as_i64)
    }
}

/// The resting stylesheet, used before any selection and after a collapse.
pub fn default_stylesheet() -> Vec<StyleRule> {
    vec![
        StyleRule::new(Selector::Nodes).with("opacity", 0.65),
        StyleRule::new(Selector::Edges)
            .with("curve-style", "bezier")
            .with("opacity", 0.65),
    ]
}

fn arrow_rule(selector: Selector, color: &str, opacity: f64, z_index: i64) -> StyleRule {
    StyleRule::new(selector)
        .with("mid-target-arrow-color", color)
        .with("mid-target-arrow-shape", "vee")
        .with("line-color", color)
        .with("opacity", opacity)
        .with("z-index", z_index)
}

pub fn generate(
    neighborhood: &Neighborhood,
    palette: &Palette,
    follower_color: &str,
    node_shape: NodeShape,
) -> Vec<StyleRule> {
    let mut rules = vec![
        StyleRule::new(Selector::Nodes)
            .with("opacity", 0.3)
            .with("shape", node_shape.as_str()),
        StyleRule::new(Selector::Edges)
            .with("opacity", 0.2)
            .with("curve-style", "bezier"),
        StyleRule::new(Selector::NodeId(neighborhood.selected.clone()))
            .with("background-color", SELECTED_COLOR)
            .with("border-color", "purple")
            .with("border-width", 2)
            .with("border-opacity", 1)
            .with("opacity", 1)
            .with("label", "data(label)")
            .with("color", SELECTED_COLOR)
            .with("text-opacity", 1)
            .with("font-size", 12)
            .with("z-index", z_order::SELECTED),
    ];

    let colors = palette.allocate(&neighborhood.children);

    for (child, &color) in neighborhood.children.iter().zip(&colors) {
        rules.push(
            StyleRule::new(Selector::NodeId(child.id.clone()))
                .with("background-color", color)
                .with("opacity", 0.9),
        );
        rules.push(arrow_rule(
            Selector::EdgeId(child.edge_id.clone()),
            color,
            0.9,
            z_order::CHILD_EDGE,
        ));
    }

    for (child, &color) in neighborhood.children.iter().zip(&colors) {
        if child.grandchildren.is_empty() {
            continue;
        }

        // A mutual follow lists the selection as its own grandchild; it keeps
        // the emphasis rule.
        for grandchild in &child.grandchildren {
            if *grandchild == neighborhood.selected {
                continue;
            }
            rules.push(
                StyleRule::new(Selector::NodeId(grandchild.clone()))
                    .with("background-color", color)
                    .with("opacity", 0.9)
                    .with("shape", NodeShape::Triangle.as_str()),
            );
        }
        rules.push(
            arrow_rule(
                Selector::EdgeSource(child.id.clone()),
                color,
                0.9,
                z_order::GRANDCHILD_EDGE,
            )
            .with("mid-target-arrow-size", 1.5),
        );
    }

    for follower in &neighborhood.followers {
        rules.push(
            StyleRule::new(Selector::NodeId(follower.id.clone()))
                .with("background-color", follower_color)
                .with("opacity", 0.9)
                .with("z-index", z_order::FOLLOWER_NODE),
        );
        rules.push(arrow_rule(
            Selector::EdgeId(follower.edge_id.clone()),
            follower_color,
            1.0,
            z_order::FOLLOWER_EDGE,
        ));
    }

    rules
}
