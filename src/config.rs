use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::explain::LayoutName;
use crate::explain::palette::Palette;
use crate::graph::DEFAULT_EDGE_LIMIT;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NodeShape {
    #[default]
    Ellipse,
    Triangle,
    Rectangle,
    Diamond,
    Pentagon,
    Hexagon,
    Heptagon,
    Octagon,
    Star,
    Polygon,
}

impl NodeShape {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ellipse => "ellipse",
            Self::Triangle => "triangle",
            Self::Rectangle => "rectangle",
            Self::Diamond => "diamond",
            Self::Pentagon => "pentagon",
            Self::Hexagon => "hexagon",
            Self::Heptagon => "heptagon",
            Self::Octagon => "octagon",
            Self::Star => "star",
            Self::Polygon => "polygon",
        }
    }
}

/// Control-panel values consumed by each selection pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ExplorerConfig {
    pub follower_color: String,
    /// Accepted for the control panel; children are colored from `palette`.
    pub following_color: String,
    pub node_shape: NodeShape,
    pub palette: Palette,
    pub layout: LayoutName,
    pub edge_limit: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            follower_color: "#ff0000".to_owned(),
            following_color: "#FF4136".to_owned(),
            node_shape: NodeShape::Ellipse,
            palette: Palette::default(),
            layout: LayoutName::Cola,
            edge_limit: DEFAULT_EDGE_LIMIT,
        }
    }
}

impl ExplorerConfig {
    pub fn from_json(raw: &str) -> Result<Self, GraphError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("failed to parse config {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = ExplorerConfig::from_json(r##"{"follower_color": "#00ff00"}"##).unwrap();
        assert_eq!(config.follower_color, "#00ff00");
        assert_eq!(config.following_color, "#FF4136");
        assert_eq!(config.palette, Palette::default());
        assert_eq!(config.edge_limit, 750);
        assert_eq!(config.layout, LayoutName::Cola);
    }

    #[test]
    fn reads_shape_layout_and_palette() {
        let config = ExplorerConfig::from_json(
            r#"{"node_shape": "star", "layout": "cose", "palette": ["red", "blue"]}"#,
        )
        .unwrap();
        assert_eq!(config.node_shape, NodeShape::Star);
        assert_eq!(config.layout, LayoutName::Cose);
        assert_eq!(config.palette.color(3), "blue");
    }

    #[test]
    fn rejects_an_empty_palette() {
        let error = ExplorerConfig::from_json(r#"{"palette": []}"#).unwrap_err();
        assert!(matches!(error, GraphError::InvalidConfig(_)));
    }

    #[test]
    fn shape_names_match_serde_names() {
        for shape in NodeShape::value_variants() {
            let encoded = serde_json::to_value(shape).unwrap();
            assert_eq!(encoded, shape.as_str());
        }
    }
}
