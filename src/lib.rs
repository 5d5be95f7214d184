//! Selection-driven neighborhood explanation for follower graphs.
//!
//! A tap on a node toggles its expanded state, classifies its one and two hop
//! neighborhood, builds an ordered stylesheet for the renderer and places the
//! revealed neighbors on rings around their parents.

pub mod config;
pub mod error;
pub mod explain;
pub mod graph;
pub mod inspect;
pub mod layout;
pub mod util;

pub use config::{ExplorerConfig, NodeShape};
pub use error::GraphError;
pub use explain::{Explorer, LayoutMode, LayoutName, PassOutput, StyleRule};
pub use graph::{Edge, EdgeData, Element, GraphStore, Node, NodeData, Position, SelectionEvent};
pub use layout::{RandomSource, RngSource};
