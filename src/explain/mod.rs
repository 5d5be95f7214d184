pub mod classify;
pub mod palette;
pub mod selection;
pub mod stylesheet;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ExplorerConfig;
use crate::graph::{Element, GraphStore, SelectionEvent};
use crate::layout::{RandomSource, place_children};

use self::classify::classify;
use self::selection::{SelectionTracker, Toggle};
pub use self::stylesheet::StyleRule;
use self::stylesheet::{default_stylesheet, generate};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LayoutName {
    /// Force-directed.
    #[default]
    Cola,
    Cose,
    Random,
    Grid,
    Circle,
    Concentric,
    Breadthfirst,
    /// Use the element positions as given.
    #[value(skip)]
    Preset,
}

/// How the renderer should position elements after a pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutMode {
    pub name: LayoutName,
}

impl LayoutMode {
    pub fn preset() -> Self {
        Self {
            name: LayoutName::Preset,
        }
    }

    pub fn automatic(name: LayoutName) -> Self {
        Self { name }
    }
}

/// The triple handed back to the renderer.
#[derive(Debug, Serialize)]
pub struct PassOutput<'a> {
    pub stylesheet: Vec<StyleRule>,
    pub elements: &'a [Element],
    pub layout: LayoutMode,
}

/// Owns the graph store for the session and turns taps into passes.
///
/// A pass holds the store exclusively from the tap until its output is
/// returned; the renderer may only mutate elements between passes.
pub struct Explorer<R> {
    store: GraphStore,
    tracker: SelectionTracker,
    config: ExplorerConfig,
    random: R,
}

impl<R: RandomSource> Explorer<R> {
    pub fn new(store: GraphStore, config: ExplorerConfig, random: R) -> Self {
        Self {
            store,
            tracker: SelectionTracker::new(),
            config,
            random,
        }
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    /// Mutable access for the renderer between passes.
    pub fn store_mut(&mut self) -> &mut GraphStore {
        &mut self.store
    }

    pub fn tracker(&self) -> &SelectionTracker {
        &self.tracker
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    fn resting(&self) -> PassOutput<'_> {
        PassOutput {
            stylesheet: default_stylesheet(),
            elements: self.store.elements(),
            layout: LayoutMode::automatic(self.config.layout),
        }
    }

    /// Runs one selection pass. `None` means nothing is tapped.
    pub fn on_tap(&mut self, event: Option<&SelectionEvent>) -> PassOutput<'_> {
        let Some(event) = event else {
            return self.resting();
        };

        if self.tracker.toggle(&event.id, &self.store) == Toggle::Collapsing {
            return self.resting();
        }

        let neighborhood = classify(&event.id, &event.incident_edges, &self.store);
        debug!(
            node = %event.id,
            children = ?neighborhood.child_ids(),
            followers = neighborhood.followers.len(),
            "classified neighborhood"
        );

        let stylesheet = generate(
            &neighborhood,
            &self.config.palette,
            &self.config.follower_color,
            self.config.node_shape,
        );

        place_children(
            &event.id,
            event.position,
            &neighborhood.families(),
            &mut self.store,
            &mut self.random,
        );

        PassOutput {
            stylesheet,
            elements: self.store.elements(),
            layout: LayoutMode::preset(),
        }
    }

    /// Taps the node `id` the way a renderer would report it.
    pub fn tap_node(&mut self, id: &str) -> PassOutput<'_> {
        let event = self.store.selection_event(id);
        self.on_tap(event.as_ref())
    }
}
