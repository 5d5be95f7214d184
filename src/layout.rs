use std::collections::{HashMap, HashSet};
use std::f64::consts::TAU;

use indexmap::IndexMap;
use rand::Rng;
use tracing::{debug, trace};

use crate::graph::{GraphStore, Position};

pub const FIRST_RING_RADIUS: f64 = 500.0;
pub const SECOND_RING_RADIUS: f64 = 250.0;
/// Upper bound of the random extra slots added to each ring.
pub const MAX_EXTRA_SLOTS: usize = 2;

/// Source of layout jitter. Tests script it to get exact coordinates.
pub trait RandomSource {
    /// Uniform in `[0, 1)`.
    fn next_float(&mut self) -> f64;

    /// Uniform in `[low, high]`.
    fn next_int_inclusive(&mut self, low: usize, high: usize) -> usize;
}

/// Adapts any `rand` generator.
#[derive(Clone, Debug)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_float(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    fn next_int_inclusive(&mut self, low: usize, high: usize) -> usize {
        self.0.gen_range(low..=high)
    }
}

/// Places every parent's children on a ring around it and returns the ids
/// that moved, in placement order.
///
/// The selected node's ring uses `anchor` and a wide radius; the other
/// parents use the position their node just received on that first ring, or
/// their stored position. Each ring gets up to [`MAX_EXTRA_SLOTS`] empty slots
/// and one random rotation, so repeated passes give different layouts. A node
/// is moved at most once per pass and the selected node never moves.
pub fn place_children<S: RandomSource>(
    selected: &str,
    anchor: Position,
    families: &IndexMap<String, Vec<String>>,
    store: &mut GraphStore,
    random: &mut S,
) -> Vec<String> {
    let mut first_ring: HashMap<&str, Position> = HashMap::new();
    let mut moved: HashSet<&str> = HashSet::new();
    let mut placed = Vec::new();

    for (parent, children) in families {
        let is_selected = parent == selected;
        let parent_position = if is_selected {
            Some(anchor)
        } else {
            first_ring
                .get(parent.as_str())
                .copied()
                .or_else(|| store.position_of(parent))
        };
        let Some(parent_position) = parent_position else {
            debug!(parent = %parent, "no position for parent, children left in place");
            continue;
        };

        let slots = children.len() + random.next_int_inclusive(0, MAX_EXTRA_SLOTS);
        if slots == 0 {
            continue;
        }

        let radius = if is_selected {
            FIRST_RING_RADIUS
        } else {
            SECOND_RING_RADIUS
        };
        let step = TAU / slots as f64;
        let rotation = random.next_float() * TAU;

        for (index, child) in children.iter().enumerate() {
            if moved.contains(child.as_str()) || child == selected {
                continue;
            }

            let angle = (index as f64 * step) + rotation;
            let position = parent_position.offset(radius * angle.cos(), radius * angle.sin());
            if !store.set_position(child, position) {
                continue;
            }

            trace!(parent = %parent, child = %child, x = position.x, y = position.y, "placed");
            moved.insert(child.as_str());
            placed.push(child.clone());
            if is_selected {
                first_ring.insert(child.as_str(), position);
            }
        }
    }

    debug!(selected, moved = placed.len(), "radial placement done");
    placed
}
