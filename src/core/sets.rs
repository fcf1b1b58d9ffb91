//! Ordering of the fixed simulation tick.

use bevy::prelude::*;

/// Phases of one simulation tick, run in order in `FixedUpdate`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TickSet {
    /// Read player input and refresh screen bounds.
    Input,
    /// Move and animate every entity.
    Act,
    /// Collisions, damage and removals.
    Resolve,
    /// React to this tick's combat events.
    Feedback,
}
