//! Core game module - states, events, tick ordering and shared resources.
//!
//! This module provides the foundation that all other game systems build upon.

mod events;
mod plugin;
mod rng;
mod sets;
mod states;

pub use events::*;
pub use plugin::{end_session_on_defeat, log_combat_events, CorePlugin};
pub use rng::GameRng;
pub use sets::TickSet;
pub use states::*;
