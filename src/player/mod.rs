//! Player module - player entity, movement, and weapon aim.

mod aim;
mod components;
pub mod movement;
mod plugin;

pub use aim::{aim_angle, PointerState};
pub use components::*;
pub use plugin::{spawn_player, PlayerPlugin};
