//! Animation module - frame cycles, combatant body animation, sprite loading.

mod combatant;
mod cycle;
mod plugin;
mod sprites;

pub use combatant::*;
pub use cycle::*;
pub use plugin::SpriteAnimationPlugin;
pub use sprites::*;
