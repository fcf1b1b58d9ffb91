//! Enemies module - enemy definitions, AI, and spawning.

pub mod ai;
mod components;
pub mod data;
mod plugin;
pub mod spawning;
mod visuals;

pub use components::*;
pub use data::{EnemyDefinition, EnemyRegistry};
pub use plugin::EnemyPlugin;

#[cfg(test)]
mod tests;
