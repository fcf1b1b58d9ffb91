//! The Dark Night - a small top-down 2D action game in Bevy.
//!
//! The player walks the screen, aims a batarang at the pointer and throws
//! it; enemies wander toward the player and swing their swords when in
//! range. Touching an enemy costs health, gated by an invincibility window.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, tick ordering, shared RNG
//! - **Config**: Tuning values and RON data file loading
//! - **Animation**: Frame cycles, walk animation, sprite loading with fallback
//! - **World**: Screen geometry, camera, session cleanup
//! - **Player**: Keyboard movement, pointer aim, projectile clicks
//! - **Combat**: Weapons, projectiles, contact damage
//! - **Enemies**: Data-driven enemy kinds, pursuit and sword attacks
//! - **UI**: Menus and HUD
//!
//! Gameplay runs in `FixedUpdate` at the configured tick rate, in screen
//! pixels with a top-left origin; presentation systems in `Update` map that
//! onto Bevy's world space.

pub mod animation;
pub mod combat;
pub mod config;
pub mod core;
pub mod enemies;
pub mod player;
pub mod ui;
pub mod world;

#[cfg(test)]
pub(crate) mod test_utils;

use bevy::prelude::*;

use config::GameConfig;

/// Main game plugin that adds all sub-plugins.
///
/// Uses the given config, or loads `assets/data/game_config.ron` when none
/// was inserted beforehand. Unusable values are reset to their defaults.
pub struct DarkNightPlugin;

impl Plugin for DarkNightPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<GameConfig>() {
            app.insert_resource(GameConfig::load());
        }
        for issue in app.world_mut().resource_mut::<GameConfig>().sanitize() {
            warn!("Game config: {}", issue);
        }
        let tick_rate = app.world().resource::<GameConfig>().tick_rate_hz;

        app
            .insert_resource(Time::<Fixed>::from_hz(tick_rate))

            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Sprite loading and animation
            .add_plugins(animation::SpriteAnimationPlugin)

            // Screen, camera and session lifetime
            .add_plugins(world::WorldPlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Combat systems
            .add_plugins(combat::CombatPlugin)

            // Enemy systems
            .add_plugins(enemies::EnemyPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
