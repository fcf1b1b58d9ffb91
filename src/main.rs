//! The Dark Night - Entry Point
//!
//! Controls:
//! - WASD / Arrow keys: Move
//! - Mouse: Aim
//! - Left click: Throw batarang
//! - Escape: Pause/Unpause

use bevy::prelude::*;

use dark_night::config::GameConfig;

fn main() {
    let config = GameConfig::load();
    let window = config.window.clone();

    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: window.title,
                resolution: (window.width, window.height).into(),
                ..default()
            }),
            ..default()
        }))

        // Our game plugin
        .insert_resource(config)
        .add_plugins(dark_night::DarkNightPlugin)

        .run();
}
