//! Sprite animation plugin - owns the sprite library and the loading screen.

use bevy::prelude::*;

use super::sprites::{poll_sprite_loads, SpriteLibrary};
use crate::core::GameState;

/// Sprite animation plugin.
///
/// Other plugins request their frame sequences in `Startup`; this plugin
/// polls them during `GameState::Loading` and moves on to the main menu.
pub struct SpriteAnimationPlugin;

impl Plugin for SpriteAnimationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpriteLibrary>().add_systems(
            Update,
            poll_sprite_loads.run_if(in_state(GameState::Loading)),
        );
    }
}
