//! Player-related components.

use bevy::prelude::*;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Marker for the weapon sprite that follows the pointer.
#[derive(Component)]
pub struct AimedWeapon;

/// Sprite library keys of the player's sequences.
pub mod sprite_keys {
    pub const IDLE: &str = "player/idle";
    pub const WALK_DOWN: &str = "player/walk_down";
    pub const WALK_UP: &str = "player/walk_up";
    pub const WALK_LEFT: &str = "player/walk_left";
    pub const WALK_RIGHT: &str = "player/walk_right";
    pub const WEAPON: &str = "player/weapon";
}
