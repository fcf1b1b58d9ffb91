//! Pointer tracking, click capture and weapon aim.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::components::{AimedWeapon, Player};
use crate::config::GameConfig;
use crate::world::ScreenRect;

/// Latest pointer position and clicks not yet turned into projectiles.
///
/// Clicks are captured every frame and drained by the fixed tick, so none
/// are lost when a frame runs no tick.
#[derive(Resource, Debug, Default)]
pub struct PointerState {
    /// Screen-space pointer position, `None` when outside the window.
    pub position: Option<Vec2>,
    pub queued_shots: Vec<Vec2>,
}

/// Weapon sprite angle in degrees for a pointer position.
///
/// Screen y grows downward, so the angle is negated before the sprite's
/// rest orientation is added.
pub fn aim_angle(from: Vec2, pointer: Vec2, rest_offset_degrees: f32) -> f32 {
    let delta = pointer - from;
    -delta.y.atan2(delta.x).to_degrees() + rest_offset_degrees
}

/// Track the pointer and queue one shot per left click.
pub fn capture_pointer(
    window_query: Query<&Window, With<PrimaryWindow>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut pointer: ResMut<PointerState>,
) {
    let Ok(window) = window_query.get_single() else {
        return;
    };

    pointer.position = window.cursor_position();
    if mouse.just_pressed(MouseButton::Left) {
        if let Some(position) = pointer.position {
            pointer.queued_shots.push(position);
        }
    }
}

pub fn reset_pointer(mut pointer: ResMut<PointerState>) {
    *pointer = PointerState::default();
}

/// Rotate the player's weapon toward the pointer and keep it at its bias
/// from the player's center.
pub fn aim_weapon(
    config: Res<GameConfig>,
    pointer: Res<PointerState>,
    player_query: Query<(&ScreenRect, &Children), With<Player>>,
    mut weapon_query: Query<&mut Transform, With<AimedWeapon>>,
) {
    let Ok((rect, children)) = player_query.get_single() else {
        return;
    };

    let settings = &config.player;
    let bias = settings.weapon_bias();
    let angle = pointer
        .position
        .map(|position| aim_angle(rect.center, position, settings.aim_offset_degrees));

    for child in children.iter() {
        let Ok(mut transform) = weapon_query.get_mut(*child) else {
            continue;
        };
        // Screen-space bias, flipped into the parent's y-up frame
        transform.translation = Vec3::new(bias.x, -bias.y, 0.5);
        if let Some(angle) = angle {
            transform.rotation = Quat::from_rotation_z(angle.to_radians());
        }
    }
}
