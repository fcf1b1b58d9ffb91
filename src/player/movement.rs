//! Keyboard movement with per-axis screen-edge gating.

use bevy::prelude::*;

use super::components::Player;
use crate::animation::{CombatantAnimation, WalkDirection, WalkFlags};
use crate::config::GameConfig;
use crate::world::{ScreenBounds, ScreenRect};

/// Order in which held directions are applied each tick.
const MOVE_ORDER: [WalkDirection; 4] = [
    WalkDirection::Left,
    WalkDirection::Right,
    WalkDirection::Up,
    WalkDirection::Down,
];

/// Directions held this tick (WASD or arrow keys).
pub fn held_directions(keyboard: &ButtonInput<KeyCode>) -> WalkFlags {
    WalkFlags {
        down: keyboard.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]),
        up: keyboard.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]),
        left: keyboard.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]),
        right: keyboard.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]),
    }
}

fn direction_delta(direction: WalkDirection, speed: f32) -> Vec2 {
    match direction {
        WalkDirection::Left => Vec2::new(-speed, 0.0),
        WalkDirection::Right => Vec2::new(speed, 0.0),
        WalkDirection::Up => Vec2::new(0.0, -speed),
        WalkDirection::Down => Vec2::new(0.0, speed),
    }
}

/// Apply each held direction whose resulting rect stays on screen.
///
/// Returns the moved rect and the directions that actually moved.
pub fn gated_move(
    rect: ScreenRect,
    held: WalkFlags,
    speed: f32,
    bounds: ScreenBounds,
) -> (ScreenRect, WalkFlags) {
    let mut moved = rect;
    let mut walked = WalkFlags::default();

    for direction in MOVE_ORDER {
        if !held.is_set(direction) {
            continue;
        }
        let mut candidate = moved;
        candidate.translate(direction_delta(direction, speed));
        if candidate.fits_within(bounds) {
            moved = candidate;
            walked.set(direction);
        }
    }

    (moved, walked)
}

/// Move the player from keyboard input and advance its walk animation.
pub fn move_player(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<GameConfig>,
    bounds: Res<ScreenBounds>,
    mut query: Query<(&mut ScreenRect, &mut CombatantAnimation), With<Player>>,
) {
    let Ok((mut rect, mut animation)) = query.get_single_mut() else {
        return;
    };

    let held = held_directions(&keyboard);
    let (moved, walked) = gated_move(*rect, held, config.player.speed, *bounds);
    *rect = moved;
    animation.update_walk(walked);
}
