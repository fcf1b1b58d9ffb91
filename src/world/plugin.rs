//! World plugin - camera, screen bounds, transform sync and arena cleanup.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::geometry::{ScreenBounds, ScreenRect};
use crate::config::GameConfig;
use crate::core::{InSession, TickSet};

/// Marker for everything that belongs to one play session.
///
/// Despawned when the session ends (game over or returning home).
#[derive(Component)]
pub struct SessionEntity;

/// World plugin - handles the camera and screen-space bookkeeping.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScreenBounds>()
            .add_systems(Startup, (init_screen_bounds, spawn_camera))
            .add_systems(FixedUpdate, refresh_screen_bounds.in_set(TickSet::Input))
            .add_systems(
                Update,
                sync_screen_transforms.run_if(in_state(InSession)),
            )
            .add_systems(OnExit(InSession), cleanup_session);
    }
}

/// Start from the configured window size until the window reports its own.
fn init_screen_bounds(config: Res<GameConfig>, mut bounds: ResMut<ScreenBounds>) {
    *bounds = ScreenBounds::new(config.window.width, config.window.height);
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Re-read the drawable area so a resized window is respected.
pub fn refresh_screen_bounds(
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut bounds: ResMut<ScreenBounds>,
) {
    let Ok(window) = window_query.get_single() else {
        return;
    };

    let current = ScreenBounds::new(window.width(), window.height());
    if *bounds != current {
        debug!("Screen bounds changed to {}x{}", current.width, current.height);
        *bounds = current;
    }
}

/// Place each rect-bearing entity's sprite at its screen position, keeping
/// its draw depth.
fn sync_screen_transforms(
    bounds: Res<ScreenBounds>,
    mut query: Query<(&ScreenRect, &mut Transform)>,
) {
    for (rect, mut transform) in query.iter_mut() {
        let world = bounds.to_world(rect.center);
        transform.translation.x = world.x;
        transform.translation.y = world.y;
    }
}

/// Clean up session entities when the session ends.
fn cleanup_session(mut commands: Commands, query: Query<Entity, With<SessionEntity>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
