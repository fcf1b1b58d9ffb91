//! Enemy plugin - registers all enemy systems.

use bevy::prelude::*;

use super::ai;
use super::data::{load_enemy_definitions, EnemyRegistry};
use super::spawning::spawn_enemies;
use super::visuals::{request_enemy_sprites, sync_enemy_sprites};
use crate::core::{InSession, TickSet};
use crate::player::spawn_player;

/// Enemy plugin - handles enemy definitions, spawning, AI and sprites.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemyRegistry>()
            // Definitions are read once; their sprites load during Loading
            .add_systems(
                Startup,
                (load_enemy_definitions, request_enemy_sprites).chain(),
            )
            // Enemies pursue the player, so it must exist first
            .add_systems(OnEnter(InSession), spawn_enemies.after(spawn_player))
            .add_systems(FixedUpdate, ai::update_enemies.in_set(TickSet::Act))
            .add_systems(Update, sync_enemy_sprites.run_if(in_state(InSession)));
    }
}
