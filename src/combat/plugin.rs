//! Combat plugin - projectiles, contact damage and invincibility timing.

use bevy::prelude::*;

use super::damage::{apply_contact_damage, reset_damage_coordinator, DamageCoordinator};
use super::projectile::{
    advance_projectiles, fire_projectiles, resolve_projectile_hits, sync_projectile_transforms,
};
use crate::core::{InSession, TickSet};

/// Combat plugin - handles all combat systems.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DamageCoordinator>()
            .add_systems(OnEnter(InSession), reset_damage_coordinator)
            .add_systems(FixedUpdate, fire_projectiles.in_set(TickSet::Input))
            .add_systems(FixedUpdate, advance_projectiles.in_set(TickSet::Act))
            .add_systems(
                FixedUpdate,
                (resolve_projectile_hits, apply_contact_damage)
                    .chain()
                    .in_set(TickSet::Resolve),
            )
            .add_systems(
                Update,
                sync_projectile_transforms.run_if(in_state(InSession)),
            );
    }
}
