//! Global events used for cross-system communication.
//!
//! Combat systems emit these; the session controller ends the game on
//! `PlayerDefeated` and the combat log reports the rest.

use bevy::prelude::*;

use crate::enemies::EnemyKind;

/// Sent when contact damage is applied to the player.
#[derive(Event, Debug, Clone)]
pub struct PlayerDamaged {
    /// Enemy whose contact caused the damage
    pub enemy: Entity,
    pub amount: i32,
    /// Player health after the hit
    pub remaining: i32,
}

/// Sent once when the player's health reaches zero.
#[derive(Event, Debug, Clone)]
pub struct PlayerDefeated;

/// Sent when a projectile brings an enemy to zero health.
#[derive(Event, Debug, Clone)]
pub struct EnemyDefeated {
    pub enemy: Entity,
    pub kind: EnemyKind,
}
