//! Enemy-related components.

use bevy::prelude::*;
use serde::Deserialize;

use crate::animation::{AnimationCycle, CycleEvent};
use crate::combat::{swing_angle, AttackDirection, WeaponDescriptor};

/// Marker component for all enemies.
#[derive(Component)]
pub struct Enemy;

/// Enemy variety. Each kind is described by a data file of the same name.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum EnemyKind {
    Sludge,
    Thug,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 2] = [EnemyKind::Sludge, EnemyKind::Thug];

    /// Lowercase key used for data file names and sprite sequence names.
    pub fn key(self) -> &'static str {
        match self {
            EnemyKind::Sludge => "sludge",
            EnemyKind::Thug => "thug",
        }
    }

    /// Name of one of this kind's sprite sequences in the sprite library.
    pub fn sprite_key(self, part: &str) -> String {
        format!("{}/{}", self.key(), part)
    }
}

/// Combat stats copied from the enemy definition at spawn.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct EnemyStats {
    /// Health removed from the player per contact hit.
    pub attack_power: i32,
    /// Center-to-center distance at which a swing starts.
    pub attack_range: f32,
    /// Pixels moved per tick on each axis while pursuing.
    pub move_speed: f32,
}

/// The entity an enemy chases, normally the player.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PursuitTarget(pub Entity);

/// Periodically resampled perturbation of the pursuit goal.
///
/// A zero countdown means a new offset is drawn on the next tick.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct WanderOffset {
    pub offset: Vec2,
    pub countdown: u32,
}

/// Marker for the weapon sprite drawn over an enemy's body.
#[derive(Component)]
pub struct WeaponOverlay;

/// AI state machine for enemy behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AiState {
    /// Walking toward the target plus wander offset.
    #[default]
    Pursuing,
    /// Playing a swing; the direction holds until the swing completes.
    Attacking(AttackDirection),
}

/// Attack state of an enemy: AI state plus the active swing cycle.
#[derive(Component, Debug, Clone)]
pub struct EnemyCombat {
    state: AiState,
    swing: AnimationCycle<Handle<Image>>,
    swing_degraded: bool,
}

impl EnemyCombat {
    pub fn new(ticks_per_frame: u32) -> Self {
        Self {
            state: AiState::Pursuing,
            swing: AnimationCycle::one_shot(Vec::new(), ticks_per_frame),
            swing_degraded: false,
        }
    }

    pub fn state(&self) -> AiState {
        self.state
    }

    pub fn is_attacking(&self) -> bool {
        matches!(self.state, AiState::Attacking(_))
    }

    pub fn direction(&self) -> Option<AttackDirection> {
        match self.state {
            AiState::Attacking(direction) => Some(direction),
            AiState::Pursuing => None,
        }
    }

    /// Begin a swing toward the side the target is on.
    ///
    /// Does nothing while already attacking or when the weapon has no swing
    /// frames for that side.
    pub fn start_attack(&mut self, weapon: &WeaponDescriptor, enemy_x: f32, target_x: f32) -> bool {
        if self.is_attacking() {
            return false;
        }

        let direction = AttackDirection::toward(enemy_x, target_x);
        let Some(sequence) = weapon.swing(direction).filter(|s| !s.frames.is_empty()) else {
            return false;
        };

        self.swing.load(sequence.frames.clone());
        self.swing_degraded = sequence.degraded;
        self.state = AiState::Attacking(direction);
        true
    }

    /// Advance the swing; a completed swing returns the enemy to pursuit.
    pub fn update_attack(&mut self) -> CycleEvent {
        if !self.is_attacking() {
            return CycleEvent::Held;
        }

        let event = self.swing.advance();
        if event == CycleEvent::Completed {
            self.state = AiState::Pursuing;
        }
        event
    }

    /// Current swing frame, `None` when not attacking.
    pub fn swing_frame(&self) -> Option<&Handle<Image>> {
        if self.is_attacking() {
            self.swing.current()
        } else {
            None
        }
    }

    pub fn swing_index(&self) -> usize {
        self.swing.index()
    }

    /// Display angle of the current swing frame.
    pub fn swing_angle(&self) -> Option<f32> {
        self.direction()
            .map(|direction| swing_angle(direction, self.swing_index()))
    }

    /// Whether the active swing uses placeholder frames.
    pub fn swing_degraded(&self) -> bool {
        self.swing_degraded
    }
}
