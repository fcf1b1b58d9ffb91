//! Weapon descriptors and sword-swing lookup.

use bevy::prelude::*;
use serde::Deserialize;

use crate::animation::FrameSequence;

/// Weapon class as written in data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum WeaponClass {
    Sword,
    Special,
    Bow,
    Gun,
}

/// Class-specific weapon data. Only swords carry swing frames.
#[derive(Debug, Clone)]
pub enum WeaponKind {
    Sword {
        swing_left: FrameSequence,
        swing_right: FrameSequence,
    },
    Special,
    Bow,
    Gun,
}

impl WeaponKind {
    pub fn class(&self) -> WeaponClass {
        match self {
            WeaponKind::Sword { .. } => WeaponClass::Sword,
            WeaponKind::Special => WeaponClass::Special,
            WeaponKind::Bow => WeaponClass::Bow,
            WeaponKind::Gun => WeaponClass::Gun,
        }
    }
}

/// Side an attack is aimed at, fixed for the whole swing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackDirection {
    Left,
    Right,
}

impl AttackDirection {
    /// Left when the target is strictly left of the attacker.
    pub fn toward(attacker_x: f32, target_x: f32) -> Self {
        if target_x < attacker_x {
            AttackDirection::Left
        } else {
            AttackDirection::Right
        }
    }
}

/// Display angle in degrees of each swing frame, swinging to the right.
/// The left swing mirrors it.
const RIGHT_SWING_DEGREES: [f32; 4] = [60.0, 20.0, -20.0, -60.0];

/// Angle of a swing frame for callers that rotate a single image instead of
/// drawing per-frame art. Indices past the table hold the last angle.
pub fn swing_angle(direction: AttackDirection, frame: usize) -> f32 {
    let angle = RIGHT_SWING_DEGREES[frame.min(RIGHT_SWING_DEGREES.len() - 1)];
    match direction {
        AttackDirection::Right => angle,
        AttackDirection::Left => -angle,
    }
}

/// Immutable weapon data owned by the wielding entity.
#[derive(Component, Debug, Clone)]
pub struct WeaponDescriptor {
    name: String,
    damage: i32,
    image: Handle<Image>,
    kind: WeaponKind,
}

impl WeaponDescriptor {
    pub fn new(name: impl Into<String>, damage: i32, image: Handle<Image>, kind: WeaponKind) -> Self {
        Self {
            name: name.into(),
            damage,
            image,
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn damage(&self) -> i32 {
        self.damage
    }

    /// Rest image drawn when the weapon is not swinging.
    pub fn image(&self) -> &Handle<Image> {
        &self.image
    }

    pub fn class(&self) -> WeaponClass {
        self.kind.class()
    }

    /// Swing frames for a direction, `None` for non-sword weapons.
    pub fn swing(&self, direction: AttackDirection) -> Option<&FrameSequence> {
        match &self.kind {
            WeaponKind::Sword {
                swing_left,
                swing_right,
            } => Some(match direction {
                AttackDirection::Left => swing_left,
                AttackDirection::Right => swing_right,
            }),
            _ => None,
        }
    }
}
