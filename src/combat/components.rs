//! Combat-related components.

use bevy::prelude::*;

/// Component for entities that can take damage.
///
/// Health is integral and never drops below zero.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub current: i32,
    pub maximum: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self {
            current: max,
            maximum: max,
        }
    }

    /// Subtract damage, flooring at zero. Returns the health actually lost.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let actual = amount.clamp(0, self.current.max(0));
        self.current -= actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }

    pub fn percentage(&self) -> f32 {
        if self.maximum <= 0 {
            return 0.0;
        }
        self.current as f32 / self.maximum as f32
    }
}

/// Damage carried by a thrown projectile.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectileDamage(pub i32);
