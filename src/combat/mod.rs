//! Combat module - weapons, projectiles, and contact damage.

mod components;
mod damage;
mod plugin;
mod projectile;
mod weapon;

pub use components::*;
pub use damage::{apply_contact_damage, DamageCoordinator};
pub use plugin::CombatPlugin;
pub use projectile::{advance_projectiles, resolve_projectile_hits, Projectile};
pub use weapon::*;
