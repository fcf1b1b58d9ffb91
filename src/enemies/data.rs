//! Enemy data loading from RON files.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::components::{EnemyKind, EnemyStats};
use crate::combat::WeaponClass;
use crate::config::{read_ron_file, DataLoadError};

/// Directory scanned for enemy definitions.
pub const ENEMY_DATA_DIR: &str = "assets/data/enemies";

/// Weapon carried by an enemy kind.
#[derive(Deserialize, Clone, Debug)]
pub struct WeaponDefinition {
    pub name: String,
    pub class: WeaponClass,
    pub damage: i32,
    /// Rest image shown when not swinging.
    pub image: String,
    #[serde(default)]
    pub swing_left: Vec<String>,
    #[serde(default)]
    pub swing_right: Vec<String>,
}

/// Optional walking frames for an enemy body.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct WalkSpritePaths {
    #[serde(default)]
    pub down: Vec<String>,
    #[serde(default)]
    pub up: Vec<String>,
    #[serde(default)]
    pub left: Vec<String>,
    #[serde(default)]
    pub right: Vec<String>,
}

/// Enemy definition loaded from RON file.
#[derive(Deserialize, Clone, Debug)]
pub struct EnemyDefinition {
    pub kind: EnemyKind,
    pub name: String,
    pub health: i32,
    pub attack_power: i32,
    pub attack_range: f32,
    pub move_speed: f32,
    pub size: (f32, f32),
    /// Idle body sprite.
    pub body: String,
    #[serde(default)]
    pub walk: WalkSpritePaths,
    pub weapon: WeaponDefinition,
}

impl EnemyDefinition {
    /// Definition used when a kind has no data file.
    pub fn builtin(kind: EnemyKind) -> Self {
        let swing = |side: &str, frames: usize| {
            (1..=frames)
                .map(|i| format!("sprites/sword_swing_{side}{i}.png"))
                .collect::<Vec<_>>()
        };

        match kind {
            EnemyKind::Sludge => Self {
                kind,
                name: "Sludge Guy".to_string(),
                health: 100,
                attack_power: 20,
                attack_range: 500.0,
                move_speed: 2.0,
                size: (64.0, 64.0),
                body: "sprites/sludge.png".to_string(),
                walk: WalkSpritePaths::default(),
                weapon: WeaponDefinition {
                    name: "sludge_blade".to_string(),
                    class: WeaponClass::Sword,
                    damage: 20,
                    image: "sprites/sword.png".to_string(),
                    swing_left: swing("left", 4),
                    swing_right: swing("right", 4),
                },
            },
            EnemyKind::Thug => Self {
                kind,
                name: "Street Thug".to_string(),
                health: 40,
                attack_power: 10,
                attack_range: 150.0,
                move_speed: 3.0,
                size: (56.0, 56.0),
                body: "sprites/thug.png".to_string(),
                walk: WalkSpritePaths::default(),
                weapon: WeaponDefinition {
                    name: "pipe".to_string(),
                    class: WeaponClass::Sword,
                    damage: 10,
                    image: "sprites/pipe.png".to_string(),
                    swing_left: swing("left", 3),
                    swing_right: swing("right", 3),
                },
            },
        }
    }

    /// Convert to EnemyStats component.
    pub fn to_stats(&self) -> EnemyStats {
        EnemyStats {
            attack_power: self.attack_power,
            attack_range: self.attack_range,
            move_speed: self.move_speed,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.size.0, self.size.1)
    }

    /// Check the values a spawned enemy relies on.
    pub fn validate(&self) -> Result<(), String> {
        let finite_non_negative = |v: f32| v.is_finite() && v >= 0.0;

        if self.health <= 0 {
            return Err(format!("health must be positive, got {}", self.health));
        }
        if self.attack_power < 0 {
            return Err(format!("attack_power must not be negative, got {}", self.attack_power));
        }
        if !finite_non_negative(self.attack_range) {
            return Err(format!("attack_range {} is not usable", self.attack_range));
        }
        if !finite_non_negative(self.move_speed) {
            return Err(format!("move_speed {} is not usable", self.move_speed));
        }
        let (width, height) = self.size;
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(format!("size {:?} is not usable", self.size));
        }
        if self.weapon.damage < 0 {
            return Err(format!("weapon damage must not be negative, got {}", self.weapon.damage));
        }
        Ok(())
    }
}

/// Read one definition file and check its values.
pub fn read_enemy_definition(path: &Path) -> Result<EnemyDefinition, DataLoadError> {
    let definition: EnemyDefinition = read_ron_file(path)?;
    definition
        .validate()
        .map_err(|details| DataLoadError::InvalidValue {
            path: path.display().to_string(),
            details,
        })?;
    Ok(definition)
}

/// Resource holding all loaded enemy definitions.
#[derive(Resource, Default)]
pub struct EnemyRegistry {
    pub definitions: HashMap<EnemyKind, EnemyDefinition>,
}

impl EnemyRegistry {
    /// Get an enemy definition by kind.
    pub fn get(&self, kind: EnemyKind) -> Option<&EnemyDefinition> {
        self.definitions.get(&kind)
    }

    /// Add built-in definitions for every kind without a loaded one.
    /// Returns the kinds that were filled in.
    pub fn fill_missing(&mut self) -> Vec<EnemyKind> {
        let missing: Vec<EnemyKind> = EnemyKind::ALL
            .into_iter()
            .filter(|kind| !self.definitions.contains_key(kind))
            .collect();
        for kind in &missing {
            self.definitions.insert(*kind, EnemyDefinition::builtin(*kind));
        }
        missing
    }
}

/// Parse every `.ron` file in a directory into the registry.
pub fn load_definitions_from_dir(registry: &mut EnemyRegistry, dir: &Path) {
    if !dir.exists() {
        warn!("Enemy definitions directory not found: {:?}", dir);
        return;
    }

    let Ok(entries) = fs::read_dir(dir) else {
        warn!("Failed to read enemy definitions directory");
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();

        if path.extension().is_some_and(|ext| ext == "ron") {
            match read_enemy_definition(&path) {
                Ok(definition) => {
                    info!(
                        "Loaded enemy definition: {} ({:?})",
                        definition.name, definition.kind
                    );
                    registry.definitions.insert(definition.kind, definition);
                }
                Err(e) => {
                    error!("{}", e);
                }
            }
        }
    }
}

/// Load all enemy definitions from the assets/data/enemies/ directory.
pub fn load_enemy_definitions(mut registry: ResMut<EnemyRegistry>) {
    load_definitions_from_dir(&mut registry, Path::new(ENEMY_DATA_DIR));

    for kind in registry.fill_missing() {
        warn!("No definition for {:?} enemies. Using built-in defaults.", kind);
    }

    info!("Loaded {} enemy definitions", registry.definitions.len());
}
