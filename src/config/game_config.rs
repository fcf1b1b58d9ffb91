//! Gameplay tuning loaded from an external RON file.
//!
//! Every value has a built-in default, so a missing or partial file still
//! produces a playable game.

use bevy::prelude::*;
use serde::Deserialize;
use std::fmt::Debug;
use std::path::Path;

use super::{read_ron_file, DataLoadError};
use crate::enemies::EnemyKind;

/// Default location of the tuning file.
pub const GAME_CONFIG_PATH: &str = "assets/data/game_config.ron";

/// Tuning values loaded from assets/data/game_config.ron.
#[derive(Resource, Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowSettings,
    /// Simulation ticks per second.
    pub tick_rate_hz: f64,
    pub player: PlayerSettings,
    pub projectile: ProjectileSettings,
    pub combat: CombatSettings,
    pub enemies: EnemySettings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            tick_rate_hz: 60.0,
            player: PlayerSettings::default(),
            projectile: ProjectileSettings::default(),
            combat: CombatSettings::default(),
            enemies: EnemySettings::default(),
        }
    }
}

impl GameConfig {
    /// Parse a config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        read_ron_file(path)
    }

    /// Load the config from its default location, falling back to defaults.
    pub fn load() -> Self {
        let mut config = match Self::from_file(GAME_CONFIG_PATH) {
            Ok(config) => {
                info!("Loaded game config from {}", GAME_CONFIG_PATH);
                config
            }
            Err(e @ DataLoadError::FileNotFound(_)) => {
                warn!("{}. Using defaults.", e);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
        };

        for issue in config.sanitize() {
            warn!("{}: {}", GAME_CONFIG_PATH, issue);
        }
        config
    }

    /// Replace every value the game cannot run with by its default.
    ///
    /// Returns one message per replaced value.
    pub fn sanitize(&mut self) -> Vec<String> {
        let defaults = Self::default();
        let mut issues = Vec::new();

        let window = &mut self.window;
        replace_invalid(&mut issues, "window.width", &mut window.width, defaults.window.width, positive);
        replace_invalid(&mut issues, "window.height", &mut window.height, defaults.window.height, positive);
        replace_invalid(&mut issues, "tick_rate_hz", &mut self.tick_rate_hz, defaults.tick_rate_hz, |hz: f64| {
            hz.is_finite() && hz > 0.0
        });

        let player = &mut self.player;
        let fallback = &defaults.player;
        replace_invalid(&mut issues, "player.speed", &mut player.speed, fallback.speed, non_negative);
        replace_invalid(&mut issues, "player.size", &mut player.size, fallback.size, positive_pair);
        replace_invalid(&mut issues, "player.max_health", &mut player.max_health, fallback.max_health, |hp: i32| hp > 0);
        replace_invalid(
            &mut issues,
            "player.aim_offset_degrees",
            &mut player.aim_offset_degrees,
            fallback.aim_offset_degrees,
            f32::is_finite,
        );

        let projectile = &mut self.projectile;
        let fallback = &defaults.projectile;
        replace_invalid(&mut issues, "projectile.speed", &mut projectile.speed, fallback.speed, non_negative);
        replace_invalid(
            &mut issues,
            "projectile.spin_per_tick",
            &mut projectile.spin_per_tick,
            fallback.spin_per_tick,
            f32::is_finite,
        );
        replace_invalid(&mut issues, "projectile.size", &mut projectile.size, fallback.size, positive_pair);

        replace_invalid(
            &mut issues,
            "combat.invincibility_window_secs",
            &mut self.combat.invincibility_window_secs,
            defaults.combat.invincibility_window_secs,
            non_negative,
        );

        let enemies = &mut self.enemies;
        let fallback = &defaults.enemies;
        replace_invalid(&mut issues, "enemies.spawn_margin", &mut enemies.spawn_margin, fallback.spawn_margin, non_negative);
        replace_invalid(
            &mut issues,
            "enemies.wander_offset_range",
            &mut enemies.wander_offset_range,
            fallback.wander_offset_range,
            |range: i32| range >= 0,
        );
        replace_invalid(
            &mut issues,
            "enemies.wander_countdown",
            &mut enemies.wander_countdown,
            fallback.wander_countdown,
            |(min, max): (u32, u32)| min <= max,
        );

        issues
    }
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

fn positive_pair((x, y): (f32, f32)) -> bool {
    positive(x) && positive(y)
}

fn replace_invalid<T: Copy + Debug>(
    issues: &mut Vec<String>,
    name: &str,
    value: &mut T,
    default: T,
    valid: impl Fn(T) -> bool,
) {
    if !valid(*value) {
        issues.push(format!("{} = {:?} is invalid, using {:?}", name, value, default));
        *value = default;
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "The Dark Night".to_string(),
            width: 1280.0,
            height: 720.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Pixels moved per tick on each held axis.
    pub speed: f32,
    pub size: (f32, f32),
    pub max_health: i32,
    pub walk_ticks_per_frame: u32,
    /// Rest orientation of the weapon sprite, added to the aim angle.
    pub aim_offset_degrees: f32,
    /// Offset of the weapon sprite from the player's center.
    pub weapon_bias: (f32, f32),
    pub weapon_size: (f32, f32),
    pub weapon: PlayerWeaponSettings,
    pub sprites: PlayerSprites,
}

impl PlayerSettings {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.size.0, self.size.1)
    }

    pub fn weapon_bias(&self) -> Vec2 {
        Vec2::new(self.weapon_bias.0, self.weapon_bias.1)
    }

    pub fn weapon_size(&self) -> Vec2 {
        Vec2::new(self.weapon_size.0, self.weapon_size.1)
    }
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            speed: 5.0,
            size: (80.0, 80.0),
            max_health: 100,
            walk_ticks_per_frame: 8,
            aim_offset_degrees: 225.0,
            weapon_bias: (30.0, 40.0),
            weapon_size: (40.0, 40.0),
            weapon: PlayerWeaponSettings::default(),
            sprites: PlayerSprites::default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PlayerWeaponSettings {
    pub name: String,
    pub damage: i32,
    pub image: String,
}

impl Default for PlayerWeaponSettings {
    fn default() -> Self {
        Self {
            name: "beginning_batarang".to_string(),
            damage: 3,
            image: "sprites/batarang.png".to_string(),
        }
    }
}

/// Sprite paths for the player's body animations.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PlayerSprites {
    pub idle: String,
    pub walk_down: Vec<String>,
    pub walk_up: Vec<String>,
    pub walk_left: Vec<String>,
    pub walk_right: Vec<String>,
}

impl Default for PlayerSprites {
    fn default() -> Self {
        let pair = |dir: &str| {
            (1..=2)
                .map(|i| format!("sprites/batman_walking_{dir}{i}.png"))
                .collect::<Vec<_>>()
        };
        Self {
            idle: "sprites/batman_idle.png".to_string(),
            walk_down: pair("down"),
            walk_up: pair("up"),
            walk_left: pair("left"),
            walk_right: pair("right"),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ProjectileSettings {
    /// Pixels per tick along the firing direction.
    pub speed: f32,
    /// Degrees of visual spin added every tick.
    pub spin_per_tick: f32,
    /// Offset between the simulated position and the drawn sprite.
    pub render_bias: (f32, f32),
    pub size: (f32, f32),
}

impl ProjectileSettings {
    pub fn render_bias(&self) -> Vec2 {
        Vec2::new(self.render_bias.0, self.render_bias.1)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.size.0, self.size.1)
    }
}

impl Default for ProjectileSettings {
    fn default() -> Self {
        Self {
            speed: 15.0,
            spin_per_tick: 30.0,
            render_bias: (30.0, 40.0),
            size: (32.0, 32.0),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CombatSettings {
    /// Minimum seconds between two hits on the player.
    pub invincibility_window_secs: f32,
    /// Ticks each sword-swing frame stays on screen.
    pub attack_ticks_per_frame: u32,
}

impl Default for CombatSettings {
    fn default() -> Self {
        Self {
            invincibility_window_secs: 1.0,
            attack_ticks_per_frame: 8,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct EnemySettings {
    /// Enemies spawned at the start of every session.
    pub spawn: Vec<EnemyKind>,
    /// Minimum distance between a spawn point and the screen edge.
    pub spawn_margin: f32,
    /// Wander offsets are sampled from `[-range, range)` on each axis.
    pub wander_offset_range: i32,
    /// Wander countdown is sampled from `[min, max)` ticks.
    pub wander_countdown: (u32, u32),
    pub walk_ticks_per_frame: u32,
}

impl Default for EnemySettings {
    fn default() -> Self {
        Self {
            spawn: vec![EnemyKind::Sludge],
            spawn_margin: 40.0,
            wander_offset_range: 300,
            wander_countdown: (120, 150),
            walk_ticks_per_frame: 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_config_parses() {
        let config: GameConfig =
            ron::from_str(include_str!("../../assets/data/game_config.ron")).expect("valid RON");
        assert_eq!(config.player.max_health, 100);
        assert_eq!(config.projectile.speed, 15.0);
        assert_eq!(config.player.sprites.walk_down.len(), 2);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: GameConfig = ron::from_str("(tick_rate_hz: 30.0)").expect("valid RON");
        assert_eq!(config.tick_rate_hz, 30.0);
        assert_eq!(config.player.aim_offset_degrees, 225.0);
        assert_eq!(config.enemies.wander_countdown, (120, 150));
    }

    #[test]
    fn shipped_config_needs_no_repairs() {
        let mut config: GameConfig =
            ron::from_str(include_str!("../../assets/data/game_config.ron")).expect("valid RON");
        assert!(config.sanitize().is_empty());
    }

    #[test]
    fn unusable_values_fall_back_to_defaults() {
        let mut config = GameConfig::default();
        config.tick_rate_hz = 0.0;
        config.player.max_health = -5;
        config.combat.invincibility_window_secs = f32::INFINITY;

        let issues = config.sanitize();
        assert_eq!(issues.len(), 3);
        assert_eq!(config.tick_rate_hz, 60.0);
        assert_eq!(config.player.max_health, 100);
        assert_eq!(config.combat.invincibility_window_secs, 1.0);
    }

    #[test]
    fn missing_file_reports_not_found() {
        let err = GameConfig::from_file("assets/data/does_not_exist.ron").unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound(_)));
    }
}
