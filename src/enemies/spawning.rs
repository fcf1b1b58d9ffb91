//! Enemy spawning at the start of a session.

use bevy::prelude::*;
use rand::Rng;

use super::components::{Enemy, EnemyCombat, EnemyKind, PursuitTarget, WanderOffset, WeaponOverlay};
use super::data::{EnemyDefinition, EnemyRegistry};
use crate::animation::{CombatantAnimation, SpriteLibrary, VisualState, WalkSheets};
use crate::combat::{Health, WeaponClass, WeaponDescriptor, WeaponKind};
use crate::config::GameConfig;
use crate::core::GameRng;
use crate::player::Player;
use crate::world::{ScreenBounds, ScreenRect, SessionEntity};

fn spawn_axis(limit: f32, margin: f32, rng: &mut impl Rng) -> f32 {
    if limit - margin > margin {
        rng.gen_range(margin..=limit - margin).round()
    } else {
        limit / 2.0
    }
}

/// Random spawn point keeping `margin` pixels from every screen edge.
///
/// An axis too small for the margin spawns at its center.
pub fn random_spawn_point(bounds: ScreenBounds, margin: f32, rng: &mut impl Rng) -> Vec2 {
    Vec2::new(
        spawn_axis(bounds.width, margin, rng),
        spawn_axis(bounds.height, margin, rng),
    )
}

/// Build the weapon descriptor of an enemy kind from its loaded sprites.
pub fn build_enemy_weapon(definition: &EnemyDefinition, library: &SpriteLibrary) -> WeaponDescriptor {
    let kind = definition.kind;
    let weapon = &definition.weapon;

    let weapon_kind = match weapon.class {
        WeaponClass::Sword => WeaponKind::Sword {
            swing_left: library
                .get(&kind.sprite_key("swing_left"))
                .cloned()
                .unwrap_or_default(),
            swing_right: library
                .get(&kind.sprite_key("swing_right"))
                .cloned()
                .unwrap_or_default(),
        },
        WeaponClass::Special => WeaponKind::Special,
        WeaponClass::Bow => WeaponKind::Bow,
        WeaponClass::Gun => WeaponKind::Gun,
    };

    WeaponDescriptor::new(
        weapon.name.clone(),
        weapon.damage,
        library.first(&kind.sprite_key("weapon")).unwrap_or_default(),
        weapon_kind,
    )
}

fn build_enemy_animation(kind: EnemyKind, library: &SpriteLibrary, ticks_per_frame: u32) -> CombatantAnimation {
    CombatantAnimation::new(
        library.first(&kind.sprite_key("body")),
        WalkSheets {
            down: library.frames(&kind.sprite_key("walk_down")),
            up: library.frames(&kind.sprite_key("walk_up")),
            left: library.frames(&kind.sprite_key("walk_left")),
            right: library.frames(&kind.sprite_key("walk_right")),
        },
        ticks_per_frame,
    )
}

/// Spawn the configured enemy set, each pursuing the player.
pub fn spawn_enemies(
    mut commands: Commands,
    config: Res<GameConfig>,
    registry: Res<EnemyRegistry>,
    library: Res<SpriteLibrary>,
    bounds: Res<ScreenBounds>,
    mut rng: ResMut<GameRng>,
    player_query: Query<Entity, With<Player>>,
) {
    let target = player_query.get_single().ok();
    if target.is_none() {
        warn!("Spawning enemies without a player to pursue");
    }

    for kind in config.enemies.spawn.iter().copied() {
        let Some(definition) = registry.get(kind) else {
            error!("No definition for {:?} enemies, skipping spawn", kind);
            continue;
        };

        let position = random_spawn_point(*bounds, config.enemies.spawn_margin, &mut rng.0);
        let size = definition.size();
        let weapon = build_enemy_weapon(definition, &library);
        let animation = build_enemy_animation(kind, &library, config.enemies.walk_ticks_per_frame);
        let rest_image = weapon.image().clone();
        let weapon_name = weapon.name().to_string();

        let mut enemy = commands.spawn((
            Enemy,
            kind,
            definition.to_stats(),
            Health::new(definition.health),
            ScreenRect::new(position, size),
            EnemyCombat::new(config.combat.attack_ticks_per_frame),
            WanderOffset::default(),
            Sprite {
                image: animation
                    .body_frame(VisualState::Idle)
                    .cloned()
                    .unwrap_or_default(),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(bounds.to_world(position).extend(1.0)),
            SessionEntity,
        ));
        enemy.insert((animation, weapon));
        if let Some(target) = target {
            enemy.insert(PursuitTarget(target));
        }
        enemy.with_children(|parent| {
            parent.spawn((
                Sprite {
                    image: rest_image,
                    custom_size: Some(size),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, 0.5),
                WeaponOverlay,
            ));
        });

        info!("Spawned {} with {} at {:?}", definition.name, weapon_name, position);
    }
}
