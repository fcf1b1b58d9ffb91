//! Unit tests for the enemies module.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::Path;

use super::ai::{in_attack_range, pursuit_step, tick_wander, update_enemies};
use super::data::{load_definitions_from_dir, read_enemy_definition, EnemyDefinition, ENEMY_DATA_DIR};
use super::spawning::{random_spawn_point, spawn_enemies};
use super::visuals::sync_enemy_sprites;
use super::*;
use crate::animation::{CombatantAnimation, CycleEvent, FrameSequence, SpriteLibrary, WalkDirection, WalkFlags};
use crate::combat::{swing_angle, AttackDirection, Health, WeaponClass, WeaponDescriptor, WeaponKind};
use crate::config::{DataLoadError, EnemySettings, GameConfig};
use crate::core::GameRng;
use crate::player::Player;
use crate::test_utils::run_system_once;
use crate::world::{ScreenBounds, ScreenRect};

// -----------------------------------------------------------------------------
// Test utilities
// -----------------------------------------------------------------------------

fn frames(base: u128, count: usize) -> FrameSequence {
    FrameSequence::new((0..count as u128).map(|i| Handle::weak_from_u128(base + i)).collect())
}

fn sword(left: usize, right: usize) -> WeaponDescriptor {
    WeaponDescriptor::new(
        "sludge_blade",
        20,
        Handle::weak_from_u128(1),
        WeaponKind::Sword {
            swing_left: frames(100, left),
            swing_right: frames(200, right),
        },
    )
}

fn stats(attack_range: f32) -> EnemyStats {
    EnemyStats {
        attack_power: 20,
        attack_range,
        move_speed: 2.0,
    }
}

/// World with a player target and no wandering, so pursuit is exact.
fn ai_world(target: Vec2) -> (World, Entity) {
    let mut config = GameConfig::default();
    config.enemies.wander_offset_range = 0;
    config.combat.attack_ticks_per_frame = 1;

    let mut world = World::new();
    world.insert_resource(config);
    world.insert_resource(ScreenBounds::new(1280.0, 720.0));
    world.insert_resource(GameRng::seeded(7));
    let player = world
        .spawn((Player, ScreenRect::new(target, Vec2::splat(80.0))))
        .id();
    (world, player)
}

fn spawn_enemy(world: &mut World, at: Vec2, range: f32, target: Option<Entity>) -> Entity {
    let mut enemy = world.spawn((
        Enemy,
        EnemyKind::Sludge,
        ScreenRect::new(at, Vec2::splat(64.0)),
        stats(range),
        sword(4, 4),
        EnemyCombat::new(1),
        WanderOffset::default(),
        CombatantAnimation::still(Handle::weak_from_u128(9)),
    ));
    if let Some(target) = target {
        enemy.insert(PursuitTarget(target));
    }
    enemy.id()
}

fn center(world: &World, entity: Entity) -> Vec2 {
    world.get::<ScreenRect>(entity).map(|r| r.center).unwrap_or(Vec2::NAN)
}

fn combat(world: &World, entity: Entity) -> EnemyCombat {
    world.get::<EnemyCombat>(entity).cloned().expect("enemy has combat state")
}

// -----------------------------------------------------------------------------
// Wandering and pursuit
// -----------------------------------------------------------------------------

#[test]
fn wander_resamples_into_configured_ranges() {
    let settings = EnemySettings::default();
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut wander = WanderOffset::default();
        tick_wander(&mut wander, &settings, &mut rng);

        assert!((-300.0..300.0).contains(&wander.offset.x));
        assert!((-300.0..300.0).contains(&wander.offset.y));
        assert!((120..150).contains(&wander.countdown));
    }
}

#[test]
fn wander_counts_down_before_resampling() {
    let settings = EnemySettings::default();
    let mut rng = StdRng::seed_from_u64(3);
    let mut wander = WanderOffset {
        offset: Vec2::new(10.0, -10.0),
        countdown: 2,
    };

    tick_wander(&mut wander, &settings, &mut rng);
    tick_wander(&mut wander, &settings, &mut rng);
    assert_eq!(wander.countdown, 0);
    assert_eq!(wander.offset, Vec2::new(10.0, -10.0));

    tick_wander(&mut wander, &settings, &mut rng);
    assert!((120..150).contains(&wander.countdown));
}

#[test]
fn pursuit_moves_by_sign_on_each_axis() {
    assert_eq!(
        pursuit_step(Vec2::new(0.0, 0.0), Vec2::new(50.0, -3.0), 2.0),
        Vec2::new(2.0, -2.0)
    );
    assert_eq!(
        pursuit_step(Vec2::new(10.0, 10.0), Vec2::new(10.0, 40.0), 2.0),
        Vec2::new(0.0, 2.0)
    );
    assert_eq!(pursuit_step(Vec2::ONE, Vec2::ONE, 2.0), Vec2::ZERO);
}

#[test]
fn attack_range_is_inclusive() {
    assert!(in_attack_range(Vec2::ZERO, Vec2::new(300.0, 400.0), 500.0));
    assert!(!in_attack_range(Vec2::ZERO, Vec2::new(300.0, 401.0), 500.0));
}

// -----------------------------------------------------------------------------
// Attack state machine
// -----------------------------------------------------------------------------

#[test]
fn attack_direction_follows_target_side() {
    let weapon = sword(4, 4);

    let mut left = EnemyCombat::new(1);
    assert!(left.start_attack(&weapon, 500.0, 200.0));
    assert_eq!(left.state(), AiState::Attacking(AttackDirection::Left));
    assert_eq!(left.swing_frame(), Some(&Handle::weak_from_u128(100)));

    let mut right = EnemyCombat::new(1);
    assert!(right.start_attack(&weapon, 500.0, 500.0));
    assert_eq!(right.direction(), Some(AttackDirection::Right));
}

#[test]
fn swing_completes_after_frame_count_advances() {
    let weapon = sword(3, 3);
    let mut combat = EnemyCombat::new(1);
    combat.start_attack(&weapon, 0.0, 10.0);

    assert_eq!(combat.update_attack(), CycleEvent::Stepped(1));
    assert_eq!(combat.update_attack(), CycleEvent::Stepped(2));
    assert_eq!(combat.update_attack(), CycleEvent::Completed);
    assert_eq!(combat.state(), AiState::Pursuing);
    assert_eq!(combat.swing_index(), 0);
    assert!(combat.swing_frame().is_none());
}

#[test]
fn cannot_restart_an_attack_mid_swing() {
    let weapon = sword(4, 4);
    let mut combat = EnemyCombat::new(1);
    assert!(combat.start_attack(&weapon, 500.0, 100.0));
    combat.update_attack();
    assert!(!combat.start_attack(&weapon, 500.0, 900.0));
    assert_eq!(combat.direction(), Some(AttackDirection::Left));
    assert_eq!(combat.swing_index(), 1);
}

#[test]
fn missing_swing_frames_never_start_an_attack() {
    let mut combat = EnemyCombat::new(1);
    assert!(!combat.start_attack(&sword(0, 4), 500.0, 100.0));
    assert!(combat.start_attack(&sword(0, 4), 500.0, 900.0));

    let bow = WeaponDescriptor::new("bow", 5, Handle::default(), WeaponKind::Bow);
    let mut archer = EnemyCombat::new(1);
    assert!(!archer.start_attack(&bow, 0.0, 10.0));
    assert_eq!(archer.update_attack(), CycleEvent::Held);
}

#[test]
fn swing_angle_tracks_the_active_side() {
    let mut combat = EnemyCombat::new(1);
    assert_eq!(combat.swing_angle(), None);

    combat.start_attack(&sword(4, 4), 500.0, 100.0);
    let left = combat.swing_angle().expect("attacking");
    assert_eq!(left, swing_angle(AttackDirection::Left, 0));
}

// -----------------------------------------------------------------------------
// Per-tick update
// -----------------------------------------------------------------------------

#[test]
fn enemy_in_range_attacks_within_one_tick_and_holds_still() {
    let (mut world, player) = ai_world(Vec2::new(400.0, 300.0));
    let enemy = spawn_enemy(&mut world, Vec2::new(600.0, 300.0), 500.0, Some(player));

    run_system_once(&mut world, update_enemies);
    assert_eq!(
        combat(&world, enemy).state(),
        AiState::Attacking(AttackDirection::Left)
    );
    assert_eq!(center(&world, enemy), Vec2::new(600.0, 300.0));

    // Target crosses over mid-swing; the direction holds.
    world
        .entity_mut(player)
        .insert(ScreenRect::new(Vec2::new(900.0, 300.0), Vec2::splat(80.0)));
    run_system_once(&mut world, update_enemies);
    assert_eq!(combat(&world, enemy).direction(), Some(AttackDirection::Left));
    assert_eq!(center(&world, enemy), Vec2::new(600.0, 300.0));
}

#[test]
fn enemy_out_of_range_steps_toward_target() {
    let (mut world, player) = ai_world(Vec2::new(1000.0, 600.0));
    let enemy = spawn_enemy(&mut world, Vec2::new(100.0, 100.0), 50.0, Some(player));

    run_system_once(&mut world, update_enemies);
    assert_eq!(center(&world, enemy), Vec2::new(102.0, 102.0));
    assert_eq!(combat(&world, enemy).state(), AiState::Pursuing);

    let walk = world
        .get::<CombatantAnimation>(enemy)
        .map(|a| a.flags())
        .unwrap_or_default();
    assert!(walk.right && walk.down);
}

#[test]
fn enemy_without_target_stays_put() {
    let (mut world, _) = ai_world(Vec2::new(400.0, 300.0));
    let enemy = spawn_enemy(&mut world, Vec2::new(100.0, 100.0), 5000.0, None);

    run_system_once(&mut world, update_enemies);
    assert_eq!(center(&world, enemy), Vec2::new(100.0, 100.0));
    assert_eq!(combat(&world, enemy).state(), AiState::Pursuing);
}

#[test]
fn enemy_is_clamped_to_the_screen() {
    let (mut world, player) = ai_world(Vec2::new(0.0, 0.0));
    let enemy = spawn_enemy(&mut world, Vec2::new(33.0, 33.0), 1.0, Some(player));

    run_system_once(&mut world, update_enemies);
    assert_eq!(center(&world, enemy), Vec2::new(32.0, 32.0));
}

// -----------------------------------------------------------------------------
// Data and spawning
// -----------------------------------------------------------------------------

#[test]
fn shipped_definitions_parse() {
    let sludge: EnemyDefinition =
        ron::from_str(include_str!("../../assets/data/enemies/sludge.ron")).expect("valid RON");
    assert_eq!(sludge.kind, EnemyKind::Sludge);
    assert_eq!(sludge.attack_power, 20);
    assert_eq!(sludge.weapon.class, WeaponClass::Sword);
    assert_eq!(sludge.weapon.swing_left.len(), 4);
    assert_eq!(sludge.weapon.swing_right.len(), 4);
}

#[test]
fn registry_loads_every_data_file() {
    let mut registry = EnemyRegistry::default();
    load_definitions_from_dir(&mut registry, Path::new(ENEMY_DATA_DIR));
    assert!(registry.fill_missing().is_empty());
    assert_eq!(registry.get(EnemyKind::Thug).map(|d| d.health), Some(40));
}

#[test]
fn missing_definitions_fall_back_to_builtins() {
    let mut registry = EnemyRegistry::default();
    load_definitions_from_dir(&mut registry, Path::new("assets/data/no_such_dir"));
    assert_eq!(registry.fill_missing().len(), EnemyKind::ALL.len());

    for kind in EnemyKind::ALL {
        assert_eq!(registry.get(kind).map(|d| d.kind), Some(kind));
    }
}

#[test]
fn unusable_definitions_are_rejected() {
    for kind in EnemyKind::ALL {
        assert!(EnemyDefinition::builtin(kind).validate().is_ok());
    }

    let mut negative = EnemyDefinition::builtin(EnemyKind::Thug);
    negative.health = -5;
    assert!(negative.validate().is_err());

    let mut frozen = EnemyDefinition::builtin(EnemyKind::Thug);
    frozen.move_speed = f32::NAN;
    assert!(frozen.validate().is_err());
}

#[test]
fn invalid_data_file_falls_back_to_builtin() {
    let dir = std::env::temp_dir().join(format!("dark_night_enemies_{}", std::process::id()));
    fs::create_dir_all(&dir).expect("temp dir");
    let sludge = include_str!("../../assets/data/enemies/sludge.ron").replace("health: 100", "health: -5");
    assert!(sludge.contains("health: -5"));
    let path = dir.join("sludge.ron");
    fs::write(&path, sludge).expect("write definition");

    assert!(matches!(
        read_enemy_definition(&path),
        Err(DataLoadError::InvalidValue { .. })
    ));

    let mut registry = EnemyRegistry::default();
    load_definitions_from_dir(&mut registry, &dir);
    assert!(registry.get(EnemyKind::Sludge).is_none());
    registry.fill_missing();
    assert_eq!(registry.get(EnemyKind::Sludge).map(|d| d.health), Some(100));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn spawn_points_respect_margin() {
    let bounds = ScreenBounds::new(1280.0, 720.0);
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let point = random_spawn_point(bounds, 40.0, &mut rng);
        assert!((40.0..=1240.0).contains(&point.x));
        assert!((40.0..=680.0).contains(&point.y));
    }

    let tiny = ScreenBounds::new(60.0, 60.0);
    assert_eq!(random_spawn_point(tiny, 40.0, &mut rng), Vec2::new(30.0, 30.0));
}

#[test]
fn spawned_enemies_walk_at_their_own_frame_rate() {
    let mut config = GameConfig::default();
    config.enemies.spawn = vec![EnemyKind::Sludge];
    config.enemies.walk_ticks_per_frame = 3;
    config.player.walk_ticks_per_frame = 8;

    let mut registry = EnemyRegistry::default();
    registry.fill_missing();
    let mut library = SpriteLibrary::default();
    library.insert(EnemyKind::Sludge.sprite_key("walk_down"), frames(300, 2));

    let mut world = World::new();
    world.insert_resource(config);
    world.insert_resource(registry);
    world.insert_resource(library);
    world.insert_resource(ScreenBounds::new(1280.0, 720.0));
    world.insert_resource(GameRng::seeded(5));
    let player = world
        .spawn((Player, ScreenRect::new(Vec2::new(640.0, 360.0), Vec2::splat(80.0))))
        .id();

    run_system_once(&mut world, spawn_enemies);

    let (enemy, target, health) = world
        .query_filtered::<(Entity, &PursuitTarget, &Health), With<Enemy>>()
        .single(&world);
    assert_eq!(target.0, player);
    assert_eq!(health.current, 100);

    let mut animation = world
        .get::<CombatantAnimation>(enemy)
        .cloned()
        .expect("enemy animated");
    let down = WalkFlags { down: true, ..default() };
    for _ in 0..3 {
        animation.update_walk(down);
    }
    assert_eq!(animation.walk_cycle(WalkDirection::Down).index(), 1);
}

// -----------------------------------------------------------------------------
// Sprite composition
// -----------------------------------------------------------------------------

/// Enemy mid-swing to the left, with an overlay child. Returns the overlay.
fn swinging_enemy(world: &mut World, degraded: bool) -> Entity {
    let mut swing = frames(100, 4);
    swing.degraded = degraded;
    let weapon = WeaponDescriptor::new(
        "sludge_blade",
        20,
        Handle::weak_from_u128(1),
        WeaponKind::Sword {
            swing_left: swing.clone(),
            swing_right: swing,
        },
    );
    let mut combat = EnemyCombat::new(1);
    assert!(combat.start_attack(&weapon, 500.0, 100.0));

    let mut overlay = Entity::PLACEHOLDER;
    world
        .spawn((
            Enemy,
            CombatantAnimation::still(Handle::weak_from_u128(9)),
            combat,
            weapon,
            Sprite::default(),
        ))
        .with_children(|parent| {
            overlay = parent
                .spawn((Sprite::default(), Transform::default(), WeaponOverlay))
                .id();
        });
    overlay
}

#[test]
fn degraded_swing_rotates_the_overlay() {
    let mut world = World::new();
    let overlay = swinging_enemy(&mut world, true);

    run_system_once(&mut world, sync_enemy_sprites);

    let expected = Quat::from_rotation_z(swing_angle(AttackDirection::Left, 0).to_radians());
    let transform = world.get::<Transform>(overlay).expect("overlay transform");
    assert!(transform.rotation.abs_diff_eq(expected, 1e-5));
    assert_eq!(
        world.get::<Sprite>(overlay).map(|s| s.image.clone()),
        Some(Handle::weak_from_u128(100))
    );
}

#[test]
fn drawn_swing_frames_are_not_rotated() {
    let mut world = World::new();
    let overlay = swinging_enemy(&mut world, false);

    run_system_once(&mut world, sync_enemy_sprites);

    let transform = world.get::<Transform>(overlay).expect("overlay transform");
    assert_eq!(transform.rotation, Quat::IDENTITY);
    assert_eq!(
        world.get::<Sprite>(overlay).map(|s| s.image.clone()),
        Some(Handle::weak_from_u128(100))
    );
}
