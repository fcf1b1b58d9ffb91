//! An enemy walks into the player and contact damage respects the
//! invincibility window.

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use std::time::Duration;

use dark_night::animation::CombatantAnimation;
use dark_night::combat::{apply_contact_damage, DamageCoordinator, Health, WeaponDescriptor, WeaponKind};
use dark_night::config::GameConfig;
use dark_night::core::{end_session_on_defeat, GameRng, GameState, PlayerDamaged, PlayerDefeated};
use dark_night::enemies::ai::update_enemies;
use dark_night::enemies::{Enemy, EnemyCombat, EnemyStats, PursuitTarget, WanderOffset};
use dark_night::player::Player;
use dark_night::world::{ScreenBounds, ScreenRect};

fn arena() -> (World, Entity) {
    let mut config = GameConfig::default();
    config.enemies.wander_offset_range = 0;

    let mut world = World::new();
    world.insert_resource(config);
    world.insert_resource(ScreenBounds::new(800.0, 600.0));
    world.insert_resource(GameRng::seeded(42));
    world.insert_resource(Time::<()>::default());
    world.insert_resource(DamageCoordinator::new(Duration::from_secs(1)));
    world.init_resource::<Events<PlayerDamaged>>();
    world.init_resource::<Events<PlayerDefeated>>();
    world.init_resource::<NextState<GameState>>();

    let player = world
        .spawn((
            Player,
            Health::new(100),
            ScreenRect::new(Vec2::new(300.0, 300.0), Vec2::splat(80.0)),
        ))
        .id();

    world.spawn((
        Enemy,
        ScreenRect::new(Vec2::new(400.0, 300.0), Vec2::splat(64.0)),
        EnemyStats {
            attack_power: 20,
            attack_range: 0.0,
            move_speed: 2.0,
        },
        WeaponDescriptor::new("claws", 20, Handle::default(), WeaponKind::Special),
        EnemyCombat::new(8),
        WanderOffset::default(),
        CombatantAnimation::still(Handle::default()),
        PursuitTarget(player),
    ));

    (world, player)
}

fn run_ticks(world: &mut World, ticks: usize) {
    for _ in 0..ticks {
        world
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f64(1.0 / 60.0));
        world.run_system_once(update_enemies).expect("enemy tick");
        world
            .run_system_once(apply_contact_damage)
            .expect("contact tick");
        world
            .run_system_once(end_session_on_defeat)
            .expect("session tick");
    }
}

fn health(world: &World, player: Entity) -> i32 {
    world.get::<Health>(player).map(|h| h.current).unwrap_or(-1)
}

#[test]
fn pursuing_enemy_lands_one_hit_per_window() {
    let (mut world, player) = arena();

    run_ticks(&mut world, 10);
    assert_eq!(health(&world, player), 100);

    run_ticks(&mut world, 50);
    assert_eq!(health(&world, player), 80);

    run_ticks(&mut world, 70);
    assert_eq!(health(&world, player), 60);
}

#[test]
fn player_health_bottoms_out_at_zero() {
    let (mut world, player) = arena();

    // Ten seconds of contact is far more than 100 health can absorb
    run_ticks(&mut world, 600);
    assert_eq!(health(&world, player), 0);
    assert_eq!(world.resource::<Events<PlayerDefeated>>().len(), 1);
    assert!(matches!(
        world.resource::<NextState<GameState>>(),
        NextState::Pending(GameState::GameOver)
    ));
}
