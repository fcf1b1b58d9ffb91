//! Enemy AI behavior: range-gated attacks and wandering pursuit.

use bevy::log::warn_once;
use bevy::prelude::*;
use rand::Rng;

use super::components::{Enemy, EnemyCombat, EnemyStats, PursuitTarget, WanderOffset};
use crate::animation::{CombatantAnimation, WalkFlags};
use crate::combat::WeaponDescriptor;
use crate::config::{EnemySettings, GameConfig};
use crate::core::GameRng;
use crate::player::Player;
use crate::world::{ScreenBounds, ScreenRect};

/// Euclidean center-to-center range check.
pub fn in_attack_range(enemy: Vec2, target: Vec2, range: f32) -> bool {
    enemy.distance(target) <= range
}

/// Count the wander countdown down, drawing a new offset and countdown when
/// it has reached zero.
pub fn tick_wander(wander: &mut WanderOffset, settings: &EnemySettings, rng: &mut impl Rng) {
    if wander.countdown > 0 {
        wander.countdown -= 1;
        return;
    }

    let range = settings.wander_offset_range;
    wander.offset = if range > 0 {
        Vec2::new(
            rng.gen_range(-range..range) as f32,
            rng.gen_range(-range..range) as f32,
        )
    } else {
        Vec2::ZERO
    };

    let (min, max) = settings.wander_countdown;
    wander.countdown = if min < max { rng.gen_range(min..max) } else { min };
}

/// One pursuit step: each axis moves `speed` toward the goal by sign only.
pub fn pursuit_step(position: Vec2, goal: Vec2, speed: f32) -> Vec2 {
    let axis = |from: f32, to: f32| {
        if to > from {
            speed
        } else if to < from {
            -speed
        } else {
            0.0
        }
    };
    Vec2::new(axis(position.x, goal.x), axis(position.y, goal.y))
}

/// Per-tick enemy update: attack triggering, swing animation, wandering and
/// pursuit movement.
///
/// An enemy that starts a swing this tick does not advance it until the next
/// tick. Attacking enemies hold still.
pub fn update_enemies(
    config: Res<GameConfig>,
    bounds: Res<ScreenBounds>,
    mut rng: ResMut<GameRng>,
    target_query: Query<&ScreenRect, (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<
        (
            &mut ScreenRect,
            &EnemyStats,
            &WeaponDescriptor,
            Option<&PursuitTarget>,
            &mut EnemyCombat,
            &mut WanderOffset,
            &mut CombatantAnimation,
        ),
        With<Enemy>,
    >,
) {
    for (mut rect, stats, weapon, target, mut combat, mut wander, mut animation) in
        enemy_query.iter_mut()
    {
        let Some(target_rect) = target.and_then(|t| target_query.get(t.0).ok()) else {
            warn_once!("Enemy has no target to pursue; skipping movement");
            animation.update_walk(WalkFlags::default());
            continue;
        };
        let goal = target_rect.center;

        let started = !combat.is_attacking()
            && in_attack_range(rect.center, goal, stats.attack_range)
            && combat.start_attack(weapon, rect.center.x, goal.x);
        if started {
            debug!("Enemy attacking {:?}", combat.direction());
        } else {
            combat.update_attack();
        }

        tick_wander(&mut wander, &config.enemies, &mut rng.0);

        let step = if combat.is_attacking() {
            Vec2::ZERO
        } else {
            pursuit_step(rect.center, goal + wander.offset, stats.move_speed)
        };
        rect.translate(step);
        rect.clamp_within(*bounds);

        animation.update_walk(WalkFlags::from_step(step));
    }
}
