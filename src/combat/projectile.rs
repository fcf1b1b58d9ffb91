//! Player-thrown projectiles: straight-line travel with a spinning sprite.

use bevy::prelude::*;

use super::components::{Health, ProjectileDamage};
use super::weapon::WeaponDescriptor;
use crate::config::GameConfig;
use crate::core::EnemyDefeated;
use crate::enemies::{Enemy, EnemyKind};
use crate::player::{Player, PointerState};
use crate::world::{ScreenBounds, ScreenRect, SessionEntity};

/// A projectile in flight, simulated in screen space.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Projectile {
    pub position: Vec2,
    /// Fixed at launch; never changes in flight.
    pub velocity: Vec2,
    /// Accumulated visual spin in degrees.
    pub spin: f32,
    pub spin_step: f32,
}

impl Projectile {
    /// Launch from `source` toward `target` at `speed` pixels per tick.
    ///
    /// Firing at the source point itself launches along +x.
    pub fn fire(source: Vec2, target: Vec2, speed: f32, spin_step: f32) -> Self {
        let delta = target - source;
        let angle = delta.y.atan2(delta.x);
        Self {
            position: source,
            velocity: Vec2::new(angle.cos(), angle.sin()) * speed,
            spin: 0.0,
            spin_step,
        }
    }

    /// One tick of travel. Position moves by the integer-truncated velocity.
    pub fn advance(&mut self) {
        self.position += self.velocity.trunc();
        self.spin += self.spin_step;
    }

    /// Facing along the travel direction, a quarter turn for the sprite's
    /// rest orientation, plus the accumulated spin.
    pub fn rotation_degrees(&self) -> f32 {
        self.velocity.y.atan2(self.velocity.x).to_degrees() + 90.0 + self.spin
    }

    pub fn render_position(&self, bias: Vec2) -> Vec2 {
        self.position + bias
    }

    /// Rect used for hit tests, matching where the sprite is drawn.
    pub fn render_rect(&self, bias: Vec2, size: Vec2) -> ScreenRect {
        ScreenRect::new(self.render_position(bias), size)
    }
}

/// Spawn one projectile per queued click, from the player's center toward
/// the click position.
pub fn fire_projectiles(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut pointer: ResMut<PointerState>,
    player_query: Query<(&ScreenRect, &WeaponDescriptor), With<Player>>,
) {
    let shots = std::mem::take(&mut pointer.queued_shots);
    let Ok((player_rect, weapon)) = player_query.get_single() else {
        return;
    };

    let settings = &config.projectile;
    for target in shots {
        let projectile = Projectile::fire(
            player_rect.center,
            target,
            settings.speed,
            settings.spin_per_tick,
        );
        debug!("Projectile fired toward {:?}", target);

        commands.spawn((
            Sprite {
                image: weapon.image().clone(),
                custom_size: Some(settings.size()),
                ..default()
            },
            Transform::default(),
            projectile,
            ProjectileDamage(weapon.damage()),
            SessionEntity,
        ));
    }
}

/// Move every projectile and drop the ones that left the screen.
pub fn advance_projectiles(
    mut commands: Commands,
    bounds: Res<ScreenBounds>,
    mut query: Query<(Entity, &mut Projectile)>,
) {
    for (entity, mut projectile) in query.iter_mut() {
        projectile.advance();

        if !bounds.contains(projectile.position) {
            commands.entity(entity).despawn_recursive();
        }
    }
}

/// Projectiles that overlap an enemy damage it and are consumed.
pub fn resolve_projectile_hits(
    mut commands: Commands,
    config: Res<GameConfig>,
    bounds: Res<ScreenBounds>,
    projectile_query: Query<(Entity, &Projectile, &ProjectileDamage)>,
    mut enemy_query: Query<(Entity, &ScreenRect, &mut Health, &EnemyKind), With<Enemy>>,
    mut defeated_events: EventWriter<EnemyDefeated>,
) {
    let bias = config.projectile.render_bias();
    let size = config.projectile.size();

    let mut projectiles: Vec<_> = projectile_query
        .iter()
        .filter(|(_, projectile, _)| bounds.contains(projectile.position))
        .collect();
    projectiles.sort_by_key(|(entity, _, _)| *entity);

    for (projectile_entity, projectile, damage) in projectiles {
        let hit_rect = projectile.render_rect(bias, size);

        let mut candidates: Vec<_> = enemy_query
            .iter_mut()
            .filter(|(_, rect, health, _)| !health.is_dead() && rect.intersects(&hit_rect))
            .collect();
        candidates.sort_by_key(|(entity, ..)| *entity);

        let Some((enemy, _, mut health, kind)) = candidates.into_iter().next() else {
            continue;
        };

        health.take_damage(damage.0);
        commands.entity(projectile_entity).despawn_recursive();

        if health.is_dead() {
            defeated_events.send(EnemyDefeated { enemy, kind: *kind });
            commands.entity(enemy).despawn_recursive();
        }
    }
}

/// Place projectile sprites in world space with their spin applied.
pub fn sync_projectile_transforms(
    config: Res<GameConfig>,
    bounds: Res<ScreenBounds>,
    mut query: Query<(&Projectile, &mut Transform)>,
) {
    let bias = config.projectile.render_bias();
    for (projectile, mut transform) in query.iter_mut() {
        let world = bounds.to_world(projectile.render_position(bias));
        transform.translation = world.extend(3.0);
        transform.rotation = Quat::from_rotation_z(projectile.rotation_degrees().to_radians());
    }
}
