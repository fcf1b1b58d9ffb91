//! Contact damage between enemies and the player.
//!
//! Two gates apply before an enemy's touch hurts: the player's global
//! invincibility window since the last hit from anyone, and the touching
//! enemy's own cooldown since it last landed a hit.

use bevy::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

use super::components::Health;
use crate::config::GameConfig;
use crate::core::{PlayerDamaged, PlayerDefeated};
use crate::enemies::{Enemy, EnemyStats};
use crate::player::Player;
use crate::world::ScreenRect;

/// Decides whether contact damage may be applied this tick.
#[derive(Resource, Debug, Clone)]
pub struct DamageCoordinator {
    window: Duration,
    last_damage_at: Option<Duration>,
    cooling_down_until: HashMap<Entity, Duration>,
}

impl DamageCoordinator {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_damage_at: None,
            cooling_down_until: HashMap::new(),
        }
    }

    pub fn is_cooling_down(&self, now: Duration, enemy: Entity) -> bool {
        self.cooling_down_until
            .get(&enemy)
            .is_some_and(|until| now < *until)
    }

    /// True when both the global window and the enemy's cooldown have passed.
    pub fn can_damage(&self, now: Duration, enemy: Entity) -> bool {
        let window_elapsed = self
            .last_damage_at
            .map_or(true, |last| now.saturating_sub(last) >= self.window);
        window_elapsed && !self.is_cooling_down(now, enemy)
    }

    /// Record a hit from `enemy` if allowed. Returns whether damage applies.
    pub fn try_apply(&mut self, now: Duration, enemy: Entity) -> bool {
        if !self.can_damage(now, enemy) {
            return false;
        }
        self.last_damage_at = Some(now);
        self.cooling_down_until.insert(enemy, now + self.window);
        true
    }

    /// Forget cooldowns that have run out.
    pub fn clear_expired(&mut self, now: Duration) {
        self.cooling_down_until.retain(|_, until| now < *until);
    }

    pub fn cooling_down_count(&self) -> usize {
        self.cooling_down_until.len()
    }
}

impl Default for DamageCoordinator {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

/// Start every session with a fresh coordinator using the configured window.
pub fn reset_damage_coordinator(config: Res<GameConfig>, mut coordinator: ResMut<DamageCoordinator>) {
    let window = Duration::try_from_secs_f32(config.combat.invincibility_window_secs)
        .unwrap_or_default();
    debug!(
        "Damage coordinator reset, dropping {} cooldowns",
        coordinator.cooling_down_count()
    );
    *coordinator = DamageCoordinator::new(window);
}

/// Apply at most one enemy's contact damage per tick.
///
/// Colliding enemies are considered in entity order so the choice is stable.
pub fn apply_contact_damage(
    time: Res<Time>,
    mut coordinator: ResMut<DamageCoordinator>,
    mut player_query: Query<(&ScreenRect, &mut Health), With<Player>>,
    enemy_query: Query<(Entity, &ScreenRect, &EnemyStats), (With<Enemy>, Without<Player>)>,
    mut damaged_events: EventWriter<PlayerDamaged>,
    mut defeated_events: EventWriter<PlayerDefeated>,
) {
    let now = time.elapsed();
    coordinator.clear_expired(now);

    let Ok((player_rect, mut health)) = player_query.get_single_mut() else {
        return;
    };
    if health.is_dead() {
        return;
    }

    let Some((enemy, stats)) = enemy_query
        .iter()
        .filter(|(_, rect, _)| rect.intersects(player_rect))
        .map(|(entity, _, stats)| (entity, stats))
        .min_by_key(|(entity, _)| *entity)
    else {
        return;
    };

    if !coordinator.try_apply(now, enemy) {
        return;
    }

    let amount = health.take_damage(stats.attack_power);
    debug!("Player took {} damage, {} remaining", amount, health.current);
    damaged_events.send(PlayerDamaged {
        enemy,
        amount,
        remaining: health.current,
    });

    if health.is_dead() {
        defeated_events.send(PlayerDefeated);
    }
}
