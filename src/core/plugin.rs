//! Core plugin that sets up game states, events, and the simulation tick.

use bevy::prelude::*;

use super::events::*;
use super::rng::GameRng;
use super::sets::TickSet;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, MainMenu, InGame, etc.) and the `InSession` state
/// - Global events (PlayerDamaged, PlayerDefeated, EnemyDefeated)
/// - The chained `TickSet` phases of the fixed simulation tick
/// - The session controller reacting to combat events
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()
            .add_computed_state::<InSession>()

            // Register global events
            .add_event::<PlayerDamaged>()
            .add_event::<PlayerDefeated>()
            .add_event::<EnemyDefeated>()

            .init_resource::<GameRng>()

            // Entity updates precede collision resolution
            .configure_sets(
                FixedUpdate,
                (TickSet::Input, TickSet::Act, TickSet::Resolve, TickSet::Feedback)
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            )

            // Session outcome and combat log
            .add_systems(
                FixedUpdate,
                (end_session_on_defeat, log_combat_events).in_set(TickSet::Feedback),
            )

            // Pause/unpause with Escape key
            .add_systems(
                Update,
                handle_pause_input.run_if(in_state(InSession)),
            )
            .add_systems(Update, log_state_changes);
    }
}

/// Handle Escape key to pause/unpause the game.
fn handle_pause_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    current_state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        if let Some(next) = pause_toggle(*current_state.get()) {
            next_state.set(next);
        }
    }
}

fn log_state_changes(mut transitions: EventReader<StateTransitionEvent<GameState>>) {
    for transition in transitions.read() {
        debug!("Game state: {:?} -> {:?}", transition.exited, transition.entered);
    }
}

/// Session controller: a defeated player ends the session.
pub fn end_session_on_defeat(
    mut defeated: EventReader<PlayerDefeated>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if defeated.read().next().is_some() {
        info!("Player defeated, game over");
        next_state.set(GameState::GameOver);
    }
}

/// Report hits taken and enemies defeated.
pub fn log_combat_events(
    mut damaged: EventReader<PlayerDamaged>,
    mut enemy_defeated: EventReader<EnemyDefeated>,
) {
    for event in damaged.read() {
        info!(
            "Player hit by {:?} for {} ({} left)",
            event.enemy, event.amount, event.remaining
        );
    }
    for event in enemy_defeated.read() {
        info!("{:?} enemy {:?} defeated", event.kind, event.enemy);
    }
}
