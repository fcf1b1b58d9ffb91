//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. The simulation tick
//! only runs in `InGame`, while each menu screen lives in its own state.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// - Start in `Loading` while sprite frames load
/// - Move to `MainMenu` when every sequence has settled
/// - `Options` is reached from the main menu and returns to it
/// - `InGame` runs the simulation; `Paused` freezes it but keeps the arena
/// - `GameOver` when the player's health reaches zero
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading sprite frames
    #[default]
    Loading,
    /// Title screen
    MainMenu,
    /// Controls / options screen
    Options,
    /// Active gameplay
    InGame,
    /// Gameplay frozen behind the pause overlay
    Paused,
    /// Player has been defeated
    GameOver,
}

/// Active while a play session exists (`InGame` or `Paused`).
///
/// The arena is spawned on entering this state and torn down on leaving it,
/// so pausing and resuming never respawns anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InSession;

impl ComputedStates for InSession {
    type SourceStates = GameState;

    fn compute(sources: GameState) -> Option<Self> {
        matches!(sources, GameState::InGame | GameState::Paused).then_some(InSession)
    }
}

/// A button pressed on one of the menu screens.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play,
    Options,
    Quit,
    Resume,
    Home,
    Restart,
    Back,
}

/// What the state controller does with a [`MenuChoice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    Enter(GameState),
    Exit,
}

impl MenuChoice {
    pub fn outcome(self) -> MenuOutcome {
        match self {
            MenuChoice::Play | MenuChoice::Resume | MenuChoice::Restart => {
                MenuOutcome::Enter(GameState::InGame)
            }
            MenuChoice::Options => MenuOutcome::Enter(GameState::Options),
            MenuChoice::Home | MenuChoice::Back => MenuOutcome::Enter(GameState::MainMenu),
            MenuChoice::Quit => MenuOutcome::Exit,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Play => "PLAY",
            MenuChoice::Options => "OPTIONS",
            MenuChoice::Quit => "QUIT",
            MenuChoice::Resume => "RESUME",
            MenuChoice::Home => "HOME",
            MenuChoice::Restart => "RESTART",
            MenuChoice::Back => "BACK",
        }
    }
}

/// Escape toggles between `InGame` and `Paused`; other states ignore it.
pub fn pause_toggle(current: GameState) -> Option<GameState> {
    match current {
        GameState::InGame => Some(GameState::Paused),
        GameState::Paused => Some(GameState::InGame),
        _ => None,
    }
}
