//! UI plugin - menus, HUD, and interface elements.

use bevy::prelude::*;

use super::hud;
use crate::core::{GameState, MenuChoice, MenuOutcome};

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // Setup HUD systems
        hud::setup_hud_systems(app);

        app
            // Loading screen
            .add_systems(OnEnter(GameState::Loading), setup_loading_screen)
            .add_systems(OnExit(GameState::Loading), despawn_screen::<LoadingUi>)

            // Main menu
            .add_systems(OnEnter(GameState::MainMenu), setup_main_menu)
            .add_systems(OnExit(GameState::MainMenu), despawn_screen::<MainMenuUi>)

            // Options
            .add_systems(OnEnter(GameState::Options), setup_options_menu)
            .add_systems(OnExit(GameState::Options), despawn_screen::<OptionsUi>)

            // Pause menu
            .add_systems(OnEnter(GameState::Paused), setup_pause_menu)
            .add_systems(OnExit(GameState::Paused), despawn_screen::<PauseMenuUi>)

            // Game over
            .add_systems(OnEnter(GameState::GameOver), setup_game_over)
            .add_systems(OnExit(GameState::GameOver), despawn_screen::<GameOverUi>)

            // Every screen's buttons report a MenuChoice
            .add_systems(Update, menu_button_input);
    }
}

const BUTTON_NORMAL: Color = Color::srgb(0.15, 0.15, 0.2);
const BUTTON_HOVERED: Color = Color::srgb(0.25, 0.25, 0.3);
const BUTTON_PRESSED: Color = Color::srgb(0.3, 0.3, 0.35);
const GOLD: Color = Color::srgb(0.85, 0.7, 0.2);

/// Marker for loading screen UI entities.
#[derive(Component)]
struct LoadingUi;

/// Marker for main menu UI entities.
#[derive(Component)]
struct MainMenuUi;

/// Marker for options screen UI entities.
#[derive(Component)]
struct OptionsUi;

/// Marker for pause menu UI entities.
#[derive(Component)]
struct PauseMenuUi;

/// Marker for game over UI entities.
#[derive(Component)]
struct GameOverUi;

/// Full-screen centered column used by every menu.
fn screen_root(background: Color) -> impl Bundle {
    (
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BackgroundColor(background),
    )
}

fn spawn_title(parent: &mut ChildBuilder, text: &str, size: f32, color: Color, margin: f32) {
    parent.spawn((
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
        Node {
            margin: UiRect::bottom(Val::Px(margin)),
            ..default()
        },
    ));
}

fn setup_loading_screen(mut commands: Commands) {
    commands
        .spawn((screen_root(Color::srgb(0.05, 0.05, 0.08)), LoadingUi))
        .with_children(|parent| {
            spawn_title(parent, "Loading...", 32.0, Color::srgb(0.6, 0.6, 0.65), 0.0);
        });
}

/// Set up the main menu.
fn setup_main_menu(mut commands: Commands) {
    commands
        .spawn((screen_root(Color::srgb(0.05, 0.05, 0.08)), MainMenuUi))
        .with_children(|parent| {
            spawn_title(parent, "THE DARK NIGHT", 80.0, GOLD, 60.0);

            spawn_menu_button(parent, MenuChoice::Play);
            spawn_menu_button(parent, MenuChoice::Options);
            spawn_menu_button(parent, MenuChoice::Quit);
        });
}

/// Set up the options screen (controls reference).
fn setup_options_menu(mut commands: Commands) {
    commands
        .spawn((screen_root(Color::srgb(0.12, 0.12, 0.14)), OptionsUi))
        .with_children(|parent| {
            spawn_title(parent, "OPTIONS", 72.0, GOLD, 40.0);

            for line in [
                "Controls:",
                "WASD / Arrow Keys - Move",
                "Mouse - Aim",
                "Left Click - Throw batarang",
                "Escape - Pause",
            ] {
                spawn_title(parent, line, 28.0, Color::WHITE, 10.0);
            }

            parent.spawn(Node {
                height: Val::Px(30.0),
                ..default()
            });
            spawn_menu_button(parent, MenuChoice::Back);
        });
}

/// Helper to spawn a menu button.
fn spawn_menu_button(parent: &mut ChildBuilder, choice: MenuChoice) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(200.0),
                height: Val::Px(50.0),
                margin: UiRect::all(Val::Px(10.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BUTTON_NORMAL),
            choice,
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(choice.label()),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.85)),
            ));
        });
}

/// Handle menu button interactions on any screen.
fn menu_button_input(
    mut interaction_query: Query<
        (&Interaction, &MenuChoice, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: EventWriter<AppExit>,
) {
    for (interaction, choice, mut bg_color) in interaction_query.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                *bg_color = BUTTON_PRESSED.into();
                match choice.outcome() {
                    MenuOutcome::Enter(state) => {
                        info!("Menu choice {:?} -> {:?}", choice, state);
                        next_state.set(state);
                    }
                    MenuOutcome::Exit => {
                        info!("Quit requested");
                        exit.send(AppExit::Success);
                    }
                }
            }
            Interaction::Hovered => {
                *bg_color = BUTTON_HOVERED.into();
            }
            Interaction::None => {
                *bg_color = BUTTON_NORMAL.into();
            }
        }
    }
}

/// Set up the pause menu.
fn setup_pause_menu(mut commands: Commands) {
    // Semi-transparent overlay
    commands
        .spawn((screen_root(Color::srgba(0.0, 0.0, 0.0, 0.7)), PauseMenuUi))
        .with_children(|parent| {
            spawn_title(parent, "PAUSED", 48.0, Color::srgb(0.8, 0.8, 0.85), 40.0);

            spawn_menu_button(parent, MenuChoice::Resume);
            spawn_menu_button(parent, MenuChoice::Home);
        });
}

/// Set up the game over screen.
fn setup_game_over(mut commands: Commands) {
    commands
        .spawn((screen_root(Color::srgba(0.1, 0.0, 0.0, 0.9)), GameOverUi))
        .with_children(|parent| {
            spawn_title(parent, "GAME OVER", 72.0, Color::srgb(0.8, 0.2, 0.2), 60.0);

            spawn_menu_button(parent, MenuChoice::Restart);
            spawn_menu_button(parent, MenuChoice::Home);
        });
}

/// Clean up every entity of one screen.
fn despawn_screen<T: Component>(mut commands: Commands, query: Query<Entity, With<T>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
