//! Player plugin - spawning, movement, aim and sprites.

use bevy::prelude::*;

use super::aim::{aim_weapon, capture_pointer, reset_pointer, PointerState};
use super::components::{sprite_keys, AimedWeapon, Player};
use super::movement::move_player;
use crate::animation::{CombatantAnimation, SpriteLibrary, VisualState, WalkSheets};
use crate::combat::{Health, WeaponDescriptor, WeaponKind};
use crate::config::GameConfig;
use crate::core::{GameState, InSession, TickSet};
use crate::world::{ScreenBounds, ScreenRect, SessionEntity};

/// Player plugin - handles player spawning, movement, and weapon aim.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerState>()
            .add_systems(Startup, request_player_sprites)
            .add_systems(OnEnter(InSession), (reset_pointer, spawn_player))
            .add_systems(FixedUpdate, move_player.in_set(TickSet::Act))
            .add_systems(
                Update,
                capture_pointer.run_if(in_state(GameState::InGame)),
            )
            .add_systems(
                Update,
                (sync_player_sprite, aim_weapon).run_if(in_state(InSession)),
            );
    }
}

/// Queue the player's sprite sequences.
fn request_player_sprites(
    config: Res<GameConfig>,
    asset_server: Res<AssetServer>,
    mut library: ResMut<SpriteLibrary>,
) {
    let sprites = &config.player.sprites;
    let sequences = [
        (sprite_keys::IDLE, std::slice::from_ref(&sprites.idle)),
        (sprite_keys::WALK_DOWN, sprites.walk_down.as_slice()),
        (sprite_keys::WALK_UP, sprites.walk_up.as_slice()),
        (sprite_keys::WALK_LEFT, sprites.walk_left.as_slice()),
        (sprite_keys::WALK_RIGHT, sprites.walk_right.as_slice()),
        (sprite_keys::WEAPON, std::slice::from_ref(&config.player.weapon.image)),
    ];
    for (name, paths) in sequences {
        library.request(name, paths, &asset_server);
    }
}

/// Spawn the player at the center of the screen with its thrown weapon.
pub fn spawn_player(
    mut commands: Commands,
    config: Res<GameConfig>,
    library: Res<SpriteLibrary>,
    bounds: Res<ScreenBounds>,
) {
    let settings = &config.player;
    let center = Vec2::new(bounds.width / 2.0, bounds.height / 2.0);

    let animation = CombatantAnimation::new(
        library.first(sprite_keys::IDLE),
        WalkSheets {
            down: library.frames(sprite_keys::WALK_DOWN),
            up: library.frames(sprite_keys::WALK_UP),
            left: library.frames(sprite_keys::WALK_LEFT),
            right: library.frames(sprite_keys::WALK_RIGHT),
        },
        settings.walk_ticks_per_frame,
    );
    let weapon = WeaponDescriptor::new(
        settings.weapon.name.clone(),
        settings.weapon.damage,
        library.first(sprite_keys::WEAPON).unwrap_or_default(),
        WeaponKind::Special,
    );
    let weapon_image = weapon.image().clone();
    info!("Player spawned with {}", weapon.name());
    let body_image = animation
        .body_frame(VisualState::Idle)
        .cloned()
        .unwrap_or_default();

    commands
        .spawn((
            Player,
            Health::new(settings.max_health),
            ScreenRect::new(center, settings.size()),
            animation,
            weapon,
            Sprite {
                image: body_image,
                custom_size: Some(settings.size()),
                ..default()
            },
            Transform::from_translation(bounds.to_world(center).extend(2.0)),
            SessionEntity,
        ))
        .with_children(|parent| {
            parent.spawn((
                Sprite {
                    image: weapon_image,
                    custom_size: Some(settings.weapon_size()),
                    ..default()
                },
                Transform::from_xyz(settings.weapon_bias.0, -settings.weapon_bias.1, 0.5),
                AimedWeapon,
            ));
        });
}

/// Show the walk frame for the displayed direction, or idle.
fn sync_player_sprite(mut query: Query<(&CombatantAnimation, &mut Sprite), With<Player>>) {
    let Ok((animation, mut sprite)) = query.get_single_mut() else {
        return;
    };

    let state = VisualState::resolve(false, animation.flags());
    if let Some(frame) = animation.body_frame(state) {
        if sprite.image != *frame {
            sprite.image = frame.clone();
        }
    }
}
