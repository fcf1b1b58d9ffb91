//! Enemy sprite requests and per-frame sprite composition.

use bevy::prelude::*;

use super::components::{Enemy, EnemyCombat, WeaponOverlay};
use super::data::EnemyRegistry;
use crate::animation::{CombatantAnimation, SpriteLibrary, VisualState};
use crate::combat::WeaponDescriptor;

/// Queue every sprite sequence the registered enemy kinds need.
pub fn request_enemy_sprites(
    registry: Res<EnemyRegistry>,
    asset_server: Res<AssetServer>,
    mut library: ResMut<SpriteLibrary>,
) {
    for definition in registry.definitions.values() {
        let kind = definition.kind;
        let weapon = &definition.weapon;
        let walk = &definition.walk;

        let sequences = [
            ("body", std::slice::from_ref(&definition.body)),
            ("weapon", std::slice::from_ref(&weapon.image)),
            ("swing_left", weapon.swing_left.as_slice()),
            ("swing_right", weapon.swing_right.as_slice()),
            ("walk_down", walk.down.as_slice()),
            ("walk_up", walk.up.as_slice()),
            ("walk_left", walk.left.as_slice()),
            ("walk_right", walk.right.as_slice()),
        ];
        for (part, paths) in sequences {
            library.request(kind.sprite_key(part), paths, &asset_server);
        }
    }
}

/// Show the body frame for each enemy's visual state, and the current swing
/// frame (or rest image) on its weapon overlay.
///
/// Placeholder swing frames all look alike, so a degraded swing is rotated
/// through the swing-angle table instead.
pub fn sync_enemy_sprites(
    mut enemy_query: Query<
        (&CombatantAnimation, &EnemyCombat, &WeaponDescriptor, &mut Sprite, &Children),
        (With<Enemy>, Without<WeaponOverlay>),
    >,
    mut overlay_query: Query<(&mut Sprite, &mut Transform), (With<WeaponOverlay>, Without<Enemy>)>,
) {
    for (animation, combat, weapon, mut sprite, children) in enemy_query.iter_mut() {
        let state = VisualState::resolve(combat.is_attacking(), animation.flags());
        if let Some(frame) = animation.body_frame(state) {
            if sprite.image != *frame {
                sprite.image = frame.clone();
            }
        }

        let overlay_image = combat.swing_frame().unwrap_or(weapon.image());
        let angle = match combat.swing_angle() {
            Some(angle) if combat.swing_degraded() => angle,
            _ => 0.0,
        };

        for child in children.iter() {
            let Ok((mut overlay, mut transform)) = overlay_query.get_mut(*child) else {
                continue;
            };
            if overlay.image != *overlay_image {
                overlay.image = overlay_image.clone();
            }
            transform.rotation = Quat::from_rotation_z(angle.to_radians());
        }
    }
}
