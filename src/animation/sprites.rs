//! Named sprite frame sequences with load tracking and placeholder fallback.
//!
//! Plugins request sequences at startup. While the game is in
//! [`GameState::Loading`] the library polls every pending sequence; a
//! sequence with any failed frame is replaced by solid-colour placeholders
//! of the same length and flagged as degraded for the rest of the run.

use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use std::collections::HashMap;
use thiserror::Error;

use crate::core::GameState;

/// Edge length of placeholder frames, in pixels.
pub const PLACEHOLDER_SIZE: u32 = 32;

const PLACEHOLDER_COLOR: [u8; 4] = [214, 48, 160, 255];
const PLACEHOLDER_SHADE: [u8; 4] = [130, 28, 98, 255];

/// A sprite frame that could not be loaded.
#[derive(Debug, Error)]
#[error("Frame {index} of sprite sequence '{sequence}' failed to load from '{path}'")]
pub struct FrameLoadError {
    pub sequence: String,
    pub index: usize,
    pub path: String,
}

/// Ordered frames of one animation or still image.
#[derive(Debug, Clone, Default)]
pub struct FrameSequence {
    pub frames: Vec<Handle<Image>>,
    /// Set when the frames are generated placeholders.
    pub degraded: bool,
}

impl FrameSequence {
    pub fn new(frames: Vec<Handle<Image>>) -> Self {
        Self { frames, degraded: false }
    }

    pub fn first(&self) -> Option<Handle<Image>> {
        self.frames.first().cloned()
    }
}

struct PendingSequence {
    name: String,
    paths: Vec<String>,
}

/// All sprite sequences used by the game, keyed by name.
#[derive(Resource, Default)]
pub struct SpriteLibrary {
    sequences: HashMap<String, FrameSequence>,
    pending: Vec<PendingSequence>,
}

impl SpriteLibrary {
    /// Start loading a sequence. Requesting a name twice keeps the first.
    pub fn request(&mut self, name: impl Into<String>, paths: &[String], asset_server: &AssetServer) {
        let name = name.into();
        if self.sequences.contains_key(&name) {
            return;
        }

        let frames = paths.iter().map(|path| asset_server.load(path.clone())).collect();
        self.sequences.insert(name.clone(), FrameSequence::new(frames));
        if !paths.is_empty() {
            self.pending.push(PendingSequence {
                name,
                paths: paths.to_vec(),
            });
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, sequence: FrameSequence) {
        self.sequences.insert(name.into(), sequence);
    }

    pub fn get(&self, name: &str) -> Option<&FrameSequence> {
        self.sequences.get(name)
    }

    /// Frames of a sequence, empty when unknown.
    pub fn frames(&self, name: &str) -> Vec<Handle<Image>> {
        self.get(name).map(|s| s.frames.clone()).unwrap_or_default()
    }

    pub fn first(&self, name: &str) -> Option<Handle<Image>> {
        self.get(name).and_then(FrameSequence::first)
    }

    pub fn is_degraded(&self, name: &str) -> bool {
        self.get(name).is_some_and(|s| s.degraded)
    }
}

/// Load progress of a whole sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceStatus {
    Pending,
    Loaded,
    /// Index of the first frame that failed.
    Failed(usize),
}

/// Load progress of a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Pending,
    Loaded,
    Failed,
}

impl From<&LoadState> for FrameStatus {
    fn from(state: &LoadState) -> Self {
        match state {
            LoadState::Loaded => FrameStatus::Loaded,
            LoadState::Failed(_) => FrameStatus::Failed,
            _ => FrameStatus::Pending,
        }
    }
}

/// A failure anywhere settles the sequence; otherwise it waits for every frame.
pub fn sequence_status(frames: impl IntoIterator<Item = FrameStatus>) -> SequenceStatus {
    let mut status = SequenceStatus::Loaded;
    for (index, frame) in frames.into_iter().enumerate() {
        match frame {
            FrameStatus::Failed => return SequenceStatus::Failed(index),
            FrameStatus::Pending => status = SequenceStatus::Pending,
            FrameStatus::Loaded => {}
        }
    }
    status
}

/// Generate `count` solid-colour frames, alternating shade so a looping
/// placeholder still visibly animates.
pub fn placeholder_frames(images: &mut Assets<Image>, count: usize) -> Vec<Handle<Image>> {
    (0..count)
        .map(|index| {
            let color = if index % 2 == 0 {
                PLACEHOLDER_COLOR
            } else {
                PLACEHOLDER_SHADE
            };
            images.add(Image::new_fill(
                Extent3d {
                    width: PLACEHOLDER_SIZE,
                    height: PLACEHOLDER_SIZE,
                    depth_or_array_layers: 1,
                },
                TextureDimension::D2,
                &color,
                TextureFormat::Rgba8UnormSrgb,
                RenderAssetUsages::default(),
            ))
        })
        .collect()
}

/// Poll pending sequences, substitute failed ones, and leave the loading
/// screen once nothing is pending.
pub fn poll_sprite_loads(
    asset_server: Res<AssetServer>,
    mut library: ResMut<SpriteLibrary>,
    mut images: ResMut<Assets<Image>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let pending = std::mem::take(&mut library.pending);

    for sequence in pending {
        let status = {
            let Some(entry) = library.sequences.get(&sequence.name) else {
                continue;
            };
            sequence_status(
                entry
                    .frames
                    .iter()
                    .map(|frame| FrameStatus::from(&asset_server.load_state(frame.id()))),
            )
        };

        match status {
            SequenceStatus::Pending => library.pending.push(sequence),
            SequenceStatus::Loaded => {
                debug!("Sprite sequence '{}' loaded", sequence.name);
            }
            SequenceStatus::Failed(index) => {
                let err = FrameLoadError {
                    sequence: sequence.name.clone(),
                    index,
                    path: sequence.paths.get(index).cloned().unwrap_or_default(),
                };
                error!("{}. Using placeholder frames.", err);

                let frames = placeholder_frames(&mut images, sequence.paths.len());
                library.insert(
                    sequence.name,
                    FrameSequence {
                        frames,
                        degraded: true,
                    },
                );
            }
        }
    }

    if library.pending.is_empty() {
        info!("All sprite sequences settled");
        next_state.set(GameState::MainMenu);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_settles_before_pending_frames() {
        use FrameStatus::*;
        assert_eq!(sequence_status([Loaded, Loaded]), SequenceStatus::Loaded);
        assert_eq!(sequence_status([Loaded, Pending]), SequenceStatus::Pending);
        assert_eq!(sequence_status([Pending, Failed]), SequenceStatus::Failed(1));
        assert_eq!(sequence_status(Vec::new()), SequenceStatus::Loaded);
    }

    #[test]
    fn placeholders_match_requested_length() {
        let mut images = Assets::<Image>::default();
        let frames = placeholder_frames(&mut images, 3);
        assert_eq!(frames.len(), 3);

        let first = images.get(&frames[0]).expect("placeholder stored");
        assert_eq!(first.size(), UVec2::splat(PLACEHOLDER_SIZE));
        let second = images.get(&frames[1]).expect("placeholder stored");
        assert_ne!(first.data, second.data);
    }

    #[test]
    fn unknown_sequences_are_empty() {
        let mut library = SpriteLibrary::default();
        assert!(library.frames("missing").is_empty());
        assert!(!library.is_degraded("missing"));

        library.insert(
            "enemy/swing",
            FrameSequence {
                frames: vec![Handle::weak_from_u128(7)],
                degraded: true,
            },
        );
        assert!(library.is_degraded("enemy/swing"));
        assert_eq!(library.first("enemy/swing"), Some(Handle::weak_from_u128(7)));
    }
}
