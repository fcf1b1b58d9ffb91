//! World module - screen geometry, camera, and session lifetime.

mod geometry;
mod plugin;

pub use geometry::{ScreenBounds, ScreenRect};
pub use plugin::{SessionEntity, WorldPlugin};
