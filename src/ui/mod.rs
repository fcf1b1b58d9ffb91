//! UI module - menu screens and the in-game HUD.

mod hud;
mod plugin;

pub use hud::HealthBar;
pub use plugin::UiPlugin;
