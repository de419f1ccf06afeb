//! Spot the Icon - a point-and-click landmark hunt
//!
//! Core modules:
//! - `sim`: Deterministic simulation (placement, motion, session state machine)
//! - `catalog`: The fixed list of icon identifiers
//! - `settings`: Data-driven game tuning
//! - `ui`: Screen composition (draw lists, no pixels)
//! - `renderer`: Canvas 2D backend (browser only)

pub mod catalog;
pub mod error;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use catalog::Catalog;
pub use error::GameError;
pub use settings::GameSettings;

/// Game configuration constants (reference tuning)
pub mod consts {
    /// Fixed simulation rate
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICKS_PER_SECOND as f32;
    /// Maximum ticks run per animation frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Top strip reserved for the prompt text; icons never spawn or bounce inside it
    pub const HEADER_HEIGHT: f32 = 100.0;

    /// Every icon is scaled to a square of this side
    pub const ICON_SIZE: f32 = 100.0;
    /// Minimum distance between icon centers at spawn
    pub const MIN_DISTANCE: f32 = 120.0;

    /// Per-axis speed range (units per tick)
    pub const MIN_SPEED: f32 = 0.5;
    pub const MAX_SPEED: f32 = 1.0;

    /// Icons drawn from the catalog for one round
    pub const ICONS_PER_ROUND: usize = 5;

    /// Window caption and title text
    pub const GAME_TITLE: &str = "Spot the Icon [Singapore Edition]";
}
