//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (through `RandomSource`)
//! - Stable iteration order (deal order)
//! - No rendering or platform dependencies

pub mod icon;
pub mod placement;
pub mod rect;
pub mod rng;
pub mod state;
pub mod tick;
pub mod view;

pub use icon::{Arena, IconInstance};
pub use placement::{PlacementBounds, is_far_enough, place, place_capped};
pub use rect::Rect;
pub use rng::{RandomSource, SimRng};
pub use state::{GameEvent, GamePhase, GameState, Outcome, Session};
pub use tick::{TickInput, activate, tick};
pub use view::{FrameView, IconView};
