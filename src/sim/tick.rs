//! Fixed timestep simulation tick
//!
//! Core game loop step: move the icons, then apply every activation that
//! arrived since the previous tick, in arrival order.

use glam::Vec2;

use super::rng::RandomSource;
use super::state::{GameEvent, GamePhase, GameState};

/// Input collected for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Primary pointer activations (screen coordinates), oldest first
    pub activations: Vec<Vec2>,
}

impl TickInput {
    /// Input with a single click at `pos`
    pub fn click(pos: Vec2) -> Self {
        Self {
            activations: vec![pos],
        }
    }

    pub fn push(&mut self, pos: Vec2) {
        self.activations.push(pos);
    }

    pub fn is_empty(&self) -> bool {
        self.activations.is_empty()
    }

    /// Hand over the queued activations, leaving this input empty
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

/// Advance the game by one tick
pub fn tick<R: RandomSource>(state: &mut GameState<R>, input: &TickInput) -> Vec<GameEvent> {
    state.advance_icons();

    let events = input
        .activations
        .iter()
        .filter_map(|&pos| activate(state, pos))
        .collect();

    state.time_ticks += 1;
    events
}

/// Apply one pointer activation to the state machine
///
/// - Start: any click deals a new round.
/// - Play: a click on an icon decides the round; a click on empty space is ignored.
/// - End: any click discards the round.
pub fn activate<R: RandomSource>(state: &mut GameState<R>, pos: Vec2) -> Option<GameEvent> {
    match state.phase {
        GamePhase::Start => Some(state.start_session()),
        GamePhase::Play => state.select_at(pos),
        GamePhase::End => Some(state.discard_session()),
    }
}
