//! Read-only snapshot for presentation
//!
//! Everything a frontend needs to draw a frame, borrowed from the state.

use glam::Vec2;

use super::rng::RandomSource;
use super::state::{GamePhase, GameState, Outcome};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconView<'a> {
    pub name: &'a str,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameView<'a> {
    pub phase: GamePhase,
    /// Identifier to find (`Play` and `End` only)
    pub target: Option<&'a str>,
    pub outcome: Outcome,
    /// Icons in draw order (empty outside `Play`/`End`)
    pub icons: Vec<IconView<'a>>,
}

impl<R: RandomSource> GameState<R> {
    pub fn view(&self) -> FrameView<'_> {
        match &self.session {
            Some(session) => FrameView {
                phase: self.phase,
                target: Some(session.target.as_str()),
                outcome: session.outcome,
                icons: session
                    .instances
                    .iter()
                    .map(|icon| IconView {
                        name: icon.name.as_str(),
                        pos: icon.pos(),
                        size: icon.rect.size,
                    })
                    .collect(),
            },
            None => FrameView {
                phase: self.phase,
                target: None,
                outcome: Outcome::Undetermined,
                icons: Vec::new(),
            },
        }
    }
}
