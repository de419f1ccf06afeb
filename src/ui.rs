//! Screen composition
//!
//! Turns a `FrameView` into a flat list of draw commands. Backends only have
//! to clear, draw centered text, and blit icons.

use glam::Vec2;

use crate::catalog::display_name;
use crate::consts::GAME_TITLE;
use crate::sim::{FrameView, GamePhase, Outcome};

/// Font size for every line of text
pub const FONT_SIZE: f32 = 28.0;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const ALICE_BLUE: Rgb = Rgb(240, 248, 255);
    pub const TITLE_RED: Rgb = Rgb(255, 0, 0);
    pub const SUCCESS: Rgb = Rgb(0, 200, 0);
    pub const FAILURE: Rgb = Rgb(200, 0, 0);
    pub const HINT: Rgb = Rgb(100, 100, 100);

    /// CSS color string
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

/// One drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole screen
    Clear(Rgb),
    /// Text horizontally centered on `center_x`, top edge at `y`
    Text {
        text: String,
        color: Rgb,
        center_x: f32,
        y: f32,
    },
    /// Icon bitmap scaled to `size` with its top-left at `pos`
    Icon { id: String, pos: Vec2, size: Vec2 },
}

/// Build the draw list for a frame on a screen `screen_width` wide
pub fn compose(view: &FrameView<'_>, screen_width: f32) -> Vec<DrawCommand> {
    let center_x = screen_width / 2.0;
    let text = |text: String, color: Rgb, y: f32| DrawCommand::Text {
        text,
        color,
        center_x,
        y,
    };

    match view.phase {
        GamePhase::Start => vec![
            DrawCommand::Clear(Rgb::WHITE),
            text(format!("Welcome to {GAME_TITLE}"), Rgb::TITLE_RED, 200.0),
            text("Click anywhere to start".to_string(), Rgb::TITLE_RED, 300.0),
        ],
        GamePhase::Play => {
            let mut cmds = Vec::with_capacity(view.icons.len() + 2);
            cmds.push(DrawCommand::Clear(Rgb::ALICE_BLUE));
            if let Some(target) = view.target {
                cmds.push(text(
                    format!("Find: {}", display_name(target)),
                    Rgb::BLACK,
                    20.0,
                ));
            }
            cmds.extend(view.icons.iter().map(|icon| DrawCommand::Icon {
                id: icon.name.to_string(),
                pos: icon.pos,
                size: icon.size,
            }));
            cmds
        }
        GamePhase::End => {
            let (msg, color) = match view.outcome {
                Outcome::Correct => ("Good job!", Rgb::SUCCESS),
                _ => ("Oops, try again!", Rgb::FAILURE),
            };
            vec![
                DrawCommand::Clear(Rgb::ALICE_BLUE),
                text(msg.to_string(), color, 250.0),
                text("Click to play again".to_string(), Rgb::HINT, 320.0),
            ]
        }
    }
}

/// Map a pointer position in client (CSS) pixels to game units
///
/// `canvas_origin` and `canvas_width` are the canvas's current on-page
/// bounding box, so resizes and zoom between events are picked up.
pub fn to_game_coords(client: Vec2, canvas_origin: Vec2, canvas_width: f32, screen_width: f32) -> Vec2 {
    (client - canvas_origin) * (screen_width / canvas_width.max(1.0))
}
