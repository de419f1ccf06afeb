//! A floating icon
//!
//! Drifts at a constant velocity and bounces off the screen edges and the
//! bottom of the header strip.

use glam::Vec2;
use serde::Serialize;

use super::placement::{PlacementBounds, place, place_capped};
use super::rect::Rect;
use super::rng::RandomSource;
use crate::settings::GameSettings;

/// Region icons bounce inside
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    /// Top boundary for icons (bottom of the prompt strip)
    pub header: f32,
}

impl Arena {
    pub fn from_settings(settings: &GameSettings) -> Self {
        Self {
            width: settings.screen_width,
            height: settings.screen_height,
            header: settings.header_height,
        }
    }
}

/// One active icon in a round
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconInstance {
    /// Catalog identifier
    pub name: String,
    /// Bounding region (top-left + size)
    pub rect: Rect,
    /// Displacement per tick
    pub vel: Vec2,
}

impl IconInstance {
    /// Place a new icon clear of `existing_centers` and give it a random drift
    ///
    /// Each velocity component has magnitude in `min_speed..=max_speed` and an
    /// independently random sign.
    pub fn spawn<R: RandomSource + ?Sized>(
        name: impl Into<String>,
        existing_centers: &[Vec2],
        settings: &GameSettings,
        rng: &mut R,
    ) -> Self {
        let bounds = PlacementBounds::for_settings(settings);
        let size = settings.icon_extent();
        let rect = match settings.placement_max_attempts {
            Some(cap) => place_capped(size, existing_centers, settings.min_distance, &bounds, cap, rng),
            None => place(size, existing_centers, settings.min_distance, &bounds, rng),
        };

        let vx = random_sign(rng) * rng.float_in(settings.min_speed, settings.max_speed);
        let vy = random_sign(rng) * rng.float_in(settings.min_speed, settings.max_speed);

        Self {
            name: name.into(),
            rect,
            vel: Vec2::new(vx, vy),
        }
    }

    /// Top-left corner
    pub fn pos(&self) -> Vec2 {
        self.rect.pos
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.rect.contains(point)
    }

    /// Move one tick, then reflect any axis that ended up out of bounds
    ///
    /// The check runs after the move, so an icon can sit up to one step past
    /// an edge for a single tick before the reversed velocity pulls it back.
    pub fn advance(&mut self, arena: &Arena) {
        self.rect.pos += self.vel;

        if self.rect.left() < 0.0 || self.rect.right() > arena.width {
            self.vel.x = -self.vel.x;
        }
        if self.rect.top() < arena.header || self.rect.bottom() > arena.height {
            self.vel.y = -self.vel.y;
        }
    }
}

fn random_sign<R: RandomSource + ?Sized>(rng: &mut R) -> f32 {
    if rng.coin() { 1.0 } else { -1.0 }
}
