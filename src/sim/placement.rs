//! Spawn placement by rejection sampling
//!
//! Draw a random top-left corner, keep it if the resulting center is far
//! enough from every center already placed, otherwise draw again.

use glam::Vec2;

use super::rect::Rect;
use super::rng::RandomSource;
use crate::settings::GameSettings;

/// Spacing falls to this fraction of its previous value each time a capped
/// search runs out of attempts
const RELAX_FACTOR: f32 = 0.9;

/// Below this the spacing requirement is dropped entirely
const RELAX_FLOOR: f32 = 1.0;

/// Inclusive range of legal top-left corners (integer grid)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementBounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl PlacementBounds {
    /// Full screen width, and the band below the header strip
    pub fn for_settings(settings: &GameSettings) -> Self {
        Self {
            min_x: 0,
            max_x: (settings.screen_width - settings.icon_size).floor() as i32,
            min_y: settings.header_height.ceil() as i32,
            max_y: (settings.screen_height - settings.icon_size).floor() as i32,
        }
    }

    fn draw<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Vec2 {
        let x = rng.int_in(self.min_x, self.max_x);
        let y = rng.int_in(self.min_y, self.max_y);
        Vec2::new(x as f32, y as f32)
    }
}

/// True when `center` is at least `min_distance` from every existing center
pub fn is_far_enough(center: Vec2, existing_centers: &[Vec2], min_distance: f32) -> bool {
    existing_centers
        .iter()
        .all(|other| center.distance(*other) >= min_distance)
}

/// Find a region of `size` whose center keeps `min_distance` from all
/// `existing_centers`
///
/// Retries without limit. With too many icons or too much spacing for the
/// bounds this never returns; use [`place_capped`] when that matters.
pub fn place<R: RandomSource + ?Sized>(
    size: Vec2,
    existing_centers: &[Vec2],
    min_distance: f32,
    bounds: &PlacementBounds,
    rng: &mut R,
) -> Rect {
    let mut rejected = 0u64;
    loop {
        let candidate = Rect::new(bounds.draw(rng), size);
        if is_far_enough(candidate.center(), existing_centers, min_distance) {
            if rejected > 0 {
                log::debug!("Placed after {} rejected draws", rejected);
            }
            return candidate;
        }
        rejected += 1;
    }
}

/// Like [`place`], but after every `max_attempts` rejected draws the required
/// spacing is relaxed by 10%, so the search always terminates
pub fn place_capped<R: RandomSource + ?Sized>(
    size: Vec2,
    existing_centers: &[Vec2],
    min_distance: f32,
    bounds: &PlacementBounds,
    max_attempts: u32,
    rng: &mut R,
) -> Rect {
    let mut required = min_distance;
    let mut attempts = 0u32;
    loop {
        let candidate = Rect::new(bounds.draw(rng), size);
        if is_far_enough(candidate.center(), existing_centers, required) {
            return candidate;
        }
        attempts += 1;
        if attempts >= max_attempts {
            attempts = 0;
            required *= RELAX_FACTOR;
            if required < RELAX_FLOOR {
                required = 0.0;
            }
            log::warn!(
                "No spot after {} draws, relaxing spacing to {:.1}",
                max_attempts,
                required
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::SimRng;
    use crate::sim::rng::scripted::ScriptedRng;

    fn bounds() -> PlacementBounds {
        PlacementBounds::for_settings(&GameSettings::default())
    }

    #[test]
    fn test_bounds_from_defaults() {
        assert_eq!(
            bounds(),
            PlacementBounds {
                min_x: 0,
                max_x: 700,
                min_y: 100,
                max_y: 500,
            }
        );
    }

    #[test]
    fn test_is_far_enough_boundary() {
        let existing = [Vec2::new(0.0, 0.0)];
        // Exactly at the threshold counts as far enough
        assert!(is_far_enough(Vec2::new(120.0, 0.0), &existing, 120.0));
        assert!(!is_far_enough(Vec2::new(119.9, 0.0), &existing, 120.0));
        assert!(is_far_enough(Vec2::ZERO, &[], 120.0));
    }

    #[test]
    fn test_first_draw_accepted_when_nothing_placed() {
        let mut rng = ScriptedRng::default();
        rng.ints.extend([250, 300]);
        let rect = place(Vec2::splat(100.0), &[], 120.0, &bounds(), &mut rng);
        assert_eq!(rect.pos, Vec2::new(250.0, 300.0));
        assert_eq!(rect.center(), Vec2::new(300.0, 350.0));
    }

    #[test]
    fn test_rejects_until_far_enough() {
        let existing = [Vec2::new(300.0, 350.0)];
        let mut rng = ScriptedRng::default();
        // Same spot (distance 0), then 100 away (too close), then 150 away
        rng.ints.extend([250, 300, 350, 300, 400, 300]);
        let rect = place(Vec2::splat(100.0), &existing, 120.0, &bounds(), &mut rng);
        assert_eq!(rect.pos, Vec2::new(400.0, 300.0));
        assert!(rng.ints.is_empty());
    }

    #[test]
    fn test_draws_stay_in_bounds() {
        let mut rng = SimRng::new(11);
        let b = bounds();
        for _ in 0..500 {
            let rect = place(Vec2::splat(100.0), &[], 0.0, &b, &mut rng);
            assert!(rect.left() >= 0.0 && rect.right() <= 800.0);
            assert!(rect.top() >= 100.0 && rect.bottom() <= 600.0);
        }
    }

    #[test]
    fn test_capped_relaxes_impossible_spacing() {
        // One legal corner only, already occupied: spacing must relax to zero
        let b = PlacementBounds {
            min_x: 0,
            max_x: 0,
            min_y: 100,
            max_y: 100,
        };
        let existing = [Vec2::new(50.0, 150.0)];
        let mut rng = SimRng::new(5);
        let rect = place_capped(Vec2::splat(100.0), &existing, 120.0, &b, 10, &mut rng);
        assert_eq!(rect.center(), existing[0]);
    }

    #[test]
    fn test_capped_matches_uncapped_when_room() {
        let existing = [Vec2::new(100.0, 200.0), Vec2::new(600.0, 500.0)];
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        let r1 = place(Vec2::splat(100.0), &existing, 120.0, &bounds(), &mut a);
        let r2 = place_capped(Vec2::splat(100.0), &existing, 120.0, &bounds(), 1000, &mut b);
        assert_eq!(r1, r2);
    }
}
