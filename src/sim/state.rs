//! Game state and core simulation types
//!
//! The whole game is one `GameState` owned by the frontend loop and mutated
//! only through `tick`.

use glam::Vec2;
use serde::Serialize;

use super::icon::{Arena, IconInstance};
use super::rng::{RandomSource, SimRng};
use crate::catalog::Catalog;
use crate::error::GameError;
use crate::settings::GameSettings;

/// Current screen of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Title screen, waiting for a click
    #[default]
    Start,
    /// Icons floating, waiting for the player to pick one
    Play,
    /// Result shown, waiting for a click to go back to the title
    End,
}

/// Result of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Outcome {
    #[default]
    Undetermined,
    Correct,
    Incorrect,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    /// Start -> Play: a new round was dealt
    SessionStarted { round: u64, target: String },
    /// Play -> End: the player clicked an icon
    IconSelected { name: String, outcome: Outcome },
    /// End -> Start: the round was thrown away
    SessionDiscarded,
}

/// One round, from dealing the icons to the player's pick
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    /// Round number (1-based, counts every round this game)
    pub round: u64,
    /// Distinct identifiers dealt this round, in draw order
    pub chosen: Vec<String>,
    /// The identifier the player must find; always one of `chosen`
    pub target: String,
    /// One instance per chosen identifier, in the same order
    pub instances: Vec<IconInstance>,
    pub outcome: Outcome,
}

impl Session {
    /// Deal a round: sample distinct icons, pick the target, then place each
    /// icon clear of every icon placed before it
    ///
    /// The catalog must hold at least `settings.icons_per_round` entries;
    /// `GameState::new` checks this up front.
    pub fn deal<R: RandomSource + ?Sized>(
        round: u64,
        catalog: &Catalog,
        settings: &GameSettings,
        rng: &mut R,
    ) -> Self {
        let chosen: Vec<String> = rng
            .sample_indices(catalog.len(), settings.icons_per_round)
            .into_iter()
            .filter_map(|i| catalog.get(i))
            .map(str::to_owned)
            .collect();

        let target = chosen[rng.index(chosen.len())].clone();

        let mut centers: Vec<Vec2> = Vec::with_capacity(chosen.len());
        let mut instances = Vec::with_capacity(chosen.len());
        for name in &chosen {
            let icon = IconInstance::spawn(name.as_str(), &centers, settings, rng);
            centers.push(icon.center());
            instances.push(icon);
        }

        Self {
            round,
            chosen,
            target,
            instances,
            outcome: Outcome::Undetermined,
        }
    }

    /// First instance (in deal order) whose region contains `point`
    pub fn hit_test(&self, point: Vec2) -> Option<&IconInstance> {
        self.instances.iter().find(|icon| icon.contains(point))
    }

    /// A point that `hit_test` resolves to the instance named `name`
    ///
    /// Tries the center first, then a grid across the region, skipping spots
    /// covered by instances dealt earlier. `None` if the icon is fully hidden.
    pub fn clear_point(&self, name: &str) -> Option<Vec2> {
        const STEPS: usize = 8;

        let index = self.instances.iter().position(|icon| icon.name == name)?;
        let rect = self.instances[index].rect;
        let earlier = &self.instances[..index];
        let visible = |p: Vec2| rect.contains(p) && !earlier.iter().any(|icon| icon.contains(p));

        let center = rect.center();
        if visible(center) {
            return Some(center);
        }
        (0..STEPS)
            .flat_map(|i| (0..STEPS).map(move |j| (i, j)))
            .map(|(i, j)| {
                let t = Vec2::new(i as f32 + 0.5, j as f32 + 0.5) / STEPS as f32;
                rect.pos + rect.size * t
            })
            .find(|&p| visible(p))
    }

    pub fn target_instance(&self) -> Option<&IconInstance> {
        self.instances.iter().find(|icon| icon.name == self.target)
    }

    /// Advance every instance one tick
    pub fn advance(&mut self, arena: &Arena) {
        for icon in &mut self.instances {
            icon.advance(arena);
        }
    }
}

/// Complete game state
///
/// Generic over the random source so tests can drive it with scripted draws.
#[derive(Debug, Clone)]
pub struct GameState<R = SimRng> {
    pub phase: GamePhase,
    /// Present in `Play` and `End`, absent in `Start`
    pub session: Option<Session>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Rounds dealt so far
    pub rounds_played: u64,
    catalog: Catalog,
    settings: GameSettings,
    arena: Arena,
    rng: R,
}

impl GameState<SimRng> {
    /// Create a new game with a seeded PCG random source
    pub fn new(catalog: Catalog, settings: GameSettings, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(catalog, settings, SimRng::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new game with any random source
    ///
    /// Fails if the settings are unusable or the catalog cannot fill a round.
    pub fn with_rng(catalog: Catalog, settings: GameSettings, rng: R) -> Result<Self, GameError> {
        settings.validate()?;
        catalog.ensure_round_size(settings.icons_per_round)?;

        Ok(Self {
            phase: GamePhase::Start,
            session: None,
            time_ticks: 0,
            rounds_played: 0,
            arena: Arena::from_settings(&settings),
            catalog,
            settings,
            rng,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Start -> Play
    pub(crate) fn start_session(&mut self) -> GameEvent {
        self.rounds_played += 1;
        let session = Session::deal(self.rounds_played, &self.catalog, &self.settings, &mut self.rng);
        log::info!(
            "Round {}: find {} among {:?}",
            session.round,
            session.target,
            session.chosen
        );
        if log::log_enabled!(log::Level::Debug) {
            match serde_json::to_string(&session) {
                Ok(json) => log::debug!("Dealt {}", json),
                Err(e) => log::warn!("Could not encode round {}: {}", session.round, e),
            }
        }
        let event = GameEvent::SessionStarted {
            round: session.round,
            target: session.target.clone(),
        };
        self.session = Some(session);
        self.phase = GamePhase::Play;
        event
    }

    /// Play -> End if `point` lands on an icon; otherwise nothing happens
    pub(crate) fn select_at(&mut self, point: Vec2) -> Option<GameEvent> {
        let session = self.session.as_mut()?;
        let name = session.hit_test(point)?.name.clone();
        let outcome = if name == session.target {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        };
        session.outcome = outcome;
        log::info!("Round {}: picked {} ({:?})", session.round, name, outcome);
        self.phase = GamePhase::End;
        Some(GameEvent::IconSelected { name, outcome })
    }

    /// End -> Start, dropping the finished round
    pub(crate) fn discard_session(&mut self) -> GameEvent {
        self.session = None;
        self.phase = GamePhase::Start;
        GameEvent::SessionDiscarded
    }

    /// Move every icon one tick (only while playing)
    pub(crate) fn advance_icons(&mut self) {
        if self.phase != GamePhase::Play {
            return;
        }
        if let Some(session) = self.session.as_mut() {
            session.advance(&self.arena);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::Rect;

    #[test]
    fn test_new_starts_in_start_phase() {
        let state = GameState::new(Catalog::default(), GameSettings::default(), 1).unwrap();
        assert_eq!(state.phase, GamePhase::Start);
        assert!(state.session.is_none());
        assert_eq!(state.rounds_played, 0);
    }

    #[test]
    fn test_new_refuses_small_catalog() {
        let catalog = Catalog::new(["a.png", "b.png", "c.png", "d.png"]).unwrap();
        let err = GameState::new(catalog, GameSettings::default(), 1).unwrap_err();
        assert!(matches!(
            err,
            GameError::CatalogTooSmall {
                available: 4,
                required: 5
            }
        ));
    }

    #[test]
    fn test_new_refuses_invalid_settings() {
        let settings = GameSettings {
            icons_per_round: 0,
            ..Default::default()
        };
        assert!(matches!(
            GameState::new(Catalog::default(), settings, 1),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_deal_exact_catalog_size() {
        let catalog = Catalog::new(["a", "b", "c", "d", "e"]).unwrap();
        let mut rng = SimRng::new(8);
        let session = Session::deal(1, &catalog, &GameSettings::default(), &mut rng);
        let mut names = session.chosen.clone();
        names.sort();
        assert_eq!(names, vec!["a", "b", "c", "d", "e"]);
        assert!(session.chosen.contains(&session.target));
        assert_eq!(session.outcome, Outcome::Undetermined);
    }

    #[test]
    fn test_deal_instances_follow_chosen_order() {
        let mut rng = SimRng::new(21);
        let session = Session::deal(1, &Catalog::default(), &GameSettings::default(), &mut rng);
        let names: Vec<&str> = session.instances.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, session.chosen.iter().map(String::as_str).collect::<Vec<_>>());
        assert!(session.target_instance().is_some());
    }

    #[test]
    fn test_hit_test_first_match_wins() {
        let make = |name: &str, x: f32| IconInstance {
            name: name.to_string(),
            rect: Rect::new(Vec2::new(x, 200.0), Vec2::splat(100.0)),
            vel: Vec2::new(0.5, 0.5),
        };
        let session = Session {
            round: 1,
            chosen: vec!["a".into(), "b".into()],
            target: "b".into(),
            // Overlapping after drifting: both contain x = 160
            instances: vec![make("a", 100.0), make("b", 150.0)],
            outcome: Outcome::Undetermined,
        };
        assert_eq!(session.hit_test(Vec2::new(160.0, 250.0)).unwrap().name, "a");
        assert_eq!(session.hit_test(Vec2::new(220.0, 250.0)).unwrap().name, "b");
        assert!(session.hit_test(Vec2::new(600.0, 250.0)).is_none());
    }

    #[test]
    fn test_clear_point_avoids_earlier_overlap() {
        let make = |name: &str, x: f32| IconInstance {
            name: name.to_string(),
            rect: Rect::new(Vec2::new(x, 200.0), Vec2::splat(100.0)),
            vel: Vec2::new(0.5, 0.5),
        };
        // "a" covers the center of "b" (200, 250)
        let session = Session {
            round: 1,
            chosen: vec!["a".into(), "b".into()],
            target: "b".into(),
            instances: vec![make("a", 110.0), make("b", 150.0)],
            outcome: Outcome::Undetermined,
        };
        assert_eq!(session.hit_test(Vec2::new(200.0, 250.0)).unwrap().name, "a");

        let point = session.clear_point("b").unwrap();
        assert_eq!(session.hit_test(point).unwrap().name, "b");
        assert_eq!(session.clear_point("a"), Some(Vec2::new(160.0, 250.0)));
        assert!(session.clear_point("missing").is_none());
    }

    #[test]
    fn test_events_and_sessions_encode_as_json() {
        let event = GameEvent::IconSelected {
            name: "merlion.png".to_string(),
            outcome: Outcome::Correct,
        };
        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            r#"{"IconSelected":{"name":"merlion.png","outcome":"Correct"}}"#
        );
        assert_eq!(
            serde_json::to_string(&GameEvent::SessionDiscarded).unwrap(),
            r#""SessionDiscarded""#
        );

        let mut rng = SimRng::new(12);
        let session = Session::deal(3, &Catalog::default(), &GameSettings::default(), &mut rng);
        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(value["round"], 3);
        assert_eq!(value["target"], session.target.as_str());
        assert_eq!(value["instances"].as_array().unwrap().len(), 5);
        assert_eq!(value["instances"][0]["rect"]["size"], serde_json::json!([100.0, 100.0]));
    }

    #[test]
    fn test_clear_point_none_when_fully_hidden() {
        let make = |name: &str| IconInstance {
            name: name.to_string(),
            rect: Rect::new(Vec2::new(300.0, 200.0), Vec2::splat(100.0)),
            vel: Vec2::new(0.5, 0.5),
        };
        let session = Session {
            round: 1,
            chosen: vec!["a".into(), "b".into()],
            target: "b".into(),
            instances: vec![make("a"), make("b")],
            outcome: Outcome::Undetermined,
        };
        assert!(session.clear_point("b").is_none());
    }
}
