//! Icon catalog
//!
//! The ordered list of identifiers a round can draw from. Each identifier is
//! also the asset file name the frontend loads its bitmap from.

use std::collections::HashSet;

use crate::error::GameError;

/// Reference catalog: Singapore landmarks plus a few famous foreign ones
pub const DEFAULT_ICONS: [&str; 12] = [
    "chilli_crab.png",
    "marina_bay_sands.png",
    "changi_airport.png",
    "art_sci_museum.png",
    "singapore_flyer.jpg",
    "merlion.png",
    "eiffel_tower.png",
    "great_wall.png",
    "big_ben.png",
    "pyramid.jpg",
    "statue_of_liberty.jpg",
    "leaning_tower_of_pisa.png",
];

/// Immutable, ordered set of distinct icon identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    names: Vec<String>,
}

impl Catalog {
    /// Build a catalog, rejecting empty or repeated identifiers
    pub fn new<I, S>(names: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if name.trim().is_empty() {
                return Err(GameError::EmptyIconName);
            }
            if !seen.insert(name.as_str()) {
                return Err(GameError::DuplicateIcon(name.clone()));
            }
        }
        Ok(Self { names })
    }

    /// Parse a JSON array of identifier strings
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let names: Vec<String> = serde_json::from_str(json)?;
        Self::new(names)
    }

    /// Fail unless a round of `per_round` distinct icons can be drawn
    pub fn ensure_round_size(&self, per_round: usize) -> Result<(), GameError> {
        if self.names.len() < per_round {
            return Err(GameError::CatalogTooSmall {
                available: self.names.len(),
                required: per_round,
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            names: DEFAULT_ICONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Human-readable label for an identifier
///
/// Drops the file extension, turns underscores into spaces and title-cases
/// each word: `"leaning_tower_of_pisa.png"` becomes `"Leaning Tower Of Pisa"`.
pub fn display_name(id: &str) -> String {
    let stem = id.split('.').next().unwrap_or(id);
    stem.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
