use crate::game_logic::errors::{ForedeckError, ForedeckResult};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Stable star identifier, assigned in acceptance order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Serialize, Deserialize,
)]
pub struct StarId(u32);

impl StarId {
    pub fn get(self) -> u32 {
        self.0
    }
}

/// A placed star. Immutable once registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub id: StarId,
    pub display_name: String,
    pub x: f64,
    pub y: f64,
}

impl Star {
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        let dx = self.x - x;
        let dy = self.y - y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Authoritative id → star mapping
#[derive(Debug, Clone, Default)]
pub struct StarRegistry {
    stars: BTreeMap<StarId, Star>,
    by_name: HashMap<String, StarId>,
    next_id: u32,
}

impl StarRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new star under a fresh id
    pub fn insert(&mut self, display_name: String, x: f64, y: f64) -> ForedeckResult<StarId> {
        if self.by_name.contains_key(&display_name) {
            return Err(ForedeckError::DuplicateStarName { name: display_name });
        }

        let id = StarId(self.next_id);
        self.next_id += 1;

        self.by_name.insert(display_name.clone(), id);
        self.stars.insert(
            id,
            Star {
                id,
                display_name,
                x,
                y,
            },
        );

        Ok(id)
    }

    pub fn get(&self, id: StarId) -> Option<&Star> {
        self.stars.get(&id)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Star> {
        self.by_name.get(name).and_then(|id| self.stars.get(id))
    }

    /// Stars in id order
    pub fn iter(&self) -> impl Iterator<Item = &Star> {
        self.stars.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = StarId> + '_ {
        self.stars.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}
