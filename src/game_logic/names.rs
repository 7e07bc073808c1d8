use crate::galaxy::RandomSource;
use crate::game_logic::errors::{ForedeckError, ForedeckResult};
use bevy::prelude::Resource;
use std::collections::HashSet;
use std::path::Path;

/// Proper star names, one per line. Blank lines and `#` comments are skipped.
const BUILTIN_STAR_NAMES: &str = include_str!("../../assets/star_names.txt");

/// Unique star names handed out without replacement
#[derive(Resource, Debug, Clone, Default)]
pub struct NamePool {
    available: Vec<String>,
    capacity: usize,
}

impl NamePool {
    /// Pool loaded from the bundled star name list
    pub fn builtin() -> Self {
        Self::parse(BUILTIN_STAR_NAMES)
    }

    /// Build a pool from a name list file
    pub fn from_file<P: AsRef<Path>>(path: P) -> ForedeckResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::parse(&contents))
    }

    /// Parse a name list. Duplicates are dropped, keeping the first occurrence.
    pub fn parse(contents: &str) -> Self {
        Self::from_names(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let available: Vec<String> = names
            .into_iter()
            .map(Into::into)
            .filter(|name| seen.insert(name.clone()))
            .collect();
        let capacity = available.len();

        Self {
            available,
            capacity,
        }
    }

    /// Remove and return a uniformly chosen remaining name
    pub fn draw<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> ForedeckResult<String> {
        let index = self.pick(rng)?;
        Ok(self.take(index))
    }

    /// Choose a remaining name without removing it. Pair with `take` once the
    /// name is actually used.
    pub fn pick<R: RandomSource + ?Sized>(&self, rng: &mut R) -> ForedeckResult<usize> {
        if self.available.is_empty() {
            return Err(ForedeckError::NamesExhausted {
                requested: 1,
                available: 0,
            });
        }

        Ok(rng.next_index(self.available.len()))
    }

    /// Remove the name at an index returned by `pick`
    pub fn take(&mut self, index: usize) -> String {
        self.available.swap_remove(index)
    }

    /// Take a specific name out of the pool. Returns false if it was not available.
    pub fn claim(&mut self, name: &str) -> bool {
        match self.available.iter().position(|n| n == name) {
            Some(index) => {
                self.available.swap_remove(index);
                true
            }
            None => false,
        }
    }

    /// Names still available
    pub fn len(&self) -> usize {
        self.available.len()
    }

    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }

    /// Pool size at load time
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
