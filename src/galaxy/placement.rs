use super::growth::GalaxyGenerator;
use super::random::RandomSource;
use super::registry::StarId;
use crate::game_logic::errors::{ForedeckError, ForedeckResult};

enum NameChoice {
    Supplied(String),
    /// Index into the name pool, taken only on acceptance
    Pooled(usize),
}

impl<R: RandomSource + ?Sized> GalaxyGenerator<'_, R> {
    /// Place a star at `(x, y)` unless it would crowd an existing neighbor.
    ///
    /// Every star enters the galaxy through here. A rejected point is
    /// `Ok(None)`. Without a supplied name, a pool name is picked before the
    /// neighbor query and only removed from the pool if the point is accepted.
    pub fn try_place(
        &mut self,
        x: f64,
        y: f64,
        name: Option<String>,
    ) -> ForedeckResult<Option<StarId>> {
        self.validator_calls += 1;

        if self.sectors.sector_of(x, y).is_none() {
            return Err(ForedeckError::OutOfBounds { x, y });
        }

        let choice = match name {
            Some(name) => NameChoice::Supplied(name),
            None => NameChoice::Pooled(self.names.pick(&mut *self.rng)?),
        };

        let min_dist = self.shape.min_star_dist;
        let crowded = self
            .sectors
            .neighbors(x, y)
            .into_iter()
            .filter_map(|id| self.stars.get(id))
            .any(|star| star.distance_to(x, y) < min_dist);
        if crowded {
            return Ok(None);
        }

        let display_name = match choice {
            NameChoice::Supplied(name) => {
                if self.stars.contains_name(&name) {
                    return Err(ForedeckError::DuplicateStarName { name });
                }
                self.names.claim(&name);
                name
            }
            NameChoice::Pooled(index) => self.names.take(index),
        };

        let id = self.stars.insert(display_name, x, y)?;
        self.sectors.insert(id, x, y)?;
        Ok(Some(id))
    }
}
