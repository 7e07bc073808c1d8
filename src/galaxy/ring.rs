use super::growth::GalaxyGenerator;
use super::random::RandomSource;
use super::registry::StarId;
use crate::game_logic::errors::{ForedeckError, ForedeckResult};
use std::f64::consts::TAU;

/// Annulus around a source star to grow new stars in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSample {
    pub min_dist: f64,
    pub max_dist: f64,
    pub max_tries: u32,
    pub max_accept: usize,
}

impl<R: RandomSource + ?Sized> GalaxyGenerator<'_, R> {
    /// Try to grow up to `max_accept` stars in a ring around `source`.
    ///
    /// Radii come from the inverse CDF of the annulus area, so candidates are
    /// uniform by area rather than bunched toward the inner edge. Candidates
    /// off the plane use up a try without reaching the validator. An empty
    /// result means there was no room near this star.
    pub fn sample_ring(&mut self, source: StarId, ring: RingSample) -> ForedeckResult<Vec<StarId>> {
        let (center_x, center_y) = self
            .stars
            .get(source)
            .map(|star| (star.x, star.y))
            .ok_or(ForedeckError::UnknownStar { id: source })?;

        let mut accepted = Vec::new();
        if ring.max_accept == 0 {
            return Ok(accepted);
        }

        let min_sq = ring.min_dist * ring.min_dist;
        let max_sq = ring.max_dist * ring.max_dist;

        for _ in 0..ring.max_tries {
            let theta = self.rng.next_unit() * TAU;
            let dist = (self.rng.next_unit() * (max_sq - min_sq) + min_sq).sqrt();
            let x = center_x + dist * theta.sin();
            let y = center_y + dist * theta.cos();

            if !self.in_bounds(x, y) {
                continue;
            }

            if let Some(id) = self.try_place(x, y, None)? {
                accepted.push(id);
                if accepted.len() >= ring.max_accept {
                    break;
                }
            }
        }

        Ok(accepted)
    }
}
