use super::random::RandomSource;
use super::registry::{StarId, StarRegistry};
use super::ring::RingSample;
use super::sectors::SectorGrid;
use super::Galaxy;
use crate::game_logic::errors::{ForedeckError, ForedeckResult};
use crate::game_logic::names::NamePool;
use crate::resources::{GalaxyConfig, GalaxyShape, GrowthSettings};
use bevy::log::{debug, info, warn};
use std::collections::VecDeque;

/// Where the generator is in its run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthPhase {
    Bootstrap,
    Expansion,
    Finished,
}

/// Frontier-driven galaxy growth.
///
/// A few stars are dropped blindly onto the plane, then every placed star in
/// turn becomes the center of a ring sample. Stars accepted by a ring go to
/// the back of the frontier, so the galaxy grows breadth-first from its seeds.
/// Each star is expanded at most once and each expansion makes at most
/// `ring_tries` placement attempts, which bounds the whole run.
pub struct GalaxyGenerator<'r, R: RandomSource + ?Sized> {
    pub(super) width: u32,
    pub(super) height: u32,
    pub(super) shape: GalaxyShape,
    pub(super) min_stars: u32,
    pub(super) max_stars: u32,
    pub(super) growth: GrowthSettings,
    pub(super) names: NamePool,
    pub(super) rng: &'r mut R,
    pub(super) sectors: SectorGrid,
    pub(super) stars: StarRegistry,
    pub(super) validator_calls: usize,
    frontier: VecDeque<StarId>,
    phase: GrowthPhase,
}

impl<'r, R: RandomSource + ?Sized> GalaxyGenerator<'r, R> {
    pub fn new(config: &GalaxyConfig, names: NamePool, rng: &'r mut R) -> ForedeckResult<Self> {
        config.check()?;

        if config.max_stars as usize > names.len() {
            return Err(ForedeckError::NamesExhausted {
                requested: config.max_stars as usize,
                available: names.len(),
            });
        }

        let sectors = SectorGrid::new(
            config.width as f64,
            config.height as f64,
            config.shape.max_star_conn_dist,
        );

        Ok(Self {
            width: config.width,
            height: config.height,
            shape: config.shape,
            min_stars: config.min_stars,
            max_stars: config.max_stars,
            growth: config.growth,
            names,
            rng,
            sectors,
            stars: StarRegistry::new(),
            validator_calls: 0,
            frontier: VecDeque::new(),
            phase: GrowthPhase::Bootstrap,
        })
    }

    /// Seed the frontier with blind placements across the whole plane
    pub fn bootstrap(&mut self) -> ForedeckResult<usize> {
        if self.phase != GrowthPhase::Bootstrap {
            return Ok(0);
        }

        if self.max_stars == 0 {
            self.phase = GrowthPhase::Finished;
            return Ok(0);
        }

        if !self.sectors.has_cells() {
            return Err(ForedeckError::GenerationImpossible {
                reason: format!(
                    "a {}x{} plane is smaller than one sector of side {}",
                    self.width, self.height, self.shape.max_star_conn_dist
                ),
            });
        }

        let attempts = self.growth.bootstrap_attempts.get();
        for _ in 0..attempts {
            if self.total_stars() >= self.max_stars as usize {
                break;
            }

            let x = self.rng.next_unit() * self.width as f64;
            let y = self.rng.next_unit() * self.height as f64;
            if !self.in_bounds(x, y) {
                continue;
            }

            if let Some(id) = self.try_place(x, y, None)? {
                self.frontier.push_back(id);
            }
        }

        if self.frontier.is_empty() {
            return Err(ForedeckError::GenerationImpossible {
                reason: format!("no star could be placed in {attempts} bootstrap attempts"),
            });
        }

        info!(
            "Bootstrapped galaxy with {} seed stars from {} attempts",
            self.frontier.len(),
            attempts
        );
        self.phase = GrowthPhase::Expansion;
        Ok(self.frontier.len())
    }

    /// Advance by one unit of work. Returns false once generation is finished.
    pub fn step(&mut self) -> ForedeckResult<bool> {
        match self.phase {
            GrowthPhase::Bootstrap => {
                self.bootstrap()?;
                Ok(self.phase != GrowthPhase::Finished)
            }
            GrowthPhase::Expansion => {
                let remaining = (self.max_stars as usize).saturating_sub(self.total_stars());
                let Some(source) = self.frontier.pop_front().filter(|_| remaining > 0) else {
                    self.phase = GrowthPhase::Finished;
                    return Ok(false);
                };

                let ring = RingSample {
                    min_dist: self.shape.min_star_dist + self.growth.ring_epsilon.get(),
                    max_dist: self.shape.max_star_conn_dist,
                    max_tries: self.growth.ring_tries.get(),
                    max_accept: remaining.min(self.growth.ring_accept_cap.get() as usize),
                };
                let accepted = self.sample_ring(source, ring)?;
                debug!(
                    "Expanded star {} into {} new stars ({} waiting)",
                    source,
                    accepted.len(),
                    self.frontier.len()
                );
                self.frontier.extend(accepted);
                Ok(true)
            }
            GrowthPhase::Finished => Ok(false),
        }
    }

    /// Run to completion and hand back the finished galaxy
    pub fn run(mut self) -> ForedeckResult<Galaxy> {
        while self.step()? {}
        Ok(self.finish())
    }

    /// Freeze the current state into a read-only galaxy
    pub fn finish(self) -> Galaxy {
        let total = self.total_stars();
        if total < self.min_stars as usize {
            warn!(
                "Galaxy ran out of room with {} stars, below the minimum of {}",
                total, self.min_stars
            );
        }
        info!(
            "Generated galaxy with {} stars after {} placement attempts",
            total, self.validator_calls
        );

        Galaxy {
            width: self.width,
            height: self.height,
            shape: self.shape,
            min_stars: self.min_stars,
            max_stars: self.max_stars,
            sectors: self.sectors,
            stars: self.stars,
        }
    }

    pub fn phase(&self) -> GrowthPhase {
        self.phase
    }

    /// Stars waiting to be expanded, front first
    pub fn frontier(&self) -> &VecDeque<StarId> {
        &self.frontier
    }

    pub fn stars(&self) -> &StarRegistry {
        &self.stars
    }

    pub fn sectors(&self) -> &SectorGrid {
        &self.sectors
    }

    pub fn total_stars(&self) -> usize {
        self.stars.len()
    }

    /// Placement attempts made so far
    pub fn validator_calls(&self) -> usize {
        self.validator_calls
    }

    pub fn names_remaining(&self) -> usize {
        self.names.len()
    }

    pub(super) fn in_bounds(&self, x: f64, y: f64) -> bool {
        (0.0..self.width as f64).contains(&x) && (0.0..self.height as f64).contains(&y)
    }
}
