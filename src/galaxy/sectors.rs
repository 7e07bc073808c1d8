use super::registry::StarId;
use crate::game_logic::errors::{ForedeckError, ForedeckResult};
use std::collections::HashMap;

/// Uniform spatial partition of the galaxy plane.
///
/// Sectors are at least `max_star_conn_dist` on a side, so every star closer
/// than that to a point lives in the 3×3 block around the point's sector.
/// Only occupied sectors are stored, so tiny sectors on a large plane cost
/// nothing until stars land in them.
#[derive(Debug, Clone)]
pub struct SectorGrid {
    width: f64,
    height: f64,
    sectors_wide: usize,
    sectors_high: usize,
    sector_width: f64,
    sector_height: f64,
    cells: HashMap<(usize, usize), Vec<StarId>>,
}

impl SectorGrid {
    pub fn new(width: f64, height: f64, max_star_conn_dist: f64) -> Self {
        let sectors_wide = (width / max_star_conn_dist).floor() as usize;
        let sectors_high = (height / max_star_conn_dist).floor() as usize;

        let (sector_width, sector_height) = if sectors_wide > 0 && sectors_high > 0 {
            (width / sectors_wide as f64, height / sectors_high as f64)
        } else {
            (0.0, 0.0)
        };

        Self {
            width,
            height,
            sectors_wide,
            sectors_high,
            sector_width,
            sector_height,
            cells: HashMap::new(),
        }
    }

    /// False when the plane is narrower than one sector and can hold no star
    pub fn has_cells(&self) -> bool {
        self.sectors_wide > 0 && self.sectors_high > 0
    }

    /// Sector counts as (wide, high)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.sectors_wide, self.sectors_high)
    }

    /// Sector size as (width, height)
    pub fn sector_size(&self) -> (f64, f64) {
        (self.sector_width, self.sector_height)
    }

    /// Sector containing a point, or None if the point is off the plane
    pub fn sector_of(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        if !self.has_cells() || !(0.0..self.width).contains(&x) || !(0.0..self.height).contains(&y)
        {
            return None;
        }

        // The quotient can round up to the count for points just inside the far edge
        let sx = ((x / self.sector_width) as usize).min(self.sectors_wide - 1);
        let sy = ((y / self.sector_height) as usize).min(self.sectors_high - 1);
        Some((sx, sy))
    }

    pub fn insert(&mut self, id: StarId, x: f64, y: f64) -> ForedeckResult<(usize, usize)> {
        let (sx, sy) = self
            .sector_of(x, y)
            .ok_or(ForedeckError::OutOfBounds { x, y })?;
        self.cells.entry((sx, sy)).or_default().push(id);
        Ok((sx, sy))
    }

    /// Stars in the 3×3 sector block around the point, clamped at the grid edges
    pub fn neighbors(&self, x: f64, y: f64) -> Vec<StarId> {
        let Some((sx, sy)) = self.sector_of(x, y) else {
            return Vec::new();
        };

        let min_x = sx.saturating_sub(1);
        let max_x = (sx + 1).min(self.sectors_wide - 1);
        let min_y = sy.saturating_sub(1);
        let max_y = (sy + 1).min(self.sectors_high - 1);

        let mut found = Vec::new();
        for cell_y in min_y..=max_y {
            for cell_x in min_x..=max_x {
                if let Some(ids) = self.cells.get(&(cell_x, cell_y)) {
                    found.extend_from_slice(ids);
                }
            }
        }
        found
    }

    pub fn cell(&self, sx: usize, sy: usize) -> Option<&[StarId]> {
        if sx >= self.sectors_wide || sy >= self.sectors_high {
            return None;
        }
        Some(self.cells.get(&(sx, sy)).map(Vec::as_slice).unwrap_or(&[]))
    }

    /// Total ids stored across all cells
    pub fn len(&self) -> usize {
        self.cells.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
