use std::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use snapshot::*;
pub use state::*;
pub use types::*;

mod cell;
mod config;
mod engine;
mod error;
mod generator;
mod session;
mod snapshot;
mod state;
mod types;

/// Mine positions of a square board, fixed once generated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    size: Coord,
    mine_count: CellCount,
}

impl MineLayout {
    /// Layout of the given side without any mines.
    pub fn empty(size: Coord) -> Self {
        Self {
            mine_mask: Array2::default((size, size).to_nd_index()),
            size,
            mine_count: 0,
        }
    }

    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mut layout = Self::empty(size);
        for &coords in mine_coords {
            let coords = layout.validate_coords(coords)?;
            layout.place_mine(coords);
        }
        Ok(layout)
    }

    /// Sets a mine at `coords`, which must be in bounds. Placing twice is a no-op.
    pub(crate) fn place_mine(&mut self, coords: Coord2) {
        let slot = &mut self.mine_mask[coords.to_nd_index()];
        if !*slot {
            *slot = true;
            self.mine_count += 1;
        }
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.size && coords.1 < self.size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoordinate(coords))
        }
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    pub fn total_cells(&self) -> CellCount {
        square(self.size)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Mines among the in-bounds neighbors of `coords`.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        let mut count = 0;
        for pos in self.iter_neighbors(coords) {
            if self[pos] {
                count += 1;
            }
        }
        count
    }

    /// Every mine position in row-major order.
    pub fn mine_coords(&self) -> Vec<Coord2> {
        iter_coords(self.size)
            .filter(|&coords| self[coords])
            .collect()
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.mine_mask.iter_neighbors(coords)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

/// Result of selecting a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// Safe cell with this many adjacent mines, no cascade.
    SafeNumber(u8),
    /// Safe cell without adjacent mines, its zero region was opened.
    SafeEmpty,
    MineHit,
    /// The cell was already open or the game is over, nothing changed.
    AlreadyRevealed,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::AlreadyRevealed)
    }

    pub const fn is_safe(self) -> bool {
        matches!(self, Self::SafeNumber(_) | Self::SafeEmpty)
    }
}
