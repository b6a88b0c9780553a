use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only view of a session handed to a presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: Coord,
    pub cells: Array2<Cell>,
    pub revealed_count: CellCount,
    pub outcome: GameOutcome,
    pub score: u32,
    pub triggered_mine: Option<Coord2>,
    /// Mine positions, only present when the session highlights mines.
    pub mines: Option<Vec<Coord2>>,
}

impl BoardSnapshot {
    pub fn new(board: &Board, score: u32, mines: Option<Vec<Coord2>>) -> Self {
        Self {
            size: board.size(),
            cells: board.cells().clone(),
            revealed_count: board.revealed_count(),
            outcome: board.outcome(),
            score,
            triggered_mine: board.triggered_mine(),
            mines,
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    /// Whether `coords` should be drawn as a mine: the detonated one, or any mine while highlighting.
    pub fn shows_mine_at(&self, coords: Coord2) -> bool {
        self.cell_at(coords) == Some(Cell::Exploded)
            || self
                .mines
                .as_ref()
                .is_some_and(|mines| mines.contains(&coords))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(source: &str) -> serde_json::Result<Self> {
        serde_json::from_str(source)
    }
}
