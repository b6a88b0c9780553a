use std::collections::VecDeque;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// One round of play: the mine layout, what the player has opened so far, and the resulting outcome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    mine_layout: MineLayout,
    cells: Array2<Cell>,
    revealed_count: CellCount,
    outcome: GameOutcome,
    triggered_mine: Option<Coord2>,
}

impl Board {
    pub fn new(mine_layout: MineLayout) -> Self {
        let size = mine_layout.size();
        Self {
            cells: Array2::default((size, size).to_nd_index()),
            mine_layout,
            revealed_count: 0,
            outcome: GameOutcome::InProgress,
            triggered_mine: None,
        }
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    pub fn size(&self) -> Coord {
        self.mine_layout.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.mine_layout.safe_cell_count()
    }

    /// Number of opened cells, including a detonated mine.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.mine_layout.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()])
    }

    pub fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    /// Every opened coordinate in row-major order.
    pub fn revealed_coords(&self) -> Vec<Coord2> {
        iter_coords(self.size())
            .filter(|&coords| self.cells[coords.to_nd_index()].is_revealed())
            .collect()
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn mine_layout(&self) -> &MineLayout {
        &self.mine_layout
    }

    /// Mines that are still covered, in row-major order.
    pub fn hidden_mines(&self) -> Vec<Coord2> {
        self.mine_layout
            .mine_coords()
            .into_iter()
            .filter(|&coords| self.cells[coords.to_nd_index()].is_hidden())
            .collect()
    }

    /// Opens `coords`, cascading through connected zero cells, and advances the game state.
    ///
    /// Selecting an open cell, or any cell once the game is over, returns [`RevealOutcome::AlreadyRevealed`] and
    /// changes nothing. Out of bounds coordinates are an error and also leave the board untouched.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.mine_layout.validate_coords(coords)?;

        if self.is_finished() || self.cells[coords.to_nd_index()].is_revealed() {
            log::trace!("Ignoring reveal at {:?}", coords);
            return Ok(RevealOutcome::AlreadyRevealed);
        }

        let outcome = self.reveal_single_cell(coords);
        let next = self.outcome.after_reveal(
            outcome,
            self.revealed_count,
            self.mine_layout.safe_cell_count(),
        );
        if next != self.outcome {
            log::debug!("Game ended: {:?}", next);
            self.outcome = next;
        }
        Ok(outcome)
    }

    fn reveal_single_cell(&mut self, coords: Coord2) -> RevealOutcome {
        if self.mine_layout[coords] {
            self.cells[coords.to_nd_index()] = Cell::Exploded;
            self.revealed_count += 1;
            self.triggered_mine = Some(coords);
            log::debug!("Hit mine at {:?}", coords);
            return RevealOutcome::MineHit;
        }

        let adjacent_mines = self.open_safe_cell(coords);
        log::debug!("Revealed {:?}, adjacent mines: {}", coords, adjacent_mines);
        if adjacent_mines > 0 {
            return RevealOutcome::SafeNumber(adjacent_mines);
        }

        // Cells are opened before they are queued, so their state doubles as the visited guard and each cell
        // enters the queue at most once.
        let mut to_visit = VecDeque::from([coords]);
        while let Some(visit_coords) = to_visit.pop_front() {
            for pos in self.mine_layout.iter_neighbors(visit_coords) {
                if self.cells[pos.to_nd_index()].is_revealed() || self.mine_layout[pos] {
                    continue;
                }

                let count = self.open_safe_cell(pos);
                log::trace!("Flood opened {:?}, adjacent mines: {}", pos, count);
                if count == 0 {
                    to_visit.push_back(pos);
                }
            }
        }

        RevealOutcome::SafeEmpty
    }

    fn open_safe_cell(&mut self, coords: Coord2) -> u8 {
        let adjacent_mines = self.mine_layout.adjacent_mine_count(coords);
        self.cells[coords.to_nd_index()] = Cell::Revealed(adjacent_mines);
        self.revealed_count += 1;
        adjacent_mines
    }
}
