use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
///
/// Both end states are final, only a new board starts over. Every board starts in progress, even one without
/// safe cells: the first selection on it hits a mine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameOutcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// Next state after a reveal, given how many cells are now open and how many safe cells the board has.
    pub const fn after_reveal(
        self,
        outcome: RevealOutcome,
        revealed: CellCount,
        safe_cells: CellCount,
    ) -> Self {
        if self.is_finished() || !outcome.has_update() {
            return self;
        }

        match outcome {
            RevealOutcome::MineHit => Self::Lost,
            _ if revealed == safe_cells => Self::Won,
            _ => Self::InProgress,
        }
    }
}
