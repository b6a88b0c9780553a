use serde::{Deserialize, Serialize};

/// Player-visible state of a single cell.
///
/// A cell only ever moves away from `Hidden`; `Revealed` carries the adjacency count computed when it was
/// opened, `Exploded` is a revealed mine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Hidden,
    Revealed(u8),
    Exploded,
}

impl Cell {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_revealed(self) -> bool {
        !self.is_hidden()
    }

    /// Adjacency count for revealed safe cells, `None` otherwise.
    pub const fn adjacent_mines(self) -> Option<u8> {
        match self {
            Self::Revealed(count) => Some(count),
            Self::Hidden | Self::Exploded => None,
        }
    }
}
