use rand::prelude::*;

use super::*;

/// Places a mine on every cell independently, with a probability of `difficulty_tenths / 10`.
///
/// The mine count is not fixed: an empty board or a board made only of mines are both possible draws. Cells are
/// visited row-major with exactly one draw each, so the same seed always produces the same layout.
#[derive(Clone, Debug, PartialEq)]
pub struct ProbabilityGenerator {
    seed: u64,
    difficulty_tenths: u8,
}

impl ProbabilityGenerator {
    pub fn new(seed: u64, difficulty_tenths: u8) -> Self {
        Self {
            seed,
            difficulty_tenths,
        }
    }
}

impl MineLayoutGenerator for ProbabilityGenerator {
    fn generate(self, size: Coord) -> MineLayout {
        let mut layout = MineLayout::empty(size);
        if self.difficulty_tenths == 0 {
            return layout;
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        for coords in iter_coords(size) {
            let draw: u8 = rng.random_range(0..10);
            if draw < self.difficulty_tenths {
                layout.place_mine(coords);
            }
        }

        log::debug!(
            "Generated {}x{} layout with {} mines, seed: {}",
            size,
            size,
            layout.mine_count(),
            self.seed
        );
        if size > 0 && layout.mine_count() == 0 {
            log::warn!("Generated layout has no mines");
        } else if size > 0 && layout.safe_cell_count() == 0 {
            log::warn!("Generated layout is all mines");
        }
        layout
    }
}
