use crate::*;
pub use probability::*;

mod probability;

/// Source of mine layouts for a square board of the given side.
pub trait MineLayoutGenerator {
    fn generate(self, size: Coord) -> MineLayout;
}
