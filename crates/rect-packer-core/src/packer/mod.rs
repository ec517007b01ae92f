use crate::model::Rect;

pub mod free_space;
pub mod maxrects;

/// A packer places rectangles into a single bin.
///
/// Implementations must never produce overlapping placements.
/// `pack` returns `None` if the rectangle cannot be placed in the bin as it is now.
pub trait Packer {
    fn can_pack(&self, w: u32, h: u32) -> bool;
    fn pack(&mut self, w: u32, h: u32) -> Option<Rect>;
}
