//! MaxRects rectangle bin packing for runtime texture atlases.
//!
//! - Heuristics: best short side, best long side, best area, bottom-left, contact point
//! - Optional 90° rotation per placement
//! - Single insertion and global best-first batch insertion
//! - Rejections are `None`; only invalid construction and unknown heuristic names are errors
//!
//! Quick example:
//! ```
//! use rect_packer_core::prelude::*;
//! # fn main() -> rect_packer_core::Result<()> {
//! let mut bin = MaxRectsBinPack::new(256, 256, true)?;
//! let slot = bin.insert(64, 32, Heuristic::BestShortSideFit).expect("fits");
//! assert_eq!((slot.x, slot.y), (0, 0));
//! let placed = bin.insert_batch(&[(32, 32), (300, 8)], "baf".parse()?);
//! assert!(placed[0].is_some() && placed[1].is_none());
//! println!("{}", bin.stats().summary());
//! # Ok(()) }
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod packer;

pub use config::*;
pub use error::*;
pub use model::*;
pub use packer::*;

/// Convenience prelude for common types.
/// Importing `rect_packer_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{Heuristic, PackerConfig, PackerConfigBuilder};
    pub use crate::error::{PackerError, Result};
    pub use crate::model::{PackStats, Rect};
    pub use crate::packer::Packer;
    pub use crate::packer::free_space::FreeSpaceTracker;
    pub use crate::packer::maxrects::MaxRectsBinPack;
}
