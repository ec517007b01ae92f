use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in bin-local pixels. `x,y` is top-left; `w,h` are sizes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
    /// Exclusive right edge (`x + w`).
    pub fn right_ex(&self) -> u32 {
        self.x + self.w
    }
    /// Exclusive bottom edge (`y + h`).
    pub fn bottom_ex(&self) -> u32 {
        self.y + self.h
    }
    pub fn area(&self) -> u64 {
        (self.w as u64) * (self.h as u64)
    }
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
    /// Returns true if `r` lies fully inside `self`; shared edges count as inside.
    pub fn contains(&self, r: &Rect) -> bool {
        r.x >= self.x
            && r.y >= self.y
            && r.right_ex() <= self.right_ex()
            && r.bottom_ex() <= self.bottom_ex()
    }
    /// Separating-axis test on the open interiors: touching edges do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.x >= other.right_ex()
            || other.x >= self.right_ex()
            || self.y >= other.bottom_ex()
            || other.y >= self.bottom_ex())
    }
}

/// Length of the common part of `[a0, a1)` and `[b0, b1)`, or 0 when disjoint.
pub fn overlap_1d(a0: u32, a1: u32, b0: u32, b1: u32) -> u32 {
    let start = a0.max(b0);
    let end = a1.min(b1);
    end.saturating_sub(start)
}

/// Statistics about how well a bin is packed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PackStats {
    /// Bin area (`max_width * max_height`).
    pub bin_area: u64,
    /// Sum of used rectangle areas.
    pub used_area: u64,
    /// `used_area / bin_area` (0.0 to 1.0).
    pub occupancy: f64,
    /// Number of committed placements.
    pub num_used: usize,
    /// Number of placements stored rotated by 90°.
    pub num_rotated: usize,
    /// Current size of the free-rectangle list.
    pub num_free: usize,
}

impl PackStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Placed: {}, Rotated: {}, Occupancy: {:.2}%, Bin Area: {} px², Used Area: {} px², Free Rects: {}",
            self.num_used,
            self.num_rotated,
            self.occupancy * 100.0,
            self.bin_area,
            self.used_area,
            self.num_free,
        )
    }

    /// Returns wasted space in pixels.
    pub fn wasted_area(&self) -> u64 {
        self.bin_area.saturating_sub(self.used_area)
    }

    /// Returns wasted space as a percentage (0.0 to 100.0).
    pub fn waste_percentage(&self) -> f64 {
        if self.bin_area > 0 {
            (self.wasted_area() as f64 / self.bin_area as f64) * 100.0
        } else {
            0.0
        }
    }
}
