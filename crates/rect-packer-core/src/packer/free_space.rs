use crate::model::Rect;

/// Free-rectangle bookkeeping for a single bin.
///
/// Free rectangles may overlap each other, but after every commit none is
/// contained in another. The used list is append-only.
#[derive(Debug, Clone)]
pub struct FreeSpaceTracker {
    max_width: u32,
    max_height: u32,
    free: Vec<Rect>,
    used: Vec<Rect>,
}

impl FreeSpaceTracker {
    pub fn new(max_width: u32, max_height: u32) -> Self {
        let mut t = Self {
            max_width,
            max_height,
            free: Vec::new(),
            used: Vec::new(),
        };
        t.reset();
        t
    }

    /// Re-seeds the free list with the whole bin and forgets all placements.
    pub fn reset(&mut self) {
        self.free.clear();
        self.free.push(Rect::new(0, 0, self.max_width, self.max_height));
        self.used.clear();
    }

    pub fn max_width(&self) -> u32 {
        self.max_width
    }
    pub fn max_height(&self) -> u32 {
        self.max_height
    }
    /// Plain field write; the free list is only rebuilt by `reset`.
    pub fn set_max_width(&mut self, w: u32) {
        self.max_width = w;
    }
    /// Plain field write; the free list is only rebuilt by `reset`.
    pub fn set_max_height(&mut self, h: u32) {
        self.max_height = h;
    }

    pub fn free_rects(&self) -> &[Rect] {
        &self.free
    }
    pub fn used_rects(&self) -> &[Rect] {
        &self.used
    }

    /// Carves `node` out of the free list, prunes, and records it as used.
    ///
    /// Free rectangles that do not intersect `node` keep their relative order;
    /// fragments of split rectangles are appended after them.
    pub fn commit_placement(&mut self, node: Rect) {
        let mut kept: Vec<Rect> = Vec::with_capacity(self.free.len());
        let mut fragments: Vec<Rect> = Vec::new();
        for fr in self.free.iter() {
            if fr.intersects(&node) {
                split_free_node(fr, &node, &mut fragments);
            } else {
                kept.push(*fr);
            }
        }
        kept.extend(fragments);
        self.free = kept;
        self.prune_redundant();
        self.used.push(node);
    }

    /// Removes every free rectangle contained in another one.
    ///
    /// Of two identical rectangles exactly one survives. Running this twice
    /// leaves the list unchanged.
    pub fn prune_redundant(&mut self) {
        let n = self.free.len();
        let mut removed = vec![false; n];
        for i in 0..n {
            if removed[i] {
                continue;
            }
            let a = self.free[i];
            for j in (i + 1)..n {
                if removed[j] {
                    continue;
                }
                let b = self.free[j];
                if b.contains(&a) {
                    removed[i] = true;
                    break;
                }
                if a.contains(&b) {
                    removed[j] = true;
                }
            }
        }
        let mut flags = removed.into_iter();
        self.free.retain(|_| !flags.next().unwrap_or(false));
    }

    /// Sum of used area over bin area.
    pub fn used_area(&self) -> u64 {
        self.used.iter().map(Rect::area).sum()
    }

    pub fn occupancy(&self) -> f32 {
        let bin = (self.max_width as u64) * (self.max_height as u64);
        if bin == 0 {
            return 0.0;
        }
        (self.used_area() as f64 / bin as f64) as f32
    }
}

/// Pushes the non-empty parts of `fr` that lie above, below, left and right of
/// `node`. Caller guarantees the two intersect.
fn split_free_node(fr: &Rect, node: &Rect, out: &mut Vec<Rect>) {
    let fr_x2 = fr.right_ex();
    let fr_y2 = fr.bottom_ex();
    let n_x2 = node.right_ex();
    let n_y2 = node.bottom_ex();

    if node.x < fr_x2 && n_x2 > fr.x {
        // Top
        if node.y > fr.y && node.y < fr_y2 {
            out.push(Rect::new(fr.x, fr.y, fr.w, node.y - fr.y));
        }
        // Bottom
        if n_y2 < fr_y2 {
            out.push(Rect::new(fr.x, n_y2, fr.w, fr_y2 - n_y2));
        }
    }
    if node.y < fr_y2 && n_y2 > fr.y {
        // Left
        if node.x > fr.x && node.x < fr_x2 {
            out.push(Rect::new(fr.x, fr.y, node.x - fr.x, fr.h));
        }
        // Right
        if n_x2 < fr_x2 {
            out.push(Rect::new(n_x2, fr.y, fr_x2 - n_x2, fr.h));
        }
    }
}
