use super::Packer;
use super::free_space::FreeSpaceTracker;
use crate::config::{Heuristic, PackerConfig};
use crate::error::Result;
use crate::model::{PackStats, Rect, overlap_1d};
use tracing::{debug, instrument, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A scored candidate position. Lower `(score1, score2)` wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    rect: Rect,
    rotated: bool,
    score1: i64,
    score2: i64,
}

impl Candidate {
    fn beats(&self, other: &Candidate) -> bool {
        (self.score1, self.score2) < (other.score1, other.score2)
    }
}

/// MaxRects bin packer over a fixed `max_width x max_height` bin.
///
/// Placements are anchored at the top-left corner of a free rectangle and
/// chosen by one of the five [`Heuristic`]s. Rejections are `None`, never
/// errors, and leave the packer untouched.
#[derive(Debug, Clone)]
pub struct MaxRectsBinPack {
    space: FreeSpaceTracker,
    allow_rotation: bool,
    heuristic: Heuristic,
    parallel: bool,
    num_rotated: usize,
}

impl MaxRectsBinPack {
    /// Creates an empty bin. Fails with `InvalidDimensions` if either side is zero.
    pub fn new(max_width: u32, max_height: u32, allow_rotation: bool) -> Result<Self> {
        Self::from_config(PackerConfig {
            max_width,
            max_height,
            allow_rotation,
            ..Default::default()
        })
    }

    #[instrument(skip_all, fields(w = cfg.max_width, h = cfg.max_height))]
    pub fn from_config(cfg: PackerConfig) -> Result<Self> {
        cfg.validate()?;
        debug!(
            allow_rotation = cfg.allow_rotation,
            heuristic = %cfg.heuristic,
            "new maxrects bin"
        );
        Ok(Self {
            space: FreeSpaceTracker::new(cfg.max_width, cfg.max_height),
            allow_rotation: cfg.allow_rotation,
            heuristic: cfg.heuristic,
            parallel: cfg.parallel,
            num_rotated: 0,
        })
    }

    pub fn max_width(&self) -> u32 {
        self.space.max_width()
    }
    pub fn max_height(&self) -> u32 {
        self.space.max_height()
    }
    /// Changes the bin width used for border contact scoring. Free space is
    /// not recomputed until [`reset`](Self::reset).
    pub fn set_max_width(&mut self, w: u32) {
        self.space.set_max_width(w);
    }
    /// Changes the bin height used for border contact scoring. Free space is
    /// not recomputed until [`reset`](Self::reset).
    pub fn set_max_height(&mut self, h: u32) {
        self.space.set_max_height(h);
    }
    pub fn allow_rotation(&self) -> bool {
        self.allow_rotation
    }
    pub fn set_allow_rotation(&mut self, v: bool) {
        self.allow_rotation = v;
    }
    /// Default heuristic used by the [`Packer`] impl.
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }
    pub fn set_heuristic(&mut self, h: Heuristic) {
        self.heuristic = h;
    }
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Empties the bin, re-seeding free space from the current dimensions.
    pub fn reset(&mut self) {
        self.space.reset();
        self.num_rotated = 0;
    }

    pub fn free_rects(&self) -> &[Rect] {
        self.space.free_rects()
    }
    pub fn used_rects(&self) -> &[Rect] {
        self.space.used_rects()
    }
    pub fn free_list_len(&self) -> usize {
        self.space.free_rects().len()
    }

    pub fn occupancy(&self) -> f32 {
        self.space.occupancy()
    }

    pub fn stats(&self) -> PackStats {
        let bin_area = (self.max_width() as u64) * (self.max_height() as u64);
        let used_area = self.space.used_area();
        PackStats {
            bin_area,
            used_area,
            occupancy: if bin_area > 0 {
                used_area as f64 / bin_area as f64
            } else {
                0.0
            },
            num_used: self.used_rects().len(),
            num_rotated: self.num_rotated,
            num_free: self.free_list_len(),
        }
    }

    /// Places a `width x height` block and returns where it went.
    ///
    /// The returned rect has `w == height` and `h == width` when the block was
    /// rotated. Zero-sized requests never place.
    pub fn insert(&mut self, width: u32, height: u32, heuristic: Heuristic) -> Option<Rect> {
        if width == 0 || height == 0 {
            debug!(width, height, "zero-sized request rejected");
            return None;
        }
        let Some(cand) = self.find_position(width, height, heuristic) else {
            debug!(width, height, %heuristic, "no free rectangle fits");
            return None;
        };
        self.commit(cand);
        Some(cand.rect)
    }

    /// Returns true if `insert` with the same arguments would place.
    pub fn can_insert(&self, width: u32, height: u32, heuristic: Heuristic) -> bool {
        width > 0 && height > 0 && self.find_position(width, height, heuristic).is_some()
    }

    /// Global best-first insertion.
    ///
    /// Every round scores all still-unplaced requests against the current free
    /// list and commits only the single best one (ties go to the lower index).
    /// The output is parallel to `requests`; `None` marks requests that never fit.
    #[instrument(skip_all, fields(requests = requests.len(), heuristic = %heuristic))]
    pub fn insert_batch(
        &mut self,
        requests: &[(u32, u32)],
        heuristic: Heuristic,
    ) -> Vec<Option<Rect>> {
        let mut out: Vec<Option<Rect>> = vec![None; requests.len()];
        let mut remaining: Vec<usize> = (0..requests.len())
            .filter(|&i| requests[i].0 > 0 && requests[i].1 > 0)
            .collect();
        let mut placed = 0usize;

        while !remaining.is_empty() {
            let Some((slot, cand)) = self.best_of(&remaining, requests, heuristic) else {
                break;
            };
            let idx = remaining.remove(slot);
            self.commit(cand);
            out[idx] = Some(cand.rect);
            placed += 1;
        }

        debug!(
            placed,
            rejected = requests.len() - placed,
            occupancy = self.occupancy(),
            "batch finished"
        );
        out
    }

    fn best_of(
        &self,
        remaining: &[usize],
        requests: &[(u32, u32)],
        heuristic: Heuristic,
    ) -> Option<(usize, Candidate)> {
        #[cfg(feature = "parallel")]
        {
            if self.parallel {
                return remaining
                    .par_iter()
                    .enumerate()
                    .filter_map(|(slot, &i)| {
                        let (w, h) = requests[i];
                        self.find_position(w, h, heuristic).map(|c| (slot, c))
                    })
                    .min_by_key(|(slot, c)| (c.score1, c.score2, *slot));
            }
        }

        let mut best: Option<(usize, Candidate)> = None;
        for (slot, &i) in remaining.iter().enumerate() {
            let (w, h) = requests[i];
            let Some(c) = self.find_position(w, h, heuristic) else {
                continue;
            };
            if best.is_none_or(|(_, b)| c.beats(&b)) {
                best = Some((slot, c));
            }
        }
        best
    }

    fn commit(&mut self, cand: Candidate) {
        self.space.commit_placement(cand.rect);
        if cand.rotated {
            self.num_rotated += 1;
        }
        trace!(
            x = cand.rect.x,
            y = cand.rect.y,
            w = cand.rect.w,
            h = cand.rect.h,
            rotated = cand.rotated,
            free = self.free_list_len(),
            "placed"
        );
    }

    fn find_position(&self, w: u32, h: u32, heuristic: Heuristic) -> Option<Candidate> {
        let mut best: Option<Candidate> = None;
        for fr in self.space.free_rects() {
            // upright
            if fr.w >= w && fr.h >= h {
                let (score1, score2) = self.score(heuristic, fr, w, h);
                let c = Candidate {
                    rect: Rect::new(fr.x, fr.y, w, h),
                    rotated: false,
                    score1,
                    score2,
                };
                if best.is_none_or(|b| c.beats(&b)) {
                    best = Some(c);
                }
            }
            // rotated
            if self.allow_rotation && fr.w >= h && fr.h >= w {
                let (score1, score2) = self.score(heuristic, fr, h, w);
                let c = Candidate {
                    rect: Rect::new(fr.x, fr.y, h, w),
                    rotated: true,
                    score1,
                    score2,
                };
                if best.is_none_or(|b| c.beats(&b)) {
                    best = Some(c);
                }
            }
        }
        best
    }

    /// Scores placing a `w x h` block (already oriented) at the top-left of `fr`.
    fn score(&self, heuristic: Heuristic, fr: &Rect, w: u32, h: u32) -> (i64, i64) {
        let leftover_w = (fr.w as i64 - w as i64).abs();
        let leftover_h = (fr.h as i64 - h as i64).abs();
        let short_fit = leftover_w.min(leftover_h);
        let long_fit = leftover_w.max(leftover_h);
        match heuristic {
            Heuristic::BestShortSideFit => (short_fit, long_fit),
            Heuristic::BestLongSideFit => (long_fit, short_fit),
            Heuristic::BestAreaFit => (fr.area() as i64 - (w as i64) * (h as i64), short_fit),
            Heuristic::BottomLeft => (fr.y as i64 + h as i64, fr.x as i64),
            // maximize contact: negate for minimization, no secondary key
            Heuristic::ContactPoint => {
                let contact = self.contact_point_score(fr.x, fr.y, w, h);
                (-(contact as i64), 0)
            }
        }
    }

    fn contact_point_score(&self, x: u32, y: u32, w: u32, h: u32) -> u64 {
        let node = Rect::new(x, y, w, h);
        let mut score = 0u64;
        // contact with bin borders, counted once per axis
        if node.x == 0 || node.right_ex() == self.max_width() {
            score += node.h as u64;
        }
        if node.y == 0 || node.bottom_ex() == self.max_height() {
            score += node.w as u64;
        }

        for u in self.space.used_rects() {
            // left/right edges touch
            if u.x == node.right_ex() || u.right_ex() == node.x {
                score += overlap_1d(u.y, u.bottom_ex(), node.y, node.bottom_ex()) as u64;
            }
            // top/bottom edges touch
            if u.y == node.bottom_ex() || u.bottom_ex() == node.y {
                score += overlap_1d(u.x, u.right_ex(), node.x, node.right_ex()) as u64;
            }
        }
        score
    }
}

impl Packer for MaxRectsBinPack {
    fn can_pack(&self, w: u32, h: u32) -> bool {
        self.can_insert(w, h, self.heuristic)
    }

    fn pack(&mut self, w: u32, h: u32) -> Option<Rect> {
        self.insert(w, h, self.heuristic)
    }
}
