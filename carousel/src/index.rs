use crate::Geometry;

/// The padded index space of one layout pass.
///
/// *Display* indexes (`0..display_count`) are what the host, delegate and page indicator see.
/// *Real* indexes (`0..real_count`) address rendered slots. In circulating mode the real space
/// is the display sequence preceded and followed by `dummy_count` duplicates, so
/// `real = dummy_count + display` is the canonical (non-dummy) slot of `display`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IndexSpace {
    pub display_count: usize,
    pub dummy_count: usize,
    pub real_count: usize,
    pub circulating: bool,
}

impl IndexSpace {
    pub fn new(display_count: usize, circulating: bool) -> Self {
        let dummy_count = if circulating { display_count } else { 0 };
        let real_count = if display_count > 0 {
            display_count + 2 * dummy_count
        } else {
            0
        };
        Self {
            display_count,
            dummy_count,
            real_count,
            circulating,
        }
    }

    pub fn from_geometry(g: &Geometry) -> Self {
        Self {
            display_count: g.display_count,
            dummy_count: g.dummy_count,
            real_count: g.real_count,
            circulating: g.circulating,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.display_count == 0
    }

    pub fn display_index_for(&self, real_index: usize) -> usize {
        if !self.circulating || self.display_count == 0 {
            return real_index;
        }
        let n = self.display_count as isize;
        (real_index as isize - self.dummy_count as isize).rem_euclid(n) as usize
    }

    /// The canonical real slot of `display_index`.
    pub fn home_real_index(&self, display_index: usize) -> usize {
        self.dummy_count + display_index
    }

    /// Picks the real index of `display_index` nearest to `near_real_index`.
    ///
    /// In circulating mode the candidates are the display index's slot in the leading
    /// padding, the canonical run, and the trailing padding. The canonical slot is kept unless
    /// a padding slot is closer by at least half a run, so a move across the wrap boundary
    /// scrolls one step instead of `display_count - 1` while ordinary moves stay in the
    /// canonical run.
    pub fn closest_real_index_for(&self, display_index: usize, near_real_index: usize) -> usize {
        if !self.circulating || self.display_count == 0 {
            return display_index;
        }
        let n = self.display_count as isize;
        let home = self.home_real_index(display_index % self.display_count) as isize;
        let near = near_real_index as isize;
        let home_distance = (home - near).abs();
        let Some(best) = [home - n, home + n]
            .into_iter()
            .filter(|&c| c >= 0 && c < self.real_count as isize)
            .min_by_key(|&c| (c - near).abs())
        else {
            return home as usize;
        };
        let saved = home_distance - (best - near).abs();
        if saved > 0 && 2 * saved >= n - 1 {
            best as usize
        } else {
            home as usize
        }
    }

    /// Returns `true` when `real_index` drifted far enough into the padding that it must be
    /// rewritten to its canonical slot.
    pub fn needs_rehome(&self, real_index: usize) -> bool {
        self.circulating
            && self.display_count > 0
            && (real_index < self.dummy_count
                || real_index > self.dummy_count + self.display_count)
    }

    /// Rewrites `real_index` to the congruent slot in `[dummy_count, dummy_count + display_count)`
    /// when it sits near a padding boundary; otherwise returns it unchanged.
    pub fn rehome_if_near_boundary(&self, real_index: usize) -> usize {
        if !self.needs_rehome(real_index) {
            return real_index;
        }
        self.home_real_index(self.display_index_for(real_index))
    }

    /// Clamps a carried-over real index into this space, used when a layout pass rebuilds the
    /// index space under an existing position.
    pub fn rehome_after_layout(&self, previous: Option<usize>) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let Some(prev) = previous else {
            return Some(self.home_real_index(0));
        };
        if self.circulating {
            if prev >= self.real_count {
                return Some(self.home_real_index(0));
            }
            Some(self.rehome_if_near_boundary(prev))
        } else {
            Some(prev.min(self.real_count - 1))
        }
    }
}
