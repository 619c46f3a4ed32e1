use crate::{Geometry, SnapAnchor, snap};

/// Tracks which real index is magnified.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Magnifier {
    enabled: bool,
    bonus_ratio: f64,
    magnified: Option<usize>,
}

impl Default for Magnifier {
    fn default() -> Self {
        Self {
            enabled: false,
            bonus_ratio: 1.0,
            magnified: None,
        }
    }
}

impl Magnifier {
    pub fn new(enabled: bool, bonus_ratio: f64) -> Self {
        Self {
            enabled,
            bonus_ratio: sanitize_ratio(bonus_ratio),
            magnified: None,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.magnified = None;
        }
    }

    pub fn bonus_ratio(&self) -> f64 {
        self.bonus_ratio
    }

    pub fn set_bonus_ratio(&mut self, ratio: f64) {
        self.bonus_ratio = sanitize_ratio(ratio);
    }

    pub fn magnified_index(&self) -> Option<usize> {
        self.magnified
    }

    /// Re-resolves the magnified item from the current offset.
    ///
    /// Returns `true` when the magnified index changed.
    pub fn update(&mut self, g: &Geometry, anchor: SnapAnchor, offset: f64) -> bool {
        let next = if self.enabled {
            snap::nearest_index(g, anchor, offset)
        } else {
            None
        };
        let changed = next != self.magnified;
        self.magnified = next;
        changed
    }

    pub fn scale_for(&self, real_index: usize) -> f64 {
        if self.magnified == Some(real_index) {
            self.bonus_ratio
        } else {
            1.0
        }
    }

    /// A continuous alternative to [`Self::scale_for`] for drag feedback: the bonus fades out
    /// linearly as the item's anchor moves one pitch away from the reference point.
    pub fn interpolated_scale_for(
        &self,
        g: &Geometry,
        anchor: SnapAnchor,
        offset: f64,
        real_index: usize,
    ) -> f64 {
        if !self.enabled || real_index >= g.real_count {
            return 1.0;
        }
        let distance = (snap::offset_for_index(g, anchor, real_index) - offset).abs();
        let weight = (1.0 - distance / g.pitch()).clamp(0.0, 1.0);
        1.0 + (self.bonus_ratio - 1.0) * weight
    }
}

fn sanitize_ratio(ratio: f64) -> f64 {
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        cwarn!(ratio, "invalid magnify bonus ratio; using 1.0");
        1.0
    }
}
