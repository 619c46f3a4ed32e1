use core::fmt;
use core::ops::Range;

use crate::{Insets, Size};

/// Why a layout pass was rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayoutError {
    /// The data source did not provide an item size.
    MissingItemSize,
    /// The item size has a zero (or negative) side.
    ZeroItemSize { width: f64, height: f64 },
    /// Item size, spacing, or viewport width was NaN or infinite.
    NonFiniteGeometry,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingItemSize => f.write_str("item size not provided"),
            Self::ZeroItemSize { width, height } => {
                write!(f, "item size error: {width}x{height}")
            }
            Self::NonFiniteGeometry => f.write_str("item size, spacing or viewport is not finite"),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Inputs to a single layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutInput {
    pub item_size: Option<Size>,
    pub requested_spacing: f64,
    pub display_count: usize,
    pub viewport_width: f64,
    pub circulating: bool,
    /// Ignored unless `circulating`.
    pub insets: Insets,
}

/// The resolved layout of one pass.
///
/// Items are laid out on a uniform pitch (`item_size.width + spacing`). In circulating mode each
/// item sits centered in its pitch cell so that the content wraps seamlessly; otherwise items
/// start at the cell's leading edge and the trailing spacing is dropped from the extent.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub item_size: Size,
    pub spacing: f64,
    pub display_count: usize,
    pub dummy_count: usize,
    pub dummy_width: f64,
    pub real_count: usize,
    pub content_extent: Size,
    pub viewport_width: f64,
    pub insets: Insets,
    pub circulating: bool,
}

impl Geometry {
    pub fn compute(input: LayoutInput) -> Result<Self, LayoutError> {
        let Some(item_size) = input.item_size else {
            return Err(LayoutError::MissingItemSize);
        };
        if !item_size.width.is_finite()
            || !item_size.height.is_finite()
            || !input.requested_spacing.is_finite()
            || !input.viewport_width.is_finite()
        {
            return Err(LayoutError::NonFiniteGeometry);
        }
        if item_size.is_empty() {
            return Err(LayoutError::ZeroItemSize {
                width: item_size.width,
                height: item_size.height,
            });
        }

        let n = input.display_count;
        let mut spacing = input.requested_spacing.max(0.0);

        let (dummy_count, insets) = if input.circulating {
            let natural = (item_size.width + spacing) * n as f64;
            if n > 0 && natural <= input.viewport_width {
                spacing = (input.viewport_width - item_size.width * n as f64) / n as f64;
                cdebug!(
                    requested = input.requested_spacing,
                    spacing,
                    "spacing widened so the padded content fills the viewport"
                );
            }
            (n, input.insets.horizontal_only())
        } else {
            (0, Insets::ZERO)
        };

        let pitch = item_size.width + spacing;
        let real_count = if n > 0 { n + 2 * dummy_count } else { 0 };
        let trailing = if input.circulating { 0.0 } else { spacing };
        let width = (pitch * real_count as f64 - trailing).ceil().max(0.0);

        Ok(Self {
            item_size,
            spacing,
            display_count: n,
            dummy_count,
            dummy_width: dummy_count as f64 * pitch,
            real_count,
            content_extent: Size::new(width, item_size.height),
            viewport_width: input.viewport_width,
            insets,
            circulating: input.circulating,
        })
    }

    pub fn pitch(&self) -> f64 {
        self.item_size.width + self.spacing
    }

    fn cell_lead(&self) -> f64 {
        if self.circulating {
            self.spacing / 2.0
        } else {
            0.0
        }
    }

    /// Leading edge of `real_index` in content coordinates.
    pub fn item_start(&self, real_index: usize) -> f64 {
        self.insets.left + real_index as f64 * self.pitch() + self.cell_lead()
    }

    pub fn item_center(&self, real_index: usize) -> f64 {
        self.item_start(real_index) + self.item_size.width / 2.0
    }

    /// Real indexes whose cells intersect `[offset, offset + width)`, widened by `overscan`.
    pub fn real_range_for(&self, offset: f64, width: f64, overscan: usize) -> Range<usize> {
        if self.real_count == 0 || width <= 0.0 {
            return 0..0;
        }
        let pitch = self.pitch();
        let local = offset - self.insets.left;
        let first = (local / pitch).floor();
        let last = ((local + width) / pitch).ceil();
        let clamp = |v: f64| v.clamp(0.0, self.real_count as f64) as usize;
        let start = clamp(first).saturating_sub(overscan);
        let end = clamp(last).saturating_add(overscan).min(self.real_count);
        start..end
    }
}
