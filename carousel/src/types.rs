/// A width/height pair in host units (points, pixels, cells).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns `true` when either side is zero (or negative).
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Content insets. Only `left`/`right` are honored; see [`Insets::horizontal_only`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Insets {
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    pub const fn horizontal(left: f64, right: f64) -> Self {
        Self {
            top: 0.0,
            left,
            bottom: 0.0,
            right,
        }
    }

    /// Drops the vertical components, logging a warning for each one that was set.
    pub fn horizontal_only(mut self) -> Self {
        if self.top != 0.0 {
            cwarn!(
                top = self.top,
                "vertical content insets are not supported; forcing top to 0"
            );
            self.top = 0.0;
        }
        if self.bottom != 0.0 {
            cwarn!(
                bottom = self.bottom,
                "vertical content insets are not supported; forcing bottom to 0"
            );
            self.bottom = 0.0;
        }
        self
    }
}

/// An opaque RGBA color, stored for the host to apply to its page indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Where an item is aligned inside the viewport when snapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnapAnchor {
    /// The item's leading edge rests on the viewport's leading inset.
    Leading,
    /// The item's center rests on the center of the inset viewport.
    #[default]
    Center,
}

/// A rendered slot: one real index positioned in content space.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    pub real_index: usize,
    pub display_index: usize,
    /// Leading edge of the item in content coordinates.
    pub start: f64,
    pub size: Size,
    /// Magnification factor (1.0 unless this slot is the magnified center).
    pub scale: f64,
}

impl Slot {
    pub fn end(&self) -> f64 {
        self.start + self.size.width
    }
}

/// A request for the host to move its scroll surface.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollTo {
    pub offset: f64,
    pub real_index: usize,
    pub animated: bool,
}

/// Result of settling the scroll surface.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settled {
    pub real_index: usize,
    pub display_index: usize,
    /// The offset the host must apply without animation (differs from the settle offset
    /// only when the position was rehomed out of the padding).
    pub offset: f64,
    pub rehomed: bool,
    pub page_changed: bool,
}
