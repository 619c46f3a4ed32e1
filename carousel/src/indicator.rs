use crate::{IndicatorOptions, Rgba};

/// Where the host should place its page indicator, in host-frame coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndicatorFrame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// The page-dot indicator as the host should render it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndicatorState {
    pub page_count: usize,
    pub current_page: usize,
    /// Uniform scale, `<= 1.0`, applied so the dots never overflow `frame.width`.
    pub scale: f64,
    pub frame: IndicatorFrame,
    pub hidden: bool,
    pub tint: Option<Rgba>,
    pub current_tint: Option<Rgba>,
}

impl IndicatorState {
    pub(crate) fn new(options: &IndicatorOptions) -> Self {
        Self {
            page_count: 0,
            current_page: 0,
            scale: 1.0,
            frame: IndicatorFrame::default(),
            hidden: options.hidden,
            tint: options.tint,
            current_tint: options.current_tint,
        }
    }

    /// Width of `pages` dots at natural size.
    pub fn natural_width(options: &IndicatorOptions, pages: usize) -> f64 {
        if pages == 0 {
            return 0.0;
        }
        let n = pages as f64;
        n * options.dot_diameter + (n - 1.0) * options.dot_spacing
    }

    /// Recomputes frame, page count and scale for a host frame of `host_width` x `host_height`.
    pub(crate) fn relayout(
        &mut self,
        options: &IndicatorOptions,
        host_width: f64,
        host_height: f64,
        page_count: usize,
    ) {
        self.frame = IndicatorFrame {
            x: options.horizontal_padding,
            y: host_height - options.height,
            width: (host_width - 2.0 * options.horizontal_padding).max(0.0),
            height: options.height,
        };
        self.page_count = page_count;
        let needed = Self::natural_width(options, page_count);
        self.scale = if needed > 0.0 && self.frame.width < needed {
            self.frame.width / needed
        } else {
            1.0
        };
        if self.current_page >= page_count {
            self.current_page = 0;
        }
        ctrace!(
            page_count,
            scale = self.scale,
            width = self.frame.width,
            "indicator relayout"
        );
    }

    pub(crate) fn set_current_page(&mut self, page: usize) {
        if page < self.page_count {
            self.current_page = page;
        }
    }
}
