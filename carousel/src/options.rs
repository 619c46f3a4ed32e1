use std::sync::Arc;

use crate::{Insets, Rgba, Size, SnapAnchor};

/// A delegate hook that receives a display index.
pub type IndexCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// A delegate hook without arguments.
pub type EventCallback = Arc<dyn Fn() + Send + Sync>;

/// Produces a fresh view handle for a display index.
pub type ViewFactory<H> = Arc<dyn Fn(usize) -> H + Send + Sync>;

/// Refreshes an already produced view handle in place for a display index.
pub type ViewUpdater<H> = Arc<dyn Fn(usize, &mut H) + Send + Sync>;

/// The host's data-source capabilities.
///
/// `item_count`, `item_size` and `view_for_index` are mandatory; everything else is optional
/// and resolved once per operation.
pub struct DataSource<H> {
    pub item_count: Arc<dyn Fn() -> usize + Send + Sync>,
    /// `None` means the host has no size yet; the layout pass is rejected.
    pub item_size: Arc<dyn Fn() -> Option<Size> + Send + Sync>,
    pub view_for_index: ViewFactory<H>,
    /// Used instead of `view_for_index` when recycling and a handle already exists.
    pub update_view: Option<ViewUpdater<H>>,
    /// Called for the slot at the current real index after it was bound.
    pub update_current_view: Option<ViewUpdater<H>>,
    /// Consulted only in circulating mode. Vertical components are forced to zero.
    pub content_insets: Option<Arc<dyn Fn() -> Insets + Send + Sync>>,
    /// Defaults to `0.0` when absent.
    pub item_spacing: Option<Arc<dyn Fn() -> f64 + Send + Sync>>,
}

impl<H> Clone for DataSource<H> {
    fn clone(&self) -> Self {
        Self {
            item_count: Arc::clone(&self.item_count),
            item_size: Arc::clone(&self.item_size),
            view_for_index: Arc::clone(&self.view_for_index),
            update_view: self.update_view.clone(),
            update_current_view: self.update_current_view.clone(),
            content_insets: self.content_insets.clone(),
            item_spacing: self.item_spacing.clone(),
        }
    }
}

impl<H> DataSource<H> {
    pub fn new(
        item_count: impl Fn() -> usize + Send + Sync + 'static,
        item_size: impl Fn() -> Option<Size> + Send + Sync + 'static,
        view_for_index: impl Fn(usize) -> H + Send + Sync + 'static,
    ) -> Self {
        Self {
            item_count: Arc::new(item_count),
            item_size: Arc::new(item_size),
            view_for_index: Arc::new(view_for_index),
            update_view: None,
            update_current_view: None,
            content_insets: None,
            item_spacing: None,
        }
    }

    /// A data source with a fixed count and size.
    pub fn fixed(
        count: usize,
        item_size: Size,
        view_for_index: impl Fn(usize) -> H + Send + Sync + 'static,
    ) -> Self {
        Self::new(move || count, move || Some(item_size), view_for_index)
    }

    pub fn with_update_view(
        mut self,
        update_view: Option<impl Fn(usize, &mut H) + Send + Sync + 'static>,
    ) -> Self {
        self.update_view = update_view.map(|f| Arc::new(f) as ViewUpdater<H>);
        self
    }

    pub fn with_update_current_view(
        mut self,
        update_current_view: Option<impl Fn(usize, &mut H) + Send + Sync + 'static>,
    ) -> Self {
        self.update_current_view = update_current_view.map(|f| Arc::new(f) as ViewUpdater<H>);
        self
    }

    pub fn with_content_insets(mut self, insets: Insets) -> Self {
        self.content_insets = Some(Arc::new(move || insets));
        self
    }

    pub fn with_item_spacing(mut self, spacing: f64) -> Self {
        self.item_spacing = Some(Arc::new(move || spacing));
        self
    }

    pub(crate) fn spacing(&self) -> f64 {
        self.item_spacing.as_ref().map_or(0.0, |f| f())
    }

    pub(crate) fn insets(&self) -> Insets {
        self.content_insets.as_ref().map_or(Insets::ZERO, |f| f())
    }
}

impl<H> core::fmt::Debug for DataSource<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DataSource")
            .field("update_view", &self.update_view.is_some())
            .field("update_current_view", &self.update_current_view.is_some())
            .field("content_insets", &self.content_insets.is_some())
            .field("item_spacing", &self.item_spacing.is_some())
            .finish_non_exhaustive()
    }
}

/// Optional host notifications. Absent hooks are skipped.
#[derive(Clone, Default)]
pub struct Delegate {
    pub did_finish_scroll: Option<IndexCallback>,
    pub did_select_item: Option<IndexCallback>,
    pub did_change_index: Option<IndexCallback>,
    pub will_begin_dragging: Option<EventCallback>,
    pub did_end_dragging: Option<EventCallback>,
}

impl Delegate {
    pub fn with_did_finish_scroll(mut self, f: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.did_finish_scroll = Some(Arc::new(f));
        self
    }

    pub fn with_did_select_item(mut self, f: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.did_select_item = Some(Arc::new(f));
        self
    }

    pub fn with_did_change_index(mut self, f: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.did_change_index = Some(Arc::new(f));
        self
    }

    pub fn with_will_begin_dragging(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.will_begin_dragging = Some(Arc::new(f));
        self
    }

    pub fn with_did_end_dragging(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.did_end_dragging = Some(Arc::new(f));
        self
    }
}

impl core::fmt::Debug for Delegate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Delegate")
            .field("did_finish_scroll", &self.did_finish_scroll.is_some())
            .field("did_select_item", &self.did_select_item.is_some())
            .field("did_change_index", &self.did_change_index.is_some())
            .field("will_begin_dragging", &self.will_begin_dragging.is_some())
            .field("did_end_dragging", &self.did_end_dragging.is_some())
            .finish()
    }
}

/// Page indicator appearance and metrics.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndicatorOptions {
    pub hidden: bool,
    pub tint: Option<Rgba>,
    pub current_tint: Option<Rgba>,
    pub dot_diameter: f64,
    pub dot_spacing: f64,
    pub height: f64,
    pub horizontal_padding: f64,
}

impl Default for IndicatorOptions {
    fn default() -> Self {
        Self {
            hidden: false,
            tint: None,
            current_tint: None,
            dot_diameter: 7.0,
            dot_spacing: 9.0,
            height: 20.0,
            horizontal_padding: 10.0,
        }
    }
}

/// Configuration for [`crate::Carousel`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselOptions {
    /// Pads the items with duplicates on both ends to simulate an endless loop.
    pub circulating: bool,
    /// Refresh existing views through `update_view` instead of requesting new ones.
    /// Forced on while circulating.
    pub recycle_enabled: bool,
    pub magnify_center: bool,
    pub preferred_magnify_bonus_ratio: f64,
    /// Snap deceleration targets onto item boundaries.
    pub auto_align_enabled: bool,
    /// Seconds between automatic advances; `<= 0` disables.
    pub auto_slide_interval: f64,
    pub snap_anchor: SnapAnchor,
    /// Extra slots bound on each side of the viewport.
    pub overscan: usize,
    /// Right-to-left hint for the host; the engine itself never mirrors.
    pub rtl: bool,
    pub indicator: IndicatorOptions,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            circulating: false,
            recycle_enabled: true,
            magnify_center: false,
            preferred_magnify_bonus_ratio: 1.0,
            auto_align_enabled: false,
            auto_slide_interval: -1.0,
            snap_anchor: SnapAnchor::Center,
            overscan: 1,
            rtl: false,
            indicator: IndicatorOptions::default(),
        }
    }
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_circulating(mut self, circulating: bool) -> Self {
        self.circulating = circulating;
        self
    }

    pub fn with_recycle_enabled(mut self, recycle_enabled: bool) -> Self {
        self.recycle_enabled = recycle_enabled;
        self
    }

    pub fn with_magnify_center(mut self, magnify_center: bool, bonus_ratio: f64) -> Self {
        self.magnify_center = magnify_center;
        self.preferred_magnify_bonus_ratio = bonus_ratio;
        self
    }

    pub fn with_auto_align(mut self, auto_align_enabled: bool) -> Self {
        self.auto_align_enabled = auto_align_enabled;
        self
    }

    pub fn with_auto_slide_interval(mut self, seconds: f64) -> Self {
        self.auto_slide_interval = seconds;
        self
    }

    pub fn with_snap_anchor(mut self, snap_anchor: SnapAnchor) -> Self {
        self.snap_anchor = snap_anchor;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    pub fn with_indicator(mut self, indicator: IndicatorOptions) -> Self {
        self.indicator = indicator;
        self
    }
}
