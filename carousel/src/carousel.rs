use crate::auto_slide::AutoSlide;
use crate::geometry::{Geometry, LayoutError, LayoutInput};
use crate::index::IndexSpace;
use crate::indicator::IndicatorState;
use crate::magnify::Magnifier;
use crate::views::ViewMapper;
use crate::{
    CarouselOptions, DataSource, Delegate, Insets, Phase, Rgba, ScrollState, ScrollTo, Settled,
    Size, Slot, SnapAnchor, snap,
};

/// Identifies a peer carousel in the host's own registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SyncPeer(pub usize);

/// A page change that should be mirrored onto a peer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MirrorMove {
    pub peer: SyncPeer,
    pub display_index: usize,
}

/// A headless circular paging engine.
///
/// The engine never renders. The host drives it with:
/// - [`Carousel::layout`] whenever its frame or data changes
/// - drag callbacks ([`Carousel::begin_drag`], [`Carousel::drag_to`],
///   [`Carousel::target_content_offset`], [`Carousel::end_drag`])
/// - [`Carousel::settle`] once the scroll surface comes to rest
/// - [`Carousel::poll_auto_slide`] from a clock
///
/// and reads back offsets, visible slots, the page indicator state and bound view handles.
/// For tween-driven animation and multi-carousel mirroring, see the `carousel-adapter` crate.
#[derive(Debug)]
pub struct Carousel<H> {
    options: CarouselOptions,
    data_source: Option<DataSource<H>>,
    delegate: Delegate,
    host_size: Size,

    geometry: Option<Geometry>,
    space: IndexSpace,
    phase: Phase,
    offset: f64,
    current_real: Option<usize>,
    pending_move: Option<usize>,

    magnifier: Magnifier,
    indicator: IndicatorState,
    auto_slide: AutoSlide,

    sync_view: Option<SyncPeer>,
    mirror_outbox: Option<MirrorMove>,
    mirroring: bool,
    deferred_mirror: Option<usize>,

    selected: Option<usize>,
    views: ViewMapper<H>,
}

impl<H> Carousel<H> {
    pub fn new(options: CarouselOptions) -> Self {
        let mut auto_slide = AutoSlide::default();
        auto_slide.set_interval(options.auto_slide_interval);
        Self {
            magnifier: Magnifier::new(
                options.magnify_center,
                options.preferred_magnify_bonus_ratio,
            ),
            indicator: IndicatorState::new(&options.indicator),
            auto_slide,
            options,
            data_source: None,
            delegate: Delegate::default(),
            host_size: Size::ZERO,
            geometry: None,
            space: IndexSpace::default(),
            phase: Phase::Uninitialized,
            offset: 0.0,
            current_real: None,
            pending_move: None,
            sync_view: None,
            mirror_outbox: None,
            mirroring: false,
            deferred_mirror: None,
            selected: None,
            views: ViewMapper::default(),
        }
    }

    pub fn with_data_source(mut self, data_source: DataSource<H>) -> Self {
        self.data_source = Some(data_source);
        self
    }

    pub fn with_delegate(mut self, delegate: Delegate) -> Self {
        self.delegate = delegate;
        self
    }

    pub fn with_host_size(mut self, host_size: Size) -> Self {
        self.host_size = host_size;
        self
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn set_data_source(&mut self, data_source: Option<DataSource<H>>) {
        self.data_source = data_source;
    }

    pub fn data_source(&self) -> Option<&DataSource<H>> {
        self.data_source.as_ref()
    }

    pub fn set_delegate(&mut self, delegate: Delegate) {
        self.delegate = delegate;
    }

    /// Sets the host frame. Takes effect on the next [`Self::layout`].
    pub fn set_host_size(&mut self, host_size: Size) {
        self.host_size = host_size;
    }

    pub fn host_size(&self) -> Size {
        self.host_size
    }

    // Layout

    /// Runs a full layout pass. Returns `false` (and keeps the previous state) when the item
    /// size is missing or invalid.
    pub fn layout(&mut self) -> bool {
        self.try_layout().is_ok()
    }

    /// Same as [`Self::layout`], but reports why the pass was rejected.
    pub fn try_layout(&mut self) -> Result<(), LayoutError> {
        let prev_phase = self.phase;
        self.phase = Phase::LayingOut;

        if self.options.circulating {
            self.options.recycle_enabled = true;
        }

        let input = match &self.data_source {
            Some(ds) => LayoutInput {
                item_size: (ds.item_size)(),
                requested_spacing: ds.spacing(),
                display_count: (ds.item_count)(),
                viewport_width: self.host_size.width,
                circulating: self.options.circulating,
                insets: if self.options.circulating {
                    ds.insets()
                } else {
                    Insets::ZERO
                },
            },
            None => LayoutInput {
                item_size: None,
                requested_spacing: 0.0,
                display_count: 0,
                viewport_width: self.host_size.width,
                circulating: self.options.circulating,
                insets: Insets::ZERO,
            },
        };

        let geometry = match Geometry::compute(input) {
            Ok(g) => g,
            Err(err) => {
                cerror!(%err, "layout aborted");
                self.phase = prev_phase;
                return Err(err);
            }
        };
        cdebug!(
            display_count = geometry.display_count,
            dummy_count = geometry.dummy_count,
            real_count = geometry.real_count,
            spacing = geometry.spacing,
            content_width = geometry.content_extent.width,
            "layout"
        );

        let space = IndexSpace::from_geometry(&geometry);
        let current = space.rehome_after_layout(self.current_real);

        self.geometry = Some(geometry);
        self.space = space;
        self.current_real = current;
        self.pending_move = None;
        if self.selected.is_some_and(|s| s >= space.real_count) {
            self.selected = None;
        }
        self.views.retain_range(0..space.real_count);

        self.indicator.relayout(
            &self.options.indicator,
            self.host_size.width,
            self.host_size.height,
            space.display_count,
        );
        match current {
            Some(real) => {
                self.offset = snap::offset_for_index(&geometry, self.options.snap_anchor, real);
                self.indicator.set_current_page(space.display_index_for(real));
            }
            None => self.offset = 0.0,
        }

        self.prepare_for_interaction();
        Ok(())
    }

    fn prepare_for_interaction(&mut self) {
        if let Some(g) = &self.geometry {
            self.magnifier.update(g, self.options.snap_anchor, self.offset);
        }
        self.phase = Phase::Idle;
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    pub fn index_space(&self) -> IndexSpace {
        self.space
    }

    /// Size the host should give its scroll surface: host width by item height.
    pub fn surface_size(&self) -> Option<Size> {
        let g = self.geometry.as_ref()?;
        Some(Size::new(self.host_size.width, g.item_size.height))
    }

    pub fn content_extent(&self) -> Size {
        self.geometry.map_or(Size::ZERO, |g| g.content_extent)
    }

    /// Number of display items, or `None` before the first successful layout pass.
    pub fn count(&self) -> Option<usize> {
        if self.geometry.is_none() {
            cerror!("count queried before the first layout pass");
            return None;
        }
        Some(self.space.display_count)
    }

    // Position

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_interactive(&self) -> bool {
        !matches!(self.phase, Phase::Uninitialized | Phase::LayingOut)
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn current_real_index(&self) -> Option<usize> {
        self.current_real
    }

    pub fn current_display_index(&self) -> Option<usize> {
        self.current_real.map(|real| self.space.display_index_for(real))
    }

    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            current_real_index: self.current_real,
            current_display_index: self.current_display_index(),
            offset: self.offset,
            is_dragging: self.phase == Phase::Dragging,
            is_animating_programmatic_move: self.phase == Phase::ProgrammaticMove,
        }
    }

    /// Offset that rests `real_index` on the snap reference point.
    pub fn offset_for_real_index(&self, real_index: usize) -> Option<f64> {
        let g = self.geometry.as_ref()?;
        (real_index < g.real_count)
            .then(|| snap::offset_for_index(g, self.options.snap_anchor, real_index))
    }

    // Drag

    /// Call when the user starts dragging. Suspends auto-slide and cancels any programmatic move.
    pub fn begin_drag(&mut self) {
        if !self.is_interactive() {
            return;
        }
        ctrace!(offset = self.offset, "begin_drag");
        self.auto_slide.suspend();
        self.pending_move = None;
        self.phase = Phase::Dragging;
        if let Some(cb) = &self.delegate.will_begin_dragging {
            cb();
        }
    }

    /// Call for every offset change reported by the scroll surface.
    pub fn drag_to(&mut self, offset: f64) {
        if !self.is_interactive() {
            return;
        }
        self.offset = offset;
        let Some(g) = &self.geometry else {
            return;
        };
        if self.magnifier.update(g, self.options.snap_anchor, offset) {
            ctrace!(magnified = ?self.magnifier.magnified_index(), "magnified item changed");
        }
    }

    /// Deceleration hook: where the surface should come to rest for a proposed target.
    ///
    /// With auto-align enabled the target is snapped onto the nearest item; otherwise it is
    /// returned unchanged.
    pub fn target_content_offset(&self, proposed_offset: f64, velocity: f64) -> f64 {
        if !self.options.auto_align_enabled {
            return proposed_offset;
        }
        self.geometry
            .as_ref()
            .and_then(|g| {
                snap::aligned_offset(g, self.options.snap_anchor, proposed_offset, velocity)
            })
            .map_or(proposed_offset, |a| a.offset)
    }

    /// Call when the user lifts their finger. Resumes a suspended auto-slide timer.
    pub fn end_drag(&mut self) {
        if self.phase == Phase::Dragging {
            self.phase = Phase::Idle;
        }
        ctrace!(offset = self.offset, "end_drag");
        self.auto_slide.resume();
        if let Some(cb) = &self.delegate.did_end_dragging {
            cb();
        }
    }

    /// Call when the scroll surface comes to rest at `offset`.
    ///
    /// Resolves the current item, rehomes it out of the padding when needed and notifies the
    /// delegate. The returned [`Settled::offset`] must be applied by the host without animation;
    /// it differs from `offset` by whole pitches only, so the jump is invisible.
    ///
    /// A mirrored move that arrived during the drag is applied right after, unless the drag
    /// itself changed the page; the returned value then describes the final position.
    pub fn settle(&mut self, offset: f64) -> Option<Settled> {
        let g = self.geometry?;
        let pending = self
            .pending_move
            .take()
            .filter(|_| self.phase == Phase::ProgrammaticMove);
        let real = match pending {
            Some(target) => target,
            None => snap::nearest_index(&g, self.options.snap_anchor, offset)?,
        };
        let settled = self.settle_on(real, offset)?;

        let Some(display_index) = self.deferred_mirror.take() else {
            return Some(settled);
        };
        if settled.page_changed {
            ctrace!(display_index, "deferred mirrored move superseded by drag");
            return Some(settled);
        }
        ctrace!(display_index, "applying mirrored move deferred by drag");
        self.settle_mirrored(display_index).or(Some(settled))
    }

    fn settle_on(&mut self, real: usize, offset: f64) -> Option<Settled> {
        let g = self.geometry?;
        let anchor = self.options.snap_anchor;
        self.offset = offset;
        self.pending_move = None;

        let home = self.space.rehome_if_near_boundary(real);
        let rehomed = home != real;
        if rehomed {
            self.offset += (home as f64 - real as f64) * g.pitch();
            ctrace!(from = real, to = home, offset = self.offset, "rehome");
        }

        let previous = self.current_display_index();
        let display = self.space.display_index_for(home);
        let page_changed = previous != Some(display);
        self.current_real = Some(home);
        self.phase = Phase::Idle;
        self.indicator.set_current_page(display);
        self.magnifier.update(&g, anchor, self.offset);

        if let Some(cb) = &self.delegate.did_finish_scroll {
            cb(display);
        }
        if page_changed {
            if let Some(cb) = &self.delegate.did_change_index {
                cb(display);
            }
            self.queue_mirror(display);
        }

        Some(Settled {
            real_index: home,
            display_index: display,
            offset: self.offset,
            rehomed,
            page_changed,
        })
    }

    // Programmatic moves

    /// Moves to a display index, choosing the closest real slot.
    ///
    /// Returns `None` (a no-op) when there are no items or `display_index` is out of range.
    /// Non-animated moves settle immediately; animated moves enter
    /// [`Phase::ProgrammaticMove`] until the host calls [`Self::finish_programmatic_move`] (or
    /// [`Self::settle`]).
    pub fn move_page(&mut self, display_index: usize, animated: bool) -> Option<ScrollTo> {
        let current = self.current_real?;
        if display_index >= self.space.display_count {
            cwarn!(
                display_index,
                count = self.space.display_count,
                "move_page: display index out of range"
            );
            return None;
        }
        if Some(display_index) == self.current_display_index() {
            ctrace!(display_index, "move_page: already current, re-aligning");
            return self.move_real_page(current, animated);
        }
        let real = self.space.closest_real_index_for(display_index, current);
        self.move_real_page(real, animated)
    }

    fn move_real_page(&mut self, real_index: usize, animated: bool) -> Option<ScrollTo> {
        let offset = self.offset_for_real_index(real_index)?;
        self.pending_move = Some(real_index);
        if animated {
            self.phase = Phase::ProgrammaticMove;
            return Some(ScrollTo {
                offset,
                real_index,
                animated,
            });
        }
        let settled = self.settle_on(real_index, offset)?;
        Some(ScrollTo {
            offset: settled.offset,
            real_index: settled.real_index,
            animated,
        })
    }

    /// Abandons an animated move, e.g. when the host stops its animation early. The next
    /// [`Self::settle`] resolves the item under the offset instead of the abandoned target.
    pub fn cancel_programmatic_move(&mut self) {
        if self.phase != Phase::ProgrammaticMove {
            return;
        }
        ctrace!(target = ?self.pending_move, "programmatic move cancelled");
        self.pending_move = None;
        self.phase = Phase::Idle;
    }

    /// Completes an animated move at its target offset.
    pub fn finish_programmatic_move(&mut self) -> Option<Settled> {
        if self.phase != Phase::ProgrammaticMove {
            return None;
        }
        let target = self.pending_move?;
        let offset = self.offset_for_real_index(target)?;
        self.settle(offset)
    }

    pub fn is_moving(&self) -> bool {
        self.phase == Phase::ProgrammaticMove
    }

    // Auto-slide

    /// Negative or zero disables auto-slide; a positive interval (re)starts it.
    pub fn set_auto_slide_interval(&mut self, seconds: f64) {
        self.options.auto_slide_interval = seconds;
        self.auto_slide.set_interval(seconds);
    }

    pub fn auto_slide_interval(&self) -> f64 {
        self.auto_slide.interval()
    }

    pub fn auto_slide(&self) -> &AutoSlide {
        &self.auto_slide
    }

    /// Advances the auto-slide timer. When a tick fires while idle, starts an animated move
    /// to the next page and returns it.
    pub fn poll_auto_slide(&mut self, now_ms: u64) -> Option<ScrollTo> {
        if !self.auto_slide.poll(now_ms) {
            return None;
        }
        if !self.phase.is_idle() {
            ctrace!(phase = ?self.phase, "auto slide tick skipped");
            return None;
        }
        let n = self.space.display_count;
        if n < 2 {
            return None;
        }
        let current = self.current_display_index()?;
        ctrace!(now_ms, from = current, "auto slide tick");
        self.move_page((current + 1) % n, true)
    }

    // Sync view

    /// Registers (or clears) the peer that mirrors this carousel's page changes.
    pub fn set_sync_view(&mut self, peer: Option<SyncPeer>) {
        self.sync_view = peer;
        if peer.is_none() {
            self.mirror_outbox = None;
        }
    }

    pub fn sync_view(&self) -> Option<SyncPeer> {
        self.sync_view
    }

    fn queue_mirror(&mut self, display_index: usize) {
        if self.mirroring {
            return;
        }
        if let Some(peer) = self.sync_view {
            self.mirror_outbox = Some(MirrorMove {
                peer,
                display_index,
            });
        }
    }

    /// Takes the pending mirror move, if a page change happened since the last call.
    pub fn take_mirror_move(&mut self) -> Option<MirrorMove> {
        self.mirror_outbox.take()
    }

    /// Applies a page change mirrored from a peer: moves without animation and never queues a
    /// mirror move of its own.
    ///
    /// While the user is dragging, the move is held back and applied by the next
    /// [`Self::settle`]; `None` is returned in that case. A later mirrored move replaces a
    /// held-back one.
    pub fn apply_mirrored_move(&mut self, display_index: usize) -> Option<ScrollTo> {
        if self.phase == Phase::Dragging {
            ctrace!(display_index, "mirrored move deferred until the drag settles");
            self.deferred_mirror = Some(display_index);
            return None;
        }
        self.mirroring = true;
        let moved = self.move_page(display_index, false);
        self.mirroring = false;
        moved
    }

    /// The mirrored move waiting for the current drag to settle.
    pub fn deferred_mirror(&self) -> Option<usize> {
        self.deferred_mirror
    }

    fn settle_mirrored(&mut self, display_index: usize) -> Option<Settled> {
        let current = self.current_real?;
        if display_index >= self.space.display_count {
            return None;
        }
        let real = self.space.closest_real_index_for(display_index, current);
        let offset = self.offset_for_real_index(real)?;
        self.mirroring = true;
        let settled = self.settle_on(real, offset);
        self.mirroring = false;
        settled
    }

    // Selection

    /// Call when the host recognizes a tap on a slot.
    pub fn select_item(&mut self, real_index: usize) -> Option<usize> {
        if real_index >= self.space.real_count {
            return None;
        }
        let display = self.space.display_index_for(real_index);
        self.selected = Some(real_index);
        if let Some(cb) = &self.delegate.did_select_item {
            cb(display);
        }
        Some(display)
    }

    pub fn selected_display_index(&self) -> Option<usize> {
        self.selected.map(|real| self.space.display_index_for(real))
    }

    /// Clears the selection if it is on `display_index`. Returns `true` when cleared.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn deselect_item(&mut self, display_index: usize, animated: bool) -> bool {
        if self.selected_display_index() != Some(display_index) {
            return false;
        }
        ctrace!(display_index, animated, "deselect_item");
        self.selected = None;
        true
    }

    // Magnification

    pub fn magnified_index(&self) -> Option<usize> {
        self.magnifier.magnified_index()
    }

    pub fn scale_for(&self, real_index: usize) -> f64 {
        self.magnifier.scale_for(real_index)
    }

    /// Drag-time scale that fades smoothly between neighbours.
    pub fn interpolated_scale_for(&self, real_index: usize) -> f64 {
        self.geometry.as_ref().map_or(1.0, |g| {
            self.magnifier
                .interpolated_scale_for(g, self.options.snap_anchor, self.offset, real_index)
        })
    }

    // Rendering

    /// Iterates over the slots intersecting the viewport (plus overscan) without allocations.
    pub fn for_each_visible_slot(&self, mut f: impl FnMut(Slot)) {
        let Some(g) = &self.geometry else {
            return;
        };
        for real in g.real_range_for(self.offset, g.viewport_width, self.options.overscan) {
            f(Slot {
                real_index: real,
                display_index: self.space.display_index_for(real),
                start: g.item_start(real),
                size: g.item_size,
                scale: self.magnifier.scale_for(real),
            });
        }
    }

    /// Collects visible slots into `out` (clears `out` first).
    pub fn collect_visible_slots(&self, out: &mut Vec<Slot>) {
        out.clear();
        self.for_each_visible_slot(|s| out.push(s));
    }

    /// Resolves a view handle for every visible slot through the data source.
    ///
    /// Existing handles are refreshed with `update_view` when recycling is enabled and the hook
    /// exists; otherwise `view_for_index` produces a new one. Handles outside the window are
    /// dropped.
    pub fn bind_visible_views(&mut self) {
        let (Some(g), Some(ds)) = (self.geometry, self.data_source.clone()) else {
            return;
        };
        let range = g.real_range_for(self.offset, g.viewport_width, self.options.overscan);
        self.views.retain_range(range.clone());

        let update = if self.options.recycle_enabled {
            ds.update_view.as_ref()
        } else {
            None
        };
        for real in range {
            let display = self.space.display_index_for(real);
            if let (Some(update), Some(view)) = (update, self.views.get_mut(real)) {
                update(display, view);
                continue;
            }
            self.views.insert(real, (ds.view_for_index)(display));
        }

        if let (Some(real), Some(update_current)) = (self.current_real, &ds.update_current_view) {
            let display = self.space.display_index_for(real);
            if let Some(view) = self.views.get_mut(real) {
                update_current(display, view);
            }
        }
    }

    pub fn view(&self, real_index: usize) -> Option<&H> {
        self.views.get(real_index)
    }

    pub fn views(&self) -> &ViewMapper<H> {
        &self.views
    }

    // Page indicator

    pub fn indicator(&self) -> &IndicatorState {
        &self.indicator
    }

    pub fn set_indicator_hidden(&mut self, hidden: bool) {
        self.options.indicator.hidden = hidden;
        self.indicator.hidden = hidden;
    }

    pub fn indicator_hidden(&self) -> bool {
        self.indicator.hidden
    }

    pub fn set_indicator_tint(&mut self, tint: Option<Rgba>) {
        self.options.indicator.tint = tint;
        self.indicator.tint = tint;
    }

    pub fn set_current_indicator_tint(&mut self, tint: Option<Rgba>) {
        self.options.indicator.current_tint = tint;
        self.indicator.current_tint = tint;
    }

    // Properties. Geometry-affecting ones take effect on the next layout pass.

    pub fn circulating(&self) -> bool {
        self.options.circulating
    }

    pub fn set_circulating(&mut self, circulating: bool) {
        self.options.circulating = circulating;
    }

    pub fn recycle_enabled(&self) -> bool {
        self.options.recycle_enabled
    }

    pub fn set_recycle_enabled(&mut self, recycle_enabled: bool) {
        self.options.recycle_enabled = recycle_enabled;
    }

    pub fn magnify_center(&self) -> bool {
        self.magnifier.enabled()
    }

    pub fn set_magnify_center(&mut self, magnify_center: bool) {
        self.options.magnify_center = magnify_center;
        self.magnifier.set_enabled(magnify_center);
        if let Some(g) = &self.geometry {
            self.magnifier.update(g, self.options.snap_anchor, self.offset);
        }
    }

    pub fn preferred_magnify_bonus_ratio(&self) -> f64 {
        self.magnifier.bonus_ratio()
    }

    pub fn set_preferred_magnify_bonus_ratio(&mut self, ratio: f64) {
        self.magnifier.set_bonus_ratio(ratio);
        self.options.preferred_magnify_bonus_ratio = self.magnifier.bonus_ratio();
    }

    pub fn auto_align_enabled(&self) -> bool {
        self.options.auto_align_enabled
    }

    pub fn set_auto_align_enabled(&mut self, enabled: bool) {
        self.options.auto_align_enabled = enabled;
    }

    pub fn snap_anchor(&self) -> SnapAnchor {
        self.options.snap_anchor
    }

    pub fn set_snap_anchor(&mut self, anchor: SnapAnchor) {
        self.options.snap_anchor = anchor;
    }

    pub fn rtl(&self) -> bool {
        self.options.rtl
    }

    pub fn set_rtl(&mut self, rtl: bool) {
        self.options.rtl = rtl;
    }

    // Teardown

    /// Releases the timer, peer link and bound views. Only allowed while idle (or before the
    /// first layout); returns `false` otherwise.
    pub fn teardown(&mut self) -> bool {
        if !matches!(self.phase, Phase::Idle | Phase::Uninitialized) {
            cwarn!(phase = ?self.phase, "teardown refused outside idle");
            return false;
        }
        self.auto_slide.cancel();
        self.sync_view = None;
        self.mirror_outbox = None;
        self.deferred_mirror = None;
        self.pending_move = None;
        self.views.clear();
        true
    }
}
