use carousel::{Carousel, CarouselOptions, MirrorMove, ScrollTo, Settled, Size};

use crate::{Easing, Tween};

/// Default duration of an animated page move.
pub const DEFAULT_MOVE_DURATION_MS: u64 = 300;

/// A framework-neutral controller that wraps a [`carousel::Carousel`] and drives its animated
/// moves and auto-slide timer from a single clock.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_host_size` when the host frame changes
/// - `on_drag_begin` / `on_scroll` / `on_drag_end` / `on_scroll_end` from the scroll surface
/// - `tick(now_ms)` each frame/timer tick
///
/// Offsets returned from `tick()` and `move_page()` should be applied to the scroll surface
/// without its own animation.
#[derive(Debug)]
pub struct Controller<H> {
    c: Carousel<H>,
    tween: Option<Tween>,
    duration_ms: u64,
    easing: Easing,
}

impl<H> Controller<H> {
    pub fn new(options: CarouselOptions) -> Self {
        Self::from_carousel(Carousel::new(options))
    }

    pub fn from_carousel(c: Carousel<H>) -> Self {
        Self {
            c,
            tween: None,
            duration_ms: DEFAULT_MOVE_DURATION_MS,
            easing: Easing::default(),
        }
    }

    /// Sets the duration and easing used for animated moves.
    pub fn with_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.duration_ms = duration_ms;
        self.easing = easing;
        self
    }

    pub fn carousel(&self) -> &Carousel<H> {
        &self.c
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel<H> {
        &mut self.c
    }

    pub fn into_carousel(self) -> Carousel<H> {
        self.c
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Stops an animated move where it is. The engine leaves its programmatic-move phase, so
    /// the next `on_scroll_end` resolves the item under the offset.
    pub fn cancel_animation(&mut self) {
        if self.tween.take().is_some() {
            self.c.cancel_programmatic_move();
        }
    }

    /// Applies a new host frame and runs a layout pass.
    ///
    /// This cancels any active tween.
    pub fn on_host_size(&mut self, host_size: Size) -> bool {
        self.cancel_animation();
        self.c.set_host_size(host_size);
        self.c.layout()
    }

    /// This cancels any active tween.
    pub fn on_drag_begin(&mut self) {
        self.cancel_animation();
        self.c.begin_drag();
    }

    /// Call this when the UI reports a scroll offset change (e.g. user drag).
    ///
    /// This cancels any active tween.
    pub fn on_scroll(&mut self, offset: f64) {
        self.cancel_animation();
        self.c.drag_to(offset);
    }

    /// Returns where the surface should decelerate to.
    pub fn on_drag_end(&mut self, proposed_offset: f64, velocity: f64) -> f64 {
        let target = self.c.target_content_offset(proposed_offset, velocity);
        self.c.end_drag();
        target
    }

    /// Call this once the surface stopped decelerating.
    pub fn on_scroll_end(&mut self, offset: f64) -> Option<Settled> {
        self.c.settle(offset)
    }

    /// Moves to a display index.
    ///
    /// Animated moves start a tween and return its target; a move issued while another is in
    /// flight retargets the running tween from its current position. The final (possibly
    /// rehomed) offset is reported by `tick()` once the tween completes. Non-animated moves
    /// return the settled offset right away.
    pub fn move_page(&mut self, display_index: usize, animated: bool, now_ms: u64) -> Option<f64> {
        let to = self.c.move_page(display_index, animated)?;
        self.start(to, now_ms);
        Some(to.offset)
    }

    fn start(&mut self, to: ScrollTo, now_ms: u64) {
        if !to.animated {
            self.tween = None;
            return;
        }
        match self.tween.as_mut() {
            Some(tween) => tween.retarget(now_ms, to.offset, self.duration_ms),
            None => {
                self.tween = Some(Tween::new(
                    self.c.offset(),
                    to.offset,
                    now_ms,
                    self.duration_ms,
                    self.easing,
                ));
            }
        }
    }

    /// Advances the controller.
    ///
    /// - If no tween is active, polls the auto-slide timer, which may start one.
    /// - If a tween is active, updates the offset and returns it. The last frame settles the
    ///   move and returns the settled offset.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        if self.tween.is_none() {
            let to = self.c.poll_auto_slide(now_ms)?;
            self.start(to, now_ms);
        }
        let tween = self.tween?;

        let off = tween.sample(now_ms);
        self.c.drag_to(off);

        if tween.is_done(now_ms) {
            self.tween = None;
            if let Some(settled) = self.c.finish_programmatic_move() {
                return Some(settled.offset);
            }
        }
        Some(self.c.offset())
    }

    pub fn take_mirror_move(&mut self) -> Option<MirrorMove> {
        self.c.take_mirror_move()
    }

    /// Applies a peer's page change. This cancels any active tween.
    pub fn apply_mirrored_move(&mut self, display_index: usize) -> Option<f64> {
        self.cancel_animation();
        self.c.apply_mirrored_move(display_index).map(|to| to.offset)
    }
}
