//! A headless circular paging engine for horizontally swiping carousels.
//!
//! The engine decides *which* item occupies *which* slot and *where* the viewport should rest;
//! it never renders. It covers:
//! - uniform-pitch geometry with optional duplicate padding for endless looping
//! - display ↔ real index virtualization and silent rehoming out of the padding
//! - snap-to-item deceleration targets and center magnification
//! - page indicator sync, an auto-slide timer and a one-hop sync-view mirror outbox
//!
//! A GUI layer is expected to provide:
//! - the host frame size and a [`DataSource`]
//! - drag/settle callbacks from its scroll surface
//! - a clock for [`Carousel::poll_auto_slide`]
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod auto_slide;
mod carousel;
mod geometry;
mod index;
mod indicator;
mod magnify;
mod options;
mod state;
mod types;
mod views;

pub mod snap;


pub use auto_slide::AutoSlide;
pub use carousel::{Carousel, MirrorMove, SyncPeer};
pub use geometry::{Geometry, LayoutError, LayoutInput};
pub use index::IndexSpace;
pub use indicator::{IndicatorFrame, IndicatorState};
pub use magnify::Magnifier;
pub use options::{
    CarouselOptions, DataSource, Delegate, EventCallback, IndexCallback, IndicatorOptions,
    ViewFactory, ViewUpdater,
};
pub use state::{Phase, ScrollState};
pub use types::{Insets, Rgba, ScrollTo, Settled, Size, Slot, SnapAnchor};
pub use views::ViewMapper;
