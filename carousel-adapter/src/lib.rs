//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and reports *where* the scroll surface should go. This
//! crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Tween-driven animated page moves and auto-slide, advanced from one clock
//! - A sync group that delivers page changes between linked carousels
//!
//! This crate is intentionally framework-agnostic (no toolkit bindings).
#![forbid(unsafe_code)]

mod controller;
mod sync;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::{Controller, DEFAULT_MOVE_DURATION_MS};
pub use sync::SyncGroup;
pub use tween::{Easing, Tween};
