use crate::{Geometry, SnapAnchor};

/// The outcome of snapping a proposed rest offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Alignment {
    /// Real index of the item that ends up on the reference point.
    pub real_index: usize,
    pub offset: f64,
}

/// The viewport coordinate items are aligned to.
pub fn reference_point(g: &Geometry, anchor: SnapAnchor) -> f64 {
    match anchor {
        SnapAnchor::Leading => g.insets.left,
        SnapAnchor::Center => {
            let inner = g.viewport_width - g.insets.left - g.insets.right;
            g.insets.left + inner / 2.0
        }
    }
}

fn anchor_of(g: &Geometry, anchor: SnapAnchor, real_index: usize) -> f64 {
    match anchor {
        SnapAnchor::Leading => g.item_start(real_index),
        SnapAnchor::Center => g.item_center(real_index),
    }
}

/// Offset that puts `real_index` on the reference point.
pub fn offset_for_index(g: &Geometry, anchor: SnapAnchor, real_index: usize) -> f64 {
    anchor_of(g, anchor, real_index) - reference_point(g, anchor)
}

/// The real index whose anchor lies nearest to the reference point at `offset`.
///
/// Returns `None` when there are no items.
pub fn nearest_index(g: &Geometry, anchor: SnapAnchor, offset: f64) -> Option<usize> {
    if g.real_count == 0 {
        return None;
    }
    let pitch = g.pitch();
    let pos = (offset + reference_point(g, anchor) - anchor_of(g, anchor, 0)) / pitch;
    let max = (g.real_count - 1) as f64;
    Some(pos.round().clamp(0.0, max) as usize)
}

/// Corrects a proposed deceleration target so the surface rests on an item.
///
/// `velocity` is accepted for parity with platform deceleration hooks; the nearest item wins
/// regardless of release speed.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn aligned_offset(
    g: &Geometry,
    anchor: SnapAnchor,
    proposed_offset: f64,
    velocity: f64,
) -> Option<Alignment> {
    let real_index = nearest_index(g, anchor, proposed_offset)?;
    let offset = offset_for_index(g, anchor, real_index);
    ctrace!(
        proposed_offset,
        velocity,
        real_index,
        offset,
        "aligned_offset"
    );
    Some(Alignment { real_index, offset })
}
