/// Lifecycle phase of a [`crate::Carousel`].
///
/// `Uninitialized → LayingOut → Idle → (Dragging ⇄ Idle) → (ProgrammaticMove → Idle)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Uninitialized,
    LayingOut,
    Idle,
    Dragging,
    ProgrammaticMove,
}

impl Phase {
    /// Only an idle engine accepts auto-slide ticks and teardown.
    pub fn is_idle(self) -> bool {
        self == Self::Idle
    }
}

/// A lightweight snapshot of the current paging position.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    /// `None` until the first successful layout pass.
    pub current_real_index: Option<usize>,
    pub current_display_index: Option<usize>,
    pub offset: f64,
    pub is_dragging: bool,
    pub is_animating_programmatic_move: bool,
}
