use crate::{Vec2, Viewport};

/// A lightweight, serializable snapshot of the scroller.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinboardState {
    pub viewport: Viewport,
    /// Native scroll offset.
    pub scroll: Vec2,
    pub origin: Vec2,
    pub target: Vec2,
    /// `origin + scroll`.
    pub virtual_position: Vec2,
    /// Columns currently laid out.
    pub columns: usize,
}
