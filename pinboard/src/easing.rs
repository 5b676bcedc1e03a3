use crate::Vec2;
use crate::math::abs;

/// Result of one exponential easing step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EaseStep {
    pub offset: Vec2,
    /// Both axes sit exactly on the target; no further frames are needed.
    pub converged: bool,
}

/// Moves one axis a fraction `k` of the way to `target`, snapping once within `eps`.
///
/// Returns the new value and whether it snapped.
pub fn ease_axis(offset: f64, target: f64, k: f64, eps: f64) -> (f64, bool) {
    if abs(target - offset) < eps {
        return (target, true);
    }
    (offset + (target - offset) * k, false)
}

/// Moves `offset` toward `target` on both axes.
///
/// With `0 < k < 1` the distance shrinks by `1 - k` every step, so the offset never
/// overshoots and reaches `eps` after `ceil(ln(d / eps) / ln(1 / (1 - k)))` steps.
pub fn ease_step(offset: Vec2, target: Vec2, k: f64, eps: f64) -> EaseStep {
    let (x, close_x) = ease_axis(offset.x, target.x, k, eps);
    let (y, close_y) = ease_axis(offset.y, target.y, k, eps);
    EaseStep {
        offset: Vec2::new(x, y),
        converged: close_x && close_y,
    }
}
