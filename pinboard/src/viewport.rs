use crate::{ContainerRect, Viewport};

/// Tracks the scroll container's rendered rect across resizes.
///
/// Starts from a fallback so the first layout pass has sane numbers. Measurements that are
/// missing (container not attached), non-finite or non-positive keep the previous value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportTracker {
    rect: ContainerRect,
    measured: bool,
}

impl ViewportTracker {
    pub fn new(fallback: Viewport) -> Self {
        let fallback = if fallback.is_measurable() {
            fallback
        } else {
            Viewport::FALLBACK
        };
        Self {
            rect: ContainerRect::from_viewport(fallback),
            measured: false,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.rect.viewport()
    }

    pub fn rect(&self) -> ContainerRect {
        self.rect
    }

    /// `true` once a real measurement has been accepted.
    pub fn is_measured(&self) -> bool {
        self.measured
    }

    /// Applies a measurement. Returns `true` when the tracked rect changed.
    pub fn on_resize(&mut self, rect: Option<ContainerRect>) -> bool {
        let Some(rect) = rect else {
            return false;
        };
        if !rect.is_measurable() {
            pwarn!(
                width = rect.width,
                height = rect.height,
                "ViewportTracker: ignoring unmeasurable rect"
            );
            return false;
        }
        self.measured = true;
        if self.rect == rect {
            return false;
        }
        pdebug!(width = rect.width, height = rect.height, "viewport resized");
        self.rect = rect;
        true
    }
}

impl Default for ViewportTracker {
    fn default() -> Self {
        Self::new(Viewport::FALLBACK)
    }
}
