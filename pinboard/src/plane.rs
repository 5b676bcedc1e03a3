use crate::{Axis, InputController, PinboardOptions, Recenter, Vec2, Viewport};

/// Emulates an unbounded 2D scroll space on top of a finite native scroll container.
///
/// The container hosts a large fixed plane. The visible window starts at the plane's center
/// and is silently moved back there whenever the native offset enters the edge guard; the
/// distance travelled is accumulated in [`InfinitePlane::origin`], so
/// `virtual = origin + native offset` stays continuous across recenters.
///
/// The reentrancy guard is a plain flag: the recenter's own scroll write must not trigger a
/// second recenter before the next animation frame clears it. It assumes the single-threaded
/// host model and is not a synchronization primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InfinitePlane {
    width: f64,
    height: f64,
    edge_guard: f64,
    origin: Vec2,
    recentering: bool,
    recenter_count: u64,
}

impl InfinitePlane {
    pub fn new(options: &PinboardOptions) -> Self {
        Self {
            width: options.plane_width,
            height: options.plane_height,
            edge_guard: options.edge_guard,
            origin: Vec2::ZERO,
            recentering: false,
            recenter_count: 0,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Offset between virtual and native coordinates.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// `true` between a recenter and the next [`InfinitePlane::end_frame`].
    pub fn is_recentering(&self) -> bool {
        self.recentering
    }

    /// Number of recenters since mount.
    pub fn recenter_count(&self) -> u64 {
        self.recenter_count
    }

    /// The native offset that centers `viewport` on the plane.
    pub fn center(&self, viewport: Viewport) -> Vec2 {
        Vec2::new(
            (self.width - viewport.width) / 2.0,
            (self.height - viewport.height) / 2.0,
        )
    }

    /// Centers the window and sets the origin so the virtual position starts at `(0, 0)`.
    ///
    /// Returns the native offset the host must apply.
    pub fn mount(&mut self, viewport: Viewport, input: &mut InputController) -> Vec2 {
        let center = self.center(viewport);
        self.origin = -center;
        self.recentering = false;
        self.recenter_count = 0;
        input.reset_target(center);
        pdebug!(cx = center.x, cy = center.y, "plane mounted");
        center
    }

    /// Virtual position for a native scroll offset. Always recomputed, never cached.
    pub fn virtual_position(&self, scroll: Vec2) -> Vec2 {
        self.origin + scroll
    }

    fn tripped(&self, axis: Axis, offset: f64, viewport: Viewport) -> bool {
        let (plane, view) = match axis {
            Axis::X => (self.width, viewport.width),
            Axis::Y => (self.height, viewport.height),
        };
        offset < self.edge_guard || offset > plane - view - self.edge_guard
    }

    /// Recenters every axis whose native offset entered the edge guard.
    ///
    /// On a recenter the origin absorbs `offset - center`, the returned
    /// [`Recenter::scroll_to`] puts the tripped axes back at the center, and the input
    /// controller's target follows so easing does not pull the window back. Axes that did
    /// not trip keep their offset.
    pub fn maintain(
        &mut self,
        scroll: Vec2,
        viewport: Viewport,
        input: &mut InputController,
    ) -> Option<Recenter> {
        if self.recentering || !scroll.is_finite() || !viewport.is_measurable() {
            return None;
        }
        let center = self.center(viewport);
        let mut recenter = Recenter {
            delta: Vec2::ZERO,
            scroll_to: scroll,
            x: false,
            y: false,
        };
        for axis in Axis::BOTH {
            let offset = scroll.axis(axis);
            if !self.tripped(axis, offset, viewport) {
                continue;
            }
            *recenter.delta.axis_mut(axis) = offset - center.axis(axis);
            *recenter.scroll_to.axis_mut(axis) = center.axis(axis);
            match axis {
                Axis::X => recenter.x = true,
                Axis::Y => recenter.y = true,
            }
        }
        if !recenter.x && !recenter.y {
            return None;
        }

        self.recentering = true;
        self.recenter_count = self.recenter_count.saturating_add(1);
        self.origin += recenter.delta;
        input.on_recenter(&recenter);
        pdebug!(
            dx = recenter.delta.x,
            dy = recenter.delta.y,
            origin_x = self.origin.x,
            origin_y = self.origin.y,
            "plane recentered"
        );
        Some(recenter)
    }

    /// Clears the reentrancy guard. Call at the start of the next animation frame.
    pub fn end_frame(&mut self) {
        self.recentering = false;
    }
}
