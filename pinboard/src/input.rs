use crate::easing::ease_step;
use crate::math::clamp_symmetric;
use crate::{
    Axis, ContainerRect, DeltaMode, Key, PinboardOptions, PointerInput, PointerKind, Recenter,
    Vec2, Viewport, WheelInput,
};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Drag {
    start_pointer: Vec2,
    start_offset: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Hold {
    Idle,
    /// Pointer is down and has not moved; auto-scroll starts at `deadline_ms`.
    Armed { deadline_ms: u64, pointer_y: f64 },
    AutoScrolling { direction: f64, prev_ms: Option<u64> },
}

/// Turns wheel, touch, mouse drag, press-and-hold and keyboard input into a single scroll
/// target, and eases the native scroll offset toward it once per animation frame.
///
/// The controller owns the target. Besides its own input handlers, only a plane recenter
/// (through [`crate::InfinitePlane::maintain`]) may rewrite it.
///
/// Frames and timers are modelled as state the host polls:
/// - [`InputController::needs_frame`]: schedule an animation frame and call
///   [`InputController::tick`] in it.
/// - [`InputController::next_timer_ms`]: wake up at that time and call
///   [`InputController::fire_timers`].
///
/// Superseding input clears the pending state it replaces, so a stale hold timer can never
/// fire after a release.
#[derive(Clone, Copy, Debug)]
pub struct InputController {
    options: PinboardOptions,
    target: Vec2,
    touch: Option<Vec2>,
    drag: Option<Drag>,
    hold: Hold,
    easing: bool,
}

impl InputController {
    pub fn new(options: PinboardOptions) -> Self {
        Self {
            options,
            target: Vec2::ZERO,
            touch: None,
            drag: None,
            hold: Hold::Idle,
            easing: false,
        }
    }

    pub fn options(&self) -> &PinboardOptions {
        &self.options
    }

    /// The native scroll offset the easing loop is animating toward.
    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_touching(&self) -> bool {
        self.touch.is_some()
    }

    pub fn is_hold_armed(&self) -> bool {
        matches!(self.hold, Hold::Armed { .. })
    }

    pub fn is_auto_scrolling(&self) -> bool {
        matches!(self.hold, Hold::AutoScrolling { .. })
    }

    /// `true` while the easing loop has not converged.
    pub fn is_easing(&self) -> bool {
        self.easing
    }

    pub fn needs_frame(&self) -> bool {
        self.easing || self.is_auto_scrolling()
    }

    /// Deadline of the pending press-and-hold timer, if any.
    pub fn next_timer_ms(&self) -> Option<u64> {
        match self.hold {
            Hold::Armed { deadline_ms, .. } => Some(deadline_ms),
            _ => None,
        }
    }

    /// Places the target without animating (mount).
    pub(crate) fn reset_target(&mut self, target: Vec2) {
        self.target = target;
        self.easing = false;
    }

    /// Follows a plane recenter: the target jumps to the new native offset on every tripped
    /// axis, and an active drag keeps its absolute mapping.
    pub(crate) fn on_recenter(&mut self, recenter: &Recenter) {
        for axis in Axis::BOTH {
            if !recenter.tripped(axis) {
                continue;
            }
            *self.target.axis_mut(axis) = recenter.scroll_to.axis(axis);
            if let Some(drag) = &mut self.drag {
                *drag.start_offset.axis_mut(axis) -= recenter.delta.axis(axis);
            }
        }
    }

    fn nudge(&mut self, delta: Vec2) {
        self.target += delta;
        self.easing = true;
    }

    /// Returns `true` when the host must suppress the native wheel scroll.
    pub fn on_wheel(&mut self, wheel: WheelInput, viewport: Viewport) -> bool {
        if wheel.ctrl_key {
            return false;
        }
        if !wheel.delta.is_finite() {
            pwarn!("InputController: dropping non-finite wheel delta");
            return false;
        }
        let unit = match wheel.mode {
            DeltaMode::Pixel => 1.0,
            DeltaMode::Line => self.options.line_height,
            DeltaMode::Page => viewport.height,
        };
        let max = self.options.clamp_max_delta;
        let speed = self.options.wheel_speed;
        let delta = Vec2::new(
            clamp_symmetric(wheel.delta.x * unit * speed, max),
            clamp_symmetric(wheel.delta.y * unit * speed, max),
        );
        ptrace!(dx = delta.x, dy = delta.y, "wheel");
        self.nudge(delta);
        true
    }

    /// Starts a single-finger drag from the current native offset.
    pub fn on_touch_start(&mut self, touches: &[Vec2], scroll: Vec2) {
        let [point] = touches else {
            return;
        };
        if !point.is_finite() {
            return;
        }
        self.touch = Some(*point);
        self.target = scroll;
    }

    /// Returns `true` when the host must suppress the native touch scroll.
    pub fn on_touch_move(&mut self, touches: &[Vec2]) -> bool {
        let Some(last) = self.touch else {
            return false;
        };
        let [point] = touches else {
            return false;
        };
        if !point.is_finite() {
            return false;
        }
        let max = self.options.clamp_max_delta;
        let speed = self.options.touch_speed;
        let delta = Vec2::new(
            clamp_symmetric((last.x - point.x) * speed, max),
            clamp_symmetric((last.y - point.y) * speed, max),
        );
        self.touch = Some(*point);
        self.nudge(delta);
        true
    }

    pub fn on_touch_end(&mut self) {
        self.touch = None;
    }

    /// Begins a mouse drag and arms the press-and-hold timer.
    ///
    /// Returns `true` when a drag started (primary mouse button only); hosts typically switch
    /// to a grabbing cursor and disable text selection.
    pub fn on_pointer_down(&mut self, pointer: PointerInput, scroll: Vec2, now_ms: u64) -> bool {
        if pointer.button != 0 || pointer.kind != PointerKind::Mouse {
            return false;
        }
        if !pointer.position.is_finite() || !scroll.is_finite() {
            return false;
        }
        self.drag = Some(Drag {
            start_pointer: pointer.position,
            start_offset: scroll,
        });
        self.hold = Hold::Armed {
            deadline_ms: now_ms.saturating_add(self.options.hold_delay_ms),
            pointer_y: pointer.position.y,
        };
        true
    }

    /// Returns `true` when the host must suppress the default pointer action.
    pub fn on_pointer_move(&mut self, position: Vec2) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };
        if !position.is_finite() {
            return false;
        }
        self.hold = Hold::Idle;
        let moved = (position - drag.start_pointer) * self.options.drag_speed;
        self.target = drag.start_offset - moved;
        self.easing = true;
        true
    }

    /// Ends a drag or hold. Hosts route pointer-up, pointer-cancel and document mouse-leave
    /// here. Returns `true` when a drag was active.
    pub fn on_pointer_up(&mut self) -> bool {
        self.hold = Hold::Idle;
        self.drag.take().is_some()
    }

    /// Returns `true` when the key was used (the host should suppress its default action).
    pub fn on_key(&mut self, key: Key, viewport: Viewport) -> bool {
        let w = viewport.width;
        let h = viewport.height;
        let arrow = self.options.arrow_step_fraction;
        let page = self.options.page_step_fraction;
        let delta = match key {
            Key::ArrowDown => Vec2::new(0.0, h * arrow),
            Key::ArrowUp => Vec2::new(0.0, -h * arrow),
            Key::PageDown => Vec2::new(0.0, h * page),
            Key::PageUp => Vec2::new(0.0, -h * page),
            Key::ArrowRight => Vec2::new(w * arrow, 0.0),
            Key::ArrowLeft => Vec2::new(-w * arrow, 0.0),
            Key::Home => {
                self.target.y = 0.0;
                Vec2::ZERO
            }
            Key::End => {
                self.target.y = (self.options.plane_height - h).max(0.0);
                Vec2::ZERO
            }
            Key::Other => return false,
        };
        self.nudge(delta);
        true
    }

    /// Fires the press-and-hold timer once its deadline has passed.
    ///
    /// The auto-scroll direction is up when the pointer sits in the upper half of the
    /// container, down otherwise.
    pub fn fire_timers(&mut self, now_ms: u64, container: ContainerRect) {
        let Hold::Armed {
            deadline_ms,
            pointer_y,
        } = self.hold
        else {
            return;
        };
        if now_ms < deadline_ms || self.drag.is_none() {
            return;
        }
        let direction = if pointer_y < container.center_y() {
            -1.0
        } else {
            1.0
        };
        pdebug!(direction, "hold auto-scroll started");
        self.hold = Hold::AutoScrolling {
            direction,
            prev_ms: None,
        };
    }

    /// Runs one animation frame: advances auto-scroll, then eases `scroll` toward the target.
    ///
    /// Returns the offset to write into the native container, or `None` when nothing moves.
    pub fn tick(&mut self, now_ms: u64, scroll: Vec2) -> Option<Vec2> {
        if let Hold::AutoScrolling { direction, prev_ms } = self.hold {
            if self.drag.is_none() {
                self.hold = Hold::Idle;
            } else {
                let dt_ms = prev_ms.map_or(0, |prev| now_ms.saturating_sub(prev));
                let dy = direction * self.options.hold_speed_px_s * dt_ms as f64 / 1000.0;
                self.hold = Hold::AutoScrolling {
                    direction,
                    prev_ms: Some(now_ms),
                };
                self.nudge(Vec2::new(0.0, dy));
            }
        }

        if !self.easing || !scroll.is_finite() {
            return None;
        }
        let step = ease_step(scroll, self.target, self.options.ease_k, self.options.stop_eps);
        if step.converged {
            self.easing = false;
        }
        (step.offset != scroll).then_some(step.offset)
    }

    /// Drops every pending timer, frame and gesture (unmount).
    pub fn cancel_all(&mut self) {
        self.touch = None;
        self.drag = None;
        self.hold = Hold::Idle;
        self.easing = false;
    }
}
