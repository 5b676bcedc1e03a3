use crate::Vec2;

/// Collapses bursts of native scroll events into one committed offset per animation frame.
///
/// Hosts call [`ScrollStateReader::on_scroll_event`] from the container's scroll listener
/// and request an animation frame only when it returns `true`. Inside that frame they pass
/// the container's current offsets to [`ScrollStateReader::on_frame`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollStateReader {
    offset: Vec2,
    frame_pending: bool,
}

impl ScrollStateReader {
    pub fn new(initial: Vec2) -> Self {
        Self {
            offset: initial,
            frame_pending: false,
        }
    }

    /// The last committed native scroll offset.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn is_frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Marks a scroll event. Returns `true` when the caller must schedule a frame.
    pub fn on_scroll_event(&mut self) -> bool {
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    /// Commits the sampled offset for a pending frame.
    ///
    /// Returns the new offset when it changed. Non-finite samples are dropped.
    pub fn on_frame(&mut self, sampled: Vec2) -> Option<Vec2> {
        if !self.frame_pending {
            return None;
        }
        self.frame_pending = false;
        self.commit(sampled)
    }

    /// Records an offset the engine itself wrote to the container.
    pub fn commit(&mut self, offset: Vec2) -> Option<Vec2> {
        if !offset.is_finite() {
            pwarn!("ScrollStateReader: dropping non-finite scroll offset");
            return None;
        }
        if self.offset == offset {
            return None;
        }
        self.offset = offset;
        Some(offset)
    }

    /// Drops a pending frame (unmount).
    pub fn cancel(&mut self) {
        self.frame_pending = false;
    }
}
