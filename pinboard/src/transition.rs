/// Delays adoption of the measured column count.
///
/// The board opens with a dense placeholder count and switches to the measured one after a
/// fixed delay. Every new measurement cancels the pending switch and re-arms the delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnTransition {
    current: usize,
    measured: Option<usize>,
    deadline_ms: Option<u64>,
    delay_ms: u64,
}

impl ColumnTransition {
    pub fn new(placeholder: usize, delay_ms: u64) -> Self {
        Self {
            current: placeholder.max(1),
            measured: None,
            deadline_ms: None,
            delay_ms,
        }
    }

    /// The column count to lay out right now.
    pub fn current(&self) -> usize {
        self.current
    }

    /// The latest measured count, once known.
    pub fn measured(&self) -> Option<usize> {
        self.measured
    }

    pub fn next_timer_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    /// Records a measured count. A change (or the first measurement) re-arms the delay.
    pub fn set_measured(&mut self, columns: usize, now_ms: u64) {
        let columns = columns.max(1);
        if self.measured == Some(columns) {
            return;
        }
        self.measured = Some(columns);
        self.deadline_ms = Some(now_ms.saturating_add(self.delay_ms));
    }

    /// Applies the pending switch once due. Returns `true` when `current` changed.
    pub fn fire_timers(&mut self, now_ms: u64) -> bool {
        let Some(deadline) = self.deadline_ms else {
            return false;
        };
        if now_ms < deadline {
            return false;
        }
        self.deadline_ms = None;
        let Some(measured) = self.measured else {
            return false;
        };
        if self.current == measured {
            return false;
        }
        pdebug!(from = self.current, to = measured, "column count transition");
        self.current = measured;
        true
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }
}
