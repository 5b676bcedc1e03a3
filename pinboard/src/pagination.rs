use crate::{PageStatus, PinboardOptions};

/// Asks the data layer for the next page before the user runs out of tiles.
///
/// Fires when `has_more && !is_loading && virtual_y > threshold` and more than the debounce
/// interval has passed since the previous request. Once `has_more` is false it never fires
/// again, and a data layer stuck in `is_loading` silently stops it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaginationTrigger {
    threshold_y: f64,
    debounce_ms: u64,
    last_request_ms: Option<u64>,
}

impl PaginationTrigger {
    pub fn new(threshold_y: f64, debounce_ms: u64) -> Self {
        Self {
            threshold_y,
            debounce_ms,
            last_request_ms: None,
        }
    }

    pub fn from_options(options: &PinboardOptions) -> Self {
        Self::new(options.pagination_threshold(), options.pagination_debounce_ms)
    }

    pub fn threshold_y(&self) -> f64 {
        self.threshold_y
    }

    pub fn last_request_ms(&self) -> Option<u64> {
        self.last_request_ms
    }

    /// Pure check, no state change.
    pub fn should_request(&self, virtual_y: f64, status: PageStatus, now_ms: u64) -> bool {
        if !status.has_more || status.is_loading {
            return false;
        }
        if !virtual_y.is_finite() || virtual_y <= self.threshold_y {
            return false;
        }
        match self.last_request_ms {
            Some(last) => now_ms.saturating_sub(last) > self.debounce_ms,
            None => true,
        }
    }

    /// Calls `request_more` when due and records the request time.
    ///
    /// Returns `true` when a request was made.
    pub fn evaluate(
        &mut self,
        virtual_y: f64,
        status: PageStatus,
        now_ms: u64,
        request_more: impl FnOnce(),
    ) -> bool {
        if !self.should_request(virtual_y, status, now_ms) {
            return false;
        }
        self.last_request_ms = Some(now_ms);
        pdebug!(virtual_y, now_ms, "requesting next page");
        request_more();
        true
    }
}
