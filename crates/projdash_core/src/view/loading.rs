//! Cancellable loading-flag timer.
//!
//! The flag is cosmetic: it goes up when a page starts fetching and comes
//! down after a fixed delay. Time is passed in by the caller, which keeps the
//! timer synchronous and deterministic under test.

use log::debug;
use std::time::{Duration, Instant};

pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_millis(500);

/// Handle for one armed clear. Stale tokens cannot touch a newer load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadToken(u64);

#[derive(Debug, Clone)]
pub struct LoadingTimer {
    delay: Duration,
    loading: bool,
    issued: u64,
    pending: Option<(LoadToken, Instant)>,
}

impl Default for LoadingTimer {
    fn default() -> Self {
        Self::new(DEFAULT_LOADING_DELAY)
    }
}

impl LoadingTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            loading: false,
            issued: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Deadline of the armed clear, if any.
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.pending.map(|(_, deadline)| deadline)
    }

    /// Raises the flag and arms a clear at `now + delay`.
    ///
    /// Any previously armed clear is replaced.
    pub fn start(&mut self, now: Instant) -> LoadToken {
        self.issued += 1;
        let token = LoadToken(self.issued);
        self.loading = true;
        self.pending = Some((token, now + self.delay));
        token
    }

    /// Applies the armed clear once its deadline has passed.
    ///
    /// Returns whether the flag changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some((_, deadline)) if now >= deadline => {
                self.pending = None;
                self.loading = false;
                true
            }
            _ => false,
        }
    }

    /// Drops the flag and any armed clear, for pages that never load.
    pub fn clear(&mut self) {
        self.pending = None;
        self.loading = false;
    }

    /// Disarms the clear belonging to `token`.
    ///
    /// The flag itself is left as is; the next page start re-arms it.
    pub fn cancel(&mut self, token: LoadToken) -> bool {
        match self.pending {
            Some((armed, _)) if armed == token => {
                self.pending = None;
                debug!("event=loading_cancel module=view status=ok token={}", token.0);
                true
            }
            _ => false,
        }
    }
}
