// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Restartable one-shot timer driven by caller-supplied timestamps.
//!
//! ## Usage
//!
//! 1) Call [`SettleTimer::arm`] on every input event; this replaces any
//!    pending deadline.
//! 2) Call [`SettleTimer::poll`] from the host's tick. It returns `true`
//!    exactly once, on the first poll at or after the deadline.
//! 3) Call [`SettleTimer::cancel`] on teardown.
//!
//! ```
//! use understory_pan_area::SettleTimer;
//!
//! let mut timer = SettleTimer::new(100);
//! timer.arm(0);
//! timer.arm(50); // restarts: deadline is now 150
//! assert!(!timer.poll(120));
//! assert!(timer.poll(150));
//! assert!(!timer.poll(200));
//! ```

/// A debounced deadline owned by a single area instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettleTimer {
    delay_ms: u64,
    deadline: Option<u64>,
}

impl SettleTimer {
    /// Creates an idle timer that fires `delay_ms` after it is armed.
    #[must_use]
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            deadline: None,
        }
    }

    /// Arms the timer relative to `now_ms`, replacing any pending deadline.
    pub fn arm(&mut self, now_ms: u64) {
        self.deadline = Some(now_ms.saturating_add(self.delay_ms));
    }

    /// Drops any pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns the pending deadline, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Fires the timer if its deadline has passed.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
