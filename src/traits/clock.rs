//! Time source for issuance timestamps.

use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::Timestamp;

/// Supplies the current time.  The registry clamps readings so that
/// `created_at` never decreases along the ledger order, even if the
/// source steps backwards.
pub trait Clock {
    /// Returns the current time.
    fn now(&self) -> Timestamp;
}

/// Wall-clock time from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        // a clock before the epoch reads as zero
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        Timestamp::from_secs(secs)
    }
}

/// Manually driven clock for tests and simulations.
///
/// # Examples
///
/// ```
/// use launchpad_amm::traits::{Clock, ManualClock};
///
/// let clock = ManualClock::new(100);
/// clock.advance(5);
/// assert_eq!(clock.now().as_secs(), 105);
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    secs: Cell<u64>,
}

impl ManualClock {
    /// Creates a clock reading `secs`.
    #[must_use]
    pub const fn new(secs: u64) -> Self {
        Self {
            secs: Cell::new(secs),
        }
    }

    /// Moves the clock forward by `secs`, saturating.
    pub fn advance(&self, secs: u64) {
        self.secs.set(self.secs.get().saturating_add(secs));
    }

    /// Sets the reading, which may move it backwards.
    pub fn set(&self, secs: u64) {
        self.secs.set(secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_secs(self.secs.get())
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_moves() {
        let clock = ManualClock::new(10);
        clock.advance(2);
        assert_eq!(clock.now(), Timestamp::from_secs(12));
        clock.set(3);
        assert_eq!(clock.now(), Timestamp::from_secs(3));
    }

    #[test]
    fn system_clock_is_after_2020() {
        assert!(SystemClock.now().as_secs() > 1_577_836_800);
    }
}
