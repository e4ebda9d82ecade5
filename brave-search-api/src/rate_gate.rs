//! Request quota enforcement shared by every outbound API call

use crate::error::{Result, SearchError};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

const WINDOW: Duration = Duration::from_secs(1);

/// Source of the current time for the gate
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Request quotas enforced by [`RateGate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimits {
    /// Maximum requests within one rolling second
    pub per_second: u32,
    /// Maximum requests over the lifetime of the process
    pub per_month: u32,
}

impl RateLimits {
    pub fn new(per_second: u32, per_month: u32) -> Self {
        Self {
            per_second,
            per_month,
        }
    }
}

impl Default for RateLimits {
    fn default() -> Self {
        Self::new(1, 15_000)
    }
}

/// Snapshot of the gate's counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateUsage {
    pub second_count: u32,
    pub month_count: u32,
}

#[derive(Debug)]
struct RateCounters {
    second_count: u32,
    month_count: u32,
    window_start: Instant,
}

/// Admission check run before every request to the Brave API.
///
/// The per-second counter resets once the clock has moved at least one second
/// past the start of the current window. The monthly counter is never reset
/// while the process runs; restarting the process is the only way to clear it.
/// A rejected call is a hard failure: nothing is queued and nothing waits.
pub struct RateGate {
    limits: RateLimits,
    clock: Arc<dyn Clock>,
    counters: Mutex<RateCounters>,
}

impl RateGate {
    /// Create a gate using the system clock
    pub fn new(limits: RateLimits) -> Self {
        Self::with_clock(limits, Arc::new(SystemClock))
    }

    /// Create a gate reading time from `clock`
    pub fn with_clock(limits: RateLimits, clock: Arc<dyn Clock>) -> Self {
        let window_start = clock.now();
        Self {
            limits,
            clock,
            counters: Mutex::new(RateCounters {
                second_count: 0,
                month_count: 0,
                window_start,
            }),
        }
    }

    /// Reserve one request slot.
    ///
    /// # Errors
    /// Returns [`SearchError::RateLimitExceeded`] when either quota is used up.
    /// Counters are left untouched in that case.
    pub fn admit(&self) -> Result<()> {
        let now = self.clock.now();
        let mut counters = self.lock();

        if now.saturating_duration_since(counters.window_start) >= WINDOW {
            counters.second_count = 0;
            counters.window_start = now;
        }

        if counters.second_count >= self.limits.per_second
            || counters.month_count >= self.limits.per_month
        {
            tracing::warn!(
                "Rate limit exceeded: {}/{} this second, {}/{} this month",
                counters.second_count,
                self.limits.per_second,
                counters.month_count,
                self.limits.per_month
            );
            return Err(SearchError::RateLimitExceeded);
        }

        counters.second_count += 1;
        counters.month_count += 1;
        Ok(())
    }

    /// Current counter values
    pub fn usage(&self) -> RateUsage {
        let counters = self.lock();
        RateUsage {
            second_count: counters.second_count,
            month_count: counters.month_count,
        }
    }

    fn lock(&self) -> MutexGuard<'_, RateCounters> {
        self.counters
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for RateGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateGate")
            .field("limits", &self.limits)
            .field("usage", &self.usage())
            .finish()
    }
}
