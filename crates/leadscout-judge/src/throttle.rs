//! Fixed-delay throttle for judge calls.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Spacing {
    /// `interval` of idle time after each call completes.
    AfterCompletion,
    /// At most one call start per `interval`, however many are in flight.
    StartRate,
}

/// Enforces spacing between consecutive judge invocations.
///
/// [`Throttle::new`] is for sequential use: callers bracket each call with
/// [`wait`](Self::wait) and [`finish`](Self::finish), and the next call starts
/// no sooner than `interval` after the previous one returned, so every lead
/// pays a flat delay on top of the judge latency.
///
/// [`Throttle::rate_cap`] is for concurrent use: each caller reserves the next
/// free start slot, keeping the aggregate start rate at or below one per
/// `interval`. `finish` is a no-op in this mode.
///
/// The first call always goes through immediately.
#[derive(Debug)]
pub struct Throttle {
    interval: Duration,
    spacing: Spacing,
    next_slot: Mutex<Option<Instant>>,
}

impl Throttle {
    /// Sequential throttle: a flat `interval` between one call's completion
    /// and the next call's start.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self::with_spacing(interval, Spacing::AfterCompletion)
    }

    /// Concurrent throttle: call starts are at least `interval` apart.
    #[must_use]
    pub fn rate_cap(interval: Duration) -> Self {
        Self::with_spacing(interval, Spacing::StartRate)
    }

    fn with_spacing(interval: Duration, spacing: Spacing) -> Self {
        Self {
            interval,
            spacing,
            next_slot: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait until this caller may start its call.
    pub async fn wait(&self) {
        if self.interval.is_zero() {
            return;
        }

        let slot = {
            let mut next = self.next_slot.lock().await;
            let now = Instant::now();
            let slot = match *next {
                Some(t) if t > now => t,
                _ => now,
            };
            if self.spacing == Spacing::StartRate {
                *next = Some(slot + self.interval);
            }
            slot
        };

        tokio::time::sleep_until(slot).await;
    }

    /// Mark the current call complete, successfully or not. The next
    /// [`wait`](Self::wait) is measured from here.
    pub async fn finish(&self) {
        if self.interval.is_zero() || self.spacing == Spacing::StartRate {
            return;
        }
        *self.next_slot.lock().await = Some(Instant::now() + self.interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Paused-clock timers resolve at millisecond granularity, so allow a
    /// small overshoot past the exact schedule.
    fn assert_elapsed(start: Instant, expected_ms: u64) {
        let elapsed = start.elapsed();
        let expected = Duration::from_millis(expected_ms);
        assert!(
            elapsed >= expected && elapsed < expected + Duration::from_millis(5),
            "expected ~{expected:?}, got {elapsed:?}"
        );
    }

    /// One throttled call that takes `latency_ms` to complete.
    async fn call(throttle: &Throttle, latency_ms: u64) {
        throttle.wait().await;
        tokio::time::sleep(Duration::from_millis(latency_ms)).await;
        throttle.finish().await;
    }

    #[tokio::test(start_paused = true)]
    async fn first_call_is_immediate() {
        let throttle = Throttle::new(Duration::from_millis(500));
        let start = Instant::now();
        throttle.wait().await;
        assert_elapsed(start, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn instant_calls_are_spaced_by_interval() {
        let throttle = Throttle::new(Duration::from_millis(500));
        let start = Instant::now();
        for _ in 0..3 {
            call(&throttle, 0).await;
        }
        assert_elapsed(start, 1000);
    }

    #[tokio::test(start_paused = true)]
    async fn delay_is_added_on_top_of_call_latency() {
        let throttle = Throttle::new(Duration::from_millis(500));
        let start = Instant::now();
        for _ in 0..3 {
            call(&throttle, 400).await;
        }
        // 3 x 400 ms of latency plus 2 x 500 ms of idle gap.
        assert_elapsed(start, 2200);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_call_still_pays_full_delay() {
        let throttle = Throttle::new(Duration::from_millis(500));
        call(&throttle, 2000).await;
        let before = Instant::now();
        throttle.wait().await;
        assert_elapsed(before, 500);
    }

    #[tokio::test(start_paused = true)]
    async fn idle_time_counts_toward_interval() {
        let throttle = Throttle::new(Duration::from_millis(500));
        call(&throttle, 0).await;
        tokio::time::sleep(Duration::from_millis(800)).await;
        let before = Instant::now();
        throttle.wait().await;
        assert_elapsed(before, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn rate_cap_spaces_concurrent_starts() {
        let throttle = Throttle::rate_cap(Duration::from_millis(200));
        let start = Instant::now();
        futures::future::join_all((0..4).map(|_| throttle.wait())).await;
        assert_elapsed(start, 600);
    }

    #[tokio::test(start_paused = true)]
    async fn rate_cap_ignores_call_latency() {
        let throttle = Throttle::rate_cap(Duration::from_millis(500));
        let start = Instant::now();
        for _ in 0..3 {
            call(&throttle, 400).await;
        }
        // Starts at 0, 500, 1000; the last call ends at 1400.
        assert_elapsed(start, 1400);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_interval_never_sleeps() {
        let throttle = Throttle::new(Duration::ZERO);
        let start = Instant::now();
        for _ in 0..10 {
            call(&throttle, 0).await;
        }
        assert_elapsed(start, 0);
    }
}
