use chrono::{DateTime, Utc};
use governor::{
    clock::{Clock, DefaultClock},
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use std::num::NonZeroU32;
use std::sync::atomic::{AtomicU32, Ordering};
use std::thread;
use std::time::Duration;

const LONG_WINDOW: Duration = Duration::from_secs(120);

type DirectLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Process-local throttle in front of every Riot API request.
///
/// Development keys allow 20 req/sec and 100 req/2min; both quotas are
/// enforced, the stricter one wins. The long quota's burst plus its refill
/// over two minutes never exceeds the two-minute limit.
pub struct RequestThrottle {
    per_second: DirectLimiter,
    per_two_minutes: DirectLimiter,
    per_second_limit: u32,
    per_two_minutes_limit: u32,
    sent: AtomicU32,
    started: DateTime<Utc>,
}

impl RequestThrottle {
    pub fn new(per_second: u32, per_two_minutes: u32) -> Self {
        RequestThrottle {
            per_second: RateLimiter::direct(Quota::per_second(non_zero(per_second))),
            per_two_minutes: RateLimiter::direct(window_quota(per_second, per_two_minutes)),
            per_second_limit: per_second,
            per_two_minutes_limit: per_two_minutes,
            sent: AtomicU32::new(0),
            started: Utc::now(),
        }
    }

    /// Blocks the calling thread until both quotas admit one more request.
    pub fn acquire(&self) {
        wait_for(&self.per_second);
        wait_for(&self.per_two_minutes);
        self.sent.fetch_add(1, Ordering::Relaxed);
    }

    pub fn requests_sent(&self) -> u32 {
        self.sent.load(Ordering::Relaxed)
    }

    pub fn display_status(&self) {
        let elapsed = Utc::now().signed_duration_since(self.started);

        println!("\n📊 API Usage");
        println!("   Sent:   {} requests in {}s", self.requests_sent(), elapsed.num_seconds());
        println!(
            "   Limits: {}/sec, {}/2min\n",
            self.per_second_limit, self.per_two_minutes_limit
        );
    }
}

/// Burst of up to one second's worth (at most half the limit), with the
/// remainder of the limit refilled evenly across the window.
fn window_quota(per_second: u32, limit: u32) -> Quota {
    let limit = limit.max(1);
    let burst = per_second.min(limit / 2).max(1);
    let refill = (limit - burst).max(1);

    match Quota::with_period(LONG_WINDOW / refill) {
        Some(quota) => quota.allow_burst(non_zero(burst)),
        None => Quota::per_second(non_zero(limit)),
    }
}

fn wait_for(limiter: &DirectLimiter) {
    let clock = DefaultClock::default();
    while let Err(not_until) = limiter.check() {
        thread::sleep(not_until.wait_time_from(clock.now()));
    }
}

fn non_zero(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap_or(NonZeroU32::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_counts_requests() {
        let throttle = RequestThrottle::new(20, 100);
        for _ in 0..3 {
            throttle.acquire();
        }
        assert_eq!(throttle.requests_sent(), 3);
    }

    fn admitted_at_once(quota: Quota, attempts: u32) -> u32 {
        let limiter = RateLimiter::direct(quota);
        (0..attempts).filter(|_| limiter.check().is_ok()).count() as u32
    }

    #[test]
    fn test_window_quota_stays_within_two_minute_limit() {
        for (per_second, limit) in [(20, 100), (1000, 100), (20, 2), (500, 30_000)] {
            let quota = window_quota(per_second, limit);
            let refilled = LONG_WINDOW.as_nanos() / quota.replenish_interval().as_nanos();
            let worst_case = quota.burst_size().get() as u128 + refilled;
            assert!(
                worst_case <= limit as u128,
                "{}/s, {}/2min admits {} per window",
                per_second,
                limit,
                worst_case
            );
        }
    }

    #[test]
    fn test_request_past_limit_is_not_admitted_immediately() {
        let admitted = admitted_at_once(window_quota(1000, 100), 101);
        assert!(admitted < 101);
        assert_eq!(admitted, 50);

        assert_eq!(admitted_at_once(window_quota(20, 100), 101), 20);
    }

    #[test]
    fn test_zero_limits_are_clamped() {
        let throttle = RequestThrottle::new(0, 0);
        throttle.acquire();
        assert_eq!(throttle.requests_sent(), 1);
    }
}
