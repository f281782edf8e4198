//! Exponential reconnect backoff

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Reconnect policy: `base_delay_ms * 2^attempt`, capped at `max_delay_ms`,
/// abandoned after `max_attempts` consecutive failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconnectPolicy {
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
    pub max_attempts: u32,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self {
            base_delay_ms: 1_000,
            max_delay_ms: 10_000,
            max_attempts: 5,
        }
    }
}

impl ReconnectPolicy {
    /// Delay before the given zero-based attempt, or None once exhausted.
    pub fn delay_for_attempt(&self, attempt: u32) -> Option<Duration> {
        if attempt >= self.max_attempts {
            return None;
        }
        let factor = 1u64.checked_shl(attempt).unwrap_or(u64::MAX);
        let delay = self.base_delay_ms.saturating_mul(factor).min(self.max_delay_ms);
        Some(Duration::from_millis(delay))
    }
}

/// Attempt counter over a [`ReconnectPolicy`]
#[derive(Debug, Clone)]
pub struct Backoff {
    policy: ReconnectPolicy,
    attempts: u32,
}

impl Backoff {
    pub fn new(policy: ReconnectPolicy) -> Self {
        Self {
            policy,
            attempts: 0,
        }
    }

    /// Consume one attempt and return its delay
    pub fn next_delay(&mut self) -> Option<Duration> {
        let delay = self.policy.delay_for_attempt(self.attempts)?;
        self.attempts += 1;
        Some(delay)
    }

    /// Forget past failures, typically after a successful connection
    pub fn reset(&mut self) {
        self.attempts = 0;
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_exhausted(&self) -> bool {
        self.attempts >= self.policy.max_attempts
    }

    pub fn set_policy(&mut self, policy: ReconnectPolicy) {
        self.policy = policy;
    }
}

/// Schedules reconnect attempts against a caller-supplied clock in seconds.
///
/// The clock is the UI frame time, which works the same natively and in the
/// browser.
#[derive(Debug, Clone)]
pub struct ReconnectTimer {
    backoff: Backoff,
    due_at: Option<f64>,
}

impl ReconnectTimer {
    pub fn new(policy: ReconnectPolicy) -> Self {
        Self {
            backoff: Backoff::new(policy),
            due_at: None,
        }
    }

    /// Arm the timer after a drop. Returns the delay, or None when the
    /// policy is exhausted and no further attempt will be made.
    pub fn schedule(&mut self, now: f64) -> Option<Duration> {
        if self.due_at.is_some() {
            return None;
        }
        let delay = self.backoff.next_delay()?;
        self.due_at = Some(now + delay.as_secs_f64());
        Some(delay)
    }

    /// Returns true once when the armed deadline has passed.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.due_at {
            Some(due) if now >= due => {
                self.due_at = None;
                true
            }
            _ => false,
        }
    }

    /// Seconds until the armed deadline
    pub fn remaining(&self, now: f64) -> Option<f64> {
        self.due_at.map(|due| (due - now).max(0.0))
    }

    pub fn is_pending(&self) -> bool {
        self.due_at.is_some()
    }

    pub fn is_exhausted(&self) -> bool {
        self.backoff.is_exhausted()
    }

    pub fn attempts(&self) -> u32 {
        self.backoff.attempts()
    }

    /// Disarm and forget past failures
    pub fn reset(&mut self) {
        self.due_at = None;
        self.backoff.reset();
    }

    pub fn set_policy(&mut self, policy: ReconnectPolicy) {
        self.backoff.set_policy(policy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_doubles_and_caps() {
        let policy = ReconnectPolicy {
            base_delay_ms: 500,
            max_delay_ms: 3_000,
            max_attempts: 6,
        };
        let delays: Vec<u64> = (0..6)
            .map(|i| policy.delay_for_attempt(i).unwrap().as_millis() as u64)
            .collect();
        assert_eq!(delays, vec![500, 1_000, 2_000, 3_000, 3_000, 3_000]);
        assert_eq!(policy.delay_for_attempt(6), None);
    }

    #[test]
    fn test_huge_attempt_does_not_overflow() {
        let policy = ReconnectPolicy {
            base_delay_ms: 1_000,
            max_delay_ms: 30_000,
            max_attempts: 200,
        };
        assert_eq!(
            policy.delay_for_attempt(150),
            Some(Duration::from_millis(30_000))
        );
    }

    #[test]
    fn test_backoff_exhausts_and_resets() {
        let mut backoff = Backoff::new(ReconnectPolicy {
            base_delay_ms: 100,
            max_delay_ms: 1_000,
            max_attempts: 2,
        });
        assert!(backoff.next_delay().is_some());
        assert!(backoff.next_delay().is_some());
        assert!(backoff.next_delay().is_none());
        assert!(backoff.is_exhausted());

        backoff.reset();
        assert_eq!(backoff.next_delay(), Some(Duration::from_millis(100)));
    }

    #[test]
    fn test_timer_fires_once_after_deadline() {
        let mut timer = ReconnectTimer::new(ReconnectPolicy::default());
        assert_eq!(timer.schedule(10.0), Some(Duration::from_secs(1)));
        // Already armed
        assert_eq!(timer.schedule(10.2), None);

        assert!(!timer.poll(10.5));
        assert!(timer.poll(11.0));
        assert!(!timer.poll(12.0));

        assert_eq!(timer.schedule(12.0), Some(Duration::from_secs(2)));
        assert_eq!(timer.attempts(), 2);
    }
}
