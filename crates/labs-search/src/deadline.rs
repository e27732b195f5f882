use std::time::{Duration, Instant};

use crate::config::TimeoutPolicy;

/// Wall-clock budget checked between units of work.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    expires_at: Option<Instant>,
}

impl Deadline {
    /// Builds a deadline `timeout_secs` after `start`.
    ///
    /// Advisory policies, non-finite and negative timeouts never expire.
    pub fn new(start: Instant, timeout_secs: f64, policy: TimeoutPolicy) -> Self {
        let expires_at = match policy {
            TimeoutPolicy::Advisory => None,
            TimeoutPolicy::Cooperative => Duration::try_from_secs_f64(timeout_secs)
                .ok()
                .and_then(|budget| start.checked_add(budget)),
        };
        Self { expires_at }
    }

    /// A deadline that never expires.
    pub fn unbounded() -> Self {
        Self { expires_at: None }
    }

    /// Whether the budget is spent.
    pub fn expired(&self) -> bool {
        self.expires_at
            .map(|expires_at| Instant::now() >= expires_at)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advisory_never_expires() {
        let deadline = Deadline::new(Instant::now(), 0.0, TimeoutPolicy::Advisory);
        assert!(!deadline.expired());
    }

    #[test]
    fn cooperative_zero_budget_expires_immediately() {
        let deadline = Deadline::new(Instant::now(), 0.0, TimeoutPolicy::Cooperative);
        assert!(deadline.expired());
    }

    #[test]
    fn invalid_budgets_are_unbounded() {
        let start = Instant::now();
        assert!(!Deadline::new(start, f64::INFINITY, TimeoutPolicy::Cooperative).expired());
        assert!(!Deadline::new(start, -1.0, TimeoutPolicy::Cooperative).expired());
        assert!(!Deadline::unbounded().expired());
    }
}
