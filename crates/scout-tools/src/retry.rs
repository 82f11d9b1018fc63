use std::time::Duration;

/// Bounded retry with exponential backoff for transient tool failures.
///
/// Only execution errors are retried; schema-validation failures never are
/// (the same arguments would fail again).
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_retries: usize,
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: usize) -> Self {
        Self {
            max_retries,
            base_delay: Duration::from_millis(100),
        }
    }

    /// No retries: every failure is reported on the first attempt.
    pub fn none() -> Self {
        Self::new(0)
    }

    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    /// Delay before retrying after a failed `attempt` (0-based).
    pub fn delay(&self, attempt: usize) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt as u32)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_double_per_attempt() {
        let policy = RetryPolicy::new(3).with_base_delay(Duration::from_millis(50));
        assert_eq!(policy.delay(0), Duration::from_millis(50));
        assert_eq!(policy.delay(1), Duration::from_millis(100));
        assert_eq!(policy.delay(2), Duration::from_millis(200));
    }

    #[test]
    fn none_means_zero_retries() {
        assert_eq!(RetryPolicy::none().max_retries, 0);
        assert_eq!(RetryPolicy::default().max_retries, 0);
    }
}
