use rand::Rng;
use rayvision_core::{Error, ErrorKind};
use std::time::Duration;

/// Which failures are worth another attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RetryOn {
    /// Retry transport failures, every api error code and unclassified
    /// failures of the http layer.
    #[default]
    AnyFailure,
    /// Retry transport failures and only the listed api error codes.
    TransientOnly {
        /// Api error codes that are retried, e.g. rate limiting.
        codes: Vec<i64>,
    },
}

/// Retry policy of a client call.
///
/// Signing input errors, malformed responses and credential or config
/// errors are never retried, whatever the policy says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, the first one included.
    pub max_attempts: u32,
    /// Lower bound of the delay between two attempts.
    pub min_delay: Duration,
    /// Upper bound of the delay between two attempts.
    pub max_delay: Duration,
    /// Failures that are retried.
    pub retry_on: RetryOn,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            min_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(2),
            retry_on: RetryOn::AnyFailure,
        }
    }
}

impl RetryPolicy {
    /// Policy that sends each call exactly once.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Default::default()
        }
    }

    /// Set the total number of attempts.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Set the bounds of the delay between attempts.
    pub fn with_delay(mut self, min_delay: Duration, max_delay: Duration) -> Self {
        self.min_delay = min_delay.min(max_delay);
        self.max_delay = max_delay;
        self
    }

    /// Set which failures are retried.
    pub fn with_retry_on(mut self, retry_on: RetryOn) -> Self {
        self.retry_on = retry_on;
        self
    }

    /// Whether `err` raised by attempt number `attempt` (starting at 1)
    /// deserves another attempt.
    pub fn should_retry(&self, attempt: u32, err: &Error) -> bool {
        if attempt >= self.max_attempts {
            return false;
        }

        match err.kind() {
            ErrorKind::Transport => true,
            ErrorKind::Unexpected => self.retry_on == RetryOn::AnyFailure,
            ErrorKind::Api => match &self.retry_on {
                RetryOn::AnyFailure => true,
                RetryOn::TransientOnly { codes } => {
                    err.code().is_some_and(|code| codes.contains(&code))
                }
            },
            _ => false,
        }
    }

    /// Pick a random delay in `[min_delay, max_delay]`, millisecond precision.
    pub fn delay(&self) -> Duration {
        let min = self.min_delay.as_millis() as u64;
        let max = (self.max_delay.as_millis() as u64).max(min);

        Duration::from_millis(rand::thread_rng().gen_range(min..=max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn api(code: i64) -> Error {
        Error::api(code, "failed", "https://a.com/p")
    }

    #[test_case(Error::transport("refused"), true; "transport")]
    #[test_case(api(404), true; "api")]
    #[test_case(Error::malformed_response("html"), false; "malformed response")]
    #[test_case(Error::signing_input("bad body"), false; "signing input")]
    #[test_case(Error::credential_invalid("empty"), false; "credential")]
    #[test_case(Error::config_invalid("bad protocol"), false; "config")]
    #[test_case(Error::from(anyhow::anyhow!("pool closed")), true; "unexpected")]
    fn test_should_retry_any_failure(err: Error, expected: bool) {
        assert_eq!(RetryPolicy::default().should_retry(1, &err), expected);
    }

    #[test]
    fn test_should_retry_transient_only() {
        let policy = RetryPolicy::default().with_retry_on(RetryOn::TransientOnly { codes: vec![429] });

        assert!(policy.should_retry(1, &api(429)));
        assert!(!policy.should_retry(1, &api(404)));
        assert!(policy.should_retry(1, &Error::transport("timeout")));
        assert!(!policy.should_retry(1, &Error::unexpected("pool closed")));
    }

    #[test]
    fn test_should_retry_respects_max_attempts() {
        let policy = RetryPolicy::default();
        let err = Error::transport("refused");

        assert!(policy.should_retry(4, &err));
        assert!(!policy.should_retry(5, &err));
        assert!(!RetryPolicy::none().should_retry(1, &err));
    }

    #[test]
    fn test_delay_in_bounds() {
        let policy = RetryPolicy::default();
        for _ in 0..100 {
            let delay = policy.delay();
            assert!(delay >= Duration::from_secs(1));
            assert!(delay <= Duration::from_secs(2));
        }
    }
}
