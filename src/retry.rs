use async_trait::async_trait;
use tokio::time::Duration;

use crate::error::ConfigError;

/// Default first retry delay.
pub const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_secs(1);

/// Default ceiling; once the doubled delay exceeds this the fetch is abandoned.
pub const DEFAULT_MAX_BACKOFF: Duration = Duration::from_secs(120);

/// Exponential backoff applied to each page request that does not return 200.
///
/// The delay starts at `initial_backoff` and doubles after every sleep. When
/// the doubled value exceeds `max_backoff` the request is not retried again.
/// A non-zero initial delay no larger than the ceiling keeps the sequence finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    initial_backoff: Duration,
    max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            initial_backoff: DEFAULT_INITIAL_BACKOFF,
            max_backoff: DEFAULT_MAX_BACKOFF,
        }
    }
}

impl RetryPolicy {
    pub fn new(initial_backoff: Duration, max_backoff: Duration) -> Result<Self, ConfigError> {
        if initial_backoff.is_zero() || max_backoff < initial_backoff {
            return Err(ConfigError::InvalidRetryPolicy {
                initial: initial_backoff,
                max: max_backoff,
            });
        }
        Ok(Self {
            initial_backoff,
            max_backoff,
        })
    }

    pub fn initial_backoff(&self) -> Duration {
        self.initial_backoff
    }

    pub fn max_backoff(&self) -> Duration {
        self.max_backoff
    }

    /// Start a fresh backoff sequence for one request.
    pub fn backoff(&self) -> Backoff {
        Backoff {
            current: self.initial_backoff,
            max: self.max_backoff,
        }
    }
}

/// Backoff state for a single page request.
#[derive(Debug, Clone)]
pub struct Backoff {
    current: Duration,
    max: Duration,
}

impl Backoff {
    /// Delay to sleep before the next attempt.
    pub fn current(&self) -> Duration {
        self.current
    }

    /// Double the delay. Returns `false` when the new delay is past the ceiling.
    pub fn advance(&mut self) -> bool {
        self.current = self.current.saturating_mul(2);
        self.current <= self.max
    }
}

/// Blocking wait between retries; swapped for a fake clock in tests.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Sleeps on the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
