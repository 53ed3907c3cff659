//! Disarmable cancellation timer for outbound calls

use crate::providers::error::ProviderError;
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// A cancellation token wired to a background timer.
///
/// The timer is aborted exactly once: either by `disarm` or, failing that,
/// when the deadline is dropped. A disarmed deadline can never cancel.
#[derive(Debug)]
pub struct Deadline {
    token: CancellationToken,
    timer: Option<JoinHandle<()>>,
    after: Duration,
    setting: String,
}

impl Deadline {
    /// Start the timer. `setting` names the knob that configured `after`
    /// and is carried into the timeout error.
    pub fn arm(after: Duration, setting: impl Into<String>) -> Self {
        let token = CancellationToken::new();
        let trigger = token.clone();
        let timer = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            trigger.cancel();
        });

        Self {
            token,
            timer: Some(timer),
            after,
            setting: setting.into(),
        }
    }

    #[cfg(test)]
    fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Whether the timer has fired
    pub fn is_expired(&self) -> bool {
        self.token.is_cancelled()
    }

    #[cfg(test)]
    fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// Race `fut` against the timer
    pub async fn run<F, T>(&self, fut: F) -> Result<T, ProviderError>
    where
        F: Future<Output = Result<T, ProviderError>>,
    {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(self.elapsed()),
            out = fut => out,
        }
    }

    /// Stop the timer. Returns `false` if it was already stopped.
    pub fn disarm(&mut self) -> bool {
        match self.timer.take() {
            Some(timer) => {
                timer.abort();
                debug!(after_ms = self.after.as_millis() as u64, "Deadline disarmed");
                true
            }
            None => false,
        }
    }

    fn elapsed(&self) -> ProviderError {
        ProviderError::Timeout {
            after: self.after,
            setting: self.setting.clone(),
        }
    }
}

impl Drop for Deadline {
    fn drop(&mut self) {
        self.disarm();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fires_when_future_is_slow() {
        let deadline = Deadline::arm(Duration::from_millis(20), "TEST_TIMEOUT_MS");
        let result: Result<(), _> = deadline
            .run(async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok::<_, ProviderError>(())
            })
            .await;

        match result {
            Err(ProviderError::Timeout { setting, .. }) => assert_eq!(setting, "TEST_TIMEOUT_MS"),
            other => panic!("Expected Timeout, got {:?}", other),
        }
        assert!(deadline.is_expired());
    }

    #[tokio::test]
    async fn test_fast_future_wins() {
        let deadline = Deadline::arm(Duration::from_secs(5), "TEST_TIMEOUT_MS");
        let result = deadline.run(async { Ok::<_, ProviderError>(7) }).await;
        assert_eq!(result.unwrap(), 7);
        assert!(!deadline.is_expired());
    }

    #[tokio::test]
    async fn test_disarm_happens_once() {
        let mut deadline = Deadline::arm(Duration::from_secs(5), "TEST_TIMEOUT_MS");
        assert!(deadline.is_armed());
        assert!(deadline.disarm());
        assert!(!deadline.disarm());
        assert!(!deadline.is_armed());
    }

    #[tokio::test]
    async fn test_dropped_deadline_never_fires() {
        let deadline = Deadline::arm(Duration::from_millis(20), "TEST_TIMEOUT_MS");
        let token = deadline.token().clone();
        drop(deadline);

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert!(!token.is_cancelled());
    }

    #[tokio::test]
    async fn test_disarmed_deadline_never_fires() {
        let mut deadline = Deadline::arm(Duration::from_millis(20), "TEST_TIMEOUT_MS");
        deadline.disarm();

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert!(!deadline.is_expired());
    }
}
