use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// A one-shot timer that runs a closure after a fixed delay.
///
/// The closure is skipped if the token is cancelled before the delay
/// elapses. Dropping a `DelayedTask` detaches it; cancel the token (or a
/// parent of it) to stop it.
pub struct DelayedTask {
    token: CancellationToken,
}

impl DelayedTask {
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(delay: Duration, token: CancellationToken, on_fire: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let task_token = token.clone();
        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = task_token.cancelled() => {
                    tracing::debug!(?delay, "delayed task cancelled");
                }
                _ = tokio::time::sleep(delay) => on_fire(),
            }
        });

        Self { token }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    #[cfg(test)]
    fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}
