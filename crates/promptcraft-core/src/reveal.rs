//! Landing page "get started" control.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

use crate::timer::DelayedTask;

pub const DEFAULT_SCROLL_DELAY: Duration = Duration::from_millis(100);

/// Region id of the generator view.
pub const GENERATOR_REGION: &str = "generator";

/// Ask the front end to bring a region into view. Best effort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: &'static str,
}

/// Visibility flag for the generator region.
///
/// Every activation schedules one scroll request after `delay`, giving the
/// newly shown region time to be laid out first.
pub struct Reveal<E> {
    visible: bool,
    delay: Duration,
    events: UnboundedSender<E>,
    shutdown: CancellationToken,
}

impl<E> Reveal<E>
where
    E: From<ScrollRequest> + Send + 'static,
{
    pub fn new(events: UnboundedSender<E>, delay: Duration) -> Self {
        Self {
            visible: false,
            delay,
            events,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the generator region and schedule the scroll.
    ///
    /// Returns true only on the activation that made the region visible.
    pub fn activate(&mut self) -> bool {
        let newly_visible = !self.visible;
        self.visible = true;

        let events = self.events.clone();
        DelayedTask::spawn(self.delay, self.shutdown.child_token(), move || {
            let _ = events.send(E::from(ScrollRequest {
                target: GENERATOR_REGION,
            }));
        });

        tracing::debug!(newly_visible, "generator reveal requested");
        newly_visible
    }
}

impl<E> Reveal<E> {
    pub fn teardown(&mut self) {
        self.shutdown.cancel();
    }
}

impl<E> Drop for Reveal<E> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::{self, UnboundedReceiver};
    use tokio::time::{timeout, Instant};

    fn reveal() -> (Reveal<ScrollRequest>, UnboundedReceiver<ScrollRequest>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Reveal::new(tx, DEFAULT_SCROLL_DELAY), rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_hidden_until_activated() {
        let (reveal, mut rx) = reveal();
        assert!(!reveal.is_visible());
        assert!(timeout(Duration::from_secs(1), rx.recv()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_activation_schedules_one_scroll() {
        let (mut reveal, mut rx) = reveal();
        let start = Instant::now();

        assert!(reveal.activate());
        assert!(reveal.is_visible());

        let request = rx.recv().await.unwrap();
        assert_eq!(request.target, GENERATOR_REGION);
        assert!(Instant::now() - start >= DEFAULT_SCROLL_DELAY);
        assert!(timeout(Duration::from_secs(1), rx.recv()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reactivation_only_rescrolls() {
        let (mut reveal, mut rx) = reveal();
        assert!(reveal.activate());
        rx.recv().await.unwrap();

        assert!(!reveal.activate());
        assert!(reveal.is_visible());
        assert_eq!(rx.recv().await.unwrap().target, GENERATOR_REGION);
        assert!(timeout(Duration::from_secs(1), rx.recv()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_cancels_scroll() {
        let (mut reveal, mut rx) = reveal();
        reveal.activate();
        drop(reveal);
        assert_eq!(rx.recv().await, None);
    }
}
