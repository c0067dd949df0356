//! Simulated content generation.
//!
//! `Generator` owns the generator view's state and drives the
//! idle -> generating -> generated cycle. Generation is a fixed-latency timer:
//! `submit` snapshots the request and arms a [`DelayedTask`], which later
//! sends a [`Completion`] through the view's event channel. The owner feeds
//! that completion back into [`Generator::complete`] on the same thread that
//! handles input, so state is only ever mutated from one place.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

use crate::clipboard::Clipboard;
use crate::content::{ContentType, Tone};
use crate::error::GeneratorError;
use crate::notify::{NoticeKind, Notifier};
use crate::template;
use crate::timer::DelayedTask;

pub const DEFAULT_GENERATION_LATENCY: Duration = Duration::from_millis(2000);

/// A submittable request. The prompt is never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    content_type: ContentType,
    tone: Tone,
    prompt: String,
}

impl GenerationRequest {
    pub fn new(
        content_type: ContentType,
        tone: Tone,
        prompt: impl Into<String>,
    ) -> Result<Self, GeneratorError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(GeneratorError::EmptyPrompt);
        }
        Ok(Self {
            content_type,
            tone,
            prompt,
        })
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Generating,
    /// Idle again, with a result on display.
    Generated,
}

/// Everything the generator view shows. An empty `result` means none yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub content_type: ContentType,
    pub tone: Tone,
    pub prompt: String,
    pub result: String,
    pub is_generating: bool,
}

/// Emitted by the latency timer once a generation is due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub id: u64,
    pub request: GenerationRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Nothing to copy; the clipboard was not touched.
    Skipped,
    Copied,
    Failed,
}

struct InFlight {
    id: u64,
    task: DelayedTask,
}

pub struct Generator<E> {
    state: UiState,
    latency: Duration,
    events: UnboundedSender<E>,
    shutdown: CancellationToken,
    in_flight: Option<InFlight>,
    next_id: u64,
}

impl<E> Generator<E>
where
    E: From<Completion> + Send + 'static,
{
    pub fn new(events: UnboundedSender<E>, latency: Duration) -> Self {
        Self {
            state: UiState::default(),
            latency,
            events,
            shutdown: CancellationToken::new(),
            in_flight: None,
            next_id: 1,
        }
    }

    /// Start from a different content type and tone than the built-in defaults.
    pub fn with_defaults(mut self, content_type: ContentType, tone: Tone) -> Self {
        self.state.content_type = content_type;
        self.state.tone = tone;
        self
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        if self.state.is_generating {
            Phase::Generating
        } else if self.state.result.is_empty() {
            Phase::Idle
        } else {
            Phase::Generated
        }
    }

    /// Whether the generate control accepts activation.
    pub fn trigger_enabled(&self) -> bool {
        !self.state.is_generating
    }

    pub fn set_content_type(&mut self, content_type: ContentType) {
        self.state.content_type = content_type;
    }

    pub fn set_tone(&mut self, tone: Tone) {
        self.state.tone = tone;
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.state.prompt = prompt.into();
    }

    /// Direct access for in-place prompt editing.
    pub fn prompt_mut(&mut self) -> &mut String {
        &mut self.state.prompt
    }

    /// Start a generation from the current fields.
    ///
    /// Rejected while another generation is in flight. A blank prompt leaves
    /// the state untouched and raises a validation notice. On success returns
    /// the id the matching [`Completion`] will carry.
    pub fn submit(&mut self, notifier: &mut dyn Notifier) -> Result<u64, GeneratorError> {
        if self.state.is_generating {
            tracing::debug!("submit ignored, generation already in flight");
            return Err(GeneratorError::AlreadyGenerating);
        }

        let request = match GenerationRequest::new(
            self.state.content_type,
            self.state.tone,
            self.state.prompt.clone(),
        ) {
            Ok(request) => request,
            Err(e) => {
                notifier.notify(NoticeKind::Error, &e.to_string());
                return Err(e);
            }
        };

        let id = self.next_id;
        self.next_id += 1;

        tracing::info!(
            id,
            content_type = request.content_type().as_str(),
            tone = request.tone().as_str(),
            latency_ms = self.latency.as_millis() as u64,
            "generation started"
        );

        let events = self.events.clone();
        let task = DelayedTask::spawn(self.latency, self.shutdown.child_token(), move || {
            // The receiver is gone once the view is torn down.
            let _ = events.send(E::from(Completion { id, request }));
        });

        self.state.is_generating = true;
        self.in_flight = Some(InFlight { id, task });
        Ok(id)
    }

    /// Apply a completion from the latency timer.
    ///
    /// Returns false, changing nothing, when the completion does not belong
    /// to the generation currently in flight.
    pub fn complete(&mut self, completion: Completion, notifier: &mut dyn Notifier) -> bool {
        match &self.in_flight {
            Some(in_flight) if in_flight.id == completion.id => {}
            _ => {
                tracing::debug!(id = completion.id, "stale completion ignored");
                return false;
            }
        }

        self.in_flight = None;
        self.state.result = template::render_request(&completion.request);
        self.state.is_generating = false;
        tracing::info!(id = completion.id, chars = self.state.result.chars().count(), "generation finished");
        notifier.notify(NoticeKind::Success, "Content generated successfully!");
        true
    }

    /// Copy the current result. A missing result is a no-op.
    pub fn copy_result(&self, clipboard: &mut dyn Clipboard, notifier: &mut dyn Notifier) -> CopyOutcome {
        if self.state.result.is_empty() {
            return CopyOutcome::Skipped;
        }

        match clipboard.write_text(&self.state.result) {
            Ok(()) => {
                notifier.notify(NoticeKind::Success, "Copied to clipboard!");
                CopyOutcome::Copied
            }
            Err(e) => {
                tracing::warn!(error = %e, "clipboard write failed");
                notifier.notify(NoticeKind::Error, &format!("Could not copy to clipboard: {}", e));
                CopyOutcome::Failed
            }
        }
    }
}

impl<E> Generator<E> {
    /// Cancel any pending timer. No completion is delivered afterwards.
    pub fn teardown(&mut self) {
        self.shutdown.cancel();
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.task.cancel();
            tracing::debug!(id = in_flight.id, "generator torn down mid-generation");
        }
    }
}

impl<E> Drop for Generator<E> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClipboardError;
    use crate::notify::Notice;
    use tokio::sync::mpsc::{self, UnboundedReceiver};
    use tokio::time::{timeout, Instant};

    #[derive(Default)]
    struct MemoryClipboard {
        writes: Vec<String>,
        fail: bool,
    }

    impl Clipboard for MemoryClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Unavailable("memory".to_string()));
            }
            self.writes.push(text.to_string());
            Ok(())
        }
    }

    fn generator() -> (Generator<Completion>, UnboundedReceiver<Completion>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Generator::new(tx, DEFAULT_GENERATION_LATENCY), rx)
    }

    async fn generate(
        generator: &mut Generator<Completion>,
        rx: &mut UnboundedReceiver<Completion>,
        notices: &mut Vec<Notice>,
    ) {
        generator.submit(notices).unwrap();
        let completion = rx.recv().await.unwrap();
        assert!(generator.complete(completion, notices));
    }

    #[test]
    fn test_request_rejects_blank_prompt() {
        assert_eq!(
            GenerationRequest::new(ContentType::Blog, Tone::Casual, " \t\n"),
            Err(GeneratorError::EmptyPrompt)
        );
        let request = GenerationRequest::new(ContentType::Blog, Tone::Casual, " ok ").unwrap();
        assert_eq!(request.prompt(), " ok ");
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_state() {
        let (generator, _rx) = generator();
        assert_eq!(generator.state(), &UiState::default());
        assert_eq!(generator.state().content_type, ContentType::Social);
        assert_eq!(generator.state().tone, Tone::Professional);
        assert_eq!(generator.phase(), Phase::Idle);
        assert!(generator.trigger_enabled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_prompt_stays_idle_with_notice() {
        let (mut generator, mut rx) = generator();
        let mut notices: Vec<Notice> = Vec::new();

        for prompt in ["", "   "] {
            generator.set_prompt(prompt);
            assert_eq!(generator.submit(&mut notices), Err(GeneratorError::EmptyPrompt));
            assert_eq!(generator.phase(), Phase::Idle);
            assert!(generator.trigger_enabled());
        }

        assert_eq!(notices.len(), 2);
        assert!(notices.iter().all(|n| n.kind == NoticeKind::Error && n.message == "Please enter a prompt"));
        assert!(timeout(Duration::from_secs(10), rx.recv()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_prompt_keeps_previous_result() {
        let (mut generator, mut rx) = generator();
        let mut notices: Vec<Notice> = Vec::new();
        generator.set_prompt("first");
        generate(&mut generator, &mut rx, &mut notices).await;
        let before = generator.state().clone();

        generator.set_prompt("  ");
        assert!(generator.submit(&mut notices).is_err());
        assert_eq!(generator.phase(), Phase::Generated);
        assert_eq!(generator.state().result, before.result);
    }

    #[tokio::test(start_paused = true)]
    async fn test_social_generation_cycle() {
        let (mut generator, mut rx) = generator();
        let mut notices: Vec<Notice> = Vec::new();
        generator.set_content_type(ContentType::Social);
        generator.set_tone(Tone::Professional);
        generator.set_prompt("healthy morning routines");

        let start = Instant::now();
        let id = generator.submit(&mut notices).unwrap();
        assert_eq!(generator.phase(), Phase::Generating);
        assert!(!generator.trigger_enabled());
        assert!(generator.state().result.is_empty());

        // Nothing before the latency has elapsed.
        assert!(timeout(Duration::from_millis(1999), rx.recv()).await.is_err());
        assert_eq!(generator.phase(), Phase::Generating);

        let completion = rx.recv().await.unwrap();
        assert!(Instant::now() - start >= DEFAULT_GENERATION_LATENCY);
        assert_eq!(completion.id, id);
        assert!(generator.complete(completion, &mut notices));

        assert_eq!(generator.phase(), Phase::Generated);
        assert!(generator.trigger_enabled());
        let result = &generator.state().result;
        assert!(result.contains("healthy morning routines"));
        let first_content_line = result.lines().nth(2).unwrap();
        assert!(first_content_line.starts_with("🌟 "));
        assert_eq!(result.lines().last(), Some("#ContentCreation #AI #Digital"));
        assert_eq!(
            notices,
            vec![Notice {
                kind: NoticeKind::Success,
                message: "Content generated successfully!".to_string()
            }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_resubmit_while_generating_is_rejected() {
        let (mut generator, mut rx) = generator();
        let mut notices: Vec<Notice> = Vec::new();
        generator.set_prompt("launch");

        generator.submit(&mut notices).unwrap();
        assert_eq!(generator.submit(&mut notices), Err(GeneratorError::AlreadyGenerating));
        assert!(notices.is_empty());

        let completion = rx.recv().await.unwrap();
        assert!(generator.complete(completion, &mut notices));
        assert!(timeout(Duration::from_secs(10), rx.recv()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_trigger_reenabled_once_per_cycle() {
        let (mut generator, mut rx) = generator();
        let mut notices: Vec<Notice> = Vec::new();
        generator.set_prompt("launch");

        let mut enabled_history = vec![generator.trigger_enabled()];
        generator.submit(&mut notices).unwrap();
        enabled_history.push(generator.trigger_enabled());
        let completion = rx.recv().await.unwrap();
        enabled_history.push(generator.trigger_enabled());
        generator.complete(completion, &mut notices);
        enabled_history.push(generator.trigger_enabled());

        assert_eq!(enabled_history, vec![true, false, false, true]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_request_is_snapshotted_at_submit() {
        let (mut generator, mut rx) = generator();
        let mut notices: Vec<Notice> = Vec::new();
        generator.set_content_type(ContentType::Blog);
        generator.set_prompt("original topic");
        generator.submit(&mut notices).unwrap();

        generator.set_content_type(ContentType::Ad);
        generator.set_prompt("edited while waiting");

        let completion = rx.recv().await.unwrap();
        generator.complete(completion, &mut notices);

        let result = &generator.state().result;
        assert!(result.contains("original topic"));
        assert!(result.contains("## Key Points"));
        assert_eq!(generator.state().prompt, "edited while waiting");
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_completion_is_ignored() {
        let (mut generator, _rx) = generator();
        let mut notices: Vec<Notice> = Vec::new();
        generator.set_prompt("launch");
        let id = generator.submit(&mut notices).unwrap();

        let stale = Completion {
            id: id + 41,
            request: GenerationRequest::new(ContentType::Email, Tone::Formal, "other").unwrap(),
        };
        assert!(!generator.complete(stale, &mut notices));
        assert_eq!(generator.phase(), Phase::Generating);
        assert!(notices.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_suppresses_completion() {
        let (mut generator, mut rx) = generator();
        let mut notices: Vec<Notice> = Vec::new();
        generator.set_prompt("launch");
        generator.submit(&mut notices).unwrap();

        tokio::time::sleep(Duration::from_millis(500)).await;
        drop(generator);

        // Every sender is gone without a completion having been sent.
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_cancels_timer_while_alive() {
        let (mut generator, mut rx) = generator();
        let mut notices: Vec<Notice> = Vec::new();
        generator.set_prompt("launch");
        generator.submit(&mut notices).unwrap();

        generator.teardown();
        assert!(timeout(Duration::from_secs(10), rx.recv()).await.is_err());
        assert!(generator.in_flight.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_without_result_is_noop() {
        let (generator, _rx) = generator();
        let mut clipboard = MemoryClipboard::default();
        let mut notices: Vec<Notice> = Vec::new();

        assert_eq!(generator.copy_result(&mut clipboard, &mut notices), CopyOutcome::Skipped);
        assert!(clipboard.writes.is_empty());
        assert!(notices.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_writes_exact_result() {
        let (mut generator, mut rx) = generator();
        let mut notices: Vec<Notice> = Vec::new();
        generator.set_prompt("launch");
        generate(&mut generator, &mut rx, &mut notices).await;
        notices.clear();

        let mut clipboard = MemoryClipboard::default();
        assert_eq!(generator.copy_result(&mut clipboard, &mut notices), CopyOutcome::Copied);
        assert_eq!(clipboard.writes, vec![generator.state().result.clone()]);
        assert_eq!(notices[0].message, "Copied to clipboard!");
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_failure_is_a_notice() {
        let (mut generator, mut rx) = generator();
        let mut notices: Vec<Notice> = Vec::new();
        generator.set_prompt("launch");
        generate(&mut generator, &mut rx, &mut notices).await;
        notices.clear();

        let mut clipboard = MemoryClipboard {
            fail: true,
            ..Default::default()
        };
        assert_eq!(generator.copy_result(&mut clipboard, &mut notices), CopyOutcome::Failed);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Error);
        assert!(notices[0].message.starts_with("Could not copy to clipboard"));
        assert_eq!(generator.phase(), Phase::Generated);
    }
}
