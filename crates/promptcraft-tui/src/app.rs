use std::time::{Duration, Instant};

use promptcraft_core::{
    Clipboard, Completion, ContentType, CopyOutcome, Generator, NoticeBoard, Reveal,
    ScrollRequest, Tone, GENERATOR_REGION,
};
use tokio::sync::mpsc::UnboundedSender;

use crate::tui::AppEvent;

/// Rows taken by the hero section at the top of the page.
pub const HERO_HEIGHT: u16 = 20;

/// Rows the page moves per tick while scrolling to a target.
const SCROLL_STEP: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    StartButton,
    ContentType,
    Tone,
    Prompt,
    Generate,
    Copy,
}

/// Startup values resolved from the config file and command line.
#[derive(Debug, Clone)]
pub struct Settings {
    pub content_type: ContentType,
    pub tone: Tone,
    pub generation_latency: Duration,
    pub scroll_delay: Duration,
    pub notice_ttl: Duration,
}

/// Convert a character index to a byte index for UTF-8 safe string operations
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

pub struct App {
    pub should_quit: bool,
    pub focus: Focus,

    // Generator view
    pub generator: Generator<AppEvent>,
    pub prompt_cursor: usize, // char index into the prompt
    pub output_scroll: u16,

    // Landing page
    pub reveal: Reveal<AppEvent>,
    pub page_scroll: u16,
    pub scroll_target: Option<u16>,

    pub notices: NoticeBoard,
    pub clipboard: Box<dyn Clipboard>,

    // Animation state
    pub animation_frame: u8,
}

impl App {
    pub fn new(
        settings: &Settings,
        events: UnboundedSender<AppEvent>,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        let generator = Generator::new(events.clone(), settings.generation_latency)
            .with_defaults(settings.content_type, settings.tone);
        let reveal = Reveal::new(events, settings.scroll_delay);

        Self {
            should_quit: false,
            focus: Focus::StartButton,

            generator,
            prompt_cursor: 0,
            output_scroll: 0,

            reveal,
            page_scroll: 0,
            scroll_target: None,

            notices: NoticeBoard::new(settings.notice_ttl),
            clipboard,

            animation_frame: 0,
        }
    }

    pub fn generator_visible(&self) -> bool {
        self.reveal.is_visible()
    }

    /// "Start Creating": show the generator and scroll to it.
    pub fn get_started(&mut self) {
        if self.reveal.activate() {
            self.focus = Focus::ContentType;
        }
    }

    pub fn handle_scroll_request(&mut self, request: ScrollRequest) {
        if request.target == GENERATOR_REGION && self.generator_visible() {
            self.scroll_target = Some(HERO_HEIGHT);
        } else {
            tracing::debug!(region = request.target, "scroll target not present, ignoring");
        }
    }

    /// Advance animations and expire notices.
    pub fn tick(&mut self, now: Instant) {
        if self.generator.state().is_generating {
            self.animation_frame = self.animation_frame.wrapping_add(1);
        }

        if let Some(target) = self.scroll_target {
            if self.page_scroll < target {
                self.page_scroll = (self.page_scroll + SCROLL_STEP).min(target);
            } else if self.page_scroll > target {
                self.page_scroll = self.page_scroll.saturating_sub(SCROLL_STEP).max(target);
            }
            if self.page_scroll == target {
                self.scroll_target = None;
            }
        }

        self.notices.prune(now);
    }

    pub fn scroll_page_down(&mut self) {
        if self.generator_visible() {
            self.scroll_target = None;
            self.page_scroll = (self.page_scroll + HERO_HEIGHT / 2).min(HERO_HEIGHT);
        }
    }

    pub fn scroll_page_up(&mut self) {
        self.scroll_target = None;
        self.page_scroll = self.page_scroll.saturating_sub(HERO_HEIGHT / 2);
    }

    /// Stops once the last line of the result reaches the top of the pane.
    pub fn scroll_output_down(&mut self) {
        let lines = self.generator.state().result.lines().count();
        let max = u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX);
        self.output_scroll = self.output_scroll.saturating_add(1).min(max);
    }

    pub fn scroll_output_up(&mut self) {
        self.output_scroll = self.output_scroll.saturating_sub(1);
    }

    // Generator actions

    pub fn generate(&mut self) {
        if !self.generator_visible() {
            return;
        }
        if self.generator.submit(&mut self.notices).is_ok() {
            self.animation_frame = 0;
        }
    }

    pub fn on_generated(&mut self, completion: Completion) {
        if self.generator.complete(completion, &mut self.notices) {
            self.output_scroll = 0;
        }
    }

    pub fn copy_result(&mut self) -> CopyOutcome {
        self.generator
            .copy_result(self.clipboard.as_mut(), &mut self.notices)
    }

    pub fn next_content_type(&mut self) {
        let next = self.generator.state().content_type.next();
        self.generator.set_content_type(next);
    }

    pub fn prev_content_type(&mut self) {
        let prev = self.generator.state().content_type.prev();
        self.generator.set_content_type(prev);
    }

    pub fn next_tone(&mut self) {
        let next = self.generator.state().tone.next();
        self.generator.set_tone(next);
    }

    pub fn prev_tone(&mut self) {
        let prev = self.generator.state().tone.prev();
        self.generator.set_tone(prev);
    }

    // Focus

    fn focus_order(&self) -> Vec<Focus> {
        if !self.generator_visible() {
            return vec![Focus::StartButton];
        }
        let mut order = vec![
            Focus::StartButton,
            Focus::ContentType,
            Focus::Tone,
            Focus::Prompt,
            Focus::Generate,
        ];
        if !self.generator.state().result.is_empty() {
            order.push(Focus::Copy);
        }
        order
    }

    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let i = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(i + 1) % order.len()];
    }

    pub fn focus_prev(&mut self) {
        let order = self.focus_order();
        let i = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(i + order.len() - 1) % order.len()];
    }

    // Prompt editing

    pub fn insert_char(&mut self, c: char) {
        let cursor = self.prompt_cursor;
        let prompt = self.generator.prompt_mut();
        let byte_pos = char_to_byte_index(prompt, cursor);
        prompt.insert(byte_pos, c);
        self.prompt_cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.prompt_cursor > 0 {
            self.prompt_cursor -= 1;
            let cursor = self.prompt_cursor;
            let prompt = self.generator.prompt_mut();
            let byte_pos = char_to_byte_index(prompt, cursor);
            prompt.remove(byte_pos);
        }
    }

    pub fn delete(&mut self) {
        let cursor = self.prompt_cursor;
        let prompt = self.generator.prompt_mut();
        if cursor < prompt.chars().count() {
            let byte_pos = char_to_byte_index(prompt, cursor);
            prompt.remove(byte_pos);
        }
    }

    pub fn cursor_left(&mut self) {
        self.prompt_cursor = self.prompt_cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        let char_count = self.generator.state().prompt.chars().count();
        self.prompt_cursor = (self.prompt_cursor + 1).min(char_count);
    }

    pub fn cursor_home(&mut self) {
        self.prompt_cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.prompt_cursor = self.generator.state().prompt.chars().count();
    }

    pub fn clear_prompt(&mut self) {
        self.generator.set_prompt(String::new());
        self.prompt_cursor = 0;
    }

    /// Stop timers before the event loop goes away.
    pub fn shutdown(&mut self) {
        self.generator.teardown();
        self.reveal.teardown();
    }
}
