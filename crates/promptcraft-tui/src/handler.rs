use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::app::{App, Focus};
use crate::tui::AppEvent;

pub fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Mouse(mouse) => handle_mouse(app, mouse),
        AppEvent::Resize(_, _) => {}
        AppEvent::Tick => app.tick(Instant::now()),
        AppEvent::Generated(completion) => app.on_generated(completion),
        AppEvent::Scroll(request) => app.handle_scroll_request(request),
    }
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Global keys that work in any mode
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => {
                app.should_quit = true;
                return;
            }
            KeyCode::Char('g') => {
                if app.generator.trigger_enabled() {
                    app.generate();
                }
                return;
            }
            KeyCode::Char('u') if app.focus == Focus::Prompt => {
                app.clear_prompt();
                return;
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return;
        }
        KeyCode::PageDown => {
            app.scroll_page_down();
            return;
        }
        KeyCode::PageUp => {
            app.scroll_page_up();
            return;
        }
        _ => {}
    }

    if app.focus == Focus::Prompt {
        handle_prompt_editing(app, key);
        return;
    }

    // Keys shared by every non-editing control
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('y') => {
            app.copy_result();
            return;
        }
        KeyCode::Char('j') | KeyCode::Down if app.focus != Focus::StartButton => {
            app.scroll_output_down();
            return;
        }
        KeyCode::Char('k') | KeyCode::Up if app.focus != Focus::StartButton => {
            app.scroll_output_up();
            return;
        }
        _ => {}
    }

    let activate = matches!(key.code, KeyCode::Enter | KeyCode::Char(' '));

    match app.focus {
        Focus::StartButton => match key.code {
            _ if activate => app.get_started(),
            KeyCode::Char('j') | KeyCode::Down => app.scroll_page_down(),
            KeyCode::Char('k') | KeyCode::Up => app.scroll_page_up(),
            _ => {}
        },
        Focus::ContentType => match key.code {
            KeyCode::Char('h') | KeyCode::Left => app.prev_content_type(),
            KeyCode::Char('l') | KeyCode::Right => app.next_content_type(),
            _ if activate => app.next_content_type(),
            _ => {}
        },
        Focus::Tone => match key.code {
            KeyCode::Char('h') | KeyCode::Left => app.prev_tone(),
            KeyCode::Char('l') | KeyCode::Right => app.next_tone(),
            _ if activate => app.next_tone(),
            _ => {}
        },
        Focus::Generate => {
            // The button is disabled while a generation is in flight
            if activate && app.generator.trigger_enabled() {
                app.generate();
            }
        }
        Focus::Copy => {
            if activate {
                app.copy_result();
            }
        }
        Focus::Prompt => {}
    }
}

fn handle_prompt_editing(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.focus = Focus::Generate,
        KeyCode::Enter => app.insert_char('\n'),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Delete => app.delete(),
        KeyCode::Left => app.cursor_left(),
        KeyCode::Right => app.cursor_right(),
        KeyCode::Home => app.cursor_home(),
        KeyCode::End => app.cursor_end(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.insert_char(c),
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollDown => {
            if app.focus == Focus::StartButton {
                app.scroll_page_down();
            } else {
                app.scroll_output_down();
            }
        }
        MouseEventKind::ScrollUp => {
            if app.focus == Focus::StartButton {
                app.scroll_page_up();
            } else {
                app.scroll_output_up();
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Settings;
    use promptcraft_core::{Clipboard, ClipboardError, ContentType, Phase, Tone};
    use std::time::Duration;
    use tokio::sync::mpsc;

    struct NullClipboard;

    impl Clipboard for NullClipboard {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable("none".to_string()))
        }
    }

    fn app() -> (App, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let settings = Settings {
            content_type: ContentType::Social,
            tone: Tone::Professional,
            generation_latency: Duration::from_millis(2000),
            scroll_delay: Duration::from_millis(100),
            notice_ttl: Duration::from_millis(4000),
        };
        (App::new(&settings, tx, Box::new(NullClipboard)), rx)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    #[tokio::test(start_paused = true)]
    async fn test_enter_on_start_reveals_generator() {
        let (mut app, _rx) = app();
        press(&mut app, KeyCode::Enter);
        assert!(app.generator_visible());
        assert_eq!(app.focus, Focus::ContentType);
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_in_prompt_does_not_quit() {
        let (mut app, _rx) = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Prompt);

        for c in "yq".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert!(!app.should_quit);
        assert_eq!(app.generator.state().prompt, "yq\n");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus, Focus::Generate);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_button_disabled_while_busy() {
        let (mut app, mut rx) = app();
        press(&mut app, KeyCode::Enter);
        app.generator.set_prompt("launch");
        app.focus = Focus::Generate;

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.generator.phase(), Phase::Generating);
        press(&mut app, KeyCode::Enter);
        ctrl(&mut app, 'g');

        let mut completions = 0;
        while let Ok(Some(event)) = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await {
            if matches!(event, AppEvent::Generated(_)) {
                completions += 1;
            }
            handle_event(&mut app, event).unwrap();
        }
        assert_eq!(completions, 1);
        assert_eq!(app.generator.phase(), Phase::Generated);
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_failure_is_not_fatal() {
        let (mut app, mut rx) = app();
        press(&mut app, KeyCode::Enter);
        app.generator.set_prompt("launch");
        ctrl(&mut app, 'g');
        while let Some(event) = rx.recv().await {
            let done = matches!(event, AppEvent::Generated(_));
            handle_event(&mut app, event).unwrap();
            if done {
                break;
            }
        }

        app.focus = Focus::Tone;
        press(&mut app, KeyCode::Char('y'));
        assert!(!app.should_quit);
        let last = app.notices.visible().last().unwrap();
        assert!(last.message.starts_with("Could not copy to clipboard"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_selectors_respond_to_arrows() {
        let (mut app, _rx) = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.generator.state().content_type, ContentType::Blog);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.generator.state().tone, Tone::Inspiring);
    }
}
