use crate::error::ClipboardError;

/// Destination for the copy action.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The desktop clipboard, via `arboard`.
///
/// The handle is opened on first use and kept afterwards; on X11 the copied
/// text only stays available while its owner is alive.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?,
        };

        let result = clipboard.set_text(text);
        self.inner = Some(clipboard);
        result?;

        tracing::debug!(bytes = text.len(), "copied to clipboard");
        Ok(())
    }
}
