pub mod clipboard;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod notify;
pub mod reveal;
pub mod template;
pub mod timer;

// Re-export main types for convenience
pub use clipboard::{Clipboard, SystemClipboard};
pub use config::Config;
pub use content::{ContentType, Tone};
pub use error::{ClipboardError, GeneratorError};
pub use generator::{Completion, CopyOutcome, GenerationRequest, Generator, Phase, UiState};
pub use notify::{Notice, NoticeBoard, NoticeKind, Notifier};
pub use reveal::{Reveal, ScrollRequest, GENERATOR_REGION};
pub use template::render;
pub use timer::DelayedTask;
