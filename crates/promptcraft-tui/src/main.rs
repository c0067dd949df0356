use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use promptcraft_core::{template, Config, ContentType, GenerationRequest, SystemClipboard, Tone};

mod app;
mod handler;
mod logging;
mod tui;
mod ui;

use app::{App, Settings};
use tui::{EventHandler, Tui};

#[derive(Parser)]
#[command(name = "promptcraft")]
#[command(version, about = "Landing page and simulated AI content generator for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Initial content type (social, blog, script, ad, email, caption)
    #[arg(long, value_parser = parse_content_type, global = true)]
    content_type: Option<ContentType>,

    /// Initial tone (professional, casual, friendly, formal, funny, inspiring)
    #[arg(long, value_parser = parse_tone, global = true)]
    tone: Option<Tone>,

    /// Simulated generation latency in milliseconds
    #[arg(long)]
    latency_ms: Option<u64>,

    /// Write logs here instead of the data directory
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print generated content for a prompt without starting the UI
    Render {
        /// What the content should be about
        prompt: String,
    },
    /// Show the config file location and effective settings
    Config {
        /// Write a config file with the built-in defaults if none exists
        #[arg(long)]
        init: bool,
    },
}

fn parse_content_type(s: &str) -> Result<ContentType, String> {
    ContentType::from_str(s).ok_or_else(|| {
        let known: Vec<&str> = ContentType::ALL.iter().map(|t| t.as_str()).collect();
        format!("unknown content type '{}' (expected one of: {})", s, known.join(", "))
    })
}

fn parse_tone(s: &str) -> Result<Tone, String> {
    Tone::from_str(s).ok_or_else(|| {
        let known: Vec<&str> = Tone::ALL.iter().map(|t| t.as_str()).collect();
        format!("unknown tone '{}' (expected one of: {})", s, known.join(", "))
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::new(), Some(e)),
    };

    let logging = init_logging(cli.log_file.as_deref(), config.log_level());

    if let Some(e) = config_error {
        if logging {
            tracing::warn!(error = %e, "could not read config file, using defaults");
        } else {
            eprintln!("warning: could not read config file, using defaults: {:#}", e);
        }
    }

    let settings = Settings {
        content_type: cli.content_type.unwrap_or_else(|| config.content_type()),
        tone: cli.tone.unwrap_or_else(|| config.tone()),
        generation_latency: cli
            .latency_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| config.generation_latency()),
        scroll_delay: config.scroll_delay(),
        notice_ttl: config.notice_ttl(),
    };

    match cli.command {
        None => run_tui(settings).await,
        Some(Commands::Render { prompt }) => render_once(&settings, prompt),
        Some(Commands::Config { init }) => show_config(&config, &settings, init),
    }
}

/// Logging is best effort: a bad log location only costs the log.
fn init_logging(log_file: Option<&Path>, level: &str) -> bool {
    let result = match log_file {
        Some(path) => logging::init(path, level),
        None => logging::default_log_path().and_then(|path| logging::init(&path, level)),
    };

    match result {
        Ok(()) => true,
        Err(e) => {
            eprintln!("warning: logging disabled: {:#}", e);
            false
        }
    }
}

async fn run_tui(settings: Settings) -> Result<()> {
    tracing::info!(?settings, "starting ui");
    tui::install_panic_hook();
    let mut terminal = tui::init()?;

    let mut events = EventHandler::new();
    let mut app = App::new(&settings, events.sender(), Box::new(SystemClipboard::new()));

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    app.shutdown();
    tui::restore()?;
    tracing::info!("ui closed");
    result
}

async fn run_loop(terminal: &mut Tui, app: &mut App, events: &mut EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        match events.next().await {
            Some(event) => handler::handle_event(app, event)?,
            None => break,
        }
    }
    Ok(())
}

fn render_once(settings: &Settings, prompt: String) -> Result<()> {
    let request = GenerationRequest::new(settings.content_type, settings.tone, prompt)?;
    println!("{}", template::render_request(&request));
    Ok(())
}

fn show_config(config: &Config, settings: &Settings, init: bool) -> Result<()> {
    let path = Config::get_config_path()?;

    if init {
        if path.exists() {
            println!("Config already exists at {}", path.display());
        } else {
            let written = Config::with_defaults().save()?;
            println!("Wrote default config to {}", written.display());
        }
    }

    println!("Config file:        {}{}", path.display(), if path.exists() { "" } else { " (not found)" });
    println!("Content type:       {} ({})", settings.content_type.as_str(), settings.content_type.display_name());
    println!("Tone:               {} ({})", settings.tone.as_str(), settings.tone.display_name());
    println!("Generation latency: {} ms", settings.generation_latency.as_millis());
    println!("Scroll delay:       {} ms", settings.scroll_delay.as_millis());
    println!("Notice lifetime:    {} ms", settings.notice_ttl.as_millis());
    println!("Log level:          {}", config.log_level());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_render() {
        let cli = Cli::try_parse_from([
            "promptcraft",
            "render",
            "--content-type",
            "blog",
            "--tone",
            "Funny",
            "tax tips",
        ])
        .unwrap();
        assert_eq!(cli.content_type, Some(ContentType::Blog));
        assert_eq!(cli.tone, Some(Tone::Funny));
        assert!(matches!(cli.command, Some(Commands::Render { ref prompt }) if prompt == "tax tips"));
    }

    #[test]
    fn test_cli_rejects_unknown_tone() {
        assert!(Cli::try_parse_from(["promptcraft", "--tone", "sarcastic"]).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_unusable_log_path_does_not_abort() {
        let path = Path::new("/dev/null/promptcraft/promptcraft.log");
        assert!(!init_logging(Some(path), "info"));
    }

    #[test]
    fn test_render_once_rejects_blank_prompt() {
        let settings = Settings {
            content_type: ContentType::Social,
            tone: Tone::Professional,
            generation_latency: Duration::from_millis(2000),
            scroll_delay: Duration::from_millis(100),
            notice_ttl: Duration::from_millis(4000),
        };
        assert!(render_once(&settings, "   ".to_string()).is_err());
        assert!(render_once(&settings, "launch".to_string()).is_ok());
    }
}
