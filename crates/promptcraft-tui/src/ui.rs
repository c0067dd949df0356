use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use promptcraft_core::{NoticeKind, Phase};

use crate::app::{App, Focus, HERO_HEIGHT};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const PROMPT_PLACEHOLDER: &str =
    "Describe what content you want to create... (e.g., 'Write a post about healthy morning routines')";

const FEATURES: [(&str, &str, &str); 3] = [
    ("✨", "Multiple Formats", "Social posts, blogs, scripts, ads, and more"),
    ("🎯", "Tone Control", "Adjust style from casual to professional"),
    ("⚡", "Instant Results", "Generate content in seconds, not hours"),
];

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    // Main layout: header, body, footer
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header_area);

    if app.generator_visible() {
        let hero_rows = HERO_HEIGHT.saturating_sub(app.page_scroll);
        let [hero_area, generator_area] = Layout::vertical([
            Constraint::Length(hero_rows),
            Constraint::Min(0),
        ])
        .areas(body_area);

        render_hero(app, frame, hero_area);
        render_generator(app, frame, generator_area);
    } else {
        render_hero(app, frame, body_area);
    }

    render_footer(app, frame, footer_area);
    render_notices(app, frame, body_area);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(" PromptCraft ", Style::default().fg(Color::Magenta).bold()),
        Span::styled("AI content studio", Style::default().fg(Color::Gray)),
        Span::raw(" "),
        Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let header = Paragraph::new(title).style(Style::default().bg(Color::Black));
    frame.render_widget(header, area);
}

fn hero_lines(start_focused: bool) -> Vec<Line<'static>> {
    let accent = Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD);
    let button_style = if start_focused {
        Style::default().bg(Color::Magenta).fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![
        Line::from(Span::styled(
            " ✨ AI-Powered Content Creation ",
            Style::default().fg(Color::Cyan),
        )),
        Line::default(),
        Line::from(Span::styled("Create Amazing Content", accent)),
        Line::from(Span::styled("in Seconds", accent)),
        Line::default(),
        Line::from(Span::styled(
            "Generate high-quality social posts, blogs, scripts, and more with our advanced AI assistant.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "Save time and boost creativity.",
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
        Line::from(Span::styled("  ⚡ Start Creating  ", button_style)),
        Line::default(),
    ];

    for (icon, title, description) in FEATURES {
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", icon)),
            Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(Span::styled(
            description,
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::default());
    }

    lines
}

fn render_hero(app: &App, frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }

    let lines = hero_lines(app.focus == Focus::StartButton);

    // Centre vertically only while the hero owns the whole body
    let top_padding = if app.generator_visible() {
        0
    } else {
        area.height.saturating_sub(lines.len() as u16) / 2
    };

    let mut text: Vec<Line> = vec![Line::default(); top_padding as usize];
    text.extend(lines);

    let hero = Paragraph::new(Text::from(text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .scroll((app.page_scroll, 0));
    frame.render_widget(hero, area);
}

fn render_generator(app: &App, frame: &mut Frame, area: Rect) {
    let [title_area, panes_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "AI Content Generator",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Tell us what you need, and we'll create it instantly",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    let [input_area, output_area] = Layout::horizontal([
        Constraint::Percentage(50),
        Constraint::Percentage(50),
    ])
    .areas(panes_area);

    render_input_pane(app, frame, input_area);
    render_output_pane(app, frame, output_area);
}

fn focus_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn render_input_pane(app: &App, frame: &mut Frame, area: Rect) {
    let [type_area, tone_area, prompt_area, button_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(3),
    ])
    .areas(area);

    let state = app.generator.state();

    render_select(
        frame,
        type_area,
        " Content Type ",
        state.content_type.display_name(),
        app.focus == Focus::ContentType,
    );
    render_select(
        frame,
        tone_area,
        " Tone & Style ",
        state.tone.display_name(),
        app.focus == Focus::Tone,
    );

    let prompt_focused = app.focus == Focus::Prompt;
    let prompt_block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_border(prompt_focused))
        .title(" Your Prompt ");

    let prompt_text = if state.prompt.is_empty() && !prompt_focused {
        Text::from(Line::from(Span::styled(
            PROMPT_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        )))
    } else {
        prompt_with_cursor(&state.prompt, app.prompt_cursor, prompt_focused)
    };

    let prompt = Paragraph::new(prompt_text)
        .block(prompt_block)
        .wrap(Wrap { trim: false });
    frame.render_widget(prompt, prompt_area);

    render_generate_button(app, frame, button_area);
}

fn render_select(frame: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_border(focused))
        .title(title.to_string());

    let arrow_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::styled("◀ ", arrow_style),
        Span::raw(value.to_string()),
        Span::styled(" ▶", arrow_style),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Split the prompt into lines, drawing the cursor as a reversed cell.
fn prompt_with_cursor(prompt: &str, cursor: usize, focused: bool) -> Text<'static> {
    let cursor_style = Style::default().add_modifier(Modifier::REVERSED);
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut current = String::new();

    for (i, c) in prompt.chars().enumerate() {
        if focused && i == cursor {
            if !current.is_empty() {
                spans.push(Span::raw(std::mem::take(&mut current)));
            }
            if c == '\n' {
                spans.push(Span::styled(" ", cursor_style));
            } else {
                spans.push(Span::styled(c.to_string(), cursor_style));
                continue;
            }
        }

        if c == '\n' {
            if !current.is_empty() {
                spans.push(Span::raw(std::mem::take(&mut current)));
            }
            lines.push(Line::from(std::mem::take(&mut spans)));
        } else {
            current.push(c);
        }
    }

    if !current.is_empty() {
        spans.push(Span::raw(current));
    }
    if focused && cursor >= prompt.chars().count() {
        spans.push(Span::styled(" ", cursor_style));
    }
    lines.push(Line::from(spans));

    Text::from(lines)
}

fn render_generate_button(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Generate;
    let enabled = app.generator.trigger_enabled();

    let label = if enabled {
        "✨ Generate Content".to_string()
    } else {
        let frame_idx = app.animation_frame as usize % SPINNER.len();
        format!("{} Generating...", SPINNER[frame_idx])
    };

    let style = match (enabled, focused) {
        (false, _) => Style::default().fg(Color::DarkGray),
        (true, true) => Style::default().bg(Color::Magenta).fg(Color::White).add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
    };

    let button = Paragraph::new(Line::from(Span::styled(label, style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_border(focused)),
        );
    frame.render_widget(button, area);
}

fn render_output_pane(app: &App, frame: &mut Frame, area: Rect) {
    let state = app.generator.state();

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_border(app.focus == Focus::Copy))
        .title(" Generated Content ");

    // Copy control only exists once there is something to copy
    if !state.result.is_empty() {
        let copy_style = if app.focus == Focus::Copy {
            Style::default().bg(Color::Cyan).fg(Color::Black)
        } else {
            Style::default().fg(Color::Cyan)
        };
        block = block.title(
            Line::from(Span::styled(" ⧉ Copy (y) ", copy_style)).alignment(Alignment::Right),
        );
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let body = match app.generator.phase() {
        Phase::Generating => {
            let frame_idx = app.animation_frame as usize % SPINNER.len();
            let mut lines = vec![Line::default(); (inner.height / 2) as usize];
            lines.push(Line::from(Span::styled(
                SPINNER[frame_idx],
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            )));
            Paragraph::new(lines).alignment(Alignment::Center)
        }
        Phase::Generated => Paragraph::new(state.result.as_str())
            .wrap(Wrap { trim: false })
            .scroll((app.output_scroll, 0)),
        Phase::Idle => {
            let mut lines = vec![Line::default(); (inner.height / 3) as usize];
            lines.push(Line::from(Span::styled(
                "Your generated content will appear here...",
                Style::default().fg(Color::DarkGray),
            )));
            Paragraph::new(lines).alignment(Alignment::Center)
        }
    };

    frame.render_widget(body, inner);
}

fn render_notices(app: &App, frame: &mut Frame, area: Rect) {
    let width = 48.min(area.width.saturating_sub(2));
    if width < 10 {
        return;
    }

    let mut y = area.y + 1;
    for notice in app.notices.visible() {
        if y + 3 > area.y + area.height {
            break;
        }

        let (icon, color) = match notice.kind {
            NoticeKind::Success => ("✓", Color::Green),
            NoticeKind::Error => ("✗", Color::Red),
        };

        let toast_area = Rect::new(area.x + area.width - width - 1, y, width, 3);
        frame.render_widget(Clear, toast_area);

        let toast = Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", icon), Style::default().fg(color).bold()),
            Span::raw(notice.message.clone()),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
        frame.render_widget(toast, toast_area);

        y += 3;
    }
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let mode_style = if app.focus == Focus::Prompt {
        Style::default().bg(Color::Yellow).fg(Color::Black)
    } else {
        Style::default().bg(Color::Blue).fg(Color::White)
    };

    let mode_text = match (app.focus, app.generator.phase()) {
        (Focus::Prompt, _) => " EDIT ",
        (_, Phase::Generating) => " BUSY ",
        (Focus::StartButton, _) if !app.generator_visible() => " HOME ",
        _ => " CREATE ",
    };

    // Key style: dark background with bright text for visibility on both light/dark terminals
    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let label_style = Style::default().bg(Color::Black).fg(Color::White);

    let mut hints = match app.focus {
        Focus::StartButton => vec![
            Span::styled(" Enter ", key_style),
            Span::styled(" start creating ", label_style),
        ],
        Focus::ContentType | Focus::Tone => vec![
            Span::styled(" ←/→ ", key_style),
            Span::styled(" change ", label_style),
        ],
        Focus::Prompt => vec![
            Span::styled(" Enter ", key_style),
            Span::styled(" newline ", label_style),
            Span::styled(" ^U ", key_style),
            Span::styled(" clear ", label_style),
            Span::styled(" Esc ", key_style),
            Span::styled(" stop typing ", label_style),
        ],
        Focus::Generate => vec![
            Span::styled(" Enter ", key_style),
            Span::styled(" generate ", label_style),
        ],
        Focus::Copy => vec![
            Span::styled(" Enter ", key_style),
            Span::styled(" copy ", label_style),
        ],
    };

    if app.generator_visible() {
        hints.extend(vec![
            Span::styled(" ^G ", key_style),
            Span::styled(" generate ", label_style),
            Span::styled(" Tab ", key_style),
            Span::styled(" focus ", label_style),
            Span::styled(" PgUp/PgDn ", key_style),
            Span::styled(" page ", label_style),
        ]);
        if !app.generator.state().result.is_empty() && app.focus != Focus::Prompt {
            hints.extend(vec![
                Span::styled(" y ", key_style),
                Span::styled(" copy ", label_style),
            ]);
        }
    }

    if app.focus != Focus::Prompt {
        hints.extend(vec![
            Span::styled(" q ", key_style),
            Span::styled(" quit ", label_style),
        ]);
    }

    let footer_content = Line::from(
        vec![
            Span::styled(mode_text, mode_style),
            Span::styled(" ", label_style),
        ]
        .into_iter()
        .chain(hints)
        .collect::<Vec<_>>(),
    );

    let footer = Paragraph::new(footer_content).style(Style::default().bg(Color::Black));
    frame.render_widget(footer, area);
}
