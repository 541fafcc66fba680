// src/tui/app.rs — TUI application state, event loop, and rendering.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame, Terminal,
};

use crate::backend::DocumentBackend;
use crate::core::{update, AppEvent, AppState, Effect, Notice};
use crate::infra::config::{Config, ModelsConfig};

use super::theme::Theme;
use super::widgets;

// ── Input modes ──────────────────────────────────────────────────

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Question,
    PdfPath,
}

// ── App state ────────────────────────────────────────────────────

pub struct App {
    state: AppState,
    models: ModelsConfig,
    mode: InputMode,
    input: String,
    /// Cursor into `models.available` while the picker overlay is open.
    picker: Option<usize>,
    show_welcome: bool,
    /// Spinner label while a request is in flight.
    busy: Option<&'static str>,
    /// Request produced by the last event, executed on the next loop turn
    /// so the busy frame is drawn first.
    pending: Option<Effect>,
    /// Lines scrolled up from the bottom of the chat pane.
    scroll: u16,
}

enum Flow {
    Continue,
    Quit,
}

impl App {
    fn new(state: AppState, models: ModelsConfig) -> Self {
        Self {
            state,
            models,
            mode: InputMode::Question,
            input: String::new(),
            picker: None,
            show_welcome: true,
            busy: None,
            pending: None,
            scroll: 0,
        }
    }

    fn apply(&mut self, event: AppEvent) {
        if let Some(effect) = update(&mut self.state, event) {
            self.busy = Some(match &effect {
                Effect::LoadDocument { .. } => "Processing document…",
                Effect::AskBackend { .. } => "Waiting for the answer…",
            });
            self.pending = Some(effect);
        }
        self.scroll = 0;
    }

    /// Switch to the next (+1) or previous (-1) session tab, wrapping.
    fn select_adjacent(&mut self, step: isize) {
        let sessions = self.state.store.sessions();
        let len = sessions.len() as isize;
        let current = self
            .state
            .store
            .position(self.state.store.active_key())
            .unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(len) as usize;
        let key = sessions[next].key.clone();
        self.apply(AppEvent::SelectSession { key });
    }

    fn open_picker(&mut self) {
        if self.models.available.is_empty() {
            self.state.notice = Some(Notice::Warning("No models configured.".into()));
            return;
        }
        let current = self.state.store.active().selected_model.clone();
        let cursor = self
            .models
            .available
            .iter()
            .position(|e| e.id == current)
            .unwrap_or(0);
        self.picker = Some(cursor);
    }

    fn submit(&mut self) {
        let key = self.state.store.active_key().to_string();
        let text = std::mem::take(&mut self.input);
        let event = match self.mode {
            InputMode::Question => AppEvent::SubmitQuestion {
                key,
                question: text,
            },
            InputMode::PdfPath => AppEvent::SubmitUpload { key, path: text },
        };
        self.mode = InputMode::Question;
        self.apply(event);
    }
}

// ── Public entry point ───────────────────────────────────────────

/// Launch the chat TUI. Blocks until the user quits (Ctrl-C).
pub async fn run_chat(
    backend: &dyn DocumentBackend,
    config: &Config,
    model_override: Option<&str>,
) -> anyhow::Result<()> {
    let default_model = model_override.unwrap_or(&config.models.default);
    let mut app = App::new(AppState::new(default_model), config.models.clone());

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend_term = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend_term)?;

    let result = run_event_loop(&mut terminal, &mut app, backend).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    backend: &dyn DocumentBackend,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        // A pending request blocks the loop until the response arrives;
        // the busy frame above was drawn first.
        if let Some(effect) = app.pending.take() {
            run_effect(app, backend, effect).await;
            // Drop keys typed while the request was in flight
            while event::poll(Duration::ZERO)? {
                let _ = event::read()?;
            }
            continue;
        }

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if matches!(handle_key(app, key), Flow::Quit) {
                    return Ok(());
                }
            }
        }
    }
}

/// Execute one backend request and feed the outcome back as an event.
async fn run_effect(app: &mut App, backend: &dyn DocumentBackend, effect: Effect) {
    let event = match effect {
        Effect::LoadDocument { key, path, model } => match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let file_name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("document.pdf");
                match backend
                    .upload_document(file_name, bytes, Some(model.as_str()))
                    .await
                {
                    Ok(outcome) => AppEvent::DocumentLoaded {
                        key,
                        backend_session_id: outcome.session_id,
                        summary: outcome.summary,
                    },
                    Err(e) => AppEvent::RequestFailed {
                        key,
                        message: e.to_string(),
                    },
                }
            }
            Err(e) => AppEvent::RequestFailed {
                key,
                message: format!("Could not read {}: {}", path.display(), e),
            },
        },
        Effect::AskBackend {
            key,
            backend_session_id,
            question,
            model,
        } => match backend
            .ask_question(&backend_session_id, &question, Some(model.as_str()))
            .await
        {
            Ok(answer) => AppEvent::DocumentAnswered {
                key,
                question,
                answer,
            },
            Err(e) => AppEvent::RequestFailed {
                key,
                message: e.to_string(),
            },
        },
    };

    app.busy = None;
    app.apply(event);
}

// ── Key handling ─────────────────────────────────────────────────

fn handle_key(app: &mut App, key: KeyEvent) -> Flow {
    if app.show_welcome {
        app.show_welcome = false;
        return Flow::Continue;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Flow::Quit;
    }

    if app.picker.is_some() {
        handle_picker_key(app, key);
        return Flow::Continue;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('n') => app.apply(AppEvent::CreateSession),
            KeyCode::Char('w') => {
                let key = app.state.store.active_key().to_string();
                app.apply(AppEvent::DeleteSession { key });
            }
            KeyCode::Char('o') => {
                app.mode = InputMode::PdfPath;
                app.input.clear();
            }
            KeyCode::Char('p') => app.open_picker(),
            _ => {}
        }
        return Flow::Continue;
    }

    match key.code {
        KeyCode::Tab => app.select_adjacent(1),
        KeyCode::BackTab => app.select_adjacent(-1),
        KeyCode::Enter => app.submit(),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Esc => {
            app.mode = InputMode::Question;
            app.input.clear();
        }
        KeyCode::PageUp => app.scroll = app.scroll.saturating_add(5),
        KeyCode::PageDown => app.scroll = app.scroll.saturating_sub(5),
        KeyCode::Char(c) => app.input.push(c),
        _ => {}
    }
    Flow::Continue
}

fn handle_picker_key(app: &mut App, key: KeyEvent) {
    let Some(cursor) = app.picker else { return };
    let last = app.models.available.len().saturating_sub(1);

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.picker = Some(cursor.saturating_sub(1)),
        KeyCode::Down | KeyCode::Char('j') => app.picker = Some((cursor + 1).min(last)),
        KeyCode::Enter => {
            let model_id = app.models.available[cursor].id.clone();
            let key = app.state.store.active_key().to_string();
            app.picker = None;
            app.apply(AppEvent::SelectModel { key, model_id });
        }
        KeyCode::Esc => app.picker = None,
        _ => {}
    }
}

// ── Rendering ────────────────────────────────────────────────────

fn render(f: &mut Frame, app: &mut App) {
    if app.show_welcome {
        widgets::welcome::render(f, f.area());
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header + session tabs
            Constraint::Min(5),    // Chat pane
            Constraint::Length(1), // Status / notice line
            Constraint::Length(3), // Input
            Constraint::Length(1), // Footer / key hints
        ])
        .split(f.area());

    render_tabs(f, chunks[0], app);
    widgets::chat::render(
        f,
        chunks[1],
        app.state.store.active(),
        &app.models,
        app.scroll,
    );
    render_status(f, chunks[2], app);
    render_input(f, chunks[3], app);
    render_footer(f, chunks[4]);

    if let Some(cursor) = app.picker {
        widgets::picker::render(
            f,
            f.area(),
            &app.models,
            cursor,
            &app.state.store.active().selected_model,
        );
    }
}

fn render_tabs(f: &mut Frame, area: Rect, app: &App) {
    let active_idx = app
        .state
        .store
        .position(app.state.store.active_key())
        .unwrap_or(0);

    let mut titles: Vec<Line> = app
        .state
        .store
        .sessions()
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let label = format!(" {} ", s.display_name);
            if i == active_idx {
                Line::from(Span::styled(label, Theme::tab_active()))
            } else {
                Line::from(Span::styled(label, Theme::tab_inactive()))
            }
        })
        .collect();
    titles.push(Line::from(Span::styled(" + ^N ", Theme::text_dim())));

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(Span::styled(" papertalk ", Theme::header()))
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        )
        .select(active_idx)
        .divider(Span::styled("|", Theme::text_dim()));

    f.render_widget(tabs, area);
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(label) = app.busy {
        Line::from(Span::styled(format!(" {label}"), Theme::busy()))
    } else {
        match &app.state.notice {
            Some(Notice::Info(text)) => Line::from(Span::styled(format!(" {text}"), Theme::info())),
            Some(Notice::Warning(text)) => {
                Line::from(Span::styled(format!(" {text}"), Theme::warning()))
            }
            Some(Notice::Error(text)) => {
                Line::from(Span::styled(format!(" {text}"), Theme::error()))
            }
            None => Line::default(),
        }
    };
    f.render_widget(Paragraph::new(line), area);
}

fn render_input(f: &mut Frame, area: Rect, app: &App) {
    let title = match app.mode {
        InputMode::Question => " Question ",
        InputMode::PdfPath => " PDF path ",
    };
    let input = Paragraph::new(app.input.as_str()).style(Theme::text()).block(
        Block::default()
            .title(Span::styled(title, Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border_focus()),
    );
    f.render_widget(input, area);
    let cursor_x = area.x + 1 + app.input.chars().count() as u16;
    f.set_cursor_position(Position::new(
        cursor_x.min(area.x + area.width.saturating_sub(2)),
        area.y + 1,
    ));
}

fn render_footer(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled(" Enter", Theme::key_hint()),
        Span::styled(" send  ", Theme::key_desc()),
        Span::styled("^O", Theme::key_hint()),
        Span::styled(" load pdf  ", Theme::key_desc()),
        Span::styled("^P", Theme::key_hint()),
        Span::styled(" model  ", Theme::key_desc()),
        Span::styled("Tab", Theme::key_hint()),
        Span::styled(" switch chat  ", Theme::key_desc()),
        Span::styled("^N", Theme::key_hint()),
        Span::styled(" new  ", Theme::key_desc()),
        Span::styled("^W", Theme::key_hint()),
        Span::styled(" delete  ", Theme::key_desc()),
        Span::styled("^C", Theme::key_hint()),
        Span::styled(" quit", Theme::key_desc()),
    ]);
    f.render_widget(Paragraph::new(hints), area);
}
