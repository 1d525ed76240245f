//! Folio CLI - Binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`folio_engine`] (application state) and [`folio_tui`] (rendering),
//! providing RAII-based terminal management with guaranteed cleanup.
//!
//! ```text
//! main() -> load config + content -> TerminalSession::new() -> run_app() -> App + TUI
//! ```
//!
//! # Event Loop
//!
//! A fixed 8ms (~120 FPS) render cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`folio_tui::InputPump`])
//! 3. Advance animations (`app.tick()`): smooth scroll and menu slide
//! 4. Render frame (lays the page out and feeds the scroll tracker)
//! 5. Mirror the active section into the terminal title

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::prelude::*;
use std::{
    fs::{self, OpenOptions},
    io::{Stdout, Write, stdout},
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};
use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use folio_config::FolioConfig;
use folio_engine::{App, Portfolio, ScrollState, Section};
use folio_tui::{InputPump, draw, handle_events};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_folio_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // If we can't open a log file, prefer "no logs" over corrupting the TUI
    // by writing to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_folio_log_file() -> (Option<(PathBuf, std::fs::File)>, Vec<String>) {
    let candidates = folio_log_file_candidates();
    let mut warnings = Vec::new();

    for candidate in candidates {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn folio_log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.folio/logs/folio.log
    if let Some(config_path) = FolioConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("folio.log"));
    }

    // Fallback: ./.folio/logs/folio.log (useful in constrained environments)
    candidates.push(PathBuf::from(".folio").join("logs").join("folio.log"));

    candidates
}

/// The configured portfolio, falling back to the embedded one when the
/// configured file cannot be used.
fn load_portfolio(config: &FolioConfig) -> Result<Portfolio> {
    if let Some(path) = config.content_path() {
        match Portfolio::load(&path) {
            Ok(portfolio) => return Ok(portfolio),
            Err(err) => {
                tracing::warn!(path = %path.display(), "Falling back to embedded content: {err}");
            }
        }
    }
    Portfolio::embedded().context("embedded portfolio is invalid")
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Manages the terminal lifecycle including:
/// - Raw mode (disables line buffering and echo)
/// - Alternate screen
/// - Alternate scroll mode (maps scroll wheel to arrows without mouse capture)
///
/// On drop, all terminal state is restored to its original configuration,
/// ensuring the terminal remains usable even after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        // Enter alternate screen and enable alternate scroll mode (mode 1007).
        // Mode 1007 converts scroll wheel events to Up/Down arrow keys when in
        // alternate screen, WITHOUT capturing mouse clicks. This preserves
        // native text selection while still allowing scroll wheel to work.
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            let _ = execute!(out, LeaveAlternateScreen);
            return Err(err.into());
        }
        // Enable alternate scroll mode: CSI ? 1007 h
        let _ = out.write_all(b"\x1b[?1007h");
        let _ = out.flush();

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let mut out = stdout();
                // Disable alternate scroll mode: CSI ? 1007 l
                let _ = out.write_all(b"\x1b[?1007l");
                let _ = out.flush();
                let _ = execute!(out, LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        // Disable alternate scroll mode: CSI ? 1007 l
        let _ = self.terminal.backend_mut().write_all(b"\x1b[?1007l");
        let _ = std::io::Write::flush(&mut *self.terminal.backend_mut());
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    // Load failures are logged by the loader; fall back to defaults plus
    // environment overrides.
    let config = FolioConfig::load().ok().flatten().unwrap_or_default();
    let portfolio = load_portfolio(&config)?;
    let mut app = App::new(portfolio, &config);

    let result = {
        let mut session = TerminalSession::new()?;
        run_app(&mut session.terminal, &mut app).await
    };

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

const FRAME_DURATION: Duration = Duration::from_millis(8);

/// Keeps the terminal title on the section being read.
struct TitleSync {
    scroll: watch::Receiver<ScrollState>,
    brand: String,
    shown: Option<Section>,
}

impl TitleSync {
    fn new(app: &App) -> Self {
        Self {
            scroll: app.subscribe_scroll(),
            brand: app.portfolio().profile.name.clone(),
            shown: None,
        }
    }

    fn update<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let section = self.scroll.borrow_and_update().active_section();
        if self.shown == Some(section) {
            return Ok(());
        }
        execute!(out, SetTitle(format!("{} | {}", self.brand, section.label())))?;
        self.shown = Some(section);
        Ok(())
    }
}

async fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend + Write,
    B::Error: Send + Sync + 'static,
{
    let mut input = InputPump::new();
    let mut title = TitleSync::new(app);
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result: Result<()> = loop {
        frames.tick().await;

        // Non-blocking input (drain queue only)
        let quit_now = match handle_events(app, &mut input) {
            Ok(q) => q,
            Err(e) => break Err(e),
        };
        if quit_now {
            break Ok(());
        }

        app.tick();

        if let Err(e) = terminal.draw(|frame| draw(frame, app)) {
            break Err(e.into());
        }

        if let Err(e) = title.update(terminal.backend_mut()) {
            break Err(e);
        }
    };

    input.shutdown().await;
    result
}
