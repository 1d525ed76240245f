//! Input handling for the Folio TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::event::{MouseEvent, MouseEventKind};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

use folio_engine::{App, Section};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering
const WHEEL_STEP: isize = 3;

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking task and queues them for the frame loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a reader blocked on a full channel wakes up.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if the caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    // Bounded queue: apply backpressure instead of dropping events.
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain queued input into `app`. Returns whether the app should quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, ev) {
            return Ok(true);
        }
        processed += 1;
    }
    if processed == MAX_EVENTS_PER_FRAME {
        debug!(backlog = input.rx.len(), "Input backlog deferred to next frame");
    }
    Ok(app.quit_requested())
}

fn apply_event(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(MouseEvent { kind, .. }) => match kind {
            MouseEventKind::ScrollDown => app.scroll_lines(WHEEL_STEP),
            MouseEventKind::ScrollUp => app.scroll_lines(-WHEEL_STEP),
            _ => {}
        },
        // The next draw relays the page out at the new size.
        _ => {}
    }
    app.quit_requested()
}

/// Apply one key press to `app`.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Handle press + repeat events (ignore releases)
    if matches!(key.kind, KeyEventKind::Release) {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return;
    }

    if app.menu().is_open() {
        handle_menu_key(app, key);
    } else {
        handle_page_key(app, key);
    }
}

fn digit_section(c: char) -> Option<Section> {
    let digit = c.to_digit(10)?;
    let index = usize::try_from(digit).ok()?.checked_sub(1)?;
    Section::from_index(index)
}

fn handle_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => app.move_menu_cursor(false),
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => app.move_menu_cursor(true),
        KeyCode::Enter => app.activate_menu_cursor(),
        KeyCode::Esc | KeyCode::Char('x' | 'm') => app.close_menu(),
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char(c) => {
            if let Some(section) = digit_section(c) {
                app.navigate_to(section);
            }
        }
        _ => {}
    }
}

fn handle_page_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('j') | KeyCode::Down => app.scroll_lines(1),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_lines(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_pages(1),
        KeyCode::PageUp => app.scroll_pages(-1),
        KeyCode::Char('g') | KeyCode::Home => app.scroll_to_top(),
        KeyCode::Char('G') | KeyCode::End => app.scroll_to_bottom(),
        KeyCode::Tab => app.navigate_relative(true),
        KeyCode::BackTab => app.navigate_relative(false),
        // The menu only exists in the narrow layout.
        KeyCode::Char('m') if app.is_compact() => app.open_menu(),
        KeyCode::Char(c) => {
            if let Some(section) = digit_section(c) {
                app.navigate_to(section);
            }
        }
        _ => {}
    }
}
