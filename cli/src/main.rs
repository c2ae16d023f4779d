//! Vitrine CLI - binary entry point and terminal session management.
//!
//! Wires the two engine components together: the theme controller (persisted
//! preference + system signal) and the demo sequencer (spawned as its own
//! task, driving the shared demo view). The event loop runs on a fixed render
//! cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain pending input (non-blocking)
//! 3. Advance the copy-feedback timer
//! 4. Edge-detect the system color scheme
//! 5. Render frame

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    fs::{self, OpenOptions},
    io::{Stdout, stdout},
    path::PathBuf,
    sync::Mutex,
    time::{Duration, Instant},
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use vitrine_engine::{
    CopyAction, EnvScheme, FilePreferenceStore, MemoryPreferenceStore, PreferenceStore,
    SystemClipboard, SystemScheme, TerminalDemoSequencer, ThemeController, VitrineConfig,
    config_dir,
};
use vitrine_tui::{SharedDemoView, draw};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

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

fn open_log_file() -> (Option<(PathBuf, std::fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
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

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(dir) = config_dir() {
        candidates.push(dir.join("logs").join("vitrine.log"));
    }

    // Fallback: ./.vitrine/logs/vitrine.log (useful in constrained environments)
    candidates.push(PathBuf::from(".vitrine").join("logs").join("vitrine.log"));

    candidates
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Raw mode and the alternate screen are restored even after panics or early
/// returns, so the terminal stays usable.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = match VitrineConfig::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => {
            eprintln!("Config error ({}): {err}", err.path().display());
            return Err(err.into());
        }
    };

    let store: Box<dyn PreferenceStore> = match FilePreferenceStore::standard() {
        Some(store) => Box::new(store),
        None => {
            tracing::warn!("No config directory; theme preference will not persist");
            Box::new(MemoryPreferenceStore::default())
        }
    };
    let themes = ThemeController::new(store, EnvScheme);
    let copy = CopyAction::new(config.install_command().to_owned());

    let view = SharedDemoView::new();
    match TerminalDemoSequencer::new(view.clone(), config.scenarios(), config.timings()) {
        Ok(sequencer) => {
            // Runs for the lifetime of the process; torn down with it.
            tokio::spawn(sequencer.run());
        }
        Err(e) => {
            // Nothing to play; the rest of the page still works.
            tracing::warn!("Demo disabled: {e}");
        }
    }

    let mut session = TerminalSession::new()?;
    run_app(&mut session.terminal, themes, copy, &view).await
}

const FRAME_DURATION: Duration = Duration::from_millis(33);

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut themes: ThemeController<Box<dyn PreferenceStore>, EnvScheme>,
    mut copy: CopyAction,
    view: &SharedDemoView,
) -> Result<()> {
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut last_tick = Instant::now();
    let mut system_dark = EnvScheme.prefers_dark();

    loop {
        frames.tick().await;

        if drain_input(&mut themes, &mut copy)? {
            return Ok(());
        }

        let now = Instant::now();
        copy.tick(now.duration_since(last_tick));
        last_tick = now;

        // The terminal has no change event for the system scheme; an observed
        // flip while polling stands in for the notification.
        let dark_now = EnvScheme.prefers_dark();
        if dark_now != system_dark {
            system_dark = dark_now;
            let _ = themes.handle_system_change();
        }

        let snapshot = view.snapshot();
        terminal.draw(|frame| {
            draw(
                frame,
                &snapshot,
                themes.preference(),
                themes.theme_state(),
                &copy,
            );
        })?;
    }
}

/// Drain pending input without blocking. Returns true when the user quits.
fn drain_input(
    themes: &mut ThemeController<Box<dyn PreferenceStore>, EnvScheme>,
    copy: &mut CopyAction,
) -> Result<bool> {
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && handle_key(key, themes, copy)
        {
            return Ok(true);
        }
    }
    Ok(false)
}

fn handle_key(
    key: KeyEvent,
    themes: &mut ThemeController<Box<dyn PreferenceStore>, EnvScheme>,
    copy: &mut CopyAction,
) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('t') => {
            themes.cycle();
            false
        }
        KeyCode::Char('c') => {
            copy.press(&mut SystemClipboard);
            false
        }
        _ => false,
    }
}
