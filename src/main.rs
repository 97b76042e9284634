mod alerts;
mod app;
mod export;
mod ui;

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use stopwatch_core::TICK_INTERVAL_MS;

use crate::alerts::AlertConfig;
use crate::app::{App, TargetFields};

/// Terminal stopwatch with splits, lap statistics, a target alert, and
/// CSV session export.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Initial alert target as HH:MM:SS
    #[arg(long)]
    target: Option<String>,

    /// Audio clip to play when the target is reached
    #[arg(long)]
    sound: Option<PathBuf>,

    /// Directory session exports are written to
    #[arg(long, default_value = ".")]
    export_dir: PathBuf,

    /// Skip the terminal bell on target alerts
    #[arg(long)]
    no_bell: bool,
}

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let target = match &cli.target {
        Some(raw) => TargetFields::from_hms(raw).unwrap_or_else(|| {
            log::warn!("ignoring malformed --target {raw:?}, expected HH:MM:SS");
            TargetFields::new()
        }),
        None => TargetFields::new(),
    };
    let config = AlertConfig {
        bell: !cli.no_bell,
        sound: cli.sound,
    };
    let mut app = App::new(target, config, cli.export_dir);

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;
    result
}

/// Drive the app: redraw, poll for input, and emit one nominal tick per
/// interval while running. Elapsed time advances by the tick constant,
/// not by measured wall time.
fn event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    const TICK: Duration = Duration::from_millis(TICK_INTERVAL_MS);
    const IDLE_POLL: Duration = Duration::from_millis(100);

    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if !app.watch.is_running() {
            // Keep the interval fresh so resuming does not replay ticks.
            last_tick = Instant::now();
        }
        let timeout = if app.watch.is_running() {
            TICK.saturating_sub(last_tick.elapsed())
        } else {
            IDLE_POLL
        };
        if event::poll(timeout)? {
            while event::poll(Duration::ZERO)? {
                if let Event::Key(key) = event::read()? {
                    app.handle_key(key);
                }
            }
        }
        if app.watch.is_running() && last_tick.elapsed() >= TICK {
            app.on_tick(TICK_INTERVAL_MS);
            last_tick = Instant::now();
        }
        if app.should_quit {
            return Ok(());
        }
    }
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().context("failed to enable raw mode")?;
    crossterm::execute!(io::stdout(), EnterAlternateScreen)
        .context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(io::stdout());
    Terminal::new(backend).context("failed to create terminal")
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to show cursor")?;
    Ok(())
}

/// Restore the terminal before the default panic output so the message
/// is readable outside the alternate screen.
fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}
