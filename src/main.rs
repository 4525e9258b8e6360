use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use tiletrack::app::{Tracker, UiTheme};
use tiletrack::kernel::paths::get_settings_path;
use tiletrack::kernel::{load_settings, Settings};
use tiletrack::tui::crossterm::into_input_event;
#[cfg(unix)]
use tiletrack::tui::session::TerminationWatch;
use tiletrack::tui::session::{TerminalSession, TerminationSignal};
use tiletrack::tui::view::View;

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn resolve_settings() -> Settings {
    let path: Option<PathBuf> = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(get_settings_path);
    let Some(path) = path else {
        return Settings::default();
    };

    match load_settings(&path) {
        Ok(settings) => {
            tracing::info!(
                path = %path.display(),
                start_count = settings.start_count,
                pool_columns = settings.pool_columns,
                "settings loaded"
            );
            settings
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "using default settings");
            Settings::default()
        }
    }
}

/// 返回 `Some(signal)` 表示被终止信号打断，进程需以对应退出码结束。
fn run() -> io::Result<Option<TerminationSignal>> {
    let settings = resolve_settings();

    let mut theme = UiTheme::default();
    theme.apply_settings(&settings.theme);
    theme.adapt_to_terminal_capabilities();
    let mut tracker = Tracker::with_theme(&settings, theme);

    let mut session = TerminalSession::enter()?;
    #[cfg(unix)]
    let mut watch = TerminationWatch::install()?;

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let mut dirty = true;
    let interrupted = loop {
        #[cfg(unix)]
        if let Some(signal) = watch.poll() {
            tracing::info!(?signal, "termination signal received");
            break Some(signal);
        }

        if dirty {
            terminal.draw(|frame| {
                let area = frame.area();
                tracker.render(frame, area);
            })?;
            dirty = false;
        }

        if !crossterm::event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Some(event) = into_input_event(crossterm::event::read()?) else {
            continue;
        };
        let result = tracker.handle_input(&event);
        if result.is_quit() {
            break None;
        }
        dirty |= result.is_consumed();
    };

    drop(terminal);
    session.leave()?;
    tracing::info!(
        tiles_left = tracker.store().state().pool.total_remaining(),
        "exiting"
    );
    Ok(interrupted)
}

fn main() -> io::Result<()> {
    let logging = logging::init();
    let outcome = run();
    // process::exit 不会运行析构，先让日志落盘。
    drop(logging);

    match outcome? {
        Some(signal) => std::process::exit(signal.exit_code()),
        None => Ok(()),
    }
}
