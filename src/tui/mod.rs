//! Terminal User Interface Module
//!
//! Browse, inspect and post jobs from the terminal.
//! Built with Ratatui for high-performance terminal rendering.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  💼 Job Board · Find Your Dream Job               ● me@mail.com │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─ Search ──────────────────┐┌─ Location ─┐┌─ Job Type ─┐     │
//! │  │ backend                   ││ ◀ Pune ▶   ││ ◀ All ▶    │     │
//! │  └───────────────────────────┘└────────────┘└────────────┘     │
//! │  ┌─ 3 jobs found ──────────────────────────────────────────┐   │
//! │  │ ▶ 🏢 Backend Engineer  Full-time                         │   │
//! │  │   Acme  📍 Pune  💰 12 - 18 Lpa                          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │  ✓ Jobs: Ready │ [Enter] Open [/] Search [n] Post job [F1] Help │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Network calls run on spawned tasks and report back through
//! [`AppEvent`]s; the state machines decide whether a completion is
//! still current.

pub mod app;
pub mod event;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::{App, AppEvent, ListingFocus};
pub use event::{AppAction, EventHandler};

use crate::api::JobApi;
use crate::config::Config;
use crate::navigation::Route;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Type alias for our terminal backend
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> anyhow::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal(terminal: &mut Tui) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the TUI application, starting at `route`
pub async fn run(
    config: Config,
    api: Arc<dyn JobApi>,
    account: Option<String>,
    route: Route,
) -> anyhow::Result<()> {
    info!(%route, "Starting TUI mode");

    let mut terminal = init_terminal()?;

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new(config, api);
    app.account = account;
    app.navigate(route);

    let mut events = EventHandler::new(tick_rate);

    let result = run_app(&mut terminal, &mut app, &mut events).await;

    if let Err(e) = restore_terminal(&mut terminal) {
        error!("Failed to restore terminal: {}", e);
    }

    result
}

/// Main application loop
async fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    events: &mut EventHandler,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Apply completed fetches and timers
        app.poll_events();

        // Ticks keep this from blocking for long
        match events.next().await {
            Some(action) => app.handle_action(action),
            None => break,
        }

        if app.should_quit {
            break;
        }
    }

    info!("TUI exited normally");
    Ok(())
}
