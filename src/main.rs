//! Moja Waitlist - Terminal signup form for the Moja OTP delivery waitlist
//!
//! A Ratatui-based form that collects signup details and forwards them
//! to the waitlist admin inbox through a transactional-email service.

mod app;
mod config;
mod notify;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::EmailConfig;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging to stderr so it never corrupts the TUI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moja_waitlist=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = EmailConfig::from_env();
    if !config.is_complete() {
        tracing::warn!("email service configuration incomplete; submissions will be rejected");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle crossterm events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key)?;
            }
        }

        // A key handler may have started a submission; render the busy
        // state before the send is awaited
        if app.submission.is_submitting() {
            terminal.draw(|frame| ui::draw(frame, app))?;
            app.complete_submit().await;
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
