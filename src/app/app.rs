//! Main application controller
//!
//! Owns the terminal and the page set, and runs the event loop.

use crate::{
    app::{
        tui::{poll_timeout, Tui},
        view::AppView,
    },
    config::AppConfig,
    Result,
};
use std::io;
use std::time::Instant;

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Pages, navigation and dialogs
    view: AppView,
}

impl App {
    /// Create a new application instance
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            tui: Tui::new(config.tick_rate)?,
            view: AppView::new(config),
        })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui.init()?;
        tracing::info!("terminal initialised");
        Ok(())
    }

    /// Run the main application loop until the user closes the app
    pub async fn run(&mut self) -> Result<()> {
        while !self.view.should_quit() {
            self.view.tick(Instant::now());
            self.draw()?;

            let timeout = poll_timeout(
                self.tui.tick_rate(),
                self.view.next_deadline(),
                Instant::now(),
            );
            if let Some(key) = self.tui.next_key(timeout)? {
                self.view.handle_key(key, Instant::now());
            }
        }
        Ok(())
    }

    /// Restore the terminal
    pub fn restore(&mut self) -> Result<()> {
        self.tui.restore()?;
        Ok(())
    }

    /// Draw the current page
    fn draw(&mut self) -> io::Result<()> {
        let view = &mut self.view;
        self.tui.draw(|f| view.render(f))
    }
}
