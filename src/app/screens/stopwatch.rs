//! Stopwatch screen implementation
//!
//! Shows the `MM:SS` display with start, stop, reset and back buttons.
//! The stopwatch keeps running while the page is hidden.

use crate::models::stopwatch::Stopwatch;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

use super::{focus_style, help_line};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchButton {
    Start,
    Stop,
    Reset,
    Back,
}

impl StopwatchButton {
    const ORDER: [StopwatchButton; 4] = [Self::Start, Self::Stop, Self::Reset, Self::Back];

    fn label(&self) -> &'static str {
        match self {
            Self::Start => "Iniciar",
            Self::Stop => "Parar",
            Self::Reset => "Resetar",
            Self::Back => "Voltar ao Menu",
        }
    }
}

/// Stopwatch screen component
#[derive(Debug)]
pub struct StopwatchScreen {
    stopwatch: Stopwatch,
    focus_index: usize,
}

impl StopwatchScreen {
    pub fn new(refresh_interval: Duration) -> Self {
        Self {
            stopwatch: Stopwatch::with_refresh_interval(refresh_interval),
            focus_index: 0,
        }
    }

    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    pub fn focus(&self) -> StopwatchButton {
        StopwatchButton::ORDER[self.focus_index]
    }

    pub fn select_next(&mut self) {
        self.focus_index = (self.focus_index + 1) % StopwatchButton::ORDER.len();
    }

    pub fn select_previous(&mut self) {
        let len = StopwatchButton::ORDER.len();
        self.focus_index = (self.focus_index + len - 1) % len;
    }

    pub fn start(&mut self, now: Instant) -> bool {
        self.stopwatch.start(now)
    }

    pub fn stop(&mut self, now: Instant) -> bool {
        self.stopwatch.stop(now)
    }

    pub fn reset(&mut self) {
        self.stopwatch.reset();
    }

    /// Run a due refresh, if any
    pub fn tick(&mut self, now: Instant) -> bool {
        self.stopwatch.tick(now)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.stopwatch.next_deadline()
    }

    pub fn display(&self) -> String {
        self.stopwatch.display()
    }

    /// Render the stopwatch screen
    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(5), // Display
                Constraint::Length(6), // Buttons
                Constraint::Min(0),
                Constraint::Length(3), // Help text
            ])
            .split(f.size());

        let (status, color) = if self.stopwatch.is_running() {
            ("Cronômetro - Em andamento", Color::Green)
        } else {
            ("Cronômetro", Color::Cyan)
        };

        let title = Paragraph::new(status)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );
        f.render_widget(title, chunks[0]);

        let display = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                self.display(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(display, chunks[1]);

        let buttons: Vec<Line> = StopwatchButton::ORDER
            .iter()
            .map(|button| {
                Line::from(Span::styled(
                    format!(" {} ", button.label()),
                    focus_style(self.focus() == *button),
                ))
            })
            .collect();
        f.render_widget(
            Paragraph::new(buttons)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            chunks[2],
        );

        let help = Paragraph::new(help_line(&[
            ("S", "Iniciar"),
            ("P", "Parar"),
            ("R", "Resetar"),
            ("Esc", "Voltar"),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        f.render_widget(help, chunks[4]);
    }
}

impl Default for StopwatchScreen {
    fn default() -> Self {
        Self::new(crate::models::stopwatch::DEFAULT_REFRESH_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_button_focus() {
        let mut screen = StopwatchScreen::default();
        assert_eq!(screen.focus(), StopwatchButton::Start);
        screen.select_previous();
        assert_eq!(screen.focus(), StopwatchButton::Back);
        screen.select_next();
        screen.select_next();
        assert_eq!(screen.focus(), StopwatchButton::Stop);
    }

    #[test]
    fn test_render_shows_display() {
        let t0 = Instant::now();
        let mut screen = StopwatchScreen::default();
        screen.start(t0);
        screen.tick(t0 + Duration::from_secs(65));

        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|f| screen.render(f)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("01:05"));
        assert!(text.contains("Resetar"));
    }
}
