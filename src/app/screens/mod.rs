//! TUI screen components
//!
//! Contains one screen per page. Every screen is built once at startup and
//! keeps its state while hidden.

pub mod bmi;
pub mod stopwatch;
pub mod welcome;
pub mod workout;

pub use bmi::{BmiAction, BmiField, BmiScreen};
pub use stopwatch::{StopwatchButton, StopwatchScreen};
pub use welcome::{MenuAction, WelcomeScreen};
pub use workout::{WorkoutAction, WorkoutItem, WorkoutScreen};

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Key hint bar: bold key followed by its description
pub(crate) fn help_line(entries: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(entries.len() * 2);
    for (key, description) in entries {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}  ", description)));
    }
    Line::from(spans)
}

/// Style of a focusable button-like row
pub(crate) fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().bg(Color::Cyan).fg(Color::Black)
    } else {
        Style::default()
    }
}
