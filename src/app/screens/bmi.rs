//! BMI screen implementation
//!
//! Two free-text inputs, a calculate button and a back button. The result
//! label keeps the last successful calculation; failures leave it alone.

use crate::models::bmi::{self, BmiReport};
use crate::Result;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{focus_style, help_line};

/// Focusable elements, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiField {
    Weight,
    Height,
    Calculate,
    Back,
}

impl BmiField {
    const ORDER: [BmiField; 4] = [Self::Weight, Self::Height, Self::Calculate, Self::Back];

    fn is_input(&self) -> bool {
        matches!(self, Self::Weight | Self::Height)
    }
}

/// What the page asks the app to do after Enter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiAction {
    Calculate,
    Back,
}

/// BMI screen component
#[derive(Debug, Default)]
pub struct BmiScreen {
    weight: String,
    height: String,
    focus_index: usize,
    result: Option<String>,
}

impl BmiScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> BmiField {
        BmiField::ORDER[self.focus_index]
    }

    pub fn focus_next(&mut self) {
        self.focus_index = (self.focus_index + 1) % BmiField::ORDER.len();
    }

    pub fn focus_previous(&mut self) {
        self.focus_index = (self.focus_index + BmiField::ORDER.len() - 1) % BmiField::ORDER.len();
    }

    pub fn weight(&self) -> &str {
        &self.weight
    }

    pub fn height(&self) -> &str {
        &self.height
    }

    /// Replace both inputs
    pub fn set_inputs(&mut self, weight: impl Into<String>, height: impl Into<String>) {
        self.weight = weight.into();
        self.height = height.into();
    }

    fn focused_input(&mut self) -> Option<&mut String> {
        match self.focus() {
            BmiField::Weight => Some(&mut self.weight),
            BmiField::Height => Some(&mut self.height),
            _ => None,
        }
    }

    /// Type into the focused input. Returns `false` if a button has focus.
    pub fn insert_char(&mut self, c: char) -> bool {
        if c.is_control() {
            return false;
        }
        match self.focused_input() {
            Some(input) => {
                input.push(c);
                true
            }
            None => false,
        }
    }

    pub fn backspace(&mut self) -> bool {
        match self.focused_input() {
            Some(input) => input.pop().is_some(),
            None => false,
        }
    }

    /// Whether typed characters go into a field
    pub fn is_editing(&self) -> bool {
        self.focus().is_input()
    }

    /// What Enter means given the current focus
    pub fn activate(&self) -> BmiAction {
        match self.focus() {
            BmiField::Back => BmiAction::Back,
            _ => BmiAction::Calculate,
        }
    }

    /// Parse the inputs and update the result label on success
    pub fn calculate(&mut self) -> Result<BmiReport> {
        let report = bmi::calculate(&self.weight, &self.height)?;
        self.result = Some(report.summary());
        Ok(report)
    }

    /// Last successful result line
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Render the BMI screen
    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Weight
                Constraint::Length(3), // Height
                Constraint::Length(4), // Buttons
                Constraint::Length(3), // Result
                Constraint::Min(0),
                Constraint::Length(3), // Help text
            ])
            .split(f.size());

        let title = Paragraph::new("Preencha os dados para calcular o IMC:")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        self.render_input(f, chunks[1], "Peso (kg):", &self.weight, BmiField::Weight);
        self.render_input(f, chunks[2], "Altura (cm):", &self.height, BmiField::Height);
        self.render_buttons(f, chunks[3]);

        let result = Paragraph::new(self.result.as_deref().unwrap_or(""))
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Resultado"));
        f.render_widget(result, chunks[4]);

        let help = Paragraph::new(help_line(&[
            ("Tab", "Próximo campo"),
            ("Enter", "Calcular"),
            ("Esc", "Voltar"),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        f.render_widget(help, chunks[6]);
    }

    fn render_input(&self, f: &mut Frame, area: Rect, label: &str, value: &str, field: BmiField) {
        let focused = self.focus() == field;
        let border = if focused { Color::Cyan } else { Color::White };
        let cursor = if focused { "_" } else { "" };

        let input = Paragraph::new(format!("{}{}", value, cursor)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(label.to_string())
                .border_style(Style::default().fg(border)),
        );
        f.render_widget(input, area);
    }

    fn render_buttons(&self, f: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                " Calcular IMC ",
                focus_style(self.focus() == BmiField::Calculate),
            )),
            Line::from(Span::styled(
                " Voltar ao Menu ",
                focus_style(self.focus() == BmiField::Back),
            )),
        ];
        let buttons = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(buttons, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppError;

    #[test]
    fn test_focus_cycle() {
        let mut screen = BmiScreen::new();
        assert_eq!(screen.focus(), BmiField::Weight);
        screen.focus_next();
        assert_eq!(screen.focus(), BmiField::Height);
        screen.focus_next();
        screen.focus_next();
        assert_eq!(screen.focus(), BmiField::Back);
        screen.focus_next();
        assert_eq!(screen.focus(), BmiField::Weight);
        screen.focus_previous();
        assert_eq!(screen.focus(), BmiField::Back);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut screen = BmiScreen::new();
        for c in "70".chars() {
            assert!(screen.insert_char(c));
        }
        screen.focus_next();
        for c in "1755".chars() {
            screen.insert_char(c);
        }
        assert!(screen.backspace());
        assert_eq!(screen.weight(), "70");
        assert_eq!(screen.height(), "175");

        screen.focus_next();
        assert!(!screen.insert_char('9'));
        assert!(!screen.backspace());
        assert_eq!(screen.activate(), BmiAction::Calculate);
    }

    #[test]
    fn test_successful_calculation_sets_result() {
        let mut screen = BmiScreen::new();
        screen.set_inputs("70", "175");
        let report = screen.calculate().unwrap();
        assert_eq!(report.formatted_ratio(), "22.86");
        assert_eq!(screen.result(), Some("Seu IMC é: 22.86 (Peso normal)"));
    }

    #[test]
    fn test_failed_calculation_keeps_previous_result() {
        let mut screen = BmiScreen::new();
        screen.set_inputs("70", "175");
        screen.calculate().unwrap();

        screen.set_inputs("abc", "175");
        assert!(matches!(
            screen.calculate(),
            Err(AppError::InvalidMeasurement { .. })
        ));
        assert_eq!(screen.result(), Some("Seu IMC é: 22.86 (Peso normal)"));
        assert_eq!(screen.weight(), "abc");
    }
}
