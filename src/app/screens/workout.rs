//! Workout screen implementation
//!
//! A two-option radio selector, a show button and a back button.

use crate::models::workout::{catalog, WorkoutPlan};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{focus_style, help_line};

/// Focusable rows, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutItem {
    Option(WorkoutPlan),
    Show,
    Back,
}

const ITEMS: [WorkoutItem; 4] = [
    WorkoutItem::Option(WorkoutPlan::MassGain),
    WorkoutItem::Option(WorkoutPlan::FatLoss),
    WorkoutItem::Show,
    WorkoutItem::Back,
];

/// What activating the focused row asks of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutAction {
    /// A radio option was selected; nothing else to do
    Selected,
    Show,
    Back,
}

/// Workout screen component
#[derive(Debug, Default)]
pub struct WorkoutScreen {
    focus_index: usize,
    selection: Option<WorkoutPlan>,
}

impl WorkoutScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> WorkoutItem {
        ITEMS[self.focus_index]
    }

    pub fn select_next(&mut self) {
        self.focus_index = (self.focus_index + 1) % ITEMS.len();
    }

    pub fn select_previous(&mut self) {
        self.focus_index = (self.focus_index + ITEMS.len() - 1) % ITEMS.len();
    }

    pub fn selection(&self) -> Option<WorkoutPlan> {
        self.selection
    }

    pub fn choose(&mut self, plan: WorkoutPlan) {
        self.selection = Some(plan);
    }

    /// Key of the chosen option, empty when nothing is chosen
    pub fn selected_key(&self) -> &'static str {
        self.selection.map_or("", |plan| plan.key())
    }

    /// Plan text for the current selection, empty when none
    pub fn plan_text(&self) -> &'static str {
        catalog(self.selected_key())
    }

    /// Space on a radio option selects it
    pub fn toggle(&mut self) -> bool {
        if let WorkoutItem::Option(plan) = self.focus() {
            self.choose(plan);
            true
        } else {
            false
        }
    }

    /// Enter on the focused row
    pub fn activate(&mut self) -> WorkoutAction {
        match self.focus() {
            WorkoutItem::Option(plan) => {
                self.choose(plan);
                WorkoutAction::Selected
            }
            WorkoutItem::Show => WorkoutAction::Show,
            WorkoutItem::Back => WorkoutAction::Back,
        }
    }

    /// Render the workout screen
    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(4), // Options
                Constraint::Length(4), // Buttons
                Constraint::Min(0),
                Constraint::Length(3), // Help text
            ])
            .split(f.size());

        let title = Paragraph::new("Escolha o tipo de treino:")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        let options: Vec<Line> = WorkoutPlan::ALL
            .iter()
            .map(|plan| {
                let marker = if self.selection == Some(*plan) { "(•)" } else { "( )" };
                Line::from(Span::styled(
                    format!(" {} {} ", marker, plan.title()),
                    focus_style(self.focus() == WorkoutItem::Option(*plan)),
                ))
            })
            .collect();
        f.render_widget(
            Paragraph::new(options)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            chunks[1],
        );

        let buttons = vec![
            Line::from(Span::styled(
                " Exibir Treino ",
                focus_style(self.focus() == WorkoutItem::Show),
            )),
            Line::from(Span::styled(
                " Voltar ao Menu ",
                focus_style(self.focus() == WorkoutItem::Back),
            )),
        ];
        f.render_widget(
            Paragraph::new(buttons)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            chunks[2],
        );

        let help = Paragraph::new(help_line(&[
            ("↑↓", "Navegar"),
            ("Espaço", "Marcar"),
            ("Enter", "Confirmar"),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_selected_initially() {
        let screen = WorkoutScreen::new();
        assert_eq!(screen.selection(), None);
        assert_eq!(screen.selected_key(), "");
        assert_eq!(screen.plan_text(), "");
    }

    #[test]
    fn test_select_with_space() {
        let mut screen = WorkoutScreen::new();
        screen.select_next();
        assert!(screen.toggle());
        assert_eq!(screen.selection(), Some(WorkoutPlan::FatLoss));
        assert_eq!(screen.plan_text(), WorkoutPlan::FatLoss.text());

        screen.select_next();
        assert!(!screen.toggle());
        assert_eq!(screen.selection(), Some(WorkoutPlan::FatLoss));
    }

    #[test]
    fn test_selection_is_exclusive() {
        let mut screen = WorkoutScreen::new();
        screen.choose(WorkoutPlan::FatLoss);
        screen.choose(WorkoutPlan::MassGain);
        assert_eq!(screen.selected_key(), "mass_gain");
    }

    #[test]
    fn test_activate_rows() {
        let mut screen = WorkoutScreen::new();
        assert_eq!(screen.activate(), WorkoutAction::Selected);
        assert_eq!(screen.selection(), Some(WorkoutPlan::MassGain));

        screen.select_next();
        screen.select_next();
        assert_eq!(screen.activate(), WorkoutAction::Show);
        screen.select_next();
        assert_eq!(screen.activate(), WorkoutAction::Back);

        screen.select_next();
        assert_eq!(screen.focus(), WorkoutItem::Option(WorkoutPlan::MassGain));
        screen.select_previous();
        assert_eq!(screen.focus(), WorkoutItem::Back);
    }
}
