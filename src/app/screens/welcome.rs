//! Welcome screen implementation
//!
//! Main menu linking to the three tools plus a close entry.

use crate::app::state::Page;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::help_line;

/// What a menu entry does when activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Open(Page),
    Close,
}

const MENU: [(&str, MenuAction); 4] = [
    ("Cálculo de IMC", MenuAction::Open(Page::Bmi)),
    ("Treino", MenuAction::Open(Page::Workout)),
    ("Cronômetro", MenuAction::Open(Page::Stopwatch)),
    ("Fechar", MenuAction::Close),
];

/// Welcome screen component
#[derive(Debug)]
pub struct WelcomeScreen {
    selected_index: usize,
    list_state: ListState,
}

impl WelcomeScreen {
    /// Create a new welcome screen
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            selected_index: 0,
            list_state,
        }
    }

    /// Action of the highlighted entry
    pub fn selected_action(&self) -> MenuAction {
        MENU[self.selected_index].1
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = MENU.len() - 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        if self.selected_index < MENU.len() - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Render the welcome screen
    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(6),    // Menu
                Constraint::Length(3), // Help text
            ])
            .split(f.size());

        let title = Paragraph::new("Bem-vindo ao App Fitness!")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(title, chunks[0]);

        self.render_menu(f, chunks[1]);

        let help = Paragraph::new(help_line(&[
            ("↑↓", "Navegar"),
            ("Enter", "Selecionar"),
            ("Esc", "Fechar"),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        f.render_widget(help, chunks[2]);
    }

    fn render_menu(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = MENU
            .iter()
            .map(|(label, _)| ListItem::new(*label))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}

impl Default for WelcomeScreen {
    fn default() -> Self {
        Self::new()
    }
}
