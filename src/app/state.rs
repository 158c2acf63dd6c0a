//! Application state management
//!
//! Handles page switching, navigation logic, and keyboard event mapping
//! for the TUI application.

use crate::{AppError, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fmt;
use std::str::FromStr;

/// Application pages, exactly one visible at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    /// Main menu
    #[default]
    Welcome,
    /// BMI calculator
    Bmi,
    /// Workout plan selector
    Workout,
    /// Stopwatch
    Stopwatch,
}

impl Page {
    /// All pages in construction order
    pub const ALL: [Page; 4] = [Self::Welcome, Self::Bmi, Self::Workout, Self::Stopwatch];

    /// Name used to request navigation
    pub fn name(&self) -> &'static str {
        match self {
            Self::Welcome => "WelcomePage",
            Self::Bmi => "BmiPage",
            Self::Workout => "WorkoutPage",
            Self::Stopwatch => "StopwatchPage",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Page {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|page| page.name() == s)
            .ok_or_else(|| AppError::UnknownPage(s.to_string()))
    }
}

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Confirm selection (Enter)
    Select,
    /// Toggle the focused option (Space)
    Toggle,
    /// Go back/cancel (Esc)
    Back,
    /// Next item (Tab)
    Next,
    /// Previous item (Shift+Tab)
    Previous,
    /// Quit application (Ctrl+C)
    Quit,
    /// Any other printable key
    Char(char),
    /// No action
    None,
}

/// Tracks the visible page and whether the app should exit
#[derive(Debug)]
pub struct PageController {
    current: Page,
    should_quit: bool,
}

impl PageController {
    /// Create a controller showing the welcome page
    pub fn new() -> Self {
        Self {
            current: Page::Welcome,
            should_quit: false,
        }
    }

    /// Get the currently visible page
    pub fn current(&self) -> Page {
        self.current
    }

    pub fn is_visible(&self, page: Page) -> bool {
        self.current == page
    }

    /// Pages currently visible; always exactly one
    pub fn visible_pages(&self) -> Vec<Page> {
        Page::ALL
            .into_iter()
            .filter(|page| self.is_visible(*page))
            .collect()
    }

    /// Show a page by name.
    ///
    /// Unknown names fail and leave the visible page unchanged.
    pub fn show(&mut self, name: &str) -> Result<Page> {
        let page = name.parse::<Page>()?;
        self.show_page(page);
        Ok(page)
    }

    /// Make `page` the sole visible page
    pub fn show_page(&mut self, page: Page) {
        if page != self.current {
            tracing::info!(from = %self.current, to = %page, "navigate");
            self.current = page;
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Request application exit
    pub fn close(&mut self) {
        tracing::info!("close requested");
        self.should_quit = true;
    }

    /// Convert keyboard event to navigation action
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::Quit
            }

            KeyCode::Up => NavigationAction::Up,
            KeyCode::Down => NavigationAction::Down,

            KeyCode::Enter => NavigationAction::Select,
            KeyCode::Char(' ') => NavigationAction::Toggle,

            KeyCode::Esc => NavigationAction::Back,

            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    NavigationAction::Previous
                } else {
                    NavigationAction::Next
                }
            }
            KeyCode::BackTab => NavigationAction::Previous,

            KeyCode::Char(c) => NavigationAction::Char(c),

            _ => NavigationAction::None,
        }
    }
}

impl Default for PageController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controller_creation() {
        let controller = PageController::new();
        assert_eq!(controller.current(), Page::Welcome);
        assert!(!controller.should_quit());
        assert_eq!(controller.visible_pages(), vec![Page::Welcome]);
    }

    #[test]
    fn test_show_by_name() {
        let mut controller = PageController::new();

        assert_eq!(controller.show("WorkoutPage").unwrap(), Page::Workout);
        assert_eq!(controller.visible_pages(), vec![Page::Workout]);

        assert_eq!(controller.show("WelcomePage").unwrap(), Page::Welcome);
        assert_eq!(controller.visible_pages(), vec![Page::Welcome]);
    }

    #[test]
    fn test_unknown_page_keeps_current() {
        let mut controller = PageController::new();
        controller.show_page(Page::Stopwatch);

        let err = controller.show("NoSuchPage").unwrap_err();
        assert!(matches!(err, AppError::UnknownPage(ref name) if name == "NoSuchPage"));
        assert_eq!(controller.current(), Page::Stopwatch);
        assert_eq!(controller.visible_pages().len(), 1);
    }

    #[test]
    fn test_page_names_round_trip() {
        for page in Page::ALL {
            assert_eq!(page.name().parse::<Page>().unwrap(), page);
        }
        assert!("welcomepage".parse::<Page>().is_err());
    }

    #[test]
    fn test_close() {
        let mut controller = PageController::new();
        controller.close();
        assert!(controller.should_quit());
    }

    #[test]
    fn test_key_to_navigation() {
        assert_eq!(
            PageController::key_to_navigation(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            NavigationAction::Quit
        );
        assert_eq!(
            PageController::key_to_navigation(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)),
            NavigationAction::Char('c')
        );
        assert_eq!(
            PageController::key_to_navigation(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
            NavigationAction::Up
        );
        assert_eq!(
            PageController::key_to_navigation(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            NavigationAction::Select
        );
        assert_eq!(
            PageController::key_to_navigation(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)),
            NavigationAction::Toggle
        );
        assert_eq!(
            PageController::key_to_navigation(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            NavigationAction::Back
        );
        assert_eq!(
            PageController::key_to_navigation(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
            NavigationAction::Next
        );
        assert_eq!(
            PageController::key_to_navigation(KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT)),
            NavigationAction::Previous
        );
        assert_eq!(
            PageController::key_to_navigation(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            NavigationAction::Previous
        );
        assert_eq!(
            PageController::key_to_navigation(KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE)),
            NavigationAction::None
        );
    }
}
