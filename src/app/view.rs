//! Page set and input routing
//!
//! Owns one instance of every page, the page controller and the open
//! dialog. Everything here is terminal-agnostic so key flows can be driven
//! directly.

use crate::{
    app::{
        dialog::{Dialog, ERROR_TITLE, RESULT_TITLE, WORKOUT_TITLE},
        screens::{
            BmiAction, BmiScreen, MenuAction, StopwatchButton, StopwatchScreen, WelcomeScreen,
            WorkoutAction, WorkoutScreen,
        },
        state::{NavigationAction, Page, PageController},
    },
    config::AppConfig,
    error, Result,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use std::time::Instant;

/// All pages plus navigation and modal state
pub struct AppView {
    controller: PageController,
    welcome: WelcomeScreen,
    bmi: BmiScreen,
    workout: WorkoutScreen,
    stopwatch: StopwatchScreen,
    dialog: Option<Dialog>,
}

impl AppView {
    /// Build every page once, in fixed order, with Welcome visible
    pub fn new(config: &AppConfig) -> Self {
        Self {
            controller: PageController::new(),
            welcome: WelcomeScreen::new(),
            bmi: BmiScreen::new(),
            workout: WorkoutScreen::new(),
            stopwatch: StopwatchScreen::new(config.refresh_interval),
            dialog: None,
        }
    }

    pub fn current_page(&self) -> Page {
        self.controller.current()
    }

    pub fn controller(&self) -> &PageController {
        &self.controller
    }

    /// Navigate by page name
    pub fn show(&mut self, name: &str) -> Result<Page> {
        self.controller.show(name)
    }

    pub fn should_quit(&self) -> bool {
        self.controller.should_quit()
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn welcome(&self) -> &WelcomeScreen {
        &self.welcome
    }

    pub fn bmi(&self) -> &BmiScreen {
        &self.bmi
    }

    pub fn workout(&self) -> &WorkoutScreen {
        &self.workout
    }

    pub fn stopwatch(&self) -> &StopwatchScreen {
        &self.stopwatch
    }

    /// Run periodic work; returns `true` if anything changed
    pub fn tick(&mut self, now: Instant) -> bool {
        self.stopwatch.tick(now)
    }

    /// Next instant the loop must wake for
    pub fn next_deadline(&self) -> Option<Instant> {
        self.stopwatch.next_deadline()
    }

    fn open_dialog(&mut self, dialog: Dialog) {
        tracing::debug!(title = %dialog.title, kind = ?dialog.kind, "dialog opened");
        self.dialog = Some(dialog);
    }

    /// Route one key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let action = PageController::key_to_navigation(key);

        if action == NavigationAction::Quit {
            self.controller.close();
            return;
        }

        if self.dialog.is_some() {
            if matches!(
                action,
                NavigationAction::Select | NavigationAction::Back | NavigationAction::Toggle
            ) {
                self.dialog = None;
                tracing::debug!("dialog dismissed");
            }
            return;
        }

        match self.controller.current() {
            Page::Welcome => self.handle_welcome(action),
            Page::Bmi => self.handle_bmi(key, action),
            Page::Workout => self.handle_workout(action),
            Page::Stopwatch => self.handle_stopwatch(action, now),
        }
    }

    fn handle_welcome(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Up | NavigationAction::Previous => self.welcome.select_previous(),
            NavigationAction::Down | NavigationAction::Next => self.welcome.select_next(),
            NavigationAction::Select => match self.welcome.selected_action() {
                MenuAction::Open(page) => self.controller.show_page(page),
                MenuAction::Close => self.controller.close(),
            },
            NavigationAction::Back | NavigationAction::Char('q') => self.controller.close(),
            _ => {}
        }
    }

    fn handle_bmi(&mut self, key: KeyEvent, action: NavigationAction) {
        match action {
            NavigationAction::Next | NavigationAction::Down => self.bmi.focus_next(),
            NavigationAction::Previous | NavigationAction::Up => self.bmi.focus_previous(),
            NavigationAction::Back => self.controller.show_page(Page::Welcome),
            NavigationAction::Select => match self.bmi.activate() {
                BmiAction::Back => self.controller.show_page(Page::Welcome),
                BmiAction::Calculate => self.calculate_bmi(),
            },
            NavigationAction::Char(c) => {
                self.bmi.insert_char(c);
            }
            NavigationAction::Toggle => {
                self.bmi.insert_char(' ');
            }
            _ if key.code == KeyCode::Backspace => {
                self.bmi.backspace();
            }
            _ => {}
        }
    }

    fn calculate_bmi(&mut self) {
        match self.bmi.calculate() {
            Ok(report) => {
                tracing::info!(
                    ratio = %report.formatted_ratio(),
                    category = ?report.category,
                    "bmi calculated"
                );
                self.open_dialog(Dialog::info(RESULT_TITLE, report.dialog_message()));
            }
            Err(err) => {
                tracing::warn!(error = %err, "bmi input rejected");
                self.open_dialog(Dialog::error(
                    ERROR_TITLE,
                    error::user_friendly_message(&err),
                ));
            }
        }
    }

    fn handle_workout(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Up | NavigationAction::Previous => self.workout.select_previous(),
            NavigationAction::Down | NavigationAction::Next => self.workout.select_next(),
            NavigationAction::Toggle => {
                self.workout.toggle();
            }
            NavigationAction::Select => match self.workout.activate() {
                WorkoutAction::Selected => {}
                WorkoutAction::Show => self.show_workout(),
                WorkoutAction::Back => self.controller.show_page(Page::Welcome),
            },
            NavigationAction::Back => self.controller.show_page(Page::Welcome),
            _ => {}
        }
    }

    fn show_workout(&mut self) {
        let text = self.workout.plan_text();
        if text.is_empty() {
            tracing::info!("workout requested without a selection");
            self.open_dialog(Dialog::warning(
                WORKOUT_TITLE,
                "Escolha um tipo de treino válido.",
            ));
        } else {
            tracing::info!(plan = self.workout.selected_key(), "workout shown");
            self.open_dialog(Dialog::info(WORKOUT_TITLE, text));
        }
    }

    fn handle_stopwatch(&mut self, action: NavigationAction, now: Instant) {
        match action {
            NavigationAction::Up | NavigationAction::Previous => self.stopwatch.select_previous(),
            NavigationAction::Down | NavigationAction::Next => self.stopwatch.select_next(),
            NavigationAction::Select | NavigationAction::Toggle => {
                let button = self.stopwatch.focus();
                self.press_stopwatch(button, now);
            }
            NavigationAction::Char('s') | NavigationAction::Char('S') => {
                self.press_stopwatch(StopwatchButton::Start, now)
            }
            NavigationAction::Char('p') | NavigationAction::Char('P') => {
                self.press_stopwatch(StopwatchButton::Stop, now)
            }
            NavigationAction::Char('r') | NavigationAction::Char('R') => {
                self.press_stopwatch(StopwatchButton::Reset, now)
            }
            NavigationAction::Back => self.controller.show_page(Page::Welcome),
            _ => {}
        }
    }

    fn press_stopwatch(&mut self, button: StopwatchButton, now: Instant) {
        match button {
            StopwatchButton::Start => {
                self.stopwatch.start(now);
            }
            StopwatchButton::Stop => {
                self.stopwatch.stop(now);
            }
            StopwatchButton::Reset => self.stopwatch.reset(),
            StopwatchButton::Back => self.controller.show_page(Page::Welcome),
        }
    }

    /// Draw the visible page and, on top, the open dialog
    pub fn render(&mut self, f: &mut Frame) {
        match self.controller.current() {
            Page::Welcome => self.welcome.render(f),
            Page::Bmi => self.bmi.render(f),
            Page::Workout => self.workout.render(f),
            Page::Stopwatch => self.stopwatch.render(f),
        }

        if let Some(dialog) = &self.dialog {
            dialog.render(f);
        }
    }
}
