//! Integration tests for page switching

use appfit::app::{AppView, Page, PageController};
use appfit::config::AppConfig;
use appfit::AppError;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

fn press(view: &mut AppView, code: KeyCode) {
    view.handle_key(KeyEvent::new(code, KeyModifiers::NONE), Instant::now());
}

#[test]
fn test_exactly_one_page_visible() {
    let mut controller = PageController::new();
    assert_eq!(controller.visible_pages(), vec![Page::Welcome]);

    controller.show("WorkoutPage").unwrap();
    assert_eq!(controller.visible_pages(), vec![Page::Workout]);

    controller.show("WelcomePage").unwrap();
    assert_eq!(controller.visible_pages(), vec![Page::Welcome]);
}

#[test]
fn test_unknown_page_is_rejected() {
    let mut controller = PageController::new();
    controller.show("BmiPage").unwrap();

    let result = controller.show("NoSuchPage");
    assert!(matches!(result, Err(AppError::UnknownPage(_))));
    assert_eq!(controller.current(), Page::Bmi);
    assert_eq!(controller.visible_pages().len(), 1);
}

#[test]
fn test_pages_keep_state_while_hidden() {
    let mut view = AppView::new(&AppConfig::default());
    view.show("BmiPage").unwrap();
    for c in "82".chars() {
        press(&mut view, KeyCode::Char(c));
    }

    view.show("StopwatchPage").unwrap();
    view.show("BmiPage").unwrap();
    assert_eq!(view.bmi().weight(), "82");
}

#[test]
fn test_welcome_close_entry_quits() {
    let mut view = AppView::new(&AppConfig::default());
    press(&mut view, KeyCode::Up); // wraps to "Fechar"
    press(&mut view, KeyCode::Enter);
    assert!(view.should_quit());
}

#[test]
fn test_escape_on_welcome_quits() {
    let mut view = AppView::new(&AppConfig::default());
    press(&mut view, KeyCode::Esc);
    assert!(view.should_quit());
}

#[test]
fn test_back_buttons_return_to_welcome() {
    let mut view = AppView::new(&AppConfig::default());

    view.show("StopwatchPage").unwrap();
    press(&mut view, KeyCode::Up); // "Voltar ao Menu"
    press(&mut view, KeyCode::Enter);
    assert_eq!(view.current_page(), Page::Welcome);

    view.show("BmiPage").unwrap();
    press(&mut view, KeyCode::BackTab); // back button
    press(&mut view, KeyCode::Enter);
    assert_eq!(view.current_page(), Page::Welcome);
    assert!(view.dialog().is_none());
}
