//! TUI application module
//!
//! Contains the terminal user interface components, page management,
//! dialogs and the event loop.

pub mod app;
pub mod dialog;
pub mod screens;
pub mod state;
pub mod tui;
pub mod view;

pub use app::App;
pub use dialog::{Dialog, DialogKind};
pub use screens::{BmiScreen, StopwatchScreen, WelcomeScreen, WorkoutScreen};
pub use state::{NavigationAction, Page, PageController};
pub use tui::Tui;
pub use view::AppView;
