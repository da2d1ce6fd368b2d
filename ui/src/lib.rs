//! Userdeck desktop app: the eframe shell and the dashboard widgets.

pub mod app;
pub mod state;
pub mod widgets;

pub use app::UserdeckApp;
