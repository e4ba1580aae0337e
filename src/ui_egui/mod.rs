mod app;
pub mod details_dialog;
pub mod event_dialog;
pub mod theme;
pub mod views;

pub use app::CalendarApp;
