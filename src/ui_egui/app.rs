mod lifecycle;
mod shortcuts;

use crate::services::calendar::CalendarState;
use crate::ui_egui::theme::CalendarTheme;

/// Top-level widget: owns the calendar state and renders every view from it
pub struct CalendarApp {
    /// Single state bag shared by grid, navigation, form, list and details
    state: CalendarState,
    /// Currently applied theme colors
    active_theme: CalendarTheme,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}
