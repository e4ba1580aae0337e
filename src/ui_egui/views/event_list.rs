use egui::{Margin, RichText, Stroke};

use super::filled_button;
use crate::models::event::CalendarEvent;
use crate::services::calendar::{CalendarAction, CalendarState};
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::format_long_date;

pub struct EventListView;

impl EventListView {
    /// Every stored event in date order, each with Details/Edit/Delete.
    pub fn show(
        ui: &mut egui::Ui,
        state: &CalendarState,
        theme: &CalendarTheme,
        actions: &mut Vec<CalendarAction>,
    ) {
        let events = state.events();
        if events.is_empty() {
            ui.label(RichText::new("No events added.").color(theme.text_primary));
            return;
        }

        let max_height = ui.ctx().screen_rect().height() * 0.7;
        egui::ScrollArea::vertical()
            .max_height(max_height)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for event in events {
                    Self::event_card(ui, event, theme, actions);
                    ui.add_space(16.0);
                }
            });
    }

    fn event_card(
        ui: &mut egui::Ui,
        event: &CalendarEvent,
        theme: &CalendarTheme,
        actions: &mut Vec<CalendarAction>,
    ) {
        egui::Frame::none()
            .stroke(Stroke::new(1.0, theme.card_border))
            .rounding(egui::Rounding::same(4.0))
            .inner_margin(Margin::same(16.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                ui.horizontal(|ui| {
                    ui.label(RichText::new(format_long_date(event.date)).color(theme.text_primary));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(&event.time).color(theme.text_primary));
                    });
                });
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    if filled_button(ui, "Details", theme.button_primary).clicked() {
                        actions.push(CalendarAction::ShowDetails(event.id));
                    }
                    if filled_button(ui, "Edit", theme.button_primary).clicked() {
                        actions.push(CalendarAction::EditEvent(event.id));
                    }
                    if filled_button(ui, "Delete", theme.button_danger).clicked() {
                        actions.push(CalendarAction::DeleteEvent(event.id));
                    }
                });
            });
    }
}
