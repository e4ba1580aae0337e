use egui::RichText;

use crate::models::event::CalendarEvent;
use crate::services::calendar::CalendarAction;
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::filled_button;
use crate::utils::date::format_long_date;

/// The three read-only lines shown for an event: heading, time, description
pub fn details_lines(event: &CalendarEvent) -> [String; 3] {
    [
        format!("Event on {}", format_long_date(event.date)),
        format!("Time: {}", event.time),
        format!("Description: {}", event.text),
    ]
}

pub fn render_details_dialog(
    ctx: &egui::Context,
    event: &CalendarEvent,
    theme: &CalendarTheme,
    actions: &mut Vec<CalendarAction>,
) {
    let [heading, time, description] = details_lines(event);

    egui::Window::new("event_details")
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_width(360.0);
            ui.label(RichText::new(heading).size(20.0).strong().color(theme.modal_text));
            ui.add_space(8.0);
            ui.label(RichText::new(time).color(theme.modal_text));
            ui.add_space(4.0);
            ui.label(RichText::new(description).color(theme.modal_text));
            ui.add_space(16.0);

            if filled_button(ui, "Close", theme.button_primary).clicked() {
                actions.push(CalendarAction::CloseDetails);
            }
        });
}
