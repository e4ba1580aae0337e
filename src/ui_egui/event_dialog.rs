use egui::RichText;

use crate::services::calendar::{CalendarAction, CalendarState};
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::filled_button;

/// Label of the form's submit button
pub fn submit_label(editing: bool) -> &'static str {
    if editing {
        "Update Event"
    } else {
        "Add Event"
    }
}

/// Render the create/edit popup for `state.selected_date()`.
///
/// Field edits are reported as actions; the draft in `state` is only
/// updated once the caller applies them.
pub fn render_event_dialog(
    ctx: &egui::Context,
    state: &CalendarState,
    theme: &CalendarTheme,
    actions: &mut Vec<CalendarAction>,
) {
    let draft = state.draft();
    let mut hours = draft.hours.clone();
    let mut minutes = draft.minutes.clone();
    let mut text = draft.text.clone();

    egui::Window::new("event_form")
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_width(360.0);

            ui.horizontal(|ui| {
                let hours_edit = egui::TextEdit::singleline(&mut hours)
                    .hint_text("00")
                    .desired_width(48.0)
                    .text_color(theme.modal_text);
                if ui.add(hours_edit).changed() {
                    actions.push(CalendarAction::SetHours(hours.clone()));
                }

                ui.label(RichText::new(":").color(theme.modal_text));

                let minutes_edit = egui::TextEdit::singleline(&mut minutes)
                    .hint_text("00")
                    .desired_width(48.0)
                    .text_color(theme.modal_text);
                if ui.add(minutes_edit).changed() {
                    actions.push(CalendarAction::SetMinutes(minutes.clone()));
                }
            });
            ui.add_space(12.0);

            let description = egui::TextEdit::multiline(&mut text)
                .hint_text("Event description...")
                .desired_width(f32::INFINITY)
                .desired_rows(3)
                .text_color(theme.modal_text);
            if ui.add(description).changed() {
                actions.push(CalendarAction::SetText(text.clone()));
            }
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                let label = submit_label(state.is_editing());
                if filled_button(ui, label, theme.button_primary).clicked() {
                    actions.push(CalendarAction::SubmitForm);
                }
                if filled_button(ui, "Cancel", theme.button_neutral).clicked() {
                    actions.push(CalendarAction::CancelForm);
                }
            });
        });
}
