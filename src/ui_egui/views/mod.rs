use egui::{Color32, RichText};

pub mod event_list;
pub mod month_view;

/// Filled button with white label, as used for every widget action
pub(crate) fn filled_button(ui: &mut egui::Ui, label: &str, fill: Color32) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(label).color(Color32::WHITE))
            .fill(fill)
            .rounding(egui::Rounding::same(4.0)),
    )
}
