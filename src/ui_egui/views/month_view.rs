use egui::{Align2, FontId, Sense, Vec2};

use crate::services::calendar::{CalendarAction, CalendarState};
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::{format_month_heading, month_grid, weekday_labels};

const CELL_SPACING: f32 = 4.0;
const CELL_HEIGHT: f32 = 40.0;

pub struct MonthView;

impl MonthView {
    /// Title, month navigation, weekday header and the day grid.
    pub fn show(
        ui: &mut egui::Ui,
        state: &CalendarState,
        theme: &CalendarTheme,
        actions: &mut Vec<CalendarAction>,
    ) {
        ui.label(
            egui::RichText::new("Calendar")
                .size(40.0)
                .strong()
                .color(theme.text_primary),
        );
        ui.add_space(16.0);

        Self::show_navigation(ui, state, theme, actions);
        ui.add_space(16.0);

        let col_width = (ui.available_width() - CELL_SPACING * 6.0) / 7.0;

        egui::Grid::new("month_header_grid")
            .spacing([CELL_SPACING, CELL_SPACING])
            .min_col_width(col_width)
            .max_col_width(col_width)
            .show(ui, |ui| {
                for label in weekday_labels(state.first_day_of_week()) {
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new(label).color(theme.text_primary));
                    });
                }
                ui.end_row();
            });

        ui.add_space(8.0);

        let cells = month_grid(state.year(), state.month(), state.first_day_of_week());
        egui::Grid::new("month_grid")
            .spacing([CELL_SPACING, CELL_SPACING])
            .show(ui, |ui| {
                for (idx, cell) in cells.iter().enumerate() {
                    match cell {
                        Some(day) => Self::day_cell(ui, state, theme, *day, col_width, actions),
                        None => {
                            ui.allocate_exact_size(Vec2::new(col_width, CELL_HEIGHT), Sense::hover());
                        }
                    }
                    if idx % 7 == 6 {
                        ui.end_row();
                    }
                }
            });
    }

    fn show_navigation(
        ui: &mut egui::Ui,
        state: &CalendarState,
        theme: &CalendarTheme,
        actions: &mut Vec<CalendarAction>,
    ) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format_month_heading(state.year(), state.month()))
                    .size(22.0)
                    .color(theme.text_secondary),
            );
            ui.add_space(12.0);

            let prev = egui::Button::new(
                egui::RichText::new("<").size(20.0).color(theme.text_primary),
            )
            .frame(false);
            if ui.add(prev).on_hover_text("Previous month").clicked() {
                actions.push(CalendarAction::PreviousMonth);
            }

            let next = egui::Button::new(
                egui::RichText::new(">").size(20.0).color(theme.text_primary),
            )
            .frame(false);
            if ui.add(next).on_hover_text("Next month").clicked() {
                actions.push(CalendarAction::NextMonth);
            }
        });
    }

    fn day_cell(
        ui: &mut egui::Ui,
        state: &CalendarState,
        theme: &CalendarTheme,
        day: u32,
        width: f32,
        actions: &mut Vec<CalendarAction>,
    ) {
        let (rect, response) = ui.allocate_exact_size(Vec2::new(width, CELL_HEIGHT), Sense::click());
        let date = chrono::NaiveDate::from_ymd_opt(state.year(), state.month(), day);
        let is_today = state.is_today(day);

        let painter = ui.painter();
        if is_today {
            painter.rect_filled(rect, 8.0, theme.today_background);
        } else if response.hovered() {
            painter.rect_filled(rect, 8.0, theme.day_hover);
        }

        let text_color = if is_today {
            egui::Color32::WHITE
        } else {
            theme.text_primary
        };
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            day.to_string(),
            FontId::proportional(16.0),
            text_color,
        );

        if date.is_some_and(|date| state.events().has_events_on(date)) {
            painter.circle_filled(
                egui::pos2(rect.center().x, rect.bottom() - 6.0),
                2.5,
                theme.event_marker,
            );
        }

        // Past days stay clickable-looking but the state ignores them
        let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);
        if response.clicked() {
            actions.push(CalendarAction::SelectDay(day));
        }
    }
}
