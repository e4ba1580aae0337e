use super::CalendarApp;
use crate::models::settings::Settings;
use crate::services::calendar::{CalendarAction, CalendarState};
use crate::services::clock::SystemClock;
use crate::ui_egui::details_dialog::render_details_dialog;
use crate::ui_egui::event_dialog::render_event_dialog;
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::event_list::EventListView;
use crate::ui_egui::views::month_view::MonthView;

impl CalendarApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let active_theme = CalendarTheme::from_settings(&settings);
        active_theme.apply_to_context(&cc.egui_ctx);
        log::info!(
            "Calendar widget mounted (theme={}, padding={:?})",
            settings.theme,
            settings.time_padding
        );

        Self {
            state: CalendarState::new(SystemClock, &settings),
            active_theme,
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions: Vec<CalendarAction> = Vec::new();

        self.handle_keyboard_shortcuts(ctx, &mut actions);

        let state = &self.state;
        let theme = &self.active_theme;
        let modal_open = state.show_event_popup() || state.selected_event().is_some();

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(theme.app_background)
                    .stroke(egui::Stroke::new(4.0, theme.panel_border))
                    .inner_margin(egui::Margin::same(48.0)),
            )
            .show(ctx, |ui| {
                ui.add_enabled_ui(!modal_open, |ui| {
                    ui.columns(2, |columns| {
                        MonthView::show(&mut columns[0], state, theme, &mut actions);
                        EventListView::show(&mut columns[1], state, theme, &mut actions);
                    });
                });
            });

        if modal_open {
            paint_modal_backdrop(ctx);
        }
        if state.show_event_popup() {
            render_event_dialog(ctx, state, theme, &mut actions);
        }
        if let Some(event) = state.selected_event() {
            render_details_dialog(ctx, event, theme, &mut actions);
        }

        for action in actions {
            self.state.apply(action);
        }
    }
}

/// Dim everything behind the modal windows
fn paint_modal_backdrop(ctx: &egui::Context) {
    let layer = egui::LayerId::new(egui::Order::PanelResizeLine, egui::Id::new("modal_backdrop"));
    ctx.layer_painter(layer).rect_filled(
        ctx.screen_rect(),
        0.0,
        egui::Color32::from_black_alpha(128),
    );
}
