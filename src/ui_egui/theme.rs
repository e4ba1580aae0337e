//! Theme module for the egui calendar widget
//!
//! Defines the CalendarTheme structure and resolves it from settings.

use crate::models::settings::Settings;
use egui::Color32;

/// Colors used by the calendar views and modals
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Widget background color
    pub app_background: Color32,

    /// Outer frame border
    pub panel_border: Color32,

    /// Modal window background
    pub modal_background: Color32,

    /// Today's date background color
    pub today_background: Color32,

    /// Background of a hovered day cell
    pub day_hover: Color32,

    /// Dot drawn under days that have events
    pub event_marker: Color32,

    /// Border around event list entries
    pub card_border: Color32,

    /// Primary text color (headings, dates)
    pub text_primary: Color32,

    /// Secondary text color (month heading)
    pub text_secondary: Color32,

    /// Text inside modals
    pub modal_text: Color32,

    /// Fill behind text inputs in the event form
    pub field_background: Color32,

    pub button_primary: Color32,
    pub button_danger: Color32,
    pub button_neutral: Color32,
}

impl CalendarTheme {
    /// Deep navy palette
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(5, 21, 45),
            panel_border: Color32::from_rgb(15, 19, 25),
            modal_background: Color32::from_rgb(255, 255, 255),
            today_background: Color32::from_rgb(59, 130, 246),
            day_hover: Color32::from_rgb(30, 58, 138),
            event_marker: Color32::from_rgb(96, 165, 250),
            card_border: Color32::from_rgb(229, 231, 235),
            text_primary: Color32::from_rgb(255, 255, 255),
            text_secondary: Color32::from_rgb(156, 163, 175),
            modal_text: Color32::from_rgb(17, 24, 39),
            field_background: Color32::from_rgb(243, 244, 246),
            button_primary: Color32::from_rgb(59, 130, 246),
            button_danger: Color32::from_rgb(239, 68, 68),
            button_neutral: Color32::from_rgb(107, 114, 128),
        }
    }

    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            panel_border: Color32::from_rgb(220, 220, 220),
            modal_background: Color32::from_rgb(255, 255, 255),
            today_background: Color32::from_rgb(59, 130, 246),
            day_hover: Color32::from_rgb(219, 234, 254),
            event_marker: Color32::from_rgb(37, 99, 235),
            card_border: Color32::from_rgb(209, 213, 219),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
            modal_text: Color32::from_rgb(17, 24, 39),
            field_background: Color32::from_rgb(243, 244, 246),
            button_primary: Color32::from_rgb(59, 130, 246),
            button_danger: Color32::from_rgb(239, 68, 68),
            button_neutral: Color32::from_rgb(107, 114, 128),
        }
    }

    /// Pick the theme named in settings, asking the OS when set to "System"
    pub fn from_settings(settings: &Settings) -> Self {
        let dark = if settings.uses_system_theme() {
            match dark_light::detect() {
                dark_light::Mode::Dark => true,
                dark_light::Mode::Light => false,
                dark_light::Mode::Default => true,
            }
        } else {
            settings.prefers_dark()
        };

        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.panel_fill = self.app_background;
        visuals.window_fill = self.modal_background;
        visuals.window_stroke = egui::Stroke::new(1.0, self.card_border);
        visuals.widgets.hovered.bg_fill = self.day_hover;
        // TextEdit fills with extreme_bg_color
        visuals.extreme_bg_color = self.field_background;

        ctx.set_visuals(visuals);
    }
}
