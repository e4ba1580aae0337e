// Settings module
// User-editable widget configuration, loaded from config.toml

use serde::{Deserialize, Serialize};

/// When the hours/minutes form fields are zero-padded to two digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimePadding {
    /// Keep the raw input while typing; pad once when the event is saved
    #[default]
    OnSubmit,
    /// Pad every change immediately ("1" becomes "01", then "012")
    OnKeystroke,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// "Dark", "Light" or "System"
    pub theme: String,
    pub time_padding: TimePadding,
    pub first_day_of_week: u8, // 0 = Sunday
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "Dark".to_string(),
            time_padding: TimePadding::default(),
            first_day_of_week: 0,
            window_width: 1100.0,
            window_height: 700.0,
        }
    }
}

impl Settings {
    pub fn uses_system_theme(&self) -> bool {
        self.theme.eq_ignore_ascii_case("system")
    }

    pub fn prefers_dark(&self) -> bool {
        !self.theme.eq_ignore_ascii_case("light")
    }
}
