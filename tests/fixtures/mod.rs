// Test fixtures - reusable test data
// Provides a calendar pinned to a known "today" across test files

#![allow(dead_code)]

use chrono::NaiveDate;
use month_calendar::models::settings::{Settings, TimePadding};
use month_calendar::services::calendar::{CalendarAction, CalendarState};
use month_calendar::services::clock::FixedClock;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Saturday, June 15, 2024 - the pinned "today"
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    /// Dec 31, 2024 (year boundary)
    pub fn new_years_eve_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }
}

/// Calendar whose today is `dates::today()`, default settings
pub fn calendar() -> CalendarState {
    calendar_on(dates::today(), TimePadding::OnSubmit)
}

pub fn calendar_on(today: NaiveDate, padding: TimePadding) -> CalendarState {
    let settings = Settings {
        time_padding: padding,
        ..Settings::default()
    };
    CalendarState::new(FixedClock::new(today), &settings)
}

/// Click `day` in the visible month, fill the form, submit
pub fn add_event(state: &mut CalendarState, day: u32, hours: &str, minutes: &str, text: &str) {
    state.apply(CalendarAction::SelectDay(day));
    state.apply(CalendarAction::SetHours(hours.to_string()));
    state.apply(CalendarAction::SetMinutes(minutes.to_string()));
    state.apply(CalendarAction::SetText(text.to_string()));
    state.apply(CalendarAction::SubmitForm);
}
