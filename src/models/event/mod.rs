// Event module
// Calendar event model: a dated entry with a wall-clock time and a description

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique event identifier (creation time in epoch milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventId(pub i64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A calendar event attached to a single date.
///
/// `time` is kept as the `"HH:MM"` string the form produced. It is never
/// parsed or validated, so `"24:00"` or `"ab:cd"` are stored as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: EventId,
    pub date: NaiveDate,
    pub time: String,
    pub text: String,
}

impl CalendarEvent {
    /// Create a new event
    ///
    /// # Examples
    /// ```
    /// use month_calendar::models::event::{CalendarEvent, EventId};
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    /// let event = CalendarEvent::new(EventId(1), date, "09:05", "Standup");
    /// assert_eq!(event.hours(), "09");
    /// assert_eq!(event.minutes(), "05");
    /// ```
    pub fn new(
        id: EventId,
        date: NaiveDate,
        time: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date,
            time: time.into(),
            text: text.into(),
        }
    }

    /// Hours part of `time`; the whole string if there is no `:`
    pub fn hours(&self) -> &str {
        self.time.split(':').next().unwrap_or("")
    }

    /// Minutes part of `time`; empty if there is no `:`
    pub fn minutes(&self) -> &str {
        self.time.split(':').nth(1).unwrap_or("")
    }
}
