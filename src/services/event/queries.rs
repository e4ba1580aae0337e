use super::EventList;
use crate::models::event::{CalendarEvent, EventId};
use chrono::NaiveDate;

impl EventList {
    pub fn get(&self, id: EventId) -> Option<&CalendarEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CalendarEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Whether any event falls on `date` (drives the day-cell marker)
    pub fn has_events_on(&self, date: NaiveDate) -> bool {
        self.events.iter().any(|event| event.date == date)
    }
}
