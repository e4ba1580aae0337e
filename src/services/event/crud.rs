use super::EventList;
use crate::models::event::{CalendarEvent, EventId};

impl EventList {
    /// Append an event. Call `sort_by_date` afterwards to restore order.
    pub fn push(&mut self, event: CalendarEvent) {
        self.events.push(event);
    }

    /// Replace the event sharing `event.id` in place.
    ///
    /// Returns `false` and leaves the list untouched when no event matches.
    pub fn replace(&mut self, event: CalendarEvent) -> bool {
        match self.events.iter_mut().find(|existing| existing.id == event.id) {
            Some(slot) => {
                *slot = event;
                true
            }
            None => false,
        }
    }

    /// Remove the event with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: EventId) -> bool {
        let before = self.events.len();
        self.events.retain(|event| event.id != id);
        self.events.len() != before
    }

    /// Stable sort by date; same-day events keep their relative order.
    pub fn sort_by_date(&mut self) {
        self.events.sort_by_key(|event| event.date);
    }
}
