//! In-memory event collection.
//! Mutations live in `crud`, read-only lookups in `queries`.

use crate::models::event::CalendarEvent;

pub mod crud;
pub mod queries;

/// Ordered list of events, kept sorted ascending by date.
///
/// Ordering among events on the same date follows insertion order, since
/// `sort_by_date` is a stable sort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventList {
    events: Vec<CalendarEvent>,
}

impl EventList {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FromIterator<CalendarEvent> for EventList {
    fn from_iter<I: IntoIterator<Item = CalendarEvent>>(iter: I) -> Self {
        let mut list = Self {
            events: iter.into_iter().collect(),
        };
        list.sort_by_date();
        list
    }
}

impl<'a> IntoIterator for &'a EventList {
    type Item = &'a CalendarEvent;
    type IntoIter = std::slice::Iter<'a, CalendarEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
