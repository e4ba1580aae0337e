use super::CalendarState;
use crate::models::event::{CalendarEvent, EventId};
use crate::models::settings::TimePadding;
use chrono::NaiveDate;

/// Uncommitted form fields for the event popup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub hours: String,
    pub minutes: String,
    pub text: String,
}

/// Left-pad with `'0'` to two characters. Longer values are kept whole.
pub fn pad_time_field(raw: &str) -> String {
    format!("{:0>2}", raw)
}

impl CalendarState {
    pub(super) fn open_form_for(&mut self, date: NaiveDate) {
        self.selected_date = date;
        self.show_event_popup = true;
        self.draft = EventDraft::default();
        self.editing = None;
    }

    pub(super) fn set_hours(&mut self, raw: String) -> bool {
        self.draft.hours = self.normalize_time_input(raw);
        true
    }

    pub(super) fn set_minutes(&mut self, raw: String) -> bool {
        self.draft.minutes = self.normalize_time_input(raw);
        true
    }

    pub(super) fn set_text(&mut self, raw: String) -> bool {
        self.draft.text = raw;
        true
    }

    fn normalize_time_input(&self, raw: String) -> String {
        match self.time_padding {
            TimePadding::OnKeystroke => pad_time_field(&raw),
            TimePadding::OnSubmit => raw,
        }
    }

    /// Commit the draft: replace the edited event or append a new one,
    /// then re-sort and reset the form.
    pub(super) fn submit_form(&mut self) -> bool {
        let id = match self.editing {
            Some(id) => id,
            None => self.next_event_id(),
        };
        let draft = std::mem::take(&mut self.draft);
        let event = CalendarEvent {
            id,
            date: self.selected_date,
            time: format!(
                "{}:{}",
                pad_time_field(&draft.hours),
                pad_time_field(&draft.minutes)
            ),
            text: draft.text,
        };

        if self.editing.is_some() {
            if !self.events.replace(event) {
                log::debug!("Edited event {} no longer exists", id);
            }
        } else {
            log::info!("Added event {} on {}", id, event.date);
            self.events.push(event);
        }
        self.events.sort_by_date();

        self.show_event_popup = false;
        self.editing = None;
        true
    }

    /// Close the popup. Draft fields and edit mode are left as they are;
    /// the next open resets them.
    pub(super) fn cancel_form(&mut self) -> bool {
        let was_open = self.show_event_popup;
        self.show_event_popup = false;
        was_open
    }

    /// Load an existing event into the form in edit mode
    pub(super) fn begin_edit(&mut self, id: EventId) -> bool {
        let Some(event) = self.events.get(id) else {
            return false;
        };

        self.selected_date = event.date;
        self.draft = EventDraft {
            hours: event.hours().to_string(),
            minutes: event.minutes().to_string(),
            text: event.text.clone(),
        };
        self.editing = Some(id);
        self.show_event_popup = true;
        true
    }
}
