//! Calendar widget state store.
//!
//! `CalendarState` owns everything the month grid, navigation controls, event
//! form, event list and details modal render from. Views never mutate it
//! directly; they hand back [`CalendarAction`]s which are applied here, one at
//! a time, through [`CalendarState::apply`].

mod form;
mod navigation;

pub use form::{pad_time_field, EventDraft};

use crate::models::event::{CalendarEvent, EventId};
use crate::models::settings::{Settings, TimePadding};
use crate::services::clock::Clock;
use crate::services::event::EventList;
use chrono::{Datelike, NaiveDate};

/// A user intent produced by one of the views
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarAction {
    PreviousMonth,
    NextMonth,
    GoToToday,
    /// Day cell clicked in the visible month
    SelectDay(u32),
    SetHours(String),
    SetMinutes(String),
    SetText(String),
    SubmitForm,
    CancelForm,
    EditEvent(EventId),
    DeleteEvent(EventId),
    ShowDetails(EventId),
    CloseDetails,
}

pub struct CalendarState {
    year: i32,
    /// 1 = January
    month: u32,
    /// Captured once at construction
    today: NaiveDate,
    selected_date: NaiveDate,
    draft: EventDraft,
    editing: Option<EventId>,
    selected_event: Option<CalendarEvent>,
    show_event_popup: bool,
    events: EventList,
    time_padding: TimePadding,
    first_day_of_week: u8,
    clock: Box<dyn Clock>,
    last_issued_id: Option<i64>,
}

impl CalendarState {
    pub fn new(clock: impl Clock + 'static, settings: &Settings) -> Self {
        let today = clock.today();
        log::debug!("Calendar state created, today is {}", today);

        Self {
            year: today.year(),
            month: today.month(),
            today,
            selected_date: today,
            draft: EventDraft::default(),
            editing: None,
            selected_event: None,
            show_event_popup: false,
            events: EventList::new(),
            time_padding: settings.time_padding,
            first_day_of_week: settings.first_day_of_week,
            clock: Box::new(clock),
            last_issued_id: None,
        }
    }

    /// Apply one action. Returns `false` when the action was a no-op
    /// (past day, unknown id, out-of-range navigation).
    pub fn apply(&mut self, action: CalendarAction) -> bool {
        log::debug!("Applying {:?}", action);

        let changed = match action {
            CalendarAction::PreviousMonth => self.previous_month(),
            CalendarAction::NextMonth => self.next_month(),
            CalendarAction::GoToToday => self.go_to_today(),
            CalendarAction::SelectDay(day) => self.select_day(day),
            CalendarAction::SetHours(raw) => self.set_hours(raw),
            CalendarAction::SetMinutes(raw) => self.set_minutes(raw),
            CalendarAction::SetText(raw) => self.set_text(raw),
            CalendarAction::SubmitForm => self.submit_form(),
            CalendarAction::CancelForm => self.cancel_form(),
            CalendarAction::EditEvent(id) => self.begin_edit(id),
            CalendarAction::DeleteEvent(id) => self.delete_event(id),
            CalendarAction::ShowDetails(id) => self.show_details(id),
            CalendarAction::CloseDetails => self.selected_event.take().is_some(),
        };

        if !changed {
            log::debug!("Action had no effect");
        }
        changed
    }

    fn select_day(&mut self, day: u32) -> bool {
        let Some(date) = NaiveDate::from_ymd_opt(self.year, self.month, day) else {
            return false;
        };
        if date < self.today {
            return false;
        }
        self.open_form_for(date);
        true
    }

    fn delete_event(&mut self, id: EventId) -> bool {
        let removed = self.events.remove(id);
        if removed {
            log::info!("Deleted event {}", id);
        }
        removed
    }

    fn show_details(&mut self, id: EventId) -> bool {
        match self.events.get(id) {
            Some(event) => {
                self.selected_event = Some(event.clone());
                true
            }
            None => false,
        }
    }

    /// Fresh creation-time token, strictly greater than any issued before
    fn next_event_id(&mut self) -> EventId {
        let now = self.clock.now_millis();
        let id = match self.last_issued_id {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last_issued_id = Some(id);
        EventId(id)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Visible month, 1 = January
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Visible month as a 0-based index (0 = January)
    pub fn month0(&self) -> u32 {
        self.month - 1
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn is_today(&self, day: u32) -> bool {
        self.year == self.today.year() && self.month == self.today.month() && day == self.today.day()
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    pub fn editing(&self) -> Option<EventId> {
        self.editing
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn selected_event(&self) -> Option<&CalendarEvent> {
        self.selected_event.as_ref()
    }

    pub fn show_event_popup(&self) -> bool {
        self.show_event_popup
    }

    pub fn events(&self) -> &EventList {
        &self.events
    }

    pub fn first_day_of_week(&self) -> u8 {
        self.first_day_of_week
    }
}
