// Integration tests for the calendar widget state flows
mod fixtures;

use chrono::NaiveDate;
use fixtures::{add_event, calendar, calendar_on, dates};
use month_calendar::models::settings::TimePadding;
use month_calendar::services::calendar::{CalendarAction, EventDraft};
use month_calendar::ui_egui::details_dialog::details_lines;
use month_calendar::utils::date::format_long_date;
use pretty_assertions::assert_eq;

#[test]
fn test_create_event_flow() {
    let mut state = calendar();

    assert!(state.apply(CalendarAction::SelectDay(20)));
    assert!(state.show_event_popup());
    assert_eq!(state.draft(), &EventDraft::default());
    assert_eq!(state.editing(), None);

    state.apply(CalendarAction::SetHours("9".to_string()));
    state.apply(CalendarAction::SetMinutes("5".to_string()));
    state.apply(CalendarAction::SetText("Standup".to_string()));
    assert!(state.apply(CalendarAction::SubmitForm));

    assert!(!state.show_event_popup());
    assert_eq!(state.events().len(), 1);
    let event = state.events().iter().next().unwrap();
    assert_eq!(event.date, NaiveDate::from_ymd_opt(2024, 6, 20).unwrap());
    assert_eq!(event.time, "09:05");
    assert_eq!(event.text, "Standup");
}

#[test]
fn test_past_day_click_changes_nothing() {
    let mut state = calendar();
    add_event(&mut state, 18, "10", "00", "existing");
    let events_before = state.events().clone();
    let selected_before = state.selected_date();

    assert!(!state.apply(CalendarAction::SelectDay(10)));

    assert!(!state.show_event_popup());
    assert_eq!(state.selected_date(), selected_before);
    assert_eq!(state.events(), &events_before);
}

#[test]
fn test_events_sorted_across_months() {
    let mut state = calendar();
    state.apply(CalendarAction::NextMonth);
    add_event(&mut state, 3, "08", "00", "July");
    state.apply(CalendarAction::PreviousMonth);
    add_event(&mut state, 30, "08", "00", "June end");
    add_event(&mut state, 15, "23", "59", "Today");

    let texts: Vec<&str> = state.events().iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["Today", "June end", "July"]);
}

#[test]
fn test_edit_replaces_in_place() {
    let mut state = calendar();
    add_event(&mut state, 16, "8", "0", "first");
    add_event(&mut state, 17, "9", "0", "second");
    add_event(&mut state, 18, "10", "0", "third");
    let target = state.events().iter().nth(1).unwrap().clone();

    state.apply(CalendarAction::EditEvent(target.id));
    assert_eq!(state.draft().hours, "09");
    assert_eq!(state.draft().minutes, "00");
    state.apply(CalendarAction::SetText("second, revised".to_string()));
    state.apply(CalendarAction::SetMinutes("45".to_string()));
    state.apply(CalendarAction::SubmitForm);

    assert_eq!(state.events().len(), 3);
    let revised = state.events().iter().nth(1).unwrap();
    assert_eq!(revised.id, target.id);
    assert_eq!(revised.text, "second, revised");
    assert_eq!(revised.time, "09:45");
}

#[test]
fn test_delete_removes_exactly_one() {
    let mut state = calendar();
    add_event(&mut state, 16, "8", "0", "keep");
    add_event(&mut state, 17, "9", "0", "drop");
    add_event(&mut state, 18, "10", "0", "keep too");
    let drop_id = state.events().iter().nth(1).unwrap().id;
    let kept: Vec<_> = state
        .events()
        .iter()
        .filter(|e| e.id != drop_id)
        .cloned()
        .collect();

    assert!(state.apply(CalendarAction::DeleteEvent(drop_id)));
    assert_eq!(state.events().iter().cloned().collect::<Vec<_>>(), kept);

    assert!(!state.apply(CalendarAction::DeleteEvent(drop_id)));
    assert_eq!(state.events().len(), 2);
}

#[test]
fn test_details_round_trip() {
    let mut state = calendar();
    add_event(&mut state, 21, "14", "30", "Dentist");
    let stored = state.events().iter().next().unwrap().clone();

    state.apply(CalendarAction::ShowDetails(stored.id));
    let shown = state.selected_event().unwrap();
    assert_eq!(shown, &stored);

    let [heading, time, description] = details_lines(shown);
    assert_eq!(heading, format!("Event on {}", format_long_date(stored.date)));
    assert_eq!(heading, "Event on June 21, 2024");
    assert_eq!(time, "Time: 14:30");
    assert_eq!(description, "Description: Dentist");

    state.apply(CalendarAction::CloseDetails);
    assert!(state.selected_event().is_none());
}

#[test]
fn test_cancel_then_reopen_resets_draft() {
    let mut state = calendar();
    state.apply(CalendarAction::SelectDay(16));
    state.apply(CalendarAction::SetText("abandoned".to_string()));
    state.apply(CalendarAction::CancelForm);
    assert!(state.events().is_empty());

    state.apply(CalendarAction::SelectDay(16));
    assert_eq!(state.draft(), &EventDraft::default());
}

#[test]
fn test_year_rollover_navigation() {
    let mut state = calendar_on(dates::new_years_eve_2024(), TimePadding::OnSubmit);

    state.apply(CalendarAction::NextMonth);
    assert_eq!((state.year(), state.month0()), (2025, 0));
    add_event(&mut state, 1, "0", "0", "New year");
    assert_eq!(
        state.events().iter().next().map(|e| e.date),
        NaiveDate::from_ymd_opt(2025, 1, 1)
    );

    state.apply(CalendarAction::PreviousMonth);
    assert_eq!((state.year(), state.month0()), (2024, 11));
}

#[test]
fn test_keystroke_padding_flow() {
    let mut state = calendar_on(dates::today(), TimePadding::OnKeystroke);
    state.apply(CalendarAction::SelectDay(15));
    state.apply(CalendarAction::SetHours("1".to_string()));
    // the text field now shows "01"; typing "2" after it
    state.apply(CalendarAction::SetHours(format!("{}2", state.draft().hours)));
    state.apply(CalendarAction::SetMinutes("7".to_string()));
    state.apply(CalendarAction::SubmitForm);

    assert_eq!(state.events().iter().next().unwrap().time, "012:07");
}
