use super::CalendarApp;
use crate::services::calendar::{CalendarAction, CalendarState};

/// Keys the widget reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Shortcut {
    Escape,
    ArrowLeft,
    ArrowRight,
    CtrlT,
}

impl CalendarApp {
    pub(super) fn handle_keyboard_shortcuts(
        &self,
        ctx: &egui::Context,
        actions: &mut Vec<CalendarAction>,
    ) {
        let pressed: Vec<Shortcut> = ctx.input(|i| {
            let mut keys = Vec::new();
            if i.key_pressed(egui::Key::Escape) {
                keys.push(Shortcut::Escape);
            }
            if i.key_pressed(egui::Key::ArrowLeft) {
                keys.push(Shortcut::ArrowLeft);
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                keys.push(Shortcut::ArrowRight);
            }
            if i.modifiers.ctrl && i.key_pressed(egui::Key::T) {
                keys.push(Shortcut::CtrlT);
            }
            keys
        });

        actions.extend(
            pressed
                .into_iter()
                .filter_map(|key| resolve_shortcut(&self.state, key)),
        );
    }
}

/// Map a key press to an action given which modals are open
pub(super) fn resolve_shortcut(state: &CalendarState, key: Shortcut) -> Option<CalendarAction> {
    let details_open = state.selected_event().is_some();
    let form_open = state.show_event_popup();

    match key {
        Shortcut::Escape if details_open => Some(CalendarAction::CloseDetails),
        Shortcut::Escape if form_open => Some(CalendarAction::CancelForm),
        Shortcut::Escape => None,
        _ if details_open || form_open => None,
        Shortcut::ArrowLeft => Some(CalendarAction::PreviousMonth),
        Shortcut::ArrowRight => Some(CalendarAction::NextMonth),
        Shortcut::CtrlT => Some(CalendarAction::GoToToday),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::Settings;
    use crate::services::clock::FixedClock;
    use chrono::NaiveDate;

    fn state() -> CalendarState {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        CalendarState::new(FixedClock::new(today), &Settings::default())
    }

    #[test]
    fn test_navigation_keys_without_modals() {
        let state = state();
        assert_eq!(
            resolve_shortcut(&state, Shortcut::ArrowLeft),
            Some(CalendarAction::PreviousMonth)
        );
        assert_eq!(
            resolve_shortcut(&state, Shortcut::ArrowRight),
            Some(CalendarAction::NextMonth)
        );
        assert_eq!(
            resolve_shortcut(&state, Shortcut::CtrlT),
            Some(CalendarAction::GoToToday)
        );
        assert_eq!(resolve_shortcut(&state, Shortcut::Escape), None);
    }

    #[test]
    fn test_escape_closes_form() {
        let mut state = state();
        state.apply(CalendarAction::SelectDay(20));

        assert_eq!(
            resolve_shortcut(&state, Shortcut::Escape),
            Some(CalendarAction::CancelForm)
        );
        assert_eq!(resolve_shortcut(&state, Shortcut::ArrowLeft), None);
    }

    #[test]
    fn test_escape_prefers_details() {
        let mut state = state();
        state.apply(CalendarAction::SelectDay(20));
        state.apply(CalendarAction::SubmitForm);
        let id = state.events().iter().next().unwrap().id;
        state.apply(CalendarAction::ShowDetails(id));
        state.apply(CalendarAction::SelectDay(21));

        assert_eq!(
            resolve_shortcut(&state, Shortcut::Escape),
            Some(CalendarAction::CloseDetails)
        );
    }
}
