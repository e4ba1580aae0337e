use super::CalendarState;
use chrono::{Datelike, NaiveDate};

impl CalendarState {
    pub(super) fn previous_month(&mut self) -> bool {
        let (year, month) = if self.month == 1 {
            (self.year - 1, 12)
        } else {
            (self.year, self.month - 1)
        };
        self.show_month(year, month)
    }

    pub(super) fn next_month(&mut self) -> bool {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        self.show_month(year, month)
    }

    pub(super) fn go_to_today(&mut self) -> bool {
        let (year, month) = (self.today.year(), self.today.month());
        if (year, month) == (self.year, self.month) {
            return false;
        }
        self.show_month(year, month)
    }

    /// Switch the visible grid; refuses months chrono cannot represent
    fn show_month(&mut self, year: i32, month: u32) -> bool {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return false;
        }
        self.year = year;
        self.month = month;
        true
    }
}
