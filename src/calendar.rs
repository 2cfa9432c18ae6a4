//! Month grid model behind the in-app date picker.
//!
//! Weeks start on Sunday. The picker only offers days from `today` onwards
//! and will not page back past the month containing `today`.

use chrono::{Datelike, Months, NaiveDate};

/// A month shown by the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthCursor {
    first: NaiveDate,
}

impl MonthCursor {
    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// "June 2025"
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    pub fn next(&self) -> Self {
        Self {
            first: self
                .first
                .checked_add_months(Months::new(1))
                .unwrap_or(self.first),
        }
    }

    /// The previous month, unless that would go before the month of `today`.
    pub fn prev(&self, today: NaiveDate) -> Option<Self> {
        if !self.can_go_back(today) {
            return None;
        }
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
    }

    pub fn can_go_back(&self, today: NaiveDate) -> bool {
        *self > Self::containing(today)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    fn days_in_month(&self) -> u32 {
        let next = self.next().first;
        if next == self.first {
            // Last representable month; chrono's range ends on Dec 31.
            return 31;
        }
        next.signed_duration_since(self.first).num_days() as u32
    }
}

/// Sunday-first weeks of the month; padding cells are `None`.
pub fn month_grid(cursor: MonthCursor) -> Vec<[Option<NaiveDate>; 7]> {
    let lead = cursor.first.weekday().num_days_from_sunday() as usize;
    let days = cursor.days_in_month() as usize;

    let mut weeks = Vec::with_capacity((lead + days).div_ceil(7));
    let mut week = [None; 7];
    for (offset, date) in cursor.first.iter_days().take(days).enumerate() {
        let cell = lead + offset;
        week[cell % 7] = Some(date);
        if cell % 7 == 6 {
            weeks.push(week);
            week = [None; 7];
        }
    }
    if week.iter().any(Option::is_some) {
        weeks.push(week);
    }
    weeks
}

/// Column headings matching [`month_grid`].
pub const WEEKDAY_HEADINGS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Days before `today` cannot be booked.
pub fn is_selectable(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today
}
