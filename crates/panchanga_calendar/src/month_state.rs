//! Month assignment state with a forward-only commit cursor.
//!
//! Month numbers for a run of days are often known only once a later event
//! (a sankranti, a new moon) has been located. Each system therefore commits
//! months in ranges: `backfill(through, month)` assigns every day from the
//! cursor up to `through` and advances the cursor past it. The cursor never
//! moves backwards, so no day is assigned twice and no day is skipped.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::CalendarError;

/// The parallel month numbering systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthSystem {
    /// Sun's sidereal sign at sunset.
    SiderealSolar,
    /// Sun's tropical sign, committed at the sunrise-day of each transit.
    TropicalSolar,
    /// Amanta lunar month, new moon to new moon.
    Lunar,
    /// Tabular Islamic month of the civil date.
    Islamic,
}

/// Month number, intercalary flag and day of month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthDate {
    pub month: u32,
    pub day: u32,
    /// Lunar adhika (intercalary) month.
    pub adhika: bool,
}

/// Months under construction for one system.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSystemState {
    system: MonthSystem,
    months: Vec<Option<(u32, bool)>>,
    cursor: usize,
}

impl MonthSystemState {
    pub fn new(system: MonthSystem, len: usize) -> Self {
        Self {
            system,
            months: vec![None; len],
            cursor: 0,
        }
    }

    pub fn system(&self) -> MonthSystem {
        self.system
    }

    /// First day not yet assigned.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn month_at(&self, d: usize) -> Option<u32> {
        self.months.get(d).copied().flatten().map(|(m, _)| m)
    }

    /// Assign `month` to every day from the cursor through `through`
    /// inclusive. Returns how many days were assigned; a `through` behind
    /// the cursor assigns nothing.
    pub fn backfill(&mut self, through: usize, month: u32, adhika: bool) -> usize {
        if self.months.is_empty() {
            return 0;
        }
        let last = through.min(self.months.len() - 1);
        if last < self.cursor {
            return 0;
        }
        for slot in &mut self.months[self.cursor..=last] {
            *slot = Some((month, adhika));
        }
        let count = last + 1 - self.cursor;
        trace!(system = ?self.system, from = self.cursor, through = last, month, "backfill");
        self.cursor = last + 1;
        count
    }

    /// Assign `month` to every remaining day.
    pub fn fill_remaining(&mut self, month: u32, adhika: bool) -> usize {
        match self.months.len().checked_sub(1) {
            Some(last) => self.backfill(last, month, adhika),
            None => 0,
        }
    }

    /// Day-of-month numbering that restarts at 1 whenever the month changes.
    ///
    /// `first_day` is the day-of-month of day 0.
    pub fn days_from_changes(&self, first_day: u32) -> Vec<u32> {
        let mut out = Vec::with_capacity(self.months.len());
        let mut prev: Option<(u32, bool)> = None;
        for (d, month) in self.months.iter().enumerate() {
            let day = match (d, out.last()) {
                (0, _) | (_, None) => first_day,
                (_, Some(&last)) if *month == prev => last + 1,
                _ => 1,
            };
            out.push(day);
            prev = *month;
        }
        out
    }

    /// Freeze into a complete table; every day must have a month.
    pub fn finalize(self, days_of_month: &[u32]) -> Result<MonthTable, CalendarError> {
        let system = self.system;
        let dates = self
            .months
            .into_iter()
            .enumerate()
            .map(|(d, month)| {
                let (month, adhika) =
                    month.ok_or(CalendarError::IncompleteMonthFill { system, day: d })?;
                let day = days_of_month
                    .get(d)
                    .copied()
                    .ok_or(CalendarError::IncompleteMonthFill { system, day: d })?;
                Ok(MonthDate { month, day, adhika })
            })
            .collect::<Result<Vec<_>, CalendarError>>()?;
        Ok(MonthTable { system, dates })
    }
}

/// Complete month numbering of every day (including padding) for one system.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthTable {
    pub system: MonthSystem,
    dates: Vec<MonthDate>,
}

impl MonthTable {
    pub fn get(&self, d: usize) -> Option<MonthDate> {
        self.dates.get(d).copied()
    }

    pub fn month(&self, d: usize) -> Option<u32> {
        self.get(d).map(|m| m.month)
    }

    pub fn day(&self, d: usize) -> Option<u32> {
        self.get(d).map(|m| m.day)
    }

    pub fn dates(&self) -> &[MonthDate] {
        &self.dates
    }
}
