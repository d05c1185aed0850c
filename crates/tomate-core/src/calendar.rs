//! Month-grid computation.
//!
//! Pure functions: the grid is derived fresh on every call from the task
//! lookup and the date inputs, never stored. The grid is always 6 full
//! weeks (42 cells), Sunday-first, so every month is fully covered with
//! spillover days from the adjacent months.

use chrono::{Datelike, Days, NaiveDate};

/// Cells in the month grid: 6 weeks of 7 days.
pub const GRID_CELLS: usize = 42;

/// One derived day-descriptor in the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// False for spillover days from the adjacent months. They are still
    /// real, navigable dates; whether to disable them is a presentation
    /// decision.
    pub in_current_month: bool,
    pub is_today: bool,
    pub has_task: bool,
    pub is_selected: bool,
}

/// Compute the 42-cell grid for the month containing `month`.
///
/// Any day of the target month works as the `month` argument. The grid
/// starts on the most recent Sunday on or before the 1st.
pub fn render_month(
    month: NaiveDate,
    today: NaiveDate,
    selected: Option<NaiveDate>,
    has_task: impl Fn(NaiveDate) -> bool,
) -> Vec<CalendarCell> {
    let first = month_start(month);
    let start = first - Days::new(u64::from(first.weekday().num_days_from_sunday()));
    (0..GRID_CELLS as u64)
        .map(|offset| {
            let date = start + Days::new(offset);
            CalendarCell {
                date,
                in_current_month: date.month() == first.month() && date.year() == first.year(),
                is_today: date == today,
                has_task: has_task(date),
                is_selected: selected == Some(date),
            }
        })
        .collect()
}

/// Day 1 of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Day 1 of the following month, wrapping December into January.
pub fn next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

/// Day 1 of the preceding month, wrapping January into December.
pub fn prev_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 1 {
        (date.year() - 1, 12)
    } else {
        (date.year(), date.month() - 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}
