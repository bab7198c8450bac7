//! Calendar date rendering for date-kind dimensions.

use chrono::{Days, NaiveDate};

/// Render the date at `index` days past `epoch` as `MM/DD/YYYY`.
///
/// Returns `None` when the date falls outside the supported calendar range.
pub fn format_date(epoch: NaiveDate, index: u64) -> Option<String> {
    epoch
        .checked_add_days(Days::new(index))
        .map(|date| date.format("%m/%d/%Y").to_string())
}
