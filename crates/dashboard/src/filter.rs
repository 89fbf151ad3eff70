use chrono::{DateTime, Local};
use model::date_range::DateRange;

/// Selects the records whose projected date falls inside `range`, keeping
/// the input order. A full pass on every call; the result is derived state,
/// never patched in place.
///
/// With an inactive range the input is returned unchanged, unparsable dates
/// included. Once a range is active, a record whose projection returns
/// `None` is excluded.
pub fn filter_by_range<'a, T, F>(records: &'a [T], range: &DateRange, date: F) -> Vec<&'a T>
where
    F: Fn(&T) -> Option<DateTime<Local>>,
{
    if !range.is_active() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|record| date(record).map(|d| range.matches(d)).unwrap_or(false))
        .collect()
}

/// Owns the range picked in the UI and hands out the derived subsequence
/// for whatever record list the page currently holds.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeSelection {
    range: DateRange,
}

impl RangeSelection {
    pub fn new() -> Self {
        RangeSelection::default()
    }

    pub fn set(&mut self, range: DateRange) {
        self.range = range;
    }

    pub fn clear(&mut self) {
        self.range = DateRange::unset();
    }

    pub fn range(&self) -> &DateRange {
        &self.range
    }

    pub fn filter<'a, T, F>(&self, records: &'a [T], date: F) -> Vec<&'a T>
    where
        F: Fn(&T) -> Option<DateTime<Local>>,
    {
        filter_by_range(records, &self.range, date)
    }
}
