use chrono::{DateTime, Local, Timelike as _};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Date range selected in the dashboard date picker. Either bound may be
/// unset; the picker fills `from` first, then `to`.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct DateRange {
    pub from: Option<DateTime<Local>>,
    pub to: Option<DateTime<Local>>,
}

impl DateRange {
    pub fn unset() -> Self {
        DateRange::default()
    }

    /// Single-day selection: only `from` is set.
    pub fn single(day: DateTime<Local>) -> Self {
        DateRange {
            from: Some(day),
            to: None,
        }
    }

    /// Two-sided selection with exact timestamps. Does not validate the
    /// ordering of the bounds; an inverted range matches nothing.
    pub fn between(from: DateTime<Local>, to: DateTime<Local>) -> Self {
        DateRange {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Two-sided selection widened to whole calendar days: `from` is moved
    /// to 00:00:00 and `to` to 23:59:59.
    pub fn days(from: DateTime<Local>, to: DateTime<Local>) -> Result<Self, ModelError> {
        fn inner(from: DateTime<Local>, to: DateTime<Local>) -> Option<DateRange> {
            let from = from
                .with_hour(0)?
                .with_minute(0)?
                .with_second(0)?
                .with_nanosecond(0)?;
            let to = to
                .with_hour(23)?
                .with_minute(59)?
                .with_second(59)?
                .with_nanosecond(0)?;
            Some(DateRange::between(from, to))
        }
        inner(from, to).ok_or(ModelError::InvalidRange {
            from: Some(from),
            to: Some(to),
        })
    }

    /// Like [`DateRange::between`], but rejects an inverted range.
    pub fn checked(from: DateTime<Local>, to: DateTime<Local>) -> Result<Self, ModelError> {
        if to < from {
            return Err(ModelError::InvalidRange {
                from: Some(from),
                to: Some(to),
            });
        }
        Ok(DateRange::between(from, to))
    }

    /// A range without `from` applies no filtering at all.
    pub fn is_active(&self) -> bool {
        self.from.is_some()
    }

    /// Whether `date` falls inside the selection.
    ///
    /// With only `from` set the match is by calendar day, ignoring
    /// time-of-day. With both bounds set the comparison is on full
    /// timestamps, inclusive on both ends. A `to`-only selection has no
    /// effect, mirroring the fill order of the picker.
    pub fn matches(&self, date: DateTime<Local>) -> bool {
        match (self.from, self.to) {
            (None, _) => true,
            (Some(from), None) => date.date_naive() == from.date_naive(),
            (Some(from), Some(to)) => from <= date && date <= to,
        }
    }
}
