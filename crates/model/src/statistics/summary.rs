use serde::{Deserialize, Serialize};

use crate::center::Center;

/// Headline numbers shown above the sites table, folded from the currently
/// visible records on every render.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct CenterSummary {
    pub total: u32,
    pub active: u32,
    pub membership: u32,
    pub staff: u32,
    pub active_pct: f64,
}

impl CenterSummary {
    pub fn new<'c>(centers: impl Iterator<Item = &'c Center>) -> CenterSummary {
        let mut stat = centers.fold(CenterSummary::default(), |mut acc, center| {
            acc.total += 1;
            if center.is_active() {
                acc.active += 1;
            }
            acc.membership += center.membership;
            acc.staff += center.staff;
            acc
        });

        stat.active_pct = percent(stat.active, stat.total);
        stat
    }
}

pub fn percent(part: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64 * 100.0).round()
    }
}
