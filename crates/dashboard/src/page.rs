use itertools::Itertools as _;
use model::{
    activity::ActivityEntry, center::Center, date_range::DateRange, statistics::CenterSummary,
};
use strum::{EnumIter, FromRepr};

use crate::{filter::RangeSelection, search};

#[derive(FromRepr, EnumIter, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Tab {
    #[default]
    Overview,
    Sites,
    Activities,
}

impl Tab {
    pub fn name(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Sites => "Sites",
            Tab::Activities => "Activities",
        }
    }
}

/// The sites table with its filter controls. Holds the record list and the
/// current UI selections; everything shown is derived from them on demand.
pub struct CentersPage {
    centers: Vec<Center>,
    selection: RangeSelection,
    search: String,
    tab: Tab,
}

impl CentersPage {
    pub fn new(centers: Vec<Center>) -> Self {
        CentersPage {
            centers,
            selection: RangeSelection::new(),
            search: String::new(),
            tab: Tab::default(),
        }
    }

    pub fn set_range(&mut self, range: DateRange) {
        self.selection.set(range);
    }

    pub fn clear_range(&mut self) {
        self.selection.clear();
    }

    pub fn range(&self) -> &DateRange {
        self.selection.range()
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Records passing both the search term and the registered-date range,
    /// in their original order.
    pub fn visible(&self) -> Vec<&Center> {
        search::filter_by_term(&self.centers, &self.search, |center| {
            format!("{} {}", center.name, center.region)
        })
        .into_iter()
        .filter(|center| self.selection.range().matches(center.registered_at))
        .collect()
    }

    pub fn summary(&self) -> CenterSummary {
        CenterSummary::new(self.visible().into_iter())
    }

    /// Options for the region dropdown, in first-seen order over the full
    /// record list, independent of the active filters.
    pub fn regions(&self) -> Vec<String> {
        self.centers
            .iter()
            .map(|center| center.region.clone())
            .unique()
            .collect()
    }
}

/// The activity feed with its date-range control.
pub struct ActivityPage {
    entries: Vec<ActivityEntry>,
    selection: RangeSelection,
    search: String,
}

impl ActivityPage {
    pub fn new(entries: Vec<ActivityEntry>) -> Self {
        ActivityPage {
            entries,
            selection: RangeSelection::new(),
            search: String::new(),
        }
    }

    pub fn set_range(&mut self, range: DateRange) {
        self.selection.set(range);
    }

    pub fn clear_range(&mut self) {
        self.selection.clear();
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    pub fn visible(&self) -> Vec<&ActivityEntry> {
        let needle = search::normalize(&self.search);
        self.selection
            .filter(&self.entries, ActivityEntry::date)
            .into_iter()
            .filter(|entry| search::matches(&entry.title, &needle))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::mock;
    use chrono::{DateTime, Local, TimeZone as _};

    fn at(y: i32, m: u32, d: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn fresh_page_shows_everything() {
        let page = CentersPage::new(mock::centers());
        assert_eq!(page.visible().len(), mock::centers().len());
        assert_eq!(page.tab(), Tab::Overview);
    }

    #[test]
    fn range_and_search_compose() {
        let mut page = CentersPage::new(mock::centers());
        page.set_range(DateRange::days(at(2024, 12, 1), at(2024, 12, 31)).unwrap());
        let december = page.visible().len();
        assert!(december > 0);
        assert!(december < mock::centers().len());

        page.set_search("selangor");
        let narrowed = page.visible();
        assert!(narrowed.len() <= december);
        assert!(narrowed.iter().all(|c| c.region == "Selangor"));

        page.clear_range();
        page.set_search("");
        assert_eq!(page.visible().len(), mock::centers().len());
    }

    #[test]
    fn summary_follows_filters() {
        let mut page = CentersPage::new(mock::centers());
        let all = page.summary();
        assert_eq!(all.total as usize, mock::centers().len());

        page.set_search("no-such-site");
        assert_eq!(page.summary(), Default::default());
    }

    #[test]
    fn regions_are_distinct_and_ignore_filters() {
        let mut page = CentersPage::new(mock::centers());
        let regions = page.regions();
        let mut deduped = regions.clone();
        deduped.dedup();
        assert_eq!(regions, deduped);

        page.set_search("kinabalu");
        assert_eq!(page.regions(), regions);
    }

    #[test]
    fn activity_feed_drops_malformed_dates_when_filtered() {
        let mut page = ActivityPage::new(mock::activities());
        let unfiltered = page.visible().len();
        assert_eq!(unfiltered, mock::activities().len());

        page.set_range(DateRange::days(at(2024, 1, 1), at(2024, 12, 31)).unwrap());
        let filtered = page.visible();
        assert!(filtered.len() < unfiltered);
        assert!(filtered.iter().all(|entry| entry.date().is_some()));
    }
}
