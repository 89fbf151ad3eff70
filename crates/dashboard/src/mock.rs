use chrono::{DateTime, Local, TimeZone as _};
use model::{
    activity::{ActivityCategory, ActivityEntry},
    center::{Center, CenterStatus},
};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

/// Hand-authored site list used until the real dataset is wired in.
pub fn centers() -> Vec<Center> {
    vec![
        Center {
            id: 1,
            name: "NADI Kampung Baru".to_string(),
            region: "Kuala Lumpur".to_string(),
            status: CenterStatus::Active,
            registered_at: at(2024, 3, 12, 9, 0),
            membership: 412,
            staff: 4,
        },
        Center {
            id: 2,
            name: "NADI Taman Melati".to_string(),
            region: "Selangor".to_string(),
            status: CenterStatus::Active,
            registered_at: at(2024, 6, 2, 10, 30),
            membership: 268,
            staff: 3,
        },
        Center {
            id: 3,
            name: "NADI Sungai Buloh".to_string(),
            region: "Selangor".to_string(),
            status: CenterStatus::Maintenance,
            registered_at: at(2024, 12, 15, 14, 0),
            membership: 95,
            staff: 2,
        },
        Center {
            id: 4,
            name: "NADI Kota Kinabalu".to_string(),
            region: "Sabah".to_string(),
            status: CenterStatus::Active,
            registered_at: at(2024, 12, 18, 11, 15),
            membership: 180,
            staff: 3,
        },
        Center {
            id: 5,
            name: "NADI Skudai".to_string(),
            region: "Johor".to_string(),
            status: CenterStatus::Active,
            registered_at: at(2024, 8, 21, 9, 45),
            membership: 327,
            staff: 4,
        },
        Center {
            id: 6,
            name: "NADI Kuching Utara".to_string(),
            region: "Sarawak".to_string(),
            status: CenterStatus::Closed,
            registered_at: at(2023, 11, 7, 10, 0),
            membership: 0,
            staff: 0,
        },
        Center {
            id: 7,
            name: "NADI Alor Setar".to_string(),
            region: "Kedah".to_string(),
            status: CenterStatus::Active,
            registered_at: at(2024, 12, 3, 8, 30),
            membership: 142,
            staff: 2,
        },
    ]
}

/// Activity feed fixture. Dates arrive as strings from the upstream feed;
/// entry 106 carries the malformed value the feed occasionally produces.
pub fn activities() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            id: 101,
            title: "Digital literacy class for seniors".to_string(),
            category: ActivityCategory::Training,
            date: "2024-12-15".to_string(),
        },
        ActivityEntry {
            id: 102,
            title: "E-commerce onboarding workshop".to_string(),
            category: ActivityCategory::Training,
            date: "2024-12-18T09:30:00+08:00".to_string(),
        },
        ActivityEntry {
            id: 103,
            title: "Community outreach day".to_string(),
            category: ActivityCategory::Outreach,
            date: "2024-11-02".to_string(),
        },
        ActivityEntry {
            id: 104,
            title: "Network equipment upgrade".to_string(),
            category: ActivityCategory::Maintenance,
            date: "2024-10-29T14:00:00+08:00".to_string(),
        },
        ActivityEntry {
            id: 105,
            title: "Quarterly coordination meeting".to_string(),
            category: ActivityCategory::Meeting,
            date: "2024-09-05".to_string(),
        },
        ActivityEntry {
            id: 106,
            title: "Fiber relocation works".to_string(),
            category: ActivityCategory::Maintenance,
            date: "TBD".to_string(),
        },
    ]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fixtures_are_consistent() {
        let centers = centers();
        assert!(!centers.is_empty());
        let mut ids: Vec<u32> = centers.iter().map(|c| c.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), centers.len());

        let activities = activities();
        assert_eq!(
            activities.iter().filter(|a| a.date().is_none()).count(),
            1
        );
    }
}
