use std::env;

use chrono::{Local, TimeZone as _};
use dashboard::{
    mock,
    page::{ActivityPage, CentersPage},
};
use dotenv::dotenv;
use log::info;
use model::{date_range::DateRange, role::Role};

fn main() -> eyre::Result<()> {
    if let Err(err) = dotenv() {
        info!("Failed to load .env file: {}", err);
    }
    pretty_env_logger::init();
    color_eyre::install()?;

    let role = env::args()
        .nth(1)
        .or_else(|| env::var("DASHBOARD_ROLE").ok())
        .unwrap_or_else(|| "admin".to_string());
    let role = Role::try_from(role.as_str())?;
    info!("rendering dashboard for {}", role.name());

    let mut centers = CentersPage::new(mock::centers());
    let mut activities = ActivityPage::new(mock::activities());

    // December view over the fixture month.
    let from = Local.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap();
    let to = Local.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap();
    let range = DateRange::days(from, to)?;
    centers.set_range(range);
    activities.set_range(range);

    println!("=== {} view ===", role.label());

    let summary = centers.summary();
    println!(
        "Sites: {} ({} active, {}%), members: {}, staff: {}",
        summary.total, summary.active, summary.active_pct, summary.membership, summary.staff
    );

    println!("\nSites registered in range:");
    for center in centers.visible() {
        println!(
            "  #{:<3} {:<28} {:<12} {:<18} {}",
            center.id,
            center.name,
            center.region,
            center.status.name(),
            center.registered_at.format("%Y-%m-%d")
        );
    }

    println!("\nActivities in range:");
    for entry in activities.visible() {
        println!(
            "  #{:<4} [{}] {}",
            entry.id,
            entry.category.name(),
            entry.title
        );
    }

    println!("\nRegions: {}", centers.regions().join(", "));

    Ok(())
}
