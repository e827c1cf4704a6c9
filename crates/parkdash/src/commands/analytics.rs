//! Analytics command: per-zone statistics table.

use tabled::Tabled;

use parkdash_core::Session;
use parkdash_core::stats::{self, ZoneAnalytics};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct AnalyticsRow {
    #[tabled(rename = "Zone")]
    name: String,
    #[tabled(rename = "Spaces")]
    total: usize,
    #[tabled(rename = "Available")]
    available: usize,
    #[tabled(rename = "Occupied")]
    occupied: usize,
    #[tabled(rename = "Maintenance")]
    maintenance: usize,
    #[tabled(rename = "Occupancy")]
    occupancy: String,
}

impl From<&ZoneAnalytics> for AnalyticsRow {
    fn from(a: &ZoneAnalytics) -> Self {
        Self {
            name: a.name.clone(),
            total: a.total,
            available: a.available,
            occupied: a.occupied,
            maintenance: a.maintenance,
            occupancy: format!("{}%", a.occupancy_percent),
        }
    }
}

pub async fn handle(session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    session.refresh_all().await?;
    let store = session.store();

    let spaces = store.spaces_snapshot();
    let rows: Vec<ZoneAnalytics> = store
        .zones_snapshot()
        .iter()
        .map(|z| stats::zone_analytics(z, &spaces))
        .collect();

    let out = output::render_list(
        &global.output,
        &rows,
        |a| AnalyticsRow::from(a),
        |a| a.zone_id.to_string(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
