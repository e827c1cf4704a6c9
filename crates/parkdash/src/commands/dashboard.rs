//! Dashboard command: occupancy overview across all zones.

use serde::Serialize;
use tabled::Tabled;
use uuid::Uuid;

use parkdash_core::Session;
use parkdash_core::stats::{self, OccupancyTier, StatusBreakdown};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

// ── Report model ────────────────────────────────────────────────────

#[derive(Serialize)]
struct DashboardReport {
    occupancy_percent: u32,
    breakdown: StatusBreakdown,
    zones: Vec<ZoneOverview>,
}

#[derive(Serialize)]
struct ZoneOverview {
    id: Uuid,
    name: String,
    capacity: u32,
    available: u32,
    availability_ratio: f64,
    tier: &'static str,
}

#[derive(Tabled)]
struct ZoneOverviewRow {
    #[tabled(rename = "Zone")]
    name: String,
    #[tabled(rename = "Capacity")]
    capacity: u32,
    #[tabled(rename = "Available")]
    available: u32,
    #[tabled(rename = "Availability")]
    availability: String,
    #[tabled(rename = "Tier")]
    tier: String,
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    session.refresh_all().await?;
    let store = session.store();

    let zones = store.zones_snapshot();
    let spaces = store.spaces_snapshot();

    let report = DashboardReport {
        occupancy_percent: stats::occupancy_percentage(&spaces),
        breakdown: stats::status_breakdown(&spaces),
        zones: zones
            .iter()
            .map(|z| {
                let available = store.effective_available_capacity(z);
                let ratio = availability_ratio(available, z.capacity);
                ZoneOverview {
                    id: z.id,
                    name: z.name.clone(),
                    capacity: z.capacity,
                    available,
                    availability_ratio: ratio,
                    tier: OccupancyTier::from_ratio(ratio).severity(),
                }
            })
            .collect(),
    };

    let out = match global.output {
        OutputFormat::Table => render_text(&report, output::should_color(&global.color)),
        OutputFormat::Plain => report.occupancy_percent.to_string(),
        ref other => output::render_single(other, &report, |_| String::new(), |_| String::new()),
    };
    output::print_output(&out, global.quiet);
    Ok(())
}

fn availability_ratio(available: u32, capacity: u32) -> f64 {
    if capacity == 0 {
        return 0.0;
    }
    f64::from(available) / f64::from(capacity)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn render_text(report: &DashboardReport, color: bool) -> String {
    let b = &report.breakdown;
    let summary = format!(
        "Spaces: {} total — {} available ({}%), {} occupied ({}%), {} maintenance ({}%)\n\
         Overall occupancy: {}%",
        b.total,
        b.available,
        b.available_percent,
        b.occupied,
        b.occupied_percent,
        b.maintenance,
        b.maintenance_percent,
        report.occupancy_percent,
    );

    if report.zones.is_empty() {
        return summary;
    }

    let rows: Vec<ZoneOverviewRow> = report
        .zones
        .iter()
        .map(|z| {
            let tier = OccupancyTier::from_ratio(z.availability_ratio);
            ZoneOverviewRow {
                name: z.name.clone(),
                capacity: z.capacity,
                available: z.available,
                availability: format!("{}%", (z.availability_ratio * 100.0).round() as u32),
                tier: output::tier_label(tier, color),
            }
        })
        .collect();

    format!("{summary}\n\n{}", output::render_table(&rows))
}
