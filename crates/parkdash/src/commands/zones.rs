//! Zone command handlers.

use tabled::Tabled;

use parkdash_core::filter::search_zones;
use parkdash_core::{Session, Zone, ZoneDraft};

use crate::cli::{GlobalOpts, ZonesArgs, ZonesCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ZoneRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    zone_type: String,
    #[tabled(rename = "Capacity")]
    capacity: u32,
    #[tabled(rename = "Available")]
    available: u32,
    #[tabled(rename = "Active")]
    active: String,
}

fn row(zone: &Zone, available: u32) -> ZoneRow {
    ZoneRow {
        id: zone.id.to_string(),
        name: zone.name.clone(),
        zone_type: zone.zone_type.to_string(),
        capacity: zone.capacity,
        available,
        active: if zone.is_active { "yes" } else { "no" }.into(),
    }
}

fn detail(zone: &Zone) -> String {
    [
        format!("ID:          {}", zone.id),
        format!("Name:        {}", zone.name),
        format!("Description: {}", zone.description.as_deref().unwrap_or("-")),
        format!("Type:        {}", zone.zone_type),
        format!("Capacity:    {}", zone.capacity),
        format!(
            "Available:   {}",
            zone.available_capacity
                .map_or_else(|| "-".into(), |a| a.to_string())
        ),
        format!("Active:      {}", zone.is_active),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    session: &Session,
    args: ZonesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ZonesCommand::List { search } => {
            // Spaces are loaded too so missing availableCapacity can be
            // estimated from occupancy.
            session.refresh_all().await?;
            let store = session.store();

            let zones = store.zones_snapshot();
            let zones: Vec<Zone> = match search {
                Some(ref term) => search_zones(&zones, term),
                None => zones.as_ref().clone(),
            };

            let out = output::render_list(
                &global.output,
                &zones,
                |z| row(z, store.effective_available_capacity(z)),
                |z| z.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ZonesCommand::Get { id } => {
            let id = util::parse_id("id", &id)?;
            let zone = session.fetch_zone(id).await?;
            let out = output::render_single(&global.output, &zone, detail, |z| z.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ZonesCommand::Create {
            name,
            description,
            capacity,
            zone_type,
            active,
        } => {
            let draft = ZoneDraft {
                name,
                description,
                capacity,
                zone_type: zone_type.into(),
                is_active: active,
            };
            let created = session.create_zone(&draft).await?;
            if !global.quiet {
                eprintln!("Zone created: {}", created.id);
            }
            Ok(())
        }

        ZonesCommand::Update {
            id,
            name,
            description,
            capacity,
            zone_type,
            active,
        } => {
            let id = util::parse_id("id", &id)?;
            // The backend replaces the whole entity, so unset flags keep
            // their current values.
            let current = session.fetch_zone(id).await?;
            let draft = ZoneDraft {
                name: name.unwrap_or(current.name),
                description: description.or(current.description),
                capacity: capacity.unwrap_or(current.capacity),
                zone_type: zone_type.map_or(current.zone_type, Into::into),
                is_active: active.unwrap_or(current.is_active),
            };
            session.update_zone(id, &draft).await?;
            if !global.quiet {
                eprintln!("Zone updated");
            }
            Ok(())
        }

        ZonesCommand::Delete { id } => {
            let parsed = util::parse_id("id", &id)?;
            if !util::confirm(&format!("Delete zone {id}?"), global.yes)? {
                return Ok(());
            }
            session.delete_zone(parsed).await?;
            if !global.quiet {
                eprintln!("Zone deleted");
            }
            Ok(())
        }
    }
}
