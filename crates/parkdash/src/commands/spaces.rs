//! Space command handlers.

use tabled::Tabled;

use parkdash_core::{Session, Space, SpaceDraft, SpaceFilter, ViewStore};

use crate::cli::{GlobalOpts, SpacesArgs, SpacesCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct SpaceRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Zone")]
    zone: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Reserved")]
    reserved: String,
    #[tabled(rename = "Priority")]
    priority: u8,
}

fn row(space: &Space, store: &ViewStore) -> SpaceRow {
    // Zone name resolved through the cached zone collection; the raw id
    // is shown when the zone is not in the snapshot.
    let zone = store
        .zone_of(space)
        .map_or_else(|| space.zone_id.to_string(), |z| z.name);
    SpaceRow {
        id: space.id.to_string(),
        code: space.code.clone(),
        zone,
        status: space.status.to_string(),
        reserved: if space.reserved { "yes" } else { "no" }.into(),
        priority: space.priority,
    }
}

fn detail(space: &Space) -> String {
    [
        format!("ID:       {}", space.id),
        format!("Code:     {}", space.code),
        format!("Zone:     {}", space.zone_id),
        format!("Status:   {}", space.status),
        format!("Reserved: {}", space.reserved),
        format!("Priority: {}", space.priority),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    session: &Session,
    args: SpacesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        SpacesCommand::List { zone, status } => {
            session.refresh_all().await?;
            let store = session.store();

            let filter = SpaceFilter {
                zone: zone.as_deref().map(|z| util::parse_id("zone", z)).transpose()?,
                status: status.map(Into::into),
            };
            let spaces = filter.apply(&store.spaces_snapshot());

            let out = output::render_list(
                &global.output,
                &spaces,
                |s| row(s, store),
                |s| s.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        SpacesCommand::Get { id } => {
            let id = util::parse_id("id", &id)?;
            let space = session.fetch_space(id).await?;
            let out = output::render_single(&global.output, &space, detail, |s| s.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        SpacesCommand::Create {
            zone,
            code,
            status,
            reserved,
            priority,
        } => {
            let zone_id = util::parse_id("zone", &zone)?;

            let code = match code {
                Some(code) => code,
                None => {
                    // Suggestion is derived from the cached collection, so
                    // load it first.
                    session.refresh_all().await?;
                    session.suggest_space_code(zone_id).await?
                }
            };

            let draft = SpaceDraft {
                code,
                zone_id,
                status: status.into(),
                reserved,
                priority,
            };
            let created = session.create_space(&draft).await?;
            if !global.quiet {
                // The server may reassign the code.
                eprintln!("Space created: {} ({})", created.code, created.id);
            }
            Ok(())
        }

        SpacesCommand::Update {
            id,
            code,
            zone,
            status,
            reserved,
            priority,
        } => {
            let id = util::parse_id("id", &id)?;
            let current = session.fetch_space(id).await?;

            let draft = SpaceDraft {
                code: code.unwrap_or(current.code),
                zone_id: zone
                    .as_deref()
                    .map(|z| util::parse_id("zone", z))
                    .transpose()?
                    .unwrap_or(current.zone_id),
                status: status.map_or(current.status, Into::into),
                reserved: reserved.unwrap_or(current.reserved),
                priority: priority.unwrap_or(current.priority),
            }
            // Leaving Available drops a carried-over reserved flag instead
            // of tripping validation.
            .sanitized();

            session.update_space(id, &draft).await?;
            if !global.quiet {
                eprintln!("Space updated");
            }
            Ok(())
        }

        SpacesCommand::Delete { id } => {
            let parsed = util::parse_id("id", &id)?;
            if !util::confirm(&format!("Delete space {id}?"), global.yes)? {
                return Ok(());
            }
            session.delete_space(parsed).await?;
            if !global.quiet {
                eprintln!("Space deleted");
            }
            Ok(())
        }
    }
}
