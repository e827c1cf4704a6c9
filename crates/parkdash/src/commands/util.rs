//! Shared helpers for command handlers.

use std::io::IsTerminal;

use uuid::Uuid;

use crate::cli::{SpaceStatusArg, ZoneTypeArg};
use crate::error::CliError;
use parkdash_core::{SpaceStatus, ZoneType};

/// Parse a UUID argument, surfacing a usage error on garbage input.
pub fn parse_id(field: &str, value: &str) -> Result<Uuid, CliError> {
    Uuid::parse_str(value).map_err(|_| CliError::Validation {
        field: field.into(),
        reason: format!("not a UUID: {value}"),
    })
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
/// Non-interactive invocations must pass `--yes` explicitly.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: message.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

// clap ValueEnum args stay clap-only so build.rs can include cli.rs;
// the domain conversions live here instead.

impl From<ZoneTypeArg> for ZoneType {
    fn from(arg: ZoneTypeArg) -> Self {
        match arg {
            ZoneTypeArg::Vip => ZoneType::Vip,
            ZoneTypeArg::Internal => ZoneType::Internal,
            ZoneTypeArg::External => ZoneType::External,
        }
    }
}

impl From<SpaceStatusArg> for SpaceStatus {
    fn from(arg: SpaceStatusArg) -> Self {
        match arg {
            SpaceStatusArg::Available => SpaceStatus::Available,
            SpaceStatusArg::Occupied => SpaceStatus::Occupied,
            SpaceStatusArg::Maintenance => SpaceStatus::Maintenance,
        }
    }
}
