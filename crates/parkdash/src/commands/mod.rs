//! Command dispatch: bridges CLI args -> session calls -> output formatting.

pub mod analytics;
pub mod config_cmd;
pub mod dashboard;
pub mod spaces;
pub mod status;
pub mod util;
pub mod zones;

use parkdash_core::Session;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a backend-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Zones(args) => zones::handle(session, args, global).await,
        Command::Spaces(args) => spaces::handle(session, args, global).await,
        Command::Dashboard => dashboard::handle(session, global).await,
        Command::Analytics => analytics::handle(session, global).await,
        Command::Status => status::handle(session, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
