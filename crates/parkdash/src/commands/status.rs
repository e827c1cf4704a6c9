//! Status command: backend connectivity probe.

use parkdash_core::Session;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

pub async fn handle(session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    let url = session.api_url();

    if !session.check_connection().await {
        return Err(CliError::ConnectionFailed {
            url,
            reason: "health probe failed".into(),
        });
    }

    session.refresh_all().await?;
    let store = session.store();

    let out = format!(
        "Connected to {url}\nZones:  {}\nSpaces: {}",
        store.zone_count(),
        store.space_count(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
