//! Command dispatch: bridges CLI args -> API calls -> output formatting.

pub mod records;
pub mod service;
pub mod zones;

use homelab_api::TechnitiumClient;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a server-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    client: &TechnitiumClient,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::ListZones => zones::list(client, global).await,
        Command::SetupService { zone, ip } => service::setup(client, &zone, &ip, global).await,
        Command::AddRecord {
            zone,
            name,
            rtype,
            value,
            ttl,
        } => records::add(client, &zone, &name, &rtype, &value, ttl, global).await,
        // Completions are handled before dispatch
        Command::Completions(_) => unreachable!(),
    }
}
