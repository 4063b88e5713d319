//! Command dispatch: bridges CLI args -> API calls -> output formatting.

pub mod clients;
pub mod csv_cmd;
pub mod devmgr;
pub mod sites;
pub mod util;

use homelab_api::UnifiClient;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a controller-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    client: &UnifiClient,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::ListClients => clients::list(client, global).await,
        Command::ListSites => sites::list_sites(client, global).await,
        Command::ListRoutes => sites::list_routes(client, global).await,
        Command::ListGroups => sites::list_groups(client, global).await,
        Command::SetStaticIp { mac, ip, hostname } => {
            clients::set_static_ip(client, &mac, &ip, hostname.as_deref(), global).await
        }
        Command::ExportCsv { file } => csv_cmd::export(client, &file, global).await,
        Command::ImportCsv { file } => csv_cmd::import(client, &file, global).await,
        Command::BulkHostnames { file } => csv_cmd::bulk_hostnames(client, &file, global).await,
        Command::ClearArp => devmgr::clear_arp(client, global).await,
        // GenerateTemplate and Completions are handled before dispatch
        Command::GenerateTemplate { .. } | Command::Completions(_) => unreachable!(),
    }
}
