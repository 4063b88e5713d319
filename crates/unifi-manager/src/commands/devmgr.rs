//! Device manager command handlers.

use owo_colors::OwoColorize;

use homelab_api::UnifiClient;

use crate::cli::GlobalOpts;
use crate::error::CliError;

use super::util;

pub async fn clear_arp(client: &UnifiClient, global: &GlobalOpts) -> Result<(), CliError> {
    if !util::confirm(
        "Force-provision all site devices? Clients may briefly drop.",
        global.yes,
    )? {
        return Ok(());
    }

    client.clear_arp_table().await?;

    if !global.quiet {
        eprintln!("{} ARP table refresh initiated", "ok".green());
    }
    Ok(())
}
