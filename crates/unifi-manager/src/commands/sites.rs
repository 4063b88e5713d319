//! Site-scoped read command handlers: sites, routes, user groups.

use tabled::Tabled;

use homelab_api::UnifiClient;
use homelab_api::unifi::{Site, StaticRoute, UserGroup};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct SiteRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    desc: String,
}

impl From<&Site> for SiteRow {
    fn from(s: &Site) -> Self {
        Self {
            name: s.name.clone(),
            desc: s.desc.clone().unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct RouteRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Network")]
    network: String,
    #[tabled(rename = "Next hop")]
    nexthop: String,
    #[tabled(rename = "Enabled")]
    enabled: bool,
}

impl From<&StaticRoute> for RouteRow {
    fn from(r: &StaticRoute) -> Self {
        Self {
            name: r.name.clone().unwrap_or_default(),
            network: r.network.clone().unwrap_or_default(),
            nexthop: r.nexthop.clone().unwrap_or_default(),
            enabled: r.enabled,
        }
    }
}

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Down (Kbps)")]
    down: String,
    #[tabled(rename = "Up (Kbps)")]
    up: String,
}

impl From<&UserGroup> for GroupRow {
    fn from(g: &UserGroup) -> Self {
        let rate = |v: Option<i64>| match v {
            Some(-1) | None => "unlimited".to_owned(),
            Some(v) => v.to_string(),
        };
        Self {
            name: g.name.clone(),
            down: rate(g.qos_rate_max_down),
            up: rate(g.qos_rate_max_up),
        }
    }
}

pub async fn list_sites(client: &UnifiClient, global: &GlobalOpts) -> Result<(), CliError> {
    let sites = client.list_sites().await?;
    let out = output::render_list(&global.output, &sites, |s| SiteRow::from(s), |s| {
        s.name.clone()
    });
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn list_routes(client: &UnifiClient, global: &GlobalOpts) -> Result<(), CliError> {
    let routes = client.list_static_routes().await?;
    if routes.is_empty() {
        if !global.quiet {
            eprintln!("No static routes configured");
        }
        return Ok(());
    }
    let out = output::render_list(&global.output, &routes, |r| RouteRow::from(r), |r| {
        r.id.clone()
    });
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn list_groups(client: &UnifiClient, global: &GlobalOpts) -> Result<(), CliError> {
    let groups = client.list_user_groups().await?;
    let out = output::render_list(&global.output, &groups, |g| GroupRow::from(g), |g| {
        g.name.clone()
    });
    output::print_output(&out, global.quiet);
    Ok(())
}
