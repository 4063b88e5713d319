// UniFi OS controller API surface.
//
// Cookie-session authenticated, JSON over HTTPS (self-signed certs are
// the norm on local controllers). Success and failure are signaled by
// HTTP status code -- the opposite convention from the Technitium API,
// and dictated by the controller's own contract.

pub mod auth;
pub mod client;
pub mod clients;
pub mod csv;
pub mod devmgr;
pub mod models;
pub mod sites;

pub use client::UnifiClient;
pub use models::{ClientEntry, Site, StaticRoute, UserGroup};
pub use self::csv::write_static_ip_template;
