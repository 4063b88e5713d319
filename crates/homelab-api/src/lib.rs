// homelab-api: HTTP API clients for home-lab infrastructure.
//
// Two independent client surfaces share one transport layer:
// - `technitium`: Technitium DNS Server (token auth, form-encoded requests)
// - `unifi`: UniFi OS network controller (cookie session auth, JSON requests)

pub mod error;
pub mod technitium;
pub mod transport;
pub mod unifi;

pub use error::Error;
pub use technitium::TechnitiumClient;
pub use unifi::UnifiClient;
