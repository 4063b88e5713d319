// Technitium DNS Server API surface.
//
// Token-authenticated, form-encoded HTTP API. Success and failure are
// signaled in the response body (`status` field), never by HTTP status
// code -- the transport helpers in `client` preserve that contract.

pub mod client;
pub mod models;
pub mod provision;
pub mod records;
pub mod zones;

pub use client::TechnitiumClient;
pub use models::{RecordType, Zone, ZoneType};
pub use provision::{RecordOutcome, ServiceSetup};
