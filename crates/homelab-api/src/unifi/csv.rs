// CSV interchange for client settings
//
// Export -> hand edit -> import is the bulk-editing workflow: the export
// projects every tracked client into one row, the import applies fixed-IP
// assignments back. Import accepts the reduced template schema as well as
// a full export file; unknown columns are ignored.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Error;
use crate::unifi::client::UnifiClient;
use crate::unifi::models::ClientEntry;

// ── Row schemas ──────────────────────────────────────────────────────

/// Full export row. Column names are the interchange contract; import
/// files round-trip through spreadsheet editors, so they stay stable.
#[derive(Debug, Serialize)]
struct ExportRow {
    #[serde(rename = "MAC")]
    mac: String,
    #[serde(rename = "Hostname")]
    hostname: String,
    #[serde(rename = "IP_Address")]
    ip_address: String,
    #[serde(rename = "Static_IP")]
    static_ip: String,
    #[serde(rename = "Use_Static")]
    use_static: bool,
    #[serde(rename = "Network")]
    network: String,
    #[serde(rename = "First_Seen")]
    first_seen: String,
    #[serde(rename = "Last_Seen")]
    last_seen: String,
    #[serde(rename = "Vendor")]
    vendor: String,
    #[serde(rename = "Device_Type")]
    device_type: String,
    #[serde(rename = "Signal")]
    signal: String,
    #[serde(rename = "Connected")]
    connected: bool,
}

impl From<&ClientEntry> for ExportRow {
    fn from(c: &ClientEntry) -> Self {
        Self {
            mac: c.mac.clone(),
            hostname: c.display_name().to_owned(),
            ip_address: c.ip.clone().unwrap_or_default(),
            static_ip: c.fixed_ip.clone().unwrap_or_default(),
            use_static: c.use_fixedip,
            network: c.network.clone().unwrap_or_default(),
            first_seen: format_epoch(c.first_seen),
            last_seen: format_epoch(c.last_seen),
            vendor: c.oui.clone().unwrap_or_default(),
            device_type: c.dev_cat.map(|v| v.to_string()).unwrap_or_default(),
            signal: c.signal.map(|v| v.to_string()).unwrap_or_default(),
            connected: c.is_online,
        }
    }
}

/// Import row: the reduced subset shared by exports and templates.
#[derive(Debug, Deserialize)]
pub struct ImportRow {
    #[serde(rename = "MAC")]
    pub mac: String,
    #[serde(rename = "Hostname", default)]
    pub hostname: Option<String>,
    #[serde(rename = "Static_IP", default)]
    pub static_ip: Option<String>,
    #[serde(rename = "Use_Static", default)]
    pub use_static: Option<String>,
}

impl ImportRow {
    /// Returns the (ip, hostname) to apply when this row requests a
    /// static assignment: the static flag must be truthy and the
    /// static-IP column non-empty. Everything else is skipped.
    pub fn static_assignment(&self) -> Option<(&str, Option<&str>)> {
        if !self.use_static.as_deref().is_some_and(is_truthy) {
            return None;
        }
        let ip = self.static_ip.as_deref().filter(|s| !s.trim().is_empty())?;
        Some((ip, self.hostname.as_deref().filter(|s| !s.is_empty())))
    }
}

/// Template row written by `write_static_ip_template`.
#[derive(Debug, Serialize)]
struct TemplateRow {
    #[serde(rename = "MAC")]
    mac: &'static str,
    #[serde(rename = "Hostname")]
    hostname: &'static str,
    #[serde(rename = "Static_IP")]
    static_ip: &'static str,
    #[serde(rename = "Use_Static")]
    use_static: bool,
    #[serde(rename = "Notes")]
    notes: &'static str,
}

const TEMPLATE_ROW: TemplateRow = TemplateRow {
    mac: "aa:bb:cc:dd:ee:ff",
    hostname: "example-device",
    static_ip: "192.168.1.100",
    use_static: true,
    notes: "Example entry - replace with your devices",
};

/// Truthy values accepted in the `Use_Static` column. Spreadsheet tools
/// write `True`, our own template writes `true`; both must import.
fn is_truthy(s: &str) -> bool {
    matches!(
        s.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}

fn format_epoch(secs: Option<i64>) -> String {
    secs.and_then(|s| chrono::DateTime::from_timestamp(s, 0))
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default()
}

// ── Summary ──────────────────────────────────────────────────────────

/// Aggregate outcome of a CSV import.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImportSummary {
    /// Rows whose static-IP update succeeded.
    pub updated: usize,
    /// Rows not requesting a static assignment.
    pub skipped: usize,
    /// Rows whose update call failed.
    pub failed: usize,
}

// ── Operations ───────────────────────────────────────────────────────

impl UnifiClient {
    /// Export every tracked client to `path`, one row per client.
    ///
    /// Returns the number of rows written.
    pub async fn export_clients_to_csv(&self, path: &Path) -> Result<usize, Error> {
        let clients = self.list_clients().await?;

        let mut writer = csv::Writer::from_path(path)?;
        for client in &clients {
            writer.serialize(ExportRow::from(client))?;
        }
        writer.flush()?;

        debug!(count = clients.len(), path = %path.display(), "clients exported");
        Ok(clients.len())
    }

    /// Apply static-IP assignments from `path`.
    ///
    /// Rows with a truthy `Use_Static` flag and a non-empty `Static_IP`
    /// drive one `set_static_ip` call each; other rows are skipped. A row
    /// whose update fails is logged and does not stop the run, but a file
    /// that cannot be read or parsed fails the whole operation.
    pub async fn import_clients_from_csv(&self, path: &Path) -> Result<ImportSummary, Error> {
        let mut reader = csv::Reader::from_path(path)?;

        let mut summary = ImportSummary::default();
        for row in reader.deserialize() {
            let row: ImportRow = row?;
            let Some((ip, hostname)) = row.static_assignment() else {
                summary.skipped += 1;
                continue;
            };
            match self.set_static_ip(&row.mac, ip, hostname).await {
                Ok(()) => {
                    debug!(mac = %row.mac, ip, "static IP applied from CSV");
                    summary.updated += 1;
                }
                Err(e) => {
                    warn!(mac = %row.mac, "CSV row failed: {e}");
                    summary.failed += 1;
                }
            }
        }
        Ok(summary)
    }
}

/// Write a one-row example file showing the import column schema.
pub fn write_static_ip_template(path: &Path) -> Result<(), Error> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.serialize(TEMPLATE_ROW)?;
    writer.flush()?;
    Ok(())
}

/// Read a two-column `MAC, Hostname` file into a lowercased-MAC map for
/// `bulk_hostname_update`. Rows with an empty hostname are ignored.
pub fn read_hostname_map(path: &Path) -> Result<HashMap<String, String>, Error> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut map = HashMap::new();
    for row in reader.deserialize() {
        let row: ImportRow = row?;
        if let Some(hostname) = row.hostname.filter(|h| !h.trim().is_empty()) {
            map.insert(row.mac.to_lowercase(), hostname);
        }
    }
    Ok(map)
}
