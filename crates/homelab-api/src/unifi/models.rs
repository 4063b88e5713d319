// UniFi controller response types
//
// Every network API response wraps its payload in `{ "data": [...] }`.
// Fields use `#[serde(default)]` liberally because the controller is
// inconsistent about field presence across firmware versions; anything
// unmodeled lands in the `extra` catch-all.

use serde::{Deserialize, Serialize};

/// Standard network API response envelope.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

// ── Site ─────────────────────────────────────────────────────────────

/// A site from `GET /api/self/sites`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    #[serde(rename = "_id")]
    pub id: String,
    /// Short site identifier used in URLs (e.g. `default`).
    pub name: String,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Client (station) ─────────────────────────────────────────────────

/// A tracked client device from `stat/sta`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub mac: String,
    /// Display name assigned in the controller.
    #[serde(default)]
    pub name: Option<String>,
    /// Hostname reported by the device itself.
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub fixed_ip: Option<String>,
    #[serde(default)]
    pub use_fixedip: bool,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub first_seen: Option<i64>,
    #[serde(default)]
    pub last_seen: Option<i64>,
    /// Vendor, derived from the MAC OUI.
    #[serde(default)]
    pub oui: Option<String>,
    /// Device category as fingerprinted by the controller.
    #[serde(default)]
    pub dev_cat: Option<i64>,
    #[serde(default)]
    pub signal: Option<i32>,
    #[serde(default)]
    pub is_online: bool,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ClientEntry {
    /// Best available display name: assigned name, then reported hostname.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.hostname.as_deref())
            .unwrap_or("")
    }

    /// Case-insensitive MAC comparison.
    pub fn mac_matches(&self, mac: &str) -> bool {
        self.mac.eq_ignore_ascii_case(mac)
    }
}

// ── Static route ─────────────────────────────────────────────────────

/// A static route from `rest/routing`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticRoute {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "static-route_network")]
    pub network: Option<String>,
    #[serde(default, rename = "static-route_nexthop")]
    pub nexthop: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── User group ───────────────────────────────────────────────────────

/// A user group from `rest/usergroup` (bandwidth profiles).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserGroup {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub qos_rate_max_down: Option<i64>,
    #[serde(default)]
    pub qos_rate_max_up: Option<i64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn client_entry_display_name_prefers_assigned_name() {
        let entry: ClientEntry = serde_json::from_value(serde_json::json!({
            "_id": "abc",
            "mac": "AA:BB:CC:DD:EE:FF",
            "name": "nas",
            "hostname": "synology"
        }))
        .expect("valid client json");
        assert_eq!(entry.display_name(), "nas");
    }

    #[test]
    fn client_entry_display_name_falls_back_to_hostname() {
        let entry: ClientEntry = serde_json::from_value(serde_json::json!({
            "_id": "abc",
            "mac": "aa:bb:cc:dd:ee:ff",
            "hostname": "synology"
        }))
        .expect("valid client json");
        assert_eq!(entry.display_name(), "synology");
    }

    #[test]
    fn mac_matching_is_case_insensitive() {
        let entry: ClientEntry = serde_json::from_value(serde_json::json!({
            "_id": "abc",
            "mac": "AA:BB:CC:DD:EE:FF"
        }))
        .expect("valid client json");
        assert!(entry.mac_matches("aa:bb:cc:dd:ee:ff"));
        assert!(!entry.mac_matches("aa:bb:cc:dd:ee:00"));
    }

    #[test]
    fn unknown_fields_land_in_extra() {
        let entry: ClientEntry = serde_json::from_value(serde_json::json!({
            "_id": "abc",
            "mac": "aa:bb:cc:dd:ee:ff",
            "satisfaction": 98
        }))
        .expect("valid client json");
        assert_eq!(
            entry.extra.get("satisfaction"),
            Some(&serde_json::json!(98))
        );
    }
}
