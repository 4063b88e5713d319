// Technitium API response types and record/zone enums.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ── Response bodies ──────────────────────────────────────────────────

/// Body of `POST /api/user/login`.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub status: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, rename = "errorMessage")]
    pub error_message: Option<String>,
}

/// Body of `GET /api/zones/list`.
#[derive(Debug, Deserialize)]
pub struct ZoneListResponse {
    pub status: String,
    #[serde(default)]
    pub zones: Vec<Zone>,
    #[serde(default, rename = "errorMessage")]
    pub error_message: Option<String>,
}

/// Body of write endpoints (`zones/create`, `zones/records/add`).
#[derive(Debug, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    #[serde(default, rename = "errorMessage")]
    pub error_message: Option<String>,
}

impl StatusResponse {
    /// Convert into a `Result`, mapping a non-ok status to `Error::Api`.
    pub fn into_result(self) -> Result<(), crate::error::Error> {
        if self.status == "ok" {
            Ok(())
        } else {
            Err(crate::error::Error::Api {
                message: self
                    .error_message
                    .unwrap_or_else(|| format!("status={}", self.status)),
            })
        }
    }
}

// ── Zone ─────────────────────────────────────────────────────────────

/// A DNS zone as returned by `zones/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    #[serde(rename = "type")]
    pub zone_type: String,
}

/// Zone types accepted by `zones/create`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoneType {
    #[default]
    Primary,
    Secondary,
    Stub,
    Forwarder,
}

impl ZoneType {
    /// Wire value for the `type` form field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Stub => "Stub",
            Self::Forwarder => "Forwarder",
        }
    }
}

impl fmt::Display for ZoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ZoneType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "primary" => Ok(Self::Primary),
            "secondary" => Ok(Self::Secondary),
            "stub" => Ok(Self::Stub),
            "forwarder" => Ok(Self::Forwarder),
            other => Err(format!(
                "unknown zone type '{other}' (expected Primary, Secondary, Stub, or Forwarder)"
            )),
        }
    }
}

// ── Record type ──────────────────────────────────────────────────────

/// DNS record type, carrying the value-field dispatch for `records/add`.
///
/// The Technitium API expects the record value under a type-specific form
/// field. The mapping is part of the remote API contract:
/// `A -> ipAddress`, `CNAME -> cname`, `TXT -> text`, everything else
/// is sent as raw `rdata`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordType {
    A,
    Cname,
    Txt,
    /// Any other type, passed through verbatim (e.g. `AAAA`, `MX`, `SRV`).
    Other(String),
}

impl RecordType {
    /// Wire value for the `type` form field.
    pub fn as_str(&self) -> &str {
        match self {
            Self::A => "A",
            Self::Cname => "CNAME",
            Self::Txt => "TXT",
            Self::Other(s) => s,
        }
    }

    /// Name of the form field that carries the record value.
    pub fn value_field(&self) -> &'static str {
        match self {
            Self::A => "ipAddress",
            Self::Cname => "cname",
            Self::Txt => "text",
            Self::Other(_) => "rdata",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_uppercase().as_str() {
            "A" => Self::A,
            "CNAME" => Self::Cname,
            "TXT" => Self::Txt,
            _ => Self::Other(s.to_ascii_uppercase()),
        })
    }
}
