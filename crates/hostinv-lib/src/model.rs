//! The host inventory data model.
//!
//! `Host` is the one resource the service manages. The wire contract keeps
//! the historical field names (`type`, `resources`, `ip_addresses`), and every
//! field defaults so a partial request body still decodes; schema validation
//! beyond "is it JSON" is deliberately out of scope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::DocumentId;

/// A monitoring sensor attached to a host. Owned by its parent [`Host`];
/// sensors have no lifecycle of their own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sensor {
    pub name: String,
    pub ports: Vec<u16>,
}

/// Free-text hardware description of a host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceSpecs {
    pub cpu_count: String,
    pub cpu_freq: String,
    pub memory: String,
    pub storage: String,
    pub disk_type: String,
    pub hypervisor: String,
}

/// Primary and additional addresses of a host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpAddresses {
    pub primary_ipv4: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_ipv6: Option<String>,
    pub ipv4: Vec<String>,
    pub ipv6: Vec<String>,
}

/// Where the host is running.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Provider {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// A managed host.
///
/// `id`, `created`, and `modified` are assigned by the repository when the
/// host is persisted; values supplied by callers are ignored on create.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Host {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DocumentId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
    pub hostname: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub os: String,
    pub architecture: String,
    #[serde(rename = "resources")]
    pub specs: ResourceSpecs,
    pub ip_addresses: IpAddresses,
    pub provider: Provider,
    pub sensors: Vec<Sensor>,
}

/// Top-level shape of list responses. The `data` key is always present, even
/// for an empty inventory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostCollection {
    pub data: Vec<Host>,
}

/// Top-level shape of single-host request and response bodies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostResource {
    pub data: Host,
}
