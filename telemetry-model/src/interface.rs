// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! A single VPP-side interface as reported by telemetry.

use serde::{Deserialize, Serialize};

/// The wire-level description of an interface: name and configured
/// addresses, as the forwarder itself knows them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    pub name: String,
    #[serde(default)]
    pub ip_addresses: Vec<String>,
}

/// Telemetry-derived metadata about an interface that the forwarder does
/// not expose directly but the collector computes (sw-if-index, tag).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceMeta {
    pub sw_if_index: u32,
    #[serde(default)]
    pub tag: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInterface {
    #[serde(rename = "If")]
    pub iface: Interface,
    #[serde(rename = "IfMeta")]
    pub meta: InterfaceMeta,
}
