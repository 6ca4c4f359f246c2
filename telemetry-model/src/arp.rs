// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! ARP table entries, used to resolve the next hop for host/uplink routes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArpEntryCore {
    pub ip_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArpEntryMeta {
    pub if_index: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArpEntry {
    #[serde(rename = "Ae")]
    pub ae: ArpEntryCore,
    #[serde(rename = "AeMeta")]
    pub meta: ArpEntryMeta,
}
