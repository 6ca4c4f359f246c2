// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Bridge-domain membership, used to cross-check overlay BVI wiring.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An interface's membership entry inside a bridge domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BdInterface {
    pub name: String,
    #[serde(default)]
    pub bvi: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeDomainCore {
    pub name: String,
    #[serde(default)]
    pub interfaces: Vec<BdInterface>,
}

/// sw-if-index -> interface name, as resolved by the collector for this
/// bridge domain.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BridgeDomainMeta {
    #[serde(default)]
    pub bd_id_to_name: HashMap<u32, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeDomain {
    #[serde(rename = "Bd")]
    pub bd: BridgeDomainCore,
    #[serde(rename = "BdMeta")]
    pub meta: BridgeDomainMeta,
}
