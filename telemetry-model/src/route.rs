// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! A static route entry in a node's FIB, as reported by telemetry.

use serde::{Deserialize, Serialize};

/// The route attributes the forwarder itself knows about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteCore {
    pub vrf_id: u32,
    pub dst_addr: String,
    #[serde(default)]
    pub next_hop_addr: String,
    #[serde(default)]
    pub out_iface: String,
    #[serde(default)]
    pub via_vrf_id: u32,
}

/// Collector-derived metadata about a route: the table it came from, and
/// the resolved outgoing interface index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMeta {
    #[serde(default)]
    pub table_name: String,
    #[serde(default)]
    pub outgoing_if_idx: u32,
}

/// One row of `NodeStaticRoutes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    #[serde(rename = "Ipr")]
    pub ipr: RouteCore,
    #[serde(rename = "IprMeta")]
    pub meta: RouteMeta,
}

/// Substring a route's table-name tag must contain to be considered part
/// of a named VRF, as opposed to an auxiliary / scratch route.
pub const VRF_TABLE_MARKER: &str = "-VRF:";
