// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! A single node's telemetry snapshot: everything the L3 validator needs
//! to reconstruct that node's FIB and the topology it should contain.

use crate::arp::ArpEntry;
use crate::bridge::BridgeDomain;
use crate::interface::NodeInterface;
use crate::ipam::Ipam;
use crate::route::Route;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A pod scheduled on this node, and the VPP-side plumbing connecting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pod {
    pub ip_address: String,
    pub vpp_if_name: String,
    pub vpp_sw_if_idx: u32,
    pub vpp_if_ip_addr: String,
}

/// One node's worth of telemetry, read-only to the validator.
///
/// `pod_map` is a `BTreeMap` rather than a `HashMap` so that fixture
/// construction and test assertions get a stable iteration order; the
/// validator itself does not rely on pod iteration order (spec calls for
/// none), but deterministic tests are worth the ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub man_ip_addr: String,
    pub ip_addr: String,
    #[serde(default)]
    pub pod_map: BTreeMap<String, Pod>,
    #[serde(default)]
    pub node_interfaces: Vec<NodeInterface>,
    #[serde(default)]
    pub node_static_routes: Vec<Route>,
    #[serde(default)]
    pub node_bridge_domains: Vec<BridgeDomain>,
    #[serde(default)]
    pub node_ip_arp: Vec<ArpEntry>,
    pub node_ipam: Ipam,
}
