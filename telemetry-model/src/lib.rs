// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! In-memory shape of the telemetry a fabric node reports: interfaces,
//! static routes, bridge domains, ARP entries and IPAM configuration.
//!
//! This crate only defines data; nothing here talks to a CRD store, a REST
//! endpoint or the forwarder itself. Acquisition and caching of this data
//! is somebody else's problem — see [`VppCache`] and [`K8sCache`], which
//! name that boundary without crossing it.

pub mod arp;
pub mod bridge;
pub mod cache;
pub mod interface;
pub mod ipam;
pub mod node;
pub mod route;

pub use arp::{ArpEntry, ArpEntryCore, ArpEntryMeta};
pub use bridge::{BdInterface, BridgeDomain, BridgeDomainCore, BridgeDomainMeta};
pub use cache::{InMemoryVppCache, K8sCache, NoopK8sCache, VppCache};
pub use interface::{Interface, InterfaceMeta, NodeInterface};
pub use ipam::{Ipam, IpamConfig};
pub use node::{Node, Pod};
pub use route::{Route, RouteCore, RouteMeta, VRF_TABLE_MARKER};
