// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Per-node route indexes: the raw VRF → destination → route map built
//! from telemetry, and the parallel tri-state validation map the checker
//! updates as it works through each expected route.

use std::collections::HashMap;
use telemetry_model::{Route, VRF_TABLE_MARKER};

pub type VrfId = u32;

/// `VRF id -> destination CIDR -> route`, built once per node and never
/// mutated again.
#[derive(Debug, Default, Clone)]
pub struct VrfIndex {
    vrfs: HashMap<VrfId, HashMap<String, Route>>,
}

impl VrfIndex {
    #[must_use]
    pub fn get(&self, vrf: VrfId, dst: &str) -> Option<&Route> {
        self.vrfs.get(&vrf)?.get(dst)
    }

    pub fn vrf_ids(&self) -> impl Iterator<Item = VrfId> + '_ {
        self.vrfs.keys().copied()
    }

    fn keys(&self, vrf: VrfId) -> Vec<String> {
        self.vrfs
            .get(&vrf)
            .map(|routes| routes.keys().cloned().collect())
            .unwrap_or_default()
    }
}

/// Build the VRF index from a node's static-route list.
///
/// A route whose table-name tag does not contain [`VRF_TABLE_MARKER`] is
/// an auxiliary route that does not belong to a named VRF and is not
/// stored — but the (possibly empty) inner map for its VRF id is still
/// created, matching the upstream builder's behavior.
#[must_use]
pub fn build_vrf_index(routes: &[Route]) -> VrfIndex {
    let mut vrfs: HashMap<VrfId, HashMap<String, Route>> = HashMap::new();
    for route in routes {
        let vrf = vrfs.entry(route.ipr.vrf_id).or_default();
        if !route.meta.table_name.contains(VRF_TABLE_MARKER) {
            continue;
        }
        vrf.insert(route.ipr.dst_addr.clone(), route.clone());
    }
    VrfIndex { vrfs }
}

/// Tri-state status of one destination's checks within a validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteStatus {
    NotValidated,
    Invalid,
    Valid,
}

/// Parallel index to [`VrfIndex`], tracking whether each route the
/// builder found has been checked yet, and if so whether it passed.
#[derive(Debug, Default, Clone)]
pub struct ValidationMap {
    vrfs: HashMap<VrfId, HashMap<String, RouteStatus>>,
}

impl ValidationMap {
    #[must_use]
    pub fn status(&self, vrf: VrfId, dst: &str) -> Option<RouteStatus> {
        self.vrfs.get(&vrf)?.get(dst).copied()
    }

    /// Sets the status for `dst` in `vrf`. No-op if `dst` is not a key the
    /// builder produced for that VRF (the map's keyspace is fixed after
    /// construction).
    pub fn set_status(&mut self, vrf: VrfId, dst: &str, status: RouteStatus) {
        if let Some(entry) = self.vrfs.get_mut(&vrf).and_then(|v| v.get_mut(dst)) {
            *entry = status;
        }
    }

    pub fn vrf_ids(&self) -> impl Iterator<Item = VrfId> + '_ {
        self.vrfs.keys().copied()
    }

    /// `(total, not_validated, invalid, valid)` counts for one VRF.
    #[must_use]
    pub fn counts(&self, vrf: VrfId) -> (usize, usize, usize, usize) {
        let Some(routes) = self.vrfs.get(&vrf) else {
            return (0, 0, 0, 0);
        };
        let total = routes.len();
        let not_validated = routes
            .values()
            .filter(|s| **s == RouteStatus::NotValidated)
            .count();
        let invalid = routes
            .values()
            .filter(|s| **s == RouteStatus::Invalid)
            .count();
        let valid = routes
            .values()
            .filter(|s| **s == RouteStatus::Valid)
            .count();
        (total, not_validated, invalid, valid)
    }
}

/// Build the validation map, mirroring `index`'s keyspace with every entry
/// set to [`RouteStatus::NotValidated`].
#[must_use]
pub fn build_validation_map(index: &VrfIndex) -> ValidationMap {
    let mut vrfs: HashMap<VrfId, HashMap<String, RouteStatus>> = HashMap::new();
    for vrf in index.vrf_ids() {
        let entries = index
            .keys(vrf)
            .into_iter()
            .map(|dst| (dst, RouteStatus::NotValidated))
            .collect();
        vrfs.insert(vrf, entries);
    }
    ValidationMap { vrfs }
}

#[cfg(test)]
mod tests {
    use super::*;
    use telemetry_model::{RouteCore, RouteMeta};

    fn route(vrf: u32, dst: &str, table_name: &str) -> Route {
        Route {
            ipr: RouteCore {
                vrf_id: vrf,
                dst_addr: dst.to_string(),
                next_hop_addr: String::new(),
                out_iface: String::new(),
                via_vrf_id: 0,
            },
            meta: RouteMeta {
                table_name: table_name.to_string(),
                outgoing_if_idx: 0,
            },
        }
    }

    #[test]
    fn filters_routes_without_the_vrf_marker() {
        let routes = vec![
            route(1, "10.0.0.0/24", "vrf1-VRF:pod"),
            route(1, "192.168.0.0/24", "aux-table"),
        ];
        let index = build_vrf_index(&routes);
        assert!(index.get(1, "10.0.0.0/24").is_some());
        assert!(index.get(1, "192.168.0.0/24").is_none());
    }

    #[test]
    fn validation_map_keyspace_matches_vrf_index_after_build() {
        let routes = vec![
            route(0, "0.0.0.0/0", "vrf0-VRF:default"),
            route(1, "10.0.0.0/24", "vrf1-VRF:pod"),
        ];
        let index = build_vrf_index(&routes);
        let map = build_validation_map(&index);

        for vrf in index.vrf_ids() {
            assert_eq!(index.keys(vrf).len(), map.counts(vrf).0);
        }
        assert_eq!(map.status(0, "0.0.0.0/0"), Some(RouteStatus::NotValidated));
    }

    #[test]
    fn setting_status_on_unknown_destination_is_a_no_op() {
        let mut map = ValidationMap::default();
        map.set_status(0, "10.0.0.0/24", RouteStatus::Valid);
        assert_eq!(map.status(0, "10.0.0.0/24"), None);
    }
}
