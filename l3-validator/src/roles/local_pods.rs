// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Role: local pod routes. Every pod scheduled on a node should have a
//! `/32` route to its IP directly over the pod's VPP-side tap, plus a
//! route to that tap's own link address.

use crate::checker::{self, Expectation};
use crate::vrfindex::{ValidationMap, VrfIndex};
use report::Report;
use telemetry_model::Node;

const POD_VRF: u32 = 1;

/// Validate the `/32` routes for every pod on `node`, other than the
/// node's own management-plane pod (which has no VPP-side tap to route
/// through).
pub fn validate_local_pod_routes(
    node: &Node,
    vrf_index: &VrfIndex,
    validation: &mut ValidationMap,
    report: &dyn Report,
) -> u32 {
    tracing::debug!(node = %node.name, pods = node.pod_map.len(), "validating local pod routes");
    let mut errors = 0u32;

    for pod in node.pod_map.values() {
        if pod.ip_address == node.man_ip_addr {
            continue;
        }

        errors += checker::validate_route(
            vrf_index,
            validation,
            report,
            &node.name,
            &format!("{}/32", pod.ip_address),
            POD_VRF,
            &Expectation {
                out_iface_pattern: &pod.vpp_if_name,
                out_if_idx: pod.vpp_sw_if_idx,
                next_hop: &pod.ip_address,
                via_vrf: 0,
            },
        );

        let tap_addr = crate::addr::strip_prefix(&pod.vpp_if_ip_addr);
        errors += checker::validate_route(
            vrf_index,
            validation,
            report,
            &node.name,
            &pod.vpp_if_ip_addr,
            POD_VRF,
            &Expectation {
                out_iface_pattern: &pod.vpp_if_name,
                out_if_idx: pod.vpp_sw_if_idx,
                next_hop: tap_addr,
                via_vrf: 0,
            },
        );
    }

    errors
}
