// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Role: VRF0 route to the node's own management IP over `tap-vpp2`,
//! with the next hop resolved from the node's ARP table.

use crate::checker::{self, Expectation};
use crate::consts::TAP2HOST_NAME;
use crate::vrfindex::{ValidationMap, VrfIndex};
use report::Report;
use telemetry_model::Node;

const MAIN_VRF: u32 = 0;

pub fn validate_vrf0_local_host_route(
    node: &Node,
    vrf_index: &VrfIndex,
    validation: &mut ValidationMap,
    report: &dyn Report,
) -> u32 {
    tracing::debug!(node = %node.name, "validating VRF0 local host route");
    let dst = format!("{}/32", node.man_ip_addr);
    let Some(local_route) = vrf_index.get(MAIN_VRF, &dst) else {
        tracing::warn!(node = %node.name, dst = %dst, "missing VRF0 local host route");
        report.log_err_and_append_to_node_report(
            &node.name,
            &format!("missing route with dst IP {dst} in VRF0 for node {}", node.name),
        );
        return 1;
    };

    // The upstream collector stores `OutgoingIfIdx` as a position into
    // the node's interface slice, not a sw-if-index to look up — an
    // index-into-array quirk this keeps faithfully.
    let idx = local_route.meta.outgoing_if_idx as usize;
    let Some(tap_intf) = node.node_interfaces.get(idx) else {
        tracing::warn!(node = %node.name, idx, dst = %dst, "outgoing interface index out of range");
        report.log_err_and_append_to_node_report(
            &node.name,
            &format!(
                "outgoing interface index {idx} for route {dst} is out of range for node {}",
                node.name
            ),
        );
        return 1;
    };

    let mut next_hop = String::new();
    let mut errors = 0u32;
    for arp in &node.node_ip_arp {
        if arp.meta.if_index == tap_intf.meta.sw_if_index {
            next_hop = arp.ae.ip_address.clone();
            errors += checker::validate_route(
                vrf_index,
                validation,
                report,
                &node.name,
                &format!("{next_hop}/32"),
                MAIN_VRF,
                &Expectation {
                    out_iface_pattern: TAP2HOST_NAME,
                    out_if_idx: tap_intf.meta.sw_if_index,
                    next_hop: &next_hop,
                    via_vrf: 0,
                },
            );
            break;
        }
    }

    errors += checker::validate_route(
        vrf_index,
        validation,
        report,
        &node.name,
        &dst,
        MAIN_VRF,
        &Expectation {
            out_iface_pattern: TAP2HOST_NAME,
            out_if_idx: tap_intf.meta.sw_if_index,
            next_hop: &next_hop,
            via_vrf: 0,
        },
    );

    errors
}
