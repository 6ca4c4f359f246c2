// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Role: reachability to every other node's pod network and management
//! IP over the VXLAN overlay, plus cross-node bridge-domain consistency
//! checks on both ends of the BVI mesh.

use crate::addr;
use crate::checker::{self, Expectation};
use crate::consts::{VXLAN_BD_NAME, VXLAN_BVI_NAME};
use crate::ifsearch::find_interface;
use crate::vrfindex::{RouteStatus, ValidationMap, VrfIndex};
use report::Report;
use telemetry_model::Node;

const MAIN_VRF: u32 = 0;
const POD_VRF: u32 = 1;

pub fn validate_remote_node_routes(
    node: &Node,
    all_nodes: &[Node],
    vrf_index: &VrfIndex,
    validation: &mut ValidationMap,
    report: &dyn Report,
) -> u32 {
    tracing::debug!(node = %node.name, peers = all_nodes.len(), "validating remote node reachability");
    let local_bvi = match find_interface(VXLAN_BVI_NAME, &node.node_interfaces) {
        Ok(ifc) => ifc,
        Err(err) => {
            tracing::warn!(node = %node.name, error = %err, "local vxlanBVI lookup failed");
            report.log_err_and_append_to_node_report(
                &node.name,
                &format!("local vxlanBVI lookup failed, error {err}"),
            );
            return 1;
        }
    };

    let mut errors = 0u32;

    for peer in all_nodes {
        if peer.name == node.name {
            // The self iteration only re-checks the local host-network
            // route; the peer-reachability and pod-network checks below
            // don't apply to a node's own entry.
            errors += checker::validate_route(
                vrf_index,
                validation,
                report,
                &node.name,
                &node.node_ipam.vpp_host_network,
                POD_VRF,
                &Expectation {
                    out_iface_pattern: "",
                    out_if_idx: 0,
                    next_hop: "0.0.0.0",
                    via_vrf: 0,
                },
            );
            continue;
        }

        let peer_bvi = match find_interface(VXLAN_BVI_NAME, &peer.node_interfaces) {
            Ok(ifc) => ifc,
            Err(err) => {
                errors += 1;
                tracing::warn!(node = %node.name, peer = %peer.name, error = %err, "peer vxlanBVI lookup failed");
                report.log_err_and_append_to_node_report(
                    &node.name,
                    &format!(
                        "failed to validate route {}/32 VRF0 - failed lookup for vxlanBVI for node {}, error {err}",
                        peer.man_ip_addr, peer.name
                    ),
                );
                continue;
            }
        };
        // The hardcoded `/24` below matches the upstream comparison: it
        // does not derive the suffix from the peer's actual BVI prefix
        // length. Kept as-is.
        let bvi_addr = peer_bvi
            .iface
            .ip_addresses
            .first()
            .map(|ip| addr::strip_prefix(ip))
            .unwrap_or("0.0.0.0");

        errors += checker::validate_route(
            vrf_index,
            validation,
            report,
            &node.name,
            &peer.node_ipam.vpp_host_network,
            POD_VRF,
            &Expectation {
                out_iface_pattern: VXLAN_BVI_NAME,
                out_if_idx: local_bvi.meta.sw_if_index,
                next_hop: bvi_addr,
                via_vrf: 0,
            },
        );

        let peer_man_dst = format!("{}/32", peer.man_ip_addr);
        errors += checker::validate_route(
            vrf_index,
            validation,
            report,
            &node.name,
            &peer_man_dst,
            MAIN_VRF,
            &Expectation {
                out_iface_pattern: "",
                out_if_idx: 0,
                next_hop: "0.0.0.0",
                via_vrf: 1,
            },
        );
        errors += checker::validate_route(
            vrf_index,
            validation,
            report,
            &node.name,
            &peer_man_dst,
            POD_VRF,
            &Expectation {
                out_iface_pattern: VXLAN_BVI_NAME,
                out_if_idx: local_bvi.meta.sw_if_index,
                next_hop: bvi_addr,
                via_vrf: 0,
            },
        );

        errors += validate_pod_network_bridging(node, peer, vrf_index, validation, report);
    }

    errors
}

fn validate_pod_network_bridging(
    node: &Node,
    peer: &Node,
    vrf_index: &VrfIndex,
    validation: &mut ValidationMap,
    report: &dyn Report,
) -> u32 {
    let pod_nw = &peer.node_ipam.pod_network;
    let Some(route) = vrf_index.get(POD_VRF, pod_nw) else {
        tracing::warn!(node = %node.name, peer = %peer.name, pod_network = %pod_nw, "peer pod network route not found");
        report.log_err_and_append_to_node_report(
            &node.name,
            &format!("Route for pod network for node {} with ip {pod_nw} not found", peer.name),
        );
        return 1;
    };

    validation.set_status(POD_VRF, pod_nw, RouteStatus::Valid);
    let mut errors = 0u32;

    for bd in &node.node_bridge_domains {
        if bd.bd.name == VXLAN_BD_NAME {
            let bd_outgoing_name = bd.meta.bd_id_to_name.get(&route.meta.outgoing_if_idx);
            if bd_outgoing_name.map(String::as_str) != Some(VXLAN_BVI_NAME) {
                errors += 1;
                validation.set_status(POD_VRF, pod_nw, RouteStatus::Invalid);
                report.log_err_and_append_to_node_report(
                    &node.name,
                    &format!(
                        "vxlanBD outgoing interface for ipr index {} for route with pod network ip {pod_nw} is not vxlanBVI",
                        route.meta.outgoing_if_idx
                    ),
                );
            }
        }
        for intf in &bd.bd.interfaces {
            if intf.name == VXLAN_BVI_NAME && !intf.bvi {
                errors += 1;
                validation.set_status(POD_VRF, pod_nw, RouteStatus::Invalid);
                report.log_err_and_append_to_node_report(
                    &node.name,
                    &format!(
                        "Bridge domain {} interface {} BVI is {}, expected true",
                        bd.bd.name, intf.name, intf.bvi
                    ),
                );
            }
        }
    }

    for bd in &peer.node_bridge_domains {
        for (id, name) in &bd.meta.bd_id_to_name {
            if name != VXLAN_BVI_NAME {
                continue;
            }
            let Some(intf) = peer.node_interfaces.get(*id as usize) else {
                continue;
            };
            let expected_ip = format!("{}/24", route.ipr.next_hop_addr);
            let matching = intf.iface.ip_addresses.iter().any(|ip| ip == &expected_ip);
            if !matching {
                errors += 1;
                validation.set_status(POD_VRF, pod_nw, RouteStatus::Invalid);
                report.log_err_and_append_to_node_report(
                    &node.name,
                    &format!(
                        "no matching ip found in remote node {} interface {} to match current node {} route next hop {}",
                        peer.name, intf.iface.name, node.name, route.ipr.next_hop_addr
                    ),
                );
            }
        }
    }

    errors
}
