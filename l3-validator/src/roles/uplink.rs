// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Role: VRF0 uplink routes over the node's physical GigE interface,
//! plus the drop routes for that interface's own network and broadcast
//! addresses, plus a `/32` route to every other node's management IP.

use crate::addr;
use crate::checker::{self, Expectation};
use crate::consts::GIGE_NAME_MATCH;
use crate::ifsearch::find_interface;
use crate::vrfindex::{ValidationMap, VrfIndex};
use report::Report;
use telemetry_model::Node;

const MAIN_VRF: u32 = 0;

pub fn validate_vrf0_uplink_routes(
    node: &Node,
    all_nodes: &[Node],
    vrf_index: &VrfIndex,
    validation: &mut ValidationMap,
    report: &dyn Report,
) -> u32 {
    tracing::debug!(node = %node.name, peers = all_nodes.len(), "validating VRF0 uplink routes");
    let ifc = match find_interface(GIGE_NAME_MATCH, &node.node_interfaces) {
        Ok(ifc) => ifc,
        Err(err) => {
            tracing::warn!(node = %node.name, error = %err, "local GigE interface not found");
            report.log_err_and_append_to_node_report(
                &node.name,
                &format!("local GigE interface not found, error {err}"),
            );
            return 1;
        }
    };

    let mut errors = checker::validate_route(
        vrf_index,
        validation,
        report,
        &node.name,
        &node.ip_addr,
        MAIN_VRF,
        &Expectation {
            out_iface_pattern: &ifc.iface.name,
            out_if_idx: ifc.meta.sw_if_index,
            next_hop: "0.0.0.0",
            via_vrf: 0,
        },
    );

    for ip_addr in &ifc.iface.ip_addresses {
        if ip_addr != &node.ip_addr {
            continue;
        }
        if let Ok((if_addr, if_mask)) = addr::cidr_to_addr_mask(ip_addr) {
            let drop1 = format!("{}/32", addr::addr_to_string(addr::network_addr(if_addr, if_mask)));
            let drop2 = format!(
                "{}/32",
                addr::addr_to_string(addr::broadcast_addr(if_addr, if_mask))
            );
            for drop in [drop1, drop2] {
                errors += checker::validate_route(
                    vrf_index,
                    validation,
                    report,
                    &node.name,
                    &drop,
                    MAIN_VRF,
                    &Expectation {
                        out_iface_pattern: "",
                        out_if_idx: 0,
                        next_hop: "0.0.0.0",
                        via_vrf: 0,
                    },
                );
            }
        } else {
            errors += 1;
            tracing::warn!(node = %node.name, address = %ip_addr, "local GigE IP address is malformed");
            report.log_err_and_append_to_node_report(
                &node.name,
                &format!("local GigE IP address {ip_addr} is malformed"),
            );
        }
        break;
    }

    // Upstream's per-node peer loop shadows the outer node with the loop
    // variable, so the report line below is filed under the peer's name,
    // not `node.name`'s. Preserved faithfully, not a typo.
    for peer in all_nodes {
        let peer_addr = addr::strip_prefix(&peer.ip_addr);
        errors += checker::validate_route(
            vrf_index,
            validation,
            report,
            &peer.name,
            &format!("{peer_addr}/32"),
            MAIN_VRF,
            &Expectation {
                out_iface_pattern: &ifc.iface.name,
                out_if_idx: ifc.meta.sw_if_index,
                next_hop: peer_addr,
                via_vrf: 0,
            },
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vrfindex::build_vrf_index;
    use report::RecordingReport;
    use std::collections::BTreeMap;
    use telemetry_model::{
        Interface, InterfaceMeta, Ipam, IpamConfig, NodeInterface, RouteCore, RouteMeta,
    };

    fn node(name: &str, ip_addr: &str, interfaces: Vec<NodeInterface>) -> Node {
        Node {
            name: name.to_string(),
            man_ip_addr: addr::strip_prefix(ip_addr).to_string(),
            ip_addr: ip_addr.to_string(),
            pod_map: BTreeMap::new(),
            node_interfaces: interfaces,
            node_static_routes: vec![],
            node_bridge_domains: vec![],
            node_ip_arp: vec![],
            node_ipam: Ipam {
                vpp_host_network: "172.30.1.0/24".to_string(),
                pod_network: "10.0.1.0/24".to_string(),
                config: IpamConfig {
                    pod_subnet_cidr: "10.0.0.0/16".to_string(),
                    vpp_host_subnet_cidr: "172.30.0.0/16".to_string(),
                },
            },
        }
    }

    fn gige(ip: &str, idx: u32) -> NodeInterface {
        NodeInterface {
            iface: Interface {
                name: "GigabitEthernet0/8/0".to_string(),
                ip_addresses: vec![ip.to_string()],
            },
            meta: InterfaceMeta {
                sw_if_index: idx,
                tag: "GigabitEthernet0/8/0".to_string(),
            },
        }
    }

    #[test]
    fn missing_gige_interface_is_one_error() {
        let node = node("k8s-worker1", "10.20.0.10/24", vec![]);
        let index = build_vrf_index(&[]);
        let mut validation = crate::vrfindex::build_validation_map(&index);
        let report = RecordingReport::new();
        let errors =
            validate_vrf0_uplink_routes(&node, &[], &index, &mut validation, &report);
        assert_eq!(errors, 1);
    }

    #[test]
    fn peer_route_is_filed_under_the_peer_node_name() {
        let node = node(
            "k8s-worker1",
            "10.20.0.10/24",
            vec![gige("10.20.0.10/24", 3)],
        );
        let peer = node("k8s-worker2", "10.20.0.11/24", vec![]);

        let routes = vec![
            telemetry_model::Route {
                ipr: RouteCore {
                    vrf_id: 0,
                    dst_addr: "10.20.0.10/24".to_string(),
                    next_hop_addr: "0.0.0.0".to_string(),
                    out_iface: "GigabitEthernet0/8/0".to_string(),
                    via_vrf_id: 0,
                },
                meta: RouteMeta {
                    table_name: "vrf0-VRF:main".to_string(),
                    outgoing_if_idx: 3,
                },
            },
            telemetry_model::Route {
                ipr: RouteCore {
                    vrf_id: 0,
                    dst_addr: "0.0.0.10/32".to_string(),
                    next_hop_addr: "0.0.0.0".to_string(),
                    out_iface: String::new(),
                    via_vrf_id: 0,
                },
                meta: RouteMeta {
                    table_name: "vrf0-VRF:main".to_string(),
                    outgoing_if_idx: 0,
                },
            },
            telemetry_model::Route {
                ipr: RouteCore {
                    vrf_id: 0,
                    dst_addr: "10.20.0.255/32".to_string(),
                    next_hop_addr: "0.0.0.0".to_string(),
                    out_iface: String::new(),
                    via_vrf_id: 0,
                },
                meta: RouteMeta {
                    table_name: "vrf0-VRF:main".to_string(),
                    outgoing_if_idx: 0,
                },
            },
            telemetry_model::Route {
                ipr: RouteCore {
                    vrf_id: 0,
                    dst_addr: "10.20.0.11/32".to_string(),
                    next_hop_addr: "10.20.0.11".to_string(),
                    out_iface: "GigabitEthernet0/8/0".to_string(),
                    via_vrf_id: 0,
                },
                meta: RouteMeta {
                    table_name: "vrf0-VRF:main".to_string(),
                    outgoing_if_idx: 3,
                },
            },
        ];
        let index = build_vrf_index(&routes);
        let mut validation = crate::vrfindex::build_validation_map(&index);
        let report = RecordingReport::new();

        let errors = validate_vrf0_uplink_routes(
            &node,
            std::slice::from_ref(&peer),
            &index,
            &mut validation,
            &report,
        );
        assert_eq!(errors, 0);
        assert!(report.lines_for("k8s-worker1").is_empty());
        assert!(report.lines_for("k8s-worker2").is_empty());
    }
}
