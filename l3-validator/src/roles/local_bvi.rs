// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Role: local VXLAN BVI routes. Each address configured on the node's
//! own `vxlanBVI` loopback should have a matching `/32` connected route.

use crate::checker::{self, Expectation};
use crate::consts::VXLAN_BVI_NAME;
use crate::ifsearch::find_interface;
use crate::vrfindex::{ValidationMap, VrfIndex};
use report::Report;
use telemetry_model::Node;

const POD_VRF: u32 = 1;

pub fn validate_route_to_local_vxlan_bvi(
    node: &Node,
    vrf_index: &VrfIndex,
    validation: &mut ValidationMap,
    report: &dyn Report,
) -> u32 {
    tracing::debug!(node = %node.name, "validating local vxlanBVI routes");
    let loop_if = match find_interface(VXLAN_BVI_NAME, &node.node_interfaces) {
        Ok(ifc) => ifc,
        Err(err) => {
            tracing::warn!(node = %node.name, error = %err, "local vxlanBVI lookup failed");
            report.log_err_and_append_to_node_report(
                &node.name,
                &format!("local BVI interface lookup failed, error {err}"),
            );
            return 1;
        }
    };

    let mut errors = 0u32;
    for ip in &loop_if.iface.ip_addresses {
        errors += checker::validate_route(
            vrf_index,
            validation,
            report,
            &node.name,
            ip,
            POD_VRF,
            &Expectation {
                out_iface_pattern: &loop_if.meta.tag,
                out_if_idx: loop_if.meta.sw_if_index,
                next_hop: "0.0.0.0",
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

    fn node(interfaces: Vec<NodeInterface>) -> Node {
        Node {
            name: "k8s-worker1".to_string(),
            man_ip_addr: "10.20.0.10".to_string(),
            ip_addr: "10.20.0.10/24".to_string(),
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

    #[test]
    fn missing_bvi_interface_is_one_error() {
        let node = node(vec![]);
        let index = build_vrf_index(&[]);
        let mut validation = crate::vrfindex::build_validation_map(&index);
        let report = RecordingReport::new();
        let errors = validate_route_to_local_vxlan_bvi(&node, &index, &mut validation, &report);
        assert_eq!(errors, 1);
    }

    #[test]
    fn validates_each_bvi_address() {
        let bvi = NodeInterface {
            iface: Interface {
                name: VXLAN_BVI_NAME.to_string(),
                ip_addresses: vec!["192.168.16.1/24".to_string()],
            },
            meta: InterfaceMeta {
                sw_if_index: 9,
                tag: "vxlanBVI".to_string(),
            },
        };
        let node = node(vec![bvi]);
        let routes = vec![telemetry_model::Route {
            ipr: RouteCore {
                vrf_id: 1,
                dst_addr: "192.168.16.1/24".to_string(),
                next_hop_addr: "0.0.0.0".to_string(),
                out_iface: "vxlanBVI".to_string(),
                via_vrf_id: 0,
            },
            meta: RouteMeta {
                table_name: "vrf1-VRF:pod".to_string(),
                outgoing_if_idx: 9,
            },
        }];
        let index = build_vrf_index(&routes);
        let mut validation = crate::vrfindex::build_validation_map(&index);
        let report = RecordingReport::new();
        let errors = validate_route_to_local_vxlan_bvi(&node, &index, &mut validation, &report);
        assert_eq!(errors, 0);
    }
}
