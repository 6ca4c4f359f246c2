// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! The L3 FIB validator: reconstructs each node's per-VRF forwarding
//! state from telemetry and checks it against the routes the control
//! plane should have installed.

pub mod addr;
pub mod checker;
pub mod consts;
pub mod ifsearch;
pub mod roles;
pub mod vrfindex;

use report::{Report, GLOBAL_MSG};
use telemetry_model::{Node, VppCache};
use vrfindex::{build_validation_map, build_vrf_index};

/// Run every per-role validator over every node `cache` yields, in the
/// order listed for the per-role validators, and emit the per-VRF and
/// global summary lines. Returns the total error count across all nodes.
pub fn validate_all(cache: &dyn VppCache, report: &dyn Report) -> u32 {
    let nodes = cache.retrieve_all_nodes();
    tracing::debug!(nodes = nodes.len(), "starting L3 FIB validation run");
    let mut total_errors = 0u32;

    for node in nodes {
        total_errors += validate_node(node, nodes, report);
    }

    if total_errors == 0 {
        tracing::debug!("L3 FIB validation run completed with no errors");
        report.append_to_node_report(GLOBAL_MSG, "L3Fib validation: OK");
    } else {
        tracing::warn!(errors = total_errors, "L3 FIB validation run found errors");
        let noun = if total_errors == 1 { "error" } else { "errors" };
        report.append_to_node_report(
            GLOBAL_MSG,
            &format!("L3Fib validation: {total_errors} {noun} found"),
        );
    }

    total_errors
}

fn validate_node(node: &Node, all_nodes: &[Node], report: &dyn Report) -> u32 {
    tracing::debug!(node = %node.name, "validating node");
    let vrf_index = build_vrf_index(&node.node_static_routes);
    let mut validation = build_validation_map(&vrf_index);

    let mut errors = 0u32;
    errors += roles::local_pods::validate_local_pod_routes(node, &vrf_index, &mut validation, report);
    errors += roles::local_bvi::validate_route_to_local_vxlan_bvi(
        node,
        &vrf_index,
        &mut validation,
        report,
    );
    errors += roles::uplink::validate_vrf0_uplink_routes(
        node,
        all_nodes,
        &vrf_index,
        &mut validation,
        report,
    );
    errors += roles::local_host::validate_vrf0_local_host_route(
        node,
        &vrf_index,
        &mut validation,
        report,
    );
    errors += roles::defaults::validate_default_routes(node, &vrf_index, &mut validation, report);
    errors += roles::remote_nodes::validate_remote_node_routes(
        node,
        all_nodes,
        &vrf_index,
        &mut validation,
        report,
    );
    errors += roles::pod_subnet::validate_pod_subnet_cidr_routes(
        node,
        &vrf_index,
        &mut validation,
        report,
    );
    errors += roles::host_subnet::validate_vpp_host_network_routes(
        node,
        &vrf_index,
        &mut validation,
        report,
    );

    for vrf in vrf_index.vrf_ids() {
        let (total, not_validated, invalid, valid) = validation.counts(vrf);
        report.append_to_node_report(
            &node.name,
            &format!(
                "Rte report VRF{vrf}: total {total}, notValidated {not_validated}, invalid: {invalid}, valid:{valid}"
            ),
        );
    }

    errors
}
