// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Role: the node-wide pod-subnet aggregate route, present in both VRFs.

use crate::checker::{self, Expectation};
use crate::consts::LOCAL0_NAME;
use crate::vrfindex::{ValidationMap, VrfIndex};
use report::Report;
use telemetry_model::Node;

const MAIN_VRF: u32 = 0;
const POD_VRF: u32 = 1;

pub fn validate_pod_subnet_cidr_routes(
    node: &Node,
    vrf_index: &VrfIndex,
    validation: &mut ValidationMap,
    report: &dyn Report,
) -> u32 {
    let pod_subnet = &node.node_ipam.config.pod_subnet_cidr;
    tracing::debug!(node = %node.name, pod_subnet = %pod_subnet, "validating pod subnet aggregate routes");

    let mut errors = checker::validate_route(
        vrf_index,
        validation,
        report,
        &node.name,
        pod_subnet,
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
        pod_subnet,
        POD_VRF,
        &Expectation {
            out_iface_pattern: LOCAL0_NAME,
            out_if_idx: 0,
            next_hop: "0.0.0.0",
            via_vrf: 0,
        },
    );

    errors
}
