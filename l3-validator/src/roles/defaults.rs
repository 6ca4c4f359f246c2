// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Role: default-route presence in both VRFs. VRF1's default points back
//! into VRF0; VRF0's default goes out the node's GigE uplink, with the
//! next hop resolved from ARP when available.

use crate::checker::{self, Expectation};
use crate::consts::GIGE_NAME_MATCH;
use crate::ifsearch::find_interface;
use crate::vrfindex::{ValidationMap, VrfIndex};
use report::Report;
use telemetry_model::Node;

const MAIN_VRF: u32 = 0;
const POD_VRF: u32 = 1;

pub fn validate_default_routes(
    node: &Node,
    vrf_index: &VrfIndex,
    validation: &mut ValidationMap,
    report: &dyn Report,
) -> u32 {
    tracing::debug!(node = %node.name, "validating default routes");
    let mut errors = checker::validate_route(
        vrf_index,
        validation,
        report,
        &node.name,
        "0.0.0.0/0",
        POD_VRF,
        &Expectation {
            out_iface_pattern: "",
            out_if_idx: 0,
            next_hop: "0.0.0.0",
            via_vrf: 0,
        },
    );

    let ifc = match find_interface(GIGE_NAME_MATCH, &node.node_interfaces) {
        Ok(ifc) => ifc,
        Err(err) => {
            errors += 1;
            tracing::warn!(node = %node.name, error = %err, "local GigE interface lookup failed for VRF0 default");
            report.log_err_and_append_to_node_report(
                &node.name,
                &format!(
                    "failed to validate route 0.0.0.0/0 VRF0 - local GigE interface lookup match error {err}"
                ),
            );
            return errors;
        }
    };

    let next_hop = node
        .node_ip_arp
        .iter()
        .find(|arp| arp.meta.if_index == ifc.meta.sw_if_index)
        .map(|arp| arp.ae.ip_address.clone())
        .unwrap_or_default();

    errors += checker::validate_route(
        vrf_index,
        validation,
        report,
        &node.name,
        "0.0.0.0/0",
        MAIN_VRF,
        &Expectation {
            out_iface_pattern: "",
            out_if_idx: ifc.meta.sw_if_index,
            next_hop: &next_hop,
            via_vrf: 0,
        },
    );

    errors
}
