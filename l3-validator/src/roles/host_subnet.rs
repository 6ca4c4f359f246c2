// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Role: the node-wide VPP-host-subnet aggregate route in both VRFs,
//! plus the `tap-vpp2` local consistency check and its three drop
//! routes.

use crate::addr;
use crate::checker::{self, Expectation};
use crate::consts::{LOCAL0_NAME, TAP2HOST_NAME};
use crate::ifsearch::find_interface;
use crate::vrfindex::{ValidationMap, VrfIndex};
use report::Report;
use telemetry_model::Node;

const MAIN_VRF: u32 = 0;
const POD_VRF: u32 = 1;

pub fn validate_vpp_host_network_routes(
    node: &Node,
    vrf_index: &VrfIndex,
    validation: &mut ValidationMap,
    report: &dyn Report,
) -> u32 {
    let host_subnet = &node.node_ipam.config.vpp_host_subnet_cidr;
    tracing::debug!(node = %node.name, host_subnet = %host_subnet, "validating host subnet aggregate routes");

    let mut errors = checker::validate_route(
        vrf_index,
        validation,
        report,
        &node.name,
        host_subnet,
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
        host_subnet,
        POD_VRF,
        &Expectation {
            out_iface_pattern: LOCAL0_NAME,
            out_if_idx: 0,
            next_hop: "0.0.0.0",
            via_vrf: 0,
        },
    );

    errors += validate_local_vpp_host_network_route(node, vrf_index, validation, report);
    errors
}

fn validate_local_vpp_host_network_route(
    node: &Node,
    vrf_index: &VrfIndex,
    validation: &mut ValidationMap,
    report: &dyn Report,
) -> u32 {
    let ifc = match find_interface(TAP2HOST_NAME, &node.node_interfaces) {
        Ok(ifc) => ifc,
        Err(err) => {
            tracing::warn!(node = %node.name, error = %err, "tap-vpp2 lookup failed");
            report.log_err_and_append_to_node_report(
                &node.name,
                &format!("failed to validate route to tap-vpp2 - failed lookup for tap-vpp2, err {err}"),
            );
            return 1;
        }
    };

    let Some(tap_ip_cidr) = ifc.iface.ip_addresses.first() else {
        tracing::warn!(node = %node.name, "tap-vpp2 interface has no IP address configured");
        report.log_err_and_append_to_node_report(
            &node.name,
            &format!("tap-vpp2 interface {} has no IP address configured", ifc.iface.name),
        );
        return 1;
    };

    let mut errors = checker::validate_route(
        vrf_index,
        validation,
        report,
        &node.name,
        tap_ip_cidr,
        MAIN_VRF,
        &Expectation {
            out_iface_pattern: "",
            out_if_idx: ifc.meta.sw_if_index,
            next_hop: "0.0.0.0",
            via_vrf: 0,
        },
    );

    let (if_addr, if_mask) = match addr::cidr_to_addr_mask(tap_ip_cidr) {
        Ok(v) => v,
        Err(err) => {
            errors += 1;
            tracing::warn!(node = %node.name, address = %tap_ip_cidr, error = %err, "tap-vpp2 IP address bad format");
            report.log_err_and_append_to_node_report(
                &node.name,
                &format!("tap-vpp2 IP address {tap_ip_cidr} bad format; err {err}"),
            );
            return errors;
        }
    };
    let if_prefix = addr::network_addr(if_addr, if_mask);

    let (ipam_addr, ipam_mask) = match addr::cidr_to_addr_mask(&node.node_ipam.vpp_host_network) {
        Ok(v) => v,
        Err(err) => {
            errors += 1;
            tracing::warn!(node = %node.name, vpp_host_network = %node.node_ipam.vpp_host_network, error = %err, "ipam vppHostNetwork bad format");
            report.log_err_and_append_to_node_report(
                &node.name,
                &format!(
                    "ipam vppHostNetwork {} bad format; err {err}",
                    node.node_ipam.vpp_host_network
                ),
            );
            return errors;
        }
    };
    // The IPAM-vs-interface consistency check compares `&^mask` network
    // addresses on both sides, the same formula `if_prefix` and the drop
    // routes below use, not the conventional `addr & mask` prefix.
    if if_mask != ipam_mask || if_prefix != addr::network_addr(ipam_addr, ipam_mask) {
        errors += 1;
        tracing::warn!(node = %node.name, vpp_host_network = %node.node_ipam.vpp_host_network, tap_ip = %tap_ip_cidr, "inconsistent ipam vppHostNetwork vs tap-vpp2 IP address");
        report.log_err_and_append_to_node_report(
            &node.name,
            &format!(
                "inconsistent ipam vppHostNetwork {} vs tap-vpp2 IP address {tap_ip_cidr}",
                node.node_ipam.vpp_host_network
            ),
        );
        return errors;
    }

    let tap_addr = addr::strip_prefix(tap_ip_cidr);
    let drop1 = format!("{}/32", addr::addr_to_string(if_addr));
    let drop2 = format!("{}/32", addr::addr_to_string(if_prefix));
    // Matches the upstream arithmetic `+` rather than the usual `|`: the
    // two operands never overlap in bit range, so the results coincide.
    let drop3 = format!("{}/32", addr::addr_to_string(if_prefix.wrapping_add(if_mask)));

    errors += checker::validate_route(
        vrf_index,
        validation,
        report,
        &node.name,
        &drop1,
        MAIN_VRF,
        &Expectation {
            out_iface_pattern: "",
            out_if_idx: ifc.meta.sw_if_index,
            next_hop: tap_addr,
            via_vrf: 0,
        },
    );
    for drop in [drop2, drop3] {
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

    errors
}
