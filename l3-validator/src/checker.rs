// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! The central route-attribute checker. Every per-role validator bottoms
//! out in [`validate_route`]: look the expected destination up in the VRF
//! index, assume it's valid, then flip to invalid on each attribute that
//! doesn't match. All four attribute checks run independently — a single
//! route can end up contributing up to four error messages in one call.

use crate::vrfindex::{RouteStatus, ValidationMap, VrfId, VrfIndex};
use regex::Regex;
use report::Report;

/// Everything [`validate_route`] expects of one destination, beyond the
/// VRF and destination CIDR it's keyed by.
pub struct Expectation<'a> {
    /// Regular expression the route's outgoing interface name must match.
    /// An empty pattern matches anything, by ordinary regex semantics.
    pub out_iface_pattern: &'a str,
    pub out_if_idx: u32,
    /// Expected next hop; an empty string skips the next-hop check
    /// entirely.
    pub next_hop: &'a str,
    pub via_vrf: VrfId,
}

/// Check one expected route against the VRF index, updating `validation`
/// and emitting report lines for every mismatch. Returns the number of
/// errors found (0 if the route matched everything).
#[allow(clippy::too_many_arguments)]
pub fn validate_route(
    vrf_index: &VrfIndex,
    validation: &mut ValidationMap,
    report: &dyn Report,
    node_name: &str,
    dst: &str,
    vrf: VrfId,
    expected: &Expectation<'_>,
) -> u32 {
    let Some(route) = vrf_index.get(vrf, dst) else {
        report.log_err_and_append_to_node_report(
            node_name,
            &format!("missing route {dst} in VRF{vrf}"),
        );
        return 1;
    };

    validation.set_status(vrf, dst, RouteStatus::Valid);
    let mut errors = 0u32;

    let out_iface_matches = Regex::new(expected.out_iface_pattern)
        .map(|re| re.is_match(&route.ipr.out_iface))
        .unwrap_or(false);
    if !out_iface_matches {
        errors += 1;
        validation.set_status(vrf, dst, RouteStatus::Invalid);
        report.log_err_and_append_to_node_report(
            node_name,
            &format!(
                "invalid route {dst} in VRF{vrf}; bad outgoing if - have '{}', expecting '{}'",
                route.ipr.out_iface, expected.out_iface_pattern
            ),
        );
    }

    if route.meta.outgoing_if_idx != expected.out_if_idx {
        errors += 1;
        validation.set_status(vrf, dst, RouteStatus::Invalid);
        report.log_err_and_append_to_node_report(
            node_name,
            &format!(
                "invalid route {dst} in VRF{vrf}; bad outgoing swIndex - have '{}', expecting '{}'",
                route.meta.outgoing_if_idx, expected.out_if_idx
            ),
        );
    }

    if route.ipr.via_vrf_id != expected.via_vrf {
        errors += 1;
        validation.set_status(vrf, dst, RouteStatus::Invalid);
        report.log_err_and_append_to_node_report(
            node_name,
            &format!(
                "invalid route {dst} in VRF{vrf}; bad viaVrfID - have '{}', expecting '{}'",
                route.ipr.via_vrf_id, expected.via_vrf
            ),
        );
    }

    if !expected.next_hop.is_empty() && route.ipr.next_hop_addr != expected.next_hop {
        errors += 1;
        validation.set_status(vrf, dst, RouteStatus::Invalid);
        report.log_err_and_append_to_node_report(
            node_name,
            &format!(
                "invalid route {dst} in VRF{vrf}; bad nextHop - have '{}', expecting '{}'",
                route.ipr.next_hop_addr, expected.next_hop
            ),
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vrfindex::build_vrf_index;
    use report::RecordingReport;
    use telemetry_model::{Route, RouteCore, RouteMeta};

    fn route(out_iface: &str, out_idx: u32, next_hop: &str, via_vrf: u32) -> Route {
        Route {
            ipr: RouteCore {
                vrf_id: 0,
                dst_addr: "10.20.0.10/32".to_string(),
                next_hop_addr: next_hop.to_string(),
                out_iface: out_iface.to_string(),
                via_vrf_id: via_vrf,
            },
            meta: RouteMeta {
                table_name: "vrf0-VRF:main".to_string(),
                outgoing_if_idx: out_idx,
            },
        }
    }

    #[test]
    fn missing_route_counts_one_error_and_does_not_touch_validation_map() {
        let index = build_vrf_index(&[]);
        let mut validation = crate::vrfindex::build_validation_map(&index);
        let report = RecordingReport::new();

        let errors = validate_route(
            &index,
            &mut validation,
            &report,
            "node-a",
            "10.20.0.10/32",
            0,
            &Expectation {
                out_iface_pattern: "",
                out_if_idx: 0,
                next_hop: "",
                via_vrf: 0,
            },
        );

        assert_eq!(errors, 1);
        assert_eq!(validation.status(0, "10.20.0.10/32"), None);
        assert_eq!(
            report.lines_for("node-a"),
            vec!["missing route 10.20.0.10/32 in VRF0"]
        );
    }

    #[test]
    fn matching_route_is_marked_valid_with_no_errors() {
        let routes = vec![route("tap-vpp2", 4, "10.0.0.1", 0)];
        let index = build_vrf_index(&routes);
        let mut validation = crate::vrfindex::build_validation_map(&index);
        let report = RecordingReport::new();

        let errors = validate_route(
            &index,
            &mut validation,
            &report,
            "node-a",
            "10.20.0.10/32",
            0,
            &Expectation {
                out_iface_pattern: "tap-vpp2",
                out_if_idx: 4,
                next_hop: "10.0.0.1",
                via_vrf: 0,
            },
        );

        assert_eq!(errors, 0);
        assert_eq!(
            validation.status(0, "10.20.0.10/32"),
            Some(RouteStatus::Valid)
        );
        assert!(report.lines_for("node-a").is_empty());
    }

    #[test]
    fn three_wrong_attributes_give_three_errors_and_one_invalid_status() {
        let routes = vec![route("wrong-iface", 99, "9.9.9.9", 7)];
        let index = build_vrf_index(&routes);
        let mut validation = crate::vrfindex::build_validation_map(&index);
        let report = RecordingReport::new();

        let errors = validate_route(
            &index,
            &mut validation,
            &report,
            "node-a",
            "10.20.0.10/32",
            0,
            &Expectation {
                out_iface_pattern: "tap-vpp2",
                out_if_idx: 4,
                next_hop: "",
                via_vrf: 0,
            },
        );

        assert_eq!(errors, 3);
        assert_eq!(
            validation.status(0, "10.20.0.10/32"),
            Some(RouteStatus::Invalid)
        );
        assert_eq!(report.lines_for("node-a").len(), 3);
    }

    #[test]
    fn empty_next_hop_expectation_skips_the_next_hop_check() {
        let routes = vec![route("tap-vpp2", 4, "anything-at-all", 0)];
        let index = build_vrf_index(&routes);
        let mut validation = crate::vrfindex::build_validation_map(&index);
        let report = RecordingReport::new();

        let errors = validate_route(
            &index,
            &mut validation,
            &report,
            "node-a",
            "10.20.0.10/32",
            0,
            &Expectation {
                out_iface_pattern: "tap-vpp2",
                out_if_idx: 4,
                next_hop: "",
                via_vrf: 0,
            },
        );

        assert_eq!(errors, 0);
    }
}
