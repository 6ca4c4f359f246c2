// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Find a node's interface by name pattern.

use regex::Regex;
use telemetry_model::NodeInterface;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterfaceLookupError {
    #[error("invalid interface pattern '{0}': {1}")]
    BadPattern(String, regex::Error),

    #[error("interface pattern {0} not found")]
    NotFound(String),
}

/// Return the first interface whose name matches `pattern`, searching in
/// the order the node's interface inventory is stored. `pattern` is a
/// regular expression, not a glob, and is matched unanchored (the same
/// semantics as Go's `regexp.Match`): it only needs to match *somewhere*
/// in the interface name.
pub fn find_interface<'a>(
    pattern: &str,
    interfaces: &'a [NodeInterface],
) -> Result<&'a NodeInterface, InterfaceLookupError> {
    let re = Regex::new(pattern)
        .map_err(|e| InterfaceLookupError::BadPattern(pattern.to_string(), e))?;

    interfaces
        .iter()
        .find(|ifc| re.is_match(&ifc.iface.name))
        .ok_or_else(|| InterfaceLookupError::NotFound(pattern.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use telemetry_model::{Interface, InterfaceMeta};

    fn ifc(name: &str) -> NodeInterface {
        NodeInterface {
            iface: Interface {
                name: name.to_string(),
                ip_addresses: vec![],
            },
            meta: InterfaceMeta {
                sw_if_index: 0,
                tag: String::new(),
            },
        }
    }

    #[test]
    fn finds_first_match_in_inventory_order() {
        let ifcs = vec![ifc("local0"), ifc("GigabitEthernet0/8/0"), ifc("tap-vpp2")];
        let found = find_interface("GigabitEthernet[0-9]/[0-9]*/[0-9]", &ifcs).unwrap();
        assert_eq!(found.iface.name, "GigabitEthernet0/8/0");
    }

    #[test]
    fn empty_pattern_matches_the_first_interface() {
        let ifcs = vec![ifc("local0"), ifc("tap-vpp2")];
        let found = find_interface("", &ifcs).unwrap();
        assert_eq!(found.iface.name, "local0");
    }

    #[test]
    fn reports_not_found() {
        let ifcs = vec![ifc("local0")];
        let err = find_interface("vxlanBVI", &ifcs).unwrap_err();
        assert!(matches!(err, InterfaceLookupError::NotFound(p) if p == "vxlanBVI"));
    }

    #[test]
    fn reports_bad_pattern() {
        let ifcs = vec![ifc("local0")];
        let err = find_interface("(", &ifcs).unwrap_err();
        assert!(matches!(err, InterfaceLookupError::BadPattern(..)));
    }
}
