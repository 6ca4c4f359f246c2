// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Well-known VPP interface names the per-role validators look for.

pub const VXLAN_BVI_NAME: &str = "vxlanBVI";
pub const VXLAN_BD_NAME: &str = "vxlanBD";
pub const GIGE_NAME_MATCH: &str = r"GigabitEthernet[0-9]/[0-9]*/[0-9]";
pub const TAP2HOST_NAME: &str = "tap-vpp2";
pub const LOCAL0_NAME: &str = "local0";
