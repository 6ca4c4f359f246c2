// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! IP address management configuration: the pod and host-network subnets
//! the control plane is supposed to have carved out for this node.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpamConfig {
    pub pod_subnet_cidr: String,
    pub vpp_host_subnet_cidr: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ipam {
    pub vpp_host_network: String,
    pub pod_network: String,
    pub config: IpamConfig,
}
