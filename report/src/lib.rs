// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! The outbound side of the validator: where per-node and global findings
//! go. This crate owns no opinion on *transport* (file, stdout, an
//! upstream aggregator) — it defines the [`Report`] trait the validator
//! writes to, and two implementations: [`TracingReport`] for production
//! use and [`RecordingReport`] for tests that need to assert on exact
//! message text.

use std::collections::BTreeMap;
use std::sync::Mutex;

/// Node key under which validator-wide (not per-node) findings are filed.
pub const GLOBAL_MSG: &str = "__global__";

/// Sink for validator findings.
///
/// `log_err_and_append_to_node_report` is for findings that represent an
/// actual problem (and are counted as errors by the caller); append is for
/// purely informational lines such as the per-VRF route-count summary.
pub trait Report: Send + Sync {
    fn log_err_and_append_to_node_report(&self, node_name: &str, msg: &str);
    fn append_to_node_report(&self, node_name: &str, msg: &str);
}

/// Logs every finding through `tracing` and keeps nothing in memory.
/// This is what a long-running CLI invocation wants: the findings go to
/// whatever sink the process's `tracing_subscriber` is configured with.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReport;

impl Report for TracingReport {
    fn log_err_and_append_to_node_report(&self, node_name: &str, msg: &str) {
        tracing::warn!(node = node_name, "{msg}");
    }

    fn append_to_node_report(&self, node_name: &str, msg: &str) {
        tracing::info!(node = node_name, "{msg}");
    }
}

/// Buffers every line it is given, keyed by node name (or [`GLOBAL_MSG`]).
/// Used by tests and by any caller that wants to inspect the report after
/// a validation pass rather than stream it.
#[derive(Debug, Default)]
pub struct RecordingReport {
    lines: Mutex<BTreeMap<String, Vec<String>>>,
}

impl RecordingReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line recorded for `node_name`, in append order.
    #[must_use]
    pub fn lines_for(&self, node_name: &str) -> Vec<String> {
        self.lines
            .lock()
            .expect("report mutex poisoned")
            .get(node_name)
            .cloned()
            .unwrap_or_default()
    }

    /// Snapshot of the global (non-per-node) report lines.
    #[must_use]
    pub fn global_lines(&self) -> Vec<String> {
        self.lines_for(GLOBAL_MSG)
    }

    fn push(&self, node_name: &str, msg: &str) {
        self.lines
            .lock()
            .expect("report mutex poisoned")
            .entry(node_name.to_string())
            .or_default()
            .push(msg.to_string());
    }
}

impl Report for RecordingReport {
    fn log_err_and_append_to_node_report(&self, node_name: &str, msg: &str) {
        self.push(node_name, msg);
    }

    fn append_to_node_report(&self, node_name: &str, msg: &str) {
        self.push(node_name, msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_report_keeps_lines_in_order_per_node() {
        let report = RecordingReport::new();
        report.log_err_and_append_to_node_report("node-a", "first");
        report.append_to_node_report("node-a", "second");
        report.log_err_and_append_to_node_report("node-b", "other node");

        assert_eq!(report.lines_for("node-a"), vec!["first", "second"]);
        assert_eq!(report.lines_for("node-b"), vec!["other node"]);
        assert!(report.lines_for("node-c").is_empty());
    }

    #[test]
    fn global_lines_use_the_global_msg_key() {
        let report = RecordingReport::new();
        report.append_to_node_report(GLOBAL_MSG, "L3Fib validation: OK");
        assert_eq!(report.global_lines(), vec!["L3Fib validation: OK"]);
    }
}
