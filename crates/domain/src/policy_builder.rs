//! Turns workload and egress firewall records into a [`PolicySnapshot`].

use crate::egress_firewall::EgressFirewall;
use crate::policy_snapshot::{is_dotted_quad, PolicySnapshot};
use crate::workload::Workload;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default)]
pub struct PolicyBuilder {
    node: Option<String>,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only consider workloads scheduled on `node`.
    pub fn for_node(node: Option<&str>) -> Self {
        Self {
            node: node.map(str::to_string),
        }
    }

    /// Namespace to workload IPs, in record order.
    ///
    /// Host-network workloads and workloads without a dotted-quad IP are skipped.
    pub fn namespace_addresses<'a>(&self, workloads: &'a [Workload]) -> FxHashMap<&'a str, Vec<&'a str>> {
        let mut by_namespace: FxHashMap<&str, Vec<&str>> = FxHashMap::default();
        for workload in workloads {
            if let Some(node) = &self.node {
                if !workload.runs_on(node) {
                    continue;
                }
            }
            if workload.host_network {
                continue;
            }
            let Some(ip) = workload.ip.as_deref().filter(|ip| is_dotted_quad(ip)) else {
                continue;
            };
            by_namespace
                .entry(workload.namespace.as_str())
                .or_default()
                .push(ip);
        }
        by_namespace
    }

    pub fn build(&self, workloads: &[Workload], firewalls: &[EgressFirewall]) -> PolicySnapshot {
        let by_namespace = self.namespace_addresses(workloads);

        let mut name_to_sources: Vec<(&str, Vec<&str>)> = Vec::new();
        let mut positions: FxHashMap<&str, usize> = FxHashMap::default();

        for firewall in firewalls {
            let Some(ips) = by_namespace.get(firewall.namespace.as_str()) else {
                continue;
            };
            if ips.is_empty() {
                continue;
            }
            for dns_name in firewall.rules.iter().filter_map(|r| r.allowed_dns_name()) {
                match positions.get(dns_name) {
                    Some(&idx) => name_to_sources[idx].1.extend(ips.iter().copied()),
                    None => {
                        positions.insert(dns_name, name_to_sources.len());
                        name_to_sources.push((dns_name, ips.clone()));
                    }
                }
            }
        }

        PolicySnapshot::from_entries(name_to_sources)
    }
}
