use crate::admission::AdmissionRequest;
use crate::config::FlowConfig;
use std::fmt;
use std::sync::Arc;

/// An OpenFlow rule admitting IPv4 traffic from one workload to one destination.
///
/// Renders in `ovs-ofctl add-flow` syntax, e.g.
/// `table=44,cookie=0xba5ed,priority=11000,ip,reg14=0x1,nw_src=10.1.1.5,nw_dst=93.184.216.34 actions=resubmit(,45)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowRule {
    pub table: u8,
    pub cookie: u64,
    pub priority: u16,
    pub ingress_register: u8,
    pub ingress_register_value: u32,
    pub source: Arc<str>,
    pub destination: Arc<str>,
    pub resubmit_table: u8,
}

impl FlowRule {
    pub fn for_admission(config: &FlowConfig, request: &AdmissionRequest) -> Self {
        Self {
            table: config.table,
            cookie: config.cookie,
            priority: config.priority,
            ingress_register: config.ingress_register,
            ingress_register_value: config.ingress_register_value,
            source: Arc::clone(&request.source),
            destination: Arc::clone(&request.destination),
            resubmit_table: config.resubmit_table,
        }
    }
}

impl fmt::Display for FlowRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "table={},cookie={:#x},priority={},ip,reg{}={:#x},nw_src={},nw_dst={} actions=resubmit(,{})",
            self.table,
            self.cookie,
            self.priority,
            self.ingress_register,
            self.ingress_register_value,
            self.source,
            self.destination,
            self.resubmit_table,
        )
    }
}
