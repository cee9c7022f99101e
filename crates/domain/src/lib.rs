//! dnsflow Domain Layer
pub mod admission;
pub mod config;
pub mod egress_firewall;
pub mod errors;
pub mod flow_rule;
pub mod policy_builder;
pub mod policy_snapshot;
pub mod resolution;
pub mod workload;

pub use admission::AdmissionRequest;
pub use config::{AdmissionMode, CliOverrides, Config, ConfigError, FlowConfig};
pub use egress_firewall::{EgressFirewall, EgressRule, EgressRuleAction, EgressTarget};
pub use errors::DomainError;
pub use flow_rule::FlowRule;
pub use policy_builder::PolicyBuilder;
pub use policy_snapshot::{is_dotted_quad, suffix_matches, PolicyEntry, PolicySnapshot};
pub use resolution::ResolutionEvent;
pub use workload::Workload;
