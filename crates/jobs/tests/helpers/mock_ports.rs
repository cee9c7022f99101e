#![allow(dead_code)]

use async_trait::async_trait;
use dnsflow_application::ports::{PolicySource, PolicyStore};
use dnsflow_domain::{
    DomainError, EgressFirewall, EgressRule, PolicySnapshot, Workload,
};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

pub struct MockPolicySource {
    workloads: Vec<Workload>,
    firewalls: Vec<EgressFirewall>,
    call_count: Arc<AtomicU64>,
    should_fail: AtomicBool,
}

impl MockPolicySource {
    pub fn new() -> Self {
        Self {
            workloads: Vec::new(),
            firewalls: Vec::new(),
            call_count: Arc::new(AtomicU64::new(0)),
            should_fail: AtomicBool::new(false),
        }
    }

    /// One workload in `shop` allowed to reach `dns_name`.
    pub fn allowing(dns_name: &str, ip: &str) -> Self {
        Self {
            workloads: vec![Workload::new("web-0", "shop", Some(ip))],
            firewalls: vec![EgressFirewall::new(
                "shop",
                vec![EgressRule::allow_dns(dns_name)],
            )],
            ..Self::new()
        }
    }

    pub fn failing() -> Self {
        let source = Self::new();
        source.should_fail.store(true, Ordering::SeqCst);
        source
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PolicySource for MockPolicySource {
    async fn list_workloads(&self, _node: Option<&str>) -> Result<Vec<Workload>, DomainError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::PolicySource("inventory unavailable".into()));
        }
        Ok(self.workloads.clone())
    }

    async fn list_egress_firewalls(&self) -> Result<Vec<EgressFirewall>, DomainError> {
        Ok(self.firewalls.clone())
    }
}

pub struct MockPolicyStore {
    snapshot: RwLock<Arc<PolicySnapshot>>,
    replacements: AtomicU64,
}

impl MockPolicyStore {
    pub fn new() -> Self {
        Self::with_snapshot(PolicySnapshot::empty())
    }

    pub fn with_snapshot(snapshot: PolicySnapshot) -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(snapshot)),
            replacements: AtomicU64::new(0),
        }
    }

    pub fn replacement_count(&self) -> u64 {
        self.replacements.load(Ordering::SeqCst)
    }
}

impl PolicyStore for MockPolicyStore {
    fn replace(&self, snapshot: PolicySnapshot) {
        *self.snapshot.write().unwrap() = Arc::new(snapshot);
        self.replacements.fetch_add(1, Ordering::SeqCst);
    }

    fn current(&self) -> Arc<PolicySnapshot> {
        Arc::clone(&self.snapshot.read().unwrap())
    }
}
