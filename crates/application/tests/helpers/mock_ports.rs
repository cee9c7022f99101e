#![allow(dead_code)]

use async_trait::async_trait;
use dnsflow_application::ports::{FlowInstaller, PolicySource, PolicyStore};
use dnsflow_domain::{DomainError, EgressFirewall, FlowRule, PolicySnapshot, Workload};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};

pub struct MockPolicyStore {
    snapshot: RwLock<Arc<PolicySnapshot>>,
    replacements: AtomicUsize,
}

impl MockPolicyStore {
    pub fn new() -> Self {
        Self::with_snapshot(PolicySnapshot::empty())
    }

    pub fn with_snapshot(snapshot: PolicySnapshot) -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(snapshot)),
            replacements: AtomicUsize::new(0),
        }
    }

    pub fn with_entries(entries: Vec<(&str, Vec<&str>)>) -> Self {
        Self::with_snapshot(PolicySnapshot::from_entries(entries))
    }

    pub fn replacement_count(&self) -> usize {
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

/// Records every rule it is asked to install; fails for configured sources.
pub struct MockFlowInstaller {
    installed: Mutex<Vec<String>>,
    failing_sources: Mutex<HashSet<String>>,
    attempts: AtomicUsize,
}

impl MockFlowInstaller {
    pub fn new() -> Self {
        Self {
            installed: Mutex::new(Vec::new()),
            failing_sources: Mutex::new(HashSet::new()),
            attempts: AtomicUsize::new(0),
        }
    }

    pub fn fail_for_source(&self, source: &str) {
        self.failing_sources
            .lock()
            .unwrap()
            .insert(source.to_string());
    }

    pub fn installed_rules(&self) -> Vec<String> {
        self.installed.lock().unwrap().clone()
    }

    pub fn attempt_count(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FlowInstaller for MockFlowInstaller {
    async fn install(&self, rule: &FlowRule) -> Result<(), DomainError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self
            .failing_sources
            .lock()
            .unwrap()
            .contains(rule.source.as_ref())
        {
            return Err(DomainError::FlowInstallFailed(format!(
                "exit status 1: {}",
                rule
            )));
        }
        self.installed.lock().unwrap().push(rule.to_string());
        Ok(())
    }
}

pub struct MockPolicySource {
    workloads: RwLock<Vec<Workload>>,
    firewalls: RwLock<Vec<EgressFirewall>>,
    should_fail: RwLock<bool>,
    requested_nodes: Mutex<Vec<Option<String>>>,
}

impl MockPolicySource {
    pub fn new() -> Self {
        Self::with_inventory(Vec::new(), Vec::new())
    }

    pub fn with_inventory(workloads: Vec<Workload>, firewalls: Vec<EgressFirewall>) -> Self {
        Self {
            workloads: RwLock::new(workloads),
            firewalls: RwLock::new(firewalls),
            should_fail: RwLock::new(false),
            requested_nodes: Mutex::new(Vec::new()),
        }
    }

    pub fn set_inventory(&self, workloads: Vec<Workload>, firewalls: Vec<EgressFirewall>) {
        *self.workloads.write().unwrap() = workloads;
        *self.firewalls.write().unwrap() = firewalls;
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().unwrap() = should_fail;
    }

    pub fn requested_nodes(&self) -> Vec<Option<String>> {
        self.requested_nodes.lock().unwrap().clone()
    }
}

#[async_trait]
impl PolicySource for MockPolicySource {
    async fn list_workloads(&self, node: Option<&str>) -> Result<Vec<Workload>, DomainError> {
        self.requested_nodes
            .lock()
            .unwrap()
            .push(node.map(str::to_string));
        if *self.should_fail.read().unwrap() {
            return Err(DomainError::PolicySource("inventory unavailable".into()));
        }
        Ok(self.workloads.read().unwrap().clone())
    }

    async fn list_egress_firewalls(&self) -> Result<Vec<EgressFirewall>, DomainError> {
        if *self.should_fail.read().unwrap() {
            return Err(DomainError::PolicySource("inventory unavailable".into()));
        }
        Ok(self.firewalls.read().unwrap().clone())
    }
}
