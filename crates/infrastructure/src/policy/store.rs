use arc_swap::ArcSwap;
use dnsflow_application::ports::PolicyStore;
use dnsflow_domain::PolicySnapshot;
use std::sync::Arc;

/// Lock-free policy store: readers load the current `Arc` and never block
/// the refresher.
pub struct ArcSwapPolicyStore {
    snapshot: ArcSwap<PolicySnapshot>,
}

impl ArcSwapPolicyStore {
    pub fn new() -> Self {
        Self::with_snapshot(PolicySnapshot::empty())
    }

    pub fn with_snapshot(snapshot: PolicySnapshot) -> Self {
        Self {
            snapshot: ArcSwap::from_pointee(snapshot),
        }
    }
}

impl Default for ArcSwapPolicyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyStore for ArcSwapPolicyStore {
    fn replace(&self, snapshot: PolicySnapshot) {
        self.snapshot.store(Arc::new(snapshot));
    }

    fn current(&self) -> Arc<PolicySnapshot> {
        self.snapshot.load_full()
    }
}
