use dnsflow_domain::PolicySnapshot;
use std::sync::Arc;

/// Holder of the current egress policy snapshot.
///
/// `replace` swaps the whole snapshot in one step; readers get either the old
/// or the new value, never a mix. The previous snapshot is dropped once the
/// last reader holding it lets go.
pub trait PolicyStore: Send + Sync {
    fn replace(&self, snapshot: PolicySnapshot);

    fn current(&self) -> Arc<PolicySnapshot>;
}
