use crate::policy_snapshot::is_dotted_quad;
use std::sync::Arc;

/// Names shorter than this are never considered for admission.
pub const MIN_NAME_LEN: usize = 4;

/// A single `(queried name, resolved IPv4 address)` fact taken from a DNS response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolutionEvent {
    pub name: Arc<str>,
    pub address: Arc<str>,
}

impl ResolutionEvent {
    pub fn new(name: impl Into<Arc<str>>, address: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }

    /// True when the event passes the pre-match filters: a name of at least
    /// four characters and a dotted-quad shaped address.
    pub fn is_admissible(&self) -> bool {
        self.name.len() >= MIN_NAME_LEN && is_dotted_quad(&self.address)
    }
}
