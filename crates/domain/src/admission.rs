use std::fmt;
use std::sync::Arc;

/// Permit traffic from `source` (a local workload) to `destination` (a resolved address).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdmissionRequest {
    pub source: Arc<str>,
    pub destination: Arc<str>,
}

impl AdmissionRequest {
    pub fn new(source: impl Into<Arc<str>>, destination: impl Into<Arc<str>>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

impl fmt::Display for AdmissionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}
