pub mod admission;
pub mod policy;

// Re-export use cases
pub use admission::{AdmissionOutcome, AdmitResolutionUseCase};
pub use policy::{RefreshOutcome, RefreshPolicyUseCase};
