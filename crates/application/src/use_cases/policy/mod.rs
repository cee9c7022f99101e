pub mod refresh_policy;

pub use refresh_policy::{RefreshOutcome, RefreshPolicyUseCase};
