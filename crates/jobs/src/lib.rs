pub mod policy_refresh;
pub mod runner;

pub use policy_refresh::PolicyRefreshJob;
pub use runner::JobRunner;
