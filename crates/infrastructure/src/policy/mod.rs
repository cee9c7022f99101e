pub mod inventory;
pub mod store;

pub use inventory::{FilePolicySource, Inventory};
pub use store::ArcSwapPolicyStore;
