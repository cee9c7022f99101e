mod flow_installer;
mod policy_source;
mod policy_store;

pub use flow_installer::FlowInstaller;
pub use policy_source::PolicySource;
pub use policy_store::PolicyStore;
