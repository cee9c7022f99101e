pub mod ovs;

pub use ovs::OvsFlowInstaller;
