pub mod dnstap;
pub mod errors;
pub mod flow;
pub mod logging;
pub mod policy;
pub mod root;

pub use dnstap::DnstapConfig;
pub use errors::ConfigError;
pub use flow::FlowConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use policy::{AdmissionMode, PolicyConfig};
pub use root::{CliOverrides, Config};
