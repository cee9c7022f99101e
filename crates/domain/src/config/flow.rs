use serde::{Deserialize, Serialize};

/// Switch pipeline constants for installed admission flows.
///
/// These must line up with the integration bridge's table layout or the
/// installed rules never match.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FlowConfig {
    #[serde(default = "default_ofctl_path")]
    pub ofctl_path: String,

    #[serde(default = "default_bridge")]
    pub bridge: String,

    #[serde(default = "default_table")]
    pub table: u8,

    #[serde(default = "default_cookie")]
    pub cookie: u64,

    #[serde(default = "default_priority")]
    pub priority: u16,

    /// Register holding the logical ingress port.
    #[serde(default = "default_ingress_register")]
    pub ingress_register: u8,

    #[serde(default = "default_ingress_register_value")]
    pub ingress_register_value: u32,

    #[serde(default = "default_resubmit_table")]
    pub resubmit_table: u8,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            ofctl_path: default_ofctl_path(),
            bridge: default_bridge(),
            table: default_table(),
            cookie: default_cookie(),
            priority: default_priority(),
            ingress_register: default_ingress_register(),
            ingress_register_value: default_ingress_register_value(),
            resubmit_table: default_resubmit_table(),
        }
    }
}

fn default_ofctl_path() -> String {
    "ovs-ofctl".to_string()
}

fn default_bridge() -> String {
    "br-int".to_string()
}

fn default_table() -> u8 {
    44
}

fn default_cookie() -> u64 {
    0xba5ed
}

fn default_priority() -> u16 {
    11000
}

fn default_ingress_register() -> u8 {
    14
}

fn default_ingress_register_value() -> u32 {
    0x1
}

fn default_resubmit_table() -> u8 {
    45
}
