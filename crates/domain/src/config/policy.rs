use serde::{Deserialize, Serialize};

/// How many authorized sources a single resolution admits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdmissionMode {
    /// First valid source of the best matching entry; at most one flow per resolution.
    #[default]
    FirstSource,
    /// Every valid source of the best matching entry.
    AllSources,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PolicyConfig {
    #[serde(default = "default_inventory_path")]
    pub inventory_path: String,

    /// Restrict workloads to this node. `None` takes every workload.
    #[serde(default)]
    pub node: Option<String>,

    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,

    #[serde(default)]
    pub admission_mode: AdmissionMode,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            inventory_path: default_inventory_path(),
            node: None,
            refresh_interval_secs: default_refresh_interval_secs(),
            admission_mode: AdmissionMode::default(),
        }
    }
}

fn default_inventory_path() -> String {
    "/etc/dnsflow/inventory.json".to_string()
}

fn default_refresh_interval_secs() -> u64 {
    10
}
