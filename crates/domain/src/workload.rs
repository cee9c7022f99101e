use serde::{Deserialize, Serialize};

/// A schedulable unit (pod) that may be granted egress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    pub name: String,

    pub namespace: String,

    /// Node the workload is scheduled on.
    #[serde(default)]
    pub node: Option<String>,

    /// Primary IP; absent while the workload is still pending.
    #[serde(default)]
    pub ip: Option<String>,

    #[serde(default)]
    pub host_network: bool,
}

impl Workload {
    pub fn new(name: &str, namespace: &str, ip: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            namespace: namespace.to_string(),
            node: None,
            ip: ip.map(str::to_string),
            host_network: false,
        }
    }

    pub fn on_node(mut self, node: &str) -> Self {
        self.node = Some(node.to_string());
        self
    }

    pub fn with_host_network(mut self) -> Self {
        self.host_network = true;
        self
    }

    pub fn runs_on(&self, node: &str) -> bool {
        self.node.as_deref() == Some(node)
    }
}
