use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EgressRuleAction {
    Allow,
    Deny,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EgressTarget {
    #[serde(default)]
    pub dns_name: Option<String>,

    #[serde(default)]
    pub cidr_selector: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EgressRule {
    #[serde(rename = "type")]
    pub action: EgressRuleAction,

    #[serde(default)]
    pub to: EgressTarget,
}

impl EgressRule {
    pub fn allow_dns(dns_name: &str) -> Self {
        Self {
            action: EgressRuleAction::Allow,
            to: EgressTarget {
                dns_name: Some(dns_name.to_string()),
                cidr_selector: None,
            },
        }
    }

    pub fn deny_dns(dns_name: &str) -> Self {
        Self {
            action: EgressRuleAction::Deny,
            to: EgressTarget {
                dns_name: Some(dns_name.to_string()),
                cidr_selector: None,
            },
        }
    }

    /// The DNS name this rule allows, if it is an allow rule with a usable name.
    pub fn allowed_dns_name(&self) -> Option<&str> {
        if self.action != EgressRuleAction::Allow {
            return None;
        }
        self.to
            .dns_name
            .as_deref()
            .filter(|name| name.len() >= crate::resolution::MIN_NAME_LEN)
    }
}

/// Namespace-scoped egress policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EgressFirewall {
    pub namespace: String,

    #[serde(default)]
    pub rules: Vec<EgressRule>,
}

impl EgressFirewall {
    pub fn new(namespace: &str, rules: Vec<EgressRule>) -> Self {
        Self {
            namespace: namespace.to_string(),
            rules,
        }
    }
}
