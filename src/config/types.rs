use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Role names treated as privileged when no override is configured.
pub fn default_privileged_roles() -> HashSet<String> {
    [
        "Owner",
        "Contributor",
        "Access Review Operator Service Role",
        "Role Based Access Control Administrator",
        "User Access Administrator",
    ]
    .iter()
    .map(|r| r.to_string())
    .collect()
}

/// Shape of the optional YAML config file. Every field is optional; the
/// environment fills whatever the file leaves out.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AzscopeConfig {
    pub credentials: Option<CredentialsConfig>,
    pub privileged_roles: Option<Vec<String>>,
}

/// Service-principal credentials as written in the config file. Values may
/// use `$VAR` indirection to pull the real secret from the environment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CredentialsConfig {
    pub tenant_id: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

/// Fully resolved service-principal credentials. The secret is kept out of
/// Debug output.
#[derive(Clone)]
pub struct AzureCredentials {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
}

impl std::fmt::Debug for AzureCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureCredentials")
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

/// Runtime settings after merging the config file and the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub credentials: AzureCredentials,
    pub privileged_roles: HashSet<String>,
}
