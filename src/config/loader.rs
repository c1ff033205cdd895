use std::path::Path;

use tracing::debug;

use super::credentials::resolve_credential;
use super::types::{default_privileged_roles, AzscopeConfig, AzureCredentials, Settings};
use crate::errors::AzscopeError;

pub const TENANT_ID_VAR: &str = "AZURE_TENANT_ID";
pub const CLIENT_ID_VAR: &str = "AZURE_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "AZURE_CLIENT_SECRET";

pub async fn parse_config(path: &Path) -> Result<AzscopeConfig, AzscopeError> {
    if !path.exists() {
        return Err(AzscopeError::Config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }
    let content = tokio::fs::read_to_string(path).await?;
    let config: AzscopeConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Builds the runtime settings from the optional config file and the
/// environment. File values win per field; `$VAR` values in the file pull
/// from the environment. Credentials must be complete before any network
/// call is attempted.
pub async fn load_settings(config_path: Option<&Path>) -> Result<Settings, AzscopeError> {
    let file = match config_path {
        Some(path) => {
            debug!(path = %path.display(), "Loading config file");
            parse_config(path).await?
        }
        None => AzscopeConfig::default(),
    };

    let file_creds = file.credentials.unwrap_or_default();
    let credentials = AzureCredentials {
        tenant_id: resolve_field(file_creds.tenant_id.as_deref(), TENANT_ID_VAR, "tenant_id")?,
        client_id: resolve_field(file_creds.client_id.as_deref(), CLIENT_ID_VAR, "client_id")?,
        client_secret: resolve_field(
            file_creds.client_secret.as_deref(),
            CLIENT_SECRET_VAR,
            "client_secret",
        )?,
    };

    // An explicit override replaces the default set entirely, an empty list
    // included (nothing is treated as privileged then).
    let privileged_roles = match file.privileged_roles {
        Some(roles) => roles.into_iter().collect(),
        None => default_privileged_roles(),
    };

    Ok(Settings {
        credentials,
        privileged_roles,
    })
}

fn resolve_field(
    file_value: Option<&str>,
    env_var: &str,
    field: &str,
) -> Result<String, AzscopeError> {
    let value = match file_value {
        Some(raw) => resolve_credential(raw),
        None => std::env::var(env_var).unwrap_or_default(),
    };
    if value.is_empty() || value.starts_with('$') {
        return Err(AzscopeError::Config(format!(
            "Missing credential '{field}': set {env_var} or add it to the config file"
        )));
    }
    Ok(value)
}
