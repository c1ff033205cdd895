use std::path::PathBuf;

use tempfile::TempDir;

use azscope::config::{self, default_privileged_roles};
use azscope::errors::AzscopeError;

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("azscope.yaml");
    std::fs::write(&path, contents).unwrap();
    path
}

#[tokio::test]
async fn test_load_settings_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
credentials:
  tenant_id: tenant-from-file
  client_id: client-from-file
  client_secret: secret-from-file
"#,
    );

    let settings = config::load_settings(Some(&path)).await.unwrap();
    assert_eq!(settings.credentials.tenant_id, "tenant-from-file");
    assert_eq!(settings.credentials.client_id, "client-from-file");
    assert_eq!(settings.credentials.client_secret, "secret-from-file");
    assert_eq!(settings.privileged_roles, default_privileged_roles());
}

#[tokio::test]
async fn test_load_settings_env_indirection() {
    std::env::set_var("AZSCOPE_IT_SECRET", "resolved-secret");
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
credentials:
  tenant_id: t-1
  client_id: c-1
  client_secret: $AZSCOPE_IT_SECRET
"#,
    );

    let settings = config::load_settings(Some(&path)).await.unwrap();
    assert_eq!(settings.credentials.client_secret, "resolved-secret");
    std::env::remove_var("AZSCOPE_IT_SECRET");
}

#[tokio::test]
async fn test_load_settings_unresolved_indirection_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
credentials:
  tenant_id: t-1
  client_id: c-1
  client_secret: $AZSCOPE_IT_NEVER_SET
"#,
    );

    let err = config::load_settings(Some(&path)).await.unwrap_err();
    assert!(matches!(err, AzscopeError::Config(_)));
    assert!(err.to_string().contains("client_secret"));
}

#[tokio::test]
async fn test_privileged_roles_override() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
credentials:
  tenant_id: t-1
  client_id: c-1
  client_secret: s-1
privileged_roles:
  - Owner
  - Backup Operator
"#,
    );

    let settings = config::load_settings(Some(&path)).await.unwrap();
    assert_eq!(settings.privileged_roles.len(), 2);
    assert!(settings.privileged_roles.contains("Owner"));
    assert!(settings.privileged_roles.contains("Backup Operator"));
    assert!(!settings.privileged_roles.contains("Contributor"));
}

#[tokio::test]
async fn test_privileged_roles_empty_override_disables_partition() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
credentials:
  tenant_id: t-1
  client_id: c-1
  client_secret: s-1
privileged_roles: []
"#,
    );

    let settings = config::load_settings(Some(&path)).await.unwrap();
    assert!(settings.privileged_roles.is_empty());
}

#[tokio::test]
async fn test_missing_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nonexistent.yaml");

    let err = config::load_settings(Some(&path)).await.unwrap_err();
    assert!(matches!(err, AzscopeError::Config(_)));
    assert!(err.to_string().contains("not found"));
}

#[tokio::test]
async fn test_malformed_yaml_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "credentials: [not, a, mapping");

    let err = config::load_settings(Some(&path)).await.unwrap_err();
    assert!(matches!(err, AzscopeError::Yaml(_)));
}

#[test]
fn test_debug_redacts_client_secret() {
    let credentials = config::AzureCredentials {
        tenant_id: "t-1".to_string(),
        client_id: "c-1".to_string(),
        client_secret: "super-secret-value".to_string(),
    };
    let debugged = format!("{:?}", credentials);
    assert!(!debugged.contains("super-secret-value"));
    assert!(debugged.contains("[REDACTED]"));
}
