pub mod graph;
pub mod management;

pub use graph::{GraphClient, PrincipalResolver, ResolvedPrincipal};
pub use management::{ArmClient, RawRoleAssignment};

use std::time::Duration;

use crate::errors::AzscopeError;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared HTTP client for the token endpoint and both API planes.
pub fn http_client() -> Result<reqwest::Client, AzscopeError> {
    reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(|e| AzscopeError::Internal(format!("Failed to build HTTP client: {}", e)))
}
