use std::collections::HashMap;
use std::time::{Duration, Instant};

use reqwest::Client;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::debug;

use crate::config::{redact_secrets, AzureCredentials};
use crate::errors::AzscopeError;

/// Scope for Azure Resource Manager calls.
pub const ARM_SCOPE: &str = "https://management.azure.com/.default";
/// Scope for Microsoft Graph directory lookups.
pub const GRAPH_SCOPE: &str = "https://graph.microsoft.com/.default";

const LOGIN_BASE: &str = "https://login.microsoftonline.com";

// Refresh tokens this long before they actually expire.
const REFRESH_SKEW: Duration = Duration::from_secs(300);

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

struct CachedToken {
    token: String,
    expires_at: Instant,
}

/// Client-credentials token provider for the service principal. Tokens are
/// cached per scope and shared across the concurrent section tasks.
pub struct Authenticator {
    client: Client,
    credentials: AzureCredentials,
    cache: Mutex<HashMap<String, CachedToken>>,
}

impl Authenticator {
    pub fn new(client: Client, credentials: AzureCredentials) -> Self {
        Self {
            client,
            credentials,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn tenant_id(&self) -> &str {
        &self.credentials.tenant_id
    }

    /// Returns a bearer token for the given scope, reusing the cached one
    /// while it has more than the refresh skew left.
    pub async fn token(&self, scope: &str) -> Result<String, AzscopeError> {
        {
            let cache = self.cache.lock().await;
            if let Some(cached) = cache.get(scope) {
                if Instant::now() + REFRESH_SKEW < cached.expires_at {
                    return Ok(cached.token.clone());
                }
            }
        }

        let token = self.request_token(scope).await?;
        let expires_at = Instant::now() + Duration::from_secs(token.expires_in);
        debug!(scope = %scope, expires_in = token.expires_in, "Acquired access token");

        let mut cache = self.cache.lock().await;
        cache.insert(
            scope.to_string(),
            CachedToken {
                token: token.access_token.clone(),
                expires_at,
            },
        );
        Ok(token.access_token)
    }

    async fn request_token(&self, scope: &str) -> Result<TokenResponse, AzscopeError> {
        let url = format!(
            "{}/{}/oauth2/v2.0/token",
            LOGIN_BASE, self.credentials.tenant_id
        );
        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("scope", scope),
        ];

        let resp = self
            .client
            .post(&url)
            .form(&params)
            .send()
            .await
            .map_err(|e| AzscopeError::Network(format!("Token request failed: {}", e)))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let body = redact_secrets(&body, &[self.credentials.client_secret.as_str()]);
            return Err(AzscopeError::Authentication(format!(
                "Token request for scope {} returned {}: {}",
                scope, status, body
            )));
        }

        resp.json::<TokenResponse>()
            .await
            .map_err(|e| AzscopeError::Authentication(format!("Malformed token response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_shape() {
        let raw = r#"{"token_type": "Bearer", "expires_in": 3599, "access_token": "eyJ0eXAi"}"#;
        let parsed: TokenResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.access_token, "eyJ0eXAi");
        assert_eq!(parsed.expires_in, 3599);
    }

    #[test]
    fn test_scopes_cover_both_planes() {
        assert!(ARM_SCOPE.starts_with("https://management.azure.com/"));
        assert!(GRAPH_SCOPE.starts_with("https://graph.microsoft.com/"));
        assert_ne!(ARM_SCOPE, GRAPH_SCOPE);
    }
}
