use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::auth::{Authenticator, GRAPH_SCOPE};
use crate::models::PrincipalType;

pub const GRAPH_BASE: &str = "https://graph.microsoft.com/v1.0";

/// Display name and type of a resolved directory object.
pub type ResolvedPrincipal = (String, PrincipalType);

/// Directory lookup behind the access section. Total: ids that cannot be
/// resolved come back as the Unknown sentinel, never as an error.
#[async_trait]
pub trait PrincipalResolver: Send + Sync {
    async fn resolve_principals(
        &self,
        principal_ids: &[String],
    ) -> HashMap<String, ResolvedPrincipal>;
}

#[derive(Debug, Deserialize)]
struct DirectoryObject {
    #[serde(rename = "@odata.type", default)]
    odata_type: String,
    #[serde(rename = "displayName")]
    display_name: Option<String>,
}

/// Microsoft Graph client resolving principal ids to directory objects.
pub struct GraphClient {
    client: Client,
    auth: Arc<Authenticator>,
}

impl GraphClient {
    pub fn new(client: Client, auth: Arc<Authenticator>) -> Self {
        Self { client, auth }
    }

    async fn lookup(&self, token: &str, principal_id: &str) -> ResolvedPrincipal {
        let url = format!("{}/directoryObjects/{}", GRAPH_BASE, principal_id);
        let resp = match self.client.get(&url).bearer_auth(token).send().await {
            Ok(resp) => resp,
            Err(e) => {
                debug!(principal = %principal_id, error = %e, "Directory lookup failed");
                return unknown(principal_id);
            }
        };

        if !resp.status().is_success() {
            debug!(principal = %principal_id, status = %resp.status(), "Directory object not found");
            return unknown(principal_id);
        }

        match resp.json::<DirectoryObject>().await {
            Ok(object) => {
                let name = object
                    .display_name
                    .unwrap_or_else(|| principal_id.to_string());
                (name, PrincipalType::from_odata(&object.odata_type))
            }
            Err(e) => {
                debug!(principal = %principal_id, error = %e, "Malformed directory object");
                unknown(principal_id)
            }
        }
    }
}

#[async_trait]
impl PrincipalResolver for GraphClient {
    /// Resolves each distinct id concurrently. When no Graph token can be
    /// acquired at all, resolution degrades to all-Unknown instead of
    /// failing the section.
    async fn resolve_principals(
        &self,
        principal_ids: &[String],
    ) -> HashMap<String, ResolvedPrincipal> {
        let distinct: HashSet<&String> = principal_ids.iter().collect();

        let token = match self.auth.token(GRAPH_SCOPE).await {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "Graph token unavailable, principals will show as Unknown");
                return distinct
                    .into_iter()
                    .map(|id| (id.clone(), unknown(id)))
                    .collect();
            }
        };

        let lookups = distinct.into_iter().map(|id| {
            let id = id.clone();
            let token = token.clone();
            async move {
                let resolved = self.lookup(&token, &id).await;
                (id, resolved)
            }
        });
        join_all(lookups).await.into_iter().collect()
    }
}

fn unknown(principal_id: &str) -> ResolvedPrincipal {
    (principal_id.to_string(), PrincipalType::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_object_shape() {
        let raw = r##"{
            "@odata.type": "#microsoft.graph.user",
            "id": "p-1",
            "displayName": "Alice Jones"
        }"##;
        let object: DirectoryObject = serde_json::from_str(raw).unwrap();
        assert_eq!(object.display_name.as_deref(), Some("Alice Jones"));
        assert_eq!(
            PrincipalType::from_odata(&object.odata_type),
            PrincipalType::User
        );
    }

    #[test]
    fn test_directory_object_without_name() {
        let raw = r##"{"@odata.type": "#microsoft.graph.servicePrincipal"}"##;
        let object: DirectoryObject = serde_json::from_str(raw).unwrap();
        assert!(object.display_name.is_none());
        assert_eq!(
            PrincipalType::from_odata(&object.odata_type),
            PrincipalType::ServicePrincipal
        );
    }
}
