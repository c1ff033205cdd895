use std::collections::HashMap;
use std::sync::Arc;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::auth::{Authenticator, ARM_SCOPE};
use crate::errors::AzscopeError;
use crate::models::{Finding, PricingTier, ServiceTierRecord, Severity, Subscription};

pub const ARM_BASE: &str = "https://management.azure.com";

// API versions are carried verbatim; nothing validates them.
pub const SUBSCRIPTIONS_API_VERSION: &str = "2020-01-01";
pub const PRICINGS_API_VERSION: &str = "2023-01-01";
pub const AUTHORIZATION_API_VERSION: &str = "2022-04-01";
pub const RESOURCE_GRAPH_API_VERSION: &str = "2021-03-01";

/// Resource Graph query for assessments in the Unhealthy state.
const ASSESSMENTS_QUERY: &str = r#"securityresources
| where type =~ "microsoft.security/assessments" and properties.status.code =~ "Unhealthy"
| extend severity = tostring(properties.metadata.severity)
| extend resourceId = tostring(properties.resourceDetails.Id)
| project displayName = properties.displayName, severity, resourceId"#;

const UNNAMED_RECOMMENDATION: &str = "Unnamed Recommendation";

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct ListEnvelope<T> {
    #[serde(default)]
    value: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct PricingResource {
    name: String,
    properties: PricingProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PricingProperties {
    pricing_tier: String,
}

/// A role assignment as returned by the Authorization API, before the
/// definition guid and principal id are resolved.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRoleAssignment {
    pub properties: RoleAssignmentProperties,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignmentProperties {
    pub principal_id: String,
    pub role_definition_id: String,
}

#[derive(Debug, Deserialize)]
struct RoleDefinitionResource {
    name: String,
    properties: RoleDefinitionProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoleDefinitionProperties {
    role_name: String,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    data: Vec<AssessmentRow>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssessmentRow {
    display_name: Option<String>,
    #[serde(default)]
    severity: String,
    #[serde(default)]
    resource_id: String,
}

/// Typed client for the Azure Resource Manager plane.
#[derive(Clone)]
pub struct ArmClient {
    client: Client,
    auth: Arc<Authenticator>,
}

impl ArmClient {
    pub fn new(client: Client, auth: Arc<Authenticator>) -> Self {
        Self { client, auth }
    }

    pub async fn list_subscriptions(&self) -> Result<Vec<Subscription>, AzscopeError> {
        let url = format!(
            "{}/subscriptions?api-version={}",
            ARM_BASE, SUBSCRIPTIONS_API_VERSION
        );
        let envelope: ListEnvelope<Subscription> = self.get_json(&url, "Subscription list").await?;
        Ok(envelope.value)
    }

    /// Defender for Cloud pricing records, one per service.
    pub async fn pricing_tiers(
        &self,
        subscription_id: &str,
    ) -> Result<Vec<ServiceTierRecord>, AzscopeError> {
        let url = format!(
            "{}/subscriptions/{}/providers/Microsoft.Security/pricings?api-version={}",
            ARM_BASE, subscription_id, PRICINGS_API_VERSION
        );
        let envelope: ListEnvelope<PricingResource> =
            self.get_json(&url, "Defender pricing").await?;
        Ok(envelope
            .value
            .into_iter()
            .map(|service| {
                ServiceTierRecord::new(
                    service.name,
                    PricingTier::from_raw(&service.properties.pricing_tier),
                )
            })
            .collect())
    }

    /// Unhealthy-assessment findings via Resource Graph. Rows without a
    /// recognizable severity are dropped here; missing display names fall
    /// back to a placeholder.
    pub async fn security_findings(
        &self,
        subscription_id: &str,
    ) -> Result<Vec<Finding>, AzscopeError> {
        let token = self.auth.token(ARM_SCOPE).await?;
        let url = format!(
            "{}/providers/Microsoft.ResourceGraph/resources?api-version={}",
            ARM_BASE, RESOURCE_GRAPH_API_VERSION
        );
        let body = json!({
            "subscriptions": [subscription_id],
            "query": ASSESSMENTS_QUERY,
        });

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await
            .map_err(|e| AzscopeError::Network(format!("Resource Graph request failed: {}", e)))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            return Err(AzscopeError::Api(format!(
                "Resource Graph query returned {}: {}",
                status, detail
            )));
        }

        let parsed: QueryResponse = resp
            .json()
            .await
            .map_err(|e| AzscopeError::Api(format!("Malformed Resource Graph response: {}", e)))?;

        let mut findings = Vec::with_capacity(parsed.data.len());
        for row in parsed.data {
            let Some(severity) = Severity::parse(&row.severity) else {
                debug!(severity = %row.severity, "Dropping assessment with unrecognized severity");
                continue;
            };
            let name = row
                .display_name
                .unwrap_or_else(|| UNNAMED_RECOMMENDATION.to_string());
            findings.push(Finding::new(name, severity, row.resource_id));
        }
        Ok(findings)
    }

    pub async fn role_assignments(
        &self,
        subscription_id: &str,
    ) -> Result<Vec<RawRoleAssignment>, AzscopeError> {
        let url = format!(
            "{}/subscriptions/{}/providers/Microsoft.Authorization/roleAssignments?api-version={}",
            ARM_BASE, subscription_id, AUTHORIZATION_API_VERSION
        );
        let envelope: ListEnvelope<RawRoleAssignment> =
            self.get_json(&url, "Role assignments").await?;
        Ok(envelope.value)
    }

    /// Role definition guid to display-name map for one subscription.
    pub async fn role_definitions(
        &self,
        subscription_id: &str,
    ) -> Result<HashMap<String, String>, AzscopeError> {
        let url = format!(
            "{}/subscriptions/{}/providers/Microsoft.Authorization/roleDefinitions?api-version={}",
            ARM_BASE, subscription_id, AUTHORIZATION_API_VERSION
        );
        let envelope: ListEnvelope<RoleDefinitionResource> =
            self.get_json(&url, "Role definitions").await?;
        Ok(envelope
            .value
            .into_iter()
            .map(|def| (def.name, def.properties.role_name))
            .collect())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        context: &str,
    ) -> Result<T, AzscopeError> {
        let token = self.auth.token(ARM_SCOPE).await?;
        let resp = self
            .client
            .get(url)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| AzscopeError::Network(format!("{} request failed: {}", context, e)))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            return Err(AzscopeError::Api(format!(
                "{} returned {}: {}",
                context, status, detail
            )));
        }

        resp.json::<T>()
            .await
            .map_err(|e| AzscopeError::Api(format!("Malformed {} response: {}", context, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_envelope_shape() {
        let raw = r#"{
            "value": [
                {"id": "/subscriptions/s1/providers/Microsoft.Security/pricings/VirtualMachines",
                 "name": "VirtualMachines",
                 "properties": {"pricingTier": "Standard"}},
                {"name": "KeyVaults", "properties": {"pricingTier": "Free"}}
            ]
        }"#;
        let envelope: ListEnvelope<PricingResource> = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.value.len(), 2);
        assert_eq!(envelope.value[0].name, "VirtualMachines");
        assert_eq!(envelope.value[0].properties.pricing_tier, "Standard");
    }

    #[test]
    fn test_empty_envelope_defaults() {
        let envelope: ListEnvelope<PricingResource> = serde_json::from_str("{}").unwrap();
        assert!(envelope.value.is_empty());
    }

    #[test]
    fn test_role_assignment_shape() {
        let raw = r#"{
            "value": [
                {"name": "a1",
                 "properties": {
                    "principalId": "p-1",
                    "principalType": "User",
                    "roleDefinitionId": "/subscriptions/s1/providers/Microsoft.Authorization/roleDefinitions/guid-owner"
                 }}
            ]
        }"#;
        let envelope: ListEnvelope<RawRoleAssignment> = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.value[0].properties.principal_id, "p-1");
        assert!(envelope.value[0]
            .properties
            .role_definition_id
            .ends_with("guid-owner"));
    }

    #[test]
    fn test_role_definition_shape() {
        let raw = r#"{
            "value": [
                {"name": "guid-owner", "properties": {"roleName": "Owner", "type": "BuiltInRole"}}
            ]
        }"#;
        let envelope: ListEnvelope<RoleDefinitionResource> = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.value[0].name, "guid-owner");
        assert_eq!(envelope.value[0].properties.role_name, "Owner");
    }

    #[test]
    fn test_query_response_rows() {
        let raw = r#"{
            "totalRecords": 2,
            "data": [
                {"displayName": "SQL injection risk", "severity": "High", "resourceId": "/r1"},
                {"displayName": null, "severity": "Low", "resourceId": "/r2"}
            ]
        }"#;
        let parsed: QueryResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.data.len(), 2);
        assert_eq!(parsed.data[0].display_name.as_deref(), Some("SQL injection risk"));
        assert!(parsed.data[1].display_name.is_none());
        assert_eq!(parsed.data[1].severity, "Low");
    }

    #[test]
    fn test_assessments_query_targets_unhealthy() {
        assert!(ASSESSMENTS_QUERY.contains("microsoft.security/assessments"));
        assert!(ASSESSMENTS_QUERY.contains("Unhealthy"));
        assert!(ASSESSMENTS_QUERY.contains("project displayName"));
    }
}
