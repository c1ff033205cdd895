pub mod access;
pub mod findings;
pub mod protection;

pub use access::partition;
pub use findings::aggregate;
pub use protection::classify;

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, info};

use crate::azure::{ArmClient, PrincipalResolver, RawRoleAssignment};
use crate::errors::AzscopeError;
use crate::models::{
    AccessSummary, FindingsSummary, ProtectionSummary, RoleAssignment, SectionResult,
    SecurityReport,
};

/// Runs the three section pipelines against one subscription and merges
/// their outcomes. Sections fetch and collect independently; a failure in
/// one never disturbs the others.
pub struct SubscriptionAnalyzer {
    arm: ArmClient,
    resolver: Arc<dyn PrincipalResolver>,
    privileged_roles: HashSet<String>,
}

impl SubscriptionAnalyzer {
    pub fn new(
        arm: ArmClient,
        resolver: Arc<dyn PrincipalResolver>,
        privileged_roles: HashSet<String>,
    ) -> Self {
        Self {
            arm,
            resolver,
            privileged_roles,
        }
    }

    pub async fn analyze(&self, subscription_id: &str) -> SecurityReport {
        info!(subscription = %subscription_id, "Starting security analysis");
        let (protection, findings, access) = tokio::join!(
            self.protection_section(subscription_id),
            self.findings_section(subscription_id),
            self.access_section(subscription_id),
        );
        let report = build_report(protection, findings, access);
        info!(
            subscription = %subscription_id,
            completed = report.completed_count(),
            "Analysis finished"
        );
        report
    }

    async fn protection_section(
        &self,
        subscription_id: &str,
    ) -> SectionResult<ProtectionSummary> {
        self.arm
            .pricing_tiers(subscription_id)
            .await
            .map(|records| classify(&records))
            .into()
    }

    async fn findings_section(&self, subscription_id: &str) -> SectionResult<FindingsSummary> {
        self.arm
            .security_findings(subscription_id)
            .await
            .map(|rows| aggregate(&rows))
            .into()
    }

    async fn access_section(&self, subscription_id: &str) -> SectionResult<AccessSummary> {
        self.fetch_assignments(subscription_id)
            .await
            .map(|assignments| partition(&assignments, &self.privileged_roles))
            .into()
    }

    async fn fetch_assignments(
        &self,
        subscription_id: &str,
    ) -> Result<Vec<RoleAssignment>, AzscopeError> {
        let raw = self.arm.role_assignments(subscription_id).await?;
        let definitions = self.arm.role_definitions(subscription_id).await?;
        debug!(
            assignments = raw.len(),
            definitions = definitions.len(),
            "Fetched role assignment data"
        );
        Ok(assemble_assignments(raw, &definitions, self.resolver.as_ref()).await)
    }
}

/// Joins raw assignments with the definition-guid map and the resolved
/// principals. An unmapped definition guid stays visible as the role name;
/// an unresolved principal keeps the Unknown sentinel.
pub async fn assemble_assignments(
    raw: Vec<RawRoleAssignment>,
    definitions: &HashMap<String, String>,
    resolver: &dyn PrincipalResolver,
) -> Vec<RoleAssignment> {
    let principal_ids: Vec<String> = raw
        .iter()
        .map(|assignment| assignment.properties.principal_id.clone())
        .collect();
    let resolved = resolver.resolve_principals(&principal_ids).await;

    raw.into_iter()
        .map(|assignment| {
            let definition_id = assignment.properties.role_definition_id;
            let guid = definition_id.rsplit('/').next().unwrap_or("");
            let role_name = definitions
                .get(guid)
                .cloned()
                .unwrap_or_else(|| guid.to_string());
            match resolved.get(&assignment.properties.principal_id) {
                Some((name, principal_type)) => RoleAssignment::new(
                    assignment.properties.principal_id,
                    name.clone(),
                    *principal_type,
                    role_name,
                ),
                None => RoleAssignment::unresolved(assignment.properties.principal_id, role_name),
            }
        })
        .collect()
}

/// Merges the three section outcomes into the report. Pass-through only:
/// failures arrive already wrapped and stay as-is, and all three sections
/// are always present in render order.
pub fn build_report(
    protection: SectionResult<ProtectionSummary>,
    findings: SectionResult<FindingsSummary>,
    access: SectionResult<AccessSummary>,
) -> SecurityReport {
    SecurityReport {
        protection,
        findings,
        access,
    }
}
