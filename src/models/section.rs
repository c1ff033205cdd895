use serde::{Deserialize, Serialize};

use crate::models::access::AccessSummary;
use crate::models::findings::FindingsSummary;
use crate::models::protection::ProtectionSummary;

/// The three report sections, in the order they are always rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionKind {
    Protection,
    Findings,
    Access,
}

impl SectionKind {
    pub const ORDER: [SectionKind; 3] = [
        SectionKind::Protection,
        SectionKind::Findings,
        SectionKind::Access,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Protection => "Microsoft Defender Status",
            Self::Findings => "Security Recommendations",
            Self::Access => "RBAC Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Protection => "🛡️",
            Self::Findings => "🔒",
            Self::Access => "👥",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Protection => {
                "Microsoft Defender for Cloud provides unified security management and threat protection across your Azure workloads."
            }
            Self::Findings => {
                "Security recommendations based on Defender for Cloud assessment of your resources and security controls."
            }
            Self::Access => {
                "Review of Role-Based Access Control (RBAC) assignments that determine who has access to your Azure resources."
            }
        }
    }
}

/// Outcome of one section's collection run. A failed upstream fetch carries
/// its message through verbatim; it never aborts the other sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "details")]
pub enum SectionResult<T> {
    Completed(T),
    Failed(String),
}

impl<T> SectionResult<T> {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    pub fn as_completed(&self) -> Option<&T> {
        match self {
            Self::Completed(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Completed(_) => None,
            Self::Failed(message) => Some(message),
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for SectionResult<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Completed(value),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

/// Full inspection result for one subscription. Sections are declared in
/// render order: protection, findings, access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityReport {
    pub protection: SectionResult<ProtectionSummary>,
    pub findings: SectionResult<FindingsSummary>,
    pub access: SectionResult<AccessSummary>,
}

impl SecurityReport {
    pub fn completed_count(&self) -> usize {
        [
            self.protection.is_completed(),
            self.findings.is_completed(),
            self.access.is_completed(),
        ]
        .iter()
        .filter(|ok| **ok)
        .count()
    }

    /// Kinds of the sections whose collection failed, in render order.
    pub fn failed_sections(&self) -> Vec<SectionKind> {
        let mut failed = Vec::new();
        if !self.protection.is_completed() {
            failed.push(SectionKind::Protection);
        }
        if !self.findings.is_completed() {
            failed.push(SectionKind::Findings);
        }
        if !self.access.is_completed() {
            failed.push(SectionKind::Access);
        }
        failed
    }
}
