use serde::Serialize;

use crate::models::{SecurityReport, Subscription};

/// JSON envelope for one analysis run, stamped with a fresh id and
/// timestamp.
#[derive(Debug, Serialize)]
pub struct AnalysisDocument {
    pub analysis_id: String,
    pub generated_at: String,
    pub tool_version: &'static str,
    pub subscription: Subscription,
    pub report: SecurityReport,
}

impl AnalysisDocument {
    pub fn new(subscription: Subscription, report: SecurityReport) -> Self {
        Self {
            analysis_id: uuid::Uuid::new_v4().to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            tool_version: env!("CARGO_PKG_VERSION"),
            subscription,
            report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccessSummary, ProtectionSummary, SectionResult};

    #[test]
    fn test_document_serializes_sections_tagged() {
        let subscription = Subscription {
            id: "s-1".to_string(),
            display_name: "Production".to_string(),
            tags: Default::default(),
        };
        let report = SecurityReport {
            protection: SectionResult::Completed(ProtectionSummary::default()),
            findings: SectionResult::Failed("throttled".to_string()),
            access: SectionResult::Completed(AccessSummary::default()),
        };
        let document = AnalysisDocument::new(subscription, report);
        let json = serde_json::to_value(&document).unwrap();

        assert_eq!(json["subscription"]["subscriptionId"], "s-1");
        assert_eq!(json["report"]["protection"]["status"], "Completed");
        assert_eq!(json["report"]["findings"]["status"], "Failed");
        assert_eq!(json["report"]["findings"]["details"], "throttled");
        assert!(json["analysis_id"].as_str().unwrap().len() >= 32);
        assert!(json["generated_at"].as_str().unwrap().contains('T'));
    }
}
