use serde::{Deserialize, Serialize};

/// Severity of an unhealthy-resource assessment, ordered from most to least
/// severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Rendering and bucket-iteration order.
    pub const ALL: [Severity; 3] = [Severity::High, Severity::Medium, Severity::Low];

    /// Case-insensitive parse of the severity string carried by an
    /// assessment row. Values outside the known set yield None and the
    /// carrying row is dropped by the collector.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single unhealthy-resource assessment: one row per (assessment,
/// resource) pair, so several findings may share a display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub display_name: String,
    pub severity: Severity,
    pub resource_id: String,
}

impl Finding {
    pub fn new(
        display_name: impl Into<String>,
        severity: Severity,
        resource_id: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            severity,
            resource_id: resource_id.into(),
        }
    }
}

/// Findings with the same display name within one severity, collapsed into
/// a single entry with the number of affected resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingGroup {
    pub display_name: String,
    pub severity: Severity,
    pub resource_count: usize,
}

impl FindingGroup {
    /// Display form: the bare name when a single resource is affected,
    /// "name (N resources)" otherwise.
    pub fn display(&self) -> String {
        if self.resource_count > 1 {
            format!("{} ({} resources)", self.display_name, self.resource_count)
        } else {
            self.display_name.clone()
        }
    }
}

/// One severity's slice of the findings section. `total` counts raw
/// findings; `groups` is the deduplicated list shown to the reader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityBucket {
    pub total: usize,
    pub groups: Vec<FindingGroup>,
}

/// The findings section: one bucket per severity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingsSummary {
    pub high: SeverityBucket,
    pub medium: SeverityBucket,
    pub low: SeverityBucket,
}

impl FindingsSummary {
    pub fn bucket(&self, severity: Severity) -> &SeverityBucket {
        match severity {
            Severity::High => &self.high,
            Severity::Medium => &self.medium,
            Severity::Low => &self.low,
        }
    }

    pub(crate) fn bucket_mut(&mut self, severity: Severity) -> &mut SeverityBucket {
        match severity {
            Severity::High => &mut self.high,
            Severity::Medium => &mut self.medium,
            Severity::Low => &mut self.low,
        }
    }

    /// Raw findings across all severities.
    pub fn total(&self) -> usize {
        self.high.total + self.medium.total + self.low.total
    }
}
