use std::collections::BTreeMap;

use crate::models::{Finding, FindingGroup, FindingsSummary, Severity};

/// Aggregates raw assessment findings into per-severity buckets: totals
/// count raw rows, groups collapse rows sharing a display name. Group lists
/// come out sorted by display name.
pub fn aggregate(findings: &[Finding]) -> FindingsSummary {
    let mut summary = FindingsSummary::default();
    let mut grouped: BTreeMap<(Severity, String), usize> = BTreeMap::new();

    for finding in findings {
        let name = normalize_display_name(&finding.display_name);
        summary.bucket_mut(finding.severity).total += 1;
        *grouped.entry((finding.severity, name)).or_insert(0) += 1;
    }

    for severity in Severity::ALL {
        let bucket = summary.bucket_mut(severity);
        bucket.groups = grouped
            .iter()
            .filter(|((sev, _), _)| *sev == severity)
            .map(|((_, name), count)| FindingGroup {
                display_name: name.clone(),
                severity,
                resource_count: *count,
            })
            .collect();
    }

    summary
}

/// Strips one trailing "(N resources)" annotation so names that already
/// carry a rendered count re-aggregate cleanly.
pub fn normalize_display_name(raw: &str) -> String {
    let re = regex::Regex::new(r"\s*\(\d+ resources\)\s*$").unwrap();
    re.replace(raw, "").trim().to_string()
}
