use crate::models::{ProtectionSummary, ServiceTierRecord};

/// Partitions Defender pricing records into protected (Standard tier) and
/// unprotected service lists. Total over any input; empty input yields two
/// empty lists.
pub fn classify(records: &[ServiceTierRecord]) -> ProtectionSummary {
    let mut summary = ProtectionSummary::default();
    for record in records {
        if record.tier.is_standard() {
            summary.protected.push(record.name.clone());
        } else {
            summary.unprotected.push(record.name.clone());
        }
    }
    summary.protected.sort();
    summary.unprotected.sort();
    summary
}
