use console::style;

use crate::models::{
    AccessSummary, FindingsSummary, ProtectionSummary, RoleGroup, SectionKind, SectionResult,
    SecurityReport, Severity, Subscription,
};

/// Render the full three-section report as styled terminal output.
pub fn render_report(report: &SecurityReport) -> String {
    let mut out = String::new();
    for (i, kind) in SectionKind::ORDER.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&render_section_header(*kind));
        match kind {
            SectionKind::Protection => match &report.protection {
                SectionResult::Completed(summary) => out.push_str(&render_protection(summary)),
                SectionResult::Failed(message) => out.push_str(&render_failure(message)),
            },
            SectionKind::Findings => match &report.findings {
                SectionResult::Completed(summary) => out.push_str(&render_findings(summary)),
                SectionResult::Failed(message) => out.push_str(&render_failure(message)),
            },
            SectionKind::Access => match &report.access {
                SectionResult::Completed(summary) => out.push_str(&render_access(summary)),
                SectionResult::Failed(message) => out.push_str(&render_failure(message)),
            },
        }
    }
    out
}

fn render_section_header(kind: SectionKind) -> String {
    format!(
        "{} {}\n{}\n",
        kind.icon(),
        style(kind.display_name()).white().bold(),
        style(kind.description()).dim(),
    )
}

fn render_failure(message: &str) -> String {
    format!(
        "  {} {}\n",
        style("❌ Error:").red().bold(),
        style(message).red(),
    )
}

pub fn render_protection(summary: &ProtectionSummary) -> String {
    let mut out = String::new();
    if !summary.protected.is_empty() {
        out.push_str(&format!(
            "  {}\n",
            style("✅ Protected Services").green().bold()
        ));
        for service in &summary.protected {
            out.push_str(&format!("    • {}\n", service));
        }
    }
    if !summary.unprotected.is_empty() {
        out.push_str(&format!(
            "  {}\n",
            style("❌ Unprotected Services").red().bold()
        ));
        for service in &summary.unprotected {
            out.push_str(&format!("    • {}\n", service));
        }
    }
    out
}

pub fn render_findings(summary: &FindingsSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "    🔴 High Severity Issues:   {}\n    🟡 Medium Severity Issues: {}\n    🔵 Low Severity Issues:    {}\n",
        style(summary.high.total).red().bold(),
        style(summary.medium.total).yellow().bold(),
        style(summary.low.total).blue().bold(),
    ));

    for severity in Severity::ALL {
        let bucket = summary.bucket(severity);
        if bucket.total == 0 {
            continue;
        }
        let heading = format!("{} PRIORITY FINDINGS", severity.as_str().to_uppercase());
        out.push_str(&format!("  {}\n", style(heading).white().bold()));
        for group in &bucket.groups {
            out.push_str(&format!(
                "    {} {}\n",
                severity_bullet(severity),
                group.display()
            ));
        }
    }
    out
}

fn severity_bullet(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "❗",
        Severity::Medium => "⚠️",
        Severity::Low => "ℹ️",
    }
}

pub fn render_access(summary: &AccessSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "    Total Assignments: {}\n",
        style(summary.total_assignments).white().bold()
    ));
    if !summary.privileged.is_empty() {
        out.push_str(&format!(
            "  {}\n",
            style("⚠️ Privileged Role Assignments:").yellow().bold()
        ));
        render_role_groups(&mut out, &summary.privileged);
    }
    if !summary.normal.is_empty() {
        out.push_str(&format!(
            "  {}\n",
            style("✅ Standard Role Assignments:").green().bold()
        ));
        render_role_groups(&mut out, &summary.normal);
    }
    out
}

fn render_role_groups(out: &mut String, groups: &[RoleGroup]) {
    for group in groups {
        out.push_str(&format!(
            "    Role: {} ({} assignments):\n",
            style(&group.role).white().bold(),
            group.assignment_count(),
        ));
        for principal in &group.principals {
            out.push_str(&format!("      • {}\n", principal));
        }
    }
}

/// Subscription header shown above a report: name, id, tags.
pub fn render_subscription_header(subscription: &Subscription) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\n{} {}\n",
        style("Name:").dim(),
        style(&subscription.display_name).white().bold(),
    ));
    out.push_str(&format!(
        "{} {}\n",
        style("ID:").dim(),
        style(&subscription.id).cyan(),
    ));
    if subscription.has_tags() {
        out.push_str(&format!("{}\n", style("Tags:").dim()));
        for (key, value) in &subscription.tags {
            out.push_str(&format!("  {}: {}\n", style(key).white(), value));
        }
    } else {
        out.push_str(&format!(
            "{} {}\n",
            style("Tags:").dim(),
            style("No tags").dim(),
        ));
    }
    out.push('\n');
    out
}

/// Numbered subscription list for picking.
pub fn render_subscription_list(subscriptions: &[Subscription]) -> String {
    if subscriptions.is_empty() {
        return format!("\n  {}\n", style("No subscriptions visible.").dim());
    }
    let mut out = String::new();
    out.push_str(&format!(
        "\n{}\n\n",
        style(format!("Subscriptions ({}):", subscriptions.len()))
            .white()
            .bold(),
    ));
    for (i, subscription) in subscriptions.iter().enumerate() {
        out.push_str(&format!(
            "  {} {}  {}\n",
            style(format!("[{}]", i + 1)).cyan().bold(),
            style(&subscription.display_name).white().bold(),
            style(&subscription.id).dim(),
        ));
    }
    out
}

/// Sorted view of the privileged role set in effect.
pub fn render_privileged_roles(roles: &std::collections::HashSet<String>) -> String {
    let mut sorted: Vec<&String> = roles.iter().collect();
    sorted.sort();
    let mut out = String::new();
    out.push_str(&format!(
        "\n{}\n\n",
        style("Privileged roles:").white().bold()
    ));
    for role in sorted {
        out.push_str(&format!("  {} {}\n", style("⚠️").yellow(), role));
    }
    out
}

pub fn render_error(msg: &str) -> String {
    format!("{} {}", style("✗").red(), style(msg).red())
}

pub fn render_success(msg: &str) -> String {
    format!("{} {}", style("✓").green(), msg)
}

pub fn render_info(msg: &str) -> String {
    format!("{}", style(msg).dim())
}

/// Render the version info.
pub fn render_version() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let git_hash = option_env!("GIT_HASH").unwrap_or("dev");
    let build_ts = option_env!("BUILD_TIMESTAMP").unwrap_or("unknown");

    format!(
        "\n  {} {}\n  {} {}\n  {} {}\n",
        style("Version:").dim(),
        style(version).white().bold(),
        style("Commit:").dim(),
        style(git_hash).white(),
        style("Built:").dim(),
        style(build_ts).white(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FindingGroup, SeverityBucket};

    fn sample_protection() -> ProtectionSummary {
        ProtectionSummary {
            protected: vec!["SqlServers".to_string(), "VirtualMachines".to_string()],
            unprotected: vec!["KeyVaults".to_string()],
        }
    }

    fn sample_findings() -> FindingsSummary {
        FindingsSummary {
            high: SeverityBucket {
                total: 2,
                groups: vec![FindingGroup {
                    display_name: "SQL injection risk".to_string(),
                    severity: Severity::High,
                    resource_count: 2,
                }],
            },
            medium: SeverityBucket {
                total: 1,
                groups: vec![FindingGroup {
                    display_name: "Weak TLS".to_string(),
                    severity: Severity::Medium,
                    resource_count: 1,
                }],
            },
            low: SeverityBucket::default(),
        }
    }

    fn sample_access() -> AccessSummary {
        AccessSummary {
            total_assignments: 2,
            privileged: vec![RoleGroup {
                role: "Owner".to_string(),
                principals: vec!["Alice Jones (User)".to_string()],
            }],
            normal: vec![RoleGroup {
                role: "Reader".to_string(),
                principals: vec!["Bob Smith (User)".to_string()],
            }],
        }
    }

    #[test]
    fn test_render_protection_lists_both_sides() {
        let output = render_protection(&sample_protection());
        assert!(output.contains("✅ Protected Services"));
        assert!(output.contains("• SqlServers"));
        assert!(output.contains("• VirtualMachines"));
        assert!(output.contains("❌ Unprotected Services"));
        assert!(output.contains("• KeyVaults"));
    }

    #[test]
    fn test_render_protection_omits_empty_side() {
        let summary = ProtectionSummary {
            protected: vec!["VirtualMachines".to_string()],
            unprotected: vec![],
        };
        let output = render_protection(&summary);
        assert!(output.contains("Protected Services"));
        assert!(!output.contains("Unprotected Services"));
    }

    #[test]
    fn test_render_findings_counts_and_groups() {
        let output = render_findings(&sample_findings());
        assert!(output.contains("🔴 High Severity Issues:   2"));
        assert!(output.contains("🟡 Medium Severity Issues: 1"));
        assert!(output.contains("🔵 Low Severity Issues:    0"));
        assert!(output.contains("HIGH PRIORITY FINDINGS"));
        assert!(output.contains("❗ SQL injection risk (2 resources)"));
        assert!(output.contains("MEDIUM PRIORITY FINDINGS"));
        assert!(output.contains("⚠️ Weak TLS"));
        assert!(!output.contains("Weak TLS (1 resources)"));
        assert!(!output.contains("LOW PRIORITY FINDINGS"));
    }

    #[test]
    fn test_render_access_groups_roles() {
        let output = render_access(&sample_access());
        assert!(output.contains("Total Assignments: 2"));
        assert!(output.contains("⚠️ Privileged Role Assignments:"));
        assert!(output.contains("Role: Owner (1 assignments):"));
        assert!(output.contains("• Alice Jones (User)"));
        assert!(output.contains("✅ Standard Role Assignments:"));
        assert!(output.contains("Role: Reader (1 assignments):"));
        assert!(output.contains("• Bob Smith (User)"));
    }

    #[test]
    fn test_render_report_sections_in_order() {
        let report = SecurityReport {
            protection: SectionResult::Completed(sample_protection()),
            findings: SectionResult::Failed("Resource Graph unavailable".to_string()),
            access: SectionResult::Completed(sample_access()),
        };
        let output = render_report(&report);

        let defender = output.find("Microsoft Defender Status").unwrap();
        let recommendations = output.find("Security Recommendations").unwrap();
        let rbac = output.find("RBAC Settings").unwrap();
        assert!(defender < recommendations);
        assert!(recommendations < rbac);

        assert!(output.contains("❌ Error: Resource Graph unavailable"));
        assert!(output.contains("Microsoft Defender for Cloud provides unified security"));
    }

    #[test]
    fn test_render_report_failed_section_keeps_others() {
        let report = SecurityReport {
            protection: SectionResult::Failed("pricing fetch failed".to_string()),
            findings: SectionResult::Completed(FindingsSummary::default()),
            access: SectionResult::Completed(sample_access()),
        };
        let output = render_report(&report);
        assert!(output.contains("pricing fetch failed"));
        assert!(output.contains("Total Assignments: 2"));
    }

    #[test]
    fn test_render_subscription_header_with_tags() {
        let sub = Subscription {
            id: "s-1".to_string(),
            display_name: "Production".to_string(),
            tags: [("env".to_string(), "prod".to_string())].into_iter().collect(),
        };
        let output = render_subscription_header(&sub);
        assert!(output.contains("Name: Production"));
        assert!(output.contains("ID: s-1"));
        assert!(output.contains("env: prod"));
        assert!(!output.contains("No tags"));
    }

    #[test]
    fn test_render_subscription_header_without_tags() {
        let sub = Subscription {
            id: "s-2".to_string(),
            display_name: "Dev".to_string(),
            tags: Default::default(),
        };
        let output = render_subscription_header(&sub);
        assert!(output.contains("Tags: No tags"));
    }

    #[test]
    fn test_render_subscription_list_numbered() {
        let subs = vec![
            Subscription {
                id: "s-1".to_string(),
                display_name: "Production".to_string(),
                tags: Default::default(),
            },
            Subscription {
                id: "s-2".to_string(),
                display_name: "Dev".to_string(),
                tags: Default::default(),
            },
        ];
        let output = render_subscription_list(&subs);
        assert!(output.contains("[1]"));
        assert!(output.contains("[2]"));
        assert!(output.contains("Production"));
        assert!(output.contains("s-2"));
    }

    #[test]
    fn test_render_subscription_list_empty() {
        let output = render_subscription_list(&[]);
        assert!(output.contains("No subscriptions visible."));
    }

    #[test]
    fn test_render_privileged_roles_sorted() {
        let roles: std::collections::HashSet<String> =
            ["Owner", "Contributor"].iter().map(|r| r.to_string()).collect();
        let output = render_privileged_roles(&roles);
        let contributor = output.find("Contributor").unwrap();
        let owner = output.find("Owner").unwrap();
        assert!(contributor < owner);
    }

    #[test]
    fn test_render_error_and_success() {
        assert!(render_error("bad credentials").contains("bad credentials"));
        assert!(render_success("tokens acquired").contains("tokens acquired"));
    }
}
