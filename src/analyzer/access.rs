use std::collections::{BTreeMap, HashSet};

use crate::models::{AccessSummary, RoleAssignment, RoleGroup};

/// Splits role assignments into privileged and normal role groups.
/// Membership is an exact string match of the role name against the
/// privileged set; placement ignores whether the principal resolved.
pub fn partition(assignments: &[RoleAssignment], privileged_roles: &HashSet<String>) -> AccessSummary {
    let mut privileged: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut normal: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for assignment in assignments {
        let side = if privileged_roles.contains(&assignment.role_name) {
            &mut privileged
        } else {
            &mut normal
        };
        side.entry(assignment.role_name.clone())
            .or_default()
            .push(assignment.principal_label());
    }

    AccessSummary {
        total_assignments: assignments.len(),
        privileged: into_groups(privileged),
        normal: into_groups(normal),
    }
}

fn into_groups(by_role: BTreeMap<String, Vec<String>>) -> Vec<RoleGroup> {
    by_role
        .into_iter()
        .map(|(role, mut principals)| {
            principals.sort();
            RoleGroup { role, principals }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PrincipalType;

    fn privileged_set(roles: &[&str]) -> HashSet<String> {
        roles.iter().map(|r| r.to_string()).collect()
    }

    fn assignment(name: &str, principal_type: PrincipalType, role: &str) -> RoleAssignment {
        RoleAssignment::new(format!("id-{name}"), name, principal_type, role)
    }

    #[test]
    fn test_partition_by_privileged_set() {
        let assignments = vec![
            assignment("Alice", PrincipalType::User, "Owner"),
            assignment("Bob", PrincipalType::User, "Reader"),
            assignment("deploy-sp", PrincipalType::ServicePrincipal, "Contributor"),
        ];
        let summary = partition(&assignments, &privileged_set(&["Owner", "Contributor"]));

        assert_eq!(summary.total_assignments, 3);
        assert_eq!(summary.privileged.len(), 2);
        assert_eq!(summary.privileged[0].role, "Contributor");
        assert_eq!(
            summary.privileged[0].principals,
            vec!["deploy-sp (ServicePrincipal)"]
        );
        assert_eq!(summary.privileged[1].role, "Owner");
        assert_eq!(summary.normal.len(), 1);
        assert_eq!(summary.normal[0].role, "Reader");
        assert_eq!(summary.normal[0].principals, vec!["Bob (User)"]);
    }

    #[test]
    fn test_partition_covers_every_assignment_once() {
        let assignments = vec![
            assignment("a", PrincipalType::User, "Owner"),
            assignment("b", PrincipalType::Group, "Owner"),
            assignment("c", PrincipalType::User, "Reader"),
        ];
        let summary = partition(&assignments, &privileged_set(&["Owner"]));
        let placed: usize = summary
            .privileged
            .iter()
            .chain(summary.normal.iter())
            .map(|g| g.assignment_count())
            .sum();
        assert_eq!(placed, assignments.len());
        assert_eq!(summary.total_assignments, assignments.len());
    }

    #[test]
    fn test_partition_membership_is_exact_match() {
        let assignments = vec![
            assignment("a", PrincipalType::User, "owner"),
            assignment("b", PrincipalType::User, "Owner "),
        ];
        let summary = partition(&assignments, &privileged_set(&["Owner"]));
        assert!(summary.privileged.is_empty());
        assert_eq!(summary.normal.len(), 2);
    }

    #[test]
    fn test_partition_places_unresolved_by_role() {
        let assignments = vec![RoleAssignment::unresolved("guid-1", "Owner")];
        let summary = partition(&assignments, &privileged_set(&["Owner"]));
        assert_eq!(summary.total_assignments, 1);
        assert_eq!(summary.privileged[0].principals, vec!["guid-1 (Unknown)"]);
    }

    #[test]
    fn test_partition_sorts_roles_and_principals() {
        let assignments = vec![
            assignment("zeta", PrincipalType::User, "Reader"),
            assignment("alpha", PrincipalType::User, "Reader"),
            assignment("mid", PrincipalType::User, "Backup Operator"),
        ];
        let summary = partition(&assignments, &HashSet::new());
        assert_eq!(summary.normal[0].role, "Backup Operator");
        assert_eq!(summary.normal[1].role, "Reader");
        assert_eq!(
            summary.normal[1].principals,
            vec!["alpha (User)", "zeta (User)"]
        );
    }

    #[test]
    fn test_partition_empty_input() {
        let summary = partition(&[], &privileged_set(&["Owner"]));
        assert_eq!(summary, AccessSummary::default());
    }
}
