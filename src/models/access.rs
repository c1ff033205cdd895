use serde::{Deserialize, Serialize};

/// Directory object type behind a role assignment, derived from the Graph
/// `@odata.type` discriminator. Principals that cannot be resolved keep the
/// Unknown sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrincipalType {
    User,
    Group,
    ServicePrincipal,
    Unknown,
}

impl PrincipalType {
    /// Maps a Graph `@odata.type` value such as `#microsoft.graph.user` to
    /// a principal type. The comparison is case-insensitive on the suffix.
    pub fn from_odata(odata_type: &str) -> Self {
        let suffix = odata_type.rsplit('.').next().unwrap_or("");
        match suffix.to_ascii_lowercase().as_str() {
            "user" => Self::User,
            "group" => Self::Group,
            "serviceprincipal" => Self::ServicePrincipal,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Group => "Group",
            Self::ServicePrincipal => "ServicePrincipal",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for PrincipalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One role assignment on the subscription scope, with the role definition
/// GUID already mapped to its role name (or left as the GUID when no
/// definition matched) and the principal resolved where possible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub principal_id: String,
    pub principal_name: String,
    pub principal_type: PrincipalType,
    pub role_name: String,
}

impl RoleAssignment {
    pub fn new(
        principal_id: impl Into<String>,
        principal_name: impl Into<String>,
        principal_type: PrincipalType,
        role_name: impl Into<String>,
    ) -> Self {
        Self {
            principal_id: principal_id.into(),
            principal_name: principal_name.into(),
            principal_type,
            role_name: role_name.into(),
        }
    }

    /// Assignment whose principal could not be resolved in the directory.
    pub fn unresolved(principal_id: impl Into<String>, role_name: impl Into<String>) -> Self {
        let principal_id = principal_id.into();
        Self {
            principal_name: principal_id.clone(),
            principal_id,
            principal_type: PrincipalType::Unknown,
            role_name: role_name.into(),
        }
    }

    /// Reader-facing label: "name (Type)".
    pub fn principal_label(&self) -> String {
        format!("{} ({})", self.principal_name, self.principal_type)
    }
}

/// Assignments grouped under one role name, with principal labels sorted
/// lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleGroup {
    pub role: String,
    pub principals: Vec<String>,
}

impl RoleGroup {
    pub fn assignment_count(&self) -> usize {
        self.principals.len()
    }
}

/// The access section: every assignment split into privileged and normal
/// role groups, plus the overall assignment count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessSummary {
    pub total_assignments: usize,
    pub privileged: Vec<RoleGroup>,
    pub normal: Vec<RoleGroup>,
}

impl AccessSummary {
    pub fn privileged_count(&self) -> usize {
        self.privileged.iter().map(|g| g.assignment_count()).sum()
    }
}
