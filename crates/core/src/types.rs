//! Core type definitions for Project Drawer
//!
//! This module contains the project record, the payloads sent to the
//! persistence service, and the identifiers used for permission checks.

use serde::{Deserialize, Serialize};

// ============================================================================
// ID Types
// ============================================================================

/// Identifier of a persisted project, assigned by the backing store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(u64);

impl ProjectId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ProjectId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Account that scopes every persistence call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(u64);

impl AccountId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for AccountId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Project Types
// ============================================================================

/// A persisted project record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Store-assigned identifier
    pub id: ProjectId,
    /// Display name (never empty once persisted)
    pub name: String,
}

impl Project {
    pub fn new(id: impl Into<ProjectId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Payload for creating a new project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub name: String,
}

impl ProjectDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Payload for renaming an existing project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectUpdate {
    pub id: ProjectId,
    pub name: String,
}

impl ProjectUpdate {
    pub fn new(id: impl Into<ProjectId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

// ============================================================================
// Permission Types
// ============================================================================

/// Kind of resource a permission check is scoped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Project,
}

impl ResourceType {
    /// Prefix used when building resource references
    pub fn prefix(&self) -> &'static str {
        match self {
            ResourceType::Project => "project",
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

/// Actions the drawer asks the permission checker about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PermissionAction {
    /// Create a new project in the current account
    CreateProject,
    /// Rename an existing project
    UpdateProject,
}

impl PermissionAction {
    /// Action identifier as understood by the policy engine
    pub fn action_id(&self) -> &'static str {
        match self {
            PermissionAction::CreateProject => "CreateProject",
            PermissionAction::UpdateProject => "UpdateProjectInfo",
        }
    }
}

impl std::fmt::Display for PermissionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.action_id())
    }
}

/// Opaque identifier scoping a capability check to a resource
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceReference(String);

impl ResourceReference {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Reference covering every resource of a type, e.g. `project/*`
    pub fn any_of(resource_type: ResourceType) -> Self {
        Self(format!("{}/*", resource_type.prefix()))
    }

    /// Reference to a single project, e.g. `project/42`
    pub fn for_project(project: &Project) -> Self {
        Self(format!("{}/{}", ResourceType::Project.prefix(), project.id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ResourceReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ids_are_transparent_in_json() {
        let project = Project::new(3, "Old");
        let json = serde_json::to_string(&project).unwrap();
        assert_eq!(json, r#"{"id":3,"name":"Old"}"#);
        assert_eq!(AccountId::from(7).get(), 7);
    }

    #[test]
    fn test_resource_references() {
        assert_eq!(
            ResourceReference::any_of(ResourceType::Project).as_str(),
            "project/*"
        );
        let project = Project::new(42, "Alpha");
        assert_eq!(
            ResourceReference::for_project(&project).to_string(),
            "project/42"
        );
    }

    #[test]
    fn test_permission_action_ids() {
        assert_eq!(PermissionAction::CreateProject.action_id(), "CreateProject");
        assert_eq!(
            PermissionAction::UpdateProject.to_string(),
            "UpdateProjectInfo"
        );
    }

    #[test]
    fn test_payloads() {
        assert_eq!(ProjectDraft::new("Alpha").name, "Alpha");
        let update = ProjectUpdate::new(3, "New");
        assert_eq!(update.id, ProjectId::new(3));
        assert_eq!(update.name, "New");
    }
}
