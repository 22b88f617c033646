//! Collaborator traits for Project Drawer
//!
//! The drawer does no persistence, permission evaluation or rendering of its
//! own. It reaches those through the three traits defined here, which hosts
//! implement on top of their HTTP client, policy engine and toast service.

use crate::error::DrawerResult;
use crate::types::{
    AccountId, PermissionAction, Project, ProjectDraft, ProjectUpdate, ResourceReference,
    ResourceType,
};
use std::future::Future;

// ============================================================================
// ProjectService Trait
// ============================================================================

/// Backing store for project records
///
/// Both calls are asynchronous and may fail. The returned project is the
/// store's view of the record after the write.
///
/// # Example
///
/// ```rust,ignore
/// use drawer_core::{AccountId, DrawerResult, Project, ProjectDraft, ProjectService, ProjectUpdate};
///
/// struct HttpProjects { client: ApiClient }
///
/// impl ProjectService for HttpProjects {
///     async fn create_project(&self, account: AccountId, draft: ProjectDraft) -> DrawerResult<Project> {
///         self.client.post(format!("/accounts/{account}/projects"), &draft).await
///     }
///
///     async fn update_project(&self, account: AccountId, update: ProjectUpdate) -> DrawerResult<Project> {
///         self.client.put(format!("/accounts/{account}/projects/{}", update.id), &update).await
///     }
/// }
/// ```
pub trait ProjectService: Send + Sync + 'static {
    /// Create a new project in the given account
    fn create_project(
        &self,
        account: AccountId,
        draft: ProjectDraft,
    ) -> impl Future<Output = DrawerResult<Project>> + Send;

    /// Update an existing project by id
    fn update_project(
        &self,
        account: AccountId,
        update: ProjectUpdate,
    ) -> impl Future<Output = DrawerResult<Project>> + Send;
}

// ============================================================================
// PermissionChecker Trait
// ============================================================================

/// Opaque capability check consulted before every submit
pub trait PermissionChecker: Send + Sync + 'static {
    /// Whether the current user may perform `action` on `resource`
    fn can_perform(&self, action: PermissionAction, resource: &ResourceReference) -> bool;

    /// Reference scoping a check to one specific project
    fn resource_reference_for(
        &self,
        resource_type: ResourceType,
        project: &Project,
    ) -> ResourceReference {
        match resource_type {
            ResourceType::Project => ResourceReference::for_project(project),
        }
    }

    /// Reference covering every resource of a type (used for creation)
    fn general_reference(&self, resource_type: ResourceType) -> ResourceReference {
        ResourceReference::any_of(resource_type)
    }

    /// Fixed human-readable text shown when a check fails
    fn deny_message(&self) -> &str;
}

// ============================================================================
// Notifier Trait
// ============================================================================

/// Transient user-facing notifications (toasts)
///
/// Fire and forget: no return value, no retry.
pub trait Notifier: Send + Sync + 'static {
    fn warn(&self, text: &str);

    fn success(&self, text: &str);

    fn error(&self, text: &str);
}
