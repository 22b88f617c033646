//! In-memory collaborators
//!
//! Self-contained implementations of the drawer's collaborator traits. They
//! back the demo binary and the test suite, and are a starting point for
//! hosts that have not wired their real services yet. Every type here is a
//! cheap handle: clones share the same underlying state.

use drawer_core::{
    AccountId, DrawerError, DrawerResult, Notifier, PermissionAction, PermissionChecker, Project,
    ProjectDraft, ProjectId, ProjectService, ProjectUpdate, ResourceReference, ResourceType,
};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// Project Store
// ============================================================================

/// A call received by the in-memory store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Create {
        account: AccountId,
        draft: ProjectDraft,
    },
    Update {
        account: AccountId,
        update: ProjectUpdate,
    },
}

#[derive(Debug, Default)]
struct StoreInner {
    projects: HashMap<AccountId, BTreeMap<ProjectId, Project>>,
    last_id: u64,
    calls: Vec<StoreCall>,
    fail_next: Option<String>,
}

impl StoreInner {
    fn insert(&mut self, account: AccountId, name: String) -> Project {
        self.last_id += 1;
        let project = Project::new(self.last_id, name);
        self.projects
            .entry(account)
            .or_default()
            .insert(project.id, project.clone());
        project
    }
}

/// Per-account project store with sequential ids
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl InMemoryProjectStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a project directly, bypassing the call log
    pub fn seed(&self, account: AccountId, name: impl Into<String>) -> Project {
        lock(&self.inner).insert(account, name.into())
    }

    /// Make the next create or update call fail with a persistence error
    pub fn fail_next(&self, message: impl Into<String>) {
        lock(&self.inner).fail_next = Some(message.into());
    }

    /// Look up a project within an account
    pub fn get(&self, account: AccountId, id: ProjectId) -> Option<Project> {
        lock(&self.inner)
            .projects
            .get(&account)
            .and_then(|projects| projects.get(&id))
            .cloned()
    }

    /// Projects of an account, ordered by id
    pub fn list(&self, account: AccountId) -> Vec<Project> {
        lock(&self.inner)
            .projects
            .get(&account)
            .map(|projects| projects.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Every create/update call received so far, in order
    pub fn calls(&self) -> Vec<StoreCall> {
        lock(&self.inner).calls.clone()
    }
}

impl ProjectService for InMemoryProjectStore {
    async fn create_project(&self, account: AccountId, draft: ProjectDraft) -> DrawerResult<Project> {
        let mut inner = lock(&self.inner);
        inner.calls.push(StoreCall::Create {
            account,
            draft: draft.clone(),
        });
        if let Some(message) = inner.fail_next.take() {
            return Err(DrawerError::persistence(message));
        }
        if draft.name.is_empty() {
            return Err(DrawerError::persistence("project name must not be empty"));
        }

        let project = inner.insert(account, draft.name);
        tracing::debug!("Store created project {} in account {}", project.id, account);
        Ok(project)
    }

    async fn update_project(
        &self,
        account: AccountId,
        update: ProjectUpdate,
    ) -> DrawerResult<Project> {
        let mut inner = lock(&self.inner);
        inner.calls.push(StoreCall::Update {
            account,
            update: update.clone(),
        });
        if let Some(message) = inner.fail_next.take() {
            return Err(DrawerError::persistence(message));
        }
        if update.name.is_empty() {
            return Err(DrawerError::persistence("project name must not be empty"));
        }

        let project = inner
            .projects
            .get_mut(&account)
            .and_then(|projects| projects.get_mut(&update.id))
            .ok_or(DrawerError::NotFound(update.id))?;
        project.name = update.name;
        tracing::debug!("Store updated project {} in account {}", project.id, account);
        Ok(project.clone())
    }
}

// ============================================================================
// Permissions
// ============================================================================

/// Default text shown when a capability check fails
pub const DEFAULT_DENY_MESSAGE: &str = "You do not have permission to perform this action";

#[derive(Debug, Default)]
struct PermissionsInner {
    allowed: HashSet<PermissionAction>,
    denied_projects: HashSet<ProjectId>,
    checks: Vec<(PermissionAction, ResourceReference)>,
}

/// Allow-list permission checker with per-project denials
#[derive(Debug, Clone)]
pub struct StaticPermissions {
    inner: Arc<Mutex<PermissionsInner>>,
    deny_message: String,
}

impl StaticPermissions {
    /// Allow exactly the given actions
    pub fn with_allowed(actions: impl IntoIterator<Item = PermissionAction>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(PermissionsInner {
                allowed: actions.into_iter().collect(),
                ..PermissionsInner::default()
            })),
            deny_message: DEFAULT_DENY_MESSAGE.to_string(),
        }
    }

    pub fn allow_all() -> Self {
        Self::with_allowed([
            PermissionAction::CreateProject,
            PermissionAction::UpdateProject,
        ])
    }

    pub fn deny_all() -> Self {
        Self::with_allowed([])
    }

    /// Refuse every action scoped to this project
    pub fn deny_project(self, id: ProjectId) -> Self {
        lock(&self.inner).denied_projects.insert(id);
        self
    }

    pub fn with_deny_message(mut self, message: impl Into<String>) -> Self {
        self.deny_message = message.into();
        self
    }

    /// Every check performed so far, in order
    pub fn checks(&self) -> Vec<(PermissionAction, ResourceReference)> {
        lock(&self.inner).checks.clone()
    }
}

impl PermissionChecker for StaticPermissions {
    fn can_perform(&self, action: PermissionAction, resource: &ResourceReference) -> bool {
        let mut inner = lock(&self.inner);
        inner.checks.push((action, resource.clone()));

        let denied_resource = inner.denied_projects.iter().any(|id| {
            resource.as_str() == format!("{}/{}", ResourceType::Project.prefix(), id)
        });
        inner.allowed.contains(&action) && !denied_resource
    }

    fn deny_message(&self) -> &str {
        &self.deny_message
    }
}

// ============================================================================
// Notifiers
// ============================================================================

/// Notification severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationLevel {
    Success,
    Warning,
    Error,
}

/// A notification as recorded by `RecordingNotifier`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub text: String,
}

/// Notifier that keeps every notification in order
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    log: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        lock(&self.log).clone()
    }

    /// Texts of every notification, in order
    pub fn texts(&self) -> Vec<String> {
        lock(&self.log).iter().map(|n| n.text.clone()).collect()
    }

    pub fn count(&self, level: NotificationLevel) -> usize {
        lock(&self.log).iter().filter(|n| n.level == level).count()
    }

    fn record(&self, level: NotificationLevel, text: &str) {
        lock(&self.log).push(Notification {
            level,
            text: text.to_string(),
        });
    }
}

impl Notifier for RecordingNotifier {
    fn warn(&self, text: &str) {
        self.record(NotificationLevel::Warning, text);
    }

    fn success(&self, text: &str) {
        self.record(NotificationLevel::Success, text);
    }

    fn error(&self, text: &str) {
        self.record(NotificationLevel::Error, text);
    }
}

/// Notifier that writes every notification to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn warn(&self, text: &str) {
        tracing::warn!(target: "drawer::toast", "{}", text);
    }

    fn success(&self, text: &str) {
        tracing::info!(target: "drawer::toast", "{}", text);
    }

    fn error(&self, text: &str) {
        tracing::error!(target: "drawer::toast", "{}", text);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_create_assigns_sequential_ids() {
        let store = InMemoryProjectStore::new();
        let account = AccountId::new(7);

        let first = store
            .create_project(account, ProjectDraft::new("Alpha"))
            .await
            .unwrap();
        let second = store
            .create_project(account, ProjectDraft::new("Beta"))
            .await
            .unwrap();

        assert_eq!(first.id, ProjectId::new(1));
        assert_eq!(second.id, ProjectId::new(2));
        assert_eq!(store.list(account), vec![first, second]);
        assert_eq!(store.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_store_update_is_scoped_to_account() {
        let store = InMemoryProjectStore::new();
        let project = store.seed(AccountId::new(1), "Old");

        let err = store
            .update_project(AccountId::new(2), ProjectUpdate::new(project.id, "New"))
            .await
            .unwrap_err();
        assert!(matches!(err, DrawerError::NotFound(_)));

        let updated = store
            .update_project(AccountId::new(1), ProjectUpdate::new(project.id, "New"))
            .await
            .unwrap();
        assert_eq!(updated.name, "New");
        assert_eq!(store.get(AccountId::new(1), project.id), Some(updated));
    }

    #[test]
    fn test_store_rejects_empty_names_and_injected_failures() {
        let store = InMemoryProjectStore::new();
        let account = AccountId::new(1);

        let err = tokio_test::block_on(store.create_project(account, ProjectDraft::new("")))
            .unwrap_err();
        assert!(err.is_persistence());

        store.fail_next("offline");
        let err = tokio_test::block_on(store.create_project(account, ProjectDraft::new("A")))
            .unwrap_err();
        assert_eq!(err.to_string(), "Persistence failed: offline");

        // The injected failure is consumed
        assert!(
            tokio_test::block_on(store.create_project(account, ProjectDraft::new("A"))).is_ok()
        );
    }

    #[test]
    fn test_static_permissions() {
        let permissions = StaticPermissions::with_allowed([PermissionAction::UpdateProject])
            .deny_project(ProjectId::new(3));
        let general = permissions.general_reference(ResourceType::Project);
        let locked = permissions.resource_reference_for(ResourceType::Project, &Project::new(3, "L"));
        let open = permissions.resource_reference_for(ResourceType::Project, &Project::new(4, "O"));

        assert!(!permissions.can_perform(PermissionAction::CreateProject, &general));
        assert!(!permissions.can_perform(PermissionAction::UpdateProject, &locked));
        assert!(permissions.can_perform(PermissionAction::UpdateProject, &open));
        assert_eq!(permissions.checks().len(), 3);
        assert_eq!(permissions.deny_message(), DEFAULT_DENY_MESSAGE);
    }

    #[test]
    fn test_recording_notifier() {
        let notifier = RecordingNotifier::new();
        notifier.warn("careful");
        notifier.success("done");
        notifier.clone().error("broken");

        assert_eq!(notifier.count(NotificationLevel::Warning), 1);
        assert_eq!(notifier.texts(), vec!["careful", "done", "broken"]);
        assert_eq!(
            notifier.notifications()[2],
            Notification {
                level: NotificationLevel::Error,
                text: "broken".to_string(),
            }
        );
    }
}
