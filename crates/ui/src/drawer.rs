//! # Project Drawer
//!
//! Create/edit panel for a single project.
//!
//! ## Flow
//!
//! - The host binds an existing project (edit mode) or none (create mode)
//! - The user edits the form
//! - `submit` checks the capability predicate, validates the form and calls
//!   the persistence service
//! - On success a `DrawerClosed` event is emitted and a toast is shown
//!
//! The mode is never stored on its own: it is read off the bound project.
//!

use crate::config::DrawerConfig;
use crate::events::{ClosedEvents, ClosedSender, DrawerClosed, emit};
use crate::form::ProjectForm;
use drawer_core::{
    AccountId, DrawerError, DrawerResult, Notifier, PermissionAction, PermissionChecker, Project,
    ProjectDraft, ProjectId, ProjectService, ProjectUpdate, ResourceType,
};
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tokio::sync::mpsc;

// ============================================================================
// Types
// ============================================================================

/// Mode for the project drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerMode {
    /// Create a new project
    Create,
    /// Edit an existing project
    Edit(ProjectId),
}

impl DrawerMode {
    /// Whether a project is bound
    pub fn is_editing(&self) -> bool {
        matches!(self, DrawerMode::Edit(_))
    }
}

/// Mutable state shared between the drawer and its in-flight submission
#[derive(Debug, Default)]
struct DrawerState {
    bound: Option<Project>,
    form: ProjectForm,
    visible: bool,
    account: Option<AccountId>,
    loading: bool,
}

impl DrawerState {
    fn mode(&self) -> DrawerMode {
        match &self.bound {
            Some(project) => DrawerMode::Edit(project.id),
            None => DrawerMode::Create,
        }
    }
}

fn lock(state: &Mutex<DrawerState>) -> MutexGuard<'_, DrawerState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

struct Collaborators<S, P, N> {
    service: S,
    permissions: P,
    notifier: N,
    config: DrawerConfig,
}

/// Everything a submission needs once it has been accepted
#[derive(Debug)]
struct SubmitRequest {
    account: AccountId,
    name: String,
    target: Option<ProjectId>,
}

/// Clears the loading flag when the submission finishes or is dropped
struct LoadingGuard {
    state: Weak<Mutex<DrawerState>>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            lock(&state).loading = false;
        }
    }
}

// ============================================================================
// Project Drawer
// ============================================================================

/// Headless create/edit panel for projects
pub struct ProjectDrawer<S, P, N> {
    state: Arc<Mutex<DrawerState>>,
    shared: Arc<Collaborators<S, P, N>>,
    events: ClosedSender,
}

impl<S, P, N> ProjectDrawer<S, P, N>
where
    S: ProjectService,
    P: PermissionChecker,
    N: Notifier,
{
    /// Create a drawer with default notification texts
    ///
    /// Returns the drawer and the receiver on which `closed` events arrive.
    pub fn new(service: S, permissions: P, notifier: N) -> (Self, ClosedEvents) {
        Self::with_config(service, permissions, notifier, DrawerConfig::default())
    }

    /// Create a drawer with custom notification texts
    pub fn with_config(
        service: S,
        permissions: P,
        notifier: N,
        config: DrawerConfig,
    ) -> (Self, ClosedEvents) {
        let (events, receiver) = mpsc::unbounded_channel();
        let drawer = Self {
            state: Arc::new(Mutex::new(DrawerState::default())),
            shared: Arc::new(Collaborators {
                service,
                permissions,
                notifier,
                config,
            }),
            events,
        };
        (drawer, receiver)
    }

    fn state(&self) -> MutexGuard<'_, DrawerState> {
        lock(&self.state)
    }

    // ========================================================================
    // Inputs
    // ========================================================================

    /// Bind a project for editing, or unbind to switch to create mode
    ///
    /// Binding overwrites unsaved edits. Safe to call while a submission is
    /// in flight; that submission keeps the mode it was accepted with.
    pub fn set_bound_project(&self, project: Option<Project>) {
        let mut state = self.state();
        match project {
            Some(project) => {
                tracing::debug!("Drawer bound to project {}", project.id);
                state.form.patch(&project);
                state.bound = Some(project);
            }
            None => {
                tracing::debug!("Drawer unbound, switching to create mode");
                state.form.reset();
                state.bound = None;
            }
        }
    }

    pub fn set_visible(&self, visible: bool) {
        self.state().visible = visible;
    }

    pub fn set_account_context(&self, account: AccountId) {
        self.state().account = Some(account);
    }

    /// User edit of the name field
    pub fn set_name(&self, value: impl Into<String>) {
        self.state().form.set_name(value);
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn bound_project(&self) -> Option<Project> {
        self.state().bound.clone()
    }

    pub fn mode(&self) -> DrawerMode {
        self.state().mode()
    }

    pub fn is_editing(&self) -> bool {
        self.mode().is_editing()
    }

    pub fn is_visible(&self) -> bool {
        self.state().visible
    }

    /// True while a persistence call is in flight
    pub fn is_loading(&self) -> bool {
        self.state().loading
    }

    pub fn account_context(&self) -> Option<AccountId> {
        self.state().account
    }

    /// Snapshot of the form
    pub fn form(&self) -> ProjectForm {
        self.state().form.clone()
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// User cancel; reports the current mode with no project
    pub fn close(&self) {
        let was_editing = self.is_editing();
        tracing::debug!("Drawer cancelled (editing: {})", was_editing);
        emit(&self.events, DrawerClosed::cancelled(was_editing));
    }

    /// Submit the form
    ///
    /// Permission, validation and the in-flight guard are checked right
    /// away, and the loading flag is raised before this returns. The
    /// returned future performs the persistence call and does not borrow the
    /// drawer, so it may be spawned. If the drawer is dropped before the call
    /// resolves, the result is discarded and the future yields
    /// `DrawerError::Detached`.
    pub fn submit(
        &self,
    ) -> impl Future<Output = DrawerResult<DrawerClosed>> + Send + use<S, P, N> {
        // Only an accepted submission owns a guard; a rejected one must not
        // clear the flag raised by the submission already in flight.
        let accepted = self.accept_submission().map(|request| {
            let guard = LoadingGuard {
                state: Arc::downgrade(&self.state),
            };
            (request, guard)
        });
        let state = Arc::downgrade(&self.state);
        let shared = Arc::clone(&self.shared);
        let events = self.events.clone();

        async move {
            let (request, guard) = accepted?;
            let was_editing = request.target.is_some();

            let result = match request.target {
                Some(id) => {
                    shared
                        .service
                        .update_project(request.account, ProjectUpdate::new(id, request.name))
                        .await
                }
                None => {
                    shared
                        .service
                        .create_project(request.account, ProjectDraft::new(request.name))
                        .await
                }
            };

            drop(guard);
            if state.upgrade().is_none() {
                tracing::debug!("Submission resolved after the drawer was dropped");
                return Err(DrawerError::Detached);
            }

            match result {
                Ok(project) => {
                    tracing::info!(
                        "Project {} '{}' {}",
                        project.id,
                        project.name,
                        if was_editing { "updated" } else { "created" }
                    );
                    let event = DrawerClosed::saved(was_editing, project);
                    emit(&events, event.clone());
                    shared
                        .notifier
                        .success(shared.config.success_message(was_editing));
                    Ok(event)
                }
                Err(err) => {
                    tracing::warn!("Project save failed: {}", err);
                    shared
                        .notifier
                        .error(shared.config.failure_message(was_editing));
                    Err(err)
                }
            }
        }
    }

    fn accept_submission(&self) -> DrawerResult<SubmitRequest> {
        // The permission checker is host code and may read the drawer back,
        // so it runs on a snapshot with the state unlocked.
        let bound = {
            let state = self.state();
            if state.loading {
                tracing::debug!("Submit ignored: a submission is already in flight");
                return Err(DrawerError::SubmissionInFlight);
            }
            state.bound.clone()
        };

        let permissions = &self.shared.permissions;
        let (action, resource) = match &bound {
            None => (
                PermissionAction::CreateProject,
                permissions.general_reference(ResourceType::Project),
            ),
            Some(project) => (
                PermissionAction::UpdateProject,
                permissions.resource_reference_for(ResourceType::Project, project),
            ),
        };
        if !permissions.can_perform(action, &resource) {
            tracing::warn!("Permission denied: {} on {}", action, resource);
            self.shared.notifier.warn(permissions.deny_message());
            return Err(DrawerError::PermissionDenied { action });
        }

        let mut state = self.state();
        if state.loading {
            tracing::debug!("Submit ignored: a submission started during the permission check");
            return Err(DrawerError::SubmissionInFlight);
        }

        if let Some(err) = state.form.first_error() {
            state.form.mark_all_dirty();
            tracing::debug!("Submit blocked by validation: {}", err);
            return Err(err);
        }

        let Some(account) = state.account else {
            tracing::warn!("Submit attempted without an account context");
            return Err(DrawerError::MissingAccount);
        };

        state.loading = true;
        Ok(SubmitRequest {
            account,
            name: state.form.name().to_string(),
            target: bound.map(|project| project.id),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
