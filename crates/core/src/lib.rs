//! # Drawer Core
//!
//! Core types, traits, and error handling for Project Drawer.
//!
//! This crate provides the pieces shared between the drawer widget and
//! the host that embeds it:
//!
//! - **Types**: `Project`, its create/update payloads, ids and resource references
//! - **Traits**: `ProjectService`, `PermissionChecker` and `Notifier` collaborators
//! - **Errors**: Unified error handling with `DrawerError` and `DrawerResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{DrawerError, DrawerResult};
pub use traits::{Notifier, PermissionChecker, ProjectService};
pub use types::{
    AccountId, PermissionAction, Project, ProjectDraft, ProjectId, ProjectUpdate,
    ResourceReference, ResourceType,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
