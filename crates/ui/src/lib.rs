//! # Drawer UI
//!
//! Headless project drawer widget.
//!
//! The drawer owns a small form and the create/edit submit flow. Rendering
//! is left to the host; persistence, permission checks and toasts go through
//! the collaborator traits in `drawer_core`.
//!
//! ## Example
//!
//! ```rust,ignore
//! let (drawer, mut closed) = ProjectDrawer::new(store, permissions, notifier);
//! drawer.set_account_context(AccountId::new(7));
//! drawer.set_visible(true);
//! drawer.set_name("Alpha");
//! drawer.submit().await?;
//! let event = closed.recv().await;
//! ```
//!

// ============================================================================
// Modules
// ============================================================================

pub mod config;
pub mod drawer;
pub mod events;
pub mod form;
pub mod memory;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use drawer_core;

pub use config::DrawerConfig;
pub use drawer::{DrawerMode, ProjectDrawer};
pub use events::{ClosedEvents, DrawerClosed};
pub use form::{FormField, FormFieldName, ProjectForm};
pub use memory::{
    InMemoryProjectStore, LogNotifier, Notification, NotificationLevel, RecordingNotifier,
    StaticPermissions, StoreCall,
};

// ============================================================================
// Constants
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = "Project Drawer";

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "Project Drawer");
    }
}
