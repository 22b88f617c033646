//! Events emitted by the drawer to its host

use drawer_core::Project;
use tokio::sync::mpsc;

/// Payload of the `closed` event
///
/// `project` is set after a successful save and empty after a cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerClosed {
    /// Mode the drawer was in when the save was accepted or the cancel happened
    pub was_editing: bool,
    /// Project as returned by the store
    pub project: Option<Project>,
}

impl DrawerClosed {
    pub fn saved(was_editing: bool, project: Project) -> Self {
        Self {
            was_editing,
            project: Some(project),
        }
    }

    pub fn cancelled(was_editing: bool) -> Self {
        Self {
            was_editing,
            project: None,
        }
    }

    /// Whether the drawer closed because a save succeeded
    pub fn is_saved(&self) -> bool {
        self.project.is_some()
    }
}

/// Receiving half handed to the host
pub type ClosedEvents = mpsc::UnboundedReceiver<DrawerClosed>;

/// Sending half kept by the drawer
pub(crate) type ClosedSender = mpsc::UnboundedSender<DrawerClosed>;

/// Send an event, logging instead of failing when the host stopped listening
pub(crate) fn emit(sender: &ClosedSender, event: DrawerClosed) {
    if sender.send(event).is_err() {
        tracing::debug!("Closed event dropped: host receiver is gone");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payloads() {
        let saved = DrawerClosed::saved(true, Project::new(1, "A"));
        assert!(saved.is_saved());
        assert!(saved.was_editing);

        let cancelled = DrawerClosed::cancelled(false);
        assert!(!cancelled.is_saved());
    }

    #[test]
    fn test_emit_without_receiver_does_not_panic() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        emit(&tx, DrawerClosed::cancelled(false));
    }
}
