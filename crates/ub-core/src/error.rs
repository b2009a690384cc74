use crate::id::ComponentId;

/// Failures of document store operations.
///
/// Both are recoverable: callers log and keep the session running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("component not found: {0}")]
    NotFound(ComponentId),
    #[error("duplicate component id: {0}")]
    DuplicateId(ComponentId),
}
