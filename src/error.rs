//! Error types for registry and item operations.

/// Errors that may occur while operating on draggable items.
///
/// Expected conditions such as group mismatches, missing hover targets or
/// empty registrations are silent policy branches, not errors.
#[derive(Debug, thiserror::Error)]
pub enum DragError {
    /// Operation invoked on an item whose wrapper was already destroyed.
    #[error("Draggable item was destroyed and no longer manages its element")]
    ItemDestroyed,
}
