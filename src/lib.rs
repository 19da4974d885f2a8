//! Drag-and-drop swap registry for group-tagged UI elements.
//!
//! Register a set of element nodes as mutually-draggable peers; dragging one
//! onto another with the same group tag swaps their full attribute sets and
//! inner content, then notifies an optional callback. The host adapter
//! delivers native drag events through [`registry::DragRegistry::dispatch`].

/// Ordered attribute storage.
pub mod attributes;
/// Attribute names read and written on registered elements.
pub mod config;
/// Element nodes and shared handles.
pub mod element;
/// Error types.
pub mod error;
/// Native drag event types.
pub mod events;
/// Per-element drag state wrappers.
pub mod item;
/// The drag registry and gesture state machine.
pub mod registry;

pub use attributes::AttributeSet;
pub use config::RegistryConfig;
pub use element::{Element, ElementHandle};
pub use error::DragError;
pub use events::{DragEvent, DragEventKind};
pub use item::DraggableItem;
pub use registry::DragRegistry;
