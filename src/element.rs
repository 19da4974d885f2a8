//! Element nodes shared between the host adapter and the registry.
//!
//! `Element` stands in for the host toolkit's node type: an ordered attribute
//! set, inner content, and the drag listeners currently attached. Handles are
//! reference-counted and compared by identity, never by structure, mirroring
//! node identity in the host tree. Everything is single-threaded by
//! construction; drag handling runs cooperatively on the UI thread.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::attributes::AttributeSet;
use crate::events::DragEventKind;

/// A single UI element node.
#[derive(Debug)]
pub struct Element {
    tag: String,
    attributes: AttributeSet,
    content: String,
    listeners: HashSet<DragEventKind>,
}

impl Element {
    /// Create an element with the given tag name and no attributes.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: AttributeSet::new(),
            content: String::new(),
            listeners: HashSet::new(),
        }
    }

    /// Builder-style attribute assignment, for construction and tests.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// Builder-style content assignment.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Wrap the element in a shared handle.
    pub fn into_handle(self) -> ElementHandle {
        ElementHandle(Rc::new(RefCell::new(self)))
    }
}

/// Shared handle to an [`Element`].
///
/// Cloning the handle clones the reference, not the node. Equality is
/// pointer identity: two handles are equal only when they refer to the same
/// underlying element.
#[derive(Clone, Debug)]
pub struct ElementHandle(Rc<RefCell<Element>>);

impl ElementHandle {
    /// True when both handles refer to the same element node.
    pub fn same(&self, other: &ElementHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// The element's tag name.
    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    /// Value of the named attribute, if present.
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).map(str::to_owned)
    }

    /// Set or update an attribute.
    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        self.0.borrow_mut().attributes.set(name, value);
    }

    /// Remove an attribute, returning its value if it was present.
    pub fn remove_attribute(&self, name: &str) -> Option<String> {
        self.0.borrow_mut().attributes.remove(name)
    }

    /// True when the named attribute is present.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.0.borrow().attributes.contains(name)
    }

    /// Snapshot of the full attribute set.
    pub fn attributes(&self) -> AttributeSet {
        self.0.borrow().attributes.clone()
    }

    /// Replace the full attribute set. This never merges: attributes absent
    /// from `attributes` are gone afterwards.
    pub fn replace_attributes(&self, attributes: AttributeSet) {
        self.0.borrow_mut().attributes = attributes;
    }

    /// The element's inner content.
    pub fn content(&self) -> String {
        self.0.borrow().content.clone()
    }

    /// Replace the element's inner content.
    pub fn set_content(&self, content: impl Into<String>) {
        self.0.borrow_mut().content = content.into();
    }

    /// Attach a drag listener. Attaching an already-attached kind is a no-op.
    pub fn attach_listener(&self, kind: DragEventKind) {
        self.0.borrow_mut().listeners.insert(kind);
    }

    /// Detach a drag listener. Detaching an absent kind is a no-op.
    pub fn detach_listener(&self, kind: DragEventKind) {
        self.0.borrow_mut().listeners.remove(&kind);
    }

    /// True when a listener for `kind` is attached.
    pub fn has_listener(&self, kind: DragEventKind) -> bool {
        self.0.borrow().listeners.contains(&kind)
    }

    /// Number of attached drag listeners.
    pub fn listener_count(&self) -> usize {
        self.0.borrow().listeners.len()
    }
}

impl PartialEq for ElementHandle {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl Eq for ElementHandle {}
