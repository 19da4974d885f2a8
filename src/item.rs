//! Wrapper binding one element to its drag state.
//!
//! An item is created when its element is registered and destroyed when the
//! registry is cleared. While active it keeps the element's drag listeners
//! attached and owns the group tag read from the element at activation.

use std::rc::Rc;

use crate::config::RegistryConfig;
use crate::element::ElementHandle;
use crate::error::DragError;
use crate::events::DragEventKind;

/// Drag state for a single registered element.
#[derive(Debug)]
pub struct DraggableItem {
    element: ElementHandle,
    config: Rc<RegistryConfig>,
    group: Option<String>,
    group_read: bool,
    active: bool,
    destroyed: bool,
}

impl DraggableItem {
    pub(crate) fn new(element: ElementHandle, config: Rc<RegistryConfig>) -> Self {
        Self {
            element,
            config,
            group: None,
            group_read: false,
            active: false,
            destroyed: false,
        }
    }

    /// Handle to the wrapped element.
    pub fn element(&self) -> &ElementHandle {
        &self.element
    }

    /// The group tag, if the element carried one at activation.
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// True while listeners are attached.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// True once `destroy` ran.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// True when this item wraps the given element.
    pub fn wraps(&self, element: &ElementHandle) -> bool {
        self.element.same(element)
    }

    /// Two items may swap only when their group tags are equal. Both absent
    /// counts as the default group and matches.
    pub fn same_group(&self, other: &DraggableItem) -> bool {
        self.group == other.group
    }

    /// Attach the drag listeners and mark the element draggable.
    ///
    /// The group tag is read from the element once, on first activation, and
    /// is immutable afterwards. An empty tag counts as no group. Calling
    /// `start` on an already-active item re-attaches listeners, which is
    /// idempotent.
    pub fn start(&mut self) -> Result<(), DragError> {
        self.ensure_live()?;
        for kind in DragEventKind::ALL {
            self.element.attach_listener(kind);
        }
        self.element
            .set_attribute(&self.config.draggable_attribute, "true");
        if !self.group_read {
            self.group = self
                .element
                .attribute(&self.config.group_attribute)
                .filter(|group| !group.is_empty());
            self.group_read = true;
        }
        self.active = true;
        Ok(())
    }

    /// Detach the drag listeners and unmark the element; no-op when inactive.
    pub fn stop(&mut self) {
        if !self.active {
            return;
        }
        for kind in DragEventKind::ALL {
            self.element.detach_listener(kind);
        }
        self.element
            .remove_attribute(&self.config.draggable_attribute);
        self.active = false;
    }

    /// Stop the item and retire it. Repeat calls are safe no-ops; any other
    /// operation afterwards fails with [`DragError::ItemDestroyed`].
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.stop();
        self.destroyed = true;
    }

    /// Set the started marker used as a styling hook. Idempotent.
    pub fn mark_started(&self) -> Result<(), DragError> {
        self.set_marker(&self.config.started_marker)
    }

    /// Set the hover marker used as a styling hook. Idempotent.
    pub fn mark_over(&self) -> Result<(), DragError> {
        self.set_marker(&self.config.over_marker)
    }

    /// Remove the hover marker; no-op when absent.
    pub fn clear_over(&self) -> Result<(), DragError> {
        self.ensure_live()?;
        self.element.remove_attribute(&self.config.over_marker);
        Ok(())
    }

    /// Remove both gesture markers; no-op for any that is absent.
    pub fn clear_markers(&self) -> Result<(), DragError> {
        self.ensure_live()?;
        self.element.remove_attribute(&self.config.started_marker);
        self.element.remove_attribute(&self.config.over_marker);
        Ok(())
    }

    /// Exchange the full attribute set and inner content with `other`.
    ///
    /// Both elements keep their node identity; only their attribute sets and
    /// contents trade places. Listener tables are untouched, so no rewiring
    /// is needed after a swap. The attribute exchange is replace-all: an
    /// attribute present only on one element beforehand is present only on
    /// the other afterwards.
    pub fn swap_with(&self, other: &DraggableItem) -> Result<(), DragError> {
        self.ensure_live()?;
        other.ensure_live()?;
        let our_attributes = self.element.attributes();
        let their_attributes = other.element.attributes();
        let our_content = self.element.content();
        let their_content = other.element.content();
        self.element.replace_attributes(their_attributes);
        other.element.replace_attributes(our_attributes);
        self.element.set_content(their_content);
        other.element.set_content(our_content);
        Ok(())
    }

    fn set_marker(&self, marker: &str) -> Result<(), DragError> {
        self.ensure_live()?;
        if !self.element.has_attribute(marker) {
            self.element.set_attribute(marker, "");
        }
        Ok(())
    }

    fn ensure_live(&self) -> Result<(), DragError> {
        if self.destroyed {
            Err(DragError::ItemDestroyed)
        } else {
            Ok(())
        }
    }
}
