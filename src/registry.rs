//! The draggable registry: owns the items, routes native drag events and
//! performs the swap on a valid drop.
//!
//! One gesture runs Start, then any number of Enter/Over/Leave, then Drop.
//! The registry tracks two transient pointers while a gesture is active: the
//! drag source and the current hover target. Both are reset on drop whatever
//! the outcome. A drag started before the previous drop was observed simply
//! overwrites the state; the host is single-threaded so there is no race to
//! guard against.

use std::rc::Rc;

use tracing::{debug, info};

use crate::config::RegistryConfig;
use crate::element::ElementHandle;
use crate::error::DragError;
use crate::events::{DragEvent, DragEventKind};
use crate::item::DraggableItem;

/// Callback invoked after each successful swap with `(source, target)`.
pub type SwapCallback = Box<dyn FnMut(&ElementHandle, &ElementHandle)>;

/// Registry of mutually-draggable elements.
pub struct DragRegistry {
    config: Rc<RegistryConfig>,
    items: Vec<DraggableItem>,
    callback: Option<SwapCallback>,
    drag_source: Option<usize>,
    hover_target: Option<usize>,
}

impl DragRegistry {
    /// An empty registry with the default attribute names.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// An empty registry with custom attribute names.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config: Rc::new(config),
            items: Vec::new(),
            callback: None,
            drag_source: None,
            hover_target: None,
        }
    }

    /// A registry with the given elements registered immediately.
    pub fn with_elements<I>(elements: I) -> Result<Self, DragError>
    where
        I: IntoIterator<Item = ElementHandle>,
    {
        let mut registry = Self::new();
        registry.register(elements)?;
        Ok(registry)
    }

    /// Register elements as draggable peers.
    ///
    /// Empty input is a no-op. Elements already wrapped by this registry are
    /// skipped; each new element gets an item with listeners attached
    /// immediately. Returns the registry for chaining.
    pub fn register<I>(&mut self, elements: I) -> Result<&mut Self, DragError>
    where
        I: IntoIterator<Item = ElementHandle>,
    {
        for element in elements {
            if self.index_of(&element).is_some() {
                continue;
            }
            let mut item = DraggableItem::new(element, Rc::clone(&self.config));
            item.start()?;
            debug!("register: item {} group={:?}", self.items.len(), item.group());
            self.items.push(item);
        }
        Ok(self)
    }

    /// Store the completion callback, replacing any previous one.
    ///
    /// The callback fires after every successful swap with the drag source
    /// and drop target elements, in that order.
    pub fn set_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&ElementHandle, &ElementHandle) + 'static,
    {
        self.callback = Some(Box::new(callback));
    }

    /// Destroy every item, detaching its listeners, and empty the registry.
    ///
    /// The registry stays reusable for further `register` calls.
    pub fn clear(&mut self) {
        for item in &mut self.items {
            item.destroy();
        }
        self.items.clear();
        self.drag_source = None;
        self.hover_target = None;
        debug!("clear: registry emptied");
    }

    /// Number of registered items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when no items are registered.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item wrapping `element`, if registered.
    pub fn item_for(&self, element: &ElementHandle) -> Option<&DraggableItem> {
        self.items.iter().find(|item| item.wraps(element))
    }

    /// Element currently being dragged, while a gesture is active.
    pub fn drag_source(&self) -> Option<&ElementHandle> {
        self.item_at(self.drag_source).map(DraggableItem::element)
    }

    /// Element currently hovered, while a gesture is active.
    pub fn hover_target(&self) -> Option<&ElementHandle> {
        self.item_at(self.hover_target).map(DraggableItem::element)
    }

    /// Route a native drag event to the item wrapping `element`.
    ///
    /// Events for elements without an attached listener of the event's kind
    /// (never registered, or cleared since) are ignored. Drag-over and drop
    /// events come back default-prevented so the host permits the drop; drop
    /// is additionally stopped from propagating.
    pub fn dispatch(&mut self, element: &ElementHandle, event: &mut DragEvent) -> Result<(), DragError> {
        if !element.has_listener(event.kind()) {
            return Ok(());
        }
        let Some(index) = self.index_of(element) else {
            return Ok(());
        };
        match event.kind() {
            DragEventKind::Start => self.handle_start(index),
            DragEventKind::Enter => {
                event.prevent_default();
                self.handle_enter(index)
            }
            DragEventKind::Over => {
                event.prevent_default();
                self.handle_over(index)
            }
            DragEventKind::Leave => {
                event.prevent_default();
                self.handle_leave()
            }
            DragEventKind::Drop => {
                event.prevent_default();
                event.stop_propagation();
                self.handle_drop()
            }
        }
    }

    fn handle_start(&mut self, index: usize) -> Result<(), DragError> {
        debug!("drag start: item {index}");
        self.drag_source = Some(index);
        match self.items.get(index) {
            Some(item) => item.mark_started(),
            None => Ok(()),
        }
    }

    // Enter fires broadly during a native drag, so the hover target is
    // tracked without any group check here.
    fn handle_enter(&mut self, index: usize) -> Result<(), DragError> {
        self.hover_target = Some(index);
        Ok(())
    }

    fn handle_over(&mut self, index: usize) -> Result<(), DragError> {
        self.hover_target = Some(index);
        let Some(source_index) = self.drag_source else {
            return Ok(());
        };
        if index == source_index {
            return Ok(());
        }
        if let (Some(source), Some(target)) =
            (self.items.get(source_index), self.items.get(index))
            && source.same_group(target)
        {
            debug!("drag over: item {index} is a viable target");
            target.mark_over()?;
        }
        Ok(())
    }

    fn handle_leave(&mut self) -> Result<(), DragError> {
        let (Some(source_index), Some(target_index)) = (self.drag_source, self.hover_target)
        else {
            return Ok(());
        };
        if source_index == target_index {
            return Ok(());
        }
        if let (Some(source), Some(target)) = (
            self.items.get(source_index),
            self.items.get(target_index),
        ) && source.same_group(target)
        {
            target.clear_over()?;
        }
        Ok(())
    }

    fn handle_drop(&mut self) -> Result<(), DragError> {
        let source = self.drag_source.take();
        let target = self.hover_target.take();
        // Markers are cleared before the drop is validated so an aborted or
        // invalid drop never leaves styling hooks behind.
        if let Some(item) = self.item_at(source) {
            item.clear_markers()?;
        }
        if let Some(item) = self.item_at(target) {
            item.clear_markers()?;
        }
        let (Some(source_index), Some(target_index)) = (source, target) else {
            debug!("drop ignored: no drag source or hover target");
            return Ok(());
        };
        if source_index == target_index {
            debug!("drop ignored: source and target are the same item");
            return Ok(());
        }
        let (Some(source_item), Some(target_item)) = (
            self.items.get(source_index),
            self.items.get(target_index),
        ) else {
            return Ok(());
        };
        if !source_item.same_group(target_item) {
            debug!(
                "drop ignored: group mismatch {:?} vs {:?}",
                source_item.group(),
                target_item.group()
            );
            return Ok(());
        }
        source_item.swap_with(target_item)?;
        info!(
            "swap complete: items {source_index} and {target_index} group={:?}",
            source_item.group()
        );
        let source_element = source_item.element().clone();
        let target_element = target_item.element().clone();
        if let Some(callback) = self.callback.as_mut() {
            callback(&source_element, &target_element);
        }
        Ok(())
    }

    fn index_of(&self, element: &ElementHandle) -> Option<usize> {
        // Identity scan; expected set sizes are small. An identity map would
        // be the first optimization if that stops holding.
        self.items.iter().position(|item| item.wraps(element))
    }

    fn item_at(&self, index: Option<usize>) -> Option<&DraggableItem> {
        index.and_then(|index| self.items.get(index))
    }
}

impl Default for DragRegistry {
    fn default() -> Self {
        Self::new()
    }
}
