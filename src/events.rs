//! Native drag event types as delivered by the host adapter.

/// The five native drag event kinds a registered element listens for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragEventKind {
    /// The user started dragging the element.
    Start,
    /// The pointer entered the element during an active drag.
    Enter,
    /// The pointer is hovering the element; fires repeatedly.
    Over,
    /// The pointer left the element during an active drag.
    Leave,
    /// The dragged payload was released over the element.
    Drop,
}

impl DragEventKind {
    /// Every kind an active item is wired for.
    pub const ALL: [DragEventKind; 5] = [
        DragEventKind::Start,
        DragEventKind::Enter,
        DragEventKind::Over,
        DragEventKind::Leave,
        DragEventKind::Drop,
    ];
}

/// A single native drag event.
///
/// The registry flips the two flags to tell the host how to proceed:
/// drag-over must be default-prevented for the drop to be permitted, and
/// drop is stopped from propagating so the host does not also act on it.
#[derive(Debug)]
pub struct DragEvent {
    kind: DragEventKind,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl DragEvent {
    /// A fresh event of the given kind with neither flag set.
    pub fn new(kind: DragEventKind) -> Self {
        Self {
            kind,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// The event kind.
    pub fn kind(&self) -> DragEventKind {
        self.kind
    }

    /// Ask the host to suppress its default handling.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Ask the host to stop propagating the event.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// True once `prevent_default` was called.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// True once `stop_propagation` was called.
    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_event_has_clean_flags() {
        let event = DragEvent::new(DragEventKind::Over);
        assert_eq!(event.kind(), DragEventKind::Over);
        assert!(!event.default_prevented());
        assert!(!event.propagation_stopped());
    }

    #[test]
    fn flags_latch_once_set() {
        let mut event = DragEvent::new(DragEventKind::Drop);
        event.prevent_default();
        event.stop_propagation();
        assert!(event.default_prevented());
        assert!(event.propagation_stopped());
    }
}
