//! Names of the host-visible attributes the registry reads and writes.

/// Attribute names used on registered elements.
///
/// The defaults match the HTML data-attribute contract; hosts with different
/// conventions can supply their own names at registry construction.
#[derive(Clone, Debug)]
pub struct RegistryConfig {
    /// Attribute read once at registration to assign the group tag.
    pub group_attribute: String,
    /// Boolean attribute marking the element as draggable while active.
    pub draggable_attribute: String,
    /// Marker set on the drag source for the duration of a gesture.
    pub started_marker: String,
    /// Marker set on a viable hover target while the pointer is over it.
    pub over_marker: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            group_attribute: "data-drag".to_owned(),
            draggable_attribute: "draggable".to_owned(),
            started_marker: "data-dragStarted".to_owned(),
            over_marker: "data-dragOver".to_owned(),
        }
    }
}
