//! Notification payloads
//!
//! Events handed to observers during a walk. The path and kind are fixed at
//! construction; only the decision flags are writable, and the engine reads
//! them back synchronously after every dispatch.

use super::classify::ItemKind;

/// Identifies one subscribed handler so it can be removed later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// Payload for the Found notification
#[derive(Debug)]
pub struct FoundEvent {
    path: String,
    kind: ItemKind,
    /// Set by an observer to stop the walk after this item
    pub cancel_requested: bool,
}

impl FoundEvent {
    pub(crate) fn new(path: &str, kind: ItemKind) -> Self {
        Self {
            path: path.to_string(),
            kind,
            cancel_requested: false,
        }
    }

    /// Path of the found item
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Kind of the found item
    pub fn kind(&self) -> ItemKind {
        self.kind
    }
}

/// Payload for the Filtered notification
#[derive(Debug)]
pub struct FilteredEvent {
    path: String,
    kind: ItemKind,
    /// Set by an observer to stop the walk after this item
    pub cancel_requested: bool,
    /// Set by an observer to keep this one item out of the results
    pub exclude_item: bool,
}

impl FilteredEvent {
    pub(crate) fn new(path: &str, kind: ItemKind) -> Self {
        Self {
            path: path.to_string(),
            kind,
            cancel_requested: false,
            exclude_item: false,
        }
    }

    /// Path of the filtered item
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Kind of the filtered item
    pub fn kind(&self) -> ItemKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_event_defaults() {
        let event = FoundEvent::new("/tmp/a.txt", ItemKind::File);
        assert_eq!(event.path(), "/tmp/a.txt");
        assert_eq!(event.kind(), ItemKind::File);
        assert!(!event.cancel_requested);
    }

    #[test]
    fn test_filtered_event_defaults() {
        let event = FilteredEvent::new("/tmp/dir", ItemKind::Directory);
        assert_eq!(event.path(), "/tmp/dir");
        assert_eq!(event.kind(), ItemKind::Directory);
        assert!(!event.cancel_requested);
        assert!(!event.exclude_item);
    }
}
