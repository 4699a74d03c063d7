//! Item sink
//!
//! Appends accepted paths to the ordered result collection. The engine
//! guarantees it only calls this for accepted items, so there is no
//! deduplication or validation here.

/// Trait for item sinks
pub trait ItemSink {
    /// Append `path` to the given collection
    fn save(&self, path: &str, items: &mut Vec<String>);
}

/// Sink that appends to the engine's result collection
#[derive(Debug, Default, Clone, Copy)]
pub struct CollectionSink;

impl CollectionSink {
    /// Create a new CollectionSink
    pub fn new() -> Self {
        Self
    }
}

impl ItemSink for CollectionSink {
    fn save(&self, path: &str, items: &mut Vec<String>) {
        items.push(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_appends_one_item() {
        let sink = CollectionSink::new();
        let mut items = Vec::new();

        sink.save("/tmp/a.txt", &mut items);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0], "/tmp/a.txt");

        sink.save("/tmp/b.txt", &mut items);
        assert_eq!(items.len(), 2);
        assert_eq!(items, vec!["/tmp/a.txt", "/tmp/b.txt"]);
    }

    #[test]
    fn test_save_keeps_duplicates() {
        let sink = CollectionSink::new();
        let mut items = Vec::new();

        sink.save("/tmp/a.txt", &mut items);
        sink.save("/tmp/a.txt", &mut items);
        assert_eq!(items.len(), 2);
    }
}
