//! Event recorder
//!
//! A reusable observer that subscribes to all four notification channels,
//! keeps an ordered log of everything it sees, and can be configured to
//! cancel the walk or start excluding items once enough paths have passed
//! the filter.

use std::cell::RefCell;
use std::rc::Rc;

use crate::errors::{VisitError, VisitResult};

use super::classify::{Classify, ItemKind};
use super::filter::PathFilter;
use super::sink::ItemSink;
use super::FileSystemVisitor;

/// Which notification a record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Search started
    Start,
    /// Search finished
    Finish,
    /// A file or directory was found
    Found,
    /// A found item passed the filter
    Filtered,
}

/// One observed notification
#[derive(Debug, Clone)]
pub struct EventRecord {
    /// The notification channel
    pub event: EventKind,
    /// Item path, for Found and Filtered records
    pub path: Option<String>,
    /// Item kind, for Found and Filtered records
    pub kind: Option<ItemKind>,
}

#[derive(Debug, Default)]
struct RecorderState {
    records: Vec<EventRecord>,
    filtered_seen: usize,
    cancel_after: Option<usize>,
    exclude_after: Option<usize>,
}

/// Observer recording every notification raised during a walk
///
/// State is shared behind `Rc<RefCell<_>>`, so the recorder stays inspectable
/// after it has been attached to a visitor.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    state: Rc<RefCell<RecorderState>>,
}

impl Recorder {
    /// Create a passive recorder that only logs
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recorder with decision limits
    ///
    /// `cancel_after`: once that many items have been filtered, the next
    /// Found notification requests cancellation. `exclude_after`: every
    /// filtered item beyond that many is excluded from the results.
    pub fn with_limits(cancel_after: Option<usize>, exclude_after: Option<usize>) -> Self {
        Self {
            state: Rc::new(RefCell::new(RecorderState {
                cancel_after,
                exclude_after,
                ..RecorderState::default()
            })),
        }
    }

    /// Subscribe to all four channels of the given visitor
    pub fn attach<C, F, S>(&self, visitor: &mut FileSystemVisitor<C, F, S>)
    where
        C: Classify,
        F: PathFilter,
        S: ItemSink,
    {
        let state = Rc::clone(&self.state);
        visitor.on_start(move || {
            state.borrow_mut().records.push(EventRecord {
                event: EventKind::Start,
                path: None,
                kind: None,
            });
        });

        let state = Rc::clone(&self.state);
        visitor.on_finish(move |_count| {
            state.borrow_mut().records.push(EventRecord {
                event: EventKind::Finish,
                path: None,
                kind: None,
            });
        });

        let state = Rc::clone(&self.state);
        visitor.on_found(move |event| {
            let mut state = state.borrow_mut();
            match state.cancel_after {
                Some(limit) if state.filtered_seen >= limit => {
                    event.cancel_requested = true;
                }
                _ => {
                    state.records.push(EventRecord {
                        event: EventKind::Found,
                        path: Some(event.path().to_string()),
                        kind: Some(event.kind()),
                    });
                }
            }
        });

        let state = Rc::clone(&self.state);
        visitor.on_filtered(move |event| {
            let mut state = state.borrow_mut();
            state.records.push(EventRecord {
                event: EventKind::Filtered,
                path: Some(event.path().to_string()),
                kind: Some(event.kind()),
            });
            state.filtered_seen += 1;

            if let Some(limit) = state.exclude_after {
                if state.filtered_seen > limit {
                    event.exclude_item = true;
                }
            }
        });
    }

    /// Number of recorded notifications
    pub fn count(&self) -> usize {
        self.state.borrow().records.len()
    }

    /// Snapshot of the log in delivery order
    pub fn records(&self) -> Vec<EventRecord> {
        self.state.borrow().records.clone()
    }

    /// Record at `index`, failing with [`VisitError::OutOfRange`] outside
    /// `[0, count())`
    pub fn record_at(&self, index: usize) -> VisitResult<EventRecord> {
        let state = self.state.borrow();
        state
            .records
            .get(index)
            .cloned()
            .ok_or(VisitError::OutOfRange {
                index,
                len: state.records.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visitor::{CollectionSink, FsClassifier, PredicateFilter};
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::TempDir;

    fn new_visitor() -> FileSystemVisitor<FsClassifier, PredicateFilter, CollectionSink> {
        FileSystemVisitor::new(
            FsClassifier::new(),
            PredicateFilter::new("matches everything", |_| true),
            CollectionSink::new(),
        )
    }

    /// n_dirs subdirectories with n_files files each; returns total entries
    fn build_tree(temp_dir: &TempDir, n_dirs: usize, n_files: usize) -> std::io::Result<usize> {
        let mut count = 1;
        for i in 0..n_dirs {
            let sub_dir = temp_dir.path().join(format!("dir{}", i));
            fs::create_dir(&sub_dir)?;
            count += 1;
            for j in 0..n_files {
                File::create(sub_dir.join(format!("file{}.txt", j)))?.write_all(b"test")?;
                count += 1;
            }
        }
        Ok(count)
    }

    #[test]
    fn test_passive_recorder_logs_everything() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let total = build_tree(&temp_dir, 2, 2)?;

        let mut visitor = new_visitor();
        let recorder = Recorder::new();
        recorder.attach(&mut visitor);

        visitor.search(&temp_dir.path().to_string_lossy())?;

        // Start + Finish + one Found and one Filtered per entry.
        assert_eq!(recorder.count(), 2 + total * 2);
        assert_eq!(recorder.record_at(0)?.event, EventKind::Start);
        assert_eq!(
            recorder.record_at(recorder.count() - 1)?.event,
            EventKind::Finish
        );
        assert_eq!(visitor.count(), total);

        Ok(())
    }

    #[test]
    fn test_cancel_limit_caps_saved_items() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        build_tree(&temp_dir, 2, 3)?;

        let mut visitor = new_visitor();
        let recorder = Recorder::with_limits(Some(3), None);
        recorder.attach(&mut visitor);

        visitor.search(&temp_dir.path().to_string_lossy())?;

        // Everything up to the limit got filtered and saved, nothing after.
        assert_eq!(visitor.count(), 3);

        Ok(())
    }

    #[test]
    fn test_exclude_limit_caps_saved_items() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let total = build_tree(&temp_dir, 2, 3)?;

        let mut visitor = new_visitor();
        let recorder = Recorder::with_limits(None, Some(4));
        recorder.attach(&mut visitor);

        visitor.search(&temp_dir.path().to_string_lossy())?;

        // The walk completes, but only the first 4 filtered items are saved.
        assert_eq!(visitor.count(), 4);
        assert_eq!(
            recorder
                .records()
                .iter()
                .filter(|r| r.event == EventKind::Filtered)
                .count(),
            total
        );

        Ok(())
    }

    #[test]
    fn test_record_at_out_of_range() {
        let recorder = Recorder::new();
        match recorder.record_at(0) {
            Err(VisitError::OutOfRange { index: 0, len: 0 }) => {}
            other => panic!("expected OutOfRange, got {:?}", other),
        }
    }
}
