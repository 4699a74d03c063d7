//! Filesystem visitor module
//!
//! This module provides the traversal engine: a recursive, depth-first walk
//! over a directory tree (or a single file) that collects every path passing
//! a caller-supplied filter, and raises four lifecycle notifications (Start,
//! Finish, Found, Filtered) that observers can use to cancel the walk or
//! exclude single items from the results.

pub mod classify;
pub mod events;
pub mod filter;
pub mod recorder;
pub mod sink;

use std::path::Path;

use log::{debug, info};
use walkdir::WalkDir;

use crate::errors::{VisitError, VisitResult};

pub use self::classify::{Classify, FsClassifier, ItemKind};
pub use self::events::{FilteredEvent, FoundEvent, SubscriptionId};
pub use self::filter::{GlobFilter, PathFilter, PredicateFilter, SubstringFilter};
pub use self::recorder::{EventKind, EventRecord, Recorder};
pub use self::sink::{CollectionSink, ItemSink};

type StartHandler = Box<dyn FnMut()>;
type FinishHandler = Box<dyn FnMut(usize)>;
type FoundHandler = Box<dyn FnMut(&mut FoundEvent)>;
type FilteredHandler = Box<dyn FnMut(&mut FilteredEvent)>;

/// Filesystem visitor
///
/// Walks a subtree depth-first, visiting the files of each directory before
/// its subdirectories, and saves every path accepted by the filter. Delivery
/// of notifications is synchronous and in subscription order; observers talk
/// back only through the writable flags on the event payloads, and the engine
/// reads those flags before moving on.
///
/// Session state carries over: the saved items and a cancellation requested
/// during one `search` survive into the next call on the same visitor. Build
/// a fresh visitor for a fresh walk.
pub struct FileSystemVisitor<C, F, S> {
    classifier: C,
    filter: F,
    sink: S,
    cancel_requested: bool,
    saved_items: Vec<String>,
    start_handlers: Vec<(SubscriptionId, StartHandler)>,
    finish_handlers: Vec<(SubscriptionId, FinishHandler)>,
    found_handlers: Vec<(SubscriptionId, FoundHandler)>,
    filtered_handlers: Vec<(SubscriptionId, FilteredHandler)>,
    next_id: u64,
}

impl<C, F, S> FileSystemVisitor<C, F, S>
where
    C: Classify,
    F: PathFilter,
    S: ItemSink,
{
    /// Create a new visitor from its three capabilities
    pub fn new(classifier: C, filter: F, sink: S) -> Self {
        Self {
            classifier,
            filter,
            sink,
            cancel_requested: false,
            saved_items: Vec::new(),
            start_handlers: Vec::new(),
            finish_handlers: Vec::new(),
            found_handlers: Vec::new(),
            filtered_handlers: Vec::new(),
            next_id: 0,
        }
    }

    /// Search files and directories under `root_path`
    ///
    /// Fails with [`VisitError::InvalidArgument`] for an empty or
    /// all-whitespace root before any notification is raised. Start fires
    /// next; a root that resolves to neither file nor directory then fails
    /// with [`VisitError::NotFound`] and Finish is skipped. Finish fires
    /// unconditionally for every walk that began, including a cancelled one.
    pub fn search(&mut self, root_path: &str) -> VisitResult<()> {
        if root_path.trim().is_empty() {
            return Err(VisitError::InvalidArgument(root_path.to_string()));
        }

        self.emit_start();

        match self.classifier.classify(Path::new(root_path)) {
            ItemKind::Directory => self.visit_directory(root_path)?,
            ItemKind::File => self.visit_file(root_path),
            ItemKind::Unknown => return Err(VisitError::NotFound(root_path.to_string())),
        }

        self.emit_finish();
        Ok(())
    }

    /// Number of saved items
    pub fn count(&self) -> usize {
        self.saved_items.len()
    }

    /// Saved item at `index`, failing with [`VisitError::OutOfRange`]
    /// outside `[0, count())`
    pub fn item_at(&self, index: usize) -> VisitResult<&str> {
        self.saved_items
            .get(index)
            .map(String::as_str)
            .ok_or(VisitError::OutOfRange {
                index,
                len: self.saved_items.len(),
            })
    }

    /// All saved items in visitation order
    pub fn items(&self) -> &[String] {
        &self.saved_items
    }

    /// Iterate over the saved items
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.saved_items.iter()
    }

    /// Subscribe to the Start notification
    pub fn on_start<H>(&mut self, handler: H) -> SubscriptionId
    where
        H: FnMut() + 'static,
    {
        let id = self.fresh_id();
        self.start_handlers.push((id, Box::new(handler)));
        id
    }

    /// Subscribe to the Finish notification; the handler receives the
    /// saved-item count at the end of the walk
    pub fn on_finish<H>(&mut self, handler: H) -> SubscriptionId
    where
        H: FnMut(usize) + 'static,
    {
        let id = self.fresh_id();
        self.finish_handlers.push((id, Box::new(handler)));
        id
    }

    /// Subscribe to the Found notification
    pub fn on_found<H>(&mut self, handler: H) -> SubscriptionId
    where
        H: FnMut(&mut FoundEvent) + 'static,
    {
        let id = self.fresh_id();
        self.found_handlers.push((id, Box::new(handler)));
        id
    }

    /// Subscribe to the Filtered notification
    pub fn on_filtered<H>(&mut self, handler: H) -> SubscriptionId
    where
        H: FnMut(&mut FilteredEvent) + 'static,
    {
        let id = self.fresh_id();
        self.filtered_handlers.push((id, Box::new(handler)));
        id
    }

    /// Remove a previously subscribed handler
    ///
    /// Returns true if a handler with the given id was found on any channel.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.start_handlers.len()
            + self.finish_handlers.len()
            + self.found_handlers.len()
            + self.filtered_handlers.len();

        self.start_handlers.retain(|(sub, _)| *sub != id);
        self.finish_handlers.retain(|(sub, _)| *sub != id);
        self.found_handlers.retain(|(sub, _)| *sub != id);
        self.filtered_handlers.retain(|(sub, _)| *sub != id);

        let after = self.start_handlers.len()
            + self.finish_handlers.len()
            + self.found_handlers.len()
            + self.filtered_handlers.len();

        after < before
    }

    fn fresh_id(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        id
    }

    fn emit_start(&mut self) {
        info!("search started");
        for (_, handler) in self.start_handlers.iter_mut() {
            handler();
        }
    }

    fn emit_finish(&mut self) {
        let count = self.saved_items.len();
        info!("search finished: saved {} files and directories", count);
        for (_, handler) in self.finish_handlers.iter_mut() {
            handler(count);
        }
    }

    /// Dispatch a Found event; returns true if an observer requested
    /// cancellation
    fn emit_found(&mut self, path: &str, kind: ItemKind) -> bool {
        debug!("found {}", path);
        let mut event = FoundEvent::new(path, kind);
        for (_, handler) in self.found_handlers.iter_mut() {
            handler(&mut event);
        }
        if event.cancel_requested {
            debug!("cancel requested at {}", path);
        }
        event.cancel_requested
    }

    /// Dispatch a Filtered event and hand back the observer decisions
    fn emit_filtered(&mut self, path: &str, kind: ItemKind) -> FilteredEvent {
        debug!("filtered {}", path);
        let mut event = FilteredEvent::new(path, kind);
        for (_, handler) in self.filtered_handlers.iter_mut() {
            handler(&mut event);
        }
        if event.cancel_requested {
            debug!("cancel requested at {}", path);
        }
        if event.exclude_item {
            debug!("excluding {} from results", path);
        }
        event
    }

    /// Visit one directory: the directory itself, then its files, then its
    /// subdirectories recursively.
    ///
    /// Each directory is visited exactly once via single-pass recursive
    /// descent into immediate children.
    fn visit_directory(&mut self, path: &str) -> VisitResult<()> {
        if self.cancel_requested {
            return Ok(());
        }

        if self.emit_found(path, ItemKind::Directory) {
            self.cancel_requested = true;
            return Ok(());
        }

        if self.filter.is_match(path) {
            let decision = self.emit_filtered(path, ItemKind::Directory);
            if decision.cancel_requested {
                self.cancel_requested = true;
                return Ok(());
            }
            if !decision.exclude_item {
                self.sink.save(path, &mut self.saved_items);
            }
        }

        // Immediate children only, in the filesystem's native order.
        let mut files = Vec::new();
        let mut directories = Vec::new();
        for entry in WalkDir::new(path).min_depth(1).max_depth(1) {
            let entry = entry?;
            let child = entry.path().to_string_lossy().into_owned();
            if entry.file_type().is_dir() {
                directories.push(child);
            } else if entry.file_type().is_file() {
                files.push(child);
            }
        }

        for file in &files {
            self.visit_file(file);
            if self.cancel_requested {
                return Ok(());
            }
        }

        for directory in &directories {
            self.visit_directory(directory)?;
            if self.cancel_requested {
                return Ok(());
            }
        }

        Ok(())
    }

    /// Visit one file
    fn visit_file(&mut self, path: &str) {
        if self.cancel_requested {
            return;
        }

        if self.emit_found(path, ItemKind::File) {
            self.cancel_requested = true;
            return;
        }

        if self.filter.is_match(path) {
            let decision = self.emit_filtered(path, ItemKind::File);
            if decision.cancel_requested {
                self.cancel_requested = true;
                return;
            }
            if !decision.exclude_item {
                self.sink.save(path, &mut self.saved_items);
            }
        }
    }
}

impl<'a, C, F, S> IntoIterator for &'a FileSystemVisitor<C, F, S> {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.saved_items.iter()
    }
}
