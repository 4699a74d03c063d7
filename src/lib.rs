//! Library for walking a filesystem subtree with observable lifecycle events
//!
//! This library provides a recursive, depth-first filesystem visitor that:
//! - collects every path accepted by a caller-supplied filter
//! - raises Start, Finish, Found and Filtered notifications synchronously
//! - lets observers cancel the walk or exclude single items via the event payload
//! - reports detailed errors for invalid or missing root paths
//!
//! ## Use cases
//!
//! - Collecting files of interest while reacting to each one as it is found
//! - Aborting expensive scans early once enough matches have been seen
//! - Auditing exactly which paths a walk touched, in order
//!
//! # Example
//!
//! Basic usage:
//! ```no_run
//! use fs_visitor::visitor::{CollectionSink, FileSystemVisitor, FsClassifier, GlobFilter};
//!
//! # fn main() -> fs_visitor::VisitResult<()> {
//! // Create the visitor from its three capabilities
//! let filter = GlobFilter::new("*.rs")?;
//! let mut visitor = FileSystemVisitor::new(FsClassifier::new(), filter, CollectionSink::new());
//!
//! // React to items as they are found; set `cancel_requested` to stop early
//! visitor.on_found(|event| {
//!     println!("found {}", event.path());
//! });
//!
//! // Run the walk
//! visitor.search(".")?;
//!
//! // Read the results
//! for item in visitor.iter() {
//!     println!("saved: {}", item);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! See the module docs for more.

pub mod cli;
pub mod errors;
pub mod visitor;

// Re-export main types for convenience
pub use errors::{VisitError, VisitResult};
pub use visitor::FileSystemVisitor;
