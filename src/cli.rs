//! Command line interface for the fs-visitor tool
//!
//! This module provides argument parsing and validation for the console
//! entry point.

use clap::Parser;

use crate::errors::{VisitError, VisitResult};
use crate::visitor::{GlobFilter, PathFilter, PredicateFilter, SubstringFilter};

/// Observable filesystem walker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root path to search (default: current directory)
    #[arg(default_value = ".")]
    pub root: String,

    /// Save only items whose name matches a glob pattern
    #[arg(short = 'n', long, conflicts_with = "contains")]
    pub name: Option<String>,

    /// Save only items whose path contains a substring
    #[arg(short = 'c', long)]
    pub contains: Option<String>,

    /// Match names and substrings case-insensitively
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Stop the walk after NUM items have passed the filter
    #[arg(long, value_name = "NUM")]
    pub cancel_after: Option<usize>,

    /// Drop every filtered item beyond NUM from the results
    #[arg(long, value_name = "NUM")]
    pub exclude_after: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// Validate command line arguments
    pub fn validate(&self) -> VisitResult<()> {
        if self.root.trim().is_empty() {
            return Err(VisitError::InvalidArgument(self.root.clone()));
        }

        if let Some(pattern) = &self.name {
            if let Err(e) = glob::Pattern::new(pattern) {
                return Err(VisitError::Pattern {
                    pattern: pattern.clone(),
                    message: e.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Build the path filter selected by the arguments
    ///
    /// Without `--name` or `--contains` every visited item passes.
    pub fn build_filter(&self) -> VisitResult<Box<dyn PathFilter>> {
        if let Some(pattern) = &self.name {
            let filter = if self.ignore_case {
                GlobFilter::new_ignore_case(pattern)?
            } else {
                GlobFilter::new(pattern)?
            };
            return Ok(Box::new(filter));
        }

        if let Some(needle) = &self.contains {
            let filter = if self.ignore_case {
                SubstringFilter::new_ignore_case(needle)
            } else {
                SubstringFilter::new(needle)
            };
            return Ok(Box::new(filter));
        }

        Ok(Box::new(PredicateFilter::new("matches everything", |_| true)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli_with_defaults() -> Cli {
        Cli {
            root: ".".to_string(),
            name: None,
            contains: None,
            ignore_case: false,
            cancel_after: None,
            exclude_after: None,
            debug: false,
        }
    }

    #[test]
    fn test_cli_validation() {
        let cli = Cli {
            name: Some("*.rs".to_string()),
            ..cli_with_defaults()
        };

        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_cli_empty_root() {
        let cli = Cli {
            root: " ".to_string(),
            ..cli_with_defaults()
        };

        assert!(matches!(
            cli.validate(),
            Err(VisitError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_cli_invalid_pattern() {
        let cli = Cli {
            name: Some("[".to_string()), // Invalid glob pattern
            ..cli_with_defaults()
        };

        assert!(matches!(cli.validate(), Err(VisitError::Pattern { .. })));
    }

    #[test]
    fn test_build_filter_glob() -> VisitResult<()> {
        let cli = Cli {
            name: Some("*.txt".to_string()),
            ..cli_with_defaults()
        };

        let filter = cli.build_filter()?;
        assert!(filter.is_match("/tmp/a.txt"));
        assert!(!filter.is_match("/tmp/a.rs"));

        Ok(())
    }

    #[test]
    fn test_build_filter_substring() -> VisitResult<()> {
        let cli = Cli {
            contains: Some("Debug".to_string()),
            ..cli_with_defaults()
        };

        let filter = cli.build_filter()?;
        assert!(filter.is_match("/tmp/Debug/a.dll"));
        assert!(!filter.is_match("/tmp/Release/a.dll"));

        Ok(())
    }

    #[test]
    fn test_build_filter_default_matches_everything() -> VisitResult<()> {
        let cli = cli_with_defaults();

        let filter = cli.build_filter()?;
        assert!(filter.is_match("/anything/at/all"));

        Ok(())
    }
}
