//! Path filtering functionality
//!
//! This module provides filters for deciding which visited paths get saved.

use glob::Pattern;

use crate::errors::{VisitError, VisitResult};

/// Trait for path filters
pub trait PathFilter {
    /// Check if the path matches the filter
    fn is_match(&self, path: &str) -> bool;

    /// Get the filter description
    fn description(&self) -> String;
}

impl<T: PathFilter + ?Sized> PathFilter for Box<T> {
    fn is_match(&self, path: &str) -> bool {
        (**self).is_match(path)
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

/// Filter wrapping an arbitrary boolean predicate over the path string
pub struct PredicateFilter {
    predicate: Box<dyn Fn(&str) -> bool>,
    description: String,
}

impl PredicateFilter {
    /// Create a new PredicateFilter from a closure
    pub fn new<F>(description: &str, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + 'static,
    {
        Self {
            predicate: Box::new(predicate),
            description: description.to_string(),
        }
    }
}

impl PathFilter for PredicateFilter {
    fn is_match(&self, path: &str) -> bool {
        (self.predicate)(path)
    }

    fn description(&self) -> String {
        self.description.clone()
    }
}

/// Filter matching paths that contain a substring
pub struct SubstringFilter {
    needle: String,
    ignore_case: bool,
}

impl SubstringFilter {
    /// Create a new SubstringFilter with the given needle
    pub fn new(needle: &str) -> Self {
        Self {
            needle: needle.to_string(),
            ignore_case: false,
        }
    }

    /// Create a new case-insensitive SubstringFilter
    pub fn new_ignore_case(needle: &str) -> Self {
        Self {
            needle: needle.to_lowercase(),
            ignore_case: true,
        }
    }
}

impl PathFilter for SubstringFilter {
    fn is_match(&self, path: &str) -> bool {
        if self.ignore_case {
            path.to_lowercase().contains(&self.needle)
        } else {
            path.contains(&self.needle)
        }
    }

    fn description(&self) -> String {
        if self.ignore_case {
            format!("path (ignore case) contains '{}'", self.needle)
        } else {
            format!("path contains '{}'", self.needle)
        }
    }
}

/// Filter matching the final path component against a glob pattern
pub struct GlobFilter {
    pattern: Pattern,
    original_pattern: String,
    ignore_case: bool,
}

impl GlobFilter {
    /// Create a new GlobFilter with the given pattern
    pub fn new(pattern: &str) -> VisitResult<Self> {
        let compiled_pattern = Pattern::new(pattern).map_err(|e| VisitError::Pattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            pattern: compiled_pattern,
            original_pattern: pattern.to_string(),
            ignore_case: false,
        })
    }

    /// Create a new case-insensitive GlobFilter
    pub fn new_ignore_case(pattern: &str) -> VisitResult<Self> {
        let mut filter = Self::new(pattern)?;
        filter.ignore_case = true;
        Ok(filter)
    }

    fn file_name(path: &str) -> &str {
        std::path::Path::new(path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(path)
    }
}

impl PathFilter for GlobFilter {
    fn is_match(&self, path: &str) -> bool {
        let name = Self::file_name(path);
        if self.ignore_case {
            let name_lower = name.to_lowercase();
            let pattern_lower = self.original_pattern.to_lowercase();
            Pattern::new(&pattern_lower)
                .map(|p| p.matches(&name_lower))
                .unwrap_or(false)
        } else {
            self.pattern.matches(name)
        }
    }

    fn description(&self) -> String {
        if self.ignore_case {
            format!("name (ignore case) matches '{}'", self.original_pattern)
        } else {
            format!("name matches '{}'", self.original_pattern)
        }
    }
}
