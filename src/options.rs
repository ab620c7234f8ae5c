use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::PathBuf;

/// Directory basenames pruned when the caller does not supply its own set.
pub const DEFAULT_IGNORED_DIRS: &[&str] = &[
    "node_modules",
    "bower_components",
    "dist",
    "build",
    "lib",
    "libs",
    "assets",
    "assets-dev",
    "assets-prod",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryDetection {
    /// A NUL byte anywhere in the file marks it as binary.
    Simple,
    /// `content_inspector` on the first 4 KiB.
    Accurate,
    None,
}

/// What to do when a directory cannot be listed or a file cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorPolicy {
    Abort,
    Skip,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanOptions {
    pub root: PathBuf,
    pub ignored_dirs: BTreeSet<String>,
    pub ignore_patterns: Vec<String>,
    pub binary_detection: BinaryDetection,
    pub error_policy: ErrorPolicy,
    pub follow_links: bool,
    pub include_hidden: bool,
    pub respect_gitignore: bool,
    pub max_depth: Option<usize>,
    pub file_size_limit: Option<u64>,
    pub strict_utf8: bool,
    pub sort_entries: bool,
}
impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            ignored_dirs: DEFAULT_IGNORED_DIRS.iter().map(|s| s.to_string()).collect(),
            ignore_patterns: Vec::new(),
            binary_detection: BinaryDetection::Simple,
            error_policy: ErrorPolicy::Abort,
            follow_links: true,
            include_hidden: true,
            respect_gitignore: false,
            max_depth: None,
            file_size_limit: None,
            strict_utf8: false,
            sort_entries: true,
        }
    }
}
/// Basename membership test; names that are not valid UTF-8 never match.
pub(crate) fn is_ignored_name(ignored_dirs: &BTreeSet<String>, name: &OsStr) -> bool {
    name.to_str().is_some_and(|name| ignored_dirs.contains(name))
}
#[derive(Debug, Default)]
pub struct ScanBuilder {
    options: ScanOptions,
}
impl ScanBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: ScanOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    /// Replaces the whole ignore set.
    pub fn ignored_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.ignored_dirs = names.into_iter().map(Into::into).collect();
        self
    }
    pub fn ignore_dir(mut self, name: impl Into<String>) -> Self {
        self.options.ignored_dirs.insert(name.into());
        self
    }
    pub fn no_default_ignores(mut self) -> Self {
        self.options.ignored_dirs.clear();
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.options.error_policy = policy;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.options.include_hidden = yes;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn file_size_limit(mut self, limit: Option<u64>) -> Self {
        self.options.file_size_limit = limit;
        self
    }
    pub fn strict_utf8(mut self, yes: bool) -> Self {
        self.options.strict_utf8 = yes;
        self
    }
    pub fn sort_entries(mut self, yes: bool) -> Self {
        self.options.sort_entries = yes;
        self
    }
    pub fn build(self) -> ScanOptions {
        self.options
    }
}
