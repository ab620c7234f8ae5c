use crate::error::UsageError;
use crate::options::{ErrorPolicy, ScanOptions, is_ignored_name};
use crate::types::SkippedEntry;
use ignore::WalkBuilder;
use std::io;
use std::path::PathBuf;
#[cfg(feature = "logging")]
use tracing;

/// Regular files reachable from the root, in visit order.
#[derive(Debug, Default)]
pub(crate) struct WalkOutcome {
    pub files: Vec<PathBuf>,
    pub skipped: Vec<SkippedEntry>,
}

enum WalkFailure {
    /// The entry disappeared between listing and stat, or is a dangling link.
    Vanished,
    Loop(SkippedEntry),
    Other(SkippedEntry),
}

pub(crate) struct Walker {
    /// `None` when the root itself is an ignored directory.
    inner: Option<ignore::Walk>,
    policy: ErrorPolicy,
}
impl Walker {
    pub(crate) fn new(options: &ScanOptions) -> Result<Self, UsageError> {
        if options
            .root
            .file_name()
            .is_some_and(|name| is_ignored_name(&options.ignored_dirs, name))
        {
            #[cfg(feature = "logging")]
            tracing::debug!("Root directory is ignored: {}", options.root.display());
            return Ok(Self {
                inner: None,
                policy: options.error_policy,
            });
        }
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .git_ignore(options.respect_gitignore)
            .git_exclude(options.respect_gitignore)
            .git_global(options.respect_gitignore)
            .parents(options.respect_gitignore)
            .require_git(false)
            .hidden(!options.include_hidden)
            .max_depth(options.max_depth)
            .follow_links(options.follow_links)
            .ignore(false);
        if options.sort_entries {
            builder.sort_by_file_name(|a, b| a.cmp(b));
        }
        let matcher = if !options.ignore_patterns.is_empty() {
            let mut glob_builder = globset::GlobSetBuilder::new();
            for pattern in &options.ignore_patterns {
                let glob = globset::Glob::new(pattern).map_err(|source| UsageError::Pattern {
                    pattern: pattern.clone(),
                    source,
                })?;
                glob_builder.add(glob);
            }
            Some(
                glob_builder
                    .build()
                    .map_err(|source| UsageError::Pattern {
                        pattern: options.ignore_patterns.join(", "),
                        source,
                    })?,
            )
        } else {
            None
        };
        let ignored_dirs = options.ignored_dirs.clone();
        builder.filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            if is_dir && is_ignored_name(&ignored_dirs, entry.file_name()) {
                #[cfg(feature = "logging")]
                tracing::debug!("Pruning ignored directory: {}", entry.path().display());
                return false;
            }
            !matcher
                .as_ref()
                .is_some_and(|matcher| matcher.is_match(entry.path()))
        });
        Ok(Self {
            inner: Some(builder.build()),
            policy: options.error_policy,
        })
    }
    /// Lazily yields files; errors that the policy tolerates come back as
    /// `Ok(Err(skipped))`.
    pub(crate) fn into_iter(
        self,
    ) -> impl Iterator<Item = Result<Result<PathBuf, SkippedEntry>, UsageError>> {
        let policy = self.policy;
        self.inner.into_iter().flatten().filter_map(move |result| match result {
            Ok(entry) => entry
                .file_type()
                .is_some_and(|ft| ft.is_file())
                .then(|| Ok(Ok(entry.into_path()))),
            Err(err) => match classify(&err) {
                WalkFailure::Vanished => None,
                WalkFailure::Loop(skipped) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("Skipping symlink loop: {}", skipped.reason);
                    Some(Ok(Err(skipped)))
                }
                WalkFailure::Other(skipped) => match policy {
                    ErrorPolicy::Abort => Some(Err(UsageError::Walk(skipped.reason))),
                    ErrorPolicy::Skip => {
                        #[cfg(feature = "logging")]
                        tracing::warn!("Skipping unreadable entry: {}", skipped.reason);
                        Some(Ok(Err(skipped)))
                    }
                },
            },
        })
    }
    pub(crate) fn collect_files(self) -> Result<WalkOutcome, UsageError> {
        let mut outcome = WalkOutcome::default();
        for item in self.into_iter() {
            match item? {
                Ok(path) => outcome.files.push(path),
                Err(skipped) => outcome.skipped.push(skipped),
            }
        }
        Ok(outcome)
    }
}

fn classify(err: &ignore::Error) -> WalkFailure {
    fn path_of(err: &ignore::Error) -> Option<PathBuf> {
        match err {
            ignore::Error::WithPath { path, .. } => Some(path.clone()),
            ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
                path_of(err)
            }
            ignore::Error::Loop { child, .. } => Some(child.clone()),
            _ => None,
        }
    }
    fn is_loop(err: &ignore::Error) -> bool {
        match err {
            ignore::Error::Loop { .. } => true,
            ignore::Error::WithPath { err, .. }
            | ignore::Error::WithDepth { err, .. }
            | ignore::Error::WithLineNumber { err, .. } => is_loop(err),
            _ => false,
        }
    }
    let path = path_of(err);
    // walkdir's io errors already embed the path; keep it only once.
    let reason = match (&path, err.io_error()) {
        (Some(path), Some(io_err)) => format!("{}: {}", path.display(), io_err.kind()),
        _ => err.to_string(),
    };
    let skipped = SkippedEntry { path, reason };
    if is_loop(err) {
        return WalkFailure::Loop(skipped);
    }
    match err.io_error().map(io::Error::kind) {
        Some(io::ErrorKind::NotFound) => WalkFailure::Vanished,
        _ => WalkFailure::Other(skipped),
    }
}
