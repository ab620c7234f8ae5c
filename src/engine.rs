use crate::binary::is_binary;
use crate::error::UsageError;
use crate::extract::extract_keys;
use crate::options::{ErrorPolicy, ScanOptions};
use crate::types::{FileKeys, FileOutcome, FileSkip, KeyMap, ScanResult, SkippedEntry};
use crate::walk::Walker;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

fn check_root(root: &Path) -> Result<(), UsageError> {
    let metadata = match fs::metadata(root) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(UsageError::NotFound(root.to_path_buf()));
        }
        Err(e) => return Err(UsageError::io(root, e)),
    };
    if !metadata.is_dir() {
        return Err(UsageError::NotADirectory(root.to_path_buf()));
    }
    Ok(())
}

/// Reads one file and extracts its keys.
///
/// This is a pure per-file step: it touches no shared state, so callers can
/// run it in any order and merge the results afterwards.
pub fn scan_file(path: &Path, options: &ScanOptions) -> Result<FileOutcome, UsageError> {
    if let Some(limit) = options.file_size_limit {
        let metadata = fs::metadata(path).map_err(|e| UsageError::io(path, e))?;
        if metadata.len() > limit {
            #[cfg(feature = "logging")]
            tracing::debug!(
                "File too large ({} > {}), skipping: {}",
                metadata.len(),
                limit,
                path.display()
            );
            return Ok(FileOutcome::Skipped(FileSkip::TooLarge));
        }
    }
    let bytes = fs::read(path).map_err(|e| UsageError::io(path, e))?;
    if is_binary(&bytes, options.binary_detection) {
        #[cfg(feature = "logging")]
        tracing::debug!("Binary file detected: {}", path.display());
        return Ok(FileOutcome::Skipped(FileSkip::Binary));
    }
    let keys = if options.strict_utf8 {
        let content =
            std::str::from_utf8(&bytes).map_err(|_| UsageError::Decode(path.to_path_buf()))?;
        extract_keys(content)
    } else {
        extract_keys(&String::from_utf8_lossy(&bytes))
    };
    Ok(FileOutcome::Scanned(FileKeys {
        path: path.to_path_buf(),
        keys,
    }))
}

/// Walks `options.root` and maps every key found to the files using it.
pub fn scan(options: ScanOptions) -> Result<ScanResult, UsageError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting key scan with root: {}", options.root.display());
    check_root(&options.root)?;
    let walk = Walker::new(&options)?.collect_files()?;
    #[cfg(not(feature = "parallel"))]
    let outcomes = process_files(&walk.files, &options);
    #[cfg(feature = "parallel")]
    let outcomes = process_files_parallel(&walk.files, &options);
    let mut result = ScanResult {
        skipped: walk.skipped,
        ..Default::default()
    };
    for (path, outcome) in walk.files.iter().zip(outcomes) {
        result.stats.files_visited += 1;
        match outcome {
            Ok(FileOutcome::Scanned(file)) => {
                result.stats.files_scanned += 1;
                result.keys.record(&file.path, file.keys);
            }
            Ok(FileOutcome::Skipped(FileSkip::Binary)) => result.stats.binary_files += 1,
            Ok(FileOutcome::Skipped(FileSkip::TooLarge)) => result.stats.oversized_files += 1,
            Err(e) => match options.error_policy {
                ErrorPolicy::Abort => return Err(e),
                ErrorPolicy::Skip => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("Skipping {}: {}", path.display(), e);
                    result.skipped.push(SkippedEntry {
                        path: Some(path.clone()),
                        reason: e.to_string(),
                    });
                }
            },
        }
    }
    Ok(result)
}

/// Returns only the key map of [`scan`].
pub fn used_keys(options: ScanOptions) -> Result<KeyMap, UsageError> {
    scan(options).map(|result| result.keys)
}

#[cfg(not(feature = "parallel"))]
fn process_files(
    paths: &[PathBuf],
    options: &ScanOptions,
) -> Vec<Result<FileOutcome, UsageError>> {
    let mut outcomes = Vec::with_capacity(paths.len());
    for path in paths {
        let outcome = scan_file(path, options);
        let failed = outcome.is_err();
        outcomes.push(outcome);
        if failed && options.error_policy == ErrorPolicy::Abort {
            break;
        }
    }
    outcomes
}

// Results come back in input order, so merging them afterwards reproduces
// the sequential map exactly.
#[cfg(feature = "parallel")]
fn process_files_parallel(
    paths: &[PathBuf],
    options: &ScanOptions,
) -> Vec<Result<FileOutcome, UsageError>> {
    paths
        .par_iter()
        .map(|path| scan_file(path, options))
        .collect()
}

#[cfg(feature = "streaming")]
pub struct KeyStream {
    path_iter: Box<dyn Iterator<Item = Result<Result<PathBuf, SkippedEntry>, UsageError>> + Send>,
    options: ScanOptions,
}
#[cfg(feature = "streaming")]
impl KeyStream {
    pub fn new(options: ScanOptions) -> Result<Self, UsageError> {
        check_root(&options.root)?;
        let path_iter = Box::new(Walker::new(&options)?.into_iter());
        Ok(Self { path_iter, options })
    }
}
/// Yields the keys of each scanned file in walk order. Binary, oversized and
/// skipped entries produce no item; errors are yielded according to the
/// error policy.
#[cfg(feature = "streaming")]
impl Iterator for KeyStream {
    type Item = Result<FileKeys, UsageError>;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let path = match self.path_iter.next()? {
                Ok(Ok(path)) => path,
                Ok(Err(_skipped)) => continue,
                Err(e) => return Some(Err(e)),
            };
            match scan_file(&path, &self.options) {
                Ok(FileOutcome::Scanned(file)) => return Some(Ok(file)),
                Ok(FileOutcome::Skipped(_)) => continue,
                Err(e) if self.options.error_policy == ErrorPolicy::Skip => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("Skipping {}: {}", path.display(), e);
                    #[cfg(not(feature = "logging"))]
                    let _ = e;
                    continue;
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
