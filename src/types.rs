use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::path::{Path, PathBuf};

/// Mapping from an i18n key to every file that references it.
///
/// Paths keep first-seen order and a path is appended once per match, so a
/// file calling `t('a')` twice appears twice under `a`. Key order carries no
/// meaning; the map is ordered only so that output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyMap(BTreeMap<String, Vec<PathBuf>>);

impl KeyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `path` under each key, in order. An empty `keys` adds nothing.
    pub fn record<I>(&mut self, path: &Path, keys: I)
    where
        I: IntoIterator<Item = String>,
    {
        for key in keys {
            self.0.entry(key).or_default().push(path.to_path_buf());
        }
    }

    /// Appends every path list of `other` after the ones already held.
    pub fn merge(&mut self, other: KeyMap) {
        for (key, mut paths) in other.0 {
            self.0.entry(key).or_default().append(&mut paths);
        }
    }

    pub fn get(&self, key: &str) -> Option<&[PathBuf]> {
        self.0.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<PathBuf>> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a KeyMap {
    type Item = (&'a String, &'a Vec<PathBuf>);
    type IntoIter = btree_map::Iter<'a, String, Vec<PathBuf>>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Keys found in a single file, in the order they occur.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileKeys {
    pub path: PathBuf,
    pub keys: Vec<String>,
}

/// Why a visited file contributed no keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileSkip {
    Binary,
    TooLarge,
}

/// Outcome of scanning one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Scanned(FileKeys),
    Skipped(FileSkip),
}

/// An entry that was left out under [`ErrorPolicy::Skip`](crate::ErrorPolicy::Skip)
/// or because it closed a symlink loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Regular files handed to the extractor.
    pub files_visited: usize,
    /// Files whose content was searched for keys.
    pub files_scanned: usize,
    pub binary_files: usize,
    pub oversized_files: usize,
}

/// The complete result of a scan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanResult {
    pub keys: KeyMap,
    pub stats: ScanStats,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedEntry>,
}
