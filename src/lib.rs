//! # i18n-usage
//!
//! `i18n_usage` walks a directory tree, reads every text file and collects the
//! i18n lookup keys referenced through calls such as `.t("key")`, `$t('key')`
//! or `T("key")`. The result maps each key to the files that use it, which is
//! what an audit for unused keys or a "where is this key used" search needs.
//!
//! Extraction is lexical. Matches inside comments count, and keys assembled at
//! runtime are not seen. Treat the output as a fast approximation.
//!
//! # Features
//!
//! - `parallel`: Enables parallel processing of files using Rayon.
//! - `streaming`: Enables [`KeyStream`], a per-file iterator API.
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use i18n_usage::{ErrorPolicy, ScanBuilder, scan};
//!
//! let options = ScanBuilder::new("./src")
//!     .ignore_dir("vendor")
//!     .error_policy(ErrorPolicy::Skip)
//!     .build();
//!
//! let result = scan(options).expect("Failed to scan directory");
//!
//! for (key, paths) in &result.keys {
//!     println!("{key}: used in {} place(s)", paths.len());
//! }
//! println!("Count: {}", result.keys.len());
//! ```

mod binary;
mod engine;
mod error;
mod extract;
mod options;
pub mod output;
mod types;
mod walk;

#[cfg(feature = "streaming")]
pub use engine::KeyStream;
pub use engine::{scan, scan_file, used_keys};
pub use error::UsageError;
pub use extract::extract_keys;
pub use options::{BinaryDetection, DEFAULT_IGNORED_DIRS, ErrorPolicy, ScanBuilder, ScanOptions};
pub use types::{
    FileKeys, FileOutcome, FileSkip, KeyMap, ScanResult, ScanStats, SkippedEntry,
};
