//! Command-line interface for i18n-usage.
//!
//! Scans one directory and prints every i18n key found, the files that use
//! each key, and the key count.

use clap::{Parser, ValueEnum};
use i18n_usage::{
    BinaryDetection, ErrorPolicy, ScanBuilder, ScanOptions, ScanResult, output, scan,
};
use std::path::PathBuf;
use std::process::exit;

/// i18n-usage — find where translation keys are used
#[derive(Parser)]
#[command(name = "i18n-usage", version, about, long_about = None)]
struct Cli {
    /// Directory to scan
    path: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Pretty JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Extra directory name to skip at any depth (can be repeated)
    #[arg(short = 'I', long = "ignore-dir")]
    ignore_dirs: Vec<String>,

    /// Do not skip node_modules, dist, build and the other built-in names
    #[arg(long)]
    no_default_ignores: bool,

    /// Glob pattern for paths to skip (can be repeated)
    #[arg(short = 'x', long = "exclude")]
    exclude: Vec<String>,

    /// Binary detection strategy
    #[arg(long, default_value = "simple", value_parser = parse_binary_detection)]
    binary_detection: BinaryDetection,

    /// What to do with unreadable directories and files
    #[arg(long, value_enum, default_value_t = OnError::Abort)]
    on_error: OnError,

    /// Do not follow symlinks
    #[arg(long)]
    no_follow_links: bool,

    /// Skip hidden files and directories
    #[arg(long)]
    no_hidden: bool,

    /// Honor .gitignore files, inside a git repository or not
    #[arg(long)]
    gitignore: bool,

    /// Max depth (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Skip files larger than this many bytes
    #[arg(long)]
    file_size_limit: Option<u64>,

    /// Treat invalid UTF-8 as a read error instead of decoding lossily
    #[arg(long)]
    strict_utf8: bool,

    /// Verbose logging (repeat for more)
    #[cfg(feature = "logging")]
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Keys,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OnError {
    Abort,
    Skip,
}

/// Parse string into BinaryDetection enum.
fn parse_binary_detection(s: &str) -> Result<BinaryDetection, String> {
    match s {
        "simple" => Ok(BinaryDetection::Simple),
        "accurate" => Ok(BinaryDetection::Accurate),
        "none" => Ok(BinaryDetection::None),
        _ => Err(format!("invalid binary detection method: {}", s)),
    }
}

impl Cli {
    fn into_options(self) -> (ScanOptions, OutputFormat, bool) {
        let mut builder = ScanBuilder::new(self.path);
        if self.no_default_ignores {
            builder = builder.no_default_ignores();
        }
        for name in self.ignore_dirs {
            builder = builder.ignore_dir(name);
        }
        builder = builder
            .ignore_patterns(self.exclude)
            .binary_detection(self.binary_detection)
            .error_policy(match self.on_error {
                OnError::Abort => ErrorPolicy::Abort,
                OnError::Skip => ErrorPolicy::Skip,
            })
            .follow_links(!self.no_follow_links)
            .include_hidden(!self.no_hidden)
            .respect_gitignore(self.gitignore)
            .file_size_limit(self.file_size_limit)
            .strict_utf8(self.strict_utf8);

        builder = if let Some(depth) = self.max_depth {
            builder.max_depth(depth)
        } else {
            builder.no_limit_depth()
        };

        (builder.build(), self.format, self.pretty)
    }
}

#[cfg(feature = "logging")]
fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    #[cfg(feature = "logging")]
    init_logging(cli.verbose);
    let (options, format, pretty) = cli.into_options();

    if !options.root.is_dir() {
        eprintln!("path not found: {}", options.root.display());
        exit(1);
    }
    if format == OutputFormat::Text {
        println!("Working on: {}", options.root.display());
    }

    match scan(options) {
        Ok(result) => output_result(&result, format, pretty),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn output_result(result: &ScanResult, format: OutputFormat, pretty: bool) {
    let format = match format {
        OutputFormat::Text => output::OutputFormat::Text,
        OutputFormat::Json => output::OutputFormat::Json,
        OutputFormat::Keys => output::OutputFormat::Keys,
    };
    match output::format_result(result, format, pretty) {
        Ok(out) => print!("{}", ensure_newline(out)),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn ensure_newline(mut out: String) -> String {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
