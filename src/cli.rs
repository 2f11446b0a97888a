use clap::Parser;
use std::collections::HashSet;
use std::path::PathBuf;

/// Scans a directory for images and outputs a JSON file.
#[derive(Parser, Debug)]
#[command(name = "photo_index", version, about)]
pub struct Cli {
    /// Path of the directory to scan
    #[arg(short, long, value_name = "DIR")]
    pub scan: PathBuf,

    /// Name or path of the output JSON file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Directories to exclude, comma-separated
    #[arg(long, value_name = "LIST")]
    pub exclude: Option<String>,

    /// Additional settings file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not read image dimensions
    #[arg(long)]
    pub no_dimensions: bool,

    /// Print a summary and the list of found images
    #[arg(long)]
    pub list: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

/// Splits a comma-separated list, trimming items and dropping blanks.
pub fn parse_exclude_list(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Expands a leading `~` to the user's home directory.
pub fn expand_home(path: PathBuf) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path;
    };
    match std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE")) {
        Some(home) => PathBuf::from(home).join(rest),
        None => path,
    }
}
