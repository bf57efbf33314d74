//! Contrarian Top 50 Playlist Rebuilder
//!
//! This library rewrites a target Spotify playlist from a source "Top 50"
//! playlist: the single most-frequent artist is thinned out to one
//! representative track, the freed slots are backfilled from a complement
//! playlist, and the target playlist's name, description, and cover artwork
//! are refreshed to match.
//!
//! # Modules
//!
//! - `artwork` - Cover art download, compositing, and JPEG/base64 encoding
//! - `cli` - Command-line interface implementations
//! - `config` - Immutable runtime configuration read from the environment
//! - `rebalance` - The pure playlist-rebalancing core
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Metadata templates and timestamp formatting
//!
//! # Example
//!
//! ```
//! use gyakubari::{cli, config};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = config::Config::from_env().expect("incomplete configuration");
//!     cli::update(&config).await;
//! }
//! ```

pub mod artwork;
pub mod cli;
pub mod config;
pub mod rebalance;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error trait object with Send + Sync bounds so it
/// composes with async code throughout the crate.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Used for general status updates while the update sequence runs.
///
/// # Example
///
/// ```
/// info!("Fetching source playlist...");
/// info!("Keeping {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Used to confirm that an external write (playlist items, metadata, cover)
/// completed successfully.
///
/// # Example
///
/// ```
/// success!("Playlist updated");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// The update sequence is fail-fast: any failing external call terminates the
/// invocation with exit code 1 and no retry. This macro is the single place
/// that implements that policy.
///
/// # Example
///
/// ```
/// error!("Failed to refresh access token: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable oddities that should not abort the run, such as a
/// playlist entry without track data or an artist without cover images.
///
/// # Example
///
/// ```
/// warning!("Artist has no images, skipping cover update");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
