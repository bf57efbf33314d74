//! # CLI Module
//!
//! This module implements the user-facing commands of the playlist
//! rebuilder. It coordinates the Spotify integration layer, the pure
//! rebalancing core, and the artwork pipeline, and it owns all console
//! feedback and the fail-fast error presentation.
//!
//! ## Commands
//!
//! - [`update`] - Runs the complete rebuild sequence once: refresh the
//!   access token, fetch the source and complement playlists, rebalance,
//!   overwrite the target playlist, refresh its metadata, and upload the
//!   composited cover.
//!
//! ## Execution Model
//!
//! The tool is a one-shot invocation: an external scheduler (cron, a cloud
//! event trigger, ...) runs the binary and the process exits when the
//! sequence finishes or a step fails. Each external call is awaited before
//! the next begins; nothing is persisted between runs, so a failed run
//! simply leaves the previous playlist state in place until the next
//! trigger.
//!
//! ## Error Handling Philosophy
//!
//! Failures terminate the invocation through the `error!` macro with a
//! descriptive message and exit code 1. There is no retry and no partial
//! recovery, with one deliberate exception: a missing artist image only
//! skips the cover step with a warning, because the playlist contents and
//! metadata were already updated successfully at that point.

mod update;

pub use update::update;
