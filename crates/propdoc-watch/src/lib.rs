//! Watch mode for propdoc.
//!
//! Watches the components and examples directories and reruns the full
//! catalog generation whenever something changes.

pub mod runner;
pub mod watcher;

pub use runner::{run_passes, watch, WatchStats};
pub use watcher::{FileWatcher, WatchError, WatchEvent};
