pub mod directory;
mod watcher;

pub use directory::{is_likely_binary, read_directory, sniff, Sniff};
pub use watcher::DirectoryWatcher;
