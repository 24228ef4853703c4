use crate::entry::FileEntry;
use crate::style;
use std::fs;
use std::io::Read;
use std::path::Path;

pub fn read_directory(path: &Path, show_hidden: bool) -> Result<Vec<FileEntry>, std::io::Error> {
    let mut entries = Vec::new();
    let read_dir = fs::read_dir(path)?;

    for entry in read_dir.flatten() {
        let path = entry.path();
        if !show_hidden {
            if let Some(name) = path.file_name() {
                if name.to_string_lossy().starts_with('.') {
                    continue;
                }
            }
        }
        if let Some(file_entry) = FileEntry::from_path(path) {
            entries.push(file_entry);
        }
    }
    entries.sort_by(|a, b| {
        if a.is_dir != b.is_dir {
            return b.is_dir.cmp(&a.is_dir);
        }
        a.name.to_lowercase().cmp(&b.name.to_lowercase())
    });
    Ok(entries)
}

/// NUL byte count in the head of a file
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sniff {
    pub read: usize,
    pub nul: usize,
}

impl Sniff {
    /// More than 1% NUL bytes (and at least two) means binary
    pub fn is_binary(&self) -> bool {
        self.read > 0 && self.nul > (self.read / 100).max(1)
    }
}

/// Count NUL bytes in the first `BINARY_SNIFF_BYTES` of a file.
pub fn sniff(path: &Path) -> Option<Sniff> {
    let mut buf = [0u8; style::BINARY_SNIFF_BYTES];
    let mut f = fs::File::open(path).ok()?;
    let read = f.read(&mut buf).ok()?;
    let nul = buf[..read].iter().filter(|&&b| b == 0).count();
    Some(Sniff { read, nul })
}

/// Guess whether a file is binary from the density of NUL bytes in its head.
///
/// Unreadable files are not considered binary; the text view shows them empty.
pub fn is_likely_binary(path: &Path) -> bool {
    sniff(path).map(|s| s.is_binary()).unwrap_or(false)
}
