// Plain text preview handler backed by the encoding-aware text view

use crate::entry::FileEntry;
use crate::io::is_likely_binary;
use crate::view::preview::handler::{PreviewContext, PreviewHandler};
use crate::view::TextView;
use eframe::egui;
use std::cell::RefCell;
use std::path::PathBuf;
use std::time::SystemTime;

// Binary check of the last file asked about
struct BinaryVerdict {
    path: PathBuf,
    modified: SystemTime,
    binary: bool,
}

pub struct TextPreviewHandler {
    view: TextView,
    // mtime of the file the view currently shows
    loaded: Option<SystemTime>,
    // can_preview runs every frame; sniff each (path, mtime) once
    verdict: RefCell<Option<BinaryVerdict>>,
}

impl TextPreviewHandler {
    pub fn new() -> Self {
        Self {
            view: TextView::new(),
            loaded: None,
            verdict: RefCell::new(None),
        }
    }

    fn is_binary(&self, entry: &FileEntry) -> bool {
        let mut verdict = self.verdict.borrow_mut();
        if let Some(v) = verdict.as_ref() {
            if v.path == entry.path && v.modified == entry.modified {
                return v.binary;
            }
        }
        let binary = is_likely_binary(&entry.path);
        *verdict = Some(BinaryVerdict {
            path: entry.path.clone(),
            modified: entry.modified,
            binary,
        });
        binary
    }

    /// Point the view at `entry`, re-reading only when the file changed
    fn sync(&mut self, entry: &FileEntry) {
        let same_file = self.view.source() == Some(entry.path.as_path());
        if !same_file || self.loaded != Some(entry.modified) {
            self.view.set_source(&entry.path);
            self.loaded = Some(entry.modified);
        }
    }
}

impl PreviewHandler for TextPreviewHandler {
    fn name(&self) -> &str {
        "text"
    }

    fn can_preview(&self, entry: &FileEntry) -> bool {
        !entry.is_dir && !self.is_binary(entry)
    }

    fn render(
        &mut self,
        ui: &mut egui::Ui,
        entry: &FileEntry,
        context: &PreviewContext,
    ) -> Result<(), String> {
        self.sync(entry);
        self.view.set_font_size(context.font_size);
        ui.add(&self.view);
        Ok(())
    }

    fn priority(&self) -> i32 {
        90 // Generic text handler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;

    #[test]
    fn test_reloads_only_on_change() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("a.txt");
        fs::write(&path, "one").expect("write");
        let mut entry = FileEntry::from_path(path.clone()).expect("entry");

        let mut handler = TextPreviewHandler::new();
        handler.sync(&entry);
        assert_eq!(handler.view.text(), "one");

        // Same path and mtime: cached text is kept
        fs::write(&path, "two").expect("write");
        handler.sync(&entry);
        assert_eq!(handler.view.text(), "one");

        entry.modified += Duration::from_secs(1);
        handler.sync(&entry);
        assert_eq!(handler.view.text(), "two");
    }

    #[test]
    fn test_accepts_text_rejects_dirs_and_binaries() {
        let dir = tempfile::tempdir().expect("tempdir");
        let text = dir.path().join("t.txt");
        let blob = dir.path().join("b.bin");
        fs::write(&text, "hi").expect("write");
        fs::write(&blob, [0u8; 64]).expect("write");

        let handler = TextPreviewHandler::new();
        let dir_entry = FileEntry::from_path(dir.path().to_path_buf()).expect("entry");
        assert!(handler.can_preview(&FileEntry::from_path(text).expect("entry")));
        assert!(!handler.can_preview(&FileEntry::from_path(blob).expect("entry")));
        assert!(!handler.can_preview(&dir_entry));
    }

    #[test]
    fn test_binary_verdict_cached_per_mtime() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("flip.dat");
        fs::write(&path, "plain text").expect("write");
        let mut entry = FileEntry::from_path(path.clone()).expect("entry");

        let handler = TextPreviewHandler::new();
        assert!(handler.can_preview(&entry));

        // Contents change but the entry still has the old mtime: no re-sniff
        fs::write(&path, [0u8; 64]).expect("write");
        assert!(handler.can_preview(&entry));

        entry.modified += Duration::from_secs(1);
        assert!(!handler.can_preview(&entry));
    }
}
