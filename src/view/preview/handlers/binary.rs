// Notice shown for files the text view declines

use crate::entry::FileEntry;
use crate::io::{sniff, Sniff};
use crate::style;
use crate::view::preview::handler::{PreviewContext, PreviewHandler};
use eframe::egui;
use std::path::PathBuf;
use std::time::SystemTime;

pub struct BinaryPreviewHandler {
    // (path, mtime, sniff) of the entry last rendered
    sniffed: Option<(PathBuf, SystemTime, Option<Sniff>)>,
}

impl BinaryPreviewHandler {
    pub fn new() -> Self {
        Self { sniffed: None }
    }

    fn sniff_cached(&mut self, entry: &FileEntry) -> Option<Sniff> {
        if let Some((path, modified, result)) = &self.sniffed {
            if *path == entry.path && *modified == entry.modified {
                return *result;
            }
        }
        let result = sniff(&entry.path);
        self.sniffed = Some((entry.path.clone(), entry.modified, result));
        result
    }
}

/// Why the file is not shown as text
pub fn describe(result: Option<Sniff>) -> String {
    match result {
        Some(s) if s.is_binary() => format!(
            "{} of the first {} bytes are NUL; not shown as text",
            s.nul, s.read
        ),
        Some(_) => "Text preview is disabled".to_string(),
        None => "File could not be read".to_string(),
    }
}

impl PreviewHandler for BinaryPreviewHandler {
    fn name(&self) -> &str {
        "binary"
    }

    fn can_preview(&self, entry: &FileEntry) -> bool {
        !entry.is_dir
    }

    fn render(
        &mut self,
        ui: &mut egui::Ui,
        entry: &FileEntry,
        _context: &PreviewContext,
    ) -> Result<(), String> {
        let reason = describe(self.sniff_cached(entry));
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.label(egui::RichText::new("📦 No text preview").size(18.0));
            ui.add_space(10.0);
            ui.label(reason);
            ui.add_space(5.0);
            ui.weak(format!(
                "Text previews show the first {} of text files",
                bytesize::ByteSize(style::TEXT_PREVIEW_BYTES)
            ));
        });
        Ok(())
    }

    fn priority(&self) -> i32 {
        1000 // Fallback after the text handler
    }
}
