// Preview pane: a header with file metadata above the first matching handler
//
// Handlers can be enabled/disabled via configuration and are tried in
// priority order by the registry.

mod handler;
mod handlers;
mod registry;

pub use handler::{PreviewContext, PreviewHandler};
pub use handlers::*;
pub use registry::PreviewRegistry;

use crate::entry::FileEntry;
use crate::style;
use chrono::{DateTime, Local};
use eframe::egui;

/// Create a default preview registry with all standard handlers
pub fn create_default_registry() -> PreviewRegistry {
    let mut registry = PreviewRegistry::new();
    registry.register(Box::new(TextPreviewHandler::new()));
    registry.register(Box::new(BinaryPreviewHandler::new())); // Fallback
    registry
}

/// Render preview pane header with file metadata
pub fn render_preview_header(ui: &mut egui::Ui, entry: &FileEntry) {
    style::truncated_label(
        ui,
        egui::RichText::new(format!("{} {}", entry.get_icon(), entry.display_name())).heading(),
    );
    ui.add_space(5.0);
    style::truncated_label(ui, format!("Size: {}", bytesize::ByteSize(entry.size)));
    let datetime: DateTime<Local> = entry.modified.into();
    ui.label(format!("Modified: {}", datetime.format("%Y-%m-%d %H:%M")));
    ui.separator();
}

/// Render the header and the preview for `entry`
pub fn render_preview(
    ui: &mut egui::Ui,
    entry: &FileEntry,
    registry: &mut PreviewRegistry,
    context: &PreviewContext,
) {
    render_preview_header(ui, entry);

    if !registry.render_preview(ui, entry, context) {
        ui.centered_and_justified(|ui| {
            ui.label("No preview handler available");
        });
    }
}
