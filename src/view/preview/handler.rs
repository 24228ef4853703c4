// Preview handler trait and context for the preview pane

use crate::entry::FileEntry;
use eframe::egui;

/// Context passed to preview handlers containing shared settings
pub struct PreviewContext {
    pub font_size: f32,
}

/// Trait for file preview handlers
///
/// Handlers own whatever state their preview needs between frames, so
/// `render` takes `&mut self`.
pub trait PreviewHandler {
    /// Name of this handler (for configuration and debugging)
    fn name(&self) -> &str;

    /// Check if this handler can preview the given file
    ///
    /// Handlers are checked in priority order.
    fn can_preview(&self, entry: &FileEntry) -> bool;

    /// Render the preview for the given file
    ///
    /// Returns Ok(()) on success, or Err(message) on failure.
    fn render(
        &mut self,
        ui: &mut egui::Ui,
        entry: &FileEntry,
        context: &PreviewContext,
    ) -> Result<(), String>;

    /// Priority of this handler (lower = checked first). Default is 100.
    fn priority(&self) -> i32 {
        100
    }

    /// Whether this handler is enabled by default
    fn enabled_by_default(&self) -> bool {
        true
    }
}
