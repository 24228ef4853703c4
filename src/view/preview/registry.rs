// Preview handler registry for managing and dispatching preview handlers

use super::handler::{PreviewContext, PreviewHandler};
use crate::entry::FileEntry;
use eframe::egui;
use std::collections::HashSet;
use tracing::warn;

/// Registry for managing preview handlers
pub struct PreviewRegistry {
    handlers: Vec<Box<dyn PreviewHandler>>,
    enabled_handlers: HashSet<String>,
}

impl PreviewRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            enabled_handlers: HashSet::new(),
        }
    }

    /// Register a preview handler
    ///
    /// Handlers are kept sorted by priority.
    pub fn register(&mut self, handler: Box<dyn PreviewHandler>) {
        if handler.enabled_by_default() {
            self.enabled_handlers.insert(handler.name().to_string());
        }
        self.handlers.push(handler);
        self.handlers.sort_by_key(|h| h.priority());
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled_handlers.contains(name)
    }

    /// Set enabled handlers from configuration
    pub fn set_enabled_handlers(&mut self, enabled: Vec<String>) {
        for name in &enabled {
            if !self.handlers.iter().any(|h| h.name() == name) {
                warn!("Unknown preview handler in config: {}", name);
            }
        }
        self.enabled_handlers = enabled.into_iter().collect();
    }

    /// Name of the first enabled handler that accepts `entry`
    pub fn handler_for(&self, entry: &FileEntry) -> Option<&str> {
        self.handlers
            .iter()
            .find(|h| self.is_enabled(h.name()) && h.can_preview(entry))
            .map(|h| h.name())
    }

    /// Render preview using the first matching enabled handler
    ///
    /// Returns true if a handler was found.
    pub fn render_preview(
        &mut self,
        ui: &mut egui::Ui,
        entry: &FileEntry,
        context: &PreviewContext,
    ) -> bool {
        let enabled = &self.enabled_handlers;
        let Some(handler) = self
            .handlers
            .iter_mut()
            .find(|h| enabled.contains(h.name()) && h.can_preview(entry))
        else {
            return false;
        };

        if let Err(e) = handler.render(ui, entry, context) {
            ui.colored_label(
                egui::Color32::RED,
                format!("Preview error ({}): {}", handler.name(), e),
            );
        }
        true
    }

    /// Get list of enabled handler names
    pub fn enabled_handler_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.enabled_handlers.iter().cloned().collect();
        names.sort();
        names
    }
}

impl Default for PreviewRegistry {
    fn default() -> Self {
        Self::new()
    }
}
