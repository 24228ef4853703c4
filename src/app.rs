use crate::config::Config;
use crate::entry::FileEntry;
use crate::io::{self, DirectoryWatcher};
use crate::style::{self, Theme};
use crate::view::{self, PreviewContext, PreviewRegistry};
use eframe::egui;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct TextPeek {
    current_path: PathBuf,
    entries: Vec<FileEntry>,
    selected_index: Option<usize>,
    error_message: Option<String>,
    show_hidden: bool,
    theme: Theme,
    font_size: f32,
    files_width: f32,
    registry: PreviewRegistry,
    watcher: Option<DirectoryWatcher>,
    ctx: egui::Context,
}

impl TextPeek {
    /// `start` may be a directory or a file; a file's directory is listed
    /// with the file selected.
    pub fn new(cc: &eframe::CreationContext<'_>, config: &Config, start: PathBuf) -> Self {
        let theme = if config.is_dark() { Theme::Dark } else { Theme::Light };
        cc.egui_ctx.set_visuals(theme.visuals());

        let mut registry = view::create_default_registry();
        registry.set_enabled_handlers(config.preview.enabled_handlers.clone());
        debug!("Enabled preview handlers: {:?}", registry.enabled_handler_names());

        let (dir, selected) = if start.is_dir() {
            (start, None)
        } else {
            let dir = start
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."));
            (dir, Some(start))
        };

        let mut app = Self {
            current_path: dir,
            entries: Vec::new(),
            selected_index: None,
            error_message: None,
            show_hidden: config.ui.show_hidden,
            theme,
            font_size: config.font.font_size,
            files_width: config.panel.files_width,
            registry,
            watcher: None,
            ctx: cc.egui_ctx.clone(),
        };
        app.refresh_entries();
        app.watch_current();
        if let Some(file) = selected {
            app.select_path(&file);
        }
        app
    }

    fn refresh_entries(&mut self) {
        self.error_message = None;
        let previous = self.selected_path();

        match io::read_directory(&self.current_path, self.show_hidden) {
            Ok(entries) => self.entries = entries,
            Err(e) => {
                self.entries.clear();
                self.error_message = Some(format!("Error reading directory: {}", e));
            }
        }

        self.selected_index = previous
            .and_then(|p| self.entries.iter().position(|e| e.path == p))
            .or(if self.entries.is_empty() { None } else { Some(0) });
    }

    fn watch_current(&mut self) {
        let ctx = self.ctx.clone();
        self.watcher = match DirectoryWatcher::new(&self.current_path, move || ctx.request_repaint()) {
            Ok(watcher) => Some(watcher),
            Err(e) => {
                warn!("Could not watch {}: {}", self.current_path.display(), e);
                None
            }
        };
    }

    fn selected_path(&self) -> Option<PathBuf> {
        self.selected_index
            .and_then(|idx| self.entries.get(idx))
            .map(|e| e.path.clone())
    }

    fn select_path(&mut self, path: &Path) {
        if let Some(idx) = self.entries.iter().position(|e| e.path == path) {
            self.selected_index = Some(idx);
        }
    }

    fn navigate_to(&mut self, path: PathBuf) {
        if path.is_dir() {
            debug!("Navigating to {}", path.display());
            self.current_path = path;
            self.selected_index = None;
            self.refresh_entries();
            self.watch_current();
        } else if let Err(e) = open::that(&path) {
            self.error_message = Some(format!("Could not open file: {}", e));
        }
    }

    fn navigate_up(&mut self) {
        if let Some(parent) = self.current_path.parent() {
            let old_current = self.current_path.clone();
            self.navigate_to(parent.to_path_buf());
            self.select_path(&old_current);
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::Backspace)) {
            self.navigate_up();
            return;
        }
        if self.entries.is_empty() {
            return;
        }

        let max_idx = self.entries.len() - 1;
        let current = self.selected_index.unwrap_or(0);

        if ctx.input(|i| i.key_pressed(egui::Key::ArrowDown)) {
            self.selected_index = Some((current + 1).min(max_idx));
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowUp)) {
            self.selected_index = Some(current.saturating_sub(1));
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
            if let Some(path) = self.selected_path() {
                self.navigate_to(path);
            }
        }
    }

    fn poll_watcher(&mut self) {
        let changed = self.watcher.as_ref().map(|w| w.poll()).unwrap_or(false);
        if changed {
            debug!("Directory changed, refreshing {}", self.current_path.display());
            self.refresh_entries();
        }
    }
}

impl eframe::App for TextPeek {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_watcher();
        self.handle_input(ctx);

        let mut next_navigation: Option<PathBuf> = None;
        let mut next_selection: Option<usize> = None;

        // --- Top Bar ---
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("⬆ Up").clicked() {
                    self.navigate_up();
                }
                if ui.button("⟳").on_hover_text("Refresh").clicked() {
                    self.refresh_entries();
                }
                style::truncated_label(ui, self.current_path.to_string_lossy().to_string());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_label = match self.theme {
                        Theme::Dark => "☀",
                        Theme::Light => "🌙",
                    };
                    if ui.button(theme_label).on_hover_text("Toggle theme").clicked() {
                        self.theme = self.theme.toggle();
                        ctx.set_visuals(self.theme.visuals());
                    }
                    if ui.checkbox(&mut self.show_hidden, "Hidden").changed() {
                        self.refresh_entries();
                    }
                });
            });
            ui.add_space(4.0);
        });

        // --- Bottom Bar ---
        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{} items", self.entries.len()));
                if let Some(err) = &self.error_message {
                    ui.colored_label(egui::Color32::RED, format!(" | {}", err));
                }
            });
        });

        // --- File list ---
        egui::SidePanel::left("files_panel")
            .resizable(true)
            .default_width(self.files_width)
            .width_range(style::FILES_MIN..=style::FILES_MAX)
            .show(ctx, |ui| {
                use egui_extras::{Column, TableBuilder};

                TableBuilder::new(ui)
                    .striped(true)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .column(Column::exact(style::ICON_COL_WIDTH))
                    .column(Column::remainder())
                    .header(style::HEADER_HEIGHT, |mut header| {
                        header.col(|_ui| {});
                        header.col(|ui| {
                            ui.label("Name");
                        });
                    })
                    .body(|body| {
                        body.rows(style::ROW_HEIGHT, self.entries.len(), |mut row| {
                            let row_index = row.index();
                            let entry = &self.entries[row_index];
                            let is_selected = self.selected_index == Some(row_index);
                            row.set_selected(is_selected);

                            row.col(|ui| {
                                ui.label(entry.get_icon());
                            });
                            row.col(|ui| {
                                let response = ui.selectable_label(is_selected, entry.display_name());
                                if response.clicked() {
                                    next_selection = Some(row_index);
                                }
                                if response.double_clicked() {
                                    next_navigation = Some(entry.path.clone());
                                }
                            });
                        });
                    });
            });

        // --- Preview ---
        egui::CentralPanel::default().show(ctx, |ui| {
            let context = PreviewContext {
                font_size: self.font_size,
            };
            match self.selected_index.and_then(|idx| self.entries.get(idx)) {
                Some(entry) => view::render_preview(ui, entry, &mut self.registry, &context),
                None => {
                    ui.centered_and_justified(|ui| {
                        ui.label("No file selected");
                    });
                }
            }
        });

        // Apply deferred actions
        if let Some(idx) = next_selection {
            self.selected_index = Some(idx);
        }
        if let Some(path) = next_navigation {
            self.navigate_to(path);
        }
    }
}
