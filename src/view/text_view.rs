// Read-only plain text box showing the decoded head of a file

use crate::codec;
use crate::error::PreviewError;
use crate::style;
use eframe::egui;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Non-interactive text preview.
///
/// Holds the decoded text of the last [`TextView::set_source`] call. The
/// view is either empty (initially, or after a file failed to open) or
/// populated; `set_source` is the only way to move between the two.
pub struct TextView {
    text: String,
    source: Option<PathBuf>,
    font_size: f32,
}

impl TextView {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            source: None,
            font_size: 13.0,
        }
    }

    pub fn set_font_size(&mut self, font_size: f32) {
        self.font_size = font_size;
    }

    /// Replace the displayed text with the head of the file at `path`.
    ///
    /// Failures leave the view empty and are only logged.
    pub fn set_source(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.clear();
        self.source = Some(path.to_path_buf());

        match load_prefix(path, style::TEXT_PREVIEW_BYTES) {
            Ok(bytes) => {
                let decoded = codec::detect(&bytes);
                trace!(
                    path = %path.display(),
                    bytes = bytes.len(),
                    encoding = decoded.encoding.map(|e| e.name()),
                    fallback = decoded.fallback,
                    "decoded preview"
                );
                self.text = decoded.text;
            }
            Err(e) => debug!("{}", e),
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.source = None;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Path passed to the last `set_source`, whether or not it could be read
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Default for TextView {
    fn default() -> Self {
        Self::new()
    }
}

/// Read at most `limit` bytes from the start of the file.
pub fn load_prefix(path: &Path, limit: u64) -> Result<Vec<u8>, PreviewError> {
    let file = File::open(path).map_err(|source| PreviewError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut bytes = Vec::with_capacity(limit as usize);
    file.take(limit)
        .read_to_end(&mut bytes)
        .map_err(|source| PreviewError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(bytes)
}

/// Area covered by the rounded background: the widget minus its left inset.
pub fn background_rect(rect: egui::Rect) -> egui::Rect {
    let mut bg = rect;
    bg.min.x = (rect.min.x + style::TEXT_BG_INSET).min(rect.max.x);
    bg
}

/// Area the text is laid out in.
pub fn text_rect(rect: egui::Rect) -> egui::Rect {
    let left = style::TEXT_BG_INSET + style::TEXT_SIDE_MARGIN + style::TEXT_DOC_MARGIN;
    let right = style::TEXT_SIDE_MARGIN + style::TEXT_DOC_MARGIN;
    let top = style::TEXT_DOC_MARGIN;
    egui::Rect::from_min_max(
        egui::pos2(rect.min.x + left, rect.min.y + top),
        egui::pos2(
            (rect.max.x - right).max(rect.min.x + left),
            (rect.max.y - top).max(rect.min.y + top),
        ),
    )
}

impl egui::Widget for &TextView {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let height = ui.available_height();
        let height = if height.is_finite() {
            height.max(style::TEXT_MIN_HEIGHT)
        } else {
            style::TEXT_MIN_HEIGHT
        };
        let desired = egui::vec2(ui.available_width(), height);

        // Drags starting here are claimed and dropped so a surrounding
        // scroll area never drag-scrolls; hover still goes through.
        let (rect, response) = ui.allocate_exact_size(desired, egui::Sense::drag());
        if response.has_focus() {
            response.surrender_focus();
        }

        if !ui.is_rect_visible(rect) {
            return response;
        }

        let visuals = ui.visuals();
        let fill = visuals.extreme_bg_color;
        let color = visuals.text_color();
        ui.painter().rect_filled(
            background_rect(rect),
            egui::CornerRadius::same(style::TEXT_BG_RADIUS),
            fill,
        );

        let area = text_rect(rect);
        if !self.text.is_empty() && area.width() > 0.0 {
            let galley = ui.painter().layout(
                self.text.clone(),
                egui::FontId::proportional(self.font_size),
                color,
                area.width(),
            );
            // No scrolling: whatever does not fit is clipped
            ui.painter()
                .with_clip_rect(area.intersect(ui.clip_rect()))
                .galley(area.min, galley, color);
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn run_frame(view: &TextView, size: egui::Vec2) -> egui::Rect {
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, size)),
            ..Default::default()
        };
        let mut rect = egui::Rect::NOTHING;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                rect = ui.add(view).rect;
            });
        });
        rect
    }

    #[test]
    fn test_new_view_is_empty() {
        let view = TextView::new();
        assert!(view.is_empty());
        assert_eq!(view.text(), "");
        assert!(view.source().is_none());
    }

    #[test]
    fn test_missing_file_leaves_view_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("missing.txt");

        let mut view = TextView::new();
        view.set_source(&missing);
        assert!(view.is_empty());
        assert_eq!(view.source(), Some(missing.as_path()));
    }

    #[test]
    fn test_failed_open_clears_previous_text() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("a.txt");
        fs::write(&file, "content").expect("write");

        let mut view = TextView::new();
        view.set_source(&file);
        assert_eq!(view.text(), "content");

        view.set_source(dir.path().join("gone.txt"));
        assert!(view.is_empty());
    }

    #[test]
    fn test_directory_shows_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut view = TextView::new();
        view.set_source(dir.path());
        assert!(view.is_empty());
    }

    #[test]
    fn test_large_file_is_truncated_to_prefix() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("big.txt");
        let content: String = (0..5000).map(|i| (b'a' + (i % 26) as u8) as char).collect();
        fs::write(&file, &content).expect("write");

        let mut view = TextView::new();
        view.set_source(&file);
        assert_eq!(view.text().len(), 2048);
        assert_eq!(view.text(), &content[..2048]);
    }

    #[test]
    fn test_utf8_file_cut_inside_character() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("cjk.txt");
        // 27 bytes per repeat, 3 per character; byte 2048 falls inside character 683
        let content = "中文文本预览测试。".repeat(186);
        assert!(content.len() > 5000);
        fs::write(&file, &content).expect("write");

        let mut view = TextView::new();
        view.set_source(&file);
        let expected: String = content.chars().take(682).collect();
        assert_eq!(view.text(), expected);
    }

    #[test]
    fn test_gbk_file_cut_after_lead_byte() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("cjk-gbk.txt");
        let mut bytes = vec![b'x'];
        for _ in 0..1250 {
            bytes.extend_from_slice(&[0xD6, 0xD0, 0xCE, 0xC4]);
        }
        fs::write(&file, &bytes).expect("write");

        let mut view = TextView::new();
        view.set_source(&file);
        assert_eq!(view.text(), format!("x{}中", "中文".repeat(511)));
    }

    #[test]
    fn test_gbk_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("gbk.txt");
        fs::write(&file, [0xD6, 0xD0, 0xCE, 0xC4]).expect("write");

        let mut view = TextView::new();
        view.set_source(&file);
        assert_eq!(view.text(), "中文");
    }

    #[test]
    fn test_second_source_replaces_first() {
        let dir = tempfile::tempdir().expect("tempdir");
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "first file with a much longer body").expect("write");
        fs::write(&b, "second").expect("write");

        let mut view = TextView::new();
        view.set_source(&a);
        view.set_source(&b);
        assert_eq!(view.text(), "second");
        assert_eq!(view.source(), Some(b.as_path()));
    }

    #[test]
    fn test_empty_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("empty.txt");
        fs::write(&file, []).expect("write");

        let mut view = TextView::new();
        view.set_source(&file);
        assert!(view.is_empty());
    }

    #[test]
    fn test_load_prefix_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(matches!(
            load_prefix(&dir.path().join("missing"), 16),
            Err(PreviewError::Open { .. })
        ));
    }

    #[test]
    fn test_geometry() {
        let rect = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(100.0, 50.0));

        let bg = background_rect(rect);
        assert_eq!(bg.min, egui::pos2(10.0, 0.0));
        assert_eq!(bg.max, rect.max);

        let text = text_rect(rect);
        assert_eq!(text.min, egui::pos2(30.0, 10.0));
        assert_eq!(text.max, egui::pos2(80.0, 40.0));
    }

    #[test]
    fn test_geometry_never_inverts() {
        let rect = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(5.0, 5.0));
        assert!(background_rect(rect).width() >= 0.0);
        let text = text_rect(rect);
        assert!(text.width() >= 0.0);
        assert!(text.height() >= 0.0);
    }

    fn pointer_button(pos: egui::Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_drag_on_view_does_not_scroll_parent() {
        let mut view = TextView::new();
        view.text = "line of text ".repeat(300);

        let ctx = egui::Context::default();
        let start = egui::pos2(200.0, 150.0);
        let end = egui::pos2(200.0, 20.0);
        let frames = vec![
            vec![egui::Event::PointerMoved(start)],
            vec![pointer_button(start, true)],
            vec![egui::Event::PointerMoved(egui::pos2(200.0, 100.0))],
            vec![egui::Event::PointerMoved(end)],
            vec![pointer_button(end, false)],
            vec![],
        ];

        let mut offsets = Vec::new();
        let mut hovered = false;
        let mut dragged = false;
        for events in frames {
            let input = egui::RawInput {
                screen_rect: Some(egui::Rect::from_min_size(
                    egui::Pos2::ZERO,
                    egui::vec2(400.0, 300.0),
                )),
                events,
                ..Default::default()
            };
            let _ = ctx.run(input, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    let output = egui::ScrollArea::vertical()
                        .id_salt("text_view_parent")
                        .show(ui, |ui| {
                            let response = ui.add(&view);
                            hovered |= response.hovered();
                            dragged |= response.dragged();
                            // Enough content below the view to make the area scrollable
                            ui.add_space(1000.0);
                        });
                    offsets.push(output.state.offset.y);
                });
            });
        }

        assert!(hovered);
        assert!(dragged);
        assert!(offsets.iter().all(|&y| y == 0.0), "scrolled: {:?}", offsets);
    }

    #[test]
    fn test_widget_respects_minimum_height() {
        let mut view = TextView::new();
        view.text = "hello".repeat(200);

        let rect = run_frame(&view, egui::vec2(400.0, 200.0));
        assert!(rect.height() >= style::TEXT_MIN_HEIGHT);

        let rect = run_frame(&view, egui::vec2(400.0, 800.0));
        assert!(rect.height() > style::TEXT_MIN_HEIGHT);
        assert!(rect.width() > 0.0);
    }
}
