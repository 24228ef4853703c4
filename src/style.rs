use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            Self::Light => egui::Visuals::light(),
            Self::Dark => egui::Visuals::dark(),
        }
    }
}

// --- File list ---
pub const ICON_COL_WIDTH: f32 = 30.0;
pub const ROW_HEIGHT: f32 = 24.0;
pub const HEADER_HEIGHT: f32 = 20.0;
pub const FILES_MIN: f32 = 150.0;
pub const FILES_MAX: f32 = 600.0;

// --- Text view ---
// Inset of the rounded background from the widget's left edge
pub const TEXT_BG_INSET: f32 = 10.0;
pub const TEXT_BG_RADIUS: u8 = 8;
// Margin between the background and the text on every side
pub const TEXT_DOC_MARGIN: f32 = 10.0;
// Extra horizontal margin outside the document margin
pub const TEXT_SIDE_MARGIN: f32 = 10.0;
pub const TEXT_MIN_HEIGHT: f32 = 386.0;

// --- Preview limits ---
pub const TEXT_PREVIEW_BYTES: u64 = 2048;
pub const BINARY_SNIFF_BYTES: usize = 8192;

// --- Helper functions ---

pub fn truncated_label(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate())
}
