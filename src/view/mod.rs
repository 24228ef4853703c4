pub mod preview;
mod text_view;

pub use preview::{create_default_registry, render_preview, PreviewContext, PreviewRegistry};
pub use text_view::TextView;
