// Preview handlers module

mod binary;
mod text;

pub use binary::BinaryPreviewHandler;
pub use text::TextPreviewHandler;
