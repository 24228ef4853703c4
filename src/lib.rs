//! textpeek: a file preview pane whose text view auto-detects UTF-8, GBK or
//! the locale encoding and shows the head of a file in a read-only box.

pub mod app;
pub mod cli;
pub mod codec;
pub mod config;
pub mod entry;
pub mod error;
pub mod io;
pub mod style;
pub mod view;

pub use codec::decode;
pub use view::TextView;
