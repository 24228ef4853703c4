//! Command-line interface definitions.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Preview the head of text files, auto-detecting their encoding.
#[derive(Parser, Debug)]
#[command(name = "textpeek", version, about)]
pub struct Cli {
    /// Directory to list, or a file to select in its directory
    pub path: Option<PathBuf>,

    /// Override the configured theme
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,

    /// List hidden files
    #[arg(long)]
    pub show_hidden: bool,

    /// Write the default config file if none exists, then exit
    #[arg(long)]
    pub write_config: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeArg {
    Dark,
    Light,
}

impl ThemeArg {
    pub fn as_config_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}
