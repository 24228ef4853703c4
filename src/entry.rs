use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

#[derive(Clone, Debug)]
pub struct FileEntry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
    pub is_symlink: bool,
    pub size: u64,
    pub modified: SystemTime,
    pub extension: String,
}

impl FileEntry {
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let symlink_meta = fs::symlink_metadata(&path).ok()?;
        let is_symlink = symlink_meta.is_symlink();

        let name = path.file_name()?.to_string_lossy().to_string();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        // Broken symlinks keep the link's own metadata
        let metadata = fs::metadata(&path).ok();
        let is_dir = metadata.as_ref().map(|m| m.is_dir()).unwrap_or(false);
        let size = metadata.as_ref().map(|m| m.len()).unwrap_or(0);
        let modified = metadata
            .as_ref()
            .and_then(|m| m.modified().ok())
            .or_else(|| symlink_meta.modified().ok())
            .unwrap_or(SystemTime::UNIX_EPOCH);

        Some(Self {
            path,
            name,
            is_dir,
            is_symlink,
            size,
            modified,
            extension,
        })
    }

    pub fn get_icon(&self) -> &str {
        if self.is_dir {
            return "📁";
        }
        match self.extension.as_str() {
            "txt" | "md" | "log" | "rst" => "📝",
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" | "svg" => "🖼",
            "zip" | "tar" | "gz" | "7z" | "rar" | "xz" | "bz2" => "📦",
            _ => "📄",
        }
    }

    pub fn display_name(&self) -> String {
        if self.is_symlink {
            format!("{} \u{2192}", self.name)
        } else {
            self.name.clone()
        }
    }
}
