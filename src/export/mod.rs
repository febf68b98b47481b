use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::Result;

/// Writes records as a pretty-printed JSON array (4-space indent, UTF-8,
/// non-ASCII kept literal). Parent directories are created as needed and an
/// existing file is replaced.
pub struct JsonExporter;

impl JsonExporter {
    pub fn save<T: Serialize>(records: &[T], path: &Path) -> Result<()> {
        let bytes = Self::to_bytes(records)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, bytes)?;

        info!("Data saved to {}", path.display());
        Ok(())
    }

    pub fn to_bytes<T: Serialize>(records: &[T]) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        records.serialize(&mut serializer)?;
        Ok(out)
    }
}
