use crate::models::*;
use anyhow::Result;
use std::fs::{self, File};
use std::io::{ErrorKind, Read};
use std::path::Path;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Host capability for choosing a local document. `Ok(None)` means the selection was cancelled.
pub trait DocumentPicker: Send + Sync {
    fn pick(&self, hint: Option<&Path>) -> Result<Option<SelectedFile>>;
}

/// Picks PDFs from the local filesystem by path. Anything that is not a PDF is not offered.
pub struct FsDocumentPicker;

impl FsDocumentPicker {
    pub fn new() -> Self {
        Self
    }

    fn is_pdf(&self, file_path: &Path) -> Result<bool> {
        if let Some(extension) = file_path.extension() {
            if extension.eq_ignore_ascii_case("pdf") {
                return Ok(true);
            }
        }

        let mut header = [0u8; 5];
        let mut file = File::open(file_path)?;
        match file.read_exact(&mut header) {
            Ok(()) => Ok(&header[..] == PDF_MAGIC),
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

impl Default for FsDocumentPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentPicker for FsDocumentPicker {
    fn pick(&self, hint: Option<&Path>) -> Result<Option<SelectedFile>> {
        let file_path = match hint {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => return Ok(None),
        };

        let metadata = match fs::metadata(file_path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::warn!("No such document: {}", file_path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        if !metadata.is_file() {
            log::warn!("Not a regular file: {}", file_path.display());
            return Ok(None);
        }

        if !self.is_pdf(file_path)? {
            log::warn!("Not a PDF document: {}", file_path.display());
            return Ok(None);
        }

        let name = match file_path.file_name() {
            Some(name) => name.to_string_lossy().to_string(),
            None => return Ok(None),
        };

        Ok(Some(SelectedFile {
            uri: file_path.to_path_buf(),
            mime_type: PDF_MIME_TYPE.to_string(),
            name,
        }))
    }
}
