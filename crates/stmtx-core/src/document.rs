//! Document kinds accepted for extraction.

use std::path::Path;

use crate::error::{Result, StmtxError};

/// Statement document format, decided from the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// PDF statement with embedded text.
    Pdf,
    /// Excel workbook (`.xlsx` or `.xls`).
    Spreadsheet,
}

impl DocumentKind {
    /// Detect the kind from a file name, case-insensitively.
    pub fn from_filename(name: &str) -> Option<Self> {
        let name = secure_filename(name);
        if name.ends_with(".pdf") {
            Some(Self::Pdf)
        } else if name.ends_with(".xlsx") || name.ends_with(".xls") {
            Some(Self::Spreadsheet)
        } else {
            None
        }
    }

    /// Detect the kind from a path's file name.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.file_name()
            .and_then(|n| n.to_str())
            .and_then(Self::from_filename)
    }

    /// Like [`DocumentKind::from_path`], failing for unsupported files.
    pub fn detect(path: &Path) -> Result<Self> {
        Self::from_path(path)
            .ok_or_else(|| StmtxError::UnsupportedFormat(path.display().to_string()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Spreadsheet => "spreadsheet",
        }
    }
}

/// Extension (with dot) of a sanitized file name, used for temp-file suffixes.
pub fn extension_of(name: &str) -> Option<String> {
    let name = secure_filename(name);
    name.rfind('.').map(|i| name[i..].to_string())
}

/// Reduce an uploaded file name to a safe, lower-cased base name.
///
/// Directory components and leading dots are dropped; characters outside
/// `[a-z0-9._-]` become `_`.
pub fn secure_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or("");

    base.trim()
        .trim_start_matches('.')
        .chars()
        .map(|c| {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
