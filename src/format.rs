//! Closed format tags for import and export.
//!
//! Format selection is an exhaustive `match` everywhere past the host
//! boundary; string tags coming from a UI or command line are parsed once,
//! through [`FromStr`], and rejected there if unknown.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ExportError, ImportError};

/// Formats the engine can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportFormat {
    Txt,
    Html,
    Pdf,
    Docx,
}

impl ImportFormat {
    /// All supported import formats, in menu order.
    pub const ALL: [ImportFormat; 4] = [
        ImportFormat::Txt,
        ImportFormat::Html,
        ImportFormat::Pdf,
        ImportFormat::Docx,
    ];

    /// Canonical file extension, lowercase, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ImportFormat::Txt => "txt",
            ImportFormat::Html => "html",
            ImportFormat::Pdf => "pdf",
            ImportFormat::Docx => "docx",
        }
    }

    /// Map a file extension to a format, if supported.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "txt" | "text" => Some(ImportFormat::Txt),
            "html" | "htm" => Some(ImportFormat::Html),
            "pdf" => Some(ImportFormat::Pdf),
            "docx" => Some(ImportFormat::Docx),
            _ => None,
        }
    }
}

impl fmt::Display for ImportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ImportFormat {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s.trim()).ok_or_else(|| ImportError::UnsupportedFormat(s.to_string()))
    }
}

/// Formats the engine can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Txt,
    Html,
    Pdf,
    Docx,
    /// One-way `mailto:` draft carrying the plain text body.
    Email,
}

impl ExportFormat {
    /// All supported export formats, in menu order.
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Txt,
        ExportFormat::Html,
        ExportFormat::Pdf,
        ExportFormat::Docx,
        ExportFormat::Email,
    ];

    /// Tag used in menus and on the command line.
    pub fn tag(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Html => "html",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
            ExportFormat::Email => "email",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "txt" | "text" => Ok(ExportFormat::Txt),
            "html" | "htm" => Ok(ExportFormat::Html),
            "pdf" => Ok(ExportFormat::Pdf),
            "docx" => Ok(ExportFormat::Docx),
            "email" | "mailto" => Ok(ExportFormat::Email),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}
