#[cfg(feature = "napi")]
use napi_derive::napi;
use oxc_span::Span;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

// ═══════════════════════════════════════════════════════════════════════════════
// ERROR CODES
// ═══════════════════════════════════════════════════════════════════════════════

pub const ERR_ARGUMENT_COUNT: &str = "SVGJSX-ARGS";
pub const ERR_NOT_STRING_LITERAL: &str = "SVGJSX-LITERAL";
pub const ERR_FILE_NOT_FOUND: &str = "SVGJSX-NOT-FOUND";
pub const ERR_IO: &str = "SVGJSX-IO";
pub const ERR_EMPTY_DOCUMENT: &str = "SVGJSX-EMPTY";
pub const ERR_PARSE: &str = "SVGJSX-PARSE";
pub const ERR_OPTIMIZE: &str = "SVGJSX-OPTIMIZE";
pub const ERR_CONFIG: &str = "SVGJSX-CONFIG";
pub const ERR_JSX_UNSUPPORTED: &str = "SVGJSX-NO-JSX";

fn get_hint(code: &str) -> Option<&'static str> {
    match code {
        ERR_ARGUMENT_COUNT => Some("Pass the SVG file path, e.g. svgToJsx(\"./icon.svg\")."),
        ERR_NOT_STRING_LITERAL => {
            Some("The path is read at build time, so it cannot be a variable or template.")
        }
        ERR_FILE_NOT_FOUND => Some(
            "Relative paths must start with ./ or ../ and are resolved from the calling file.",
        ),
        ERR_EMPTY_DOCUMENT => Some("The SVG file must contain a root <svg> element."),
        ERR_CONFIG => Some("Check the transformer options passed by the host."),
        ERR_JSX_UNSUPPORTED => Some("Rename the file to .tsx or .jsx so it can hold JSX."),
        _ => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TRANSFORM ERROR
// ═══════════════════════════════════════════════════════════════════════════════

pub type Result<T> = std::result::Result<T, TransformError>;

/// A fatal, user-visible build failure. Every usage error surfaces as one of these.
#[derive(Debug, Clone, Serialize, Deserialize, Error, PartialEq, Eq)]
#[cfg_attr(feature = "napi", napi(object))]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct TransformError {
    pub code: String,
    pub message: String,
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub hints: Vec<String>,
}

impl TransformError {
    pub fn new(code: &str, message: impl Into<String>, file: impl AsRef<Path>) -> Self {
        TransformError {
            code: code.to_string(),
            message: message.into(),
            file: file.as_ref().to_string_lossy().to_string(),
            line: 0,
            column: 0,
            hints: get_hint(code).map(|h| vec![h.to_string()]).unwrap_or_default(),
        }
    }

    /// Attach the 1-based line/column of `span` within `source`.
    pub fn at(mut self, source: &str, span: Span) -> Self {
        let (line, column) = line_column(source, span.start);
        self.line = line;
        self.column = column;
        self
    }

    pub fn argument_count(found: usize, function_name: &str, file: impl AsRef<Path>) -> Self {
        Self::new(
            ERR_ARGUMENT_COUNT,
            format!(
                "Expected 1 argument in {} function, got {}",
                function_name, found
            ),
            file,
        )
    }

    pub fn not_string_literal(function_name: &str, file: impl AsRef<Path>) -> Self {
        Self::new(
            ERR_NOT_STRING_LITERAL,
            format!(
                "The first argument in {} function must be a string literal",
                function_name
            ),
            file,
        )
    }

    pub fn file_not_found(resolved: &Path, file: impl AsRef<Path>) -> Self {
        Self::new(
            ERR_FILE_NOT_FOUND,
            format!("File \"{}\" does not exist", resolved.display()),
            file,
        )
    }

    pub fn empty_document(svg_path: &Path, file: impl AsRef<Path>) -> Self {
        Self::new(
            ERR_EMPTY_DOCUMENT,
            format!("File \"{}\" contains no markup element", svg_path.display()),
            file,
        )
    }

    pub fn jsx_unsupported(function_name: &str, file: impl AsRef<Path>) -> Self {
        let file = file.as_ref();
        Self::new(
            ERR_JSX_UNSUPPORTED,
            format!(
                "Cannot replace {} calls in \"{}\": the file type does not allow JSX",
                function_name,
                file.display()
            ),
            file,
        )
    }

    pub fn is(&self, code: &str) -> bool {
        self.code == code
    }
}

fn line_column(source: &str, offset: u32) -> (u32, u32) {
    let offset = (offset as usize).min(source.len());
    let before = &source[..offset];
    let line = before.matches('\n').count() as u32 + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = before[line_start..].chars().count() as u32 + 1;
    (line, column)
}
