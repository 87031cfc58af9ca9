/*!
 * Notebook document handling.
 *
 * This module contains the NotebookDocument type, which wraps a parsed
 * notebook JSON document and exposes the cell source lines for translation
 * while preserving every other part of the document untouched.
 */

use std::path::{Path, PathBuf};
use serde::Serialize;
use serde_json::{Value, ser::PrettyFormatter, Serializer};

use crate::errors::NotebookError;

/// Notebook file extension
pub const NOTEBOOK_EXTENSION: &str = "ipynb";

/// A parsed notebook document.
///
/// The document is kept as a raw JSON value so that cell metadata, outputs
/// and top-level keys survive a rewrite byte-for-byte; only the `source`
/// arrays of translated cells are replaced.
pub struct NotebookDocument {
    /// The full document tree
    value: Value,
    /// Number of entries in the "cells" array, fixed at parse time
    cell_count: usize,
}

impl NotebookDocument {
    /// Parse a notebook document from a JSON string.
    ///
    /// Fails if the content is not valid JSON or if the document has no
    /// "cells" array. Cell-level structure is checked on access.
    pub fn parse(content: &str) -> Result<Self, NotebookError> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| NotebookError::Parse(e.to_string()))?;

        let cell_count = value
            .get("cells")
            .and_then(Value::as_array)
            .ok_or(NotebookError::MissingCells)?
            .len();

        Ok(Self { value, cell_count })
    }

    /// Number of cells in the document
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Read the source lines of the cell at `index`.
    ///
    /// Returns an empty vector for cells with an empty source list. Fails if
    /// the cell is not an object or its `source` is missing or contains
    /// non-string entries.
    pub fn cell_source(&self, index: usize) -> Result<Vec<String>, NotebookError> {
        let cell = self.cell(index)?;

        let source = cell
            .get("source")
            .and_then(Value::as_array)
            .ok_or(NotebookError::InvalidSource { index })?;

        source
            .iter()
            .map(|line| {
                line.as_str()
                    .map(|s| s.to_string())
                    .ok_or(NotebookError::InvalidSource { index })
            })
            .collect()
    }

    /// Replace the source lines of the cell at `index`.
    ///
    /// Only the `source` array is touched; sibling fields on the cell are
    /// left as they were.
    pub fn set_cell_source(&mut self, index: usize, lines: Vec<String>) -> Result<(), NotebookError> {
        let cell = self.cell_mut(index)?;

        let source = lines.into_iter().map(Value::String).collect();
        cell.as_object_mut()
            .ok_or(NotebookError::InvalidCell { index })?
            .insert("source".to_string(), Value::Array(source));

        Ok(())
    }

    /// Serialize the document to pretty-printed JSON with one-space indentation
    pub fn to_json_pretty(&self) -> Result<String, NotebookError> {
        let formatter = PrettyFormatter::with_indent(b" ");
        let mut buffer = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buffer, formatter);

        self.value
            .serialize(&mut serializer)
            .map_err(|e| NotebookError::Serialize(e.to_string()))?;

        String::from_utf8(buffer).map_err(|e| NotebookError::Serialize(e.to_string()))
    }

    /// Get a cell by index
    fn cell(&self, index: usize) -> Result<&Value, NotebookError> {
        let cell = self.value["cells"]
            .as_array()
            .and_then(|cells| cells.get(index))
            .ok_or(NotebookError::InvalidCell { index })?;

        if !cell.is_object() {
            return Err(NotebookError::InvalidCell { index });
        }

        Ok(cell)
    }

    /// Get a mutable cell by index
    fn cell_mut(&mut self, index: usize) -> Result<&mut Value, NotebookError> {
        self.value["cells"]
            .as_array_mut()
            .and_then(|cells| cells.get_mut(index))
            .ok_or(NotebookError::InvalidCell { index })
    }
}

/// Derive the output path for a translated notebook.
///
/// The `.ipynb` suffix is replaced with `_{target}.ipynb`, so that the
/// translated file sits next to the original (e.g. `lesson.ipynb` with
/// target `en` becomes `lesson_en.ipynb`).
pub fn derive_output_path(input_file: &Path, target_language: &str) -> PathBuf {
    let stem = input_file
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "output".to_string());

    let output_filename = format!("{}_{}.{}", stem, target_language, NOTEBOOK_EXTENSION);

    match input_file.parent() {
        Some(parent) => parent.join(output_filename),
        None => PathBuf::from(output_filename),
    }
}

/// Check whether a path looks like a translated output for the given target
/// language, so folder discovery does not feed outputs back in as inputs.
pub fn is_translated_output(path: &Path, target_language: &str) -> bool {
    let suffix = format!("_{}", target_language);
    path.file_stem()
        .map(|s| s.to_string_lossy().ends_with(&suffix))
        .unwrap_or(false)
}
