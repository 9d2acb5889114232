use super::conversion::IntoDiagram;
use super::definition::{DiagramDefinition, ShapeDefinition, ShapeKind};
use crate::error::DiagramConversionError;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// One row of a Lucidchart CSV export. Column names follow the export
/// format, so this struct only exists on the way into `DiagramDefinition`.
#[derive(Debug, Deserialize)]
struct LucidRow {
    #[serde(rename = "Id")]
    id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(default)]
    #[serde(rename = "Text Area 1")]
    text: String,
    #[serde(default)]
    #[serde(rename = "Comments")]
    comments: String,
    #[serde(default)]
    #[serde(rename = "Line Source")]
    line_source: String,
    #[serde(default)]
    #[serde(rename = "Line Destination")]
    line_destination: String,
}

/// A parsed Lucidchart CSV export, one record per diagram element.
#[derive(Debug)]
pub struct LucidCsvExport {
    rows: Vec<LucidRow>,
}

impl LucidCsvExport {
    /// Reads an export from a CSV file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DiagramConversionError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            DiagramConversionError::ReadError(format!(
                "could not open '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_reader(file)
    }

    /// Reads an export from any CSV byte stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DiagramConversionError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let rows = csv_reader
            .deserialize()
            .collect::<Result<Vec<LucidRow>, _>>()
            .map_err(|e| DiagramConversionError::ReadError(e.to_string()))?;
        debug!(rows = rows.len(), "parsed diagram export");
        Ok(Self { rows })
    }
}

impl IntoDiagram for LucidCsvExport {
    /// Maps each export row to a shape record by the substrings Lucidchart
    /// puts in the shape-name column. Page, document and floating-text rows
    /// carry no script content and are dropped here; anything else
    /// unrecognized is a hard error, since conversion cannot proceed without
    /// knowing an element's role.
    fn into_diagram(self) -> Result<DiagramDefinition, DiagramConversionError> {
        let mut shapes = Vec::with_capacity(self.rows.len());

        for row in self.rows {
            let kind = if row.name.contains("Terminator") {
                ShapeKind::Terminator
            } else if row.name.contains("Decision") {
                ShapeKind::Decision
            } else if row.name.contains("Process") {
                ShapeKind::Process
            } else if row.name.contains("Page") {
                continue;
            } else if row.name.contains("Line") {
                ShapeKind::Connector {
                    source: row.line_source,
                    target: row.line_destination,
                    arrow_text: row.text.clone(),
                }
            } else if row.name.contains("Document") {
                continue;
            } else if row.name.contains("Text") {
                continue;
            } else {
                return Err(DiagramConversionError::UnknownShapeCategory {
                    id: row.id,
                    name: row.name,
                });
            };

            shapes.push(ShapeDefinition {
                id: row.id,
                text: row.text,
                comment: row.comments,
                kind,
            });
        }

        Ok(DiagramDefinition { shapes })
    }
}
