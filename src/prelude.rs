//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! daihon crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use daihon::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load and convert a diagram export
//! let export = LucidCsvExport::from_path("path/to/diagram.csv")?;
//! let diagram = export.into_diagram()?;
//!
//! // Compile it into a script document
//! let compiler = ScriptCompiler::builder(diagram, "Jeremy Villalobos").build();
//! let artifacts = compiler.compile();
//!
//! println!("{}", artifacts.document);
//! # Ok(())
//! # }
//! ```

// Core compilation
pub use crate::compiler::{
    DecisionLine, DirectGoto, ScriptArtifacts, ScriptCompiler, SectionScript, negate_question,
};

// Diagram model and conversion
pub use crate::diagram::{
    DiagramDefinition, IntoDiagram, LucidCsvExport, ShapeDefinition, ShapeKind,
};

// Graph and annotation types
pub use crate::annotation::{AnnotationConfig, Directives};
pub use crate::graph::{Connection, Node, NodeKind, ScriptGraph};

// Rendering
pub use crate::render::MarkdownRenderer;

// Error types
pub use crate::error::{DiagramConversionError, FlattenError};

// Standard library re-exports commonly used with this crate
pub use std::path::Path;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
