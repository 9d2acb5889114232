use thiserror::Error;

/// Errors that can occur while converting a diagram export into a `DiagramDefinition`.
#[derive(Error, Debug, Clone)]
pub enum DiagramConversionError {
    #[error("Shape '{id}' has an unrecognized shape category: '{name}'")]
    UnknownShapeCategory { id: String, name: String },

    #[error("Failed to read diagram export: {0}")]
    ReadError(String),
}

/// Recoverable per-branch errors collected by the flattening engine.
///
/// These never abort a compilation run. They are gathered on the resulting
/// [`ScriptArtifacts`](crate::compiler::ScriptArtifacts) so that one bad edge
/// does not cost the whole document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlattenError {
    #[error(
        "Node '{missing_node_id}' not found, which is required by a connection from node '{source_node_id}'"
    )]
    DanglingReference {
        missing_node_id: String,
        source_node_id: String,
    },
}
