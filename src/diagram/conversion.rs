use super::definition::DiagramDefinition;
use crate::error::DiagramConversionError;

/// A trait for custom export formats that can be converted into a daihon
/// `DiagramDefinition`.
///
/// This is the primary extension point for making daihon format-agnostic. By
/// implementing this trait on your own export structs, you provide a
/// translation layer that lets the script compiler process any diagram
/// tool's output. The bundled [`LucidCsvExport`](super::lucid::LucidCsvExport)
/// is one such implementation.
///
/// # Example
///
/// ```rust,no_run
/// use daihon::prelude::*;
/// use daihon::error::DiagramConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyShape { id: String, label: String }
/// struct MyExport { shapes: Vec<MyShape> }
///
/// // 2. Implement `IntoDiagram` for your top-level struct.
/// impl IntoDiagram for MyExport {
///     fn into_diagram(self) -> std::result::Result<DiagramDefinition, DiagramConversionError> {
///         let shapes = self
///             .shapes
///             .into_iter()
///             .map(|shape| ShapeDefinition {
///                 id: shape.id,
///                 text: shape.label,
///                 comment: String::new(),
///                 kind: ShapeKind::Process, // Map your shape roles here
///             })
///             .collect();
///
///         Ok(DiagramDefinition { shapes })
///     }
/// }
/// ```
pub trait IntoDiagram {
    /// Consumes the object and converts it into a daihon-compatible diagram.
    fn into_diagram(self) -> Result<DiagramDefinition, DiagramConversionError>;
}
