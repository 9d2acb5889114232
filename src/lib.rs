//! # Daihon - Diagram-to-Script Compilation Engine
//!
//! **Daihon** is a compilation engine that transforms flowchart-style
//! decision-tree diagrams into structured, sectioned script documents in a
//! lightweight markup, suitable for driving a scripted conversation such as
//! an agent's call script.
//!
//! ## Core Workflow
//!
//! The engine is designed to be format-agnostic. It operates on a canonical
//! internal model of a diagram. The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your diagram tool's export format into your
//!     own Rust structs, or use the bundled Lucidchart CSV adapter.
//! 2.  **Convert to Daihon's Model**: Implement the `IntoDiagram` trait for
//!     your structs to provide a translation layer into Daihon's
//!     `DiagramDefinition`.
//! 3.  **Compile**: Use `ScriptCompiler::builder` to create a compiler with
//!     the `DiagramDefinition` and the script author whose comments carry
//!     directives. The compiler builds the graph, flattens every eligible
//!     node's decision subgraph, and renders the document.
//!
//! ## Quick Start
//!
//! The following example compiles a three-node diagram end to end.
//!
//! ```rust,no_run
//! use daihon::prelude::*;
//!
//! fn main() {
//!     let diagram = DiagramDefinition {
//!         shapes: vec![
//!             ShapeDefinition {
//!                 id: "p1".to_string(),
//!                 text: "Intro".to_string(),
//!                 comment: String::new(),
//!                 kind: ShapeKind::Process,
//!             },
//!             ShapeDefinition {
//!                 id: "d1".to_string(),
//!                 text: "If debt is low".to_string(),
//!                 comment: String::new(),
//!                 kind: ShapeKind::Decision,
//!             },
//!             ShapeDefinition {
//!                 id: "p2".to_string(),
//!                 text: "Close".to_string(),
//!                 comment: String::new(),
//!                 kind: ShapeKind::Process,
//!             },
//!             ShapeDefinition {
//!                 id: "c1".to_string(),
//!                 text: String::new(),
//!                 comment: String::new(),
//!                 kind: ShapeKind::Connector {
//!                     source: "p1".to_string(),
//!                     target: "d1".to_string(),
//!                     arrow_text: String::new(),
//!                 },
//!             },
//!             ShapeDefinition {
//!                 id: "c2".to_string(),
//!                 text: "No".to_string(),
//!                 comment: String::new(),
//!                 kind: ShapeKind::Connector {
//!                     source: "d1".to_string(),
//!                     target: "p2".to_string(),
//!                     arrow_text: "No".to_string(),
//!                 },
//!             },
//!         ],
//!     };
//!
//!     // Compile the diagram; only comments by the named author carry
//!     // hide/jump/body directives.
//!     let compiler = ScriptCompiler::builder(diagram, "Jeremy Villalobos").build();
//!     let artifacts = compiler.compile();
//!
//!     // Recoverable per-branch failures never abort the run.
//!     for error in &artifacts.dangling {
//!         eprintln!("warning: {}", error);
//!     }
//!
//!     println!("{}", artifacts.document);
//! }
//! ```
//!
//! To consume your own export format instead, implement
//! [`IntoDiagram`](diagram::IntoDiagram) on your parsed structs and feed the
//! resulting `DiagramDefinition` to the same builder.

pub mod annotation;
pub mod compiler;
pub mod diagram;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod render;
