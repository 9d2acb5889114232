use crate::annotation::AnnotationConfig;
use crate::diagram::DiagramDefinition;
use crate::error::FlattenError;
use crate::graph::ScriptGraph;
use crate::render::MarkdownRenderer;
use tracing::debug;

mod flatten;
mod negate;

use flatten::Flattener;
pub use flatten::{DecisionLine, DirectGoto, SectionScript};
pub use negate::negate_question;

/// The result of one compilation run: the assembled document, the structured
/// per-section scripts it was rendered from, and the recoverable diagnostics
/// collected along the way.
pub struct ScriptArtifacts {
    pub document: String,
    pub sections: Vec<SectionScript>,
    pub dangling: Vec<FlattenError>,
}

/// Compiles a diagram into a sectioned script document.
pub struct ScriptCompiler {
    graph: ScriptGraph,
}

pub struct CompilerBuilder {
    diagram: DiagramDefinition,
    config: AnnotationConfig,
}

impl CompilerBuilder {
    pub fn new(diagram: DiagramDefinition, author: impl Into<String>) -> Self {
        Self {
            diagram,
            config: AnnotationConfig::for_author(author),
        }
    }

    /// Overrides the comment prefix that hides a node (default `"hide:"`).
    pub fn with_hide_prefix(mut self, prefix: &str) -> Self {
        self.config.hide_prefix = prefix.to_string();
        self
    }

    /// Overrides the comment prefix that carries a jump phrase
    /// (default `"jump:"`).
    pub fn with_jump_prefix(mut self, prefix: &str) -> Self {
        self.config.jump_prefix = prefix.to_string();
        self
    }

    pub fn build(self) -> ScriptCompiler {
        ScriptCompiler {
            graph: ScriptGraph::build(&self.diagram, &self.config),
        }
    }
}

impl ScriptCompiler {
    pub fn builder(diagram: DiagramDefinition, author: impl Into<String>) -> CompilerBuilder {
        CompilerBuilder::new(diagram, author)
    }

    /// Flattens every eligible node and renders the document.
    ///
    /// Eligible nodes are processes and terminators that are not hidden and
    /// have non-empty title text; they are visited in node-table order. The
    /// run always completes: per-branch lookup failures are collected on the
    /// artifacts instead of aborting.
    pub fn compile(self) -> ScriptArtifacts {
        let mut flattener = Flattener::new(&self.graph);
        let mut sections = Vec::new();

        for node in self.graph.nodes() {
            if !node.is_sectionable() {
                continue;
            }
            if node.directives.hidden {
                debug!(node = %node.id, "hiding node");
                continue;
            }
            if node.text.trim().is_empty() {
                continue;
            }
            sections.push(flattener.flatten_node(node));
        }

        let document = MarkdownRenderer::render(&sections);
        debug!(
            sections = sections.len(),
            bytes = document.len(),
            "compiled script document"
        );

        ScriptArtifacts {
            document,
            sections,
            dangling: flattener.into_errors(),
        }
    }
}
