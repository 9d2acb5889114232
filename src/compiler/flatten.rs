use super::negate::negate_question;
use crate::error::FlattenError;
use crate::graph::{Connection, ConnectionId, Node, NodeKind, ScriptGraph};
use ahash::AHashSet;
use std::collections::VecDeque;
use tracing::{debug, warn};

/// One flattened question/goto pair, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionLine {
    /// Nesting depth in tab stops. Chains of decisions share the level of
    /// the decision that anchored them.
    pub level: usize,
    /// Question text, already negated for "No" branches.
    pub question: String,
    pub target_title: String,
    pub jump_phrase: String,
}

/// A section-level instruction pointing at another process node's section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectGoto {
    pub target_title: String,
    pub jump_phrase: String,
}

/// Everything one eligible node contributes to the document.
#[derive(Debug, Clone)]
pub struct SectionScript {
    pub title: String,
    pub body: String,
    pub direct_goto: Option<DirectGoto>,
    pub decisions: Vec<DecisionLine>,
}

/// Collapses the decision subgraph reachable from a start node into decision
/// lines and at most one direct goto.
///
/// Traversal is an explicit FIFO queue of `(connection, level)` pairs over
/// the graph's connection arena. It stops expanding once it reaches a
/// process or terminator, emitting a goto to it rather than recursing into
/// that node's own section.
pub(super) struct Flattener<'a> {
    graph: &'a ScriptGraph,
    dangling: Vec<FlattenError>,
}

impl<'a> Flattener<'a> {
    pub(super) fn new(graph: &'a ScriptGraph) -> Self {
        Self {
            graph,
            dangling: Vec::new(),
        }
    }

    /// Dangling-reference diagnostics collected across all flattened nodes.
    pub(super) fn into_errors(self) -> Vec<FlattenError> {
        self.dangling
    }

    pub(super) fn flatten_node(&mut self, start: &Node) -> SectionScript {
        let graph = self.graph;
        let mut decisions = Vec::new();
        let mut direct_goto = None;

        let mut queue: VecDeque<(ConnectionId, usize)> = graph
            .outgoing(&start.id)
            .iter()
            .map(|&id| (id, 1))
            .collect();
        // Each connection is expanded at most once per start node, which
        // bounds traversal of cyclic decision graphs.
        let mut visited: AHashSet<ConnectionId> = AHashSet::new();

        while let Some((connection_id, level)) = queue.pop_front() {
            if !visited.insert(connection_id) {
                continue;
            }
            let connection = graph.connection(connection_id);
            let Some(target) = self.resolve(connection) else {
                continue;
            };
            if target.directives.hidden {
                debug!(node = %target.id, "hiding branch target");
                continue;
            }

            match target.kind {
                NodeKind::Decision => {
                    let question = target.text.trim();
                    if question.is_empty() {
                        continue;
                    }
                    // A "No" edge into a further decision extends the chain
                    // at the same level; everything else resolves to a line.
                    for &branch_id in graph.outgoing(&target.id) {
                        let branch = graph.connection(branch_id);
                        let Some(branch_target) = self.resolve(branch) else {
                            continue;
                        };
                        if branch_target.directives.hidden {
                            debug!(node = %branch_target.id, "hiding branch target");
                            continue;
                        }
                        if branch.label.trim() == "No" {
                            if branch_target.kind == NodeKind::Decision {
                                queue.push_back((branch_id, level));
                            } else {
                                decisions.push(DecisionLine {
                                    level,
                                    question: negate_question(question),
                                    target_title: branch_target.text.clone(),
                                    jump_phrase: branch_target.directives.jump_phrase.clone(),
                                });
                            }
                        } else {
                            decisions.push(DecisionLine {
                                level,
                                question: question.to_string(),
                                target_title: branch_target.text.clone(),
                                jump_phrase: branch_target.directives.jump_phrase.clone(),
                            });
                        }
                    }
                }
                // Only the last process target encountered keeps the direct
                // goto; terminators are leaves and are never expanded.
                NodeKind::Process => {
                    direct_goto = Some(DirectGoto {
                        target_title: target.text.clone(),
                        jump_phrase: target.directives.jump_phrase.clone(),
                    });
                }
                NodeKind::Terminator => {}
            }
        }

        SectionScript {
            title: start.text.trim().to_string(),
            body: start.directives.body_content.clone(),
            direct_goto,
            decisions,
        }
    }

    fn resolve(&mut self, connection: &Connection) -> Option<&'a Node> {
        match self.graph.node(&connection.target) {
            Some(node) => Some(node),
            None => {
                warn!(
                    missing = %connection.target,
                    source = %connection.source,
                    "skipping connection to missing node"
                );
                self.dangling.push(FlattenError::DanglingReference {
                    missing_node_id: connection.target.clone(),
                    source_node_id: connection.source.clone(),
                });
                None
            }
        }
    }
}
