//! Common test utilities for building diagram definitions and comment payloads.
use daihon::prelude::*;

/// The script author whose comments carry directives in these tests.
pub const AUTHOR: &str = "Jeremy Villalobos";

#[allow(dead_code)]
pub fn process(id: &str, text: &str) -> ShapeDefinition {
    shape(id, text, "", ShapeKind::Process)
}

#[allow(dead_code)]
pub fn process_with_comment(id: &str, text: &str, comment: &str) -> ShapeDefinition {
    shape(id, text, comment, ShapeKind::Process)
}

#[allow(dead_code)]
pub fn terminator(id: &str, text: &str) -> ShapeDefinition {
    shape(id, text, "", ShapeKind::Terminator)
}

#[allow(dead_code)]
pub fn decision(id: &str, text: &str) -> ShapeDefinition {
    shape(id, text, "", ShapeKind::Decision)
}

#[allow(dead_code)]
pub fn decision_with_comment(id: &str, text: &str, comment: &str) -> ShapeDefinition {
    shape(id, text, comment, ShapeKind::Decision)
}

#[allow(dead_code)]
pub fn connector(id: &str, source: &str, target: &str, label: &str) -> ShapeDefinition {
    ShapeDefinition {
        id: id.to_string(),
        text: label.to_string(),
        comment: String::new(),
        kind: ShapeKind::Connector {
            source: source.to_string(),
            target: target.to_string(),
            arrow_text: label.to_string(),
        },
    }
}

fn shape(id: &str, text: &str, comment: &str, kind: ShapeKind) -> ShapeDefinition {
    ShapeDefinition {
        id: id.to_string(),
        text: text.to_string(),
        comment: comment.to_string(),
        kind,
    }
}

/// Builds a raw comment payload the way the diagram tool encodes it: a JSON
/// array of comment threads, each holding creator/content entries.
#[allow(dead_code)]
pub fn comment_payload(author: &str, contents: &[&str]) -> String {
    let comments: Vec<serde_json::Value> = contents
        .iter()
        .map(|content| serde_json::json!({ "Creator": author, "Content": content }))
        .collect();
    serde_json::json!([{ "Comments": comments }]).to_string()
}

/// The three-node scenario: `Intro` -> `Has debt` -"No"-> `Close`.
#[allow(dead_code)]
pub fn create_intro_diagram() -> DiagramDefinition {
    DiagramDefinition {
        shapes: vec![
            process("p1", "Intro"),
            decision("d1", "Has debt"),
            process("p2", "Close"),
            connector("c1", "p1", "d1", ""),
            connector("c2", "d1", "p2", "No"),
        ],
    }
}

/// A decision with a "Yes" and a "No" branch, both into process leaves. The
/// "Yes" connector is inserted first.
#[allow(dead_code)]
pub fn create_branching_diagram() -> DiagramDefinition {
    DiagramDefinition {
        shapes: vec![
            process("start", "Start"),
            decision("d1", "Has debt"),
            process("yes_leaf", "Transfer"),
            process("no_leaf", "Offer"),
            connector("c1", "start", "d1", ""),
            connector("c2", "d1", "yes_leaf", "Yes"),
            connector("c3", "d1", "no_leaf", "No"),
        ],
    }
}

/// A chain of decisions linked solely by "No" edges, ending in a process
/// leaf: `Start` -> `If debt is low` -"No"-> `If account active` -"No"->
/// `Escalate`.
#[allow(dead_code)]
pub fn create_decision_chain_diagram() -> DiagramDefinition {
    DiagramDefinition {
        shapes: vec![
            process("start", "Start"),
            decision("d1", "If debt is low"),
            decision("d2", "If account active"),
            process("leaf", "Escalate"),
            connector("c1", "start", "d1", ""),
            connector("c2", "d1", "d2", "No"),
            connector("c3", "d2", "leaf", "No"),
        ],
    }
}

/// Compiles a diagram with the shared test author.
#[allow(dead_code)]
pub fn compile(diagram: DiagramDefinition) -> ScriptArtifacts {
    ScriptCompiler::builder(diagram, AUTHOR).build().compile()
}
