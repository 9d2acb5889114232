//! Tests for the decision flattening engine: chain collapsing, traversal
//! order, hidden-branch truncation, and dangling-reference recovery.
mod common;
use common::*;
use daihon::prelude::*;

fn section_for<'a>(artifacts: &'a ScriptArtifacts, title: &str) -> &'a SectionScript {
    artifacts
        .sections
        .iter()
        .find(|s| s.title == title)
        .unwrap_or_else(|| panic!("no section titled '{}'", title))
}

#[test]
fn test_no_chain_flattens_to_single_line() {
    let artifacts = compile(create_decision_chain_diagram());

    let start = section_for(&artifacts, "Start");
    assert_eq!(
        start.decisions.len(),
        1,
        "a pure \"No\" chain must collapse to one line"
    );

    let line = &start.decisions[0];
    assert_eq!(line.level, 1);
    // The leaf-adjacent decision's text is the one negated.
    assert_eq!(line.question, "If not account active");
    assert_eq!(line.target_title, "Escalate");
}

#[test]
fn test_branch_fan_out_keeps_traversal_order() {
    let artifacts = compile(create_branching_diagram());

    let start = section_for(&artifacts, "Start");
    assert_eq!(start.decisions.len(), 2);

    // The "Yes" connector was inserted first, so its line comes first; the
    // order reflects traversal, not label precedence.
    assert_eq!(start.decisions[0].question, "Has debt");
    assert_eq!(start.decisions[0].target_title, "Transfer");
    assert_eq!(start.decisions[1].question, "Has debt");
    assert_eq!(start.decisions[1].target_title, "Offer");
}

#[test]
fn test_yes_branch_is_never_negated() {
    let diagram = DiagramDefinition {
        shapes: vec![
            process("start", "Start"),
            decision("d1", "If debt is low"),
            process("leaf", "Transfer"),
            connector("c1", "start", "d1", ""),
            connector("c2", "d1", "leaf", "Yes"),
        ],
    };
    let artifacts = compile(diagram);

    let start = section_for(&artifacts, "Start");
    assert_eq!(start.decisions[0].question, "If debt is low");
}

#[test]
fn test_hidden_target_truncates_branch() {
    let hide = comment_payload(AUTHOR, &["hide: drop this"]);
    let diagram = DiagramDefinition {
        shapes: vec![
            process("start", "Start"),
            decision_with_comment("d1", "Has debt", &hide),
            process("leaf", "Offer"),
            connector("c1", "start", "d1", ""),
            connector("c2", "d1", "leaf", "No"),
        ],
    };
    let artifacts = compile(diagram);

    // The hidden decision truncates the branch; its own targets are not
    // spliced through.
    let start = section_for(&artifacts, "Start");
    assert!(start.decisions.is_empty());
    assert!(start.direct_goto.is_none());
}

#[test]
fn test_hidden_leaf_is_never_a_goto_target() {
    let hide = comment_payload(AUTHOR, &["hide: retired offer"]);
    let diagram = DiagramDefinition {
        shapes: vec![
            process("start", "Start"),
            decision("d1", "Has debt"),
            process_with_comment("leaf", "Offer", &hide),
            connector("c1", "start", "d1", ""),
            connector("c2", "d1", "leaf", "No"),
        ],
    };
    let artifacts = compile(diagram);

    let start = section_for(&artifacts, "Start");
    assert!(start.decisions.is_empty());
    assert!(!artifacts.document.contains("Offer"));
}

#[test]
fn test_dangling_reference_is_collected_not_fatal() {
    let diagram = DiagramDefinition {
        shapes: vec![
            process("start", "Start"),
            process("next", "Next"),
            connector("c1", "start", "ghost", ""),
            connector("c2", "start", "next", ""),
        ],
    };
    let artifacts = compile(diagram);

    assert_eq!(
        artifacts.dangling,
        vec![FlattenError::DanglingReference {
            missing_node_id: "ghost".to_string(),
            source_node_id: "start".to_string(),
        }]
    );
    // The bad edge is skipped; the rest of the traversal still runs.
    let start = section_for(&artifacts, "Start");
    assert_eq!(
        start.direct_goto.as_ref().map(|g| g.target_title.as_str()),
        Some("Next")
    );
}

#[test]
fn test_last_process_target_wins_direct_goto() {
    let diagram = DiagramDefinition {
        shapes: vec![
            process("start", "Start"),
            process("a", "First stop"),
            process("b", "Second stop"),
            connector("c1", "start", "a", ""),
            connector("c2", "start", "b", ""),
        ],
    };
    let artifacts = compile(diagram);

    let start = section_for(&artifacts, "Start");
    assert_eq!(
        start.direct_goto.as_ref().map(|g| g.target_title.as_str()),
        Some("Second stop")
    );
}

#[test]
fn test_terminator_target_produces_no_goto() {
    let diagram = DiagramDefinition {
        shapes: vec![
            process("start", "Start"),
            terminator("end", "Hang up"),
            connector("c1", "start", "end", ""),
        ],
    };
    let artifacts = compile(diagram);

    let start = section_for(&artifacts, "Start");
    assert!(start.direct_goto.is_none());
    assert!(start.decisions.is_empty());
}

#[test]
fn test_decision_cycle_terminates() {
    let diagram = DiagramDefinition {
        shapes: vec![
            process("start", "Start"),
            decision("d1", "First check"),
            decision("d2", "Second check"),
            connector("c1", "start", "d1", ""),
            connector("c2", "d1", "d2", "No"),
            connector("c3", "d2", "d1", "No"),
        ],
    };
    let artifacts = compile(diagram);

    // A "No" cycle between decisions must be bounded, not looped forever.
    let start = section_for(&artifacts, "Start");
    assert!(start.decisions.is_empty());
    assert!(artifacts.dangling.is_empty());
}

#[test]
fn test_decision_with_empty_text_contributes_nothing() {
    let diagram = DiagramDefinition {
        shapes: vec![
            process("start", "Start"),
            decision("d1", "   "),
            process("leaf", "Offer"),
            connector("c1", "start", "d1", ""),
            connector("c2", "d1", "leaf", "No"),
        ],
    };
    let artifacts = compile(diagram);

    let start = section_for(&artifacts, "Start");
    assert!(start.decisions.is_empty());
}

#[test]
fn test_non_no_branch_into_decision_emits_line() {
    // Any label other than "No" resolves to a line immediately, even when
    // the target is itself a decision.
    let diagram = DiagramDefinition {
        shapes: vec![
            process("start", "Start"),
            decision("d1", "Has debt"),
            decision("d2", "Wants callback"),
            connector("c1", "start", "d1", ""),
            connector("c2", "d1", "d2", "Yes"),
        ],
    };
    let artifacts = compile(diagram);

    let start = section_for(&artifacts, "Start");
    assert_eq!(start.decisions.len(), 1);
    assert_eq!(start.decisions[0].question, "Has debt");
    assert_eq!(start.decisions[0].target_title, "Wants callback");
}

#[test]
fn test_jump_phrase_travels_with_decision_line() {
    let jump = comment_payload(AUTHOR, &["jump: Let me transfer you"]);
    let diagram = DiagramDefinition {
        shapes: vec![
            process("start", "Start"),
            decision("d1", "Has debt"),
            process_with_comment("leaf", "Transfer", &jump),
            connector("c1", "start", "d1", ""),
            connector("c2", "d1", "leaf", "No"),
        ],
    };
    let artifacts = compile(diagram);

    let start = section_for(&artifacts, "Start");
    assert_eq!(start.decisions[0].jump_phrase, "Let me transfer you");
}
