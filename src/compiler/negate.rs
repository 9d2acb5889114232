/// Negates a decision question for its "No" branch.
///
/// If the text contains the literal substring `"If"`, the first occurrence
/// becomes `"If not"` and any later occurrences are rewritten as `"if "`.
/// Text without an `"If"` is returned unchanged; no negation is applied.
pub fn negate_question(question: &str) -> String {
    match question.split_once("If") {
        Some((prefix, rest)) => {
            let mut negated = String::with_capacity(question.len() + 4);
            negated.push_str(prefix);
            negated.push_str("If not");
            negated.push_str(&rest.replace("If", "if "));
            negated
        }
        None => question.to_string(),
    }
}
