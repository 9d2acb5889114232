use crate::compiler::{DecisionLine, SectionScript};

/// Renders flattened sections into the final markdown-flavored document.
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Assembles the whole document as a single string; nothing is written
    /// incrementally. Sections appear in the order given, which the compiler
    /// guarantees to be node-table order.
    pub fn render(sections: &[SectionScript]) -> String {
        let mut output: Vec<String> = Vec::new();

        for section in sections {
            if section.title.is_empty() {
                continue;
            }
            output.push(format!("\n## {}", section.title));
            if !section.body.is_empty() {
                output.push(format!("\n{}", section.body));
            }
            if let Some(goto) = &section.direct_goto {
                // The direct goto keeps its jump phrase unquoted.
                output.push(format!(
                    "- goto {} section. say: {}",
                    goto.target_title, goto.jump_phrase
                ));
            }
            if !section.decisions.is_empty() {
                output.push("\n- Key questions:".to_string());
                for line in &section.decisions {
                    output.push(Self::render_decision(line));
                }
            }
        }

        output.join("\n")
    }

    fn render_decision(line: &DecisionLine) -> String {
        format!(
            "{}- {}? goto {} section. say: \"{}\"",
            "\t".repeat(line.level),
            line.question,
            line.target_title,
            line.jump_phrase
        )
    }
}
