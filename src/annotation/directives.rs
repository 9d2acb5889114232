use super::payload::CommentThread;
use itertools::Itertools;
use tracing::warn;

/// Configures which comments carry directives and how they are spelled.
///
/// Only comments whose creator matches `author` exactly (case-sensitive) are
/// interpreted; everyone else's comments are ignored entirely.
#[derive(Debug, Clone)]
pub struct AnnotationConfig {
    pub author: String,
    pub hide_prefix: String,
    pub jump_prefix: String,
}

impl AnnotationConfig {
    pub fn for_author(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            hide_prefix: "hide:".to_string(),
            jump_prefix: "jump:".to_string(),
        }
    }
}

/// Structured instructions extracted from a node's author comments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directives {
    /// The node is excluded from the document and truncates any branch
    /// reaching it.
    pub hidden: bool,
    /// The phrase to say when jumping into this node's section; empty if the
    /// author never supplied one.
    pub jump_phrase: String,
    /// Newline-joined free-text comment content, jump directives excluded.
    pub body_content: String,
}

impl Directives {
    /// Parses a raw comment payload (a JSON array of comment threads) into
    /// directives.
    ///
    /// Parsing is tolerant: an empty or malformed payload yields the default
    /// directive set. A comment-parsing failure must never abort a
    /// conversion run, so the error is logged and swallowed here.
    pub fn parse(payload: &str, config: &AnnotationConfig) -> Self {
        if payload.trim().is_empty() {
            return Self::default();
        }

        let threads: Vec<CommentThread> = match serde_json::from_str(payload) {
            Ok(threads) => threads,
            Err(error) => {
                warn!(%error, "ignoring unparseable comment payload");
                return Self::default();
            }
        };

        let mut hidden = false;
        let mut jump_phrase = String::new();

        for content in author_comments(&threads, config) {
            if content.starts_with(&config.hide_prefix) {
                hidden = true;
            }
            // The first jump directive wins; later ones are ignored.
            if let Some(rest) = content.strip_prefix(&config.jump_prefix) {
                if jump_phrase.is_empty() {
                    jump_phrase = rest.trim().to_string();
                }
            }
        }

        let body_content = author_comments(&threads, config)
            .filter(|content| !content.is_empty() && !content.starts_with(&config.jump_prefix))
            .join("\n");

        Self {
            hidden,
            jump_phrase,
            body_content,
        }
    }
}

/// Trimmed content of every comment written by the configured author, in
/// payload order.
fn author_comments<'a>(
    threads: &'a [CommentThread],
    config: &'a AnnotationConfig,
) -> impl Iterator<Item = &'a str> {
    threads
        .iter()
        .flat_map(|thread| &thread.comments)
        .filter(|comment| comment.creator == config.author)
        .map(|comment| comment.content.trim())
}
