use serde::Deserialize;

/// One comment thread attached to a shape in the diagram tool.
#[derive(Debug, Deserialize)]
pub(crate) struct CommentThread {
    #[serde(default)]
    #[serde(alias = "Comments")]
    pub comments: Vec<CommentEntry>,
}

/// A single comment within a thread.
#[derive(Debug, Deserialize)]
pub(crate) struct CommentEntry {
    #[serde(default)]
    #[serde(alias = "Creator")]
    pub creator: String,
    #[serde(default)]
    #[serde(alias = "Content")]
    pub content: String,
}
