use crate::annotation::{AnnotationConfig, Directives};
use crate::diagram::{DiagramDefinition, ShapeDefinition, ShapeKind};
use ahash::AHashMap;
use indexmap::IndexMap;
use tracing::debug;

/// Index of a connection in the graph's connection arena.
pub type ConnectionId = usize;

/// The role a node plays during flattening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Process,
    Terminator,
    Decision,
}

/// A non-connector diagram element with its parsed directives.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: String,
    pub text: String,
    pub kind: NodeKind,
    pub directives: Directives,
}

impl Node {
    /// Whether this node anchors its own section in the output document.
    pub fn is_sectionable(&self) -> bool {
        matches!(self.kind, NodeKind::Process | NodeKind::Terminator)
    }
}

/// A labeled directed edge between two nodes. Connections reference nodes by
/// id only; neither endpoint owns the connection.
#[derive(Debug, Clone)]
pub struct Connection {
    pub source: String,
    pub target: String,
    pub label: String,
}

/// Adjacency structure built once per conversion run: an insertion-ordered
/// node table keyed by id, a connection arena, and an outgoing multimap
/// keyed by source id.
#[derive(Debug, Default)]
pub struct ScriptGraph {
    nodes: IndexMap<String, Node>,
    connections: Vec<Connection>,
    outgoing: AHashMap<String, Vec<ConnectionId>>,
}

impl ScriptGraph {
    /// Partitions the diagram's shapes into nodes and connections, parsing
    /// each node's comment payload exactly once.
    ///
    /// No deduplication is performed: if two shapes share an id, the later
    /// one overwrites the earlier entry in the node table while keeping its
    /// original position (last write wins).
    pub fn build(diagram: &DiagramDefinition, config: &AnnotationConfig) -> Self {
        let mut graph = Self::default();

        for shape in &diagram.shapes {
            match &shape.kind {
                ShapeKind::Connector {
                    source,
                    target,
                    arrow_text,
                } => {
                    let id = graph.connections.len();
                    graph.connections.push(Connection {
                        source: source.clone(),
                        target: target.clone(),
                        label: arrow_text.clone(),
                    });
                    graph.outgoing.entry(source.clone()).or_default().push(id);
                }
                ShapeKind::Process => graph.insert_node(shape, NodeKind::Process, config),
                ShapeKind::Terminator => graph.insert_node(shape, NodeKind::Terminator, config),
                ShapeKind::Decision => graph.insert_node(shape, NodeKind::Decision, config),
            }
        }

        debug!(
            nodes = graph.nodes.len(),
            connections = graph.connections.len(),
            "built script graph"
        );
        graph
    }

    fn insert_node(&mut self, shape: &ShapeDefinition, kind: NodeKind, config: &AnnotationConfig) {
        let directives = Directives::parse(&shape.comment, config);
        self.nodes.insert(
            shape.id.clone(),
            Node {
                id: shape.id.clone(),
                text: shape.text.clone(),
                kind,
                directives,
            },
        );
    }

    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Iterates nodes in table order (shape insertion order).
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Resolves a connection id from the arena.
    pub fn connection(&self, id: ConnectionId) -> &Connection {
        &self.connections[id]
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// All outgoing connections of a node, in diagram order. A node with no
    /// outgoing connections yields an empty slice.
    pub fn outgoing(&self, node_id: &str) -> &[ConnectionId] {
        self.outgoing
            .get(node_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
