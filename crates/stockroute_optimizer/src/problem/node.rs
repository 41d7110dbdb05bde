use serde::Serialize;

use crate::define_index_newtype;

define_index_newtype!(NodeIdx, Node);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NodeKind {
    /// Stock-holding center, visited exactly once per candidate route.
    Source,
    /// Final destination every candidate route ends at.
    Sink,
}

#[derive(Debug, Clone)]
pub struct Node {
    external_id: String,
    kind: NodeKind,
}

impl Node {
    pub fn new(external_id: impl Into<String>, kind: NodeKind) -> Self {
        Node {
            external_id: external_id.into(),
            kind,
        }
    }

    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn is_source(&self) -> bool {
        self.kind == NodeKind::Source
    }
}
