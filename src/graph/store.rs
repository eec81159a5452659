use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::discovery::SourceFile;
use crate::scanner::Annotation;

/// Stable index of a node in a [`TestGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One source file. `annotation` stays `None` until the file is scanned.
#[derive(Debug, Clone)]
pub struct FileNode {
    pub key: String,
    pub path: PathBuf,
    pub annotation: Option<Annotation>,
}

impl FileNode {
    pub fn own_tests(&self) -> usize {
        self.annotation.as_ref().map_or(0, |a| a.own_tests)
    }

    pub fn parents(&self) -> &[String] {
        self.annotation
            .as_ref()
            .map(|a| a.parents.as_slice())
            .unwrap_or_default()
    }

    pub fn is_scanned(&self) -> bool {
        self.annotation.is_some()
    }
}

/// Files keyed by short name. Inserting an existing key replaces that
/// node in place, so ids handed out earlier stay valid.
#[derive(Debug, Default)]
pub struct TestGraph {
    nodes: Vec<FileNode>,
    index: HashMap<String, NodeId>,
}

impl TestGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sources(sources: impl IntoIterator<Item = SourceFile>) -> Self {
        let mut graph = Self::new();
        for source in sources {
            graph.insert(source.key, source.path);
        }
        graph
    }

    /// Adds or resets the node for `key`. A replaced node loses its
    /// annotation.
    pub fn insert(&mut self, key: impl Into<String>, path: impl Into<PathBuf>) -> NodeId {
        let key = key.into();
        let node = FileNode {
            key: key.clone(),
            path: path.into(),
            annotation: None,
        };

        match self.index.get(&key) {
            Some(&id) => {
                self.nodes[id.0] = node;
                id
            }
            None => {
                let id = NodeId(self.nodes.len());
                self.nodes.push(node);
                self.index.insert(key, id);
                id
            }
        }
    }

    /// Stores the scan result for `id`. The first annotation wins.
    pub fn annotate(&mut self, id: NodeId, annotation: Annotation) -> bool {
        let node = &mut self.nodes[id.0];
        if node.annotation.is_some() {
            return false;
        }
        node.annotation = Some(annotation);
        true
    }

    pub fn lookup(&self, key: &str) -> Option<NodeId> {
        self.index.get(key).copied()
    }

    pub fn node(&self, id: NodeId) -> &FileNode {
        &self.nodes[id.0]
    }

    pub fn path(&self, id: NodeId) -> &Path {
        &self.nodes[id.0].path
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &FileNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
