//! Logger tree: registration and name-column padding propagation
//!
//! Every logger of one tree lives in a single arena owned by a [`LoggerTree`].
//! Nodes refer to each other by [`NodeId`]: a node stores the id of its
//! parent and, when it has descendants, the ids of every logger created
//! below it at any depth, in creation order. Nodes are never removed.
//!
//! Registering a new node appends it to the descendant list of every
//! ancestor up to the root. Once the walk reaches the root, and only if the
//! root itself has auto-adjust enabled, the root recomputes the widest tree
//! name over itself and all of its descendants and hands that width to every
//! descendant that has auto-adjust enabled, and to itself. Nodes with
//! auto-adjust disabled still contribute their width to the maximum.

use super::metrics::LoggerMetrics;
use super::options::{name_width, LoggerConfig, LoggerOption};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// Index of a logger inside its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug)]
pub(crate) struct Node {
    name: String,
    parent: Option<NodeId>,
    descendants: Vec<NodeId>,
    pub(crate) config: LoggerConfig,
}

impl Node {
    pub(crate) fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug)]
pub(crate) struct TreeState {
    nodes: Vec<Node>,
}

impl TreeState {
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub(crate) fn descendants(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).descendants
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Dotted path `root.….name` when the node shows its tree name, otherwise
    /// the bare name.
    pub(crate) fn tree_path_name(&self, id: NodeId) -> String {
        let node = self.node(id);
        if !node.config.name_layout.show_tree_name {
            return node.name.clone();
        }

        let mut segments = vec![node.name.as_str()];
        let mut cursor = node.parent;
        while let Some(ancestor) = cursor {
            let ancestor = self.node(ancestor);
            segments.push(ancestor.name.as_str());
            cursor = ancestor.parent;
        }
        segments.reverse();
        segments.join(".")
    }

    fn tree_path_width(&self, id: NodeId) -> i32 {
        name_width(&self.tree_path_name(id))
    }

    fn insert(&mut self, name: String, parent: Option<NodeId>, config: LoggerConfig) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name,
            parent,
            descendants: Vec::new(),
            config,
        });
        id
    }

    /// Announce `new` to `registrar` and, through it, to every ancestor.
    fn register(&mut self, registrar: NodeId, new: NodeId) {
        let mut cursor = registrar;
        loop {
            self.node_mut(cursor).descendants.push(new);
            match self.parent(cursor) {
                Some(parent) => cursor = parent,
                None => {
                    self.propagate_padding(cursor);
                    return;
                }
            }
        }
    }

    /// Recompute the shared name width below `root`.
    fn propagate_padding(&mut self, root: NodeId) {
        if !self.node(root).config.name_layout.auto_adjust {
            return;
        }

        let max_pad = self
            .descendants(root)
            .iter()
            .map(|&id| self.tree_path_width(id))
            .fold(self.tree_path_width(root), i32::max);

        let descendants = std::mem::take(&mut self.node_mut(root).descendants);
        for &id in &descendants {
            let layout = &mut self.node_mut(id).config.name_layout;
            if layout.auto_adjust {
                layout.pad = max_pad;
            }
        }
        let root_node = self.node_mut(root);
        root_node.descendants = descendants;
        root_node.config.name_layout.pad = max_pad;
    }
}

/// Shared storage for one tree of loggers.
///
/// The lock guards registration, padding recomputation and configuration
/// changes; log calls take it for reading only while they format a line.
#[derive(Debug)]
pub struct LoggerTree {
    state: RwLock<TreeState>,
    metrics: LoggerMetrics,
}

impl LoggerTree {
    /// Create a tree holding only a root configured by `options`.
    pub(crate) fn with_root<I>(name: String, options: I) -> Arc<Self>
    where
        I: IntoIterator<Item = LoggerOption>,
    {
        let mut config = LoggerConfig::for_root(&name);
        config.apply(options);

        let mut state = TreeState { nodes: Vec::new() };
        state.insert(name, None, config);

        Arc::new(Self {
            state: RwLock::new(state),
            metrics: LoggerMetrics::new(),
        })
    }

    /// Create a child of `parent` from a copy of its configuration, apply
    /// `options`, then register it with every ancestor.
    pub(crate) fn derive<I>(&self, parent: NodeId, name: String, options: I) -> NodeId
    where
        I: IntoIterator<Item = LoggerOption>,
    {
        let mut state = self.state.write();
        let mut config = state.node(parent).config.clone();
        config.apply(options);

        let id = state.insert(name, Some(parent), config);
        state.register(parent, id);
        id
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, TreeState> {
        self.state.read()
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, TreeState> {
        self.state.write()
    }

    pub(crate) fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Number of loggers in the tree, root included.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
