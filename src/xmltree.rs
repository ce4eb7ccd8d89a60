use indextree::{Arena, NodeId};

use crate::xmlvalue::Value;

pub(crate) type XmlArena = Arena<Value>;

/// A node in an XML tree.
/// This is a lightweight handle and can be copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node(NodeId);

impl Node {
    #[inline]
    pub(crate) fn new(node_id: NodeId) -> Self {
        Node(node_id)
    }

    #[inline]
    pub(crate) fn get(&self) -> NodeId {
        self.0
    }
}

/// The `XmlTree` struct owns the nodes of one or more XML trees and
/// detached fragments.
///
/// Nodes are referred to with [`Node`] handles. A node is owned by at most
/// one parent; the parent link is only ever used to compute
/// [`depth`](XmlTree::depth) and [`path`](XmlTree::path).
///
/// `XmlTree` is implemented in several sections: creation, manipulation,
/// access, traversal, bulk operations, path queries, serialization and
/// translation of records.
pub struct XmlTree {
    pub(crate) arena: XmlArena,
}

impl XmlTree {
    /// Create a new, empty `XmlTree`.
    pub fn new() -> Self {
        XmlTree {
            arena: XmlArena::new(),
        }
    }

    #[inline]
    pub(crate) fn arena(&self) -> &XmlArena {
        &self.arena
    }

    #[inline]
    pub(crate) fn arena_mut(&mut self) -> &mut XmlArena {
        &mut self.arena
    }

    /// Access the value of a node.
    #[inline]
    pub fn value(&self, node: Node) -> &Value {
        self.arena[node.get()].get()
    }

    #[inline]
    pub(crate) fn value_mut(&mut self, node: Node) -> &mut Value {
        self.arena[node.get()].get_mut()
    }
}

impl Default for XmlTree {
    fn default() -> Self {
        Self::new()
    }
}
