//! Tree elements for the adaptive huffman engine.
//!
//! Nodes live in an arena owned by the engine and refer to each other by index. Leaves persist for
//! the life of the engine; internal nodes are rebuilt from scratch after every observed symbol.

use std::cmp::Ordering;

/// Index of a node in the engine's arena.
pub type NodeId = usize;

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum NodeData {
    Kids(NodeId, NodeId),
    Leaf(u8),
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    /// Occurrence count for a leaf, sum of the children for an internal node
    pub weight: u64,
    /// Creation stamp shared by leaves and internal nodes. Breaks weight ties.
    pub order: u64,
    pub node_data: NodeData,
}

impl Node {
    /// Create a leaf with a weight of 1 for a symbol seen for the first time.
    pub fn leaf(symbol: u8, order: u64) -> Node {
        Node {
            weight: 1,
            order,
            node_data: NodeData::Leaf(symbol),
        }
    }

    /// Create an internal node joining two existing nodes.
    pub fn internal(left: NodeId, right: NodeId, weight: u64, order: u64) -> Node {
        Node {
            weight,
            order,
            node_data: NodeData::Kids(left, right),
        }
    }

    /// Symbol carried by a leaf. Internal nodes have none.
    pub fn symbol(&self) -> Option<u8> {
        match self.node_data {
            NodeData::Leaf(sym) => Some(sym),
            NodeData::Kids(..) => None,
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self.node_data, NodeData::Kids(..))
    }

    /// Left and right child of an internal node.
    pub fn children(&self) -> Option<(NodeId, NodeId)> {
        match self.node_data {
            NodeData::Kids(left, right) => Some((left, right)),
            NodeData::Leaf(_) => None,
        }
    }

    /// Sort key: lighter first, then older first.
    #[inline(always)]
    pub fn key(&self) -> (u64, u64) {
        (self.weight, self.order)
    }

    /// Total ordering used by the priority queue. Less means "comes out first".
    #[inline(always)]
    pub fn cmp_key(&self, other: &Node) -> Ordering {
        self.key().cmp(&other.key())
    }
}
