use log::trace;
use rustc_hash::FxHashMap;

use super::node::{Node, NodeData, NodeId};
use super::queue::NodeQueue;

/// Adaptive huffman model over byte symbols.
///
/// The caller asks for the code of a symbol with `code_for`, then counts the symbol with
/// `observe`. Every `observe` rebuilds the whole tree from the current leaf weights, so the tree is
/// always the static huffman tree for the weights seen so far, with ties going to the older node.
/// The node extracted first becomes the left (`0`) child.
///
/// A symbol that has never been observed has no code. Its first occurrence therefore emits
/// nothing, which means the output stream cannot be decoded on its own.
#[derive(Debug, Clone)]
pub struct DynamicHuffman {
    /// Arena. Leaves occupy 0..leaf_count, internal nodes of the latest rebuild follow.
    nodes: Vec<Node>,
    /// Symbol to leaf registry. Leaves are never replaced.
    leaf_map: FxHashMap<u8, NodeId>,
    /// Live leaf set, kept in heap order between rebuilds.
    queue: NodeQueue,
    root: Option<NodeId>,
    /// Creation stamp counter, shared by leaves and internal nodes.
    order_count: u64,
    /// Code of every symbol in the current tree, refreshed by each rebuild.
    codes: Vec<String>,
}

impl DynamicHuffman {
    /// Create an engine with no symbols and no tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(512),
            leaf_map: FxHashMap::default(),
            queue: NodeQueue::new(),
            root: None,
            order_count: 0,
            codes: vec![String::new(); 256],
        }
    }

    /// Code for `symbol` in the tree as it stands now. Empty if the symbol was never observed,
    /// or if it is the only symbol seen so far.
    pub fn code_for(&self, symbol: u8) -> &str {
        &self.codes[symbol as usize]
    }

    /// Count one occurrence of `symbol` and rebuild the tree.
    pub fn observe(&mut self, symbol: u8) {
        // Internal nodes from the last rebuild are about to be replaced.
        self.nodes.truncate(self.leaf_map.len());

        if let Some(&id) = self.leaf_map.get(&symbol) {
            self.nodes[id].weight += 1;
            self.queue.heapify(&self.nodes);
            trace!("Symbol {:#04x} now has weight {}", symbol, self.nodes[id].weight);
        } else {
            let id = self.nodes.len();
            let order = self.next_order();
            self.nodes.push(Node::leaf(symbol, order));
            self.leaf_map.insert(symbol, id);
            self.queue.push(id, &self.nodes);
            trace!("New leaf for symbol {:#04x} with order {}", symbol, order);
        }

        self.rebuild();
    }

    /// Combine the two lightest nodes until one remains. Empty leaf set leaves no root, a single
    /// leaf becomes the root by itself.
    fn rebuild(&mut self) {
        let mut work = NodeQueue::from_ids(self.queue.ids(), &self.nodes);

        self.root = loop {
            let left = match work.pop(&self.nodes) {
                Some(id) => id,
                None => break None,
            };
            let right = match work.pop(&self.nodes) {
                Some(id) => id,
                None => break Some(left),
            };
            let weight = self.nodes[left].weight + self.nodes[right].weight;
            let order = self.next_order();
            let id = self.nodes.len();
            self.nodes.push(Node::internal(left, right, weight, order));
            work.push(id, &self.nodes);
        };

        self.refresh_codes();
        trace!(
            "Rebuilt tree: {} leaves, {} nodes, root weight {}",
            self.leaf_map.len(),
            self.nodes.len(),
            self.total_weight()
        );
    }

    /// Walk the tree once and record the root-to-leaf path of every leaf.
    fn refresh_codes(&mut self) {
        let root = match self.root {
            Some(root) => root,
            None => return,
        };
        let mut stack: Vec<(NodeId, String)> = vec![(root, String::new())];
        while let Some((id, path)) = stack.pop() {
            match self.nodes[id].node_data {
                NodeData::Kids(left, right) => {
                    let mut left_path = path.clone();
                    left_path.push('0');
                    let mut right_path = path;
                    right_path.push('1');
                    stack.push((right, right_path));
                    stack.push((left, left_path));
                }
                NodeData::Leaf(sym) => self.codes[sym as usize] = path,
            }
        }
    }

    #[inline(always)]
    fn next_order(&mut self) -> u64 {
        let order = self.order_count;
        self.order_count += 1;
        order
    }

    /// Follow `code` from the root (`0` left, `1` right) and return the symbol of the leaf reached
    /// exactly when the code runs out. None if the path leaves the tree or stops on an internal node.
    pub fn resolve(&self, code: &str) -> Option<u8> {
        let mut current = self.root?;
        for bit in code.chars() {
            let (left, right) = self.nodes[current].children()?;
            current = match bit {
                '0' => left,
                '1' => right,
                _ => return None,
            };
        }
        self.nodes[current].symbol()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Node by arena index. Ids are only meaningful until the next `observe`.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Number of times `symbol` has been observed, None if never.
    pub fn weight_of(&self, symbol: u8) -> Option<u64> {
        self.leaf_map.get(&symbol).map(|&id| self.nodes[id].weight)
    }

    /// Number of distinct symbols observed.
    pub fn leaf_count(&self) -> usize {
        self.leaf_map.len()
    }

    /// Total number of observations, which is the weight of the root.
    pub fn total_weight(&self) -> u64 {
        self.root.map_or(0, |id| self.nodes[id].weight)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// (symbol, weight, code) for every observed symbol, by symbol value.
    pub fn code_table(&self) -> Vec<(u8, u64, &str)> {
        let mut table: Vec<(u8, u64, &str)> = self
            .leaf_map
            .iter()
            .map(|(&sym, &id)| (sym, self.nodes[id].weight, self.code_for(sym)))
            .collect();
        table.sort_unstable_by_key(|&(sym, _, _)| sym);
        table
    }
}

impl Default for DynamicHuffman {
    fn default() -> Self {
        Self::new()
    }
}
