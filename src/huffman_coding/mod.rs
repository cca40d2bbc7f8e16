//! The huffman module holds the adaptive (dynamic) huffman model.
//!
//! Codes are assigned to byte symbols as their frequencies change during a single pass. No
//! frequency table is ever transmitted: the model is rebuilt from the symbols already seen.
//!
//! - node: the tree elements, addressed by index into an arena owned by the engine.
//! - queue: a min-heap over arena nodes ordered by weight, then by creation order.
//! - adaptive: the engine. Query a code, then observe the symbol. The order matters.
//!

pub mod adaptive;
pub mod node;
pub mod queue;
