//! Adaptive (dynamic) huffman coding of byte streams.
//!
//! Version 0.1.0
//!
//! Codes are assigned to bytes while the text is being read. The huffman tree is rebuilt from the
//! byte frequencies after every byte, so no frequency table is ever written out. Ties between
//! equal weights go to the node created first, which makes the tree, and therefore every code,
//! a pure function of the input seen so far.
//!
//! Basic usage from the command line:
//!
//! `$> dynhuff "abracadabra"`
//!
//! From code, drive the model one byte at a time. Ask for the code first, then count the byte:
//!
//! ```
//! use dynhuff::huffman_coding::adaptive::DynamicHuffman;
//!
//! let mut dh = DynamicHuffman::new();
//! let mut bits = String::new();
//! for &b in b"abab" {
//!     bits.push_str(dh.code_for(b));
//!     dh.observe(b);
//! }
//! assert_eq!(bits, "00");
//! ```
//!
//! A byte seen for the first time has no code and contributes no bits. The output is therefore
//! not decodable by itself; it is a measure of how well the adaptive model fits the text.
//!
pub mod bitstream;
pub mod compression;
pub mod huffman_coding;
pub mod tools;

pub use compression::compress::{compress, compress_with, Compressed, CompressionStats};
pub use huffman_coding::adaptive::DynamicHuffman;
