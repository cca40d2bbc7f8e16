//! The compression module drives the adaptive huffman model over an input text.
//!
//! For every byte the driver asks the model for the byte's current code, appends it to the output
//! bit string, and only then lets the model count the byte. Swapping those two steps changes every
//! emitted code.
//!
//! The run also reports the original and compressed sizes and the compression rate.
//!

pub mod compress;
