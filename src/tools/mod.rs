//! The tools module provides helpers around the encoder.
//!
//! The tools are:
//! - cli: Command line interface.
//! - data_in: Read the text to compress from the command line, a file or stdin.
//!
pub mod cli;
pub mod data_in;
