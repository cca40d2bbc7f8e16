//! The bitstream module turns the encoder's bit string into bytes.
//!
//! The encoder itself speaks in strings of '0' and '1'. When the caller wants a real file out of
//! it, BitWriter packs those bits most significant first and pads the last byte with zeros.
//!
pub mod bitwriter;
