use std::fmt::{Display, Formatter};
use std::io::Write;

use log::{debug, info};

use crate::bitstream::bitwriter::BitWriter;
use crate::huffman_coding::adaptive::DynamicHuffman;

/// Sizes reported after a compression run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompressionStats {
    /// Input length in bytes
    pub original_len: usize,
    /// Input length in bits (8 per byte)
    pub original_bits: usize,
    /// Length of the emitted bit string
    pub compressed_bits: usize,
}

impl CompressionStats {
    pub fn new(original_len: usize, compressed_bits: usize) -> Self {
        Self {
            original_len,
            original_bits: original_len * 8,
            compressed_bits,
        }
    }

    /// Compressed bits over original bits. 0.0 for empty input.
    pub fn ratio(&self) -> f64 {
        if self.original_bits == 0 {
            return 0.0;
        }
        self.compressed_bits as f64 / self.original_bits as f64
    }

    /// Percentage of the original size saved. 0.0 for empty input.
    pub fn savings_percent(&self) -> f64 {
        if self.original_bits == 0 {
            return 0.0;
        }
        100.0 - self.ratio() * 100.0
    }
}

impl Display for CompressionStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Original size:   {} bytes ({} bits)",
            self.original_len, self.original_bits
        )?;
        writeln!(f, "Compressed size: {} bits", self.compressed_bits)?;
        write!(f, "Compression rate: %{:.2}", self.savings_percent())
    }
}

/// Result of running the adaptive encoder over one input.
#[derive(Debug, Clone)]
pub struct Compressed {
    /// Concatenation of every emitted code
    pub bits: String,
    /// The code emitted for each input byte, in input order
    pub codes: Vec<String>,
    pub stats: CompressionStats,
}

impl Compressed {
    /// Pack the bit string into bytes. Returns the bytes and the padding bit count.
    pub fn pack(&self) -> (Vec<u8>, u8) {
        let mut bw = BitWriter::with_capacity(self.bits.len());
        bw.out_bits(&self.bits);
        bw.finish()
    }

    /// Pack the bit string straight into `writer`. Returns the padding bit count.
    pub fn write_packed<W: Write>(&self, writer: &mut W) -> Result<u8, std::io::Error> {
        let mut bw = BitWriter::with_capacity(self.bits.len());
        bw.out_bits(&self.bits);
        bw.write_to(writer)
    }
}

/// Encode `data` with a fresh adaptive huffman model.
pub fn compress(data: &[u8]) -> Compressed {
    compress_with(&mut DynamicHuffman::new(), data)
}

/// Encode `data` with an existing model, leaving the model in its final state.
///
/// Each byte is coded with the tree as it stands before that byte is counted, then counted.
pub fn compress_with(dh: &mut DynamicHuffman, data: &[u8]) -> Compressed {
    let mut bits = String::with_capacity(data.len() * 4);
    let mut codes = Vec::with_capacity(data.len());

    for &byte in data {
        let code = dh.code_for(byte);
        bits.push_str(code);
        codes.push(code.to_string());
        dh.observe(byte);
    }

    let stats = CompressionStats::new(data.len(), bits.len());
    debug!(
        "Model ended with {} distinct symbols, root weight {}",
        dh.leaf_count(),
        dh.total_weight()
    );
    info!(
        "Compressed {} bytes into {} bits ({:.2}% saved)",
        stats.original_len,
        stats.compressed_bits,
        stats.savings_percent()
    );

    Compressed { bits, codes, stats }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_input() {
        let c = compress(b"");
        assert!(c.bits.is_empty());
        assert!(c.codes.is_empty());
        assert_eq!(c.stats, CompressionStats::default());
        assert_eq!(c.stats.ratio(), 0.0);
        assert_eq!(c.stats.savings_percent(), 0.0);
    }

    #[test]
    fn aab() {
        let c = compress(b"aab");
        assert_eq!(c.codes, vec!["", "", ""]);
        assert_eq!(c.bits, "");
        assert_eq!(c.stats.original_bits, 24);
        assert_eq!(c.stats.savings_percent(), 100.0);
    }

    #[test]
    fn abab() {
        let c = compress(b"abab");
        assert_eq!(c.bits, "00");
        assert_eq!(c.stats.compressed_bits, 2);
        assert_eq!(c.stats.ratio(), 2.0 / 32.0);
    }

    #[test]
    fn abca() {
        // After "abc": c=0 a=10 b=11. 'a' then reaches weight 2 and the tree reshapes.
        let c = compress(b"abca");
        assert_eq!(c.codes, vec!["", "", "", "10"]);
        assert_eq!(c.bits, "10");
    }

    #[test]
    fn codes_concatenate_to_bits() {
        let c = compress(b"mississippi river");
        assert_eq!(c.codes.len(), 17);
        assert_eq!(c.codes.concat(), c.bits);
    }

    #[test]
    fn pack_matches_bits() {
        let c = compress(b"abababababab");
        // "", "", then ten "0"s
        assert_eq!(c.bits, "0".repeat(10));
        let (bytes, padding) = c.pack();
        assert_eq!(bytes, vec![0, 0]);
        assert_eq!(padding, 6);

        let mut sink = Vec::new();
        assert_eq!(c.write_packed(&mut sink).unwrap(), 6);
        assert_eq!(sink, bytes);
    }

    #[test]
    fn model_carries_over() {
        let mut dh = DynamicHuffman::new();
        let first = compress_with(&mut dh, b"ab");
        assert_eq!(first.bits, "");
        let second = compress_with(&mut dh, b"ab");
        assert_eq!(second.bits, "00");
        assert_eq!(dh.total_weight(), 4);
        assert_eq!(compress(b"abab").bits, first.bits + &second.bits);
    }

    #[test]
    fn stats_display() {
        let stats = CompressionStats::new(2, 4);
        let text = stats.to_string();
        assert!(text.contains("2 bytes (16 bits)"));
        assert!(text.contains("4 bits"));
        assert!(text.contains("%75.00"));
    }
}
