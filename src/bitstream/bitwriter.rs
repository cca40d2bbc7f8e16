use std::io::Write;

use log::debug;

/// Packs the '0'/'1' string produced by the encoder into bytes, most significant bit first.
pub struct BitWriter {
    /// Output buffer holding the packed bytes.
    output: Vec<u8>,
    /// Private queue to hold bits that are waiting to be put as bytes into the output buffer.
    queue: u64,
    /// Count of valid bits in the queue.
    q_bits: u8,
}

impl BitWriter {
    /// Create a new BitWriter with an empty output buffer.
    pub fn new() -> Self {
        Self {
            output: Vec::new(),
            queue: 0,
            q_bits: 0,
        }
    }

    /// Create a new BitWriter sized for roughly `bits` bits of output.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            output: Vec::with_capacity(bits / 8 + 1),
            queue: 0,
            q_bits: 0,
        }
    }

    /// Put a single bit on the stream.
    pub fn out_bit(&mut self, bit: bool) {
        self.push_queue();
        self.queue <<= 1;
        self.queue |= bit as u64;
        self.q_bits += 1;
    }

    /// Put a string of '0' and '1' characters on the stream.
    pub fn out_bits(&mut self, bits: &str) {
        for c in bits.bytes() {
            debug_assert!(c == b'0' || c == b'1', "not a bit: {}", c as char);
            self.out_bit(c == b'1');
        }
    }

    /// Internal bitstream write function common to all out functions.
    fn push_queue(&mut self) {
        // Once the queue is nearly full, move all full bytes to the output buffer.
        if self.q_bits > 56 {
            while self.q_bits > 7 {
                let byte = (self.queue >> (self.q_bits - 8)) as u8;
                self.output.push(byte); //push the packed byte out
                self.q_bits -= 8; //adjust the count of bits left in the queue
            }
        }
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// signficant bits. Returns how many padding bits were added.
    fn flush(&mut self) -> u8 {
        // First push out all the full bytes
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte);
            self.q_bits -= 8;
        }
        // Then push out the remaining bits
        if self.q_bits > 0 {
            let padding = 8 - self.q_bits;
            let mut byte = (self.queue & (0xff >> padding) as u64) as u8;
            byte <<= padding;
            self.output.push(byte);
            self.q_bits = 0;
            return padding;
        }
        0
    }

    /// Flush and hand back the packed bytes along with the count of padding bits in the last byte.
    pub fn finish(mut self) -> (Vec<u8>, u8) {
        let padding = self.flush();
        (self.output, padding)
    }

    /// Flush and write the packed bytes to `writer`. Returns the count of padding bits.
    pub fn write_to<W: Write>(self, writer: &mut W) -> Result<u8, std::io::Error> {
        let (bytes, padding) = self.finish();
        writer.write_all(&bytes)?;
        writer.flush()?;
        debug!("Wrote {} packed bytes ({} padding bits)", bytes.len(), padding);
        Ok(padding)
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}
