use std::fs::File;
use std::io::{self, Read};

use log::debug;

use super::cli::Input;

/// Read the whole text to compress from the source named in the options.
pub fn read_input(input: &Input) -> io::Result<Vec<u8>> {
    let data = match input {
        Input::Text(text) => text.as_bytes().to_vec(),
        Input::File(fname) => read_from(File::open(fname)?)?,
        Input::Stdin => read_from(io::stdin().lock())?,
    };
    debug!("Read {} bytes of input", data.len());
    Ok(data)
}

/// Drain any reader into a buffer.
pub fn read_from<R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(buf)
}
