//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::fs::File;
use std::io::BufWriter;

use dynhuff::compression::compress::compress_with;
use dynhuff::tools::cli::{dhopts_init, Verbosity};
use dynhuff::tools::data_in::read_input;
use dynhuff::DynamicHuffman;

use log::{info, warn, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> Result<(), std::io::Error> {
    // Available log levels are Error, Warn, Info, Debug, Trace. The CLI narrows this down.
    if TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Logger already initialized");
    }

    let opts = dhopts_init();

    let data = read_input(&opts.input)?;
    if data.is_empty() {
        warn!("Nothing to compress.");
        return Ok(());
    }

    let mut dh = DynamicHuffman::new();
    let result = compress_with(&mut dh, &data);

    if opts.verbose == Verbosity::Quiet {
        println!("{}", result.bits);
    } else {
        println!("Original text:   {}", String::from_utf8_lossy(&data));
        println!("Compressed bits: {}", result.bits);
        println!("{}", result.stats);
    }

    if opts.show_codes {
        println!();
        for (byte, code) in data.iter().zip(&result.codes) {
            let shown = if code.is_empty() { "-" } else { code.as_str() };
            println!("{:>6}  {}", show_byte(*byte), shown);
        }
    }

    if opts.show_table {
        println!();
        println!("{:>6}  {:>8}  code", "byte", "count");
        for (sym, weight, code) in dh.code_table() {
            println!("{:>6}  {:>8}  {}", show_byte(sym), weight, code);
        }
    }

    if let Some(fname) = &opts.output {
        let mut f_out = BufWriter::new(File::create(fname)?);
        let padding = result.write_packed(&mut f_out)?;
        info!(
            "Wrote {} bits to {} ({} padding bits in the last byte)",
            result.bits.len(),
            fname,
            padding
        );
    }

    info!("Done.");
    Ok(())
}

/// Printable form of a byte for the code listings.
fn show_byte(b: u8) -> String {
    match b {
        b' ' => "' '".to_string(),
        0x21..=0x7e => format!("{}", b as char),
        _ => format!("{:#04x}", b),
    }
}
