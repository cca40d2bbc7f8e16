use clap::Parser;
use log::{info, LevelFilter};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn level_filter(&self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

/// Where the text to compress comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Text(String),
    File(String),
    Stdin,
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Adaptive huffman compression of a text",
    long_about = "
    Each byte of the text is coded with a huffman tree built from the bytes seen before it, and
    the tree is rebuilt after every byte. No frequency table is sent. The first occurrence of a
    byte produces no bits at all, so the output is a statistic, not a decodable stream."
)]
pub struct Args {
    /// Text to compress. Read from --input or stdin when omitted
    #[clap()]
    text: Option<String>,

    /// Read the text from this file
    #[clap(short = 'i', long = "input", conflicts_with = "text")]
    input: Option<String>,

    /// Write the packed compressed bits to this file
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// Show the code emitted for every input byte
    #[clap(short = 'c', long = "codes")]
    codes: bool,

    /// Show the final code table
    #[clap(short = 't', long = "table")]
    table: bool,

    /// Only print the compressed bits
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,

    /// Sets verbosity. -v shows progress, -vvv is chatty
    #[clap(short = 'v', parse(from_occurrences))]
    v: u64,
}

/// All user settable options
#[derive(Debug, Clone)]
pub struct DhOpts {
    /// Source of the text
    pub input: Input,
    /// Optional file for the packed output
    pub output: Option<String>,
    /// Print the per byte codes
    pub show_codes: bool,
    /// Print the final code table
    pub show_table: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl DhOpts {
    pub fn new() -> Self {
        Self {
            input: Input::Stdin,
            output: None,
            show_codes: false,
            show_table: false,
            verbose: Verbosity::Warnings,
        }
    }
}

impl Default for DhOpts {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Args> for DhOpts {
    fn from(args: Args) -> Self {
        let input = match (args.text, args.input) {
            (Some(text), _) => Input::Text(text),
            (None, Some(file)) => Input::File(file),
            (None, None) => Input::Stdin,
        };
        let verbose = if args.quiet {
            Verbosity::Quiet
        } else {
            match args.v {
                0 => Verbosity::Warnings,
                1 => Verbosity::Info,
                2 => Verbosity::Debug,
                _ => Verbosity::Trace,
            }
        };
        Self {
            input,
            output: args.output,
            show_codes: args.codes,
            show_table: args.table,
            verbose,
        }
    }
}

/// Parse the command line into DhOpts and set the log level to match.
pub fn dhopts_init() -> DhOpts {
    let opts = DhOpts::from(Args::parse());
    log::set_max_level(opts.verbose.level_filter());

    info!("---- Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    match &opts.input {
        Input::Text(_) => info!("Getting input from the command line"),
        Input::File(f) => info!("Getting input from the file {}", f),
        Input::Stdin => info!("Getting input from stdin"),
    }
    if let Some(f) = &opts.output {
        info!("Writing packed output to {}", f)
    };
    info!("---- Initialization End ----");
    opts
}
