use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Define CLI arguments
#[derive(Parser, Debug)]
#[command(
    author = "hua0512 <https://github.com/hua0512>",
    version,
    about = "Decode Exp-Golomb coded values from a bitstream",
    long_about = "Reads a byte sequence and decodes unsigned (UE) or signed (SE)\n\
                  Exp-Golomb values from it until the stream runs out.\n\
                  \n\
                  Bytes are given as hex on the command line (\"3F 9D 10\", \"0x3f,0x9d\")\n\
                  or read from a binary file. Without any input the reference\n\
                  sequence 3F 9D 10 is decoded."
)]
pub struct CliArgs {
    /// Hex encoded input bytes
    #[arg(
        conflicts_with = "input_file",
        help = "Hex bytes to decode; whitespace, ',' and ':' separate tokens, '0x' prefixes are allowed"
    )]
    pub hex: Vec<String>,

    /// Binary input file
    #[arg(short, long, help = "Read raw bytes from this file instead of hex arguments")]
    pub input_file: Option<PathBuf>,

    /// Decode signed values
    #[arg(short, long, help = "Decode signed (SE) instead of unsigned (UE) values")]
    pub signed: bool,

    /// Output format
    #[arg(long, default_value = "plain")]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable detailed debug logging")]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// One decoded value per line
    #[default]
    Plain,
    /// JSON report with values and bit counts
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
