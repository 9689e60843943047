use std::{fmt::Display, path::PathBuf};

use crate::cli::{CliArgs, OutputFormat};

/// Byte sequence decoded when no input is given
pub const REFERENCE_SEQUENCE: &[u8] = &[0x3F, 0x9D, 0x10];

/// Where the bytes to decode come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Hex tokens given on the command line
    Hex(Vec<String>),
    /// Raw bytes read from a file
    File(PathBuf),
    /// The built-in reference sequence
    Reference,
}

/// Configuration for a decode run
#[derive(Debug, Clone)]
pub struct DecodeConfig {
    pub input: InputSource,

    /// Decode SE instead of UE values
    pub signed: bool,

    pub format: OutputFormat,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            input: InputSource::Reference,
            signed: false,
            format: OutputFormat::Plain,
        }
    }
}

impl Display for DecodeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let input_display = match &self.input {
            InputSource::Hex(tokens) => format!("hex ({} tokens)", tokens.len()),
            InputSource::File(path) => format!("file {}", path.display()),
            InputSource::Reference => "reference sequence".to_string(),
        };

        write!(
            f,
            "DecodeConfig {{ input: {}, mode: {}, format: {} }}",
            input_display,
            if self.signed { "signed" } else { "unsigned" },
            self.format
        )
    }
}

impl DecodeConfig {
    pub fn builder() -> DecodeConfigBuilder {
        DecodeConfigBuilder::default()
    }
}

impl From<&CliArgs> for DecodeConfig {
    fn from(args: &CliArgs) -> Self {
        let builder = DecodeConfig::builder()
            .signed(args.signed)
            .format(args.format);

        let builder = match (&args.input_file, args.hex.is_empty()) {
            (Some(path), _) => builder.input_file(path.clone()),
            (None, false) => builder.hex(args.hex.clone()),
            (None, true) => builder,
        };

        builder.build()
    }
}

#[derive(Debug, Clone, Default)]
pub struct DecodeConfigBuilder {
    config: DecodeConfig,
}

impl DecodeConfigBuilder {
    pub fn hex(mut self, tokens: Vec<String>) -> Self {
        self.config.input = InputSource::Hex(tokens);
        self
    }

    pub fn input_file(mut self, path: PathBuf) -> Self {
        self.config.input = InputSource::File(path);
        self
    }

    pub fn signed(mut self, signed: bool) -> Self {
        self.config.signed = signed;
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.config.format = format;
        self
    }

    pub fn build(self) -> DecodeConfig {
        self.config
    }
}
