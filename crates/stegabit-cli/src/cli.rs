use clap::{Parser, Subcommand, ValueEnum};
use stegabit_core::framing::{Framing, DEFAULT_DELIMITER};
use stegabit_core::{CodecOptions, Delimiter, LengthHeader, NumLsbs};

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Number of least significant bits used in every cover byte
    #[arg(
        long,
        global = true,
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(1..=8)
    )]
    pub lsbs: u8,

    /// How the end of the hidden data is marked
    #[arg(long, global = true, value_enum, default_value_t = FramingKind::Delimiter)]
    pub framing: FramingKind,

    /// Bit pattern that terminates the hidden data, only used with the delimiter framing
    #[arg(long, global = true, value_name = "bits", default_value = DEFAULT_DELIMITER)]
    pub delimiter: String,

    /// Pad the hidden bits with zeros up to a whole number of lsb groups
    #[arg(long, global = true)]
    pub pad: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FramingKind {
    /// Data is terminated by a delimiter bit pattern
    Delimiter,
    /// Data is preceded by a 32 bit length header
    Header,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    UnveilRaw(unveil_raw::UnveilRawArgs),
    Capacity(capacity::CapacityArgs),
}

impl CliArgs {
    /// Validates the global options and turns them into [`CodecOptions`].
    pub fn codec_options(&self) -> CliResult<CodecOptions> {
        let framing: Framing = match self.framing {
            FramingKind::Header => LengthHeader.into(),
            FramingKind::Delimiter => self.delimiter.parse::<Delimiter>()?.into(),
        };

        Ok(CodecOptions::default()
            .with_num_lsbs(NumLsbs::new(self.lsbs)?)
            .with_framing(framing)
            .with_padding(self.pad))
    }
}
