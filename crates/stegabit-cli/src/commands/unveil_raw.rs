use std::path::PathBuf;

use clap::Args;
use log::info;
use stegabit_core::{CodecOptions, LsbCodec};

use super::{read_buffer, write_buffer};
use crate::CliResult;

/// Unveils all hidden bits of a raw stego buffer file, without interpreting any framing
#[derive(Args, Debug)]
pub struct UnveilRawArgs {
    /// Raw stego buffer file that contains secret data
    #[arg(short = 'i', long = "in", value_name = "stego file", required = true)]
    pub media: PathBuf,

    /// Raw data will be stored as binary file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,
}

impl UnveilRawArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let stego = read_buffer(&self.media)?;
        let raw = LsbCodec::with_options(options).unveil_raw(&stego);
        write_buffer(&self.output_file, &raw)?;
        info!("Dumped {} raw bytes into {}", raw.len(), self.output_file.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use stegabit_core::NumLsbs;
    use tempfile::TempDir;

    #[test]
    fn should_dump_the_low_nibbles() {
        let dir = TempDir::new().unwrap();
        let stego = dir.path().join("stego.raw");
        let target = dir.path().join("raw.bin");
        fs::write(&stego, [0xa1u8, 0xb2, 0xc3]).unwrap();

        UnveilRawArgs {
            media: stego,
            output_file: target.clone(),
        }
        .run(CodecOptions::default().with_num_lsbs(NumLsbs::new(4).unwrap()))
        .unwrap();

        // the trailing half byte is dropped
        assert_eq!(fs::read(target).unwrap(), vec![0x12]);
    }
}
