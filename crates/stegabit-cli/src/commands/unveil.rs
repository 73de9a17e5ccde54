use std::path::PathBuf;

use clap::Args;
use log::info;
use stegabit_core::{CodecOptions, LsbCodec};

use super::{read_buffer, write_buffer};
use crate::CliResult;

/// Unveils data from a raw stego buffer file
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Raw stego buffer file that contains secret data
    #[arg(short = 'i', long = "in", value_name = "stego file", required = true)]
    pub media: PathBuf,

    /// Unveiled data will be stored as file, printed as text if omitted
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,

    /// Print the unveiled data as text, even when it is stored as file
    #[arg(long)]
    pub text: bool,
}

impl UnveilArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let stego = read_buffer(&self.media)?;
        let payload = LsbCodec::with_options(options).unveil(&stego)?;

        if self.text || self.output_file.is_none() {
            println!("{}", payload.to_text_lossy());
        }
        if let Some(output_file) = &self.output_file {
            let content = payload.into_inner();
            write_buffer(output_file, &content)?;
            info!(
                "Unveiled {} bytes into {}",
                content.len(),
                output_file.display()
            );
        }

        Ok(())
    }
}
