use std::path::PathBuf;

use clap::Args;
use log::info;
use stegabit_core::{CodecOptions, LsbCodec};

use super::{read_buffer, write_buffer};
use crate::CliResult;

/// Hides data in a raw cover buffer file
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Raw cover buffer file, such as flattened pixel or PCM bytes, used readonly.
    #[arg(short = 'i', long = "in", value_name = "cover file", required = true)]
    pub media: PathBuf,

    /// Final stego buffer will be stored as file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub write_to_file: PathBuf,

    /// File to hide in the cover buffer
    #[arg(
        short = 'd',
        long = "data",
        value_name = "data file",
        required_unless_present = "message",
        conflicts_with = "message"
    )]
    pub data_file: Option<PathBuf>,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message")]
    pub message: Option<String>,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let cover = read_buffer(&self.media)?;
        let payload = match (self.data_file, self.message) {
            (Some(data_file), _) => read_buffer(&data_file)?,
            (None, Some(message)) => message.into_bytes(),
            (None, None) => Vec::new(),
        };

        let stego = LsbCodec::with_options(options).hide(&cover, &payload)?;
        write_buffer(&self.write_to_file, &stego)?;
        info!(
            "Hid {} bytes in {}",
            payload.len(),
            self.write_to_file.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use stegabit_core::StegabitError;
    use tempfile::TempDir;

    #[test]
    fn should_hide_a_message_in_a_raw_file() {
        let dir = TempDir::new().unwrap();
        let cover = dir.path().join("cover.raw");
        let stego = dir.path().join("stego.raw");
        fs::write(&cover, [0x80u8; 128]).unwrap();

        HideArgs {
            media: cover,
            write_to_file: stego.clone(),
            data_file: None,
            message: Some("Hello".to_string()),
        }
        .run(CodecOptions::default())
        .unwrap();

        let stego = fs::read(stego).unwrap();
        assert_eq!(stego.len(), 128);
        assert_eq!(
            LsbCodec::new().unveil(&stego).unwrap().to_text_lossy(),
            "Hello"
        );
    }

    #[test]
    fn should_not_write_anything_if_the_data_does_not_fit() {
        let dir = TempDir::new().unwrap();
        let cover = dir.path().join("cover.raw");
        let data = dir.path().join("data.bin");
        let stego = dir.path().join("stego.raw");
        fs::write(&cover, [0u8; 16]).unwrap();
        fs::write(&data, [1u8; 8]).unwrap();

        let result = HideArgs {
            media: cover,
            write_to_file: stego.clone(),
            data_file: Some(data),
            message: None,
        }
        .run(CodecOptions::default());

        assert!(matches!(
            result,
            Err(StegabitError::PayloadTooLarge { .. })
        ));
        assert!(!stego.exists());
    }

    #[test]
    fn should_fail_on_a_missing_cover() {
        let dir = TempDir::new().unwrap();

        let result = HideArgs {
            media: dir.path().join("missing.raw"),
            write_to_file: dir.path().join("stego.raw"),
            data_file: None,
            message: Some("x".to_string()),
        }
        .run(CodecOptions::default());

        assert!(matches!(result, Err(StegabitError::ReadError { .. })));
    }
}
