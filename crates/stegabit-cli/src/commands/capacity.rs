use std::fs;
use std::io;
use std::path::PathBuf;

use clap::Args;
use stegabit_core::{Capacity, CodecOptions, LsbCodec, StegabitError};

use crate::CliResult;

/// Shows how much data a raw cover buffer file can carry
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Raw cover buffer file
    #[arg(short = 'i', long = "in", value_name = "cover file", required = true)]
    pub media: PathBuf,
}

impl CapacityArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        println!("{}", render(&self.plan(options)?));

        Ok(())
    }

    fn plan(&self, options: CodecOptions) -> CliResult<Capacity> {
        let file_len = fs::metadata(&self.media)
            .map_err(|source| StegabitError::ReadError { source })?
            .len();

        Ok(LsbCodec::with_options(options).capacity(buffer_len(file_len)?))
    }
}

/// The file length as buffer length, fails if it does not fit into memory on this platform.
fn buffer_len(file_len: u64) -> CliResult<usize> {
    usize::try_from(file_len).map_err(|_| StegabitError::ReadError {
        source: io::Error::new(
            io::ErrorKind::InvalidData,
            format!("cover file of {file_len} bytes exceeds the addressable memory"),
        ),
    })
}

fn render(capacity: &Capacity) -> String {
    format!(
        "cover bytes:      {}\n\
         capacity bits:    {}\n\
         capacity bytes:   {}\n\
         framing overhead: {} bits\n\
         max payload:      {} bytes",
        capacity.buffer_len,
        capacity.capacity_bits,
        capacity.capacity_bytes,
        capacity.framing_overhead_bits,
        capacity.max_payload_bytes
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use stegabit_core::NumLsbs;
    use tempfile::NamedTempFile;

    #[test]
    fn should_plan_from_the_file_size() {
        let cover = NamedTempFile::new().unwrap();
        fs::write(cover.path(), [0u8; 20]).unwrap();

        let capacity = CapacityArgs {
            media: cover.path().to_path_buf(),
        }
        .plan(CodecOptions::default().with_num_lsbs(NumLsbs::new(2).unwrap()))
        .unwrap();

        assert_eq!(capacity.capacity_bits, 40);
        assert_eq!(capacity.max_payload_bytes, 3);
        assert!(render(&capacity).contains("max payload:      3 bytes"));
    }

    #[test]
    fn should_convert_file_lengths_that_fit() {
        assert_eq!(buffer_len(20).unwrap(), 20);
        assert_eq!(buffer_len(usize::MAX as u64).unwrap(), usize::MAX);
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn should_reject_file_lengths_beyond_usize() {
        assert!(matches!(
            buffer_len(u64::from(u32::MAX) + 1),
            Err(StegabitError::ReadError { .. })
        ));
    }
}
