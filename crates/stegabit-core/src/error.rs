use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegabitError {
    /// Represents a number of least significant bits outside of `1..=8`
    #[error("Invalid number of LSBs: {0}, expected a value between 1 and 8")]
    InvalidNumLsbs(u8),

    /// Represents a delimiter bit pattern that cannot be used, for example an empty one or one with other chars than `0` and `1`
    #[error("Invalid delimiter bit pattern: {0:?}")]
    InvalidDelimiter(String),

    /// Represents a payload that does not fit into the cover buffer, sizes are given in bytes
    #[error(
        "Capacity Error: The payload of {requested} bytes is too large, the cover buffer accepts at most {max_capacity} bytes"
    )]
    PayloadTooLarge { max_capacity: usize, requested: usize },

    /// Represents a framed bitstream that has more bits than the cover buffer can carry
    #[error(
        "Capacity Error: The framed bitstream needs {requested_bits} bits but the cover buffer only carries {capacity_bits} bits"
    )]
    InsufficientCapacity {
        capacity_bits: usize,
        requested_bits: usize,
    },

    /// Represents an extraction that scanned all available bits without finding the delimiter
    #[error("No delimiter found after scanning {scanned_bits} bits")]
    DelimiterNotFound { scanned_bits: usize },

    /// Represents a length header that declares more bits than the buffer has left
    #[error("Truncated stream: the length header declares {declared_bits} bits but only {available_bits} bits are available")]
    TruncatedStream {
        declared_bits: usize,
        available_bits: usize,
    },

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
