use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error deserializing bincoded wordfile
    #[cfg(feature = "bincode")]
    #[error("Wordfile {0} could not be (de)serialized")]
    WordfileDeserializeError(String),

    /// The string is longer than 16 tokens
    #[error("Encoder: string too long {0}")]
    EncodeStringTooLong(String),

    /// Token is not a letter, or a blank where blanks are allowed
    #[error("Encoder: invalid token '{0}'")]
    InvalidToken(String),

    /// Code is not valid for `Tile`
    #[error("Invalid code for tile {0}")]
    InvalidTileCode(u8),

    /// Code is not valid for `Letter`
    #[error("Invalid code for letter {0}")]
    InvalidLetterCode(u8),

    /// The rack holds more tiles than allowed
    #[error("Rack has {len} tiles, at most {max} allowed")]
    RackTooLong { len: usize, max: usize },

    /// The dictionary does not contain any words
    #[error("The dictionary is empty")]
    EmptyDictionary,
}

impl Error {
    /// Check if the error was caused by the letters given by the user.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::InvalidToken(_) | Error::EncodeStringTooLong(_) | Error::RackTooLong { .. }
        )
    }
}
