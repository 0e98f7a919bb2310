use super::error::ShellError;

/// Text encoding used to decode captured output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    /// Invalid sequences are an error
    #[default]
    Utf8,
    /// Invalid sequences become U+FFFD
    Utf8Lossy,
}

impl Encoding {
    pub fn decode(self, bytes: Vec<u8>) -> Result<String, ShellError> {
        match self {
            Encoding::Utf8 => Ok(String::from_utf8(bytes)?),
            Encoding::Utf8Lossy => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        }
    }
}
