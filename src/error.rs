use openssl::error::ErrorStack;
pub type Res<T> = Result<T, Error>;

#[derive(Debug, PartialEq, Clone)]
pub enum Error {
    LengthMismatch,
    EmptyKey,
    InvalidLength,
    InvalidPadding,
    InsufficientData,
    EncryptionError,
}

impl From<ErrorStack> for Error {
    fn from(_: ErrorStack) -> Self {
        Error::EncryptionError
    }
}

use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::LengthMismatch => write!(f, "Operands differ in length"),
            Error::EmptyKey => write!(f, "Key must not be empty"),
            Error::InvalidLength => {
                write!(f, "Data length is not a multiple of the block length")
            }
            Error::InvalidPadding => write!(f, "Trailing bytes are not valid padding"),
            Error::InsufficientData => {
                write!(f, "Not enough data for the requested keysize range")
            }
            Error::EncryptionError => write!(f, "Encryption error has occurred"),
        }
    }
}

impl std::error::Error for Error {}
