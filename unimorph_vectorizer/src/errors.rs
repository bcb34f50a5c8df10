//! Definition of errors.

use std::error::Error;
use std::fmt;
use std::num::ParseIntError;

pub type Result<T, E = VectorizerError> = std::result::Result<T, E>;

#[derive(Debug)]
pub enum VectorizerError {
    InvalidModel(InvalidModelError),
    InvalidArgument(InvalidArgumentError),
    ParseIntError(ParseIntError),
    JsonError(serde_json::Error),
    IOError(std::io::Error),
}

impl VectorizerError {
    pub(crate) fn invalid_model<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidModel(InvalidModelError { msg: msg.into() })
    }

    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }
}

impl fmt::Display for VectorizerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidModel(e) => fmt::Display::fmt(e, f),
            Self::InvalidArgument(e) => fmt::Display::fmt(e, f),
            Self::ParseIntError(e) => fmt::Display::fmt(e, f),
            Self::JsonError(e) => fmt::Display::fmt(e, f),
            Self::IOError(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl Error for VectorizerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidModel(e) => Some(e),
            Self::InvalidArgument(e) => Some(e),
            Self::ParseIntError(e) => Some(e),
            Self::JsonError(e) => Some(e),
            Self::IOError(e) => Some(e),
        }
    }
}

/// Error used when the model is invalid.
#[derive(Debug)]
pub struct InvalidModelError {
    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidModelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidModelError: {}", self.msg)
    }
}

impl Error for InvalidModelError {}

/// Error used when the argument is invalid.
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// Name of the argument.
    pub(crate) arg: &'static str,

    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

impl From<ParseIntError> for VectorizerError {
    fn from(error: ParseIntError) -> Self {
        Self::ParseIntError(error)
    }
}

impl From<serde_json::Error> for VectorizerError {
    fn from(error: serde_json::Error) -> Self {
        Self::JsonError(error)
    }
}

impl From<std::io::Error> for VectorizerError {
    fn from(error: std::io::Error) -> Self {
        Self::IOError(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let e = VectorizerError::invalid_argument("tag", "empty part of speech");

        assert_eq!(
            "InvalidArgumentError: tag: empty part of speech",
            &e.to_string()
        );
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let e: VectorizerError = "x".parse::<usize>().unwrap_err().into();

        assert!(matches!(e, VectorizerError::ParseIntError(_)));
        assert!(e.source().is_some());
    }
}
