use std::error::Error;
use std::fmt;

/// InputValueError is used if some option or input value does not fulfill the posed requirements,
/// e.g., an unsupported input file extension.
#[derive(Debug, Clone)]
pub struct InputValueError;

impl fmt::Display for InputValueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid input value")
    }
}

impl Error for InputValueError {}
