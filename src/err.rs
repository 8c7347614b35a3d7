use std::error;
use std::fmt;

/// Failures surfaced by the checked stack operations.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The requested capacity cannot hold a usable stack.
    InvalidCapacity,
    /// Push on a stack already holding `capacity` elements.
    Overflow,
    /// Pop or peek on an empty stack.
    Underflow,
}

impl error::Error for Error {}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidCapacity => write!(f, "stack: invalid capacity"),
            Error::Overflow => write!(f, "stack: overflow"),
            Error::Underflow => write!(f, "stack: underflow"),
        }
    }
}
