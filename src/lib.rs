mod err;
mod stack;

pub use err::Error;
pub use stack::{Stack, DEFAULT_CAPACITY};
