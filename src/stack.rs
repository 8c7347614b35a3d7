use log::debug;

use crate::err::Error;

/// Capacity used by `Stack::new` when the caller does not pick one.
pub const DEFAULT_CAPACITY: usize = 20;

/// Fixed-capacity LIFO stack of `f32` operands.
///
/// Storage is allocated once at construction and never grows. Push on a
/// full stack and pop/peek on an empty one are rejected with an [`Error`]
/// instead of reaching past the buffer.
#[derive(Debug)]
pub struct Stack {
    data: Box<[f32]>,
    len: usize,
}

impl Stack {
    pub fn new() -> Stack {
        Stack {
            data: vec![0.0; DEFAULT_CAPACITY].into_boxed_slice(),
            len: 0,
        }
    }

    /// Creates an empty stack with exactly `capacity` slots.
    ///
    /// `capacity` must be at least 1; zero is rejected with
    /// [`Error::InvalidCapacity`].
    pub fn with_capacity(capacity: usize) -> Result<Stack, Error> {
        if capacity == 0 {
            debug!("[STACK] rejected capacity 0");
            return Err(Error::InvalidCapacity);
        }
        Ok(Stack {
            data: vec![0.0; capacity].into_boxed_slice(),
            len: 0,
        })
    }

    pub fn push(&mut self, value: f32) -> Result<(), Error> {
        if self.is_full() {
            debug!("[STACK] push rejected: full len={}", self.len);
            return Err(Error::Overflow);
        }
        self.data[self.len] = value;
        self.len += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<f32, Error> {
        if self.is_empty() {
            debug!("[STACK] pop rejected: empty");
            return Err(Error::Underflow);
        }
        self.len -= 1;
        Ok(self.data[self.len])
    }

    /// Returns the most recently pushed value without removing it.
    pub fn peek(&self) -> Result<f32, Error> {
        if self.is_empty() {
            debug!("[STACK] peek rejected: empty");
            return Err(Error::Underflow);
        }
        Ok(self.data[self.len - 1])
    }

    pub fn is_full(&self) -> bool {
        self.len == self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }
}

impl Default for Stack {
    fn default() -> Stack {
        Stack::new()
    }
}
