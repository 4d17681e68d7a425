use crate::SharedString;
use smallvec::SmallVec;
use std::{error, fmt};

/// An ordered list of messages explaining why the data was rejected.
///
/// Most validators report at most two messages, so they are kept inline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rejection {
    messages: SmallVec<[SharedString; 2]>,
}

impl Rejection {
    /// Creates an empty instance.
    #[inline]
    pub fn new() -> Self {
        Self {
            messages: SmallVec::new(),
        }
    }

    /// Creates a new instance with a single message.
    #[inline]
    pub fn with_message(message: impl Into<SharedString>) -> Self {
        let mut rejection = Self::new();
        rejection.push(message);
        rejection
    }

    /// Appends a message.
    #[inline]
    pub fn push(&mut self, message: impl Into<SharedString>) {
        self.messages.push(message.into());
    }

    /// Appends all the messages of another rejection.
    #[inline]
    pub fn extend(&mut self, other: Rejection) {
        self.messages.extend(other.messages);
    }

    /// Returns `true` if no message has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the recorded messages.
    #[inline]
    pub fn messages(&self) -> &[SharedString] {
        &self.messages
    }

    /// Returns `Ok(output)` if no message has been recorded, or `Err(self)` otherwise.
    #[inline]
    pub fn check<T>(self, output: T) -> Result<T, Self> {
        if self.is_empty() { Ok(output) } else { Err(self) }
    }
}

impl IntoIterator for Rejection {
    type Item = SharedString;
    type IntoIter = smallvec::IntoIter<[SharedString; 2]>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages.join("; "))
    }
}

impl error::Error for Rejection {}
