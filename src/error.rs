//! Error types for value formatting and the console facade.
//!
//! The inspector itself is computation-only, so the taxonomy is small:
//! a value (or a serde shape) the renderer refuses to coerce, an I/O
//! failure while the facade writes a line, and a generic message carrier
//! for serde integration. Formatting is strict by design: a value kind
//! that cannot be represented surfaces as [`Error::UnsupportedValue`]
//! with no partial output, rather than being silently stringified.
//!
//! ## Examples
//!
//! ```rust
//! use console_inspect::{to_value, Error};
//! use std::collections::HashMap;
//!
//! // Non-string map keys are unsupported by the value bridge.
//! let map: HashMap<u32, &str> = [(1, "one")].into_iter().collect();
//! let result = to_value(&map);
//! assert!(matches!(result, Err(Error::UnsupportedValue(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// All errors the formatting entry points and the console facade can surface.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A value's kind cannot be rendered. Fatal to the current format
    /// call; no partial output is produced.
    #[error("unsupported value: {0}")]
    UnsupportedValue(String),

    /// Writing a formatted line to a sink failed.
    #[error("IO error: {0}")]
    Io(String),

    /// Generic message, used for serde error integration.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an unsupported-value error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use console_inspect::Error;
    ///
    /// let err = Error::unsupported("tuple variants");
    /// assert!(err.to_string().contains("tuple variants"));
    /// ```
    pub fn unsupported(msg: &str) -> Self {
        Error::UnsupportedValue(msg.to_string())
    }

    /// Creates an I/O error from a display message.
    pub fn io<T: fmt::Display>(msg: T) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
