//! Configuration options for value formatting.
//!
//! [`InspectOptions`] gathers the tunables of the inspector and layout
//! engine. It is always passed explicitly into the formatting entry
//! points; there is no process-wide styling or depth state.
//!
//! ## Examples
//!
//! ```rust
//! use console_inspect::{format, value, InspectOptions};
//!
//! let options = InspectOptions::new()
//!     .with_line_width(40)
//!     .with_depth_limit(2);
//!
//! let line = format(&[value!({ "a": 1 })], options).unwrap();
//! assert_eq!(line, "{ a: 1 }\n");
//! ```

/// Tunables for the inspector and layout engine.
///
/// The defaults reproduce the reference console conventions: containers
/// collapse to a type placeholder at the fourth nesting level, a rendering
/// wider than 60 characters wraps across indented lines, typed arrays show
/// at most 100 elements, and buffers at most 50 bytes.
///
/// # Examples
///
/// ```rust
/// use console_inspect::InspectOptions;
///
/// let options = InspectOptions::new();
/// assert_eq!(options.depth_limit, 4);
/// assert_eq!(options.line_width, 60);
/// assert!(!options.colors);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct InspectOptions {
    /// Nesting level at which non-empty containers collapse to a
    /// bracketed type name. The outermost container sits at level 1.
    pub depth_limit: usize,
    /// Maximum total width, in characters, a container may occupy before
    /// it is broken across indented lines.
    pub line_width: usize,
    /// Maximum number of typed-array elements rendered before a
    /// `... N more items` marker.
    pub typed_array_cap: usize,
    /// Maximum number of buffer bytes rendered before a
    /// `... N more bytes` marker.
    pub buffer_cap: usize,
    /// Whether to wrap rendered tokens in ANSI styles. Styling is layered
    /// after width accounting and never changes layout decisions.
    pub colors: bool,
}

impl Default for InspectOptions {
    fn default() -> Self {
        InspectOptions {
            depth_limit: 4,
            line_width: 60,
            typed_array_cap: 100,
            buffer_cap: 50,
            colors: false,
        }
    }
}

impl InspectOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the nesting level at which non-empty containers collapse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use console_inspect::InspectOptions;
    ///
    /// let options = InspectOptions::new().with_depth_limit(2);
    /// assert_eq!(options.depth_limit, 2);
    /// ```
    #[must_use]
    pub fn with_depth_limit(mut self, depth_limit: usize) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    /// Sets the width threshold for breaking a container across lines.
    #[must_use]
    pub fn with_line_width(mut self, line_width: usize) -> Self {
        self.line_width = line_width;
        self
    }

    /// Sets the typed-array element cap.
    #[must_use]
    pub fn with_typed_array_cap(mut self, cap: usize) -> Self {
        self.typed_array_cap = cap;
        self
    }

    /// Sets the buffer byte cap.
    #[must_use]
    pub fn with_buffer_cap(mut self, cap: usize) -> Self {
        self.buffer_cap = cap;
        self
    }

    /// Enables or disables ANSI styling of the output.
    #[must_use]
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }
}
