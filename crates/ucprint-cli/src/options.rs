//! Run configuration.

/// What to do with an argument that is not a usable hexadecimal integer.
///
/// Covers malformed text (stray characters, overflow, no digits) and
/// negative values. Arguments that parse but are not valid scalar values
/// are always rejected regardless of this setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvalidArgumentPolicy {
    /// Report the argument and stop.
    ///
    /// Malformed text is a usage error (exit status 1); a negative value is
    /// an invalid code point (exit status 2).
    #[default]
    Reject,

    /// Print the argument text verbatim in place of an encoding and carry on
    /// with the next argument.
    Passthrough,
}

/// Configuration for a single [`run`](crate::run).
///
/// # Examples
///
/// ```rust
/// use ucprint_cli::{InvalidArgumentPolicy, RunOptions};
///
/// let options = RunOptions {
///     invalid_argument: InvalidArgumentPolicy::Passthrough,
/// };
/// ```
///
/// # Default
///
/// Strict: every argument must be a non-negative hexadecimal integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Handling of arguments that fail hexadecimal parsing.
    ///
    /// # Default
    ///
    /// [`InvalidArgumentPolicy::Reject`]
    pub invalid_argument: InvalidArgumentPolicy,
}
