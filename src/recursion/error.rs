//! Error types for the stack-safe algorithms.

/// Represents errors that can occur while evaluating a recursive algorithm.
///
/// Shape errors such as treating a non-list as a list cannot occur: the
/// list and tree types rule them out at compile time.
///
/// # Examples
///
/// ```rust
/// use stackless::recursion::RecursionError;
///
/// let error = RecursionError::NumericOverflow { operand: 21 };
/// assert_eq!(
///     format!("{error}"),
///     "numeric overflow: multiplying by 21 exceeds the u64 range"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecursionError {
    /// An intermediate result does not fit in the integer type.
    NumericOverflow {
        /// The factor whose multiplication overflowed.
        operand: u64,
    },
}

impl std::fmt::Display for RecursionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NumericOverflow { operand } => write!(
                formatter,
                "numeric overflow: multiplying by {operand} exceeds the u64 range"
            ),
        }
    }
}

impl std::error::Error for RecursionError {}
