use thiserror::Error;

/// Errors raised while configuring a picker or drawing from it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    /// Options were rejected at construction time.
    #[error("Invalid picker configuration: {0}")]
    InvalidConfig(String),
    /// The number generator was asked for an empty range.
    #[error("Invalid range: min ({min}) must be less than or equal to max ({max})")]
    InvalidRange { min: i64, max: i64 },
    /// A unique collection needs at least one item.
    #[error("Unique collections must be initialized with at least one item")]
    EmptyInput,
    /// A collection was accessed past its current size.
    #[error("Offset {index} does not exist (collection holds {count} items)")]
    IndexOutOfRange { index: usize, count: usize },
    /// There is nothing to pick from.
    #[error("Nothing to pick: the collection is empty")]
    EmptySelection,
    /// An item resolved to a negative weight.
    #[error("Weight must be non-negative (got {weight} for the item at offset {index})")]
    NegativeWeight { index: usize, weight: i64 },
    /// Every item resolved to a zero weight.
    #[error("Total weight must be greater than 0")]
    ZeroTotalWeight,
    /// The cumulative weight no longer fits in an `i64`.
    #[error("Total weight overflows at offset {index}")]
    WeightOverflow { index: usize },
    /// A bounded picker has completed all of its loops.
    #[error("Maximum number of loops reached ({max_loops})")]
    LoopLimitReached { max_loops: i64 },
}

/// A type alias for `Result<T, PickerError>`.
pub type PickerResult<T> = Result<T, PickerError>;

impl From<serde_json::Error> for PickerError {
    fn from(err: serde_json::Error) -> Self {
        PickerError::InvalidConfig(err.to_string())
    }
}
