/// Numeric field of a command that can be throttled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Times,
    Faces,
    Modifier,
    Multiplier,
    Repeat,
}

impl Field {
    /// Fixed order in which throttles are checked
    pub const ALL: [Field; 5] = [
        Field::Times,
        Field::Faces,
        Field::Modifier,
        Field::Multiplier,
        Field::Repeat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Times => "times",
            Field::Faces => "faces",
            Field::Modifier => "modifier",
            Field::Multiplier => "multiplier",
            Field::Repeat => "repeat",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Crate Error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{field} ({value}) exceeds the limit of {limit} that has been imposed")]
    ThrottleExceeded { field: Field, value: i64, limit: i64 },

    #[error("domain error: {0}")]
    Domain(String),
}

/// Crate Result type
pub type Result<T> = std::result::Result<T, Error>;
