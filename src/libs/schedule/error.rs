use thiserror::Error;

/// Everything that aborts a run.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// A record lacks required fields or carries a non-numeric coordinate or score
    #[error("malformed record at line {line}: {reason}\n{record}")]
    Malformed {
        line: usize,
        record: String,
        reason: String,
    },

    /// Input declared as sorted by start is not sorted within a group
    #[error("input is not sorted by start in group '{group}': {start} follows {prev}")]
    Unsorted { group: String, prev: u64, start: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
