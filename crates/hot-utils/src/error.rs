/// Errors reported by hot-utils.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The alignment is not a power of two.
    #[error("invalid allocation layout (size={size}, align={align})")]
    InvalidLayout { size: usize, align: usize },

    /// The underlying allocator returned null.
    #[error("memory exhausted allocating {size} bytes (align={align})")]
    OutOfMemory { size: usize, align: usize },

    #[cfg(feature = "report")]
    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
