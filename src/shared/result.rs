/// Type alias for Result with anyhow::Error as the error type.
/// Typed failures are wrapped as [`crate::shared::error::SourceError`] and
/// recovered by callers with `downcast_ref`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
