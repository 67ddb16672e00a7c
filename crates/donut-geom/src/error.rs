use thiserror::Error;

/// Rejected ring or menu configuration. Raised eagerly at construction so
/// no malformed geometry is ever produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidConfig {
    #[error("slice count must be at least 1")]
    NoSlices,
    #[error("radius must not be negative (inner {inner}, outer {outer})")]
    NegativeRadius { inner: f64, outer: f64 },
    #[error("inner radius {inner} must be smaller than outer radius {outer}")]
    InvertedRadii { inner: f64, outer: f64 },
    #[error("ring geometry must be finite")]
    NonFinite,
    #[error("expected {expected} menu entries, got {actual}")]
    EntryCount { expected: usize, actual: usize },
}
