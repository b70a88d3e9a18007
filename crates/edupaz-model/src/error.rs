use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("event index {index} out of range (timeline has {len} events)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("unknown {kind} field: {name}")]
    UnknownField { kind: &'static str, name: String },
}

pub type Result<T> = std::result::Result<T, FormError>;
