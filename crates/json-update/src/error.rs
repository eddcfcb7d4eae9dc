use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpdateError {
    #[error("NOT_AN_ARRAY")]
    NotAnArray,
    #[error("NOT_AN_OBJECT")]
    NotAnObject,
    #[error("INVALID_INDEX")]
    InvalidIndex,
    #[error("INVALID_OPERAND")]
    InvalidOperand,
}
