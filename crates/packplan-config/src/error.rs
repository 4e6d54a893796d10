//! Error types for plan serialization.
//!
//! Settings resolution itself is total and never fails; errors can only come
//! from converting a plan to or from a serialized value.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid plan value: {0}")]
    InvalidValue(String),
}
