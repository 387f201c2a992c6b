/* src/routes/core/src/errors.rs */

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutesError {
  code: String,
  message: String,
}

impl RoutesError {
  pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
    Self { code: code.into(), message: message.into() }
  }

  pub fn invalid_language(msg: impl Into<String>) -> Self {
    Self::new("INVALID_LANGUAGE", msg)
  }

  pub fn mapping_conflict(msg: impl Into<String>) -> Self {
    Self::new("MAPPING_CONFLICT", msg)
  }

  pub fn invalid_config(msg: impl Into<String>) -> Self {
    Self::new("INVALID_CONFIG", msg)
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }
}

impl fmt::Display for RoutesError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code, self.message)
  }
}

impl std::error::Error for RoutesError {}
