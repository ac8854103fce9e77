use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything a pipeline step can report.
///
/// Kinds carry no severity of their own. The call site that records the error
/// on a [`crate::Pipeline`] decides whether it is [`Severity::Fatal`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("history is not initialized")]
  HistoryNotInitialized,
  /// `index` is `None` when no particular index was requested, e.g. stepping
  /// back from a history that has nothing before its last snapshot.
  #[error("invalid history index {index:?} (history holds {len} snapshots)")]
  InvalidHistoryIndex { index: Option<usize>, len: usize },
  #[error("comparison inputs differ in length ({left} vs {right} chars)")]
  InvalidComparisonInput { left: usize, right: usize },
  #[error("unknown {kind} `{input}`")]
  InvalidFormatInput { kind: &'static str, input: String },
}

impl Error {
  pub(crate) fn format_input(kind: &'static str, input: &str) -> Self {
    Self::InvalidFormatInput {
      kind,
      input: input.to_owned(),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
  /// The value is cleared and every following transformation is skipped until
  /// a revert restores a non-empty value.
  Fatal,
  /// Recorded only. The chain keeps running on the current value.
  NonFatal,
}

impl Severity {
  #[inline]
  pub const fn is_fatal(self) -> bool {
    matches!(self, Self::Fatal)
  }
}

impl fmt::Display for Severity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Fatal => "fatal",
      Self::NonFatal => "non-fatal",
    })
  }
}

/// An error together with the severity it was recorded with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
  pub error:    Error,
  pub severity: Severity,
}

impl Fault {
  #[inline]
  pub const fn is_fatal(&self) -> bool {
    self.severity.is_fatal()
  }
}

impl fmt::Display for Fault {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} error: {}", self.severity, self.error)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn messages() {
    assert_eq!(
      Error::InvalidHistoryIndex {
        index: Some(4),
        len:   2,
      }
      .to_string(),
      "invalid history index Some(4) (history holds 2 snapshots)"
    );
    assert_eq!(
      Error::format_input("case", "sponge").to_string(),
      "unknown case `sponge`"
    );
    let fault = Fault {
      error:    Error::HistoryNotInitialized,
      severity: Severity::NonFatal,
    };
    assert_eq!(
      fault.to_string(),
      "non-fatal error: history is not initialized"
    );
    assert!(!fault.is_fatal());
  }
}
