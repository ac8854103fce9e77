//! The pipeline execution engine.
//!
//! A [`Pipeline`] owns a current value and threads it through a chain of
//! transformations. Steps never return errors to the caller directly;
//! instead they are recorded on the pipeline together with a [`Severity`]:
//!
//! | Condition                                             | Severity  | Value           |
//! |-------------------------------------------------------|-----------|-----------------|
//! | revert attempted without an attached history          | non-fatal | unchanged       |
//! | revert target does not exist                          | fatal     | cleared to `""` |
//! | a leaf transform or comparator rejects its input      | non-fatal | unchanged       |
//!
//! Every transformation consults [`Pipeline::should_continue`] first. The gate
//! closes only when an error is recorded *and* the value is empty, which is
//! exactly the state a fatal error leaves behind. Reverts are not gated: once
//! one restores a non-empty value the gate opens again, even though the
//! recorded error is kept until [`Pipeline::clear_error`].

use std::fmt;

use crate::{
  compare::ComparisonManager,
  config::PipelineConfig,
  error::{
    Error,
    Fault,
    Result,
    Severity,
  },
  history::History,
};

#[derive(Debug, Clone)]
pub struct Pipeline {
  value:       String,
  original:    String,
  fault:       Option<Fault>,
  history:     Option<History>,
  comparisons: Option<ComparisonManager>,
}

impl Pipeline {
  pub fn new(initial: impl Into<String>) -> Self {
    let value = initial.into();
    Self {
      original:    value.clone(),
      value,
      fault:       None,
      history:     None,
      comparisons: None,
    }
  }

  /// Creates a pipeline and attaches a history when `config` enables one.
  pub fn with_config(initial: impl Into<String>, config: &PipelineConfig) -> Self {
    let pipeline = Self::new(initial);
    match config.history_capacity() {
      Some(capacity) => pipeline.with_history(capacity),
      None => pipeline,
    }
  }

  /// Attaches a history seeded with the current value.
  ///
  /// Only the first call has an effect; later calls keep the existing history
  /// and its capacity.
  pub fn with_history(mut self, capacity: usize) -> Self {
    if self.history.is_none() {
      let mut history = History::new(capacity);
      history.add(self.value.clone());
      self.history = Some(history);
    }
    self
  }

  /// The gate every transformation checks before touching the value.
  #[inline]
  pub fn should_continue(&self) -> bool {
    self.fault.is_none() || !self.value.is_empty()
  }

  /// Stores `value` as the current value and records it in the history.
  pub(crate) fn set_value(&mut self, value: String) {
    if let Some(history) = self.history.as_mut() {
      history.add(value.clone());
    }
    self.value = value;
  }

  /// Records `error`. A fatal error also clears the value, which pushes an
  /// empty snapshot when a history is attached.
  pub(crate) fn set_error(&mut self, error: Error, severity: Severity) {
    tracing::debug!(%error, %severity, "pipeline error recorded");
    self.fault = Some(Fault { error, severity });
    if severity.is_fatal() {
      self.set_value(String::new());
    }
  }

  /// Runs an infallible step behind the gate.
  pub(crate) fn apply(mut self, op: &'static str, f: impl FnOnce(&str) -> String) -> Self {
    if !self.should_continue() {
      tracing::trace!(op, "pipeline halted, skipping");
      return self;
    }
    let next = f(&self.value);
    tracing::trace!(op, "applied");
    self.set_value(next);
    self
  }

  /// Runs a fallible step behind the gate. A rejected input is recorded as a
  /// non-fatal error and leaves the value untouched.
  pub(crate) fn try_apply(
    mut self,
    op: &'static str,
    f: impl FnOnce(&str) -> Result<String>,
  ) -> Self {
    if !self.should_continue() {
      tracing::trace!(op, "pipeline halted, skipping");
      return self;
    }
    match f(&self.value) {
      Ok(next) => {
        tracing::trace!(op, "applied");
        self.set_value(next);
      },
      Err(error) => self.set_error(error, Severity::NonFatal),
    }
    self
  }

  /// Runs a read-only step behind the gate. Used by comparisons, which
  /// record results without changing the value.
  pub(crate) fn inspect(
    mut self,
    op: &'static str,
    f: impl FnOnce(&str, &mut ComparisonManager) -> Result<()>,
  ) -> Self {
    if !self.should_continue() {
      tracing::trace!(op, "pipeline halted, skipping");
      return self;
    }
    let comparisons = self.comparisons.get_or_insert_with(ComparisonManager::default);
    if let Err(error) = f(&self.value, comparisons) {
      self.set_error(error, Severity::NonFatal);
    }
    self
  }

  /// Applies an arbitrary function to the value.
  pub fn transform(self, f: impl FnOnce(&str) -> String) -> Self {
    self.apply("transform", f)
  }

  /// Applies `f` only when `condition` holds. Otherwise the value passes
  /// through and nothing is recorded.
  pub fn when(self, condition: bool, f: impl FnOnce(&str) -> String) -> Self {
    if condition {
      self.apply("when", f)
    } else {
      self
    }
  }

  /// Applies a fallible function. An `Err` becomes a non-fatal error.
  pub fn try_transform(self, f: impl FnOnce(&str) -> Result<String>) -> Self {
    self.try_apply("try_transform", f)
  }

  /// Restores the value the pipeline was created with.
  ///
  /// Works with or without a history and never touches it.
  pub fn revert_to_original(mut self) -> Self {
    self.value.clone_from(&self.original);
    tracing::debug!("reverted to original value");
    self
  }

  /// Steps back to the snapshot before the most recent one and drops the
  /// most recent one from the history.
  ///
  /// Without a history this records a non-fatal
  /// [`Error::HistoryNotInitialized`]. With fewer than two snapshots it
  /// records a fatal [`Error::InvalidHistoryIndex`].
  pub fn revert_to_previous(mut self) -> Self {
    let Some(history) = self.history.as_mut() else {
      self.set_error(Error::HistoryNotInitialized, Severity::NonFatal);
      return self;
    };
    match history.previous().map(str::to_owned) {
      Ok(previous) => {
        let len = history.len() - 1;
        history.truncate(len);
        tracing::debug!(history_len = len, "reverted to previous snapshot");
        self.value = previous;
      },
      Err(error) => self.set_error(error, Severity::Fatal),
    }
    self
  }

  /// Rewinds to snapshot `index`, keeping snapshots `0..=index`.
  ///
  /// Without a history this records a non-fatal
  /// [`Error::HistoryNotInitialized`]. An out of range index records a fatal
  /// [`Error::InvalidHistoryIndex`].
  pub fn revert_to_index(mut self, index: usize) -> Self {
    let Some(history) = self.history.as_mut() else {
      self.set_error(Error::HistoryNotInitialized, Severity::NonFatal);
      return self;
    };
    match history.get(index).map(str::to_owned) {
      Ok(snapshot) => {
        history.truncate(index + 1);
        tracing::debug!(index, "reverted to snapshot");
        self.value = snapshot;
      },
      Err(error) => self.set_error(error, Severity::Fatal),
    }
    self
  }

  /// Lets `select` pick the snapshot to rewind to.
  ///
  /// `Some(index)` behaves like [`Pipeline::revert_to_index`]. `None` means no
  /// suitable snapshot exists and records a fatal
  /// [`Error::InvalidHistoryIndex`].
  pub fn revert_with(mut self, select: impl FnOnce(&History) -> Option<usize>) -> Self {
    let Some(history) = self.history.as_ref() else {
      self.set_error(Error::HistoryNotInitialized, Severity::NonFatal);
      return self;
    };
    match select(history) {
      Some(index) => self.revert_to_index(index),
      None => {
        let len = history.len();
        self.set_error(Error::InvalidHistoryIndex { index: None, len }, Severity::Fatal);
        self
      },
    }
  }

  /// Forgets the recorded error. Reverts never do this on their own.
  pub fn clear_error(mut self) -> Self {
    self.fault = None;
    self
  }

  #[inline]
  pub fn as_str(&self) -> &str {
    &self.value
  }

  #[inline]
  pub fn original(&self) -> &str {
    &self.original
  }

  pub fn error(&self) -> Option<&Error> {
    self.fault.as_ref().map(|fault| &fault.error)
  }

  pub fn severity(&self) -> Option<Severity> {
    self.fault.as_ref().map(|fault| fault.severity)
  }

  pub fn fault(&self) -> Option<&Fault> {
    self.fault.as_ref()
  }

  pub fn history(&self) -> Option<&History> {
    self.history.as_ref()
  }

  pub fn comparisons(&self) -> Option<&ComparisonManager> {
    self.comparisons.as_ref()
  }

  /// Finishes the chain. Any recorded error, fatal or not, discards the
  /// value; use [`Pipeline::result`] to keep it.
  ///
  /// # Errors
  /// The recorded error, if there is one.
  pub fn build(self) -> Result<String> {
    match self.fault {
      Some(fault) => Err(fault.error),
      None => Ok(self.value),
    }
  }

  /// Finishes the chain, returning the value as it stands and the recorded
  /// error separately.
  pub fn result(self) -> (String, Option<Error>) {
    (self.value, self.fault.map(|fault| fault.error))
  }

  pub fn into_string(self) -> String {
    self.value
  }
}

impl fmt::Display for Pipeline {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.value)
  }
}

impl From<String> for Pipeline {
  fn from(value: String) -> Self {
    Self::new(value)
  }
}

impl From<&str> for Pipeline {
  fn from(value: &str) -> Self {
    Self::new(value)
  }
}
