use std::{
  collections::VecDeque,
  fmt,
};

use crate::error::{
  Error,
  Result,
};

/// A bounded, ordered log of pipeline snapshots.
///
/// Index 0 is the oldest snapshot still retained. A history attached to a
/// [`crate::Pipeline`] is seeded with the pipeline's value at attach time and
/// receives one snapshot per successful transformation afterwards.
///
/// When a new snapshot would push the log past its capacity, the oldest
/// snapshot is evicted. Eviction is strictly first-in first-out, the seed at
/// index 0 included. Reverting to the original value does not depend on the
/// log, see [`crate::Pipeline::revert_to_original`].
///
/// Rewinding truncates the log: everything after the target index is dropped
/// so that later transformations never resurrect a discarded future.
///
/// The default value has capacity 0. It retains nothing, reports a length of
/// 0 and fails every lookup with [`Error::InvalidHistoryIndex`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
  snapshots: VecDeque<String>,
  capacity:  usize,
}

impl History {
  pub fn new(capacity: usize) -> Self {
    Self {
      snapshots: VecDeque::with_capacity(capacity.min(64)),
      capacity,
    }
  }

  /// Appends a snapshot, evicting from the front while over capacity.
  pub fn add(&mut self, snapshot: impl Into<String>) {
    self.snapshots.push_back(snapshot.into());
    while self.snapshots.len() > self.capacity {
      if let Some(evicted) = self.snapshots.pop_front() {
        tracing::debug!(
          capacity = self.capacity,
          evicted_len = evicted.len(),
          "history evicted oldest snapshot"
        );
      }
    }
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.snapshots.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.snapshots.is_empty()
  }

  #[inline]
  pub fn capacity(&self) -> usize {
    self.capacity
  }

  /// The most recent snapshot.
  pub fn last(&self) -> Option<&str> {
    self.snapshots.back().map(String::as_str)
  }

  /// The snapshot recorded before the most recent one.
  ///
  /// # Errors
  /// [`Error::InvalidHistoryIndex`] when fewer than two snapshots exist.
  pub fn previous(&self) -> Result<&str> {
    let len = self.len();
    if len < 2 {
      return Err(Error::InvalidHistoryIndex { index: None, len });
    }
    self.get(len - 2)
  }

  /// # Errors
  /// [`Error::InvalidHistoryIndex`] when `index` is past the end.
  pub fn get(&self, index: usize) -> Result<&str> {
    self
      .snapshots
      .get(index)
      .map(String::as_str)
      .ok_or(Error::InvalidHistoryIndex {
        index: Some(index),
        len:   self.len(),
      })
  }

  /// Keeps the first `len` snapshots and drops the rest.
  pub fn truncate(&mut self, len: usize) {
    self.snapshots.truncate(len);
  }

  pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
    self.snapshots.iter().map(String::as_str)
  }

  /// Index of the first snapshot matching `predicate`.
  pub fn position(&self, mut predicate: impl FnMut(&str) -> bool) -> Option<usize> {
    self.iter().position(|snapshot| predicate(snapshot))
  }

  /// Index of the most recent snapshot matching `predicate`.
  pub fn rposition(&self, mut predicate: impl FnMut(&str) -> bool) -> Option<usize> {
    self.iter().rposition(|snapshot| predicate(snapshot))
  }

  pub fn to_vec(&self) -> Vec<String> {
    self.snapshots.iter().cloned().collect()
  }

  /// Renders the log for diagnostics, see [`format_history`].
  pub fn format(&self, verbose: bool) -> String {
    format_history(self, verbose)
  }
}

impl<'a> IntoIterator for &'a History {
  type Item = &'a String;
  type IntoIter = std::collections::vec_deque::Iter<'a, String>;

  fn into_iter(self) -> Self::IntoIter {
    self.snapshots.iter()
  }
}

impl fmt::Display for History {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&format_history(self, false))
  }
}

/// Renders a history as either a numbered listing, one snapshot per line
/// starting at `1: `, or a single comma-separated line.
pub fn format_history(history: &History, verbose: bool) -> String {
  if verbose {
    history
      .iter()
      .enumerate()
      .map(|(i, snapshot)| format!("{}: {snapshot}", i + 1))
      .collect::<Vec<_>>()
      .join("\n")
  } else {
    history.iter().collect::<Vec<_>>().join(", ")
  }
}

#[cfg(test)]
mod test {
  use super::*;

  fn history_of(capacity: usize, snapshots: &[&str]) -> History {
    let mut history = History::new(capacity);
    for snapshot in snapshots {
      history.add(*snapshot);
    }
    history
  }

  #[test]
  fn add_and_lookup() {
    let history = history_of(5, &["a", "b", "c"]);
    assert_eq!(history.len(), 3);
    assert_eq!(history.get(0), Ok("a"));
    assert_eq!(history.get(2), Ok("c"));
    assert_eq!(history.last(), Some("c"));
    assert_eq!(history.previous(), Ok("b"));
    assert_eq!(
      history.get(3),
      Err(Error::InvalidHistoryIndex {
        index: Some(3),
        len:   3,
      })
    );
  }

  #[test]
  fn previous_needs_two_snapshots() {
    let history = history_of(5, &["only"]);
    assert_eq!(
      history.previous(),
      Err(Error::InvalidHistoryIndex { index: None, len: 1 })
    );
  }

  #[test]
  fn eviction_is_fifo_including_seed() {
    let history = history_of(3, &["seed", "a", "b", "c", "d"]);
    assert_eq!(history.len(), 3);
    assert_eq!(history.to_vec(), vec!["b", "c", "d"]);
    assert_eq!(history.get(0), Ok("b"));
  }

  #[test]
  fn default_history_behaves_as_empty() {
    let mut history = History::default();
    assert_eq!(history.len(), 0);
    assert!(history.is_empty());
    assert!(history.previous().is_err());
    assert!(history.get(0).is_err());
    assert_eq!(history.last(), None);

    // Capacity 0 retains nothing.
    history.add("dropped");
    assert!(history.is_empty());
  }

  #[test]
  fn truncate_drops_the_future() {
    let mut history = history_of(10, &["a", "b", "c", "d"]);
    history.truncate(2);
    assert_eq!(history.to_vec(), vec!["a", "b"]);
    history.add("e");
    assert_eq!(history.to_vec(), vec!["a", "b", "e"]);

    // Truncating past the end is a no-op.
    history.truncate(10);
    assert_eq!(history.len(), 3);
  }

  #[test]
  fn predicate_search() {
    let history = history_of(10, &["x", "keep", "y", "keep", "z"]);
    assert_eq!(history.position(|s| s == "keep"), Some(1));
    assert_eq!(history.rposition(|s| s == "keep"), Some(3));
    assert_eq!(history.position(|s| s.is_empty()), None);
  }

  #[test]
  fn formatting() {
    let history = history_of(10, &["Hello World", "helloWorld", "hello-world"]);
    assert_eq!(
      history.format(true),
      "1: Hello World\n2: helloWorld\n3: hello-world"
    );
    assert_eq!(
      history.format(false),
      "Hello World, helloWorld, hello-world"
    );
    assert_eq!(history.to_string(), history.format(false));
    assert_eq!(History::default().format(true), "");
  }

  #[test]
  fn iterates_by_reference() {
    let history = history_of(10, &["a", "b"]);
    let collected: Vec<&String> = (&history).into_iter().collect();
    assert_eq!(collected, vec!["a", "b"]);
    assert_eq!(history.iter().rev().next(), Some("b"));
  }

  quickcheck::quickcheck! {
    fn never_exceeds_capacity(capacity: u8, snapshots: Vec<String>) -> bool {
      let capacity = capacity as usize;
      let mut history = History::new(capacity);
      for snapshot in &snapshots {
        history.add(snapshot.clone());
      }
      let expected: Vec<String> = snapshots
        .iter()
        .skip(snapshots.len().saturating_sub(capacity))
        .cloned()
        .collect();
      history.len() <= capacity && history.to_vec() == expected
    }
  }
}
