//! String similarity.
//!
//! The free functions are pure comparators. [`ComparisonManager`] is where a
//! [`crate::Pipeline`] keeps the latest result of each kind of comparison it
//! ran, since comparisons never change the pipeline's value.

use std::collections::HashMap;

use crate::error::{
  Error,
  Result,
};

/// Number of positions at which the chars differ.
///
/// # Errors
/// [`Error::InvalidComparisonInput`] when the inputs differ in char length.
pub fn hamming_distance(a: &str, b: &str) -> Result<usize> {
  let (left, right) = (a.chars().count(), b.chars().count());
  if left != right {
    return Err(Error::InvalidComparisonInput { left, right });
  }
  Ok(a.chars().zip(b.chars()).filter(|(x, y)| x != y).count())
}

/// Minimum number of single-char insertions, deletions and substitutions
/// turning `a` into `b`.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
  let b: Vec<char> = b.chars().collect();
  let mut prev: Vec<usize> = (0..=b.len()).collect();
  let mut curr = vec![0; b.len() + 1];

  for (i, ca) in a.chars().enumerate() {
    curr[0] = i + 1;
    for (j, &cb) in b.iter().enumerate() {
      let substitution = prev[j] + usize::from(ca != cb);
      curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
    }
    std::mem::swap(&mut prev, &mut curr);
  }
  prev[b.len()]
}

/// Levenshtein distance normalized into `0.0..=1.0`, where `1.0` means equal.
pub fn similarity(a: &str, b: &str) -> f64 {
  let longest = a.chars().count().max(b.chars().count());
  if longest == 0 {
    return 1.0;
  }
  1.0 - levenshtein_distance(a, b) as f64 / longest as f64
}

/// Jaro similarity in `0.0..=1.0`.
pub fn jaro(a: &str, b: &str) -> f64 {
  let a: Vec<char> = a.chars().collect();
  let b: Vec<char> = b.chars().collect();
  if a.is_empty() && b.is_empty() {
    return 1.0;
  }
  if a.is_empty() || b.is_empty() {
    return 0.0;
  }

  let window = (a.len().max(b.len()) / 2).saturating_sub(1);
  let mut a_matched = vec![false; a.len()];
  let mut b_matched = vec![false; b.len()];
  let mut matches = 0usize;

  for (i, &ca) in a.iter().enumerate() {
    let lo = i.saturating_sub(window);
    let hi = (i + window + 1).min(b.len());
    for j in lo..hi {
      if !b_matched[j] && b[j] == ca {
        a_matched[i] = true;
        b_matched[j] = true;
        matches += 1;
        break;
      }
    }
  }
  if matches == 0 {
    return 0.0;
  }

  let a_seq = a.iter().zip(&a_matched).filter(|(_, m)| **m).map(|(c, _)| c);
  let b_seq = b.iter().zip(&b_matched).filter(|(_, m)| **m).map(|(c, _)| c);
  let half_transpositions = a_seq.zip(b_seq).filter(|(x, y)| x != y).count();

  let m = matches as f64;
  let t = half_transpositions as f64 / 2.0;
  (m / a.len() as f64 + m / b.len() as f64 + (m - t) / m) / 3.0
}

/// Jaro similarity boosted by the length of the common prefix (up to four
/// chars), with the usual scaling factor of `0.1`.
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
  const PREFIX_SCALE: f64 = 0.1;
  const MAX_PREFIX: usize = 4;

  let sim = jaro(a, b);
  let prefix = a
    .chars()
    .zip(b.chars())
    .take(MAX_PREFIX)
    .take_while(|(x, y)| x == y)
    .count();
  sim + prefix as f64 * PREFIX_SCALE * (1.0 - sim)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
  Hamming,
  Levenshtein,
  Similarity,
  JaroWinkler,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Score {
  Distance(usize),
  Ratio(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
  /// The string the pipeline value was compared against.
  pub other: String,
  pub score: Score,
}

/// Latest result per [`Comparison`] kind. Running the same kind again
/// overwrites the previous result.
#[derive(Debug, Clone, Default)]
pub struct ComparisonManager {
  results: HashMap<Comparison, ComparisonResult>,
}

impl ComparisonManager {
  pub fn record(&mut self, kind: Comparison, other: &str, score: Score) {
    self.results.insert(kind, ComparisonResult {
      other: other.to_owned(),
      score,
    });
  }

  pub fn get(&self, kind: Comparison) -> Option<&ComparisonResult> {
    self.results.get(&kind)
  }

  pub fn distance(&self, kind: Comparison) -> Option<usize> {
    match self.get(kind)?.score {
      Score::Distance(distance) => Some(distance),
      Score::Ratio(_) => None,
    }
  }

  pub fn ratio(&self, kind: Comparison) -> Option<f64> {
    match self.get(kind)?.score {
      Score::Ratio(ratio) => Some(ratio),
      Score::Distance(_) => None,
    }
  }

  pub fn len(&self) -> usize {
    self.results.len()
  }

  pub fn is_empty(&self) -> bool {
    self.results.is_empty()
  }
}
