//! Trimming, joining and layout leaves.
//!
//! Lengths are counted in extended grapheme clusters, widths in terminal
//! columns, so combining marks and wide CJK text behave as a reader expects.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub fn trim(text: &str) -> String {
  text.trim().to_owned()
}

pub fn trim_left(text: &str) -> String {
  text.trim_start().to_owned()
}

pub fn trim_right(text: &str) -> String {
  text.trim_end().to_owned()
}

/// Strips every char contained in `set` from both ends.
///
/// `set` is a set of chars, not a substring: `trim_chars("abcba", "ab")` is
/// `"c"`.
pub fn trim_chars(text: &str, set: &str) -> String {
  text.trim_matches(|c: char| set.contains(c)).to_owned()
}

pub fn trim_chars_left(text: &str, set: &str) -> String {
  text.trim_start_matches(|c: char| set.contains(c)).to_owned()
}

pub fn trim_chars_right(text: &str, set: &str) -> String {
  text.trim_end_matches(|c: char| set.contains(c)).to_owned()
}

pub fn append(text: &str, suffix: &str, sep: &str) -> String {
  let mut res = String::with_capacity(text.len() + sep.len() + suffix.len());
  res.push_str(text);
  res.push_str(sep);
  res.push_str(suffix);
  res
}

pub fn prepend(text: &str, prefix: &str, sep: &str) -> String {
  append(prefix, text, sep)
}

/// Replaces every occurrence of `from`. An empty pattern matches nothing.
pub fn replace(text: &str, from: &str, to: &str) -> String {
  if from.is_empty() {
    return text.to_owned();
  }
  text.replace(from, to)
}

pub fn reverse(text: &str) -> String {
  text.graphemes(true).rev().collect()
}

/// Shortens `text` to at most `max` graphemes, ending in `suffix` when
/// anything was cut.
///
/// The suffix counts towards `max`. A suffix longer than `max` is itself cut.
pub fn truncate(text: &str, max: usize, suffix: &str) -> String {
  if text.graphemes(true).count() <= max {
    return text.to_owned();
  }
  let suffix_len = suffix.graphemes(true).count();
  if suffix_len >= max {
    return suffix.graphemes(true).take(max).collect();
  }
  let mut res: String = text.graphemes(true).take(max - suffix_len).collect();
  res.push_str(suffix);
  res
}

/// Left-pads with `fill` until `text` is at least `width` columns wide.
pub fn pad_left(text: &str, width: usize, fill: char) -> String {
  let mut res = padding(text, width, fill);
  res.push_str(text);
  res
}

/// Right-pads with `fill` until `text` is at least `width` columns wide.
pub fn pad_right(text: &str, width: usize, fill: char) -> String {
  let mut res = text.to_owned();
  res.push_str(&padding(text, width, fill));
  res
}

fn padding(text: &str, width: usize, fill: char) -> String {
  let fill_width = fill.to_string().width().max(1);
  let missing = width.saturating_sub(text.width());
  std::iter::repeat_n(fill, missing / fill_width).collect()
}

pub fn repeat(text: &str, count: usize, sep: &str) -> String {
  vec![text; count].join(sep)
}
