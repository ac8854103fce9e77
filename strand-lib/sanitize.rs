//! Sanitizing leaves: whitespace folding, control stripping, character-class
//! filtering, slugs and line ending normalization.

use strand_core::{
  chars::{
    char_is_blank,
    char_is_line_ending,
  },
  class::CharClassRegistry,
  line_ending::{
    LineEnding,
    normalize_line_endings as rewrite_line_endings,
  },
};

use crate::error::{
  Error,
  Result,
};

/// Folds every run of whitespace, line endings included, into one space and
/// trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
  let mut res = String::with_capacity(text.len());
  let mut pending_space = false;
  for c in text.chars() {
    if char_is_blank(c) {
      pending_space = !res.is_empty();
      continue;
    }
    if pending_space {
      res.push(' ');
      pending_space = false;
    }
    res.push(c);
  }
  res
}

/// Removes control characters, keeping tabs and line endings.
pub fn strip_control(text: &str) -> String {
  text
    .chars()
    .filter(|&c| !c.is_control() || c == '\t' || char_is_line_ending(c))
    .collect()
}

/// Removes every char belonging to the class `name`.
///
/// # Errors
/// [`Error::InvalidFormatInput`] when `registry` has no such class.
pub fn remove_chars(text: &str, name: &str, registry: &CharClassRegistry) -> Result<String> {
  let predicate = lookup(name, registry)?;
  Ok(text.chars().filter(|&c| !predicate(c)).collect())
}

/// Keeps only the chars belonging to the class `name`.
///
/// # Errors
/// [`Error::InvalidFormatInput`] when `registry` has no such class.
pub fn keep_chars(text: &str, name: &str, registry: &CharClassRegistry) -> Result<String> {
  let predicate = lookup(name, registry)?;
  Ok(text.chars().filter(|&c| predicate(c)).collect())
}

fn lookup(name: &str, registry: &CharClassRegistry) -> Result<strand_core::class::CharPredicate> {
  registry
    .get(name)
    .ok_or_else(|| Error::format_input("character class", name))
}

/// Lower-case, ASCII-dash separated, suitable for URLs and file names.
///
/// Alphanumeric chars are kept (lower-cased), every other run becomes a
/// single `-`, and no dash leads or trails.
pub fn slugify(text: &str) -> String {
  let mut res = String::with_capacity(text.len());
  let mut pending_dash = false;
  for c in text.chars() {
    if !c.is_alphanumeric() {
      pending_dash = !res.is_empty();
      continue;
    }
    if pending_dash {
      res.push('-');
      pending_dash = false;
    }
    res.extend(c.to_lowercase());
  }
  res
}

/// Rewrites all line endings to the one called `name` (`lf`, `crlf`, `cr` or
/// `native`).
///
/// # Errors
/// [`Error::InvalidFormatInput`] for an unknown line ending name.
pub fn normalize_line_endings(text: &str, name: &str) -> Result<String> {
  let target =
    LineEnding::from_name(name).ok_or_else(|| Error::format_input("line ending", name))?;
  Ok(rewrite_line_endings(text, target))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn collapses_whitespace() {
    assert_eq!(collapse_whitespace("  a \t\n b\u{00A0}\u{00A0}c  "), "a b c");
    assert_eq!(collapse_whitespace("   "), "");
    assert_eq!(collapse_whitespace("single"), "single");
  }

  #[test]
  fn strips_control() {
    assert_eq!(strip_control("a\u{0007}b\u{001B}[0m"), "ab[0m");
    assert_eq!(strip_control("keep\ttabs\nand lines"), "keep\ttabs\nand lines");
  }

  #[test]
  fn filters_by_class() {
    let registry = CharClassRegistry::default();
    assert_eq!(
      remove_chars("Hello, World!", "punctuation", &registry),
      Ok("Hello World".to_string())
    );
    assert_eq!(
      keep_chars("a1b2c3", "numeric", &registry),
      Ok("123".to_string())
    );
    assert_eq!(
      remove_chars("abc", "nope", &registry),
      Err(Error::InvalidFormatInput {
        kind:  "character class",
        input: "nope".to_string(),
      })
    );
  }

  #[test]
  fn filters_by_custom_class() {
    let registry = CharClassRegistry::default();
    registry.register("vowel", |c| "aeiouAEIOU".contains(c));
    assert_eq!(
      remove_chars("Programming", "vowel", &registry),
      Ok("Prgrmmng".to_string())
    );
  }

  #[test]
  fn slugifies() {
    assert_eq!(slugify("Hello, World!"), "hello-world");
    assert_eq!(slugify("  --Rust 2024 Edition--  "), "rust-2024-edition");
    assert_eq!(slugify("Ünïcödé"), "ünïcödé");
    assert_eq!(slugify("!!!"), "");
  }

  #[test]
  fn normalizes_line_endings_by_name() {
    assert_eq!(
      normalize_line_endings("a\r\nb", "lf"),
      Ok("a\nb".to_string())
    );
    assert!(matches!(
      normalize_line_endings("a", "mac"),
      Err(Error::InvalidFormatInput {
        kind: "line ending",
        ..
      })
    ));
  }
}
