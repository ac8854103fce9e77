//! Case conversion leaves.
//!
//! Converters come in two flavors, matching the rest of the crate: one
//! returning a fresh [`Tendril`] and a `_with` variant appending into a
//! caller-provided buffer.
//!
//! Word-based conversions (camel, pascal, snake, kebab) split the input at
//! every run of non-alphanumeric chars and at case humps. A hump is an
//! uppercase char following a lowercase char or digit, or the last capital of
//! an acronym that is followed by a lowercase char, so `getHTTPResponse`
//! splits into `get`, `HTTP` and `Response`.
//!
//! Char-based conversions (title, upper, lower, capitalize) keep every
//! separator exactly where it was.

use std::str::FromStr;

use smallvec::SmallVec;

use crate::{
  Tendril,
  error::Error,
};

type Words = SmallVec<[Tendril; 8]>;

/// Splits `text` into words, see the module docs for where boundaries fall.
pub fn split_words(text: impl Iterator<Item = char>) -> Words {
  let mut words = Words::new();
  let mut word = Tendril::new();
  let mut prev: Option<char> = None;
  let mut chars = text.peekable();

  while let Some(c) = chars.next() {
    if !c.is_alphanumeric() {
      if !word.is_empty() {
        words.push(std::mem::take(&mut word));
      }
      prev = None;
      continue;
    }
    let hump = prev.is_some_and(|p| {
      c.is_uppercase()
        && (p.is_lowercase()
          || p.is_numeric()
          || (p.is_uppercase() && chars.peek().is_some_and(|next| next.is_lowercase())))
    });
    if hump {
      words.push(std::mem::take(&mut word));
    }
    word.push(c);
    prev = Some(c);
  }
  if !word.is_empty() {
    words.push(word);
  }
  words
}

fn push_capitalized_word(word: &str, buf: &mut Tendril) {
  let mut chars = word.chars();
  if let Some(first) = chars.next() {
    buf.extend(first.to_uppercase());
  }
  chars.for_each(|c| buf.extend(c.to_lowercase()));
}

fn push_separated(text: impl Iterator<Item = char>, buf: &mut Tendril, sep: char) {
  for (i, word) in split_words(text).iter().enumerate() {
    if i > 0 {
      buf.push(sep);
    }
    buf.extend(word.chars().flat_map(char::to_lowercase));
  }
}

pub fn to_pascal_case(text: impl Iterator<Item = char>) -> Tendril {
  let mut res = Tendril::new();
  to_pascal_case_with(text, &mut res);
  res
}

pub fn to_pascal_case_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  for word in split_words(text) {
    push_capitalized_word(&word, buf);
  }
}

pub fn to_camel_case(text: impl Iterator<Item = char>) -> Tendril {
  let mut res = Tendril::new();
  to_camel_case_with(text, &mut res);
  res
}

pub fn to_camel_case_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  for (i, word) in split_words(text).iter().enumerate() {
    if i == 0 {
      buf.extend(word.chars().flat_map(char::to_lowercase));
    } else {
      push_capitalized_word(word, buf);
    }
  }
}

pub fn to_snake_case(text: impl Iterator<Item = char>) -> Tendril {
  let mut res = Tendril::new();
  to_snake_case_with(text, &mut res);
  res
}

pub fn to_snake_case_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  push_separated(text, buf, '_');
}

pub fn to_kebab_case(text: impl Iterator<Item = char>) -> Tendril {
  let mut res = Tendril::new();
  to_kebab_case_with(text, &mut res);
  res
}

pub fn to_kebab_case_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  push_separated(text, buf, '-');
}

pub fn to_title_case(text: impl Iterator<Item = char>) -> Tendril {
  let mut res = Tendril::new();
  to_title_case_with(text, &mut res);
  res
}

/// Upper-cases the first alphanumeric char after every separator and
/// lower-cases the rest.
pub fn to_title_case_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  text.fold(true, |word_start, c| {
    if !c.is_alphanumeric() {
      buf.push(c);
      return true;
    }
    if word_start {
      buf.extend(c.to_uppercase());
    } else {
      buf.extend(c.to_lowercase());
    }
    false
  });
}

pub fn to_upper_case(text: impl Iterator<Item = char>) -> Tendril {
  let mut res = Tendril::new();
  to_upper_case_with(text, &mut res);
  res
}

pub fn to_upper_case_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  buf.extend(text.flat_map(char::to_uppercase));
}

pub fn to_lower_case(text: impl Iterator<Item = char>) -> Tendril {
  let mut res = Tendril::new();
  to_lower_case_with(text, &mut res);
  res
}

pub fn to_lower_case_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  buf.extend(text.flat_map(char::to_lowercase));
}

pub fn capitalize(text: impl Iterator<Item = char>) -> Tendril {
  let mut res = Tendril::new();
  capitalize_with(text, &mut res);
  res
}

/// Upper-cases the first char and leaves everything else alone.
pub fn capitalize_with(mut text: impl Iterator<Item = char>, buf: &mut Tendril) {
  if let Some(first) = text.next() {
    buf.extend(first.to_uppercase());
  }
  buf.extend(text);
}

/// A named case convention, parsed from user input by [`Case::from_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
  Camel,
  Pascal,
  Snake,
  ScreamingSnake,
  Kebab,
  ScreamingKebab,
  Title,
  Upper,
  Lower,
}

impl Case {
  pub const ALL: [Case; 9] = [
    Case::Camel,
    Case::Pascal,
    Case::Snake,
    Case::ScreamingSnake,
    Case::Kebab,
    Case::ScreamingKebab,
    Case::Title,
    Case::Upper,
    Case::Lower,
  ];

  pub const fn name(self) -> &'static str {
    match self {
      Case::Camel => "camel",
      Case::Pascal => "pascal",
      Case::Snake => "snake",
      Case::ScreamingSnake => "screaming_snake",
      Case::Kebab => "kebab",
      Case::ScreamingKebab => "screaming_kebab",
      Case::Title => "title",
      Case::Upper => "upper",
      Case::Lower => "lower",
    }
  }

  pub fn convert(self, text: &str) -> Tendril {
    let mut res = Tendril::new();
    self.convert_with(text, &mut res);
    res
  }

  pub fn convert_with(self, text: &str, buf: &mut Tendril) {
    match self {
      Case::Camel => to_camel_case_with(text.chars(), buf),
      Case::Pascal => to_pascal_case_with(text.chars(), buf),
      Case::Snake => to_snake_case_with(text.chars(), buf),
      Case::Kebab => to_kebab_case_with(text.chars(), buf),
      Case::ScreamingSnake => {
        let snake = to_snake_case(text.chars());
        to_upper_case_with(snake.chars(), buf);
      },
      Case::ScreamingKebab => {
        let kebab = to_kebab_case(text.chars());
        to_upper_case_with(kebab.chars(), buf);
      },
      Case::Title => to_title_case_with(text.chars(), buf),
      Case::Upper => to_upper_case_with(text.chars(), buf),
      Case::Lower => to_lower_case_with(text.chars(), buf),
    }
  }
}

impl FromStr for Case {
  type Err = Error;

  /// Accepts the names from [`Case::name`], ignoring ASCII case and treating
  /// `-` like `_`.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
    Case::ALL
      .into_iter()
      .find(|case| case.name() == normalized)
      .ok_or_else(|| Error::format_input("case", s))
  }
}
