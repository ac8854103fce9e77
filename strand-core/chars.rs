use crate::line_ending::char_is_break;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CharCategory {
  Whitespace,
  Eol,
  Word,
  Punctuation,
  Control,
  Unknown,
}

pub fn categorize_char(ch: char) -> CharCategory {
  match ch {
    c if char_is_line_ending(c) => CharCategory::Eol,
    c if char_is_whitespace(c) => CharCategory::Whitespace,
    c if char_is_word(c) => CharCategory::Word,
    c if char_is_punctuation(c) => CharCategory::Punctuation,
    c if c.is_control() => CharCategory::Control,
    _ => CharCategory::Unknown,
  }
}

#[inline]
pub fn char_is_line_ending(ch: char) -> bool {
  char_is_break(ch)
}

/// Horizontal whitespace, including the no-break and zero-width spaces that
/// [`char::is_whitespace`] does not report.
#[inline]
pub fn char_is_whitespace(ch: char) -> bool {
  match ch {
      '\u{0009}' | // Character Tabulation
      '\u{0020}' | // Space
      '\u{00A0}' | // No-break Space
      '\u{180E}' | // Mongolian Vowel Separator
      '\u{202F}' | // Narrow No-break Space
      '\u{205F}' | // Medium Mathematical Space
      '\u{3000}' | // Ideographic Space
      '\u{FEFF}'   // Zero Width No-break Space
      => true,

      // En Quad through Zero Width Space.
      ch if ('\u{2000}' ..= '\u{200B}').contains(&ch) => true,

      _ => false,
    }
}

#[inline]
pub fn char_is_punctuation(ch: char) -> bool {
  use unicode_general_category::{
    GeneralCategory,
    get_general_category,
  };

  matches!(
    get_general_category(ch),
    GeneralCategory::OtherPunctuation
      | GeneralCategory::OpenPunctuation
      | GeneralCategory::ClosePunctuation
      | GeneralCategory::InitialPunctuation
      | GeneralCategory::FinalPunctuation
      | GeneralCategory::ConnectorPunctuation
      | GeneralCategory::DashPunctuation
      | GeneralCategory::MathSymbol
      | GeneralCategory::CurrencySymbol
      | GeneralCategory::ModifierSymbol
  )
}

#[inline]
pub fn char_is_word(ch: char) -> bool {
  ch.is_alphanumeric() || ch == '_'
}

/// Any whitespace a sanitizer should fold into a single space: line endings,
/// the characters accepted by [`char_is_whitespace`], and the remaining
/// Unicode `White_Space` characters.
#[inline]
pub fn char_is_blank(ch: char) -> bool {
  char_is_line_ending(ch) || char_is_whitespace(ch) || ch.is_whitespace()
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn test_categorize() {
    const EOL_TEST_CASE: &str = "\n\u{000B}\u{000C}\u{0085}\u{2028}\u{2029}";
    const WORD_TEST_CASE: &str = "_hello_world_あいうえおー1234567890１２３４５６７８９０";
    const PUNCTUATION_TEST_CASE: &str =
      "!\"#$%&\'()*+,-./:;<=>?@[\\]^`{|}~！＂＃＄％＆＇（）＊＋，．／：；＜＝＞？＠［］＾｀｛｜｝～";
    const WHITESPACE_TEST_CASE: &str = "  　   ";

    for ch in EOL_TEST_CASE.chars() {
      assert_eq!(CharCategory::Eol, categorize_char(ch));
    }

    for ch in WHITESPACE_TEST_CASE.chars() {
      assert_eq!(
        CharCategory::Whitespace,
        categorize_char(ch),
        "Testing '{}', but got `{:?}` instead of `Category::Whitespace`",
        ch,
        categorize_char(ch)
      );
    }

    for ch in WORD_TEST_CASE.chars() {
      assert_eq!(
        CharCategory::Word,
        categorize_char(ch),
        "Testing '{}', but got `{:?}` instead of `Category::Word`",
        ch,
        categorize_char(ch)
      );
    }

    for ch in PUNCTUATION_TEST_CASE.chars() {
      assert_eq!(
        CharCategory::Punctuation,
        categorize_char(ch),
        "Testing '{}', but got `{:?}` instead of `Category::Punctuation`",
        ch,
        categorize_char(ch)
      );
    }
  }

  #[test]
  fn control_chars_are_their_own_category() {
    assert_eq!(categorize_char('\u{0007}'), CharCategory::Control);
    assert_eq!(categorize_char('\u{001B}'), CharCategory::Control);
    // Tab is whitespace before it is a control character.
    assert_eq!(categorize_char('\t'), CharCategory::Whitespace);
  }

  #[test]
  fn blank_covers_line_endings_and_exotic_spaces() {
    assert!(char_is_blank('\n'));
    assert!(char_is_blank('\u{00A0}'));
    assert!(char_is_blank('\u{200B}'));
    assert!(!char_is_blank('a'));
  }
}
