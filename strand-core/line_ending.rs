//! Line ending detection and normalization.
//!
//! Any of the Unicode line breaks is recognized when reading text, but only
//! the three conventional sequences can be written back.

#[cfg(target_os = "windows")]
pub const NATIVE_LINE_ENDING: LineEnding = LineEnding::Crlf;

#[cfg(not(target_os = "windows"))]
pub const NATIVE_LINE_ENDING: LineEnding = LineEnding::Lf;

/// Single chars treated as a line break on their own. `\r\n` is handled as a
/// pair by the callers.
const BREAK_CHARS: [char; 7] = [
  '\u{000A}', // LineFeed
  '\u{000B}', // VerticalTab
  '\u{000C}', // FormFeed
  '\u{000D}', // CarriageReturn
  '\u{0085}', // NextLine
  '\u{2028}', // LineSeparator
  '\u{2029}', // ParagraphSeparator
];

/// A line ending text can be normalized to.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum LineEnding {
  Lf,
  Crlf,
  Cr,
}

impl LineEnding {
  pub const ALL: [LineEnding; 3] = [LineEnding::Lf, LineEnding::Crlf, LineEnding::Cr];

  #[inline]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Lf => "\n",
      Self::Crlf => "\r\n",
      Self::Cr => "\r",
    }
  }

  pub const fn name(self) -> &'static str {
    match self {
      Self::Lf => "lf",
      Self::Crlf => "crlf",
      Self::Cr => "cr",
    }
  }

  /// Parses a user-facing name: `lf`, `crlf`, `cr` or `native`, plus the
  /// aliases `unix`, `dos` and `windows`. Matching ignores ASCII case.
  pub fn from_name(name: &str) -> Option<LineEnding> {
    match name.trim().to_ascii_lowercase().as_str() {
      "native" => Some(NATIVE_LINE_ENDING),
      "unix" => Some(LineEnding::Lf),
      "dos" | "windows" => Some(LineEnding::Crlf),
      name => Self::ALL.into_iter().find(|ending| ending.name() == name),
    }
  }
}

#[inline]
pub fn char_is_break(ch: char) -> bool {
  BREAK_CHARS.contains(&ch)
}

/// True when `s` is exactly one line ending.
pub fn str_is_line_ending(s: &str) -> bool {
  if s == LineEnding::Crlf.as_str() {
    return true;
  }
  let mut chars = s.chars();
  matches!((chars.next(), chars.next()), (Some(ch), None) if char_is_break(ch))
}

/// Rewrites every line ending in `text` to `target`.
///
/// A CRLF pair counts as a single line ending.
pub fn normalize_line_endings(text: &str, target: LineEnding) -> String {
  let mut out = String::with_capacity(text.len());
  let mut chars = text.chars().peekable();
  while let Some(ch) = chars.next() {
    if ch == '\r' && chars.peek() == Some(&'\n') {
      chars.next();
      out.push_str(target.as_str());
    } else if char_is_break(ch) {
      out.push_str(target.as_str());
    } else {
      out.push(ch);
    }
  }
  out
}
