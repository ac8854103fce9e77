//! Named pipeline steps. Each one is a thin, gated wrapper around a leaf
//! function from [`crate::case_convention`], [`crate::text`],
//! [`crate::sanitize`] or [`crate::compare`].

use strand_core::class::CharClassRegistry;

use crate::{
  Pipeline,
  case_convention::{
    self,
    Case,
  },
  compare::{
    self,
    Comparison,
    Score,
  },
  sanitize,
  text,
};

impl Pipeline {
  pub fn to_camel_case(self) -> Self {
    self.apply("to_camel_case", |s| {
      case_convention::to_camel_case(s.chars()).into()
    })
  }

  pub fn to_pascal_case(self) -> Self {
    self.apply("to_pascal_case", |s| {
      case_convention::to_pascal_case(s.chars()).into()
    })
  }

  /// `hello_world`, or `HELLO_WORLD` when `upper` is set.
  pub fn to_snake_case(self, upper: bool) -> Self {
    let case = if upper { Case::ScreamingSnake } else { Case::Snake };
    self.apply("to_snake_case", |s| case.convert(s).into())
  }

  /// `hello-world`, or `HELLO-WORLD` when `upper` is set.
  pub fn to_kebab_case(self, upper: bool) -> Self {
    let case = if upper { Case::ScreamingKebab } else { Case::Kebab };
    self.apply("to_kebab_case", |s| case.convert(s).into())
  }

  pub fn to_title_case(self) -> Self {
    self.apply("to_title_case", |s| {
      case_convention::to_title_case(s.chars()).into()
    })
  }

  pub fn to_upper_case(self) -> Self {
    self.apply("to_upper_case", |s| {
      case_convention::to_upper_case(s.chars()).into()
    })
  }

  pub fn to_lower_case(self) -> Self {
    self.apply("to_lower_case", |s| {
      case_convention::to_lower_case(s.chars()).into()
    })
  }

  pub fn capitalize(self) -> Self {
    self.apply("capitalize", |s| case_convention::capitalize(s.chars()).into())
  }

  /// Converts to the case called `name`, see [`Case::name`]. An unknown name
  /// is a non-fatal [`crate::Error::InvalidFormatInput`].
  pub fn to_case(self, name: &str) -> Self {
    self.try_apply("to_case", |s| {
      let case: Case = name.parse()?;
      Ok(case.convert(s).into())
    })
  }

  pub fn trim(self) -> Self {
    self.apply("trim", text::trim)
  }

  pub fn trim_left(self) -> Self {
    self.apply("trim_left", text::trim_left)
  }

  pub fn trim_right(self) -> Self {
    self.apply("trim_right", text::trim_right)
  }

  pub fn trim_chars(self, set: &str) -> Self {
    self.apply("trim_chars", |s| text::trim_chars(s, set))
  }

  pub fn trim_chars_left(self, set: &str) -> Self {
    self.apply("trim_chars_left", |s| text::trim_chars_left(s, set))
  }

  pub fn trim_chars_right(self, set: &str) -> Self {
    self.apply("trim_chars_right", |s| text::trim_chars_right(s, set))
  }

  /// Appends `sep` followed by `suffix`.
  pub fn append(self, suffix: &str, sep: &str) -> Self {
    self.apply("append", |s| text::append(s, suffix, sep))
  }

  /// Prepends `prefix` followed by `sep`.
  pub fn prepend(self, prefix: &str, sep: &str) -> Self {
    self.apply("prepend", |s| text::prepend(s, prefix, sep))
  }

  pub fn replace(self, from: &str, to: &str) -> Self {
    self.apply("replace", |s| text::replace(s, from, to))
  }

  pub fn reverse(self) -> Self {
    self.apply("reverse", text::reverse)
  }

  pub fn truncate(self, max_graphemes: usize, suffix: &str) -> Self {
    self.apply("truncate", |s| text::truncate(s, max_graphemes, suffix))
  }

  pub fn pad_left(self, width: usize, fill: char) -> Self {
    self.apply("pad_left", |s| text::pad_left(s, width, fill))
  }

  pub fn pad_right(self, width: usize, fill: char) -> Self {
    self.apply("pad_right", |s| text::pad_right(s, width, fill))
  }

  pub fn repeat(self, count: usize, sep: &str) -> Self {
    self.apply("repeat", |s| text::repeat(s, count, sep))
  }

  pub fn collapse_whitespace(self) -> Self {
    self.apply("collapse_whitespace", sanitize::collapse_whitespace)
  }

  pub fn strip_control(self) -> Self {
    self.apply("strip_control", sanitize::strip_control)
  }

  pub fn slugify(self) -> Self {
    self.apply("slugify", sanitize::slugify)
  }

  /// Drops every char of the class `name` from `registry`. An unknown class
  /// is a non-fatal [`crate::Error::InvalidFormatInput`].
  pub fn remove_chars(self, name: &str, registry: &CharClassRegistry) -> Self {
    self.try_apply("remove_chars", |s| sanitize::remove_chars(s, name, registry))
  }

  /// Keeps only the chars of the class `name` from `registry`. An unknown
  /// class is a non-fatal [`crate::Error::InvalidFormatInput`].
  pub fn keep_chars(self, name: &str, registry: &CharClassRegistry) -> Self {
    self.try_apply("keep_chars", |s| sanitize::keep_chars(s, name, registry))
  }

  pub fn normalize_line_endings(self, name: &str) -> Self {
    self.try_apply("normalize_line_endings", |s| {
      sanitize::normalize_line_endings(s, name)
    })
  }

  /// Records the Hamming distance to `other`. Inputs of different length are
  /// a non-fatal [`crate::Error::InvalidComparisonInput`].
  pub fn compare_hamming(self, other: &str) -> Self {
    self.inspect("compare_hamming", |s, results| {
      let distance = compare::hamming_distance(s, other)?;
      results.record(Comparison::Hamming, other, Score::Distance(distance));
      Ok(())
    })
  }

  pub fn compare_levenshtein(self, other: &str) -> Self {
    self.inspect("compare_levenshtein", |s, results| {
      let distance = compare::levenshtein_distance(s, other);
      results.record(Comparison::Levenshtein, other, Score::Distance(distance));
      Ok(())
    })
  }

  pub fn compare_similarity(self, other: &str) -> Self {
    self.inspect("compare_similarity", |s, results| {
      let ratio = compare::similarity(s, other);
      results.record(Comparison::Similarity, other, Score::Ratio(ratio));
      Ok(())
    })
  }

  pub fn compare_jaro_winkler(self, other: &str) -> Self {
    self.inspect("compare_jaro_winkler", |s, results| {
      let ratio = compare::jaro_winkler(s, other);
      results.record(Comparison::JaroWinkler, other, Score::Ratio(ratio));
      Ok(())
    })
  }
}

#[cfg(test)]
mod tests {
  use crate::{
    Error,
    Severity,
  };

  use super::*;

  #[test]
  fn casing_steps() {
    assert_eq!(Pipeline::new("hello world").to_pascal_case().as_str(), "HelloWorld");
    assert_eq!(Pipeline::new("Hello World").to_snake_case(true).as_str(), "HELLO_WORLD");
    assert_eq!(Pipeline::new("hello").capitalize().as_str(), "Hello");
    assert_eq!(Pipeline::new("MiXeD").to_lower_case().as_str(), "mixed");
    assert_eq!(Pipeline::new("MiXeD").to_upper_case().as_str(), "MIXED");
  }

  #[test]
  fn to_case_rejects_unknown_names() {
    let pipeline = Pipeline::new("hello world").to_case("sponge").to_case("kebab");
    assert_eq!(pipeline.as_str(), "hello-world");
    assert_eq!(pipeline.severity(), Some(Severity::NonFatal));
    assert_eq!(
      pipeline.error(),
      Some(&Error::InvalidFormatInput {
        kind:  "case",
        input: "sponge".into(),
      })
    );
  }

  #[test]
  fn text_steps() {
    let (value, error) = Pipeline::new("  report  ")
      .trim()
      .prepend("2024", "-")
      .append("final", "_")
      .replace("-", " ")
      .truncate(12, "~")
      .pad_right(14, '.')
      .result();
    assert_eq!(value, "2024 report~..");
    assert!(error.is_none());

    assert_eq!(Pipeline::new("ab").repeat(2, "|").reverse().as_str(), "ba|ba");
    assert_eq!(Pipeline::new("xxaxx").trim_chars_left("x").as_str(), "axx");
    assert_eq!(Pipeline::new("xxaxx").trim_chars("x").as_str(), "a");
    assert_eq!(Pipeline::new("  a  ").trim_left().trim_right().as_str(), "a");
    assert_eq!(Pipeline::new("5").pad_left(3, '0').as_str(), "005");
  }

  #[test]
  fn sanitize_steps() {
    let registry = CharClassRegistry::default();
    let pipeline = Pipeline::new(" Hello,\r\n\u{0007}World! ")
      .strip_control()
      .normalize_line_endings("lf")
      .remove_chars("punctuation", &registry)
      .collapse_whitespace()
      .slugify();
    assert_eq!(pipeline.as_str(), "hello-world");
    assert!(pipeline.error().is_none());

    let pipeline = Pipeline::new("a1b2")
      .keep_chars("digits", &registry)
      .keep_chars("numeric", &registry);
    assert_eq!(pipeline.as_str(), "12");
    assert!(matches!(
      pipeline.error(),
      Some(Error::InvalidFormatInput {
        kind: "character class",
        ..
      })
    ));
  }

  #[test]
  fn comparisons_do_not_touch_value_or_history() {
    let pipeline = Pipeline::new("kitten")
      .with_history(4)
      .compare_levenshtein("sitting")
      .compare_similarity("kitten")
      .compare_jaro_winkler("kitten")
      .compare_hamming("mitten");
    assert_eq!(pipeline.as_str(), "kitten");
    assert_eq!(pipeline.history().map(|h| h.len()), Some(1));

    let results = pipeline.comparisons().unwrap();
    assert_eq!(results.distance(Comparison::Levenshtein), Some(3));
    assert_eq!(results.distance(Comparison::Hamming), Some(1));
    assert_eq!(results.ratio(Comparison::Similarity), Some(1.0));
    assert_eq!(results.ratio(Comparison::JaroWinkler), Some(1.0));
  }

  #[test]
  fn unequal_hamming_is_non_fatal() {
    let pipeline = Pipeline::new("abc")
      .compare_hamming("abcd")
      .to_upper_case();
    assert_eq!(pipeline.as_str(), "ABC");
    assert_eq!(
      pipeline.error(),
      Some(&Error::InvalidComparisonInput { left: 3, right: 4 })
    );
    assert_eq!(pipeline.severity(), Some(Severity::NonFatal));
    assert!(pipeline.comparisons().is_some_and(|c| c.is_empty()));
  }

  #[test]
  fn halted_pipeline_skips_named_steps() {
    let pipeline = Pipeline::new("abc")
      .with_history(4)
      .revert_to_index(3)
      .to_upper_case()
      .append("x", "-")
      .compare_levenshtein("abc");
    assert_eq!(pipeline.as_str(), "");
    assert!(pipeline.comparisons().is_none());
    assert_eq!(pipeline.history().map(|h| h.len()), Some(2));
  }
}
