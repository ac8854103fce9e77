//! End-to-end chains exercising the public surface only.

use strand_lib::{
  Error,
  History,
  Pipeline,
  Severity,
};

fn snapshots(pipeline: &Pipeline) -> Vec<String> {
  pipeline.history().map(History::to_vec).unwrap_or_default()
}

fn hello_chain() -> Pipeline {
  Pipeline::new("Hello World")
    .with_history(10)
    .to_camel_case()
    .to_kebab_case(true)
    .to_kebab_case(false)
    .to_title_case()
    .trim_chars_right(" World")
    .append("John", " ")
}

#[test]
fn chain_records_every_step() {
  let pipeline = hello_chain();
  assert_eq!(pipeline.as_str(), "Hello- John");
  assert_eq!(snapshots(&pipeline), vec![
    "Hello World",
    "helloWorld",
    "HELLO-WORLD",
    "hello-world",
    "Hello-World",
    "Hello-",
    "Hello- John",
  ]);
}

#[test]
fn revert_to_previous_walks_back_to_seed_then_fails() {
  let expected = [
    "Hello-",
    "Hello-World",
    "hello-world",
    "HELLO-WORLD",
    "helloWorld",
    "Hello World",
  ];

  let mut pipeline = hello_chain();
  for (step, value) in expected.iter().enumerate() {
    pipeline = pipeline.revert_to_previous();
    assert_eq!(pipeline.as_str(), *value, "after {} reverts", step + 1);
    assert!(pipeline.error().is_none());
    assert_eq!(
      pipeline.history().map(History::len),
      Some(expected.len() - step)
    );
  }

  let pipeline = pipeline.revert_to_previous();
  assert_eq!(pipeline.as_str(), "");
  assert_eq!(pipeline.severity(), Some(Severity::Fatal));
  assert_eq!(
    pipeline.error(),
    Some(&Error::InvalidHistoryIndex { index: None, len: 1 })
  );
}

#[test]
fn rewind_and_branch() {
  let pipeline = hello_chain().revert_to_index(2);
  assert_eq!(pipeline.as_str(), "HELLO-WORLD");
  assert_eq!(pipeline.history().map(History::len), Some(3));

  let pipeline = pipeline.to_snake_case(false);
  assert_eq!(pipeline.as_str(), "hello_world");
  assert_eq!(snapshots(&pipeline), vec![
    "Hello World",
    "helloWorld",
    "HELLO-WORLD",
    "hello_world",
  ]);
}

#[test]
fn predicate_revert_finds_latest_match() {
  let pipeline =
    hello_chain().revert_with(|history| history.rposition(|s| s.contains('-') && s.ends_with('d')));
  assert_eq!(pipeline.as_str(), "Hello-World");
  assert_eq!(pipeline.history().map(History::len), Some(5));
}

#[test]
fn fatal_then_recover_then_finish() {
  let pipeline = hello_chain()
    .revert_to_index(42)
    .to_upper_case()
    .append("ignored", "");
  assert_eq!(pipeline.as_str(), "");
  assert!(!pipeline.should_continue());

  let (value, error) = pipeline.revert_to_original().to_snake_case(true).result();
  assert_eq!(value, "HELLO_WORLD");
  assert!(matches!(error, Some(Error::InvalidHistoryIndex { .. })));
}

#[test]
fn history_report() {
  let pipeline = Pipeline::new("a b").with_history(3).slugify().to_upper_case();
  let history = pipeline.history().unwrap();
  assert_eq!(history.format(true), "1: a b\n2: a-b\n3: A-B");
  assert_eq!(history.format(false), "a b, a-b, A-B");
}
