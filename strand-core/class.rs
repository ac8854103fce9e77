//! Named character classes.
//!
//! A [`CharClassRegistry`] maps a class name such as `"punctuation"` to a
//! predicate over `char`. Sanitizers look classes up by name, which lets
//! callers add their own classes at runtime without touching the library.
//!
//! The registry is an ordinary owned value. Share it by reference (or behind
//! an `Arc`) with whatever needs it; registration takes `&self` and is
//! serialized by a single lock.

use std::{
  collections::HashMap,
  fmt,
  sync::Arc,
};

use parking_lot::RwLock;

use crate::chars::{
  char_is_line_ending,
  char_is_punctuation,
  char_is_whitespace,
  char_is_word,
};

pub type CharPredicate = Arc<dyn Fn(char) -> bool + Send + Sync>;

/// Classes every [`CharClassRegistry::default`] starts with.
pub const BUILTIN_CLASSES: [(&str, fn(char) -> bool); 10] = [
  ("whitespace", char_is_whitespace),
  ("punctuation", char_is_punctuation),
  ("word", char_is_word),
  ("line_ending", char_is_line_ending),
  ("alphabetic", char::is_alphabetic),
  ("numeric", char::is_numeric),
  ("alphanumeric", char::is_alphanumeric),
  ("control", char::is_control),
  ("uppercase", char::is_uppercase),
  ("lowercase", char::is_lowercase),
];

pub struct CharClassRegistry {
  classes: RwLock<HashMap<String, CharPredicate>>,
}

impl Default for CharClassRegistry {
  fn default() -> Self {
    let registry = Self::empty();
    for (name, predicate) in BUILTIN_CLASSES {
      registry.register(name, predicate);
    }
    registry
  }
}

impl fmt::Debug for CharClassRegistry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CharClassRegistry")
      .field("classes", &self.names())
      .finish()
  }
}

impl CharClassRegistry {
  /// A registry with no classes at all.
  pub fn empty() -> Self {
    Self {
      classes: RwLock::new(HashMap::new()),
    }
  }

  /// Registers `predicate` under `name`, returning the predicate it replaced.
  pub fn register<F>(&self, name: impl Into<String>, predicate: F) -> Option<CharPredicate>
  where
    F: Fn(char) -> bool + Send + Sync + 'static,
  {
    self
      .classes
      .write()
      .insert(name.into(), Arc::new(predicate))
  }

  pub fn unregister(&self, name: &str) -> Option<CharPredicate> {
    self.classes.write().remove(name)
  }

  /// Looks up a class. The returned handle stays valid even if the class is
  /// replaced or removed afterwards.
  pub fn get(&self, name: &str) -> Option<CharPredicate> {
    self.classes.read().get(name).cloned()
  }

  pub fn contains(&self, name: &str) -> bool {
    self.classes.read().contains_key(name)
  }

  /// Returns `None` when no class called `name` exists.
  pub fn matches(&self, name: &str, ch: char) -> Option<bool> {
    self.get(name).map(|predicate| predicate(ch))
  }

  /// Registered class names in sorted order.
  pub fn names(&self) -> Vec<String> {
    let mut names: Vec<_> = self.classes.read().keys().cloned().collect();
    names.sort_unstable();
    names
  }

  pub fn len(&self) -> usize {
    self.classes.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.classes.read().is_empty()
  }
}
