//! A chainable string transformation pipeline with bounded undo.
//!
//! ```
//! use strand_lib::Pipeline;
//!
//! let (value, error) = Pipeline::new("Hello World")
//!   .with_history(10)
//!   .to_snake_case(false)
//!   .append("v2", "_")
//!   .result();
//! assert_eq!(value, "hello_world_v2");
//! assert!(error.is_none());
//! ```

use smartstring::{LazyCompact, SmartString};

pub mod case_convention;
pub mod compare;
pub mod config;
pub mod error;
pub mod history;
mod ops;
pub mod pipeline;
pub mod sanitize;
pub mod text;

pub use error::{
  Error,
  Fault,
  Result,
  Severity,
};
pub use history::History;
pub use pipeline::Pipeline;

pub type Tendril = SmartString<LazyCompact>;
