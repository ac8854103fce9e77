//! Character-level primitives shared by the `strand` transformation library.
//!
//! This crate knows nothing about pipelines. It classifies characters, keeps
//! the extensible [`class::CharClassRegistry`], and names the line endings the
//! sanitizers normalize to.

pub mod chars;
pub mod class;
pub mod line_ending;
