//! Request middleware.
//!
//! Cross-cutting request lifecycle concerns that sit in front of every handler.

pub mod trace;

pub use trace::Trace;
