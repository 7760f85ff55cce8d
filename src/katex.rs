//! LaTeX → KaTeX conversion.
//!
//! The conversion pipeline is deliberately simple: an ordered table of
//! (pattern, replacement) rules, each applied once as a global
//! find-and-replace pass over the working string. Later rules observe the
//! output of earlier rules, which lets one rule rename an environment
//! alias and a later rule pick up the canonical form.
//!
//! Grammar is data, not code: new rules are appended to
//! [`table::RULES`](table) without touching the engine.

pub mod engine;
pub mod table;
pub mod validate;

pub use engine::convert;
pub use table::{Rule, RULES};
