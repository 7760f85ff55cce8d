//! # katexify
//!
//! Rewrites LaTeX documents into the subset of LaTeX that the KaTeX
//! rendering engine understands.
//!
//! KaTeX supports only part of full LaTeX. Documents authored for a real
//! TeX toolchain routinely carry page formatting, counters, references and
//! environments that KaTeX rejects outright. This crate sanitizes such
//! documents with an ordered table of regex rewrite rules: unsupported
//! commands are deleted, renamed to a supported equivalent, or substituted
//! with an approximation. Anything no rule knows about passes through
//! unchanged.
//!
//! The conversion is a pure string transformation. There is no LaTeX
//! parser here, no brace balancing and no rendering.

pub mod katex;

pub use katex::convert;
