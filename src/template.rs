//! Template expansion
//!
//! Provides:
//! - Line classification (literal text or directive)
//! - Expansion of a template into its generated file, written only on change

pub mod expander;
pub mod line;

pub use expander::Expander;
