//! Checks that the kerning of a compiled font matches its source.
//!
//! Every pair of glyphs that is kerned in the source, and that could appear
//! next to each other in a run of text, is shaped with HarfBuzz under each
//! script and language the font supports. The kerning the shaper applies is
//! compared with the value the source specifies.
//!
//! The entry point for one source is [`check_source`]. For a font that is
//! already compiled, build a [`FontContext`] and call [`validate`].

pub mod classify;
pub mod compile;
pub mod context;
mod error;
pub mod isolation;
pub mod itemize;
pub mod kerning;
pub mod langsys;
pub mod language_tags;
pub mod oracle;
pub mod script;
pub mod shape;
pub mod source;
pub mod validate;

#[cfg(test)]
mod test_fonts;

pub use compile::{CompiledFont, FontCompiler, Fontc};
pub use context::FontContext;
pub use error::Error;
pub use isolation::Filler;
pub use kerning::KerningIndex;
pub use oracle::{Mismatch, Oracle};
pub use validate::{check_source, run_batch, validate, Outputs, Summary, ValidateOptions};
