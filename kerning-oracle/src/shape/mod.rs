//! The interface to a text shaping engine.

mod harfbuzz;

use std::sync::Arc;

use skrifa::{GlyphId, Tag};

use crate::{error::Error, isolation::IsolationCodec, langsys::Language, script::Direction};

pub use harfbuzz::HarfBuzzShaper;

/// Resolves input codepoints to glyphs in place of a font's character map.
pub trait GlyphResolver: Send + Sync + 'static {
    fn resolve(&self, codepoint: u32) -> GlyphId;

    /// The advance reported for every glyph.
    fn default_advance(&self) -> i32;
}

/// One run of text to shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeRequest<'a> {
    /// The ISO 15924 script code.
    pub script: Tag,
    pub direction: Direction,
    pub language: Language,
    pub codepoints: &'a [u32],
}

/// A glyph in the output of a shaping engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapedGlyph {
    pub glyph_id: GlyphId,
    /// The index of the input codepoint the glyph came from.
    pub cluster: u32,
    pub x_advance: i32,
}

/// A text shaping engine bound to one font.
///
/// Output is in visual order, so right-to-left runs come back reversed.
pub trait ShapingEngine {
    fn shape(&mut self, request: &ShapeRequest) -> Result<Vec<ShapedGlyph>, Error>;
}

/// Creates shaping engines, one per worker thread.
pub trait ShaperFactory: Sync {
    type Engine: ShapingEngine;

    fn create(&self) -> Result<Self::Engine, Error>;
}

/// Creates HarfBuzz shapers that share the same font data.
#[derive(Clone, Debug)]
pub struct HarfBuzzFactory {
    font_data: Arc<[u8]>,
    codec: IsolationCodec,
}

impl HarfBuzzFactory {
    pub fn new(font_data: Arc<[u8]>, codec: IsolationCodec) -> Self {
        Self { font_data, codec }
    }
}

impl ShaperFactory for HarfBuzzFactory {
    type Engine = HarfBuzzShaper;

    fn create(&self) -> Result<Self::Engine, Error> {
        HarfBuzzShaper::new(&self.font_data, self.codec)
    }
}
