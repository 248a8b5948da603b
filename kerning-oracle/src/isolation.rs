//! Feeding exact glyphs to a shaping engine.
//!
//! Each glyph is given a synthetic codepoint above the Unicode range, and the
//! shaping engine resolves codepoints through [`IsolationCodec`] instead of
//! the font's character map. The font used for shaping has its GSUB table
//! removed so no substitution can replace the glyphs it was given.

use skrifa::GlyphId;
use write_fonts::{
    read::{FontRef, TableProvider},
    types::Tag,
    FontBuilder,
};

use crate::{error::Error, shape::GlyphResolver};

/// Added to a glyph id to form its synthetic codepoint.
///
/// This is above U+10FFFF so the shaping engine has no properties for it.
pub const GLYPH_CODEPOINT_OFFSET: u32 = 0x8000_0000;
/// U+200C ZERO WIDTH NON-JOINER
pub const ZERO_WIDTH_NON_JOINER: u32 = 0x200C;
/// U+0020 SPACE
pub const SPACE: u32 = 0x0020;
/// The glyph fillers and unknown codepoints resolve to.
pub const NO_OP_GLYPH: GlyphId = GlyphId::NOTDEF;

/// A codepoint placed between the two glyphs of a pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Filler {
    ZeroWidthNonJoiner,
    Space,
}

impl Filler {
    pub fn codepoint(self) -> u32 {
        match self {
            Filler::ZeroWidthNonJoiner => ZERO_WIDTH_NON_JOINER,
            Filler::Space => SPACE,
        }
    }
}

/// Maps glyphs to synthetic codepoints and back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IsolationCodec {
    units_per_em: u16,
}

impl IsolationCodec {
    pub fn new(units_per_em: u16) -> Self {
        Self { units_per_em }
    }

    /// The synthetic codepoint of a glyph.
    pub fn encode(&self, gid: GlyphId) -> u32 {
        GLYPH_CODEPOINT_OFFSET + gid.to_u32()
    }

    /// The glyph a codepoint resolves to.
    ///
    /// Synthetic codepoints resolve to their glyph. Fillers and any other
    /// codepoint resolve to [`NO_OP_GLYPH`].
    pub fn decode(&self, codepoint: u32) -> GlyphId {
        match codepoint {
            cp if cp >= GLYPH_CODEPOINT_OFFSET => GlyphId::new(cp - GLYPH_CODEPOINT_OFFSET),
            ZERO_WIDTH_NON_JOINER | SPACE => NO_OP_GLYPH,
            _ => NO_OP_GLYPH,
        }
    }

    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }
}

impl GlyphResolver for IsolationCodec {
    fn resolve(&self, codepoint: u32) -> GlyphId {
        self.decode(codepoint)
    }

    /// Every glyph advances by one em, so the kerning adjustment is the only
    /// thing that varies between pairs.
    fn default_advance(&self) -> i32 {
        self.units_per_em as i32
    }
}

/// Returns a copy of the font without the GSUB table.
pub fn strip_substitutions(font_data: &[u8]) -> Result<Vec<u8>, Error> {
    const GSUB: Tag = Tag::new(b"GSUB");
    let font = FontRef::new(font_data).map_err(|e| Error::Rebuild(e.to_string()))?;
    let mut builder = FontBuilder::new();
    for record in font.table_directory().table_records() {
        let tag = record.tag();
        if tag == GSUB {
            continue;
        }
        match font.data_for_tag(tag) {
            Some(data) => {
                builder.add_raw(tag, data);
            }
            None => log::warn!("data for '{tag}' is malformed, dropping it"),
        }
    }
    Ok(builder.build())
}
