//! Everything derived from one compiled font.

use std::{
    collections::{BTreeSet, HashMap},
    sync::Arc,
};

use skrifa::{
    raw::{types::GlyphId16, FontRef, ReadError, TableProvider},
    GlyphId, Tag,
};

use crate::{
    classify::{BidiCategory, GlyphClassification},
    error::Error,
    isolation::{self, IsolationCodec},
    langsys::LanguageSystems,
};

/// Immutable per-font state shared by the itemizer and the oracle.
#[derive(Clone, Debug)]
pub struct FontContext {
    glyph_order: Vec<String>,
    glyph_ids: HashMap<String, GlyphId>,
    classification: GlyphClassification,
    language_systems: LanguageSystems,
    codec: IsolationCodec,
    shaping_font: Arc<[u8]>,
}

impl FontContext {
    /// Derive the context from the bytes of a compiled font.
    pub fn new(font_data: &[u8]) -> Result<Self, Error> {
        let font = FontRef::new(font_data)?;
        let glyph_order = glyph_order(&font)?;
        let glyph_ids = glyph_order
            .iter()
            .enumerate()
            .map(|(gid, name)| (name.clone(), GlyphId::new(gid as u32)))
            .collect();
        let classification = GlyphClassification::new(&font)?;
        let language_systems = LanguageSystems::new(&font)?;
        let codec = IsolationCodec::new(font.head()?.units_per_em());
        let shaping_font = isolation::strip_substitutions(font_data)?.into();
        log::debug!(
            "{} glyphs, {} reachable, scripts {:?}",
            glyph_order.len(),
            classification.reachable_count(),
            language_systems.scripts().collect::<Vec<_>>()
        );
        Ok(Self {
            glyph_order,
            glyph_ids,
            classification,
            language_systems,
            codec,
            shaping_font,
        })
    }

    pub fn glyph_id(&self, name: &str) -> Option<GlyphId> {
        self.glyph_ids.get(name).copied()
    }

    pub fn glyph_name(&self, gid: GlyphId) -> Option<&str> {
        self.glyph_order.get(gid.to_u32() as usize).map(String::as_str)
    }

    pub fn glyph_order(&self) -> &[String] {
        &self.glyph_order
    }

    pub fn scripts(&self, gid: GlyphId) -> Option<&BTreeSet<Tag>> {
        self.classification.scripts(gid)
    }

    pub fn bidi_categories(&self, gid: GlyphId) -> impl Iterator<Item = BidiCategory> + '_ {
        self.classification.bidi_categories(gid)
    }

    pub fn classification(&self) -> &GlyphClassification {
        &self.classification
    }

    pub fn language_systems(&self) -> &LanguageSystems {
        &self.language_systems
    }

    pub fn codec(&self) -> IsolationCodec {
        self.codec
    }

    pub fn units_per_em(&self) -> u16 {
        self.codec.units_per_em()
    }

    /// The compiled font without GSUB, as given to the shaping engine.
    pub fn shaping_font(&self) -> &Arc<[u8]> {
        &self.shaping_font
    }
}

fn glyph_order(font: &FontRef) -> Result<Vec<String>, Error> {
    let num_glyphs = font.maxp()?.num_glyphs();
    let post = match font.post() {
        Ok(post) => post,
        Err(ReadError::TableIsMissing(_)) => return Err(Error::MissingGlyphNames),
        Err(e) => return Err(e.into()),
    };
    (0..num_glyphs)
        .map(|gid| {
            post.glyph_name(GlyphId16::new(gid).into())
                .map(str::to_string)
                .ok_or(Error::MissingGlyphNames)
        })
        .collect()
}
