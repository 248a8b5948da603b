//! Classifying glyphs by Unicode script and bidi category.
//!
//! Glyphs take the properties of the codepoints mapped to them in the
//! character map. Glyphs that are only reachable through substitution take
//! the properties of the codepoints they are substituted from.

use std::collections::{BTreeMap, BTreeSet};

use skrifa::{
    raw::{collections::IntSet, tables::gsub::Gsub, FontRef, ReadError, TableProvider},
    GlyphId, MetadataProvider, Tag,
};
use unicode_bidi::BidiClass;

use crate::script::{self, COMMON, INHERITED};

/// A strong bidi category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BidiCategory {
    /// Unicode bidi classes L, EN and AN.
    Ltr,
    /// Unicode bidi classes R and AL.
    Rtl,
}

impl BidiCategory {
    /// Returns the strong category of a codepoint, or `None` if it is neutral.
    pub fn of(codepoint: u32) -> Option<Self> {
        let ch = char::from_u32(codepoint)?;
        match unicode_bidi::bidi_class(ch) {
            BidiClass::R | BidiClass::AL => Some(BidiCategory::Rtl),
            BidiClass::L | BidiClass::EN | BidiClass::AN => Some(BidiCategory::Ltr),
            _ => None,
        }
    }
}

/// The scripts and bidi categories of every reachable glyph in a font.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlyphClassification {
    scripts: BTreeMap<GlyphId, BTreeSet<Tag>>,
    bidis: BTreeMap<GlyphId, BTreeSet<BidiCategory>>,
}

impl GlyphClassification {
    /// Classify the glyphs of a compiled font.
    pub fn new(font: &FontRef) -> Result<Self, ReadError> {
        let mappings = font.charmap().mappings().collect::<Vec<_>>();
        let closure = match font.gsub() {
            Ok(gsub) => Some(SubstitutionClosure::new(gsub)?),
            Err(ReadError::TableIsMissing(_)) => None,
            Err(e) => return Err(e),
        };
        Self::from_mappings(&mappings, closure.as_ref())
    }

    fn from_mappings(
        mappings: &[(u32, GlyphId)],
        closure: Option<&SubstitutionClosure>,
    ) -> Result<Self, ReadError> {
        let font_scripts = font_scripts(mappings.iter().map(|(cp, _)| *cp));
        let scripts = classify(mappings, closure, |cp| {
            Some(codepoint_scripts(cp, &font_scripts))
        })?;
        let bidis = classify(mappings, closure, |cp| {
            BidiCategory::of(cp).map(|bidi| BTreeSet::from([bidi]))
        })?;
        Ok(Self {
            scripts: invert(scripts),
            bidis: invert(bidis),
        })
    }

    /// The scripts of a glyph, or `None` if it is unreachable.
    pub fn scripts(&self, gid: GlyphId) -> Option<&BTreeSet<Tag>> {
        self.scripts.get(&gid)
    }

    /// The strong bidi categories of a glyph. Empty for neutral glyphs.
    pub fn bidi_categories(&self, gid: GlyphId) -> impl Iterator<Item = BidiCategory> + '_ {
        self.bidis.get(&gid).into_iter().flatten().copied()
    }

    /// Returns true if the glyph has at least one script.
    pub fn is_reachable(&self, gid: GlyphId) -> bool {
        self.scripts.get(&gid).is_some_and(|scripts| !scripts.is_empty())
    }

    /// The number of glyphs with at least one script.
    pub fn reachable_count(&self) -> usize {
        self.scripts.len()
    }
}

/// Returns the scripts a font is considered to support.
///
/// A script is supported if some codepoint in the font belongs to that
/// script alone. Codepoints shared by several scripts, like U+061F ARABIC
/// QUESTION MARK, do not establish support on their own.
pub fn font_scripts(codepoints: impl IntoIterator<Item = u32>) -> BTreeSet<Tag> {
    codepoints
        .into_iter()
        .filter_map(char::from_u32)
        .filter_map(|ch| {
            let scripts = script::script_extensions(ch);
            match scripts.len() {
                1 => scripts.first().copied(),
                _ => None,
            }
        })
        .collect()
}

/// Returns the scripts a codepoint contributes to the glyphs mapped from it.
///
/// Script extensions are restricted to the scripts the font supports, plus
/// the common and inherited scripts. A font with no supported scripts treats
/// everything as common, and so does a codepoint none of whose scripts
/// survive the restriction.
pub fn codepoint_scripts(codepoint: u32, font_scripts: &BTreeSet<Tag>) -> BTreeSet<Tag> {
    let Some(ch) = char::from_u32(codepoint) else {
        return BTreeSet::from([COMMON]);
    };
    if font_scripts.is_empty() {
        return BTreeSet::from([COMMON]);
    }
    let scripts = script::script_extensions(ch)
        .into_iter()
        .filter(|script| font_scripts.contains(script) || *script == COMMON || *script == INHERITED)
        .collect::<BTreeSet<_>>();
    if scripts.is_empty() {
        BTreeSet::from([COMMON])
    } else {
        scripts
    }
}

/// Glyphs reachable through any substitution lookup referenced by a feature.
struct SubstitutionClosure<'a> {
    gsub: Gsub<'a>,
    lookups: IntSet<u16>,
}

impl<'a> SubstitutionClosure<'a> {
    fn new(gsub: Gsub<'a>) -> Result<Self, ReadError> {
        let lookups = gsub.collect_lookups(&IntSet::all())?;
        Ok(Self { gsub, lookups })
    }

    fn close(&self, glyphs: &mut IntSet<GlyphId>) -> Result<(), ReadError> {
        self.gsub.closure_glyphs(&self.lookups, glyphs)
    }
}

/// Groups glyphs by the labels of the codepoints that reach them.
///
/// `label` returns `None` for neutral codepoints. Neutral glyphs are closed
/// over substitution together with each label's glyphs, so a glyph formed
/// from a labelled glyph and neutral ones takes the label, while glyphs
/// reachable from neutral glyphs alone do not.
fn classify<K: Ord + Copy>(
    mappings: &[(u32, GlyphId)],
    closure: Option<&SubstitutionClosure>,
    label: impl Fn(u32) -> Option<BTreeSet<K>>,
) -> Result<BTreeMap<K, IntSet<GlyphId>>, ReadError> {
    let mut labelled: BTreeMap<K, IntSet<GlyphId>> = BTreeMap::new();
    let mut neutral = IntSet::empty();
    for (codepoint, gid) in mappings {
        match label(*codepoint) {
            Some(keys) => {
                for key in keys {
                    labelled.entry(key).or_insert_with(IntSet::empty).insert(*gid);
                }
            }
            None => {
                neutral.insert(*gid);
            }
        }
    }
    let Some(closure) = closure else {
        return Ok(labelled);
    };
    if !neutral.is_empty() {
        closure.close(&mut neutral)?;
    }
    for glyphs in labelled.values_mut() {
        let mut reached = glyphs.clone();
        reached.union(&neutral);
        closure.close(&mut reached)?;
        glyphs.extend(reached.iter().filter(|gid| !neutral.contains(*gid)));
    }
    Ok(labelled)
}

fn invert<K: Ord + Copy>(
    by_label: BTreeMap<K, IntSet<GlyphId>>,
) -> BTreeMap<GlyphId, BTreeSet<K>> {
    let mut by_glyph: BTreeMap<GlyphId, BTreeSet<K>> = BTreeMap::new();
    for (key, glyphs) in by_label {
        for gid in glyphs.iter() {
            by_glyph.entry(gid).or_default().insert(key);
        }
    }
    by_glyph
}
