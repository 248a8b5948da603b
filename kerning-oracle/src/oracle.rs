//! Comparing source kerning with the kerning applied by the shaping engine.

use std::fmt;

use skrifa::{GlyphId, Tag};

use crate::{
    context::FontContext,
    error::Error,
    isolation::Filler,
    itemize::TestVector,
    kerning::KerningIndex,
    langsys::Language,
    script::Direction,
    shape::{ShapeRequest, ShapedGlyph, ShapingEngine},
};

/// A pair whose shaped kerning differs from the source.
#[derive(Clone, Debug, PartialEq)]
pub struct Mismatch {
    pub script: Tag,
    pub language: Language,
    pub direction: Direction,
    pub first: String,
    pub second: String,
    pub expected: f64,
    pub actual: i32,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "script={} language={} direction={}: {} {} should be {} but is {}",
            self.script,
            self.language,
            self.direction,
            self.first,
            self.second,
            self.expected,
            self.actual
        )
    }
}

/// Checks test vectors of one font.
#[derive(Clone, Copy, Debug)]
pub struct Oracle<'a> {
    context: &'a FontContext,
    kerning: &'a KerningIndex,
    round: bool,
    filler: Option<Filler>,
}

impl<'a> Oracle<'a> {
    pub fn new(context: &'a FontContext, kerning: &'a KerningIndex) -> Self {
        Self {
            context,
            kerning,
            round: false,
            filler: None,
        }
    }

    /// Round source values to whole units before comparing.
    pub fn with_rounding(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    /// Place a filler codepoint between the two glyphs of each pair.
    pub fn with_filler(mut self, filler: Option<Filler>) -> Self {
        self.filler = filler;
        self
    }

    /// Shape one test vector and compare the result with the source.
    ///
    /// Returns an error if the shaping engine produced anything other than
    /// the two requested glyphs, since the value it reports would then be
    /// meaningless.
    pub fn check(
        &self,
        engine: &mut impl ShapingEngine,
        vector: &TestVector,
    ) -> Result<Option<Mismatch>, Error> {
        let first = self.name(vector.first);
        let second = self.name(vector.second);
        let expected = self.kerning.expected(first, second, self.round);
        let direction = Direction::for_script(vector.script);

        let codec = self.context.codec();
        let mut codepoints = vec![codec.encode(vector.first)];
        codepoints.extend(self.filler.map(Filler::codepoint));
        codepoints.push(codec.encode(vector.second));
        let filler_cluster = self.filler.map(|_| 1u32);

        let mut shaped = engine.shape(&ShapeRequest {
            script: vector.script,
            direction,
            language: vector.language,
            codepoints: &codepoints,
        })?;
        if direction.is_rtl() {
            shaped.reverse();
        }
        shaped.retain(|glyph| Some(glyph.cluster) != filler_cluster);

        let ids = shaped.iter().map(|glyph| glyph.glyph_id).collect::<Vec<_>>();
        if ids != [vector.first, vector.second] {
            return Err(Error::IsolationFailed {
                script: vector.script,
                language: vector.language,
                first: first.to_string(),
                second: second.to_string(),
                shaped: ids.iter().map(|gid| gid.to_u32()).collect(),
            });
        }

        let actual = realized_kerning(&shaped, codec.units_per_em());
        if actual as f64 == expected {
            return Ok(None);
        }
        Ok(Some(Mismatch {
            script: vector.script,
            language: vector.language,
            direction,
            first: first.to_string(),
            second: second.to_string(),
            expected,
            actual,
        }))
    }

    fn name(&self, gid: GlyphId) -> &'a str {
        self.context.glyph_name(gid).unwrap_or_default()
    }
}

/// The kerning applied to a shaped pair.
///
/// Every glyph advances by one em, so whatever differs from two ems is the
/// adjustment, whichever glyph carries it.
fn realized_kerning(shaped: &[ShapedGlyph], units_per_em: u16) -> i32 {
    shaped.iter().map(|glyph| glyph.x_advance).sum::<i32>() - 2 * units_per_em as i32
}
