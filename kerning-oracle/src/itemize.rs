//! Enumerating the (script, language, pair) combinations to check.
//!
//! Real text is split into runs of one script and one direction before it
//! reaches a shaping engine, so kerning between glyphs that never share a
//! run is never applied. Only pairs that could share a run are tested, once
//! for each script they could share and each language declared for it.

use std::collections::BTreeSet;

use skrifa::{GlyphId, Tag};

use crate::{
    classify::BidiCategory, context::FontContext, error::Error, kerning::KerningIndex,
    langsys::Language, script,
};

/// One pair to shape, under one script and language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestVector {
    /// The ISO 15924 script code of the run.
    pub script: Tag,
    pub language: Language,
    pub first: GlyphId,
    pub second: GlyphId,
}

/// The glyphs on each side of a kerning pair that can be tested.
///
/// Glyphs missing from the compiled font and glyphs that are unreachable
/// from any codepoint are dropped.
pub fn kerned_buckets<'a>(
    context: &FontContext,
    kerning: &'a KerningIndex,
) -> (BTreeSet<&'a str>, BTreeSet<&'a str>) {
    let testable = |name: &&str| {
        context
            .glyph_id(name)
            .is_some_and(|gid| context.classification().is_reachable(gid))
    };
    let (firsts, seconds) = kerning.kerned_glyphs();
    let firsts = firsts.into_iter().filter(testable).collect();
    let seconds = seconds.into_iter().filter(testable).collect();
    (firsts, seconds)
}

/// Returns every test vector for a font in a stable order.
///
/// Pairs are ordered by first then second glyph name; within a pair by
/// script, then by language with the default language first.
pub fn test_vectors(
    context: &FontContext,
    kerning: &KerningIndex,
) -> Result<Vec<TestVector>, Error> {
    let (firsts, seconds) = kerned_buckets(context, kerning);
    let firsts = resolve(context, &firsts);
    let seconds = resolve(context, &seconds);
    let mut vectors = Vec::new();
    for &(first, first_scripts) in &firsts {
        for &(second, second_scripts) in &seconds {
            if has_mixed_bidi(context, first, second) {
                continue;
            }
            for script in run_scripts(first_scripts, second_scripts) {
                let languages = context.language_systems().languages_for_script(script)?;
                vectors.extend(languages.into_iter().map(|language| TestVector {
                    script,
                    language,
                    first,
                    second,
                }));
            }
        }
    }
    log::debug!(
        "{} first and {} second glyphs produced {} test vectors",
        firsts.len(),
        seconds.len(),
        vectors.len()
    );
    Ok(vectors)
}

fn resolve<'a>(
    context: &'a FontContext,
    names: &BTreeSet<&str>,
) -> Vec<(GlyphId, &'a BTreeSet<Tag>)> {
    names
        .iter()
        .filter_map(|name| {
            let gid = context.glyph_id(name)?;
            Some((gid, context.scripts(gid)?))
        })
        .collect()
}

/// Returns true if the two glyphs have opposing strong directions between
/// them, which bidi segmentation would split into separate runs.
fn has_mixed_bidi(context: &FontContext, first: GlyphId, second: GlyphId) -> bool {
    let bidis = context
        .bidi_categories(first)
        .chain(context.bidi_categories(second))
        .collect::<BTreeSet<_>>();
    bidis.contains(&BidiCategory::Ltr) && bidis.contains(&BidiCategory::Rtl)
}

/// The distinct run scripts of every compatible combination of the two
/// glyphs' scripts.
fn run_scripts(first: &BTreeSet<Tag>, second: &BTreeSet<Tag>) -> BTreeSet<Tag> {
    first
        .iter()
        .flat_map(|a| second.iter().filter_map(|b| script::run_script(*a, *b)))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_fonts::TestFont;

    fn index(pairs: &[(&str, &str, f64)], groups: &[(&str, &[&str])]) -> KerningIndex {
        let mut kerning: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
        for (first, second, value) in pairs {
            kerning
                .entry(first.to_string())
                .or_default()
                .insert(second.to_string(), *value);
        }
        let groups = groups
            .iter()
            .map(|(name, members)| {
                (
                    name.to_string(),
                    members.iter().map(|m| m.to_string()).collect(),
                )
            })
            .collect();
        KerningIndex::new(groups, kerning)
    }

    fn names(
        context: &FontContext,
        vectors: &[TestVector],
    ) -> Vec<(String, Language, String, String)> {
        vectors
            .iter()
            .map(|v| {
                (
                    v.script.to_string(),
                    v.language,
                    context.glyph_name(v.first).unwrap().to_string(),
                    context.glyph_name(v.second).unwrap().to_string(),
                )
            })
            .collect()
    }

    fn latin_and_hebrew() -> FontContext {
        let data = TestFont::new(&[
            ".notdef", "A", "V", "alef", "bet", "period", "one", "A.sc", "orphan", "alpha",
        ])
        .map('A', "A")
        .map('V', "V")
        .map('א', "alef")
        .map('ב', "bet")
        .map('.', "period")
        .map('1', "one")
        .map('α', "alpha")
        .substitute("A", "A.sc")
        .language_system(b"latn", b"TRK ")
        .build();
        FontContext::new(&data).unwrap()
    }

    #[test]
    fn single_latin_pair() {
        let data = TestFont::new(&[".notdef", "A", "V"])
            .map('A', "A")
            .map('V', "V")
            .kern("A", "V", -50)
            .build();
        let context = FontContext::new(&data).unwrap();
        let vectors = test_vectors(&context, &index(&[("A", "V", -50.0)], &[])).unwrap();
        assert_eq!(
            vectors,
            vec![TestVector {
                script: Tag::new(b"Latn"),
                language: Language::Default,
                first: GlyphId::new(1),
                second: GlyphId::new(2),
            }]
        );
    }

    #[test]
    fn mixed_bidi_is_skipped() {
        let context = latin_and_hebrew();
        let vectors = test_vectors(
            &context,
            &index(&[("A", "alef", -10.0), ("alef", "bet", -20.0)], &[]),
        )
        .unwrap();
        assert_eq!(
            names(&context, &vectors),
            vec![
                (
                    "Hebr".to_string(),
                    Language::Default,
                    "alef".to_string(),
                    "alef".to_string()
                ),
                (
                    "Hebr".to_string(),
                    Language::Default,
                    "alef".to_string(),
                    "bet".to_string()
                ),
            ]
        );
    }

    #[test]
    fn european_number_is_left_to_right() {
        let context = latin_and_hebrew();
        let vectors = test_vectors(&context, &index(&[("one", "alef", -10.0)], &[])).unwrap();
        assert!(vectors.is_empty());
    }

    #[test]
    fn cross_script_pairs_are_skipped() {
        let context = latin_and_hebrew();
        let vectors = test_vectors(&context, &index(&[("A", "alpha", -10.0)], &[])).unwrap();
        assert!(vectors.is_empty());
    }

    #[test]
    fn private_use_glyphs_only_pair_with_themselves() {
        let data = TestFont::new(&[".notdef", "A", "icon"])
            .map('A', "A")
            .map('\u{E000}', "icon")
            .build();
        let context = FontContext::new(&data).unwrap();
        assert_eq!(
            context.scripts(GlyphId::new(2)),
            Some(&BTreeSet::from([script::UNKNOWN]))
        );
        let vectors = test_vectors(
            &context,
            &index(&[("icon", "A", -10.0), ("icon", "icon", -20.0)], &[]),
        )
        .unwrap();
        assert_eq!(
            names(&context, &vectors),
            vec![(
                "Zzzz".to_string(),
                Language::Default,
                "icon".to_string(),
                "icon".to_string()
            )]
        );
    }

    #[test]
    fn common_glyphs_join_any_script() {
        let context = latin_and_hebrew();
        let vectors = test_vectors(
            &context,
            &index(&[("period", "bet", -10.0), ("period", "V", -10.0)], &[]),
        )
        .unwrap();
        assert_eq!(
            names(&context, &vectors),
            vec![
                (
                    "Latn".to_string(),
                    Language::Default,
                    "period".to_string(),
                    "V".to_string()
                ),
                (
                    "Latn".to_string(),
                    Language::Tag("tr"),
                    "period".to_string(),
                    "V".to_string()
                ),
                (
                    "Hebr".to_string(),
                    Language::Default,
                    "period".to_string(),
                    "bet".to_string()
                ),
            ]
        );
    }

    #[test]
    fn every_language_of_the_script() {
        let context = latin_and_hebrew();
        let vectors = test_vectors(&context, &index(&[("A", "V", -10.0)], &[])).unwrap();
        let languages = vectors.iter().map(|v| v.language).collect::<Vec<_>>();
        assert_eq!(languages, vec![Language::Default, Language::Tag("tr")]);
    }

    #[test]
    fn unreachable_and_missing_glyphs_are_dropped() {
        let context = latin_and_hebrew();
        let kerning = index(
            &[("public.kern1.A", "V", -10.0), ("missing", "V", -10.0)],
            &[("public.kern1.A", &["A", "A.sc", "orphan"])],
        );
        let (firsts, seconds) = kerned_buckets(&context, &kerning);
        // A.sc is reachable through substitution, orphan is not
        assert_eq!(firsts, BTreeSet::from(["A", "A.sc"]));
        assert_eq!(seconds, BTreeSet::from(["V"]));
        let vectors = test_vectors(&context, &kerning).unwrap();
        assert!(vectors
            .iter()
            .all(|v| context.glyph_name(v.first) != Some("orphan")));
        assert_eq!(vectors.len(), 4);
    }

    #[test]
    fn vectors_are_ordered_by_name() {
        let context = latin_and_hebrew();
        let vectors = test_vectors(
            &context,
            &index(&[("V", "A", -10.0), ("A", "V", -10.0), ("A", "A", -5.0)], &[]),
        )
        .unwrap();
        let pairs = names(&context, &vectors)
            .into_iter()
            .filter(|(_, language, _, _)| *language == Language::Default)
            .map(|(_, _, first, second)| (first, second))
            .collect::<Vec<_>>();
        assert_eq!(
            pairs,
            vec![
                ("A".to_string(), "A".to_string()),
                ("A".to_string(), "V".to_string()),
                ("V".to_string(), "A".to_string()),
                ("V".to_string(), "V".to_string()),
            ]
        );
    }
}
