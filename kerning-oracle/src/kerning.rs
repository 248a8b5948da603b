//! Kerning as declared by a font source.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use write_fonts::OtRound;

/// Prefix of groups whose members kern as the first glyph of a pair.
pub const FIRST_GROUP_PREFIX: &str = "public.kern1.";
/// Prefix of groups whose members kern as the second glyph of a pair.
pub const SECOND_GROUP_PREFIX: &str = "public.kern2.";

/// Source kerning and groups, with reverse maps from glyph to group.
///
/// Each side of a kerning pair is either a glyph name or the name of a
/// group. [`KerningIndex::lookup`] resolves the value for two glyphs using
/// the UFO precedence rules: an exact glyph pair wins over any group pair.
#[derive(Clone, Debug, Default)]
pub struct KerningIndex {
    groups: BTreeMap<String, Vec<String>>,
    kerning: BTreeMap<String, BTreeMap<String, f64>>,
    first_groups: HashMap<String, String>,
    second_groups: HashMap<String, String>,
}

impl KerningIndex {
    pub fn new(
        groups: BTreeMap<String, Vec<String>>,
        kerning: BTreeMap<String, BTreeMap<String, f64>>,
    ) -> Self {
        let mut first_groups = HashMap::new();
        let mut second_groups = HashMap::new();
        for (group, members) in &groups {
            let reverse = if group.starts_with(FIRST_GROUP_PREFIX) {
                &mut first_groups
            } else if group.starts_with(SECOND_GROUP_PREFIX) {
                &mut second_groups
            } else {
                continue;
            };
            for glyph in members {
                if let Some(previous) = reverse.insert(glyph.clone(), group.clone()) {
                    if &previous != group {
                        log::warn!(
                            "glyph '{glyph}' is in both '{previous}' and '{group}', using '{group}'"
                        );
                    }
                }
            }
        }
        Self {
            groups,
            kerning,
            first_groups,
            second_groups,
        }
    }

    /// The first side group of a glyph, if any.
    pub fn first_group(&self, glyph: &str) -> Option<&str> {
        self.first_groups.get(glyph).map(String::as_str)
    }

    /// The second side group of a glyph, if any.
    pub fn second_group(&self, glyph: &str) -> Option<&str> {
        self.second_groups.get(glyph).map(String::as_str)
    }

    /// Returns the glyphs that appear on the first and second side of any
    /// kerning pair, with groups expanded to their members.
    pub fn kerned_glyphs(&self) -> (BTreeSet<&str>, BTreeSet<&str>) {
        let mut firsts = BTreeSet::new();
        let mut seconds = BTreeSet::new();
        for (first, row) in &self.kerning {
            firsts.extend(self.expand(first));
            for second in row.keys() {
                seconds.extend(self.expand(second));
            }
        }
        (firsts, seconds)
    }

    fn expand<'a>(&'a self, selector: &'a str) -> Vec<&'a str> {
        match self.groups.get(selector) {
            Some(members) => members.iter().map(String::as_str).collect(),
            None => vec![selector],
        }
    }

    /// The source kerning value between two glyphs.
    ///
    /// Pairs are tried in this order: glyph and glyph, glyph and second
    /// group, first group and glyph, first group and second group. Pairs
    /// with no entry are not kerned.
    pub fn lookup(&self, first: &str, second: &str) -> f64 {
        let first_group = self.first_group(first);
        let second_group = self.second_group(second);
        [
            Some((first, second)),
            second_group.map(|group| (first, group)),
            first_group.map(|group| (group, second)),
            first_group.zip(second_group),
        ]
        .into_iter()
        .flatten()
        .find_map(|(left, right)| self.kerning.get(left)?.get(right).copied())
        .unwrap_or_default()
    }

    /// The value the compiled font is expected to apply to a pair.
    pub fn expected(&self, first: &str, second: &str, round: bool) -> f64 {
        let value = self.lookup(first, second);
        if round {
            <f64 as OtRound<f64>>::ot_round(value)
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn make_index(groups: &[(&str, &[&str])], pairs: &[(&str, &str, f64)]) -> KerningIndex {
        let groups = groups
            .iter()
            .map(|(name, members)| {
                (
                    name.to_string(),
                    members.iter().map(|m| m.to_string()).collect(),
                )
            })
            .collect();
        let mut kerning: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
        for (first, second, value) in pairs {
            kerning
                .entry(first.to_string())
                .or_default()
                .insert(second.to_string(), *value);
        }
        KerningIndex::new(groups, kerning)
    }

    #[test]
    fn literal_pair_wins_over_groups() {
        let index = make_index(
            &[("public.kern1.A", &["x"]), ("public.kern2.B", &["y"])],
            &[
                ("x", "y", 10.0),
                ("public.kern1.A", "public.kern2.B", 20.0),
            ],
        );
        assert_eq!(index.lookup("x", "y"), 10.0);
    }

    #[test]
    fn group_fallbacks() {
        let index = make_index(
            &[
                ("public.kern1.O", &["O", "Q"]),
                ("public.kern2.V", &["V", "W"]),
            ],
            &[
                ("O", "public.kern2.V", -30.0),
                ("public.kern1.O", "W", -20.0),
                ("public.kern1.O", "public.kern2.V", -10.0),
            ],
        );
        // glyph and second group before first group and glyph
        assert_eq!(index.lookup("O", "W"), -30.0);
        assert_eq!(index.lookup("O", "V"), -30.0);
        assert_eq!(index.lookup("Q", "W"), -20.0);
        assert_eq!(index.lookup("Q", "V"), -10.0);
        assert_eq!(index.lookup("V", "O"), 0.0);
        assert_eq!(index.lookup("unknown", "V"), 0.0);
    }

    #[test]
    fn last_group_wins() {
        let index = make_index(
            &[("public.kern1.A", &["a"]), ("public.kern1.B", &["a"])],
            &[],
        );
        assert_eq!(index.first_group("a"), Some("public.kern1.B"));
        assert_eq!(index.second_group("a"), None);
    }

    #[test]
    fn buckets_expand_groups() {
        let index = make_index(
            &[
                ("public.kern1.O", &["O", "Q"]),
                ("public.kern2.V", &["V", "W"]),
            ],
            &[("public.kern1.O", "public.kern2.V", -10.0), ("T", "o", -5.0)],
        );
        let (firsts, seconds) = index.kerned_glyphs();
        assert_eq!(firsts, BTreeSet::from(["O", "Q", "T"]));
        assert_eq!(seconds, BTreeSet::from(["V", "W", "o"]));
    }

    #[test]
    fn rounding() {
        let index = make_index(&[], &[("A", "V", -50.5), ("T", "o", 10.4)]);
        assert_eq!(index.expected("A", "V", false), -50.5);
        assert_eq!(index.expected("A", "V", true), -50.0);
        assert_eq!(index.expected("T", "o", true), 10.0);
    }
}
