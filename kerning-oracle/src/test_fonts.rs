//! Small fonts and font sources built for tests.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
};

use norad::{
    AffineTransform, Anchor, Component, Contour, ContourPoint, Font, Glyph, Name, PointType,
};

use write_fonts::{
    tables::{
        cmap::Cmap,
        gpos::{
            Gpos, PairPos, PairSet, PairValueRecord, PositionLookup, PositionLookupList,
            ValueRecord,
        },
        gsub::{Gsub, SingleSubst, SubstitutionLookup, SubstitutionLookupList},
        head::Head,
        layout::{
            CoverageTable, Feature, FeatureList, FeatureRecord, LangSys, LangSysRecord, Lookup,
            LookupFlag, Script, ScriptList, ScriptRecord,
        },
        maxp::Maxp,
        post::Post,
    },
    types::{GlyphId, GlyphId16, Tag},
    FontBuilder,
};

pub(crate) const UNITS_PER_EM: u16 = 1000;

/// Builds a font with a glyph order, a character map, pair kerning in GPOS
/// and single substitutions in GSUB.
///
/// Every script in the layout tables has one feature with one lookup, so
/// both tables are applied for any script and language.
#[derive(Clone, Debug, Default)]
pub(crate) struct TestFont {
    glyph_order: Vec<String>,
    mappings: Vec<(char, String)>,
    kerning: BTreeMap<String, BTreeMap<String, i16>>,
    substitutions: BTreeMap<String, String>,
    language_systems: BTreeMap<[u8; 4], BTreeSet<[u8; 4]>>,
}

impl TestFont {
    pub(crate) fn new(glyph_order: &[&str]) -> Self {
        let mut language_systems = BTreeMap::new();
        language_systems.insert(*b"DFLT", BTreeSet::new());
        language_systems.insert(*b"latn", BTreeSet::new());
        Self {
            glyph_order: glyph_order.iter().map(|name| name.to_string()).collect(),
            language_systems,
            ..Default::default()
        }
    }

    pub(crate) fn map(mut self, ch: char, glyph: &str) -> Self {
        self.mappings.push((ch, glyph.to_string()));
        self
    }

    pub(crate) fn kern(mut self, first: &str, second: &str, value: i16) -> Self {
        self.kerning
            .entry(first.to_string())
            .or_default()
            .insert(second.to_string(), value);
        self
    }

    pub(crate) fn substitute(mut self, from: &str, to: &str) -> Self {
        self.substitutions.insert(from.to_string(), to.to_string());
        self
    }

    pub(crate) fn language_system(mut self, script: &[u8; 4], language: &[u8; 4]) -> Self {
        self.language_systems
            .entry(*script)
            .or_default()
            .insert(*language);
        self
    }

    fn gid(&self, name: &str) -> GlyphId16 {
        let idx = self
            .glyph_order
            .iter()
            .position(|glyph| glyph == name)
            .unwrap_or_else(|| panic!("'{name}' is not in the glyph order"));
        GlyphId16::new(idx as u16)
    }

    fn script_list(&self) -> ScriptList {
        let lang_sys = || LangSys {
            required_feature_index: 0xffff,
            feature_indices: vec![0],
        };
        ScriptList {
            script_records: self
                .language_systems
                .iter()
                .map(|(script, languages)| ScriptRecord {
                    script_tag: Tag::new(script),
                    script: Script {
                        default_lang_sys: Some(lang_sys()).into(),
                        lang_sys_records: languages
                            .iter()
                            .map(|language| LangSysRecord {
                                lang_sys_tag: Tag::new(language),
                                lang_sys: lang_sys().into(),
                            })
                            .collect(),
                    }
                    .into(),
                })
                .collect(),
        }
    }

    fn feature_list(&self, tag: &[u8; 4]) -> FeatureList {
        FeatureList {
            feature_records: vec![FeatureRecord {
                feature_tag: Tag::new(tag),
                feature: Feature {
                    feature_params: None.into(),
                    lookup_list_indices: vec![0],
                }
                .into(),
            }],
        }
    }

    fn gpos(&self) -> Gpos {
        let mut rows = self
            .kerning
            .iter()
            .map(|(first, row)| {
                let mut records = row
                    .iter()
                    .map(|(second, value)| (self.gid(second), *value))
                    .collect::<Vec<_>>();
                records.sort();
                let pair_set = PairSet::new(
                    records
                        .into_iter()
                        .map(|(second, value)| {
                            PairValueRecord::new(
                                second,
                                ValueRecord::new().with_x_advance(value),
                                ValueRecord::new(),
                            )
                        })
                        .collect(),
                );
                (self.gid(first), pair_set)
            })
            .collect::<Vec<_>>();
        rows.sort_by_key(|(gid, _)| *gid);
        let coverage = CoverageTable::format_1(rows.iter().map(|(gid, _)| *gid).collect());
        let pair_sets = rows.into_iter().map(|(_, pair_set)| pair_set).collect();
        let lookup = Lookup::new(
            LookupFlag::empty(),
            vec![PairPos::format_1(coverage, pair_sets)],
        );
        Gpos::new(
            self.script_list(),
            self.feature_list(b"kern"),
            PositionLookupList::new(vec![PositionLookup::Pair(lookup)]),
        )
    }

    fn gsub(&self) -> Gsub {
        let mut pairs = self
            .substitutions
            .iter()
            .map(|(from, to)| (self.gid(from), self.gid(to)))
            .collect::<Vec<_>>();
        pairs.sort();
        let coverage = CoverageTable::format_1(pairs.iter().map(|(from, _)| *from).collect());
        let replacements = pairs.into_iter().map(|(_, to)| to).collect();
        let lookup = Lookup::new(
            LookupFlag::empty(),
            vec![SingleSubst::format_2(coverage, replacements)],
        );
        Gsub::new(
            self.script_list(),
            self.feature_list(b"salt"),
            SubstitutionLookupList::new(vec![SubstitutionLookup::Single(lookup)]),
        )
    }

    pub(crate) fn build(&self) -> Vec<u8> {
        let maxp = Maxp {
            num_glyphs: self.glyph_order.len() as u16,
            ..Default::default()
        };
        let head = Head {
            units_per_em: UNITS_PER_EM,
            ..Default::default()
        };
        let post = Post::new_v2(self.glyph_order.iter().map(String::as_str));
        let cmap = Cmap::from_mappings(
            self.mappings
                .iter()
                .map(|(ch, name)| (*ch, GlyphId::from(self.gid(name)))),
        )
        .unwrap();
        let mut builder = FontBuilder::new();
        builder
            .add_table(&maxp)
            .unwrap()
            .add_table(&head)
            .unwrap()
            .add_table(&post)
            .unwrap()
            .add_table(&cmap)
            .unwrap();
        if !self.kerning.is_empty() {
            builder.add_table(&self.gpos()).unwrap();
        }
        if !self.substitutions.is_empty() {
            builder.add_table(&self.gsub()).unwrap();
        }
        builder.build()
    }
}

/// Builds a UFO source.
///
/// Every glyph gets a contour, a component and an anchor so that clearing
/// them can be observed.
#[derive(Clone, Debug, Default)]
pub(crate) struct TestUfo {
    glyphs: Vec<(String, Option<char>)>,
    groups: BTreeMap<String, Vec<String>>,
    kerning: BTreeMap<String, BTreeMap<String, f64>>,
    features: Option<String>,
}

impl TestUfo {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn glyph(mut self, name: &str, codepoint: Option<char>) -> Self {
        self.glyphs.push((name.to_string(), codepoint));
        self
    }

    pub(crate) fn group(mut self, name: &str, members: &[&str]) -> Self {
        self.groups.insert(
            name.to_string(),
            members.iter().map(|m| m.to_string()).collect(),
        );
        self
    }

    pub(crate) fn kern(mut self, first: &str, second: &str, value: f64) -> Self {
        self.kerning
            .entry(first.to_string())
            .or_default()
            .insert(second.to_string(), value);
        self
    }

    pub(crate) fn features(mut self, text: &str) -> Self {
        self.features = Some(text.to_string());
        self
    }

    /// Builds the source in memory.
    pub(crate) fn build(&self) -> Font {
        let mut font = Font::new();
        let layer = font.default_layer_mut();
        for (name, codepoint) in &self.glyphs {
            let mut glyph = Glyph::new(name);
            glyph.width = 500.0;
            if let Some(ch) = codepoint {
                glyph.codepoints.insert(*ch);
            }
            let points = [(0.0, 0.0), (500.0, 0.0), (250.0, 700.0)]
                .into_iter()
                .map(|(x, y)| ContourPoint::new(x, y, PointType::Line, false, None, None, None))
                .collect();
            glyph.contours.push(Contour::new(points, None, None));
            glyph.components.push(Component::new(
                Name::new("dieresiscomb").unwrap(),
                AffineTransform::default(),
                None,
                None,
            ));
            glyph.anchors.push(Anchor::new(
                250.0,
                700.0,
                Some(Name::new("top").unwrap()),
                None,
                None,
                None,
            ));
            layer.insert_glyph(glyph);
        }
        for (group, members) in &self.groups {
            font.groups.insert(
                Name::new(group).unwrap(),
                members.iter().map(|m| Name::new(m).unwrap()).collect(),
            );
        }
        for (first, row) in &self.kerning {
            font.kerning.insert(
                Name::new(first).unwrap(),
                row.iter()
                    .map(|(second, value)| (Name::new(second).unwrap(), *value))
                    .collect(),
            );
        }
        if let Some(features) = &self.features {
            font.features = features.clone();
        }
        font
    }

    /// Saves the source as `<dir>/<name>` and returns its path.
    pub(crate) fn write(&self, dir: &Path, name: &str) -> PathBuf {
        let ufo = dir.join(name);
        self.build().save(&ufo).unwrap();
        ufo
    }
}
