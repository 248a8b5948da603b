//! Unicode scripts, their OpenType tags and their direction.
//!
//! Scripts are identified by their four letter ISO 15924 code stored in a
//! [`Tag`], e.g. `Latn`.
//!
//! based on
//! <https://github.com/fonttools/fonttools/blob/8697f91cdc/Lib/fontTools/unicodedata/OTTags.py>

use std::collections::BTreeSet;

use skrifa::Tag;
use unicode_script::UnicodeScript;

/// The script of characters shared by several scripts, e.g. punctuation.
pub const COMMON: Tag = Tag::new(b"Zyyy");
/// The script of combining marks that take the script of their base.
pub const INHERITED: Tag = Tag::new(b"Zinh");
/// The script of unassigned and private use characters.
pub const UNKNOWN: Tag = Tag::new(b"Zzzz");

pub(crate) const DFLT_SCRIPT: Tag = Tag::new(b"DFLT");

pub(crate) static SCRIPT_EXCEPTIONS: &[(Tag, Tag)] = &[
    (Tag::new(b"Hira"), Tag::new(b"kana")),
    (Tag::new(b"Hrkt"), Tag::new(b"kana")),
    (Tag::new(b"Laoo"), Tag::new(b"lao ")),
    (Tag::new(b"Nkoo"), Tag::new(b"nko ")),
    (Tag::new(b"Vaii"), Tag::new(b"vai ")),
    (Tag::new(b"Yiii"), Tag::new(b"yi  ")),
    (Tag::new(b"Zinh"), DFLT_SCRIPT),
    (Tag::new(b"Zmth"), Tag::new(b"math")),
    (Tag::new(b"Zyyy"), DFLT_SCRIPT),
    (UNKNOWN, DFLT_SCRIPT),
];

pub(crate) static NEW_SCRIPT_TAGS: &[(Tag, Tag)] = &[
    (Tag::new(b"Beng"), Tag::new(b"bng2")),
    (Tag::new(b"Deva"), Tag::new(b"dev2")),
    (Tag::new(b"Gujr"), Tag::new(b"gjr2")),
    (Tag::new(b"Guru"), Tag::new(b"gur2")),
    (Tag::new(b"Knda"), Tag::new(b"knd2")),
    (Tag::new(b"Mlym"), Tag::new(b"mlm2")),
    (Tag::new(b"Mymr"), Tag::new(b"mym2")),
    (Tag::new(b"Orya"), Tag::new(b"ory2")),
    (Tag::new(b"Taml"), Tag::new(b"tml2")),
    (Tag::new(b"Telu"), Tag::new(b"tel2")),
];

/// Scripts written right-to-left.
pub(crate) static RTL_SCRIPTS: &[Tag] = &[
    Tag::new(b"Adlm"), // Adlam
    Tag::new(b"Arab"), // Arabic
    Tag::new(b"Armi"), // Imperial Aramaic
    Tag::new(b"Avst"), // Avestan
    Tag::new(b"Chrs"), // Chorasmian
    Tag::new(b"Cprt"), // Cypriot
    Tag::new(b"Elym"), // Elymaic
    Tag::new(b"Gara"), // Garay
    Tag::new(b"Hatr"), // Hatran
    Tag::new(b"Hebr"), // Hebrew
    Tag::new(b"Hung"), // Old Hungarian
    Tag::new(b"Khar"), // Kharoshthi
    Tag::new(b"Lydi"), // Lydian
    Tag::new(b"Mand"), // Mandaic
    Tag::new(b"Mani"), // Manichaean
    Tag::new(b"Mend"), // Mende Kikakui
    Tag::new(b"Merc"), // Meroitic Cursive
    Tag::new(b"Mero"), // Meroitic Hieroglyphs
    Tag::new(b"Narb"), // Old North Arabian
    Tag::new(b"Nbat"), // Nabataean
    Tag::new(b"Nkoo"), // Nko
    Tag::new(b"Orkh"), // Old Turkic
    Tag::new(b"Ougr"), // Old Uyghur
    Tag::new(b"Palm"), // Palmyrene
    Tag::new(b"Phli"), // Inscriptional Pahlavi
    Tag::new(b"Phlp"), // Psalter Pahlavi
    Tag::new(b"Phnx"), // Phoenician
    Tag::new(b"Prti"), // Inscriptional Parthian
    Tag::new(b"Rohg"), // Hanifi Rohingya
    Tag::new(b"Samr"), // Samaritan
    Tag::new(b"Sarb"), // Old South Arabian
    Tag::new(b"Sogd"), // Sogdian
    Tag::new(b"Sogo"), // Old Sogdian
    Tag::new(b"Syrc"), // Syriac
    Tag::new(b"Thaa"), // Thaana
    Tag::new(b"Yezi"), // Yezidi
];

/// Horizontal direction of a script run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

impl Direction {
    /// The direction a run of `script` is shaped in.
    ///
    /// Scripts not known to be right-to-left, including unknown ones, are
    /// left-to-right.
    pub fn for_script(script: Tag) -> Self {
        if RTL_SCRIPTS.binary_search(&script).is_ok() {
            Direction::RightToLeft
        } else {
            Direction::LeftToRight
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Direction::RightToLeft
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Direction::LeftToRight => "LTR",
            Direction::RightToLeft => "RTL",
        })
    }
}

/// Returns true for the scripts that join a run of any other script.
pub fn is_common_or_inherited(script: Tag) -> bool {
    script == COMMON || script == INHERITED
}

/// The script a run containing both scripts would be shaped with.
///
/// Returns `None` when the two scripts can never share a run.
pub fn run_script(first: Tag, second: Tag) -> Option<Tag> {
    if first == second {
        Some(first)
    } else if is_common_or_inherited(first) {
        Some(second)
    } else if is_common_or_inherited(second) {
        Some(first)
    } else {
        None
    }
}

/// Returns the OpenType script tags for a Unicode script code.
///
/// Scripts with a second Indic shaping model return the new tag first,
/// followed by the old one.
pub fn ot_tags(script: Tag) -> Vec<Tag> {
    if let Ok(idx) = SCRIPT_EXCEPTIONS.binary_search_by(|(code, _)| code.cmp(&script)) {
        return vec![SCRIPT_EXCEPTIONS[idx].1];
    }
    let mut bytes = script.to_be_bytes();
    bytes[0] = bytes[0].to_ascii_lowercase();
    let old_tag = Tag::new(&bytes);
    match NEW_SCRIPT_TAGS.binary_search_by(|(code, _)| code.cmp(&script)) {
        Ok(idx) => vec![NEW_SCRIPT_TAGS[idx].1, old_tag],
        Err(_) => vec![old_tag],
    }
}

/// Returns the Unicode script extensions of a character as script codes.
///
/// Characters with no script, such as private use characters, are
/// [`UNKNOWN`].
pub fn script_extensions(ch: char) -> BTreeSet<Tag> {
    let extension = ch.script_extension();
    if extension.is_common() {
        return BTreeSet::from([COMMON]);
    }
    if extension.is_inherited() {
        return BTreeSet::from([INHERITED]);
    }
    let scripts = extension
        .iter()
        .filter_map(|script| Tag::new_checked(script.short_name().as_bytes()).ok())
        .collect::<BTreeSet<_>>();
    if scripts.is_empty() {
        BTreeSet::from([UNKNOWN])
    } else {
        scripts
    }
}
