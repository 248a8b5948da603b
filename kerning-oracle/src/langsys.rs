//! The language systems declared by a font's layout tables.

use std::collections::{BTreeMap, BTreeSet};

use skrifa::{
    raw::{tables::layout::ScriptList, FontRef, ReadError, TableProvider},
    Tag,
};

use crate::{error::Error, language_tags, script};

/// The language a run is shaped with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Language {
    /// No explicit language; the script's default language system.
    Default,
    /// A BCP 47 language tag.
    Tag(&'static str),
}

impl Language {
    /// The BCP 47 tag, or `None` for the default language.
    pub fn bcp47(self) -> Option<&'static str> {
        match self {
            Language::Default => None,
            Language::Tag(tag) => Some(tag),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.bcp47().unwrap_or("default"))
    }
}

/// Map from OpenType script tag to the languages declared for it.
///
/// Every declared script includes [`Language::Default`], and so does every
/// script that was not declared at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LanguageSystems {
    by_script: BTreeMap<Tag, BTreeSet<Language>>,
}

impl LanguageSystems {
    /// Collect the language systems declared in GSUB and GPOS.
    pub fn new(font: &FontRef) -> Result<Self, ReadError> {
        let mut systems = Self::default();
        match font.gsub() {
            Ok(gsub) => systems.add_script_list(&gsub.script_list()?)?,
            Err(ReadError::TableIsMissing(_)) => (),
            Err(e) => return Err(e),
        }
        match font.gpos() {
            Ok(gpos) => systems.add_script_list(&gpos.script_list()?)?,
            Err(ReadError::TableIsMissing(_)) => (),
            Err(e) => return Err(e),
        }
        Ok(systems)
    }

    fn add_script_list(&mut self, script_list: &ScriptList) -> Result<(), ReadError> {
        for record in script_list.script_records() {
            let script = record.script(script_list.offset_data())?;
            let languages = self
                .by_script
                .entry(record.script_tag())
                .or_insert_with(|| BTreeSet::from([Language::Default]));
            for lang_sys in script.lang_sys_records() {
                let tag = lang_sys.lang_sys_tag();
                let language = match language_tags::bcp47_for_language_system(tag) {
                    Some(bcp47) => Language::Tag(bcp47),
                    None => {
                        log::debug!("language system '{tag}' has no BCP 47 equivalent");
                        Language::Default
                    }
                };
                languages.insert(language);
            }
        }
        Ok(())
    }

    /// The languages declared for an OpenType script tag.
    pub fn languages_for_tag(&self, ot_script: Tag) -> BTreeSet<Language> {
        self.by_script
            .get(&ot_script)
            .cloned()
            .unwrap_or_else(|| BTreeSet::from([Language::Default]))
    }

    /// The languages to test for a Unicode script, across all of its
    /// OpenType tags.
    pub fn languages_for_script(&self, script: Tag) -> Result<BTreeSet<Language>, Error> {
        let languages = script::ot_tags(script)
            .into_iter()
            .flat_map(|tag| self.languages_for_tag(tag))
            .collect::<BTreeSet<_>>();
        if languages.is_empty() {
            return Err(Error::NoLanguageSystems(script));
        }
        Ok(languages)
    }

    /// The declared OpenType script tags.
    pub fn scripts(&self) -> impl Iterator<Item = Tag> + '_ {
        self.by_script.keys().copied()
    }
}
