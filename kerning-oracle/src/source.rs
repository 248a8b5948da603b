//! Loading font sources and preparing them for a kerning-only compile.

use std::{
    fs,
    path::{Path, PathBuf},
};

use norad::Font;
use regex::Regex;

use crate::{error::Error, kerning::KerningIndex};

/// Features that position glyphs and would add to or hide the kerning.
pub const POSITIONING_FEATURES: [&str; 5] = ["kern", "mark", "mkmk", "curs", "dist"];

/// How deeply feature files may include each other.
pub const MAX_INCLUDE_DEPTH: usize = 50;

/// Loads a UFO source.
pub fn load(path: &Path) -> Result<Font, Error> {
    if path.extension().and_then(|ext| ext.to_str()) != Some("ufo") {
        return Err(Error::UnrecognizedFormat(path.to_owned()));
    }
    log::info!("loading '{}'", path.display());
    Font::load(path).map_err(|source| Error::SourceLoad {
        path: path.to_owned(),
        source,
    })
}

/// The directory `include` statements in a source's features are relative
/// to: the directory containing the UFO.
pub fn include_dir(path: &Path) -> &Path {
    path.parent().unwrap_or(Path::new("."))
}

/// The groups and kerning of a source.
pub fn kerning_index(font: &Font) -> KerningIndex {
    let groups = font
        .groups
        .iter()
        .map(|(name, members)| {
            (
                name.to_string(),
                members.iter().map(|member| member.to_string()).collect(),
            )
        })
        .collect();
    let kerning = font
        .kerning
        .iter()
        .map(|(first, row)| {
            (
                first.to_string(),
                row.iter()
                    .map(|(second, value)| (second.to_string(), *value))
                    .collect(),
            )
        })
        .collect();
    KerningIndex::new(groups, kerning)
}

/// Strips a source down to what kerning needs.
///
/// Outlines, components and anchors are removed from every glyph in every
/// layer, so the compiler produces no mark positioning and runs quickly.
/// Feature includes are inlined and the positioning features are removed,
/// leaving kerning generated from the source's kerning data as the only
/// positioning in the compiled font.
pub fn restrict(font: &mut Font, include_dir: &Path) -> Result<(), Error> {
    let mut cleared = 0;
    for layer in font.layers.iter_mut() {
        for glyph in layer.iter_mut() {
            glyph.contours.clear();
            glyph.components.clear();
            glyph.anchors.clear();
            cleared += 1;
        }
    }
    log::debug!("cleared {cleared} glyphs");

    let features = resolve_includes(&font.features, include_dir, 0)?;
    font.features = strip_features(&features, &POSITIONING_FEATURES)?;
    Ok(())
}

/// Replaces `include(path);` statements with the contents of the files they
/// name, recursively.
pub fn resolve_includes(text: &str, include_dir: &Path, depth: usize) -> Result<String, Error> {
    let include =
        Regex::new(r"(?m)^(?P<prefix>[^#\n]*?)\binclude\s*\(\s*(?P<path>[^)]+?)\s*\)\s*;")?;
    if !include.is_match(text) {
        return Ok(text.to_string());
    }
    let mut result = String::with_capacity(text.len());
    let mut last = 0;
    for captures in include.captures_iter(text) {
        let (Some(statement), Some(prefix), Some(path)) = (
            captures.get(0),
            captures.name("prefix"),
            captures.name("path"),
        ) else {
            continue;
        };
        let path = include_path(include_dir, path.as_str());
        if depth >= MAX_INCLUDE_DEPTH {
            return Err(Error::IncludeDepth {
                path,
                limit: MAX_INCLUDE_DEPTH,
            });
        }
        let included = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        log::debug!("including '{}'", path.display());
        result.push_str(&text[last..statement.start()]);
        result.push_str(prefix.as_str());
        result.push_str(&resolve_includes(&included, include_dir, depth + 1)?);
        last = statement.end();
    }
    result.push_str(&text[last..]);
    Ok(result)
}

fn include_path(include_dir: &Path, path: &str) -> PathBuf {
    let path = Path::new(path.trim_matches('"'));
    if path.is_absolute() {
        path.to_owned()
    } else {
        include_dir.join(path)
    }
}

/// Removes the top level blocks of the named features.
///
/// A block ends at the brace that balances its opening brace, ignoring
/// braces in comments and strings, followed by the feature's tag.
pub fn strip_features(text: &str, tags: &[&str]) -> Result<String, Error> {
    let mut text = text.to_string();
    for tag in tags {
        let escaped = regex::escape(tag);
        let open = Regex::new(&format!(r"\bfeature\s+{escaped}\s*(?:useExtension\s*)?\{{"))?;
        let close = Regex::new(&format!(r"^\s*{escaped}\s*;"))?;
        let mut stripped = String::with_capacity(text.len());
        let mut kept = 0;
        let mut search = 0;
        while let Some(block) = open.find_at(&text, search) {
            search = block.end();
            let line_start = text[..block.start()].rfind('\n').map_or(0, |idx| idx + 1);
            if text[line_start..block.start()].contains('#') {
                continue;
            }
            let Some(body_end) = closing_brace(&text[block.end()..]).map(|len| block.end() + len)
            else {
                log::warn!("feature '{tag}' is not closed, keeping it");
                break;
            };
            let Some(label) = close.find(&text[body_end..]) else {
                continue;
            };
            stripped.push_str(&text[kept..block.start()]);
            kept = body_end + label.end();
            search = kept;
            log::debug!("removed feature '{tag}'");
        }
        if kept > 0 {
            stripped.push_str(&text[kept..]);
            text = stripped;
        }
    }
    Ok(text)
}

/// Returns the length of `body` through the brace that closes the block
/// `body` starts inside of.
fn closing_brace(body: &str) -> Option<usize> {
    let mut depth = 1usize;
    let mut chars = body.char_indices();
    while let Some((idx, ch)) = chars.next() {
        match ch {
            '#' => {
                chars.by_ref().find(|(_, ch)| *ch == '\n');
            }
            '"' => {
                chars.by_ref().find(|(_, ch)| *ch == '"');
            }
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(idx + 1);
                }
            }
            _ => (),
        }
    }
    None
}
