//! Compiling font sources with an external compiler.

use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use crate::error::Error;

/// The name of the compiler executable when no path is given.
pub const DEFAULT_FONTC: &str = "fontc";

/// The output of a compiler run.
#[derive(Clone, Debug, Default)]
pub struct CompiledFont {
    pub binary: Vec<u8>,
    /// The feature source the compiler generated, if it was asked to keep it.
    pub debug_features: Option<String>,
}

/// Something that turns a font source into a binary font.
pub trait FontCompiler {
    fn compile(&self, source: &norad::Font) -> Result<CompiledFont, Error>;
}

/// Runs the `fontc` executable.
#[derive(Clone, Debug)]
pub struct Fontc {
    program: PathBuf,
    emit_debug: bool,
}

impl Default for Fontc {
    fn default() -> Self {
        Self::new(DEFAULT_FONTC)
    }
}

impl Fontc {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            emit_debug: false,
        }
    }

    /// Ask the compiler to write the feature files it generates.
    pub fn with_debug_features(mut self, emit_debug: bool) -> Self {
        self.emit_debug = emit_debug;
        self
    }

    fn command(&self, source: &Path, build_dir: &Path, output: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.arg("--no-production-names");
        if self.emit_debug {
            command.arg("--emit-debug");
        }
        command
            .arg("--build-dir")
            .arg(build_dir)
            .arg("--output-file")
            .arg(output)
            .arg(source)
            .stdout(Stdio::null());
        command
    }
}

impl FontCompiler for Fontc {
    fn compile(&self, source: &norad::Font) -> Result<CompiledFont, Error> {
        let temp_dir = tempfile::tempdir().map_err(|e| Error::io(std::env::temp_dir(), e))?;
        let source_path = temp_dir.path().join("source.ufo");
        let build_dir = temp_dir.path().join("build");
        let output = temp_dir.path().join("font.ttf");
        source
            .save(&source_path)
            .map_err(|source| Error::SourceWrite {
                path: source_path.clone(),
                source,
            })?;

        let mut command = self.command(&source_path, &build_dir, &output);
        log::debug!("running {command:?}");
        let result = command.output().map_err(|source| Error::CompilerSpawn {
            program: self.program.clone(),
            source,
        })?;
        if !result.status.success() {
            return Err(Error::CompilerFailed {
                status: result.status,
                stderr: String::from_utf8_lossy(&result.stderr).into_owned(),
            });
        }

        let binary = fs::read(&output).map_err(|e| Error::io(&output, e))?;
        let debug_features = if self.emit_debug {
            debug_features(&build_dir.join("debug"))?
        } else {
            None
        };
        Ok(CompiledFont {
            binary,
            debug_features,
        })
    }
}

/// Concatenates the `.fea` files in a directory in path order.
///
/// Returns `None` if there are none.
fn debug_features(dir: &Path) -> Result<Option<String>, Error> {
    if !dir.is_dir() {
        return Ok(None);
    }
    let mut paths = fs::read_dir(dir)
        .map_err(|e| Error::io(dir, e))?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "fea"))
        .collect::<Vec<_>>();
    if paths.is_empty() {
        return Ok(None);
    }
    paths.sort();
    let mut text = String::new();
    for path in paths {
        text.push_str(&fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?);
    }
    Ok(Some(text))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn command_line() {
        let fontc = Fontc::new("/opt/fontc").with_debug_features(true);
        let command = fontc.command(
            Path::new("in.ufo"),
            Path::new("build"),
            Path::new("out.ttf"),
        );
        assert_eq!(command.get_program(), "/opt/fontc");
        let args = command
            .get_args()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect::<Vec<_>>();
        assert_eq!(
            args,
            [
                "--no-production-names",
                "--emit-debug",
                "--build-dir",
                "build",
                "--output-file",
                "out.ttf",
                "in.ufo"
            ]
        );
        let args = Fontc::default()
            .command(Path::new("in.ufo"), Path::new("b"), Path::new("o"))
            .get_args()
            .count();
        assert_eq!(args, 6);
    }

    #[test]
    fn missing_compiler() {
        let fontc = Fontc::new("/nonexistent/fontc");
        let err = fontc.compile(&norad::Font::new()).unwrap_err();
        assert!(matches!(err, Error::CompilerSpawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn failing_compiler() {
        let err = Fontc::new("false")
            .compile(&norad::Font::new())
            .unwrap_err();
        assert!(matches!(err, Error::CompilerFailed { .. }));
        assert!(!err.is_run_fatal());
    }

    #[test]
    fn debug_features_are_concatenated_in_order() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(debug_features(&dir.path().join("missing")).unwrap(), None);
        assert_eq!(debug_features(dir.path()).unwrap(), None);

        fs::write(dir.path().join("b.fea"), "# kern\n").unwrap();
        fs::write(dir.path().join("a.fea"), "# marks\n").unwrap();
        fs::write(dir.path().join("glyph_order.txt"), "A\n").unwrap();
        assert_eq!(
            debug_features(dir.path()).unwrap().as_deref(),
            Some("# marks\n# kern\n")
        );
    }
}
