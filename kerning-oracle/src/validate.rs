//! Checking every kerning pair of a font.

use std::{
    ffi::OsStr,
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    sync::atomic::{AtomicUsize, Ordering},
};

use rayon::prelude::*;

use crate::{
    compile::FontCompiler,
    context::FontContext,
    error::Error,
    isolation::Filler,
    itemize::{self, TestVector},
    kerning::KerningIndex,
    oracle::{Mismatch, Oracle},
    shape::{HarfBuzzFactory, ShaperFactory},
    source,
};

/// How often parallel comparisons report progress.
const PROGRESS_INTERVAL: usize = 1000;

/// The exit status of a failed run.
pub const EXIT_FAILURE: i32 = 1;

/// Settings for one validation run.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValidateOptions {
    /// Stop at the first mismatch.
    pub stepwise: bool,
    /// Round source values with the OpenType rounding rule.
    pub round: bool,
    /// A codepoint placed between the glyphs of each pair.
    pub filler: Option<Filler>,
    /// Print progress to stderr.
    pub progress: bool,
}

/// Where the files produced for each source are written.
#[derive(Clone, Debug, Default)]
pub struct Outputs {
    /// Directory for the compiled fonts used for shaping.
    pub font_dir: Option<PathBuf>,
    /// Directory for mismatch reports; stdout when unset.
    pub report_dir: Option<PathBuf>,
    /// File for the feature source the compiler saw.
    pub debug_feature_file: Option<PathBuf>,
}

/// The outcome of checking one font.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    /// The number of test vectors enumerated.
    pub vectors: usize,
    /// Mismatches in enumeration order.
    pub mismatches: Vec<Mismatch>,
    /// True if checking stopped at a mismatch before every vector was shaped.
    pub stopped_early: bool,
}

/// Compare every test vector of a font, writing one line per mismatch to
/// `sink`.
///
/// In stepwise mode vectors are shaped one after the other and checking
/// stops at the first mismatch. Otherwise they are shaped in parallel with
/// one engine per worker, and mismatches are reported in enumeration order.
///
/// If any vector fails, the error of the first failing vector is returned.
pub fn validate<F: ShaperFactory>(
    context: &FontContext,
    kerning: &KerningIndex,
    factory: &F,
    options: &ValidateOptions,
    sink: &mut dyn Write,
) -> Result<Summary, Error> {
    let vectors = itemize::test_vectors(context, kerning)?;
    let oracle = Oracle::new(context, kerning)
        .with_rounding(options.round)
        .with_filler(options.filler);
    let mut summary = Summary {
        vectors: vectors.len(),
        ..Default::default()
    };

    if options.stepwise {
        let mut engine = factory.create()?;
        for (i, vector) in vectors.iter().enumerate() {
            if let Some(mismatch) = oracle.check(&mut engine, vector)? {
                writeln!(sink, "{mismatch}").map_err(Error::Report)?;
                summary.mismatches.push(mismatch);
                summary.stopped_early = i + 1 < vectors.len();
                break;
            }
            report_progress(options.progress, i + 1, vectors.len());
        }
    } else {
        // fail before spawning workers if the font is unusable
        drop(factory.create()?);
        for result in compare_parallel(&oracle, factory, &vectors, options.progress) {
            if let Some(mismatch) = result? {
                writeln!(sink, "{mismatch}").map_err(Error::Report)?;
                summary.mismatches.push(mismatch);
            }
        }
    }
    if options.progress && !vectors.is_empty() {
        eprintln!();
    }
    sink.flush().map_err(Error::Report)?;
    log::debug!(
        "{} of {} vectors mismatched",
        summary.mismatches.len(),
        summary.vectors
    );
    Ok(summary)
}

fn compare_parallel<F: ShaperFactory>(
    oracle: &Oracle,
    factory: &F,
    vectors: &[TestVector],
    progress: bool,
) -> Vec<Result<Option<Mismatch>, Error>> {
    let done = AtomicUsize::new(0);
    vectors
        .par_iter()
        .map_init(
            || factory.create(),
            |engine, vector| {
                let result = match engine {
                    Ok(engine) => oracle.check(engine, vector),
                    Err(e) => Err(Error::Shaping(e.to_string())),
                };
                let count = done.fetch_add(1, Ordering::Relaxed) + 1;
                report_progress(progress, count, vectors.len());
                result
            },
        )
        .collect()
}

fn report_progress(enabled: bool, done: usize, total: usize) {
    if enabled && (done % PROGRESS_INTERVAL == 0 || done == total) {
        eprint!("\rcompared {done}/{total}");
    }
}

/// `<dir>/<stem>.<extension>`, keeping any dots in the stem.
fn output_path(dir: &Path, stem: &OsStr, extension: &str) -> PathBuf {
    let mut name = stem.to_os_string();
    name.push(".");
    name.push(extension);
    dir.join(name)
}

/// Compile one source and check its kerning with HarfBuzz.
///
/// This loads and restricts the source, compiles it, writes the requested
/// outputs and validates the compiled font. Mismatches go to a report file
/// in [`Outputs::report_dir`] or to stdout.
pub fn check_source<C: FontCompiler>(
    path: &Path,
    compiler: &C,
    options: &ValidateOptions,
    outputs: &Outputs,
) -> Result<Summary, Error> {
    let mut font = source::load(path)?;
    let kerning = source::kerning_index(&font);
    source::restrict(&mut font, source::include_dir(path))?;

    log::info!("compiling '{}'", path.display());
    let compiled = compiler.compile(&font)?;
    if options.progress {
        eprintln!("compiled '{}'", path.display());
    }
    if let Some(feature_file) = &outputs.debug_feature_file {
        let features = match &compiled.debug_features {
            Some(features) => features.as_str(),
            None => {
                log::warn!("compiler wrote no feature files, saving the source features");
                font.features.as_str()
            }
        };
        fs::write(feature_file, features).map_err(|e| Error::io(feature_file, e))?;
    }

    let context = FontContext::new(&compiled.binary)?;
    let stem = path.file_stem().unwrap_or(path.as_os_str());
    if let Some(dir) = &outputs.font_dir {
        let font_path = output_path(dir, stem, "ttf");
        fs::write(&font_path, context.shaping_font()).map_err(|e| Error::io(&font_path, e))?;
        if options.progress {
            eprintln!("saved '{}'", font_path.display());
        }
    }

    let factory = HarfBuzzFactory::new(context.shaping_font().clone(), context.codec());
    log::info!("checking '{}'", path.display());
    match &outputs.report_dir {
        Some(dir) => {
            let report_path = output_path(dir, stem, "txt");
            let file = File::create(&report_path).map_err(|e| Error::io(&report_path, e))?;
            validate(
                &context,
                &kerning,
                &factory,
                options,
                &mut BufWriter::new(file),
            )
        }
        None => validate(&context, &kerning, &factory, options, &mut io::stdout().lock()),
    }
}

/// Checks each source in turn and returns the process exit status.
///
/// Mismatches fail the run only with `stepwise`, which also stops it at the
/// first source that has one. Errors that affect every source stop the run
/// at once. Any other error is logged and fails the run after the remaining
/// sources are checked.
pub fn run_batch<'a>(
    sources: impl IntoIterator<Item = &'a Path>,
    stepwise: bool,
    mut check: impl FnMut(&Path) -> Result<Summary, Error>,
) -> i32 {
    let mut status = 0;
    for path in sources {
        match check(path) {
            Ok(summary) => {
                log::info!(
                    "'{}': {} pairs checked, {} mismatched",
                    path.display(),
                    summary.vectors,
                    summary.mismatches.len()
                );
                if stepwise && !summary.mismatches.is_empty() {
                    return EXIT_FAILURE;
                }
            }
            Err(e) if e.is_run_fatal() => {
                log::error!("'{}': {e}", path.display());
                return EXIT_FAILURE;
            }
            Err(e) => {
                log::error!("'{}': {e}", path.display());
                status = EXIT_FAILURE;
            }
        }
    }
    status
}
