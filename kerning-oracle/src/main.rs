use std::path::PathBuf;

use kerning_oracle::{check_source, run_batch, Filler, Fontc, Outputs, ValidateOptions};

/// Check that the kerning in fonts compiled from UFO sources matches the
/// sources when shaped with HarfBuzz.
///
/// Mismatches are printed one per line. Set RUST_LOG to control logging.
#[derive(clap::Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Stop at the first mismatch and exit with a non-zero status
    #[arg(long)]
    stepwise: bool,
    /// Print progress to stderr
    #[arg(long)]
    progress: bool,
    /// Round source kerning values before comparing
    #[arg(long)]
    round: bool,
    /// Write each compiled font, without GSUB, to this directory
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
    /// Write each mismatch report to this directory instead of stdout
    #[arg(long, value_name = "DIR")]
    log_output_dir: Option<PathBuf>,
    /// Write the feature source the compiler used to this file
    #[arg(long, value_name = "PATH")]
    debug_feature_file: Option<PathBuf>,
    /// Place a filler character between the glyphs of each pair
    #[arg(long)]
    filler: Option<FillerArg>,
    /// The fontc executable
    #[arg(long, env = "FONTC", default_value = kerning_oracle::compile::DEFAULT_FONTC)]
    fontc: PathBuf,
    /// Paths to UFO sources (may use glob syntax)
    #[arg(required = true)]
    sources: Vec<PathBuf>,
}

/// Specifies the character placed between the glyphs of a pair.
#[derive(clap::ValueEnum, Copy, Clone, Debug)]
enum FillerArg {
    /// U+200C ZERO WIDTH NON-JOINER
    Zwnj,
    /// U+0020 SPACE
    Space,
}

impl From<FillerArg> for Filler {
    fn from(arg: FillerArg) -> Self {
        match arg {
            FillerArg::Zwnj => Filler::ZeroWidthNonJoiner,
            FillerArg::Space => Filler::Space,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    use clap::Parser as _;
    let args = Args::parse_from(wild::args());

    let options = ValidateOptions {
        stepwise: args.stepwise,
        round: args.round,
        filler: args.filler.map(Filler::from),
        progress: args.progress,
    };
    let outputs = Outputs {
        font_dir: args.output_dir,
        report_dir: args.log_output_dir,
        debug_feature_file: args.debug_feature_file.clone(),
    };
    let compiler = Fontc::new(args.fontc).with_debug_features(args.debug_feature_file.is_some());

    let status = run_batch(args.sources.iter().map(PathBuf::as_path), options.stepwise, |path| {
        if args.progress {
            eprintln!("[{}]", path.display());
        }
        check_source(path, &compiler, &options, &outputs)
    });
    std::process::exit(status);
}
