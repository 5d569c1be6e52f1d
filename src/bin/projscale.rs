use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use projscale::{ExclusionRule, PassConfig, PassKind, ProjectInfo, ScaleFactor};
use rayon::prelude::*;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "projscale", version, about = "Rescale Camtasia project geometry or timing")]
struct Cli {
    /// More log output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scale canvas, positions, sizes and crops.
    Xyscale(ScaleArgs),
    /// Scale timeline placement and durations. Audio keeps its duration by default.
    Timescale(TimescaleArgs),
    /// Print a summary of a project.
    Info(InfoArgs),
}

#[derive(Parser, Debug)]
struct ScaleArgs {
    /// Input project file(s).
    #[arg(long = "in", required = true, num_args = 1..)]
    in_paths: Vec<PathBuf>,

    /// Scale in percent (150 = 1.5x).
    #[arg(long)]
    scale: f64,

    /// Output path (single input only). Defaults to a name derived from the input.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Leave a key untouched: `key` everywhere or `ancestor.key` below an ancestor.
    #[arg(long = "exclude", value_name = "RULE")]
    exclude: Vec<ExclusionRule>,

    /// Fail on unsupported versions and structural problems.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[derive(Parser, Debug)]
struct TimescaleArgs {
    #[command(flatten)]
    common: ScaleArgs,

    /// Scale audio durations too.
    #[arg(long, default_value_t = false)]
    scale_audio_duration: bool,
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Input project file.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Xyscale(args) => cmd_scale(PassKind::Spatial, args, true),
        Command::Timescale(args) => {
            cmd_scale(PassKind::Temporal, args.common, !args.scale_audio_duration)
        }
        Command::Info(args) => cmd_info(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_scale(
    kind: PassKind,
    args: ScaleArgs,
    preserve_audio_duration: bool,
) -> anyhow::Result<()> {
    let factor = ScaleFactor::from_percent(args.scale).context("invalid --scale")?;
    if args.out.is_some() && args.in_paths.len() > 1 {
        anyhow::bail!("--out can only be used with a single --in file");
    }

    let config = args
        .exclude
        .into_iter()
        .fold(PassConfig::new(kind, factor), PassConfig::with_exclusion)
        .with_strict(args.strict)
        .with_preserve_audio_duration(preserve_audio_duration);

    let jobs: Vec<(PathBuf, PathBuf)> = args
        .in_paths
        .iter()
        .map(|input| {
            let output = args
                .out
                .clone()
                .unwrap_or_else(|| projscale::derive_output_path(input, kind, args.scale));
            (input.clone(), output)
        })
        .collect();

    let failures: Vec<anyhow::Error> = jobs
        .par_iter()
        .filter_map(|(input, output)| scale_one(input, output, &config).err())
        .collect();

    for err in &failures {
        eprintln!("error: {err:#}");
    }
    if !failures.is_empty() {
        anyhow::bail!("{} of {} project(s) failed", failures.len(), jobs.len());
    }
    Ok(())
}

fn scale_one(input: &Path, output: &Path, config: &PassConfig) -> anyhow::Result<()> {
    if !projscale::has_project_extension(input) {
        tracing::warn!(input = %input.display(), "input does not have a .tscproj extension");
    }
    let out = projscale::transform_file(input, output, config)
        .with_context(|| format!("scale '{}'", input.display()))?;
    eprintln!("wrote {} ({})", output.display(), out.report);
    Ok(())
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.in_path)
        .with_context(|| format!("read '{}'", args.in_path.display()))?;
    let decoded = projscale::decode(&bytes)
        .with_context(|| format!("decode '{}'", args.in_path.display()))?;

    let info = ProjectInfo::from_tree(&decoded.tree);
    println!("{info}");
    for w in projscale::check_structure(&decoded.tree) {
        eprintln!("warning: {w}");
    }
    Ok(())
}
