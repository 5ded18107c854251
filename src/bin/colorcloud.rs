use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "colorcloud", version)]
struct Cli {
    /// Log at DEBUG instead of INFO.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the whole animation as a looping APNG.
    Animate(AnimateArgs),
    /// Render the whole animation into a sprite sheet PNG plus `.json` metadata.
    Sheet(SheetArgs),
    /// Render a single still frame as a PNG.
    Preview(PreviewArgs),
}

#[derive(Args, Debug)]
struct JobArgs {
    /// Job JSON file. Overrides `--preset`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Built-in job settings.
    #[arg(long, value_enum)]
    preset: Option<colorcloud::Preset>,

    /// Output path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Render chunk size (parallel mode only).
    #[arg(long, default_value_t = 32)]
    chunk_size: usize,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    #[command(flatten)]
    job: JobArgs,
    #[command(flatten)]
    render: RenderArgs,
}

#[derive(Parser, Debug)]
struct SheetArgs {
    #[command(flatten)]
    job: JobArgs,
    #[command(flatten)]
    render: RenderArgs,

    /// Override the number of tiles per sheet row.
    #[arg(long)]
    columns: Option<u32>,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    #[command(flatten)]
    job: JobArgs,

    /// Frame index (0-based). Defaults to a quarter of the way through the animation.
    #[arg(long)]
    frame: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.cmd {
        Command::Animate(args) => cmd_animate(args),
        Command::Sheet(args) => cmd_sheet(args),
        Command::Preview(args) => cmd_preview(args),
    }
}

fn load_job(
    args: &JobArgs,
    fallback: colorcloud::Preset,
) -> anyhow::Result<colorcloud::CloudJob> {
    if let Some(path) = &args.config {
        return colorcloud::CloudJob::from_path(path)
            .with_context(|| format!("load job '{}'", path.display()));
    }
    Ok(colorcloud::CloudJob::preset(args.preset.unwrap_or(fallback)))
}

fn session_opts(args: &RenderArgs) -> colorcloud::RenderSessionOpts {
    colorcloud::RenderSessionOpts {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    }
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    let job = load_job(&args.job, colorcloud::Preset::Animated)?;
    let stats = colorcloud::export_apng(&job, &args.job.out, session_opts(&args.render))?;
    eprintln!(
        "wrote {} ({} frames)",
        args.job.out.display(),
        stats.frames_total
    );
    Ok(())
}

fn cmd_sheet(args: SheetArgs) -> anyhow::Result<()> {
    let mut job = load_job(&args.job, colorcloud::Preset::Sheet)?;
    if let Some(columns) = args.columns {
        job.columns = columns;
    }
    let meta = colorcloud::export_sheet(&job, &args.job.out, session_opts(&args.render))?;
    eprintln!(
        "wrote {} ({}x{} tiles, {} frames, {}x{} px)",
        args.job.out.display(),
        meta.columns,
        meta.rows,
        meta.frame_count,
        meta.sheet_width,
        meta.sheet_height
    );
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let job = load_job(&args.job, colorcloud::Preset::Animated)?;
    let idx = colorcloud::export_preview(
        &job,
        &args.job.out,
        args.frame.map(colorcloud::FrameIndex),
    )?;
    eprintln!("wrote {} (frame {})", args.job.out.display(), idx.0);
    Ok(())
}
