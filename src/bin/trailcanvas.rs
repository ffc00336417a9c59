use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use trailcanvas::{FrameIndex, FrameRGBA, FrameRange, PointerScript, TrailConfig, TrailSession};

#[derive(Parser, Debug)]
#[command(name = "trailcanvas", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a pointer script and write one frame as a PNG.
    Frame(FrameArgs),
    /// Play a pointer script and write every frame as a numbered PNG.
    Frames(FramesArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Trail config JSON (defaults when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pointer script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Trail config JSON (defaults when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pointer script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn load(config: Option<&Path>, script: &Path) -> anyhow::Result<TrailSession> {
    let config = match config {
        Some(p) => TrailConfig::from_path(p)?,
        None => TrailConfig::default(),
    };
    let script = PointerScript::from_path(script)?;
    Ok(TrailSession::new(&config, script)?)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut sess = load(args.config.as_deref(), &args.script)?;
    if args.frame >= sess.script().duration {
        anyhow::bail!(
            "frame {} is past the end of the script ({} frames)",
            args.frame,
            sess.script().duration
        );
    }

    let range = FrameRange::new(FrameIndex(args.frame), FrameIndex(args.frame + 1))?;
    let out = args.out.clone();
    sess.render_range(range, |_, frame| {
        write_png(&out, frame)?;
        Ok(ControlFlow::Break(()))
    })?;

    tracing::info!(path = %args.out.display(), "wrote frame");
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let mut sess = load(args.config.as_deref(), &args.script)?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let range = sess.full_range();
    let out_dir = args.out_dir.clone();
    let written = sess.render_range(range, |idx, frame| {
        write_png(&out_dir.join(format!("frame_{:05}.png", idx.0)), frame)?;
        Ok(ControlFlow::Continue(()))
    })?;

    tracing::info!(written, dir = %args.out_dir.display(), "wrote frames");
    Ok(())
}

fn write_png(path: &Path, frame: &FrameRGBA) -> trailcanvas::TrailResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let straight = frame.clone().into_straight();
    image::save_buffer_with_format(
        path,
        &straight.data,
        straight.width,
        straight.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}
