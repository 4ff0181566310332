use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use framereel::{
    Canvas, DriverOpts, Font, FontMetrics, FrameEncoder as _, FrameExporter, Mp4Opts, PngEncoder,
    RunConfig, VisualizationDriver,
    demos::{DemoKind, glyph_sheet::glyph_sheet, showcase::showcase_canvas},
};
use sha2::Digest as _;
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "framereel", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the drawing-primitives showcase as a single PNG.
    Showcase(ShowcaseArgs),
    /// Render every glyph of a font table as a PNG sheet.
    Glyphs(GlyphsArgs),
    /// Drive a built-in demo visualizer and export its frames.
    Run(RunArgs),
}

#[derive(Parser, Debug)]
struct ShowcaseArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Integer upscale factor.
    #[arg(long, default_value_t = 1)]
    scale: u32,

    /// Print the SHA-256 of the written PNG.
    #[arg(long)]
    sha256: bool,
}

#[derive(Parser, Debug)]
struct GlyphsArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Integer upscale factor.
    #[arg(long, default_value_t = 4)]
    scale: u32,

    /// Glyphs per row.
    #[arg(long, default_value_t = 16)]
    columns: u32,

    /// Glyph table JSON to render instead of the bundled one.
    #[arg(long)]
    font: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Demo to run.
    #[arg(value_parser = parse_demo)]
    demo: DemoKind,

    /// Puzzle input for demos that read one.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Frame directory (defaults to `<output_root>/<demo>`); wiped before the run.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Run config JSON; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    scale: Option<u32>,

    /// Fail if the visualizer needs more frames than this.
    #[arg(long)]
    frame_limit: Option<u64>,

    /// Also assemble the frames into this MP4 (requires `ffmpeg` on PATH).
    #[arg(long)]
    mp4: Option<PathBuf>,

    #[arg(long)]
    fps: Option<u32>,
}

fn parse_demo(s: &str) -> Result<DemoKind, String> {
    s.parse().map_err(|e: framereel::VisError| e.to_string())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Showcase(args) => cmd_showcase(args),
        Command::Glyphs(args) => cmd_glyphs(args),
        Command::Run(args) => cmd_run(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_showcase(args: ShowcaseArgs) -> anyhow::Result<()> {
    let canvas = showcase_canvas(Arc::new(Font::builtin()?));
    let bytes = write_png(&canvas, &args.out, args.scale)?;
    if args.sha256 {
        println!("{}", sha256_hex(&bytes));
    }
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_glyphs(args: GlyphsArgs) -> anyhow::Result<()> {
    let font = match &args.font {
        Some(path) => Font::from_path(path, FontMetrics::default())?,
        None => Font::builtin()?,
    };
    let sheet = glyph_sheet(Arc::new(font), args.columns);
    write_png(&sheet, &args.out, args.scale)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let mut cfg = match &args.config {
        Some(path) => RunConfig::from_json_file(path)?,
        None => RunConfig::default(),
    };
    if let Some(scale) = args.scale {
        cfg.scale = scale;
    }
    if args.frame_limit.is_some() {
        cfg.frame_limit = args.frame_limit;
    }
    if args.mp4.is_some() || args.fps.is_some() {
        let mut mp4 = cfg.mp4.take().unwrap_or_default();
        if let Some(fps) = args.fps {
            mp4.fps = fps;
        }
        cfg.mp4 = Some(mp4);
    }
    cfg.validate()?;

    let input = match &args.input {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("read input '{}'", path.display()))?,
        ),
        None => None,
    };
    let out_dir = args
        .out_dir
        .clone()
        .unwrap_or_else(|| cfg.output_root.join(args.demo.name()));

    let mut visualizer = args.demo.build(input.as_deref())?;
    let exporter = FrameExporter::new(&out_dir, cfg.scale, PngEncoder::new(cfg.png_compression))?;
    let opts: DriverOpts = cfg.driver_opts();
    let mut driver = VisualizationDriver::new(exporter, cfg.load_font()?, opts);
    let stats = driver.run(visualizer.as_mut())?;
    eprintln!(
        "wrote {} frames ({}x{}) to {}",
        stats.frames,
        stats.dimensions.width,
        stats.dimensions.height,
        stats.output_dir.display()
    );

    if let Some(mp4) = &cfg.mp4 {
        let out = args
            .mp4
            .clone()
            .unwrap_or_else(|| out_dir.with_extension("mp4"));
        assemble(&stats.output_dir, &out, mp4)?;
    }
    Ok(())
}

fn assemble(frames_dir: &Path, out: &Path, opts: &Mp4Opts) -> anyhow::Result<()> {
    framereel::assemble_mp4(frames_dir, "png", out, opts)
        .with_context(|| format!("assemble '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

/// Encode `canvas` (upscaled by `scale`) and write it to `out`. Returns the PNG bytes.
fn write_png(canvas: &Canvas, out: &Path, scale: u32) -> anyhow::Result<Vec<u8>> {
    let (pixels, size) =
        framereel::upscale_nearest(canvas.raw_pixel_data(), canvas.dimensions(), scale)?;
    let bytes = PngEncoder::default().encode(&pixels, size.width, size.height)?;

    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(out, &bytes).with_context(|| format!("write png '{}'", out.display()))?;
    Ok(bytes)
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
