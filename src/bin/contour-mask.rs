use std::{
    f64::consts::TAU,
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use contour_mask::{
    DocumentStyle, MaskFrame, MaskSession, Point, PointerEvent, PointerKind, SceneConfig, Size,
    Vec2, frame_document, rasterize_document, sample_contour, write_png,
};

#[derive(Parser, Debug)]
#[command(name = "contour-mask", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sample the silhouette and dump points and centroid as JSON.
    Sample(SampleArgs),
    /// Simulate a scripted cursor and write one SVG document per frame.
    Frames(FramesArgs),
    /// Simulate up to a frame and rasterize it as a PNG.
    Png(PngArgs),
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Scene JSON (stage, mask tuning, silhouette). Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stroke the deformed contour on top of the mask.
    #[arg(long)]
    debug: bool,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Number of points to sample (overrides the scene).
    #[arg(long)]
    points: Option<usize>,

    /// Output JSON path. Writes to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Number of frames to simulate.
    #[arg(long)]
    frames: u64,

    /// Simulated display refresh rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Directory receiving `frame_NNNNN.svg` files.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct PngArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Frame index (0-based) to rasterize.
    #[arg(long)]
    frame: u64,

    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Output width in pixels. Defaults to the stage width.
    #[arg(long)]
    width: Option<u32>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(serde::Serialize)]
struct SampleDump {
    count: usize,
    length: f64,
    centroid: Point,
    points: Vec<Point>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Png(args) => cmd_png(args),
    }
}

fn load_scene(args: &SceneArgs) -> anyhow::Result<SceneConfig> {
    let mut scene = match &args.config {
        Some(path) => SceneConfig::from_path(path)
            .with_context(|| format!("load scene '{}'", path.display()))?,
        None => SceneConfig::default(),
    };
    scene.mask.debug |= args.debug;
    Ok(scene)
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let mut scene = load_scene(&args.scene)?;
    if let Some(n) = args.points {
        scene.mask.points = n;
    }
    scene.validate()?;
    let silhouette = scene.silhouette()?;
    let samples = sample_contour(&silhouette, scene.mask.points)?;
    let dump = SampleDump {
        count: samples.len(),
        length: silhouette.length(),
        centroid: samples.centroid,
        points: samples.points,
    };

    match &args.out {
        Some(path) => {
            ensure_parent(path)?;
            let f = File::create(path)
                .with_context(|| format!("create '{}'", path.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &dump).context("write sample JSON")?;
            w.flush()?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            serde_json::to_writer_pretty(&mut w, &dump).context("write sample JSON")?;
            writeln!(w)?;
        }
    }
    Ok(())
}

/// Scripted pointer: enter, orbit the stage centre, then leave after 60% of the run.
struct OrbitScript {
    container: Size,
    center: Point,
    radius: f64,
    leave_at: u64,
}

impl OrbitScript {
    fn new(scene: &SceneConfig, frames: u64) -> Self {
        let container = Size::new(scene.stage.width, scene.stage.height);
        Self {
            container,
            center: Point::new(container.width * 0.5, container.height * 0.5),
            radius: container.width.min(container.height) * 0.3,
            leave_at: frames * 3 / 5,
        }
    }

    fn event(&self, frame: u64, time_ms: f64) -> Option<PointerEvent> {
        let kind = match frame {
            0 => PointerKind::Enter,
            f if f < self.leave_at => PointerKind::Move,
            f if f == self.leave_at => PointerKind::Leave,
            _ => return None,
        };
        // One revolution every two seconds.
        let theta = TAU * time_ms / 2000.0;
        let pos = self.center + Vec2::new(theta.cos(), theta.sin()) * self.radius;
        Some(PointerEvent::new(kind, pos, self.container, time_ms))
    }
}

/// Run the scripted session for `frames` frames, handing each rendered frame to `on_frame`.
fn simulate(
    scene: &SceneConfig,
    frames: u64,
    fps: f64,
    mut on_frame: impl FnMut(u64, &MaskFrame) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    if !(fps.is_finite() && fps > 0.0) {
        anyhow::bail!("fps must be finite and > 0, got {fps}");
    }
    let mut session = MaskSession::new(scene)?;
    session.mount()?;
    let script = OrbitScript::new(scene, frames);
    let frame_ms = 1000.0 / fps;
    for i in 0..frames {
        let now = i as f64 * frame_ms;
        if let Some(ev) = script.event(i, now) {
            session.push_pointer(ev);
        }
        if let Some(frame) = session.tick(now).frame() {
            on_frame(i, frame)?;
        }
    }
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.scene)?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    let style = DocumentStyle::default();
    let mut written = 0u64;
    simulate(&scene, args.frames, args.fps, |i, frame| {
        let path = args.out_dir.join(format!("frame_{i:05}.svg"));
        let doc = frame_document(&scene.stage, frame, &style);
        std::fs::write(&path, doc).with_context(|| format!("write '{}'", path.display()))?;
        written += 1;
        Ok(())
    })?;
    eprintln!("wrote {written} frames to {}", args.out_dir.display());
    Ok(())
}

fn cmd_png(args: PngArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.scene)?;
    let mut last = None;
    simulate(&scene, args.frame + 1, args.fps, |_, frame| {
        last = Some(frame.clone());
        Ok(())
    })?;
    let frame = last.context("no frame rendered")?;

    let style = DocumentStyle {
        background: Some("#12141C".to_string()),
        ..DocumentStyle::default()
    };
    let doc = frame_document(&scene.stage, &frame, &style);
    let width = args.width.unwrap_or(scene.stage.width.round() as u32).max(1);
    let height = ((width as f64) * scene.stage.height / scene.stage.width)
        .round()
        .max(1.0) as u32;
    let raster = rasterize_document(&doc, width, height)?;

    ensure_parent(&args.out)?;
    write_png(&args.out, &raster).with_context(|| format!("write png '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
