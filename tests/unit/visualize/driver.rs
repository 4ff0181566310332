use super::*;
use crate::encode::encoder::CapturingEncoder;

/// Paints one marker pixel per frame and finishes after `total` frames.
struct Countdown {
    size: Size,
    total: u32,
    rendered: u32,
    caption: bool,
    polls: std::cell::Cell<u32>,
}

impl Countdown {
    fn new(total: u32) -> Self {
        Self {
            size: Size::new(40, 30),
            total,
            rendered: 0,
            caption: false,
            polls: std::cell::Cell::new(0),
        }
    }
}

impl Visualizer for Countdown {
    fn dimensions(&self) -> Size {
        self.size
    }

    fn title(&self) -> String {
        "AB".to_owned()
    }

    fn frame_description(&self) -> Option<String> {
        self.caption.then(|| format!("{}", self.rendered))
    }

    fn is_completed(&self) -> bool {
        self.polls.set(self.polls.get() + 1);
        self.rendered >= self.total
    }

    fn render_frame(&mut self, canvas: &mut Canvas) {
        canvas.start_new_frame(true);
        canvas.set_pixel(self.rendered as i32, 0, Color::RED);
        self.rendered += 1;
    }
}

fn scratch_dir(name: &str) -> PathBuf {
    PathBuf::from("target").join("unit_driver").join(name)
}

fn driver(name: &str, opts: DriverOpts) -> VisualizationDriver<CapturingEncoder> {
    let exporter = FrameExporter::new(scratch_dir(name), 1, CapturingEncoder::new()).unwrap();
    VisualizationDriver::new(exporter, Arc::new(Font::builtin().unwrap()), opts)
}

fn white_rows(pixels: &[Color], width: usize) -> Vec<usize> {
    let mut rows: Vec<usize> = pixels
        .iter()
        .enumerate()
        .filter(|(_, c)| **c == Color::WHITE)
        .map(|(i, _)| i / width)
        .collect();
    rows.dedup();
    rows
}

#[test]
fn completed_visualizer_writes_nothing() {
    let mut d = driver("empty", DriverOpts::default());
    let mut vis = Countdown::new(0);
    let stats = d.run(&mut vis).unwrap();

    assert_eq!(stats.frames, 0);
    assert_eq!(vis.rendered, 0);
    assert!(d.exporter().encoder().frames().is_empty());
    assert_eq!(std::fs::read_dir(&stats.output_dir).unwrap().count(), 0);
}

#[test]
fn one_file_per_rendered_frame() {
    let mut d = driver("three", DriverOpts::default());
    let mut vis = Countdown::new(3);
    let stats = d.run(&mut vis).unwrap();

    assert_eq!(stats.frames, 3);
    assert_eq!(stats.dimensions, Size::new(40, 30));
    assert_eq!(vis.polls.get(), 4);

    let frames = d.exporter().encoder().frames();
    assert_eq!(frames.len(), 3);
    for (i, frame) in frames.iter().enumerate() {
        assert_eq!(frame.pixels[i], Color::RED, "marker of frame {i}");
    }
    for i in 0..3 {
        assert!(stats.output_dir.join(format!("000{i}.rgba")).is_file());
    }
}

#[test]
fn title_is_drawn_near_the_top_only() {
    let mut d = driver("title", DriverOpts::default());
    d.run(&mut Countdown::new(1)).unwrap();

    let frame = &d.exporter().encoder().frames()[0];
    let rows = white_rows(&frame.pixels, 40);
    assert!(!rows.is_empty());
    assert!(rows.iter().all(|&y| (4..16).contains(&y)), "{rows:?}");
}

#[test]
fn caption_is_drawn_near_the_bottom() {
    let mut d = driver("caption", DriverOpts::default());
    let mut vis = Countdown::new(1);
    vis.caption = true;
    d.run(&mut vis).unwrap();

    let frame = &d.exporter().encoder().frames()[0];
    let rows = white_rows(&frame.pixels, 40);
    assert!(rows.iter().any(|&y| y >= 20), "{rows:?}");
}

#[test]
fn frame_limit_stops_runaway_visualizers() {
    let opts = DriverOpts {
        frame_limit: Some(2),
        ..DriverOpts::default()
    };
    let mut d = driver("limit", opts);
    let err = d.run(&mut Countdown::new(5)).unwrap_err();

    assert!(matches!(err, VisError::Validation(_)));
    assert_eq!(d.exporter().frames_written(), 2);
}

#[test]
fn rerun_starts_from_zero_and_drops_stale_frames() {
    let mut d = driver("rerun", DriverOpts::default());
    d.run(&mut Countdown::new(3)).unwrap();
    let stats = d.run(&mut Countdown::new(1)).unwrap();

    assert_eq!(stats.frames, 1);
    let names: Vec<_> = std::fs::read_dir(&stats.output_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("0000.rgba")]);
}

#[test]
fn png_convenience_writes_png_files() {
    let dir = scratch_dir("png");
    let stats = visualize_to_png(&mut Countdown::new(2), &dir, 2).unwrap();
    assert_eq!(stats.frames, 2);

    let bytes = std::fs::read(dir.join("0001.png")).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
}
