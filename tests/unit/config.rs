use super::*;

#[test]
fn empty_object_is_all_defaults() {
    let cfg = RunConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(cfg, RunConfig::default());
    assert_eq!(cfg.scale, 1);
    assert_eq!(cfg.output_root, PathBuf::from("frames"));
}

#[test]
fn parses_every_field() {
    let raw = r##"{
        "output_root": "out/frames",
        "scale": 4,
        "font_path": "fonts/custom.json",
        "font_metrics": { "spacing": 2 },
        "frame_limit": 500,
        "text_color": "#ffcc00",
        "png_compression": "best",
        "mp4": { "fps": 24 }
    }"##;
    let cfg = RunConfig::from_reader(raw.as_bytes()).unwrap();

    assert_eq!(cfg.output_root, PathBuf::from("out/frames"));
    assert_eq!(cfg.scale, 4);
    assert_eq!(cfg.font_path, Some(PathBuf::from("fonts/custom.json")));
    assert_eq!(cfg.font_metrics.spacing, 2);
    assert_eq!(cfg.font_metrics.character_width, 5);
    assert_eq!(cfg.frame_limit, Some(500));
    assert_eq!(cfg.text_color, Color::rgb(0xff, 0xcc, 0x00));
    assert_eq!(cfg.png_compression, PngCompression::Best);
    assert_eq!(
        cfg.mp4,
        Some(Mp4Opts {
            fps: 24,
            overwrite: true
        })
    );
}

#[test]
fn unknown_fields_and_bad_values_are_rejected() {
    let err = RunConfig::from_reader(r#"{ "scael": 2 }"#.as_bytes()).unwrap_err();
    assert!(matches!(err, VisError::Serde(_)));

    let err = RunConfig::from_reader(r#"{ "scale": 0 }"#.as_bytes()).unwrap_err();
    assert!(matches!(err, VisError::Validation(_)));

    let err = RunConfig::from_reader(r#"{ "mp4": { "fps": 0 } }"#.as_bytes()).unwrap_err();
    assert!(matches!(err, VisError::Validation(_)));
}

#[test]
fn missing_file_is_reported_with_its_path() {
    let err = RunConfig::from_json_file("target/does-not-exist/run.json").unwrap_err();
    assert!(err.to_string().contains("does-not-exist"));
}

#[test]
fn driver_opts_carry_overrides() {
    let cfg = RunConfig {
        frame_limit: Some(7),
        text_color: Color::AMBER,
        ..RunConfig::default()
    };
    let opts = cfg.driver_opts();
    assert_eq!(opts.frame_limit, Some(7));
    assert_eq!(opts.text_color, Color::AMBER);
    assert_eq!(opts.title_y, 4);
}

#[test]
fn default_font_is_the_bundled_table() {
    let font = RunConfig::default().load_font().unwrap();
    assert!(font.contains("A"));
    assert_eq!(font.metrics(), FontMetrics::default());
}
