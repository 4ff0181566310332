use super::*;

#[test]
fn channel_accessors_unpack_argb() {
    let c = Color(0x80FF_1493);
    assert_eq!(c.a(), 0x80);
    assert_eq!(c.r(), 0xFF);
    assert_eq!(c.g(), 0x14);
    assert_eq!(c.b(), 0x93);
    assert_eq!(Color::from_argb(0x80, 0xFF, 0x14, 0x93), c);
    assert_eq!(c.to_rgba8(), [0xFF, 0x14, 0x93, 0x80]);
    assert_eq!(c.with_alpha(0xFF), Color::DEEP_PINK);
    assert_eq!(Color::WHITE.with_alpha(0), Color(0x00FF_FFFF));
}

#[test]
fn blend_endpoints_are_exact() {
    let bg = Color(0x1020_3040);
    let fg = Color::WHITE;
    assert_eq!(bg.blend(fg, 0.0), bg);
    assert_eq!(bg.blend(fg, 1.0), fg);
}

#[test]
fn blend_half_rounds_per_channel() {
    let out = Color::BLACK.blend(Color::WHITE, 0.5);
    // 127.5 rounds away from zero
    assert_eq!(out, Color::from_argb(255, 128, 128, 128));

    let out = Color::TRANSPARENT.blend(Color::RED, 0.25);
    assert_eq!(out, Color::from_argb(64, 64, 0, 0));
}

#[test]
fn blend_clamps_out_of_range_coverage() {
    let bg = Color::BLUE;
    assert_eq!(bg.blend(Color::RED, 3.0), Color::RED);
    assert_eq!(bg.blend(Color::RED, -1.0), bg);
    assert_eq!(bg.blend(Color::RED, f64::NAN), bg);
}

#[test]
fn faded_scales_toward_black() {
    assert_eq!(Color::WHITE.faded(255), Color::WHITE);
    assert_eq!(Color::WHITE.faded(0), Color::BLACK);
    assert_eq!(Color::rgb(200, 100, 0).faded(128), Color::rgb(100, 50, 0));
}

#[test]
fn hex_parse_and_serde() {
    assert_eq!("#ff1493".parse::<Color>().unwrap(), Color::DEEP_PINK);
    assert_eq!("FF149380".parse::<Color>().unwrap(), Color(0x80FF_1493));
    assert!("#12345".parse::<Color>().is_err());
    assert!("#zz0000".parse::<Color>().is_err());

    let c: Color = serde_json::from_str("\"#00ff00\"").unwrap();
    assert_eq!(c, Color::GREEN);
    let c: Color = serde_json::from_str("[1, 2, 3]").unwrap();
    assert_eq!(c, Color::rgb(1, 2, 3));
    let c: Color = serde_json::from_str("4278190335").unwrap();
    assert_eq!(c, Color::BLUE);

    let s = serde_json::to_string(&Color::DEEP_PINK).unwrap();
    assert_eq!(s, "\"#ff1493ff\"");
    let back: Color = serde_json::from_str(&s).unwrap();
    assert_eq!(back, Color::DEEP_PINK);
}
