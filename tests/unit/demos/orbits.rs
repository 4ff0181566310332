use super::*;

#[test]
fn runs_for_the_configured_frame_count() {
    let mut vis = Orbits::new(Size::new(128, 128), 4);
    let mut canvas = Canvas::with_builtin_font(vis.dimensions()).unwrap();
    let mut rendered = 0;
    while !vis.is_completed() {
        vis.render_frame(&mut canvas);
        rendered += 1;
    }
    assert_eq!(rendered, 4);
    assert_eq!(vis.frame_description().as_deref(), Some("4/4"));
}

#[test]
fn zero_frames_is_immediately_complete() {
    let vis = Orbits::new(Size::new(16, 16), 0);
    assert!(vis.is_completed());
    assert_eq!(vis.frame_description(), None);
}

#[test]
fn planets_start_on_the_positive_x_axis() {
    let mut vis = Orbits::default();
    let mut canvas = Canvas::with_builtin_font(vis.dimensions()).unwrap();
    vis.render_frame(&mut canvas);

    assert_eq!(canvas.pixel(128, 128), Color::DESERT);
    assert_eq!(canvas.pixel(128 + 72, 128), Color::DEEP_PINK);
    assert_eq!(canvas.pixel(128 + 104, 128 - 3), Color::AMBER);
    assert_eq!(canvas.pixel(0, 0), Color::DARK_SLATE_GRAY);
}

#[test]
fn frames_differ_as_the_system_turns() {
    let mut vis = Orbits::new(Size::new(96, 96), 8);
    let mut canvas = Canvas::with_builtin_font(vis.dimensions()).unwrap();
    vis.render_frame(&mut canvas);
    let first = canvas.raw_pixel_data().to_vec();
    vis.render_frame(&mut canvas);
    assert_ne!(first, canvas.raw_pixel_data());
}
