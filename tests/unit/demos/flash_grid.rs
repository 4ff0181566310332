use super::*;

fn sample() -> Grid {
    Grid::parse(SAMPLE_GRID).unwrap()
}

#[test]
fn parse_reads_digit_rows() {
    let g = Grid::parse("123\n456\n\n").unwrap();
    assert_eq!((g.width(), g.height()), (3, 2));
    assert_eq!(g.level(2, 1), 6);

    let s = sample();
    assert_eq!((s.width(), s.height()), (10, 10));
}

#[test]
fn parse_rejects_ragged_or_non_digit_input() {
    assert!(Grid::parse("12\n3").is_err());
    assert!(Grid::parse("1x").is_err());
    assert!(Grid::parse("\n \n").is_err());
}

#[test]
fn small_cascade_matches_hand_trace() {
    let mut g = Grid::parse("11111\n19991\n19191\n19991\n11111").unwrap();
    assert_eq!(g.step(), 9);
    let after = Grid::parse("34543\n40004\n50005\n40004\n34543").unwrap();
    assert_eq!(g, after);

    assert_eq!(g.step(), 0);
    assert_eq!(g, Grid::parse("45654\n51115\n61116\n51115\n45654").unwrap());
}

#[test]
fn sample_flash_totals() {
    let mut g = sample();
    let ten: usize = (0..10).map(|_| g.step()).sum();
    assert_eq!(ten, 204);
    let rest: usize = (10..100).map(|_| g.step()).sum();
    assert_eq!(ten + rest, 1656);
}

#[test]
fn sample_synchronizes_on_step_195() {
    let mut g = sample();
    let cells = g.levels().len();
    let first = (1..=1000).find(|_| g.step() == cells);
    assert_eq!(first, Some(195));
}

#[test]
fn every_wave_is_a_frame() {
    let mut g = Grid::parse("11111\n19991\n19191\n19991\n11111").unwrap();
    let mut waves = 0;
    g.step_with(|_| waves += 1);
    // Charge, then the outer ring, then the center.
    assert_eq!(waves, 3);

    let vis = FlashGrid::new(Grid::parse("11111\n19991\n19191\n19991\n11111").unwrap(), 1);
    // Initial state, three waves, settled state.
    assert_eq!(vis.frame_count(), 5);
    assert_eq!(vis.total_flashes(), 9);
}

#[test]
fn visualizer_renders_every_snapshot_then_completes() {
    let mut vis = FlashGrid::sample(10).unwrap();
    assert_eq!(vis.total_flashes(), 204);
    assert_eq!(vis.dimensions(), Size::new(180, 195));

    let mut canvas = Canvas::with_builtin_font(vis.dimensions()).unwrap();
    let mut frames = 0;
    while !vis.is_completed() {
        vis.render_frame(&mut canvas);
        frames += 1;
    }
    assert_eq!(frames, vis.frame_count());
    assert_eq!(
        vis.frame_description().as_deref(),
        Some("Step: 10; Flashes: 204")
    );
    assert!(canvas.raw_pixel_data().contains(&Color::HOT_PINK));
}

#[test]
fn flashing_cells_are_lit() {
    let mut vis = FlashGrid::new(Grid::parse("9").unwrap(), 1);
    let mut canvas = Canvas::with_builtin_font(vis.dimensions()).unwrap();

    vis.render_frame(&mut canvas);
    assert_eq!(canvas.pixel(16, 16), Color::rgb(0, 0, 0));

    // After the charge the single cell sits at 10 and is drawn at full brightness.
    vis.render_frame(&mut canvas);
    assert_eq!(canvas.pixel(16, 16), Color::rgb(250, 250, 250));
    assert_eq!(vis.frame_description().as_deref(), Some("Step: 1; Flashes: 1"));
}
