use super::*;

#[test]
fn names_round_trip_through_from_str() {
    for demo in DemoKind::ALL {
        assert_eq!(demo.name().parse::<DemoKind>().unwrap(), demo);
        assert_eq!(demo.to_string(), demo.name());
    }
    let err = "fireworks".parse::<DemoKind>().unwrap_err();
    assert!(err.to_string().contains("flash-grid, orbits"));
}

#[test]
fn flash_grid_uses_custom_input() {
    let vis = DemoKind::FlashGrid.build(Some("12\n34\n")).unwrap();
    assert_eq!(vis.dimensions().width, 4 * 15);

    assert!(DemoKind::FlashGrid.build(Some("1a")).is_err());
}

#[test]
fn orbits_build_ignores_input() {
    let vis = DemoKind::Orbits.build(Some("anything")).unwrap();
    assert_eq!(vis.title(), "Orbits");
    assert!(!vis.is_completed());
}
