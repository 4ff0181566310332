use super::*;

fn tiny_metrics() -> FontMetrics {
    FontMetrics {
        character_width: 3,
        character_height: 2,
        vertical_offset: 0,
        spacing: 1,
    }
}

#[test]
fn builtin_covers_printable_ascii() {
    let font = Font::builtin().unwrap();
    assert_eq!(font.metrics(), FontMetrics::default());
    for ch in ' '..='~' {
        let mut buf = [0u8; 4];
        assert!(font.contains(ch.encode_utf8(&mut buf)), "missing {ch:?}");
    }
    assert_eq!(font.len(), 95);
    assert!(font.glyph_for(" ").is_blank());
    assert!(!font.glyph_for("A").is_blank());
}

#[test]
fn rows_decode_low_bit_first() {
    let font = Font::from_json_str(r#"{ "x": [1, 6] }"#, tiny_metrics()).unwrap();
    let g = font.glyph_for("x");
    assert_eq!(g.width(), 3);
    assert_eq!(g.height(), 2);
    let rows: Vec<Vec<bool>> = g.rows().map(|r| r.to_vec()).collect();
    assert_eq!(rows, vec![vec![true, false, false], vec![false, true, true]]);
    assert!(g.is_set(0, 0));
    assert!(!g.is_set(3, 0));
}

#[test]
fn missing_glyph_is_blank_with_correct_dimensions() {
    let font = Font::from_json_str(r#"{ "x": [1, 6] }"#, tiny_metrics()).unwrap();
    let g = font.glyph_for("nope");
    assert!(g.is_blank());
    assert_eq!((g.width(), g.height()), (3, 2));
    assert_eq!(g.rows().count(), 2);
    assert!(font.glyph_for_char('\u{1F600}').is_blank());
}

#[test]
fn multi_char_keys_are_supported() {
    let font = Font::from_json_str(r#"{ "ab": [7, 7] }"#, tiny_metrics()).unwrap();
    assert!(!font.glyph_for("ab").is_blank());
    assert!(font.glyph_for("a").is_blank());
    assert_eq!(font.keys().collect::<Vec<_>>(), vec!["ab"]);
}

#[test]
fn wrong_row_count_fails() {
    let err = Font::from_json_str(r#"{ "x": [1] }"#, tiny_metrics()).unwrap_err();
    assert!(matches!(err, VisError::Font(_)));
    assert!(err.to_string().contains("expected 2"));
}

#[test]
fn row_bits_beyond_width_fail() {
    assert!(Font::from_json_str(r#"{ "x": [8, 0] }"#, tiny_metrics()).is_err());
    assert!(Font::from_json_str(r#"{ "x": [-1, 0] }"#, tiny_metrics()).is_err());
}

#[test]
fn malformed_json_and_missing_file_fail() {
    assert!(matches!(
        Font::from_json_str("[1, 2]", tiny_metrics()),
        Err(VisError::Font(_))
    ));
    assert!(
        Font::from_path(
            Path::new("target/definitely-missing-font.json"),
            FontMetrics::default()
        )
        .is_err()
    );
}

#[test]
fn zero_metrics_fail() {
    let metrics = FontMetrics {
        character_width: 0,
        ..FontMetrics::default()
    };
    assert!(Font::from_json_str("{}", metrics).is_err());
}

#[test]
fn text_width_counts_gaps_between_cells() {
    let m = FontMetrics::default();
    assert_eq!(m.text_width(0), 0);
    assert_eq!(m.text_width(1), 5);
    assert_eq!(m.text_width(2), 11);
    assert_eq!(m.advance(), 6);
}
