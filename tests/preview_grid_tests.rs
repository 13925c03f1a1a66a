//! Grid building against fonts loaded through the registry.

mod common;

use common::{ascii_font, font_with};
use font_previewer::preview_grid::NO_CHARACTERS_NOTICE;
use std::collections::BTreeSet;

use font_previewer::{
    CodePointRange, GlyphCoverage, GridCell, PreviewGridBuilder, StyleParameters,
};
use font_previewer_config::{default_ranges, printable_ascii};
use font_previewer_fonts::FontRegistry;

#[test]
fn test_printable_ascii_round_trip() {
    let registry = FontRegistry::new();
    let font = registry.load(ascii_font("Grid")).unwrap();
    let grid = PreviewGridBuilder::new().build(&font, StyleParameters::default(), &[printable_ascii()]);

    let label_rows: Vec<&[_]> = grid
        .rows()
        .filter(|row| matches!(row[0].cell, GridCell::Label { .. }))
        .collect();
    assert_eq!(label_rows.len(), 10);
    for row in &label_rows[..9] {
        assert_eq!(row.len(), 10);
    }
    assert_eq!(label_rows[9].len(), 5);

    let indices: Vec<usize> = label_rows.iter().map(|row| row[0].row).collect();
    assert!(indices.windows(2).all(|w| w[1] == w[0] + 2));
    assert_eq!(grid.supported_count(), 95);
}

#[test]
fn test_partial_coverage_keeps_alignment() {
    let registry = FontRegistry::new();
    let font = registry.load(font_with("Digits", &[0x30, 0x31, 0x32])).unwrap();
    let grid = PreviewGridBuilder::new().build(&font, StyleParameters::default(), &[printable_ascii()]);

    assert_eq!(grid.supported_count(), 3);
    let glyph_cells = grid
        .cells()
        .iter()
        .filter(|c| matches!(c.cell, GridCell::Glyph { .. }))
        .count();
    assert_eq!(glyph_cells, 95);

    // '0' is the 17th code point after ' ': second visual row, column 6.
    let zero = grid
        .cells()
        .iter()
        .find(|c| c.cell == GridCell::Glyph { code_point: 0x30, supported: true })
        .unwrap();
    assert_eq!((zero.row, zero.column), (3, 6));
}

#[test]
fn test_style_does_not_change_coverage() {
    let registry = FontRegistry::new();
    let font = registry.load(ascii_font("Styled")).unwrap();
    let builder = PreviewGridBuilder::new();
    let ranges = default_ranges();

    let plain = builder.build(&font, StyleParameters::default(), &ranges);
    let styled = builder.build(
        &font,
        StyleParameters::new(120, true, true).unwrap(),
        &ranges,
    );
    assert_eq!(plain.cells(), styled.cells());
    assert_ne!(plain.style(), styled.style());
}

#[test]
fn test_build_is_deterministic_for_real_font() {
    let registry = FontRegistry::new();
    let font = registry.load(ascii_font("Stable")).unwrap();
    let builder = PreviewGridBuilder::with_columns(7).unwrap();
    let ranges = default_ranges();
    let style = StyleParameters::default();
    assert_eq!(
        builder.build(&font, style, &ranges),
        builder.build(&font, style, &ranges)
    );
}

#[test]
fn test_control_characters_never_supported() {
    let registry = FontRegistry::new();
    let font = registry
        .load(font_with("Controls", &[0x09, 0x0A, 0x41]))
        .unwrap();
    let grid = PreviewGridBuilder::new().build(
        &font,
        StyleParameters::default(),
        &[CodePointRange::new(0, 0x20)],
    );
    assert_eq!(grid.notice_text(), Some(NO_CHARACTERS_NOTICE));
}

#[test]
fn test_grid_serializes_cells_in_order() {
    let registry = FontRegistry::new();
    let font = registry.load(font_with("Json", &[0x41])).unwrap();
    let grid = PreviewGridBuilder::with_columns(2).unwrap().build(
        &font,
        StyleParameters::default(),
        &[CodePointRange::new(0x41, 0x43)],
    );
    let json = serde_json::to_value(&grid).unwrap();
    let cells = json["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 4);
    assert_eq!(cells[0]["kind"], "label");
    assert_eq!(cells[0]["text"], "A (65)");
    assert_eq!(cells[2]["kind"], "glyph");
    assert_eq!(cells[2]["supported"], true);
    assert_eq!(cells[3]["supported"], false);
    assert_eq!(json["columns"], 2);
}

/// Covers every Unicode scalar value.
struct EveryScalar;

impl GlyphCoverage for EveryScalar {
    fn supports(&self, _style: &StyleParameters, code_point: u32) -> bool {
        char::from_u32(code_point).is_some()
    }
}

#[test]
fn test_row_count_matches_emitted_rows() {
    let deserialized: Vec<CodePointRange> = serde_json::from_str(
        r#"[{"start": 1114100, "end": 2097152}, {"start": 50, "end": 10}, {"start": 65, "end": 70}]"#,
    )
    .unwrap();
    assert_eq!(deserialized[0].len(), 12);

    let range_sets = vec![
        default_ranges(),
        vec![CodePointRange::new(0x1F600, 0x1F650)],
        vec![CodePointRange::new(0xD7F0, 0xE010)],
        vec![
            CodePointRange::new(0x41, 0x42),
            CodePointRange::new(0xD800, 0xE000),
            CodePointRange::new(0x10000, 0x10005),
        ],
        vec![CodePointRange {
            start: 0x10FFF0,
            end: u32::MAX,
            label: None,
        }],
        deserialized,
    ];

    for columns in [1, 3, 10] {
        let builder = PreviewGridBuilder::with_columns(columns).unwrap();
        for ranges in &range_sets {
            let grid = builder.build(&EveryScalar, StyleParameters::default(), ranges);
            let rows: BTreeSet<usize> = grid.cells().iter().map(|c| c.row).collect();
            let expected: BTreeSet<usize> = (0..builder.row_count(ranges)).collect();
            assert_eq!(rows, expected, "columns {columns}, ranges {ranges:?}");
            assert_eq!(grid.row_count(), builder.row_count(ranges));

            let scalars: usize = ranges.iter().map(CodePointRange::len).sum();
            assert_eq!(grid.supported_count(), scalars, "ranges {ranges:?}");
        }
    }
}
