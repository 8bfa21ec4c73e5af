use super::*;
use crate::config::{OutputFormat, OutputType};
use crate::draw::Point;
use crate::transform;

const SIZE: f64 = 500.0;

fn sample_points() -> Vec<Point> {
    vec![
        Point::new(250.0, 250.0),
        Point::new(300.0, 200.0),
        Point::new(137.0, 411.0),
    ]
}

#[test]
fn empty_store_exports_placeholder() {
    let text = export_points(
        &[],
        SIZE,
        SIZE,
        Offset::default(),
        OutputFormat::Multiline,
        OutputType::CFrame,
    );
    assert_eq!(text, EMPTY_OUTPUT);
    assert_eq!(text, "No points selected!");
}

#[test]
fn single_line_cframe_list() {
    let text = export_points(
        &sample_points()[..2],
        SIZE,
        SIZE,
        Offset::default(),
        OutputFormat::SingleLine,
        OutputType::CFrame,
    );
    assert_eq!(
        text,
        "{CFrame.new(0.00, 0.00, 0.00), CFrame.new(1.00, 1.00, 0.00)}"
    );
}

#[test]
fn multiline_list_indents_each_entry() {
    let text = export_points(
        &sample_points()[..2],
        SIZE,
        SIZE,
        Offset::default(),
        OutputFormat::Multiline,
        OutputType::Vector3,
    );
    assert_eq!(
        text,
        "{\n    Vector3.new(0.00, 0.00, 0.00),\n    Vector3.new(1.00, 1.00, 0.00)\n}"
    );
}

#[test]
fn offsets_are_added_and_z_comes_from_offset() {
    let text = format_point(
        Point::new(200.0, 300.0),
        SIZE,
        SIZE,
        Offset::new(10.0, 0.5, -3.0),
        OutputType::Vector,
    );
    assert_eq!(text, "vector.create(9.00, -0.50, -3.00)");
}

#[test]
fn nan_offset_propagates_into_text() {
    let text = format_point(
        Point::new(250.0, 250.0),
        SIZE,
        SIZE,
        Offset::new(f64::NAN, 0.0, 0.0),
        OutputType::CFrame,
    );
    assert_eq!(text, "CFrame.new(NaN, 0.00, 0.00)");
}

#[test]
fn import_maps_literals_back_to_canvas() {
    let points = parse_cframe_points(
        "local points = {CFrame.new(1, 1, 0), CFrame.new(-2.5, 0, 7)}",
        Offset::default(),
        SIZE,
        SIZE,
    )
    .unwrap();

    assert_eq!(
        points,
        vec![Point::new(300.0, 200.0), Point::new(125.0, 250.0)]
    );
}

#[test]
fn import_subtracts_offsets() {
    let points = parse_cframe_points(
        "CFrame.new(11.00, 6.00, 3.00)",
        Offset::new(10.0, 5.0, 3.0),
        SIZE,
        SIZE,
    )
    .unwrap();
    assert_eq!(points, vec![Point::new(300.0, 200.0)]);
}

#[test]
fn import_ignores_other_constructors() {
    let result = parse_cframe_points(
        "{Vector3.new(1.00, 2.00, 0.00), vector.create(0, 0, 0)}",
        Offset::default(),
        SIZE,
        SIZE,
    );
    assert_eq!(result, Err(ImportError::InvalidInput));
}

#[test]
fn import_rejects_non_ascii_digits() {
    // Arabic-Indic three
    let result = parse_cframe_points("CFrame.new(\u{0663}, 1, 2)", Offset::default(), SIZE, SIZE);
    assert_eq!(result, Err(ImportError::InvalidInput));

    let mixed = parse_cframe_points(
        "CFrame.new(\u{0663}, 1, 2), CFrame.new(1, 2, 3)",
        Offset::default(),
        SIZE,
        SIZE,
    )
    .unwrap();
    assert_eq!(mixed.len(), 1);
    assert!(mixed.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
}

#[test]
fn import_of_garbage_fails_with_message() {
    let err = parse_cframe_points("hello world", Offset::default(), SIZE, SIZE).unwrap_err();
    assert_eq!(err.to_string(), "Invalid input format");
}

#[test]
fn export_then_import_round_trips_world_coordinates() {
    let offset = Offset::new(3.0, -4.0, 12.0);
    let original = sample_points();
    let text = export_points(
        &original,
        SIZE,
        SIZE,
        offset,
        OutputFormat::Multiline,
        OutputType::CFrame,
    );

    let imported = parse_cframe_points(&text, offset, SIZE, SIZE).unwrap();
    assert_eq!(imported.len(), original.len());

    for (before, after) in original.iter().zip(&imported) {
        let a = transform::to_world(*before, SIZE, SIZE);
        let b = transform::to_world(*after, SIZE, SIZE);
        assert!((a.x - b.x).abs() <= 0.01, "{:?} vs {:?}", a, b);
        assert!((a.y - b.y).abs() <= 0.01, "{:?} vs {:?}", a, b);
    }
}
