//! C4.5 parsing integration tests against the example dataset

mod common;

use std::fs;
use std::path::PathBuf;

use common::fixtures::{
    example_data_dir, example_path, example_schema, example_schema_with_classes, fixtures_root,
    same_value, EXAMPLE_DATA, EXAMPLE_LABELS,
};
use sting_data::{
    find_file, parse_and_preprocess, parse_c45, parse_c45_with, parse_schema, trim_line,
    C45Error, C45Result, DirectoryLocator, LabeledTable, ParseOptions,
};
use tempfile::TempDir;

// === File Location ===

#[test]
fn test_find_file() {
    assert_eq!(
        find_file("example.data", fixtures_root()).unwrap(),
        example_path("example.data")
    );
    assert_eq!(
        find_file("example.names", fixtures_root()).unwrap(),
        example_path("example.names")
    );
}

#[test]
fn test_find_file_missing() {
    let err = find_file("nope.names", fixtures_root()).unwrap_err();
    assert!(matches!(err, C45Error::FileNotFound { .. }));
}

// === Line Trimming ===

#[test]
fn test_trim_line() {
    assert_eq!(trim_line(""), "");
    assert_eq!(trim_line("#"), "");
    assert_eq!(
        trim_line("6,1,Wednesday,0.86,A13,0. # lines may end with periods"),
        "6,1,Wednesday,0.86,A13,0"
    );
}

// === Schema ===

#[test]
fn test_parse_schema() {
    let schema = parse_schema(example_path("example.names")).unwrap();
    assert_eq!(schema, example_schema());
    assert_eq!(schema, example_schema_with_classes());
}

#[test]
fn test_schema_sorts_deterministically() {
    let mut a = example_schema();
    let mut b = example_schema();
    b.reverse();
    a.sort();
    b.sort();
    assert_eq!(a, b);

    let names: Vec<&str> = a.iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["f1", "f2", "f4", "f5", "f3"]);
}

// === Data ===

#[test]
fn test_parse_csv() {
    let schema = parse_schema(example_path("example.names")).unwrap();
    let table = parse_and_preprocess(&schema, example_path("example.data")).unwrap();

    assert_eq!(table.columns(), ["f1", "f2", "f3", "f4", "f5", "label"]);
    assert_eq!(table.index(), (1..=10usize).collect::<Vec<_>>().as_slice());
    assert_eq!(table.labels().to_vec(), EXAMPLE_LABELS.to_vec());

    let values = table.values();
    assert_eq!(values.dim(), (10, 5));
    for (i, expected_row) in EXAMPLE_DATA.iter().enumerate() {
        for (j, &expected) in expected_row.iter().enumerate() {
            assert!(
                same_value(values[[i, j]], expected),
                "cell ({i}, {j}): expected {expected}, got {}",
                values[[i, j]]
            );
        }
    }

    let label = table.column(LabeledTable::LABEL_COLUMN).unwrap();
    assert_eq!(label.len(), 10);
}

#[test]
fn test_parse_c45() {
    let (schema, x, y) = parse_c45("example", example_data_dir())
        .unwrap()
        .into_parts();

    assert_eq!(schema, example_schema());
    assert_eq!(x.dim(), (10, 5));
    for ((i, j), &value) in x.indexed_iter() {
        assert!(same_value(value, EXAMPLE_DATA[i][j]), "cell ({i}, {j})");
    }
    assert_eq!(y.to_vec(), EXAMPLE_LABELS.to_vec());

    let nan_cells: Vec<(usize, usize)> = x
        .indexed_iter()
        .filter(|(_, v)| v.is_nan())
        .map(|(ij, _)| ij)
        .collect();
    assert_eq!(nan_cells, vec![(3, 0), (7, 3)]);
}

#[test]
fn test_parse_c45_from_parent_directory() {
    let dataset = parse_c45("example", fixtures_root()).unwrap();
    assert_eq!(dataset.n_examples(), 10);
    assert_eq!(dataset.missing_count(), 2);
    assert_eq!(dataset.positive_count(), 5);
}

#[test]
fn test_parse_c45_with_closure_locator() {
    let locator = |name: &str| -> C45Result<PathBuf> { Ok(example_path(name)) };
    let dataset = parse_c45_with("example", &locator, &ParseOptions::default()).unwrap();
    assert_eq!(dataset.schema, example_schema());
}

#[test]
fn test_parse_c45_missing_dataset() {
    let err = parse_c45("absent", example_data_dir()).unwrap_err();
    assert!(matches!(err, C45Error::FileNotFound { ref name, .. } if name == "absent.names"));
}

// === Failure Modes ===

fn write_dataset(dir: &TempDir, names: &str, data: &str) {
    fs::write(dir.path().join("ds.names"), names).unwrap();
    fs::write(dir.path().join("ds.data"), data).unwrap();
}

#[test]
fn test_row_width_mismatch_names_row() {
    let dir = TempDir::new().unwrap();
    write_dataset(
        &dir,
        "0,1.\na: binary.\nb: continuous.\n",
        "# header\n1,0.5,1.\n0,0.25.\n",
    );

    let err = parse_c45("ds", dir.path()).unwrap_err();
    match err {
        C45Error::RowParse { row, line, .. } => {
            assert_eq!(row, 2);
            assert_eq!(line, 3);
        }
        other => panic!("expected row error, got {other:?}"),
    }
}

#[test]
fn test_schema_error_aborts_parse() {
    let dir = TempDir::new().unwrap();
    write_dataset(&dir, "0,1.\na: sometimes.\n", "1,1.\n");

    let err = parse_c45("ds", dir.path()).unwrap_err();
    assert!(matches!(err, C45Error::SchemaParse { line: 2, .. }));
    assert_eq!(err.line(), Some(2));
}

#[test]
fn test_declared_class_names() {
    let dir = TempDir::new().unwrap();
    write_dataset(
        &dir,
        "no, yes.\ncolour: red, green, blue.\n",
        "red,yes.\nblue,no.\ngreen,yes.\n",
    );

    let dataset = parse_c45("ds", dir.path()).unwrap();
    assert_eq!(dataset.y.to_vec(), vec![1, 0, 1]);
    assert_eq!(dataset.x.column(0).to_vec(), vec![1.0, 3.0, 2.0]);
}

#[test]
fn test_custom_missing_tokens() {
    let dir = TempDir::new().unwrap();
    write_dataset(&dir, "0,1.\nx: continuous.\n", "NA,1.\n2.5,0.\n");

    let options = ParseOptions::from_toml(r#"missing_tokens = ["NA"]"#).unwrap();
    let dataset =
        parse_c45_with("ds", &DirectoryLocator::new(dir.path()), &options).unwrap();
    assert!(dataset.x[[0, 0]].is_nan());
    assert_eq!(dataset.x[[1, 0]], 2.5);

    // With the defaults "NA" is not a number
    let err = parse_c45("ds", dir.path()).unwrap_err();
    assert!(matches!(err, C45Error::RowParse { row: 1, .. }));
}

#[test]
fn test_invalid_options_rejected() {
    let options = ParseOptions {
        comment: ',',
        ..Default::default()
    };
    let err = parse_c45_with(
        "example",
        &DirectoryLocator::new(example_data_dir()),
        &options,
    )
    .unwrap_err();
    assert!(matches!(err, C45Error::Config(_)));
}
