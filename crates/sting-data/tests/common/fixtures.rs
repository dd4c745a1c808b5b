//! Test fixture loading utilities

use std::path::PathBuf;

use sting_data::{Feature, FeatureType, Schema};

/// Directory holding all test fixtures
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_fixtures")
}

/// Directory holding the example C4.5 dataset
pub fn example_data_dir() -> PathBuf {
    fixtures_root().join("example_data")
}

/// Get the path to a file of the example dataset
pub fn example_path(name: &str) -> PathBuf {
    example_data_dir().join(name)
}

/// The schema declared by `example.names`
pub fn example_schema() -> Vec<Feature> {
    vec![
        Feature::new("f1", FeatureType::Binary, None).unwrap(),
        Feature::nominal(
            "f2",
            ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
        )
        .unwrap(),
        Feature::new("f3", FeatureType::Continuous, None).unwrap(),
        Feature::nominal("f4", ["A12", "A13", "A14"]).unwrap(),
        Feature::nominal("f5", ["1", "2", "3"]).unwrap(),
    ]
}

/// The example schema including its class labels
#[allow(dead_code)]
pub fn example_schema_with_classes() -> Schema {
    Schema::new(example_schema()).with_classes(vec!["0".to_string(), "1".to_string()])
}

/// Feature values of `example.data`
pub const EXAMPLE_DATA: [[f64; 5]; 10] = [
    [0.0, 1.0, 0.94, 1.0, 1.0],
    [0.0, 2.0, 1.0, 2.0, 2.0],
    [0.0, 3.0, 1.5, 3.0, 3.0],
    [f64::NAN, 4.0, 11e-1, 3.0, 2.0],
    [0.0, 5.0, 2.3, 1.0, 1.0],
    [1.0, 3.0, 0.86, 2.0, 2.0],
    [0.0, 2.0, 3.14, 1.0, 3.0],
    [0.0, 1.0, 2.81, f64::NAN, 2.0],
    [1.0, 4.0, 0.9932456, 2.0, 1.0],
    [1.0, 5.0, 2.0, 1.0, 2.0],
];

/// Class labels of `example.data`
pub const EXAMPLE_LABELS: [i64; 10] = [0, 0, 0, 1, 1, 0, 1, 0, 1, 1];

/// Compare floats treating NaN as equal to NaN
pub fn same_value(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || (a - b).abs() < 1e-12
}
