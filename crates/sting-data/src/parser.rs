//! C4.5 `.names` and `.data` parsing
//!
//! Both files are line oriented. Before anything else each line is trimmed:
//! a `#` comment runs to end of line, a single trailing `.` ends a record,
//! and surrounding whitespace is dropped. Lines that trim to nothing are
//! skipped.
//!
//! A `.names` file starts with the class label line, followed by one
//! `name: spec` declaration per feature where `spec` is `binary`,
//! `continuous`, or a comma-separated list of nominal labels.

use ndarray::{Array1, Array2};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::ParseOptions;
use crate::dataset::LabeledTable;
use crate::error::{C45Error, C45Result};
use crate::feature::{Feature, FeatureType};
use crate::schema::Schema;

/// Trim a raw line using the default `#` comment marker
pub fn trim_line(raw: &str) -> &str {
    trim_line_with(raw, '#')
}

/// Trim a raw line: drop the comment, one record-ending period and
/// surrounding whitespace
pub fn trim_line_with(raw: &str, comment: char) -> &str {
    let content = match raw.find(comment) {
        Some(i) => &raw[..i],
        None => raw,
    };
    let content = content.trim();
    content.strip_suffix('.').unwrap_or(content).trim_end()
}

/// Parse a `.names` file into a schema
pub fn parse_schema(path: impl AsRef<Path>) -> C45Result<Schema> {
    parse_schema_with(path, &ParseOptions::default())
}

/// Parse a `.names` file with explicit options
pub fn parse_schema_with(path: impl AsRef<Path>, options: &ParseOptions) -> C45Result<Schema> {
    options.validate()?;
    let path = path.as_ref();
    let source = path.display().to_string();
    let file = File::open(path).map_err(|e| C45Error::io(&source, e))?;
    parse_schema_from(BufReader::new(file), &source, options)
}

/// Parse `.names` content from any reader
///
/// `source` names the input in error messages.
pub fn parse_schema_from<R: BufRead>(
    reader: R,
    source: &str,
    options: &ParseOptions,
) -> C45Result<Schema> {
    options.validate()?;

    let mut classes: Option<Vec<String>> = None;
    let mut features = Vec::new();
    let mut seen = HashSet::new();
    let mut lines_read = 0;

    for (i, line) in reader.lines().enumerate() {
        let raw = line.map_err(|e| C45Error::io(source, e))?;
        lines_read = i + 1;
        let line = trim_line_with(&raw, options.comment);
        if line.is_empty() {
            continue;
        }

        let schema_error = |message: String| C45Error::SchemaParse {
            path: source.to_string(),
            line: i + 1,
            message,
        };

        if classes.is_none() {
            classes = Some(line.split(',').map(|c| c.trim().to_string()).collect());
            continue;
        }

        let feature = parse_declaration(line).map_err(schema_error)?;
        if !seen.insert(feature.name().to_string()) {
            return Err(schema_error(format!(
                "duplicate feature name '{}'",
                feature.name()
            )));
        }
        features.push(feature);
    }

    let classes = classes.ok_or_else(|| C45Error::SchemaParse {
        path: source.to_string(),
        line: lines_read,
        message: "missing class label line".to_string(),
    })?;

    tracing::debug!(
        "Parsed schema from {}: {} features, classes {:?}",
        source,
        features.len(),
        classes
    );

    Ok(Schema::new(features).with_classes(classes))
}

/// Parse one trimmed `name: spec` declaration
fn parse_declaration(line: &str) -> Result<Feature, String> {
    let (name, spec) = line
        .split_once(':')
        .ok_or_else(|| format!("expected '<name>: <type or values>', got '{}'", line))?;
    if spec.contains(':') {
        return Err(format!("unexpected ':' in '{}'", line));
    }

    let name = name.trim();
    if name.is_empty() {
        return Err("empty feature name".to_string());
    }

    let tokens: Vec<&str> = spec.split(',').map(str::trim).collect();
    if tokens.iter().any(|t| t.is_empty()) {
        return Err(format!("empty value in declaration of '{}'", name));
    }

    let feature = match tokens.as_slice() {
        [keyword] => {
            let ftype = match keyword.to_ascii_lowercase().as_str() {
                "binary" => FeatureType::Binary,
                "continuous" => FeatureType::Continuous,
                "nominal" | "discrete" => {
                    return Err(format!(
                        "nominal feature '{}' must list its values",
                        name
                    ));
                }
                _ => {
                    return Err(format!(
                        "unknown feature type '{}' for '{}' (nominal features need at least two values)",
                        keyword, name
                    ));
                }
            };
            Feature::new(name, ftype, None)
        }
        values => Feature::nominal(name, values.iter().copied()),
    };

    feature.map_err(|e| e.to_string())
}

/// Parse a `.data` file under `schema`
pub fn parse_and_preprocess(schema: &Schema, path: impl AsRef<Path>) -> C45Result<LabeledTable> {
    parse_and_preprocess_with(schema, path, &ParseOptions::default())
}

/// Parse a `.data` file under `schema` with explicit options
pub fn parse_and_preprocess_with(
    schema: &Schema,
    path: impl AsRef<Path>,
    options: &ParseOptions,
) -> C45Result<LabeledTable> {
    options.validate()?;
    let path = path.as_ref();
    let source = path.display().to_string();
    let file = File::open(path).map_err(|e| C45Error::io(&source, e))?;
    parse_and_preprocess_from(schema, BufReader::new(file), &source, options)
}

/// Parse `.data` content from any reader
///
/// Each record becomes one matrix row in file order. Missing tokens are
/// encoded as NaN; rows are never dropped. Row ids are 1-based and count
/// retained records only.
pub fn parse_and_preprocess_from<R: BufRead>(
    schema: &Schema,
    reader: R,
    source: &str,
    options: &ParseOptions,
) -> C45Result<LabeledTable> {
    options.validate()?;

    // Trimmed records joined back together, with their file line numbers
    let mut cleaned = String::new();
    let mut line_numbers = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let raw = line.map_err(|e| C45Error::io(source, e))?;
        let line = trim_line_with(&raw, options.comment);
        if line.is_empty() {
            continue;
        }
        cleaned.push_str(line);
        cleaned.push('\n');
        line_numbers.push(i + 1);
    }

    let file_line = |position: Option<&csv::Position>| {
        position
            .and_then(|p| usize::try_from(p.line()).ok())
            .and_then(|l| l.checked_sub(1))
            .and_then(|l| line_numbers.get(l).copied())
            .unwrap_or(0)
    };

    // No quoting: one trimmed line is always exactly one record
    let mut records = csv::ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(cleaned.as_bytes());

    let width = schema.width();
    let mut values = Vec::with_capacity(line_numbers.len() * schema.len());
    let mut labels = Vec::with_capacity(line_numbers.len());

    for (i, result) in records.records().enumerate() {
        let row = i + 1;
        let record = result.map_err(|e| C45Error::RowParse {
            path: source.to_string(),
            row,
            line: file_line(e.position()),
            message: e.to_string(),
        })?;
        let line = file_line(record.position());
        let row_error = |message: String| C45Error::RowParse {
            path: source.to_string(),
            row,
            line,
            message,
        };

        if record.len() != width {
            return Err(row_error(format!(
                "expected {} values ({} features and a label), found {}",
                width,
                schema.len(),
                record.len()
            )));
        }

        for (feature, token) in schema.iter().zip(record.iter()) {
            if options.is_missing(token) {
                values.push(f64::NAN);
                continue;
            }
            let value = feature
                .encode_token(token)
                .map_err(|e| row_error(e.to_string()))?;
            values.push(value);
        }

        let token = &record[width - 1];
        let label = schema
            .encode_label(token, options)
            .ok_or_else(|| row_error(format!("invalid class label '{}'", token)))?;
        labels.push(label);
    }

    let rows = labels.len();
    let values = Array2::from_shape_vec((rows, schema.len()), values)?;
    let labels = Array1::from_vec(labels);

    tracing::debug!(
        "Parsed {} rows x {} features from {}",
        rows,
        schema.len(),
        source
    );

    Ok(LabeledTable::new(schema, values, labels))
}
