//! Typed feature model
//!
//! A [`Feature`] describes one column of a C4.5 dataset. Every value a
//! feature can take has a canonical `f64` encoding used by numeric code:
//!
//! - **BINARY**: `false` → `0.0`, `true` → `1.0`
//! - **NOMINAL**: the 1-based ordinal of the label in declaration order
//! - **CONTINUOUS**: the number itself (NaN marks a missing value)

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while building features or converting their values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeatureError {
    #[error("Invalid feature type: {0}")]
    InvalidFeatureType(String),

    #[error("Feature name must not be empty")]
    EmptyName,

    #[error("Nominal feature '{feature}' requires a non-empty list of values")]
    MissingNominalValues { feature: String },

    #[error("{ftype} feature '{feature}' must not declare values")]
    UnexpectedValues { feature: String, ftype: FeatureType },

    #[error("Nominal feature '{feature}' declares '{value}' more than once")]
    DuplicateNominalValue { feature: String, value: String },

    #[error("Unknown value for nominal feature '{feature}': {value}")]
    UnknownNominalValue { feature: String, value: String },

    #[error("Invalid binary encoding for feature '{feature}': {value}")]
    InvalidBinaryEncoding { feature: String, value: String },

    #[error("Invalid continuous value for feature '{feature}': {value}")]
    InvalidContinuousValue { feature: String, value: String },
}

impl From<Infallible> for FeatureError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Kind of a feature
///
/// Ordered by declaration: `Binary < Nominal < Continuous`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum FeatureType {
    Binary,
    Nominal,
    Continuous,
}

impl FeatureType {
    /// All feature types in declaration order
    pub const ALL: [FeatureType; 3] = [
        FeatureType::Binary,
        FeatureType::Nominal,
        FeatureType::Continuous,
    ];

    /// Upper-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureType::Binary => "BINARY",
            FeatureType::Nominal => "NOMINAL",
            FeatureType::Continuous => "CONTINUOUS",
        }
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for FeatureType {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        FeatureType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| FeatureError::InvalidFeatureType(name.to_string()))
    }
}

impl TryFrom<&str> for FeatureType {
    type Error = FeatureError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for FeatureType {
    type Error = FeatureError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FeatureType> for &'static str {
    fn from(ftype: FeatureType) -> Self {
        ftype.as_str()
    }
}

/// A native feature value
///
/// This is the input accepted by [`Feature::to_float`] and the output of
/// [`Feature::from_float`]. Which variants are meaningful depends on the
/// feature type; the canonical forms are `Bool` for BINARY, `Label` for
/// NOMINAL and `Float` for CONTINUOUS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Label(String),
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Bool(b) => write!(f, "{}", b),
            FeatureValue::Int(i) => write!(f, "{}", i),
            FeatureValue::Float(x) => write!(f, "{}", x),
            FeatureValue::Label(s) => f.write_str(s),
        }
    }
}

impl From<bool> for FeatureValue {
    fn from(value: bool) -> Self {
        FeatureValue::Bool(value)
    }
}

impl From<i32> for FeatureValue {
    fn from(value: i32) -> Self {
        FeatureValue::Int(value.into())
    }
}

impl From<i64> for FeatureValue {
    fn from(value: i64) -> Self {
        FeatureValue::Int(value)
    }
}

impl From<f64> for FeatureValue {
    fn from(value: f64) -> Self {
        FeatureValue::Float(value)
    }
}

impl From<&str> for FeatureValue {
    fn from(value: &str) -> Self {
        FeatureValue::Label(value.to_string())
    }
}

impl From<String> for FeatureValue {
    fn from(value: String) -> Self {
        FeatureValue::Label(value)
    }
}

impl From<&FeatureValue> for FeatureValue {
    fn from(value: &FeatureValue) -> Self {
        value.clone()
    }
}

/// Serialized form of a [`Feature`]
///
/// Deserializing a feature goes through [`Feature::new`], so the nominal
/// values invariant holds for features read from JSON or TOML too.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureSpec {
    pub name: String,
    pub ftype: FeatureType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

/// One column of a dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "FeatureSpec", into = "FeatureSpec")]
pub struct Feature {
    name: String,
    ftype: FeatureType,
    /// Nominal labels in declaration order; empty unless NOMINAL
    values: Vec<String>,
    /// Label → 1-based ordinal
    ordinals: HashMap<String, usize>,
}

impl Feature {
    /// Create a feature
    ///
    /// `ftype` may be a [`FeatureType`] or its case-insensitive name.
    /// `values` must be a non-empty list of unique labels for NOMINAL
    /// features and absent (or empty) for every other type.
    pub fn new<T>(
        name: impl Into<String>,
        ftype: T,
        values: Option<Vec<String>>,
    ) -> Result<Self, FeatureError>
    where
        T: TryInto<FeatureType>,
        FeatureError: From<T::Error>,
    {
        let name = name.into();
        let ftype = ftype.try_into()?;

        if name.trim().is_empty() {
            return Err(FeatureError::EmptyName);
        }

        let values = values.unwrap_or_default();
        match ftype {
            FeatureType::Nominal if values.is_empty() => {
                return Err(FeatureError::MissingNominalValues { feature: name });
            }
            FeatureType::Binary | FeatureType::Continuous if !values.is_empty() => {
                return Err(FeatureError::UnexpectedValues {
                    feature: name,
                    ftype,
                });
            }
            _ => {}
        }

        let mut ordinals = HashMap::with_capacity(values.len());
        for (i, value) in values.iter().enumerate() {
            if ordinals.insert(value.clone(), i + 1).is_some() {
                return Err(FeatureError::DuplicateNominalValue {
                    feature: name,
                    value: value.clone(),
                });
            }
        }

        Ok(Self {
            name,
            ftype,
            values,
            ordinals,
        })
    }

    /// Create a BINARY feature
    pub fn binary(name: impl Into<String>) -> Result<Self, FeatureError> {
        Self::new(name, FeatureType::Binary, None)
    }

    /// Create a CONTINUOUS feature
    pub fn continuous(name: impl Into<String>) -> Result<Self, FeatureError> {
        Self::new(name, FeatureType::Continuous, None)
    }

    /// Create a NOMINAL feature from its labels, in ordinal order
    pub fn nominal<I, S>(name: impl Into<String>, values: I) -> Result<Self, FeatureError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        Self::new(name, FeatureType::Nominal, Some(values))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ftype(&self) -> FeatureType {
        self.ftype
    }

    /// Declared nominal labels (empty for BINARY and CONTINUOUS)
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Number of declared nominal labels
    pub fn cardinality(&self) -> usize {
        self.values.len()
    }

    pub fn is_binary(&self) -> bool {
        self.ftype == FeatureType::Binary
    }

    pub fn is_nominal(&self) -> bool {
        self.ftype == FeatureType::Nominal
    }

    pub fn is_continuous(&self) -> bool {
        self.ftype == FeatureType::Continuous
    }

    /// 1-based ordinal of a nominal label
    pub fn ordinal(&self, label: &str) -> Option<usize> {
        self.ordinals.get(label).copied()
    }

    /// Nominal label at a 1-based ordinal
    pub fn label(&self, ordinal: usize) -> Option<&str> {
        ordinal
            .checked_sub(1)
            .and_then(|i| self.values.get(i))
            .map(String::as_str)
    }

    /// Convert a native value to its canonical float encoding
    pub fn to_float(&self, value: impl Into<FeatureValue>) -> Result<f64, FeatureError> {
        match value.into() {
            FeatureValue::Label(label) => self.encode_token(&label),
            FeatureValue::Bool(b) => match self.ftype {
                FeatureType::Binary => Ok(if b { 1.0 } else { 0.0 }),
                FeatureType::Nominal => Err(self.unknown_nominal(b)),
                FeatureType::Continuous => Err(FeatureError::InvalidContinuousValue {
                    feature: self.name.clone(),
                    value: b.to_string(),
                }),
            },
            FeatureValue::Int(i) => match self.ftype {
                FeatureType::Binary => match i {
                    0 => Ok(0.0),
                    1 => Ok(1.0),
                    _ => Err(self.invalid_binary(i)),
                },
                FeatureType::Nominal => usize::try_from(i)
                    .ok()
                    .filter(|&k| self.label(k).is_some())
                    .map(|k| k as f64)
                    .ok_or_else(|| self.unknown_nominal(i)),
                FeatureType::Continuous => Ok(i as f64),
            },
            FeatureValue::Float(x) => match self.ftype {
                FeatureType::Binary if x == 0.0 => Ok(0.0),
                FeatureType::Binary if x == 1.0 => Ok(1.0),
                FeatureType::Binary => Err(self.invalid_binary(x)),
                FeatureType::Nominal => self
                    .nominal_ordinal(x)
                    .map(|k| k as f64)
                    .ok_or_else(|| self.unknown_nominal(x)),
                FeatureType::Continuous => Ok(x),
            },
        }
    }

    /// Convert a canonical float encoding back to its native value
    pub fn from_float(&self, value: f64) -> Result<FeatureValue, FeatureError> {
        match self.ftype {
            FeatureType::Binary if value == 0.0 => Ok(FeatureValue::Bool(false)),
            FeatureType::Binary if value == 1.0 => Ok(FeatureValue::Bool(true)),
            FeatureType::Binary => Err(self.invalid_binary(value)),
            FeatureType::Nominal => self
                .nominal_ordinal(value)
                .and_then(|k| self.label(k))
                .map(|label| FeatureValue::Label(label.to_string()))
                .ok_or_else(|| self.unknown_nominal(value)),
            FeatureType::Continuous => Ok(FeatureValue::Float(value)),
        }
    }

    /// Encode a raw textual token as read from a `.data` file
    ///
    /// Nominal tokens must be declared labels; ordinals are only accepted
    /// as `Int`/`Float` values through [`Feature::to_float`].
    pub fn encode_token(&self, token: &str) -> Result<f64, FeatureError> {
        match self.ftype {
            FeatureType::Binary => {
                let token = token.trim();
                if token == "0" || token.eq_ignore_ascii_case("false") {
                    Ok(0.0)
                } else if token == "1" || token.eq_ignore_ascii_case("true") {
                    Ok(1.0)
                } else {
                    Err(self.invalid_binary(token))
                }
            }
            FeatureType::Nominal => self
                .ordinal(token)
                .map(|k| k as f64)
                .ok_or_else(|| self.unknown_nominal(token)),
            FeatureType::Continuous => {
                token
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| FeatureError::InvalidContinuousValue {
                        feature: self.name.clone(),
                        value: token.to_string(),
                    })
            }
        }
    }

    fn nominal_ordinal(&self, value: f64) -> Option<usize> {
        if !value.is_finite() || value.fract() != 0.0 || value < 1.0 {
            return None;
        }
        let k = value as usize;
        (k <= self.values.len()).then_some(k)
    }

    fn unknown_nominal(&self, value: impl fmt::Display) -> FeatureError {
        FeatureError::UnknownNominalValue {
            feature: self.name.clone(),
            value: value.to_string(),
        }
    }

    fn invalid_binary(&self, value: impl fmt::Display) -> FeatureError {
        FeatureError::InvalidBinaryEncoding {
            feature: self.name.clone(),
            value: value.to_string(),
        }
    }

    fn sort_key(&self) -> (FeatureType, &str, &[String]) {
        (self.ftype, &self.name, &self.values)
    }
}

impl PartialEq for Feature {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl Eq for Feature {}

impl PartialOrd for Feature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Feature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ftype {
            FeatureType::Nominal => write!(f, "{}: {}", self.name, self.values.join(", ")),
            ftype => write!(f, "{}: {}", self.name, ftype.as_str().to_lowercase()),
        }
    }
}

impl TryFrom<FeatureSpec> for Feature {
    type Error = FeatureError;

    fn try_from(spec: FeatureSpec) -> Result<Self, Self::Error> {
        Feature::new(spec.name, spec.ftype, spec.values)
    }
}

impl From<Feature> for FeatureSpec {
    fn from(feature: Feature) -> Self {
        let values = feature.is_nominal().then_some(feature.values);
        FeatureSpec {
            name: feature.name,
            ftype: feature.ftype,
            values,
        }
    }
}
