//! Dataset schema: ordered features plus the declared class labels

use serde::{Deserialize, Serialize};
use std::ops::Deref;

use crate::config::ParseOptions;
use crate::feature::Feature;

/// Ordered list of features, one per `.data` column, excluding the label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Features in file declaration order
    features: Vec<Feature>,

    /// Tokens of the class label line of the `.names` file
    #[serde(default)]
    classes: Vec<String>,
}

impl Schema {
    /// Create a schema without declared class labels
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            features,
            classes: Vec::new(),
        }
    }

    /// Set the declared class labels
    pub fn with_classes(mut self, classes: Vec<String>) -> Self {
        self.classes = classes;
        self
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn into_features(self) -> Vec<Feature> {
        self.features
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Get a feature by name
    pub fn feature(&self, name: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.name() == name)
    }

    /// Get a feature's column index by name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.features.iter().position(|f| f.name() == name)
    }

    /// Feature names in column order
    pub fn names(&self) -> Vec<&str> {
        self.features.iter().map(Feature::name).collect()
    }

    /// Number of tokens in a `.data` record: every feature plus the label
    pub fn width(&self) -> usize {
        self.features.len() + 1
    }

    /// Map a raw class label token to `0` or `1`
    ///
    /// The option's negative/positive tokens always keep their meaning,
    /// whatever order the label line lists them in. Other tokens are mapped
    /// by a label line declaring exactly two classes: the first to `0`, the
    /// second to `1`.
    pub fn encode_label(&self, token: &str, options: &ParseOptions) -> Option<i64> {
        let token = token.trim();
        let matches = |labels: &[String]| labels.iter().any(|l| l.eq_ignore_ascii_case(token));
        if matches(&options.negative_labels) {
            return Some(0);
        }
        if matches(&options.positive_labels) {
            return Some(1);
        }

        match self.classes.as_slice() {
            [negative, _] if token == negative => Some(0),
            [_, positive] if token == positive => Some(1),
            _ => None,
        }
    }
}

impl Deref for Schema {
    type Target = [Feature];

    fn deref(&self) -> &Self::Target {
        &self.features
    }
}

impl From<Vec<Feature>> for Schema {
    fn from(features: Vec<Feature>) -> Self {
        Self::new(features)
    }
}

impl PartialEq<[Feature]> for Schema {
    fn eq(&self, other: &[Feature]) -> bool {
        self.features == other
    }
}

impl PartialEq<Vec<Feature>> for Schema {
    fn eq(&self, other: &Vec<Feature>) -> bool {
        &self.features == other
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Schema {
        Schema::new(vec![
            Feature::binary("f1").unwrap(),
            Feature::continuous("f2").unwrap(),
        ])
    }

    #[test]
    fn test_schema_lookup() {
        let schema = schema();
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.width(), 3);
        assert_eq!(schema.index_of("f2"), Some(1));
        assert_eq!(schema.index_of("f3"), None);
        assert!(schema.feature("f1").unwrap().is_binary());
        assert_eq!(schema.names(), vec!["f1", "f2"]);
    }

    #[test]
    fn test_encode_label_defaults() {
        let schema = schema();
        let options = ParseOptions::default();
        assert_eq!(schema.encode_label("0", &options), Some(0));
        assert_eq!(schema.encode_label("True", &options), Some(1));
        assert_eq!(schema.encode_label("maybe", &options), None);
    }

    #[test]
    fn test_encode_label_declared_classes() {
        let schema = schema().with_classes(vec!["bad".to_string(), "good".to_string()]);
        let options = ParseOptions::default();
        assert_eq!(schema.encode_label("bad", &options), Some(0));
        assert_eq!(schema.encode_label(" good ", &options), Some(1));
        // The default tokens still apply
        assert_eq!(schema.encode_label("1", &options), Some(1));
    }

    #[test]
    fn test_encode_label_reversed_classes() {
        // "1, 0" lists the positive class first; 0 and 1 keep their meaning
        let schema = schema().with_classes(vec!["1".to_string(), "0".to_string()]);
        let options = ParseOptions::default();
        assert_eq!(schema.encode_label("1", &options), Some(1));
        assert_eq!(schema.encode_label("0", &options), Some(0));
    }
}
