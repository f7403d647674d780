use crate::prediction::PredictionError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const GENDER_FIELD: &str = "Gender";
pub const DEPARTMENT_FIELD: &str = "Department";

const DEFAULT_GENDERS: [&str; 2] = ["Male", "Female"];
const DEFAULT_DEPARTMENTS: [&str; 5] = ["Science", "Engineering", "Business", "Arts", "Medical"];

/// Fitted label encoder.
///
/// `classes` is kept sorted and deduplicated, so the code of a label is its
/// position in alphabetical order, matching the encoders the classifier was
/// trained with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoricalEncoder {
    classes: Vec<String>,
}

impl CategoricalEncoder {
    pub fn fit<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut classes: Vec<String> = labels.into_iter().map(Into::into).collect();
        classes.sort();
        classes.dedup();
        Self { classes }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn transform(&self, label: &str) -> Option<usize> {
        self.classes
            .binary_search_by(|c| c.as_str().cmp(label))
            .ok()
    }

    pub fn inverse_transform(&self, code: usize) -> Option<&str> {
        self.classes.get(code).map(String::as_str)
    }

    /// True when `classes` is strictly ascending, i.e. the artifact was
    /// produced by `fit` and binary search is valid on it.
    pub fn is_well_formed(&self) -> bool {
        !self.classes.is_empty() && self.classes.windows(2).all(|w| w[0] < w[1])
    }
}

/// Field name → fitted encoder, as stored in the encoder artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncoderSet {
    encoders: BTreeMap<String, CategoricalEncoder>,
}

impl EncoderSet {
    /// Encoders written when no encoder artifact exists yet.
    pub fn bootstrap() -> Self {
        let mut set = Self::default();
        set.insert(GENDER_FIELD, CategoricalEncoder::fit(DEFAULT_GENDERS));
        set.insert(DEPARTMENT_FIELD, CategoricalEncoder::fit(DEFAULT_DEPARTMENTS));
        set
    }

    pub fn insert<N: Into<String>>(&mut self, field: N, encoder: CategoricalEncoder) {
        self.encoders.insert(field.into(), encoder);
    }

    pub fn get(&self, field: &str) -> Option<&CategoricalEncoder> {
        self.encoders.get(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.encoders.keys().map(String::as_str)
    }

    pub fn encode(&self, field: &str, label: &str) -> Result<usize, PredictionError> {
        let encoder = self
            .get(field)
            .ok_or_else(|| PredictionError::MissingEncoder(field.to_string()))?;
        encoder
            .transform(label)
            .ok_or_else(|| PredictionError::UnseenCategory {
                field: field.to_string(),
                label: label.to_string(),
                known: encoder.classes().to_vec(),
            })
    }

    /// Name of the first encoder whose classes are empty or unsorted.
    pub fn first_malformed(&self) -> Option<&str> {
        self.encoders
            .iter()
            .find(|(_, e)| !e.is_well_formed())
            .map(|(name, _)| name.as_str())
    }
}
