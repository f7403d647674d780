use std::fmt::{Display, Formatter};

/// Number of columns the scaler and classifier were fitted on.
pub const FEATURE_COUNT: usize = 10;

/// Training-time column order. The classifier only sees positions, so this
/// order is part of the artifact contract.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Student_ID",
    "Age",
    "Gender",
    "Department",
    "CGPA",
    "Sleep_Duration",
    "Study_Hours",
    "Social_Media_Hours",
    "Physical_Activity",
    "Stress_Level",
];

/// Value placed in the `Student_ID` column. The model never uses it
/// logically, but the column still has to be there.
pub const PLACEHOLDER_ID: f64 = 0.0;

/// One encoded prediction request, before scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        FEATURE_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn value_of(&self, name: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| self.values[i])
    }
}

impl Display for FeatureVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, (name, v)) in FEATURE_NAMES.iter().zip(self.values.iter()).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}={v}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_column_name() {
        let v = FeatureVector::new([0.0, 22.0, 1.0, 4.0, 3.0, 7.0, 5.0, 3.0, 5.0, 5.0]);
        assert_eq!(v.len(), 10);
        assert_eq!(v.value_of("Age"), Some(22.0));
        assert_eq!(v.value_of("Stress_Level"), Some(5.0));
        assert_eq!(v.value_of("Student_ID"), Some(PLACEHOLDER_ID));
        assert_eq!(v.value_of("Shoe_Size"), None);
    }

    #[test]
    fn display_names_every_column() {
        let v = FeatureVector::new([0.0; FEATURE_COUNT]);
        let s = v.to_string();
        for name in FEATURE_NAMES {
            assert!(s.contains(name), "missing {name} in {s}");
        }
    }
}
