use crate::prediction::PredictionError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

pub const AGE_RANGE: (u32, u32) = (16, 40);
pub const GPA_RANGE: (f64, f64) = (0.0, 4.0);
pub const SLEEP_HOURS_RANGE: (f64, f64) = (0.0, 12.0);
pub const STUDY_HOURS_RANGE: (f64, f64) = (0.0, 15.0);
pub const SOCIAL_HOURS_RANGE: (f64, f64) = (0.0, 12.0);
pub const LEVEL_RANGE: (u32, u32) = (0, 10);

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

/// Departments offered by the form. `Commerce` is listed here but is not part
/// of the default encoder's fitted set, so it only encodes when the loaded
/// encoder artifact knows it.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum Department {
    #[default]
    Science,
    Arts,
    Commerce,
    Engineering,
    Medical,
}

/// Raw answers collected from the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct StudentProfile {
    #[schemars(title = "Age", description = "Age in years", range(min = 16, max = 40))]
    pub age: u32,

    #[schemars(title = "Gender", description = "Sex")]
    pub gender: Gender,

    #[schemars(title = "Department", description = "Field of study")]
    pub department: Department,

    #[schemars(
        title = "CGPA",
        description = "Cumulative grade point average",
        range(min = 0.0, max = 4.0)
    )]
    pub gpa: f64,

    #[schemars(
        title = "Sleep",
        description = "Hours of sleep per day",
        range(min = 0.0, max = 12.0)
    )]
    pub sleep_hours: f64,

    #[schemars(
        title = "Study",
        description = "Hours of study per day",
        range(min = 0.0, max = 15.0)
    )]
    pub study_hours: f64,

    #[schemars(
        title = "Social media",
        description = "Hours spent on social media per day",
        range(min = 0.0, max = 12.0)
    )]
    pub social_hours: f64,

    #[schemars(
        title = "Physical activity",
        description = "0 = low, 10 = high",
        range(min = 0, max = 10)
    )]
    pub activity_level: u32,

    #[schemars(
        title = "Stress level",
        description = "0 = low, 10 = high",
        range(min = 0, max = 10)
    )]
    pub stress_level: u32,
}

impl Default for StudentProfile {
    fn default() -> Self {
        Self {
            age: 22,
            gender: Gender::Male,
            department: Department::Science,
            gpa: 3.0,
            sleep_hours: 7.0,
            study_hours: 5.0,
            social_hours: 3.0,
            activity_level: 5,
            stress_level: 5,
        }
    }
}

impl StudentProfile {
    /// Checks every numeric answer against the form bounds. NaN never passes.
    pub fn validate(&self) -> Result<(), PredictionError> {
        check_range("age", self.age as f64, AGE_RANGE.0 as f64, AGE_RANGE.1 as f64)?;
        check_range("gpa", self.gpa, GPA_RANGE.0, GPA_RANGE.1)?;
        check_range(
            "sleep_hours",
            self.sleep_hours,
            SLEEP_HOURS_RANGE.0,
            SLEEP_HOURS_RANGE.1,
        )?;
        check_range(
            "study_hours",
            self.study_hours,
            STUDY_HOURS_RANGE.0,
            STUDY_HOURS_RANGE.1,
        )?;
        check_range(
            "social_hours",
            self.social_hours,
            SOCIAL_HOURS_RANGE.0,
            SOCIAL_HOURS_RANGE.1,
        )?;
        check_range(
            "activity_level",
            self.activity_level as f64,
            LEVEL_RANGE.0 as f64,
            LEVEL_RANGE.1 as f64,
        )?;
        check_range(
            "stress_level",
            self.stress_level as f64,
            LEVEL_RANGE.0 as f64,
            LEVEL_RANGE.1 as f64,
        )
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), PredictionError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(PredictionError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::{FieldKind, form_specs, schema_for};
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn defaults_match_the_form() {
        let p = StudentProfile::default();
        assert_eq!(p.age, 22);
        assert_eq!(p.gender, Gender::Male);
        assert_eq!(p.department, Department::Science);
        assert_eq!(p.gpa, 3.0);
        assert_eq!(p.sleep_hours, 7.0);
        assert_eq!(p.study_hours, 5.0);
        assert_eq!(p.social_hours, 3.0);
        assert_eq!(p.activity_level, 5);
        assert_eq!(p.stress_level, 5);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn bounds_are_inclusive() {
        let p = StudentProfile {
            age: 40,
            gpa: 4.0,
            sleep_hours: 0.0,
            study_hours: 15.0,
            social_hours: 12.0,
            activity_level: 10,
            stress_level: 0,
            ..StudentProfile::default()
        };
        assert!(p.validate().is_ok());
    }

    #[test]
    fn out_of_range_names_the_field() {
        let p = StudentProfile {
            age: 15,
            ..StudentProfile::default()
        };
        match p.validate() {
            Err(PredictionError::OutOfRange { field, min, max, .. }) => {
                assert_eq!(field, "age");
                assert_eq!((min, max), (16.0, 40.0));
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }

        let p = StudentProfile {
            stress_level: 11,
            ..StudentProfile::default()
        };
        assert!(matches!(
            p.validate(),
            Err(PredictionError::OutOfRange {
                field: "stress_level",
                ..
            })
        ));
    }

    #[test]
    fn nan_is_rejected() {
        let p = StudentProfile {
            sleep_hours: f64::NAN,
            ..StudentProfile::default()
        };
        assert!(matches!(
            p.validate(),
            Err(PredictionError::OutOfRange {
                field: "sleep_hours",
                ..
            })
        ));
    }

    #[test]
    fn enum_labels_round_trip_through_strum_and_serde() {
        for d in Department::iter() {
            let label: &'static str = d.into();
            assert_eq!(Department::from_str(label).unwrap(), d);
            assert_eq!(serde_json::to_value(d).unwrap(), label);
        }
        assert_eq!(Gender::iter().count(), 2);
        assert_eq!(Department::iter().count(), 5);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let p: StudentProfile = serde_json::from_str(r#"{"age": 30, "gender": "Female"}"#).unwrap();
        assert_eq!(p.age, 30);
        assert_eq!(p.gender, Gender::Female);
        assert_eq!(p.department, Department::Science);
        assert_eq!(p.stress_level, 5);
    }

    #[test]
    fn schema_bounds_agree_with_validation() {
        let specs = form_specs(&schema_for::<StudentProfile>()).unwrap();
        let bounds = |name: &str| {
            let s = specs.iter().find(|s| s.name == name).unwrap();
            (s.min, s.max)
        };
        assert_eq!(bounds("age"), (Some(16.0), Some(40.0)));
        assert_eq!(bounds("gpa"), (Some(GPA_RANGE.0), Some(GPA_RANGE.1)));
        assert_eq!(bounds("study_hours"), (Some(0.0), Some(15.0)));
        assert_eq!(bounds("stress_level"), (Some(0.0), Some(10.0)));

        let dept = specs.iter().find(|s| s.name == "department").unwrap();
        assert_eq!(dept.kind, FieldKind::Choice);
        assert_eq!(
            dept.options,
            vec!["Science", "Arts", "Commerce", "Engineering", "Medical"]
        );
    }
}
