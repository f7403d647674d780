use crate::core::{
    AGE_RANGE, Department, GPA_RANGE, Gender, LEVEL_RANGE, SLEEP_HOURS_RANGE, SOCIAL_HOURS_RANGE,
    STUDY_HOURS_RANGE, StudentProfile,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strum::IntoEnumIterator;

/// `n` in-bounds profiles drawn from a seeded generator. Roughly one in five
/// picks `Commerce`.
pub fn random_profiles(seed: u64, n: usize) -> Vec<StudentProfile> {
    let mut rng = StdRng::seed_from_u64(seed);
    let genders: Vec<Gender> = Gender::iter().collect();
    let departments: Vec<Department> = Department::iter().collect();

    (0..n)
        .map(|_| StudentProfile {
            age: rng.random_range(AGE_RANGE.0..=AGE_RANGE.1),
            gender: genders[rng.random_range(0..genders.len())],
            department: departments[rng.random_range(0..departments.len())],
            gpa: rng.random_range(GPA_RANGE.0..=GPA_RANGE.1),
            sleep_hours: rng.random_range(SLEEP_HOURS_RANGE.0..=SLEEP_HOURS_RANGE.1),
            study_hours: rng.random_range(STUDY_HOURS_RANGE.0..=STUDY_HOURS_RANGE.1),
            social_hours: rng.random_range(SOCIAL_HOURS_RANGE.0..=SOCIAL_HOURS_RANGE.1),
            activity_level: rng.random_range(LEVEL_RANGE.0..=LEVEL_RANGE.1),
            stress_level: rng.random_range(LEVEL_RANGE.0..=LEVEL_RANGE.1),
        })
        .collect()
}
