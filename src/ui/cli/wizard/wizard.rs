use anyhow::{Context, Result, anyhow};
use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::core::StudentProfile;
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::{FieldKind, FieldSpec, form_specs, schema_for};

/// Asks one question per schema field of `T` and deserializes the answers.
/// Prompt defaults come from the schema, falling back to `T::default()`.
pub fn prompt_form<T, D>(driver: &D) -> Result<T>
where
    T: Serialize + DeserializeOwned + JsonSchema + Default,
    D: PromptDriver,
{
    let schema = schema_for::<T>();
    let specs = form_specs(&schema)?;
    let defaults = serde_json::to_value(T::default())?;

    let mut params = Map::new();
    for s in specs {
        let init = s.default.clone().or_else(|| defaults.get(&s.name).cloned());
        let val = ask_field(driver, &s, init)?;
        params.insert(s.name.clone(), val);
    }

    serde_json::from_value(Value::Object(params)).context("answers do not form a valid profile")
}

fn ask_field<D: PromptDriver>(driver: &D, s: &FieldSpec, init: Option<Value>) -> Result<Value> {
    let help = s.description.as_deref().unwrap_or("");
    Ok(match s.kind {
        FieldKind::Boolean => {
            let def = init.and_then(|v| v.as_bool()).unwrap_or(false);
            Value::Bool(driver.ask_bool(&s.title, help, def)?)
        }
        FieldKind::String => {
            let def = init
                .and_then(|v| v.as_str().map(|s| s.to_string()))
                .unwrap_or_default();
            Value::String(driver.ask_string(&s.title, help, &def)?)
        }
        FieldKind::Integer => {
            let def = init.and_then(|v| v.as_u64()).unwrap_or(0);
            Value::from(driver.ask_u64(
                &s.title,
                help,
                def,
                s.min.map(|x| x as u64),
                s.max.map(|x| x as u64),
            )?)
        }
        FieldKind::Number => {
            let def = init.and_then(|v| v.as_f64()).unwrap_or(0.0);
            Value::from(driver.ask_f64(&s.title, help, def, s.min, s.max)?)
        }
        FieldKind::Choice => {
            let def = init
                .as_ref()
                .and_then(|v| v.as_str())
                .and_then(|label| s.options.iter().position(|o| o == label))
                .unwrap_or(0);
            let picked = driver.ask_select(&s.title, help, &s.options, def)?;
            let label = s
                .options
                .get(picked)
                .ok_or_else(|| anyhow!("option {picked} out of range for {}", s.title))?;
            Value::String(label.clone())
        }
    })
}

/// The student form.
pub fn collect_profile<D: PromptDriver>(driver: &D) -> Result<StudentProfile> {
    prompt_form::<StudentProfile, D>(driver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Department, Gender};
    use crate::testing::{Answer, ScriptedDriver};

    #[test]
    fn accepting_every_default_yields_the_default_profile() {
        let driver = ScriptedDriver::new(vec![]);
        let p = collect_profile(&driver).unwrap();
        assert_eq!(p, StudentProfile::default());
        assert_eq!(driver.asked().len(), 9);
    }

    #[test]
    fn answers_land_in_the_right_fields() {
        let driver = ScriptedDriver::new(vec![
            Answer::Integer(30),
            Answer::Pick(1),
            Answer::Pick(2),
            Answer::Number(2.5),
            Answer::Number(5.0),
            Answer::Number(9.0),
            Answer::Number(6.5),
            Answer::Integer(1),
            Answer::Integer(9),
        ]);
        let p = collect_profile(&driver).unwrap();
        assert_eq!(
            p,
            StudentProfile {
                age: 30,
                gender: Gender::Female,
                department: Department::Commerce,
                gpa: 2.5,
                sleep_hours: 5.0,
                study_hours: 9.0,
                social_hours: 6.5,
                activity_level: 1,
                stress_level: 9,
            }
        );
    }

    #[test]
    fn prompts_carry_form_bounds_and_choices() {
        let driver = ScriptedDriver::new(vec![]);
        collect_profile(&driver).unwrap();
        let asked = driver.asked();

        assert_eq!(asked[0].title, "Age");
        assert_eq!((asked[0].min, asked[0].max), (Some(16.0), Some(40.0)));
        assert_eq!(asked[1].options, ["Male", "Female"]);
        assert_eq!(
            asked[2].options,
            ["Science", "Arts", "Commerce", "Engineering", "Medical"]
        );
        assert_eq!(asked[2].default, Some(Answer::Pick(0)));
        assert_eq!((asked[3].min, asked[3].max), (Some(0.0), Some(4.0)));
        assert_eq!(asked[4].default, Some(Answer::Number(7.0)));
        assert_eq!((asked[5].min, asked[5].max), (Some(0.0), Some(15.0)));
        assert_eq!((asked[8].min, asked[8].max), (Some(0.0), Some(10.0)));
    }

    #[test]
    fn out_of_bounds_answer_is_refused() {
        let driver = ScriptedDriver::new(vec![Answer::Integer(12)]);
        assert!(collect_profile(&driver).is_err());
    }

    #[test]
    fn mistyped_script_is_an_error() {
        let driver = ScriptedDriver::new(vec![Answer::Text("twenty".into())]);
        let err = collect_profile(&driver).unwrap_err();
        assert!(err.to_string().contains("Age"), "{err}");
    }
}
