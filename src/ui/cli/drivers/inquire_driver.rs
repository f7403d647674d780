use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use inquire::validator::{CustomTypeValidator, Validation};
use inquire::{Confirm, CustomType, CustomUserError, Select, Text};
use std::fmt::Display;

pub struct InquireDriver;

/// Inclusive bound check shared by the integer and number prompts.
fn bounds_validator<T>(min: Option<T>, max: Option<T>) -> Option<impl CustomTypeValidator<T>>
where
    T: PartialOrd + Display + Copy + Send + Sync + 'static,
{
    if min.is_none() && max.is_none() {
        return None;
    }
    Some(move |x: &T| -> Result<Validation, CustomUserError> {
        let msg = match (min, max) {
            (Some(lo), Some(hi)) if *x < lo || *x > hi => {
                Some(format!("Must be between {lo} and {hi}"))
            }
            (Some(lo), None) if *x < lo => Some(format!("Must be ≥ {lo}")),
            (None, Some(hi)) if *x > hi => Some(format!("Must be ≤ {hi}")),
            _ => None,
        };
        Ok(match msg {
            Some(m) => Validation::Invalid(m.into()),
            None => Validation::Valid,
        })
    })
}

fn range_hint<T: Display>(help: &str, min: Option<T>, max: Option<T>) -> String {
    match (min, max) {
        (Some(lo), Some(hi)) if help.is_empty() => format!("{lo} – {hi}"),
        (Some(lo), Some(hi)) => format!("{help} ({lo} – {hi})"),
        _ => help.to_string(),
    }
}

impl PromptDriver for InquireDriver {
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new(title)
            .with_default(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        Ok(Text::new(title)
            .with_initial_value(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_u64(
        &self,
        title: &str,
        help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        let hint = range_hint(help, min, max);
        let mut q = CustomType::<u64>::new(title)
            .with_default(default)
            .with_help_message(&hint);
        if let Some(v) = bounds_validator(min, max) {
            q = q.with_validator(v);
        }
        Ok(q.prompt()?)
    }

    fn ask_f64(
        &self,
        title: &str,
        help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        let hint = range_hint(help, min, max);
        let mut q = CustomType::<f64>::new(title)
            .with_default(default)
            .with_help_message(&hint);
        if let Some(v) = bounds_validator(min, max) {
            q = q.with_validator(v);
        }
        Ok(q.prompt()?)
    }

    fn ask_select(
        &self,
        title: &str,
        help: &str,
        options: &[String],
        default: usize,
    ) -> Result<usize> {
        let mut q = Select::new(title, options.to_vec()).with_starting_cursor(default);
        if !help.is_empty() {
            q = q.with_help_message(help);
        }
        Ok(q.raw_prompt()?.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_hint_appends_bounds() {
        assert_eq!(
            range_hint("Hours of sleep", Some(0.0), Some(12.0)),
            "Hours of sleep (0 – 12)"
        );
        assert_eq!(range_hint("", Some(16u64), Some(40u64)), "16 – 40");
        assert_eq!(range_hint::<u64>("free", None, None), "free");
    }

    #[test]
    fn no_bounds_no_validator() {
        assert!(bounds_validator::<u64>(None, None).is_none());
        assert!(bounds_validator(Some(0.0), Some(1.0)).is_some());
    }
}
