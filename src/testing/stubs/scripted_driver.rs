use crate::ui::cli::drivers::PromptDriver;
use anyhow::{Result, bail};
use std::cell::RefCell;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    /// Accept whatever the prompt offers as default.
    Default,
    Bool(bool),
    Text(String),
    Integer(u64),
    Number(f64),
    Pick(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AskedPrompt {
    pub title: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub options: Vec<String>,
    pub default: Option<Answer>,
}

/// Replays queued answers and records every prompt it was shown. Once the
/// queue runs dry every prompt gets its default. Out-of-bounds answers are
/// refused the way the interactive validators would refuse them.
pub struct ScriptedDriver {
    answers: RefCell<VecDeque<Answer>>,
    asked: RefCell<Vec<AskedPrompt>>,
}

impl ScriptedDriver {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into()),
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<AskedPrompt> {
        self.asked.borrow().clone()
    }

    fn next(&self, prompt: AskedPrompt) -> Answer {
        self.asked.borrow_mut().push(prompt);
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or(Answer::Default)
    }
}

fn check_bounds(title: &str, x: f64, min: Option<f64>, max: Option<f64>) -> Result<()> {
    if min.is_some_and(|lo| x < lo) || max.is_some_and(|hi| x > hi) {
        bail!("{title}: {x} is out of bounds");
    }
    Ok(())
}

impl PromptDriver for ScriptedDriver {
    fn ask_bool(&self, title: &str, _help: &str, default: bool) -> Result<bool> {
        let prompt = AskedPrompt {
            title: title.into(),
            min: None,
            max: None,
            options: vec![],
            default: Some(Answer::Bool(default)),
        };
        match self.next(prompt) {
            Answer::Default => Ok(default),
            Answer::Bool(b) => Ok(b),
            other => bail!("{title}: expected a bool answer, got {other:?}"),
        }
    }

    fn ask_string(&self, title: &str, _help: &str, default: &str) -> Result<String> {
        let prompt = AskedPrompt {
            title: title.into(),
            min: None,
            max: None,
            options: vec![],
            default: Some(Answer::Text(default.into())),
        };
        match self.next(prompt) {
            Answer::Default => Ok(default.into()),
            Answer::Text(s) => Ok(s),
            other => bail!("{title}: expected a text answer, got {other:?}"),
        }
    }

    fn ask_u64(
        &self,
        title: &str,
        _help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        let (min, max) = (min.map(|x| x as f64), max.map(|x| x as f64));
        let prompt = AskedPrompt {
            title: title.into(),
            min,
            max,
            options: vec![],
            default: Some(Answer::Integer(default)),
        };
        let x = match self.next(prompt) {
            Answer::Default => default,
            Answer::Integer(n) => n,
            other => bail!("{title}: expected an integer answer, got {other:?}"),
        };
        check_bounds(title, x as f64, min, max)?;
        Ok(x)
    }

    fn ask_f64(
        &self,
        title: &str,
        _help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        let prompt = AskedPrompt {
            title: title.into(),
            min,
            max,
            options: vec![],
            default: Some(Answer::Number(default)),
        };
        let x = match self.next(prompt) {
            Answer::Default => default,
            Answer::Number(x) => x,
            other => bail!("{title}: expected a number answer, got {other:?}"),
        };
        check_bounds(title, x, min, max)?;
        Ok(x)
    }

    fn ask_select(
        &self,
        title: &str,
        _help: &str,
        options: &[String],
        default: usize,
    ) -> Result<usize> {
        let prompt = AskedPrompt {
            title: title.into(),
            min: None,
            max: None,
            options: options.to_vec(),
            default: Some(Answer::Pick(default)),
        };
        let i = match self.next(prompt) {
            Answer::Default => default,
            Answer::Pick(i) => i,
            other => bail!("{title}: expected a pick, got {other:?}"),
        };
        if i >= options.len() {
            bail!("{title}: option {i} does not exist");
        }
        Ok(i)
    }
}
