use crate::prediction::{PredictionResult, RiskLabel};
use std::fmt::{Display, Formatter};

const BOLD: &str = "\x1b[1m";
const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelStyle {
    Success,
    Warning,
}

/// The single result panel shown after a prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPanel {
    pub style: PanelStyle,
    pub headline: &'static str,
    pub score_line: String,
}

impl ResultPanel {
    /// Same panel without colour codes.
    pub fn plain(&self) -> String {
        let icon = match self.style {
            PanelStyle::Success => "✅",
            PanelStyle::Warning => "⚠️",
        };
        format!("{icon} {}\n{}", self.headline, self.score_line)
    }
}

impl From<&PredictionResult> for ResultPanel {
    fn from(result: &PredictionResult) -> Self {
        let (style, headline) = match result.label {
            RiskLabel::Risk => (PanelStyle::Warning, "Depression risk detected"),
            RiskLabel::NoRisk => (PanelStyle::Success, "No sign of depression detected"),
        };
        ResultPanel {
            style,
            headline,
            score_line: format!("Score: {}", result.score),
        }
    }
}

impl Display for ResultPanel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let colour = match self.style {
            PanelStyle::Success => GREEN,
            PanelStyle::Warning => RED,
        };
        let body = self.plain();
        let width = body.lines().map(|l| l.chars().count()).max().unwrap_or(0) + 2;
        writeln!(f, "{colour}┌{}┐{RESET}", "─".repeat(width))?;
        for line in body.lines() {
            let pad = width - 1 - line.chars().count();
            writeln!(f, "{colour}│ {BOLD}{line}{RESET}{}{colour}│{RESET}", " ".repeat(pad))?;
        }
        write!(f, "{colour}└{}┘{RESET}", "─".repeat(width))
    }
}

pub fn render(result: &PredictionResult) -> String {
    ResultPanel::from(result).to_string()
}

pub fn banner() -> String {
    format!(
        "{BOLD}🎓 Student Depression Prediction{RESET}\n{DIM_ITALIC}Risk estimate from student lifestyle answers{RESET}\n"
    )
}
