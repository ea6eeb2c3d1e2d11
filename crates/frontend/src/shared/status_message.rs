//! Result line shown under a form after submission.

use crate::shared::api_error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Text keeps the page color
    Plain,
    Success,
    Failure,
}

impl Tone {
    /// CSS color for the status region, `None` for the page default
    pub fn color(self) -> Option<&'static str> {
        match self {
            Tone::Plain => None,
            Tone::Success => Some("green"),
            Tone::Failure => Some("red"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub tone: Tone,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    /// Map a write outcome onto a status line.
    ///
    /// `colored` selects green/red tones; otherwise both outcomes are plain.
    pub fn from_outcome(outcome: &Result<String, ApiError>, fallback: &str, colored: bool) -> Self {
        let (text, tone) = match outcome {
            Ok(message) => (message.clone(), Tone::Success),
            Err(e) => (e.operator_text(fallback), Tone::Failure),
        };
        Self::new(text, if colored { tone } else { Tone::Plain })
    }

    pub fn style(&self) -> String {
        self.tone
            .color()
            .map(|c| format!("color: {};", c))
            .unwrap_or_default()
    }
}
