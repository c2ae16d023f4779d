//! Demo scenario data: a command to type and the canned output it reveals.
//!
//! Scenarios are defined once at startup and read-only thereafter. Output is
//! structured terminal markup (lines of role-tagged spans) rather than raw
//! styled text, so the rendering layer owns every color decision.

use serde::{Deserialize, Serialize};

/// Semantic role of an output span; the renderer maps roles to styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanRole {
    Plain,
    Muted,
    Prompt,
    Agent,
    Accent,
    Tool,
    ToolArg,
    Success,
}

/// One role-tagged run of text within an output line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSpan {
    pub role: SpanRole,
    pub text: String,
}

impl OutputSpan {
    #[must_use]
    pub fn new(role: SpanRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

/// One line of scenario output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLine(pub Vec<OutputSpan>);

impl OutputLine {
    /// A line containing a single unstyled run of text.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self(vec![OutputSpan::new(SpanRole::Plain, text)])
    }

    #[must_use]
    pub fn spans(&self) -> &[OutputSpan] {
        &self.0
    }
}

/// One canned command + output pair shown by the demo sequencer. Immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoScenario {
    pub command: String,
    pub output: Vec<OutputLine>,
}

impl DemoScenario {
    #[must_use]
    pub fn new(command: impl Into<String>, output: Vec<OutputLine>) -> Self {
        Self {
            command: command.into(),
            output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DemoScenario, OutputLine, OutputSpan, SpanRole};

    #[test]
    fn plain_line_has_one_unstyled_span() {
        let line = OutputLine::plain("hello");
        assert_eq!(line.spans().len(), 1);
        assert_eq!(line.spans()[0].role, SpanRole::Plain);
        assert_eq!(line.spans()[0].text, "hello");
    }

    #[test]
    fn scenario_deserializes_from_toml() {
        let decoded: DemoScenario = toml::from_str(
            r#"
            command = "demo --flag"
            output = [
                [{ role = "prompt", text = "You:" }, { role = "plain", text = " hi" }],
                [{ role = "success", text = "done" }],
            ]
            "#,
        )
        .unwrap();

        assert_eq!(
            decoded,
            DemoScenario::new(
                "demo --flag",
                vec![
                    OutputLine(vec![
                        OutputSpan::new(SpanRole::Prompt, "You:"),
                        OutputSpan::new(SpanRole::Plain, " hi"),
                    ]),
                    OutputLine(vec![OutputSpan::new(SpanRole::Success, "done")]),
                ],
            )
        );
    }
}
