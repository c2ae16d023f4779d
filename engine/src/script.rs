//! Built-in demo script.
//!
//! Three scenarios showing the advertised CLI in its main modes: a plain
//! interactive launch, read-only plan mode, and a one-shot prompt run.

use vitrine_types::{DemoScenario, OutputLine, OutputSpan, SpanRole};

/// Install command offered by the copy control.
pub const INSTALL_COMMAND: &str = "cargo install driftwood";

fn line(spans: Vec<OutputSpan>) -> OutputLine {
    OutputLine(spans)
}

fn span(role: SpanRole, text: &str) -> OutputSpan {
    OutputSpan::new(role, text)
}

/// The default scenario list, in playback order.
#[must_use]
pub fn builtin_script() -> Vec<DemoScenario> {
    vec![
        DemoScenario::new(
            "driftwood",
            vec![
                line(vec![span(SpanRole::Muted, "driftwood v1.0.0")]),
                line(vec![
                    span(SpanRole::Prompt, "You:"),
                    span(SpanRole::Plain, " Create a todo app with React"),
                ]),
                line(vec![
                    span(SpanRole::Agent, "Agent:"),
                    span(SpanRole::Plain, " I'll create a React todo app for you."),
                ]),
                line(vec![
                    span(SpanRole::Tool, "write_file"),
                    span(SpanRole::ToolArg, " src/App.tsx"),
                ]),
            ],
        ),
        DemoScenario::new(
            "driftwood --mode plan",
            vec![
                line(vec![span(SpanRole::Muted, "Plan Mode - Read Only")]),
                line(vec![
                    span(SpanRole::Prompt, "You:"),
                    span(SpanRole::Plain, " Analyze this codebase structure"),
                ]),
                line(vec![
                    span(SpanRole::Agent, "Agent:"),
                    span(SpanRole::Plain, " Analyzing project architecture..."),
                ]),
                line(vec![
                    span(SpanRole::Success, "✓"),
                    span(SpanRole::Plain, " Found 12 components"),
                ]),
                line(vec![
                    span(SpanRole::Success, "✓"),
                    span(SpanRole::Plain, " 3 API routes detected"),
                ]),
            ],
        ),
        DemoScenario::new(
            "driftwood run \"Fix the login bug\"",
            vec![
                line(vec![span(SpanRole::Muted, "Running single prompt...")]),
                line(vec![
                    span(SpanRole::Agent, "Agent:"),
                    span(SpanRole::Plain, " Found issue in auth.ts line 42"),
                ]),
                line(vec![
                    span(SpanRole::Tool, "edit_file"),
                    span(SpanRole::ToolArg, " src/auth.ts"),
                ]),
                line(vec![
                    span(SpanRole::Success, "✓"),
                    span(SpanRole::Plain, " Bug fixed successfully"),
                ]),
            ],
        ),
    ]
}
