//! Demo sequencer: endless, strictly sequential scenario playback.
//!
//! One scenario iteration is: clear the stage, type the command one character
//! at a time, pause, reveal the output, let the reveal transition settle,
//! hold, advance to the next scenario (wrapping). Every step is a suspension
//! point on a tokio timer; nothing in the loop can fail.

use std::time::Duration;

use thiserror::Error;
use vitrine_types::{DemoScenario, OutputLine, SequencerPhase, SequencerTimings};

/// Presentation target the sequencer drives.
///
/// The sequencer only calls these; it never reads presentation state back.
pub trait DemoStage {
    /// Empty the command and output regions and show the cursor.
    fn clear(&mut self);
    /// Append one typed character to the command region.
    fn push_command_char(&mut self, ch: char);
    /// Hide the cursor once the command is fully typed.
    fn hide_cursor(&mut self);
    /// Insert the scenario output in its pre-transition (unsettled) state.
    fn reveal_output(&mut self, output: &[OutputLine]);
    /// Complete the reveal transition.
    fn settle_output(&mut self);
}

#[derive(Debug, Error)]
#[error("demo script must contain at least one scenario")]
pub struct EmptyScriptError;

/// Cycles through scripted scenarios against a [`DemoStage`], forever.
///
/// `run()` consumes the sequencer, so overlapping starts of one instance are
/// unrepresentable.
pub struct TerminalDemoSequencer<S> {
    stage: S,
    scenarios: Vec<DemoScenario>,
    index: usize,
    phase: SequencerPhase,
    timings: SequencerTimings,
}

impl<S: DemoStage> TerminalDemoSequencer<S> {
    pub fn new(
        stage: S,
        scenarios: Vec<DemoScenario>,
        timings: SequencerTimings,
    ) -> Result<Self, EmptyScriptError> {
        if scenarios.is_empty() {
            return Err(EmptyScriptError);
        }
        Ok(Self {
            stage,
            scenarios,
            index: 0,
            phase: SequencerPhase::Idle,
            timings,
        })
    }

    #[must_use]
    pub fn phase(&self) -> SequencerPhase {
        self.phase
    }

    #[must_use]
    pub fn scenario_index(&self) -> usize {
        self.index
    }

    /// Play forever. Begins after the configured initial delay; there is no
    /// termination condition and no error path.
    pub async fn run(mut self) {
        tokio::time::sleep(self.timings.initial_delay).await;
        loop {
            self.play_current().await;
            self.advance();
        }
    }

    /// Play a bounded number of scenario iterations (the loop body of
    /// [`run`], without the initial delay). Exists so tests can drive the
    /// sequencer a finite distance.
    pub async fn run_cycles(&mut self, cycles: usize) {
        for _ in 0..cycles {
            self.play_current().await;
            self.advance();
        }
    }

    async fn play_current(&mut self) {
        // Indexing is safe: `new` rejects empty scripts and `advance` wraps.
        let scenario = self.scenarios[self.index].clone();

        self.phase = SequencerPhase::TypingCommand;
        self.stage.clear();
        for ch in scenario.command.chars() {
            self.stage.push_command_char(ch);
            tokio::time::sleep(self.type_delay()).await;
        }

        self.phase = SequencerPhase::Pausing;
        self.stage.hide_cursor();
        tokio::time::sleep(self.timings.pause_after_command).await;

        self.phase = SequencerPhase::RevealingOutput;
        self.stage.reveal_output(&scenario.output);
        tokio::time::sleep(self.timings.reveal_transition).await;
        self.stage.settle_output();

        self.phase = SequencerPhase::Holding;
        tokio::time::sleep(self.timings.hold).await;
    }

    fn advance(&mut self) {
        self.index = (self.index + 1) % self.scenarios.len();
    }

    /// Base typing delay plus uniform jitter in `[0, type_delay_jitter)`.
    fn type_delay(&self) -> Duration {
        self.timings.type_delay_base + self.timings.type_delay_jitter.mul_f64(rand::random::<f64>())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use vitrine_types::{DemoScenario, OutputLine, SequencerPhase, SequencerTimings};

    use super::{DemoStage, TerminalDemoSequencer};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Clear,
        Char(char),
        HideCursor,
        Reveal(usize),
        Settle,
    }

    #[derive(Clone, Default)]
    struct RecordingStage {
        events: Arc<Mutex<Vec<Event>>>,
    }

    impl RecordingStage {
        fn events(&self) -> Vec<Event> {
            self.events.lock().unwrap().clone()
        }

        fn push(&self, event: Event) {
            self.events.lock().unwrap().push(event);
        }
    }

    impl DemoStage for RecordingStage {
        fn clear(&mut self) {
            self.push(Event::Clear);
        }

        fn push_command_char(&mut self, ch: char) {
            self.push(Event::Char(ch));
        }

        fn hide_cursor(&mut self) {
            self.push(Event::HideCursor);
        }

        fn reveal_output(&mut self, output: &[OutputLine]) {
            self.push(Event::Reveal(output.len()));
        }

        fn settle_output(&mut self) {
            self.push(Event::Settle);
        }
    }

    fn script() -> Vec<DemoScenario> {
        vec![
            DemoScenario::new("ab", vec![OutputLine::plain("first")]),
            DemoScenario::new("cd", vec![OutputLine::plain("one"), OutputLine::plain("two")]),
            DemoScenario::new("e", vec![OutputLine::plain("last")]),
        ]
    }

    #[test]
    fn empty_script_is_rejected() {
        let result =
            TerminalDemoSequencer::new(RecordingStage::default(), vec![], SequencerTimings::immediate());
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn one_iteration_emits_steps_in_order() {
        let stage = RecordingStage::default();
        let mut seq =
            TerminalDemoSequencer::new(stage.clone(), script(), SequencerTimings::immediate())
                .unwrap();

        seq.run_cycles(1).await;

        assert_eq!(
            stage.events(),
            vec![
                Event::Clear,
                Event::Char('a'),
                Event::Char('b'),
                Event::HideCursor,
                Event::Reveal(1),
                Event::Settle,
            ]
        );
        assert_eq!(seq.scenario_index(), 1);
        assert_eq!(seq.phase(), SequencerPhase::Holding);
    }

    #[tokio::test]
    async fn command_is_typed_character_by_character_before_any_output() {
        let stage = RecordingStage::default();
        let mut seq =
            TerminalDemoSequencer::new(stage.clone(), script(), SequencerTimings::immediate())
                .unwrap();

        seq.run_cycles(1).await;

        let events = stage.events();
        let typed: String = events
            .iter()
            .filter_map(|e| match e {
                Event::Char(ch) => Some(*ch),
                _ => None,
            })
            .collect();
        assert_eq!(typed, "ab");

        let reveal_pos = events
            .iter()
            .position(|e| matches!(e, Event::Reveal(_)))
            .unwrap();
        let hide_pos = events.iter().position(|e| *e == Event::HideCursor).unwrap();
        let last_char_pos = events
            .iter()
            .rposition(|e| matches!(e, Event::Char(_)))
            .unwrap();
        assert!(last_char_pos < hide_pos, "cursor hides after typing ends");
        assert!(hide_pos < reveal_pos, "output appears only after the pause");
    }

    #[tokio::test]
    async fn scenario_order_is_cyclic_with_period_n() {
        let stage = RecordingStage::default();
        let script = script();
        let n = script.len();
        let mut seq =
            TerminalDemoSequencer::new(stage.clone(), script, SequencerTimings::immediate())
                .unwrap();

        seq.run_cycles(n).await;
        assert_eq!(seq.scenario_index(), 0, "index wraps after N iterations");

        // Keeps going past the wrap: second lap replays scenario 0.
        seq.run_cycles(1).await;
        assert_eq!(seq.scenario_index(), 1);
        let clears = stage
            .events()
            .iter()
            .filter(|e| **e == Event::Clear)
            .count();
        assert_eq!(clears, n + 1);
    }

    #[tokio::test]
    async fn each_iteration_clears_before_typing() {
        let stage = RecordingStage::default();
        let mut seq =
            TerminalDemoSequencer::new(stage.clone(), script(), SequencerTimings::immediate())
                .unwrap();

        seq.run_cycles(2).await;

        let events = stage.events();
        let mut saw_settle = false;
        for window in events.windows(2) {
            if window[0] == Event::Settle {
                saw_settle = true;
                assert_eq!(window[1], Event::Clear, "next iteration starts with clear");
            }
        }
        assert!(saw_settle);
    }

    #[test]
    fn type_delay_stays_within_jitter_band() {
        let seq = TerminalDemoSequencer::new(
            RecordingStage::default(),
            script(),
            SequencerTimings::default(),
        )
        .unwrap();

        for _ in 0..200 {
            let delay = seq.type_delay();
            assert!(delay >= Duration::from_millis(50));
            assert!(delay < Duration::from_millis(80));
        }
    }
}
