//! Sequencer state and pacing types.

use std::time::Duration;

/// Animation phase of the demo sequencer. Transient, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequencerPhase {
    #[default]
    Idle,
    TypingCommand,
    Pausing,
    RevealingOutput,
    Holding,
}

/// Pacing for one scenario iteration.
///
/// Per-character delay is `type_delay_base` plus a uniform random jitter in
/// `[0, type_delay_jitter)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequencerTimings {
    /// Delay between `start()` and the first scenario.
    pub initial_delay: Duration,
    pub type_delay_base: Duration,
    pub type_delay_jitter: Duration,
    /// Pause between the last typed character and the output reveal.
    pub pause_after_command: Duration,
    /// Length of the reveal transition before the output settles.
    pub reveal_transition: Duration,
    /// How long a fully revealed scenario stays on screen.
    pub hold: Duration,
}

impl Default for SequencerTimings {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(1000),
            type_delay_base: Duration::from_millis(50),
            type_delay_jitter: Duration::from_millis(30),
            pause_after_command: Duration::from_millis(300),
            reveal_transition: Duration::from_millis(300),
            hold: Duration::from_millis(4000),
        }
    }
}

impl SequencerTimings {
    /// All-zero pacing; used by tests to drive the loop without waiting.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            initial_delay: Duration::ZERO,
            type_delay_base: Duration::ZERO,
            type_delay_jitter: Duration::ZERO,
            pause_after_command: Duration::ZERO,
            reveal_transition: Duration::ZERO,
            hold: Duration::ZERO,
        }
    }
}
