//! Demo view state: what the sequencer has staged for rendering.
//!
//! The sequencer task mutates through [`SharedDemoView`]; the render loop
//! takes a snapshot each frame. Critical sections are a few field writes, so
//! a std mutex is fine on both sides.

use std::sync::{Arc, Mutex, PoisonError};

use vitrine_engine::DemoStage;
use vitrine_types::OutputLine;

/// Snapshot of the demo region.
#[derive(Debug, Clone)]
pub struct DemoViewState {
    /// Command text typed so far.
    pub typed: String,
    /// Whether the block cursor renders after the typed text.
    pub cursor_visible: bool,
    /// Revealed output lines (empty until the reveal step).
    pub output: Vec<OutputLine>,
    /// False while the reveal transition is still in flight; unsettled output
    /// renders dimmed.
    pub settled: bool,
}

impl Default for DemoViewState {
    fn default() -> Self {
        Self {
            typed: String::new(),
            cursor_visible: true,
            output: Vec::new(),
            settled: false,
        }
    }
}

/// Cloneable handle shared between the sequencer task and the render loop.
#[derive(Debug, Clone, Default)]
pub struct SharedDemoView {
    state: Arc<Mutex<DemoViewState>>,
}

impl SharedDemoView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn snapshot(&self) -> DemoViewState {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DemoViewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DemoStage for SharedDemoView {
    fn clear(&mut self) {
        let mut state = self.lock();
        state.typed.clear();
        state.output.clear();
        state.cursor_visible = true;
        state.settled = false;
    }

    fn push_command_char(&mut self, ch: char) {
        self.lock().typed.push(ch);
    }

    fn hide_cursor(&mut self) {
        self.lock().cursor_visible = false;
    }

    fn reveal_output(&mut self, output: &[OutputLine]) {
        let mut state = self.lock();
        state.output = output.to_vec();
        state.settled = false;
    }

    fn settle_output(&mut self) {
        self.lock().settled = true;
    }
}

#[cfg(test)]
mod tests {
    use vitrine_engine::DemoStage;
    use vitrine_types::OutputLine;

    use super::SharedDemoView;

    #[test]
    fn stage_calls_mutate_the_shared_snapshot() {
        let mut view = SharedDemoView::new();
        let observer = view.clone();

        view.push_command_char('h');
        view.push_command_char('i');
        assert_eq!(observer.snapshot().typed, "hi");
        assert!(observer.snapshot().cursor_visible);
        assert!(observer.snapshot().output.is_empty());

        view.hide_cursor();
        view.reveal_output(&[OutputLine::plain("done")]);
        let snap = observer.snapshot();
        assert!(!snap.cursor_visible);
        assert_eq!(snap.output.len(), 1);
        assert!(!snap.settled, "output is unsettled until the transition ends");

        view.settle_output();
        assert!(observer.snapshot().settled);
    }

    #[test]
    fn clear_resets_everything_and_shows_cursor() {
        let mut view = SharedDemoView::new();
        view.push_command_char('x');
        view.hide_cursor();
        view.reveal_output(&[OutputLine::plain("out")]);
        view.settle_output();

        view.clear();
        let snap = view.snapshot();
        assert!(snap.typed.is_empty());
        assert!(snap.output.is_empty());
        assert!(snap.cursor_visible);
        assert!(!snap.settled);
    }
}
