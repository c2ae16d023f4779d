//! Core domain types for Vitrine.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. Everything here can be used from any layer of the
//! application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod scenario;
mod sequencer;
mod theme;

pub use scenario::{DemoScenario, OutputLine, OutputSpan, SpanRole};
pub use sequencer::{SequencerPhase, SequencerTimings};
pub use theme::{ParseThemeError, ResolvedTheme, ThemePreference, ThemeState};
