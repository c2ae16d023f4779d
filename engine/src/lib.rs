//! Core state and orchestration for Vitrine.
//!
//! Two independent components live here: the theme controller (a small
//! preference state machine backed by a persisted value) and the demo
//! sequencer (a timer-driven loop that plays scripted terminal scenarios).
//! Neither touches the other's state; the binary wires both up at startup.

pub mod clipboard;
pub mod config;
pub mod prefs;
pub mod script;
pub mod sequencer;
pub mod system;
pub mod theme;

pub use clipboard::{Clipboard, CopyAction, SystemClipboard};
pub use config::{ConfigError, VitrineConfig, config_dir};
pub use prefs::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use script::{INSTALL_COMMAND, builtin_script};
pub use sequencer::{DemoStage, EmptyScriptError, TerminalDemoSequencer};
pub use system::{EnvScheme, FixedScheme, SharedScheme, SystemScheme};
pub use theme::{ThemeController, resolve};
