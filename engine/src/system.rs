//! System color-scheme signal.
//!
//! Terminals have no change event for this, so the binary polls
//! [`SystemScheme::prefers_dark`] each frame and treats an observed flip as
//! the change notification.

use std::env;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A boolean "system prefers dark" signal, observable synchronously.
pub trait SystemScheme {
    fn prefers_dark(&self) -> bool;
}

/// Reads the `COLORFGBG` convention some terminals export.
///
/// The last `;`-separated field is the background color index; 7 (white) and
/// 15 (bright white) indicate a light background. Anything else, including an
/// unset variable, is treated as dark - the common terminal default.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvScheme;

impl EnvScheme {
    fn background_is_light(value: &str) -> bool {
        matches!(value.rsplit(';').next().map(str::trim), Some("7" | "15"))
    }
}

impl SystemScheme for EnvScheme {
    fn prefers_dark(&self) -> bool {
        match env::var("COLORFGBG") {
            Ok(value) => !Self::background_is_light(&value),
            Err(_) => true,
        }
    }
}

/// Constant signal for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedScheme {
    dark: bool,
}

impl FixedScheme {
    #[must_use]
    pub fn dark() -> Self {
        Self { dark: true }
    }

    #[must_use]
    pub fn light() -> Self {
        Self { dark: false }
    }
}

impl SystemScheme for FixedScheme {
    fn prefers_dark(&self) -> bool {
        self.dark
    }
}

/// Flippable shared signal, for tests that simulate a system change.
#[derive(Debug, Clone, Default)]
pub struct SharedScheme {
    dark: Arc<AtomicBool>,
}

impl SharedScheme {
    #[must_use]
    pub fn new(dark: bool) -> Self {
        Self {
            dark: Arc::new(AtomicBool::new(dark)),
        }
    }

    pub fn set_dark(&self, dark: bool) {
        self.dark.store(dark, Ordering::Relaxed);
    }
}

impl SystemScheme for SharedScheme {
    fn prefers_dark(&self) -> bool {
        self.dark.load(Ordering::Relaxed)
    }
}
